//! Two-attempt answer judging.

use crate::error::Result;
use crate::model::{AttemptOutcome, Question};
use crate::traits::Console;

const FIRST_PROMPT: &str = "Your answer: ";
const SECOND_PROMPT: &str = "Your second answer: ";

/// Ask for up to two answers and classify the result.
///
/// Reads exactly one line when the first answer is right and exactly two
/// otherwise. The expected answer is only revealed after the second miss.
pub fn judge(question: &Question, console: &mut dyn Console) -> Result<AttemptOutcome> {
    let first = console.read_line(FIRST_PROMPT)?;
    if question.accepts(&first) {
        console.say("CORRECT")?;
        return Ok(AttemptOutcome::CorrectFirstTry);
    }
    console.say("INCORRECT. Try once more.")?;

    let second = console.read_line(SECOND_PROMPT)?;
    if question.accepts(&second) {
        console.say("CORRECT")?;
        return Ok(AttemptOutcome::CorrectSecondTry);
    }

    console.say("INCORRECT.")?;
    console.say(&format!("The correct answer was {}", question.expected_answer))?;
    Ok(AttemptOutcome::IncorrectBoth)
}
