//! Scripted doubles for testing the quiz engine without a terminal or real
//! randomness.

use std::collections::VecDeque;

use crate::error::{QuizError, Result};
use crate::traits::{ChoiceSource, Console};

/// Replays a fixed sequence of choices, wrapping each into `0..upper`.
///
/// Once the script runs out it keeps returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedChoices {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(&mut self, upper: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().map_or(0, |v| v % upper.max(1))
    }
}

/// A console that answers from a queue and records everything it is shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    reads: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            reads: 0,
        }
    }

    /// Lines printed so far, prompts included.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Number of lines the caller consumed.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Answers still queued.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Whether any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        let answer = self.answers.pop_front().ok_or(QuizError::InputClosed)?;
        self.reads += 1;
        Ok(answer.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_choices_wrap_and_default() {
        let mut choices = ScriptedChoices::new([5, 1]);
        assert_eq!(choices.choose(3), 2);
        assert_eq!(choices.choose(3), 1);
        assert_eq!(choices.choose(3), 0);
        assert_eq!(choices.draws(), 3);
    }

    #[test]
    fn scripted_console_records_transcript() {
        let mut console = ScriptedConsole::new(["Paris"]);
        assert_eq!(console.read_line("Your answer: ").unwrap(), "Paris");
        console.say("CORRECT").unwrap();
        assert_eq!(console.reads(), 1);
        assert!(console.printed("CORRECT"));
        assert!(matches!(
            console.read_line("again: "),
            Err(QuizError::InputClosed)
        ));
    }
}
