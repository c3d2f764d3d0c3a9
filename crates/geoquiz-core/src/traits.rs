//! Core trait definitions for randomness and console I/O.
//!
//! The quiz engine only talks to the outside world through these two seams,
//! so every behavior can be driven by scripted doubles in tests (see
//! [`crate::mock`]).

use std::io::{BufRead, Write};

use rand::Rng;

use crate::error::{QuizError, Result};

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// A source of uniform choices.
pub trait ChoiceSource {
    /// Return a value in `0..upper`. `upper` is always at least 1.
    fn choose(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator into a [`ChoiceSource`].
///
/// Seed it with `StdRng::seed_from_u64` for reproducible sessions.
#[derive(Debug, Clone)]
pub struct RngChoices<R> {
    rng: R,
}

impl<R: Rng> RngChoices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceSource for RngChoices<R> {
    fn choose(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Line-oriented player console.
pub trait Console {
    /// Show `prompt` without a line break and read one line, trimmed.
    ///
    /// Returns [`QuizError::InputClosed`] when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of text.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Print an empty line.
    fn blank(&mut self) -> Result<()> {
        self.say("")
    }
}

/// A [`Console`] over any buffered reader and writer (stdin/stdout in the
/// binary, byte buffers in tests).
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn rng_choices_stay_in_range() {
        let mut choices = RngChoices::new(StdRng::seed_from_u64(7));
        for upper in 1..20 {
            for _ in 0..50 {
                assert!(choices.choose(upper) < upper);
            }
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = RngChoices::new(StdRng::seed_from_u64(42));
        let mut b = RngChoices::new(StdRng::seed_from_u64(42));
        let left: Vec<usize> = (0..32).map(|_| a.choose(3)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.choose(3)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn line_console_trims_and_echoes_prompt() {
        let mut console = LineConsole::new(Cursor::new("  Oslo \nnext\n"), Vec::new());
        assert_eq!(console.read_line("Your answer: ").unwrap(), "Oslo");
        console.say("CORRECT").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Your answer: CORRECT\n");
    }

    #[test]
    fn line_console_reports_eof() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        let err = console.read_line("> ").unwrap_err();
        assert!(matches!(err, QuizError::InputClosed));
    }

    #[test]
    fn blank_line_is_not_eof() {
        let mut console = LineConsole::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), "");
    }
}
