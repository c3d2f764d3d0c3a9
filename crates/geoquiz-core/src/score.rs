//! Persisted score records and their canonical text form.
//!
//! A record serializes to exactly six lines:
//!
//! ```text
//! Date and Time: 2025-11-12 10:25:30
//! Games Played: 1
//! Correct First Attempts: 6
//! Correct Second Attempts: 2
//! Incorrect Attempts: 1
//! Score: 14 points
//! ```

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::{QuizError, Result};

/// `chrono` format of the `Date and Time:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DATE_LABEL: &str = "Date and Time:";
pub const GAMES_LABEL: &str = "Games Played:";
pub const FIRST_LABEL: &str = "Correct First Attempts:";
pub const SECOND_LABEL: &str = "Correct Second Attempts:";
pub const INCORRECT_LABEL: &str = "Incorrect Attempts:";
pub const SCORE_LABEL: &str = "Score:";

/// Summary of one play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    timestamp: NaiveDateTime,
    games_played: u32,
    correct_first: u32,
    correct_second: u32,
    incorrect: u32,
}

impl ScoreRecord {
    /// Build a record from signed counts, rejecting negatives.
    ///
    /// The timestamp is truncated to whole seconds.
    pub fn new(
        timestamp: NaiveDateTime,
        games_played: i64,
        correct_first: i64,
        correct_second: i64,
        incorrect: i64,
    ) -> Result<Self> {
        Ok(Self::from_counts(
            timestamp,
            count("games_played", games_played)?,
            count("correct_first", correct_first)?,
            count("correct_second", correct_second)?,
            count("incorrect", incorrect)?,
        ))
    }

    /// Build a record from counts that are already non-negative.
    pub fn from_counts(
        timestamp: NaiveDateTime,
        games_played: u32,
        correct_first: u32,
        correct_second: u32,
        incorrect: u32,
    ) -> Self {
        Self {
            timestamp: truncate_to_seconds(timestamp),
            games_played,
            correct_first,
            correct_second,
            incorrect,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn correct_first(&self) -> u32 {
        self.correct_first
    }

    pub fn correct_second(&self) -> u32 {
        self.correct_second
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Two points per first-try answer, one per second-try answer.
    ///
    /// Computed in `u64` so large hand-edited counts cannot overflow.
    pub fn score(&self) -> u64 {
        2 * u64::from(self.correct_first) + u64::from(self.correct_second)
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{DATE_LABEL} {}",
            self.timestamp.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f, "{GAMES_LABEL} {}", self.games_played)?;
        writeln!(f, "{FIRST_LABEL} {}", self.correct_first)?;
        writeln!(f, "{SECOND_LABEL} {}", self.correct_second)?;
        writeln!(f, "{INCORRECT_LABEL} {}", self.incorrect)?;
        writeln!(f, "{SCORE_LABEL} {} points", self.score())
    }
}

fn count(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(QuizError::validation(field, format!("{value} is negative")));
    }
    u32::try_from(value).map_err(|_| QuizError::validation(field, format!("{value} is too large")))
}

fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Parse the remainder of a `Date and Time:` line.
pub fn parse_timestamp(line: &str) -> Result<NaiveDateTime> {
    let text = line
        .trim()
        .strip_prefix(DATE_LABEL)
        .ok_or_else(|| QuizError::parse(line, format!("expected `{DATE_LABEL}`")))?
        .trim();
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| QuizError::parse(line, format!("bad timestamp: {e}")))
}

/// Extract the count from a labeled line such as `Games Played: 3`.
///
/// The first whitespace-delimited token after the label must be a
/// non-negative integer; anything after it is ignored.
pub fn parse_labeled_count(line: &str, label: &str) -> Result<u32> {
    let rest = line
        .trim()
        .strip_prefix(label)
        .ok_or_else(|| QuizError::parse(line, format!("expected `{label}`")))?;
    let token = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| QuizError::parse(line, "missing value"))?;
    token
        .parse::<u32>()
        .map_err(|e| QuizError::parse(line, format!("`{token}` is not a count: {e}")))
}
