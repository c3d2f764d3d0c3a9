//! Append-only score file.
//!
//! Writes [`ScoreRecord`] blocks and session totals blocks, and reads records
//! back with a tolerant scanner that skips anything that is not a record.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::round::SessionTotals;
use crate::score::{
    parse_labeled_count, parse_timestamp, ScoreRecord, DATE_LABEL, FIRST_LABEL, GAMES_LABEL,
    INCORRECT_LABEL, SECOND_LABEL,
};

/// Lines that follow the `Date and Time:` marker in a record block.
const LINES_AFTER_MARKER: usize = 5;

/// A score file on disk.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one six-line record block. No separator line is added.
    pub fn append(&self, record: &ScoreRecord) -> Result<()> {
        self.append_text(&record.to_string())?;
        tracing::info!(
            score = record.score(),
            "appended score record to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Append a session totals block (four `- ` lines and a blank line).
    pub fn append_totals(&self, totals: &SessionTotals) -> Result<()> {
        self.append_text(&totals.totals_block())?;
        tracing::info!(
            games = totals.games_played,
            "appended session totals to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Read every complete record in the file.
    pub fn read_all(&self) -> Result<Vec<ScoreRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_records(&content)
    }

    fn append_text(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Scanner state while walking the score file.
enum ScanState<'a> {
    /// Looking for a `Date and Time:` line.
    SeekMarker,
    /// Collecting the five lines after a marker.
    InBlock {
        timestamp: NaiveDateTime,
        lines: Vec<&'a str>,
    },
}

/// Parse all record blocks from score file text.
///
/// Lines outside a block are ignored. A block cut short by end of input is
/// dropped. A malformed line inside a block aborts the whole parse. The
/// stored `Score:` value is never used; scores are recomputed from counts.
pub fn parse_records(content: &str) -> Result<Vec<ScoreRecord>> {
    let mut records = Vec::new();
    let mut state = ScanState::SeekMarker;

    for line in content.lines() {
        state = match state {
            ScanState::SeekMarker if line.trim().starts_with(DATE_LABEL) => ScanState::InBlock {
                timestamp: parse_timestamp(line)?,
                lines: Vec::with_capacity(LINES_AFTER_MARKER),
            },
            ScanState::SeekMarker => ScanState::SeekMarker,
            ScanState::InBlock {
                timestamp,
                mut lines,
            } => {
                lines.push(line);
                if lines.len() == LINES_AFTER_MARKER {
                    records.push(build_record(timestamp, &lines)?);
                    ScanState::SeekMarker
                } else {
                    ScanState::InBlock { timestamp, lines }
                }
            }
        };
    }

    if let ScanState::InBlock { lines, .. } = state {
        tracing::debug!(
            "dropping score block truncated after {} of {LINES_AFTER_MARKER} lines",
            lines.len()
        );
    }

    Ok(records)
}

fn build_record(timestamp: NaiveDateTime, lines: &[&str]) -> Result<ScoreRecord> {
    let games_played = parse_labeled_count(lines[0], GAMES_LABEL)?;
    let correct_first = parse_labeled_count(lines[1], FIRST_LABEL)?;
    let correct_second = parse_labeled_count(lines[2], SECOND_LABEL)?;
    let incorrect = parse_labeled_count(lines[3], INCORRECT_LABEL)?;
    // lines[4] is the stored score, which is recomputed instead.

    Ok(ScoreRecord::from_counts(
        timestamp,
        games_played,
        correct_first,
        correct_second,
        incorrect,
    ))
}
