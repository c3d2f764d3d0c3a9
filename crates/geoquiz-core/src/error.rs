//! Quiz error types.
//!
//! Every fallible operation in `geoquiz-core` reports one of these variants.
//! The CLI wraps them in `anyhow` with extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading data, playing, or persisting scores.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A record was constructed with a missing, blank, or negative field.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A stored score line did not match its expected label or value.
    #[error("malformed score line {line:?}: {reason}")]
    Parse { line: String, reason: String },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The player's input stream ended while an answer was expected.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// No country records could be loaded.
    #[error("no countries found in {}", dir.display())]
    EmptyCatalog { dir: PathBuf },

    /// A catalog built in memory holds no countries.
    #[error("the country catalog is empty")]
    NoCountries,
}

impl QuizError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        QuizError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
        QuizError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, QuizError>;
