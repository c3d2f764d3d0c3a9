//! Country catalog, quiz rounds, and the score file format for geoquiz.
//!
//! This crate holds everything the `geoquiz` binary plays with: country
//! records and their loader, question generation, two-attempt judging,
//! round and session counts, and the append-only score file.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod judge;
pub mod mock;
pub mod model;
pub mod question;
pub mod round;
pub mod score;
pub mod store;
pub mod traits;

pub use error::{QuizError, Result};
