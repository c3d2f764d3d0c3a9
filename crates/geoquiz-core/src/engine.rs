//! Quiz engine: plays rounds against a console and persists the session.

use chrono::{Local, NaiveDateTime};

use crate::catalog::CountryCatalog;
use crate::config::ScoreFormat;
use crate::error::{QuizError, Result};
use crate::judge::judge;
use crate::model::AttemptOutcome;
use crate::question::generate;
use crate::round::{RoundCounts, SessionTotals};
use crate::store::ScoreStore;
use crate::traits::{ChoiceSource, Console};

/// Where and how a session is persisted.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub store: ScoreStore,
    pub format: ScoreFormat,
}

/// Hooks for observing a session, e.g. for logging.
pub trait ProgressReporter {
    fn on_question(&self, country: &str, outcome: AttemptOutcome);
    fn on_round_complete(&self, round: &RoundCounts);
    fn on_session_saved(&self, totals: &SessionTotals, format: ScoreFormat);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_question(&self, _: &str, _: AttemptOutcome) {}
    fn on_round_complete(&self, _: &RoundCounts) {}
    fn on_session_saved(&self, _: &SessionTotals, _: ScoreFormat) {}
}

/// Reporter that forwards every event to `tracing`.
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn on_question(&self, country: &str, outcome: AttemptOutcome) {
        tracing::debug!(country, ?outcome, "question answered");
    }

    fn on_round_complete(&self, round: &RoundCounts) {
        tracing::info!(
            first = round.correct_first,
            second = round.correct_second,
            incorrect = round.incorrect,
            score = round.score(),
            "round complete"
        );
    }

    fn on_session_saved(&self, totals: &SessionTotals, format: ScoreFormat) {
        tracing::info!(
            games = totals.games_played,
            score = totals.score(),
            score_format = %format,
            "session saved"
        );
    }
}

/// Drives questions, rounds, and sessions.
pub struct QuizEngine<'a> {
    catalog: &'a CountryCatalog,
    choices: &'a mut dyn ChoiceSource,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> QuizEngine<'a> {
    /// `catalog` must not be empty; see [`CountryCatalog::load_non_empty`].
    pub fn new(
        catalog: &'a CountryCatalog,
        choices: &'a mut dyn ChoiceSource,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            catalog,
            choices,
            reporter,
        }
    }

    /// Ask one question about a random country.
    pub fn play_question(&mut self, console: &mut dyn Console) -> Result<AttemptOutcome> {
        let catalog = self.catalog;
        let Some(country) = catalog.pick(&mut *self.choices) else {
            return Err(match catalog.source_dir() {
                Some(dir) => QuizError::EmptyCatalog {
                    dir: dir.to_path_buf(),
                },
                None => QuizError::NoCountries,
            });
        };
        let question = generate(country, &mut *self.choices);
        tracing::trace!(template = %question.template, country = country.name(), "asking");

        console.say(&question.prompt)?;
        let outcome = judge(&question, console)?;
        self.reporter.on_question(country.name(), outcome);
        Ok(outcome)
    }

    /// Play one full round and print its summary.
    pub fn play_round(&mut self, console: &mut dyn Console) -> Result<RoundCounts> {
        let mut round = RoundCounts::default();
        while !round.is_complete() {
            let outcome = self.play_question(console)?;
            round.record(outcome);
            console.blank()?;
        }

        for line in round.summary_lines() {
            console.say(&line)?;
        }
        console.blank()?;
        self.reporter.on_round_complete(&round);
        Ok(round)
    }

    /// Play rounds until the player declines, then persist the totals.
    pub fn run_session(
        &mut self,
        console: &mut dyn Console,
        session: &SessionConfig,
    ) -> Result<SessionTotals> {
        self.run_session_at(console, session, Local::now().naive_local())
    }

    /// [`QuizEngine::run_session`] with an explicit timestamp for the record.
    pub fn run_session_at(
        &mut self,
        console: &mut dyn Console,
        session: &SessionConfig,
        finished_at: NaiveDateTime,
    ) -> Result<SessionTotals> {
        let mut totals = SessionTotals::default();
        loop {
            let round = self.play_round(console)?;
            totals.fold_round(&round);
            let again = ask_play_again(console)?;
            console.blank()?;
            if !again {
                break;
            }
        }

        match session.format {
            ScoreFormat::Totals => session.store.append_totals(&totals)?,
            ScoreFormat::Record => session.store.append(&totals.to_record(finished_at))?,
        }
        self.reporter.on_session_saved(&totals, session.format);

        let file_name = session
            .store
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| session.store.path().display().to_string());
        console.say(&format!("Thanks for playing! Totals were saved to {file_name}"))?;
        Ok(totals)
    }
}

/// Ask until the player answers yes or no.
pub fn ask_play_again(console: &mut dyn Console) -> Result<bool> {
    loop {
        let line = console.read_line("Play again? (Yes/No): ")?;
        if line.eq_ignore_ascii_case("yes") {
            return Ok(true);
        }
        if line.eq_ignore_ascii_case("no") {
            return Ok(false);
        }
        console.say("Please enter Yes or No.")?;
    }
}
