//! Per-round counts and running session totals.

use chrono::NaiveDateTime;

use crate::model::AttemptOutcome;
use crate::score::ScoreRecord;

/// Questions asked in every round.
pub const QUESTIONS_PER_ROUND: u32 = 10;

/// Outcome counts for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundCounts {
    pub correct_first: u32,
    pub correct_second: u32,
    pub incorrect: u32,
}

impl RoundCounts {
    /// Fold one question outcome in.
    pub fn record(&mut self, outcome: AttemptOutcome) {
        match outcome {
            AttemptOutcome::CorrectFirstTry => self.correct_first += 1,
            AttemptOutcome::CorrectSecondTry => self.correct_second += 1,
            AttemptOutcome::IncorrectBoth => self.incorrect += 1,
        }
    }

    /// Questions recorded so far.
    pub fn asked(&self) -> u32 {
        self.correct_first + self.correct_second + self.incorrect
    }

    pub fn is_complete(&self) -> bool {
        self.asked() >= QUESTIONS_PER_ROUND
    }

    pub fn score(&self) -> u64 {
        2 * u64::from(self.correct_first) + u64::from(self.correct_second)
    }

    /// The printed round summary, one entry per line.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "-- Game Summary --".to_string(),
            "1 word game played".to_string(),
            format!("{} correct answers on the first attempt", self.correct_first),
            format!(
                "{} correct answers on the second attempt",
                self.correct_second
            ),
            format!("{} incorrect answers on two attempts each", self.incorrect),
        ]
    }
}

/// Running totals across every round of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTotals {
    pub games_played: u32,
    pub correct_first: u32,
    pub correct_second: u32,
    pub incorrect: u32,
}

impl SessionTotals {
    /// Add a finished round. `games_played` always grows by one.
    pub fn fold_round(&mut self, round: &RoundCounts) {
        self.games_played += 1;
        self.correct_first += round.correct_first;
        self.correct_second += round.correct_second;
        self.incorrect += round.incorrect;
    }

    pub fn score(&self) -> u64 {
        2 * u64::from(self.correct_first) + u64::from(self.correct_second)
    }

    /// Snapshot the totals as a persistable record.
    pub fn to_record(&self, timestamp: NaiveDateTime) -> ScoreRecord {
        ScoreRecord::from_counts(
            timestamp,
            self.games_played,
            self.correct_first,
            self.correct_second,
            self.incorrect,
        )
    }

    /// The session totals block appended to the score file, including the
    /// trailing blank line.
    pub fn totals_block(&self) -> String {
        let games = if self.games_played == 1 {
            "word game played"
        } else {
            "word games played"
        };
        format!(
            "- {} {games}\n\
             - {} correct answers on the first attempt\n\
             - {} correct answers on the second attempt\n\
             - {} incorrect answers on two attempts each\n\
             \n",
            self.games_played, self.correct_first, self.correct_second, self.incorrect
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn round(first: u32, second: u32, wrong: u32) -> RoundCounts {
        let mut r = RoundCounts::default();
        for _ in 0..first {
            r.record(AttemptOutcome::CorrectFirstTry);
        }
        for _ in 0..second {
            r.record(AttemptOutcome::CorrectSecondTry);
        }
        for _ in 0..wrong {
            r.record(AttemptOutcome::IncorrectBoth);
        }
        r
    }

    #[test]
    fn record_maps_outcomes_to_counters() {
        let r = round(6, 3, 1);
        assert_eq!(r.correct_first, 6);
        assert_eq!(r.correct_second, 3);
        assert_eq!(r.incorrect, 1);
        assert_eq!(r.asked(), 10);
        assert!(r.is_complete());
        assert_eq!(r.score(), 15);
        assert!(!round(4, 0, 5).is_complete());
    }

    #[test]
    fn summary_wording() {
        let lines = round(6, 3, 1).summary_lines();
        assert_eq!(
            lines,
            vec![
                "-- Game Summary --",
                "1 word game played",
                "6 correct answers on the first attempt",
                "3 correct answers on the second attempt",
                "1 incorrect answers on two attempts each",
            ]
        );
    }

    #[test]
    fn fold_round_is_additive() {
        let mut totals = SessionTotals::default();
        totals.fold_round(&round(10, 0, 0));
        totals.fold_round(&round(0, 0, 10));
        totals.fold_round(&RoundCounts::default());
        assert_eq!(
            totals,
            SessionTotals {
                games_played: 3,
                correct_first: 10,
                correct_second: 0,
                incorrect: 10,
            }
        );
        assert_eq!(totals.score(), 20);
    }

    #[test]
    fn totals_block_singular_and_plural() {
        let mut totals = SessionTotals::default();
        totals.fold_round(&round(7, 2, 1));
        assert_eq!(
            totals.totals_block(),
            "- 1 word game played\n\
             - 7 correct answers on the first attempt\n\
             - 2 correct answers on the second attempt\n\
             - 1 incorrect answers on two attempts each\n\n"
        );

        totals.fold_round(&round(5, 5, 0));
        assert!(totals.totals_block().starts_with("- 2 word games played\n"));
        assert!(SessionTotals::default()
            .totals_block()
            .starts_with("- 0 word games played\n"));
    }

    #[test]
    fn to_record_carries_counts() {
        let mut totals = SessionTotals::default();
        totals.fold_round(&round(6, 2, 2));
        let ts = NaiveDate::from_ymd_opt(2025, 11, 12)
            .unwrap()
            .and_hms_opt(10, 25, 30)
            .unwrap();
        let record = totals.to_record(ts);
        assert_eq!(record.games_played(), 1);
        assert_eq!(record.score(), totals.score());
        assert_eq!(record.timestamp(), ts);
    }

    #[test]
    fn score_does_not_overflow_counts() {
        let totals = SessionTotals {
            games_played: 1,
            correct_first: u32::MAX,
            correct_second: u32::MAX,
            incorrect: 0,
        };
        assert_eq!(totals.score(), 3 * u64::from(u32::MAX));

        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(totals.to_record(ts).score(), totals.score());
    }
}
