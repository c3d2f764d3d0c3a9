//! Core data model types for geoquiz.
//!
//! Country records consumed by the quiz, the questions generated from them,
//! and the outcome of answering one question.

use std::fmt;

use crate::error::{QuizError, Result};

/// Number of facts every country carries.
pub const FACTS_PER_COUNTRY: usize = 3;

/// One country with its capital and three trivia facts.
///
/// Fields are private so a record can only exist in a validated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    name: String,
    capital: String,
    facts: [String; FACTS_PER_COUNTRY],
}

impl CountryRecord {
    /// Build a record, rejecting any blank field.
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        facts: [String; FACTS_PER_COUNTRY],
    ) -> Result<Self> {
        let name = name.into();
        let capital = capital.into();
        validate_country(&name, &capital, &facts)?;
        Ok(Self {
            name,
            capital,
            facts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    pub fn facts(&self) -> &[String; FACTS_PER_COUNTRY] {
        &self.facts
    }
}

/// Check the five textual fields of a country.
pub fn validate_country(name: &str, capital: &str, facts: &[String]) -> Result<()> {
    const FACT_FIELDS: [&str; FACTS_PER_COUNTRY] = ["fact1", "fact2", "fact3"];

    if name.trim().is_empty() {
        return Err(QuizError::validation("name", "must not be blank"));
    }
    if capital.trim().is_empty() {
        return Err(QuizError::validation("capital", "must not be blank"));
    }
    if facts.len() != FACTS_PER_COUNTRY {
        return Err(QuizError::validation(
            "facts",
            format!("expected {FACTS_PER_COUNTRY}, got {}", facts.len()),
        ));
    }
    for (fact, field) in facts.iter().zip(FACT_FIELDS) {
        if fact.trim().is_empty() {
            return Err(QuizError::validation(field, "must not be blank"));
        }
    }
    Ok(())
}

/// The three kinds of question the quiz can ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionTemplate {
    /// Show the capital, ask for the country.
    CapitalToCountry,
    /// Show the country, ask for the capital.
    CountryToCapital,
    /// Show one fact, ask for the country.
    FactToCountry,
}

impl QuestionTemplate {
    /// All templates in draw order.
    pub const ALL: [QuestionTemplate; 3] = [
        QuestionTemplate::CapitalToCountry,
        QuestionTemplate::CountryToCapital,
        QuestionTemplate::FactToCountry,
    ];
}

impl fmt::Display for QuestionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionTemplate::CapitalToCountry => write!(f, "capital-to-country"),
            QuestionTemplate::CountryToCapital => write!(f, "country-to-capital"),
            QuestionTemplate::FactToCountry => write!(f, "fact-to-country"),
        }
    }
}

/// A single prompt and the answer that counts as correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub template: QuestionTemplate,
    pub prompt: String,
    pub expected_answer: String,
}

impl Question {
    /// Case-insensitive exact comparison, one character at a time. No
    /// trimming or normalization happens here; the console hands over
    /// already-trimmed lines.
    pub fn accepts(&self, answer: &str) -> bool {
        answer.chars().count() == self.expected_answer.chars().count()
            && answer
                .chars()
                .zip(self.expected_answer.chars())
                .all(|(a, b)| chars_match_ignoring_case(a, b))
    }
}

fn chars_match_ignoring_case(a: char, b: char) -> bool {
    a == b
        || a.to_uppercase().eq(b.to_uppercase())
        || a.to_lowercase().eq(b.to_lowercase())
}

/// How a question ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptOutcome {
    CorrectFirstTry,
    CorrectSecondTry,
    IncorrectBoth,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> [String; 3] {
        [
            "Has fjords".to_string(),
            "Midnight sun".to_string(),
            "Oil fund".to_string(),
        ]
    }

    #[test]
    fn valid_country_keeps_fields() {
        let c = CountryRecord::new("Norway", "Oslo", facts()).unwrap();
        assert_eq!(c.name(), "Norway");
        assert_eq!(c.capital(), "Oslo");
        assert_eq!(c.facts()[1], "Midnight sun");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let err = CountryRecord::new("  ", "Oslo", facts()).unwrap_err();
        assert!(matches!(err, QuizError::Validation { field: "name", .. }));

        let err = CountryRecord::new("Norway", "", facts()).unwrap_err();
        assert!(matches!(err, QuizError::Validation { field: "capital", .. }));

        let mut bad = facts();
        bad[2] = "\t".into();
        let err = CountryRecord::new("Norway", "Oslo", bad).unwrap_err();
        assert!(matches!(err, QuizError::Validation { field: "fact3", .. }));
    }

    #[test]
    fn wrong_fact_count_is_rejected() {
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(validate_country("Norway", "Oslo", &two).is_err());
    }

    #[test]
    fn template_display() {
        assert_eq!(
            QuestionTemplate::CapitalToCountry.to_string(),
            "capital-to-country"
        );
        assert_eq!(QuestionTemplate::FactToCountry.to_string(), "fact-to-country");
    }

    #[test]
    fn accepts_ignores_case_only() {
        let q = Question {
            template: QuestionTemplate::CapitalToCountry,
            prompt: String::new(),
            expected_answer: "New Zealand".into(),
        };
        assert!(q.accepts("new zealand"));
        assert!(q.accepts("NEW ZEALAND"));
        assert!(!q.accepts("newzealand"));
        assert!(!q.accepts("new  zealand"));
        assert!(!q.accepts("New Zealan"));
    }

    #[test]
    fn accepts_final_sigma_in_either_case() {
        let q = Question {
            template: QuestionTemplate::CountryToCapital,
            prompt: String::new(),
            expected_answer: "ΣΑΣ".into(),
        };
        assert!(q.accepts("σασ"));
        assert!(q.accepts("σας"));
        assert!(!q.accepts("σα"));
    }
}
