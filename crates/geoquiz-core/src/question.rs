//! Question generation.

use crate::model::{CountryRecord, Question, QuestionTemplate, FACTS_PER_COUNTRY};
use crate::traits::ChoiceSource;

/// Build a random question about `country`.
///
/// Draws once for the template and, only for a fact question, once more for
/// the fact index.
pub fn generate(country: &CountryRecord, choices: &mut dyn ChoiceSource) -> Question {
    let template = QuestionTemplate::ALL[choices.choose(QuestionTemplate::ALL.len())];

    match template {
        QuestionTemplate::CapitalToCountry => Question {
            template,
            prompt: format!("Which country has the capital \"{}\"?", country.capital()),
            expected_answer: country.name().to_string(),
        },
        QuestionTemplate::CountryToCapital => Question {
            template,
            prompt: format!("What is the capital city of \"{}\"?", country.name()),
            expected_answer: country.capital().to_string(),
        },
        QuestionTemplate::FactToCountry => {
            let fact = &country.facts()[choices.choose(FACTS_PER_COUNTRY)];
            Question {
                template,
                prompt: format!("Which country matches this fact?\n{fact}"),
                expected_answer: country.name().to_string(),
            }
        }
    }
}
