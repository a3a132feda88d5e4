//! Assessment Scoring — questionnaire answers → DiscScore plus diagnostics.
//!
//! Aggregation is total: answers without weight data contribute zero and are
//! counted as invalid rather than failing the whole submission. The short and
//! full forms produce the same `DiscScore` shape, so nothing downstream needs
//! to know which form was taken.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::questionnaire::{QuestionBank, QuestionnaireForm};
use crate::profile::disc::{DiscAxis, DiscScore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// "Most like me"
    #[default]
    Most,
    /// "Least like me"
    Least,
}

impl Polarity {
    fn sign(self) -> f64 {
        match self {
            Polarity::Most => 1.0,
            Polarity::Least => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub choice: String,
    #[serde(default)]
    pub polarity: Polarity,
}

/// Secondary aggregates stored next to the DISC percentages. All 0–100.
/// They never feed the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub validity: f64,
    pub consistency: f64,
    pub social_desirability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub form: QuestionnaireForm,
    pub disc: DiscScore,
    pub diagnostics: Diagnostics,
    pub answered: usize,
    pub valid: usize,
}

/// DISC percentages for `answers` taken on `form`.
pub fn score(bank: &QuestionBank, form: QuestionnaireForm, answers: &[Answer]) -> DiscScore {
    assess(bank, form, answers).disc
}

pub fn assess(bank: &QuestionBank, form: QuestionnaireForm, answers: &[Answer]) -> AssessmentResult {
    let mut totals = [0.0_f64; 4];
    let mut valid = 0usize;
    let mut desirable = 0usize;
    // Dominant axis of the "most" choice per question, for consistency pairs.
    let mut leaning: HashMap<&str, DiscAxis> = HashMap::new();

    for answer in answers {
        let choice = bank
            .question_in(form, &answer.question_id)
            .and_then(|q| q.choice(&answer.choice));
        let Some(choice) = choice else {
            debug!(
                "No weight data for answer {}/{} on the {:?} form; contributing zero",
                answer.question_id, answer.choice, form
            );
            continue;
        };

        valid += 1;
        let weights = choice.weights.as_score();
        let sign = answer.polarity.sign();
        for (total, axis) in totals.iter_mut().zip(DiscAxis::ALL) {
            *total += sign * weights.get(axis);
        }

        if answer.polarity == Polarity::Most {
            if choice.desirable {
                desirable += 1;
            }
            leaning
                .entry(answer.question_id.as_str())
                .or_insert(weights.primary().axis);
        }
    }

    let (answered_pairs, agreeing_pairs) = bank.consistency_pairs(form).fold(
        (0usize, 0usize),
        |(answered, agreeing), (a, b)| match (leaning.get(a), leaning.get(b)) {
            (Some(x), Some(y)) => (answered + 1, agreeing + usize::from(x == y)),
            _ => (answered, agreeing),
        },
    );

    AssessmentResult {
        form,
        disc: normalize(totals),
        diagnostics: Diagnostics {
            validity: percent(valid, answers.len(), 0.0),
            consistency: percent(agreeing_pairs, answered_pairs, 100.0),
            social_desirability: percent(desirable, valid, 0.0),
        },
        answered: answers.len(),
        valid,
    }
}

/// Floors each axis at zero and rescales to percentages of the total.
fn normalize(totals: [f64; 4]) -> DiscScore {
    let floored = totals.map(|t| t.max(0.0));
    let sum: f64 = floored.iter().sum();
    if sum <= 0.0 {
        return DiscScore::default();
    }
    let [red, yellow, green, blue] = floored.map(|t| t / sum * 100.0);
    DiscScore::new(red, yellow, green, blue)
}

fn percent(part: usize, whole: usize, when_empty: f64) -> f64 {
    if whole == 0 {
        when_empty
    } else {
        part as f64 / whole as f64 * 100.0
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn answers() -> impl Strategy<Value = Vec<Answer>> {
        let one = (1u32..=32, prop::sample::select(vec!["a", "b", "c", "d", "e"]), any::<bool>())
            .prop_map(|(n, choice, least)| Answer {
                question_id: format!("q{n:02}"),
                choice: choice.to_string(),
                polarity: if least { Polarity::Least } else { Polarity::Most },
            });
        prop::collection::vec(one, 0..40)
    }

    proptest! {
        #[test]
        fn scores_and_diagnostics_stay_in_range(answers in answers(), short in any::<bool>()) {
            let bank = QuestionBank::embedded().unwrap();
            let form = if short { QuestionnaireForm::Short } else { QuestionnaireForm::Full };
            let result = assess(&bank, form, &answers);

            let disc = result.disc;
            let sum = disc.red + disc.yellow + disc.green + disc.blue;
            prop_assert!(disc.is_empty() || (sum - 100.0).abs() < 1e-6);
            for axis in DiscAxis::ALL {
                prop_assert!((0.0..=100.0).contains(&disc.get(axis)));
            }
            let d = result.diagnostics;
            for v in [d.validity, d.consistency, d.social_desirability] {
                prop_assert!((0.0..=100.0).contains(&v));
            }
            prop_assert!(result.valid <= result.answered);
        }
    }
}
