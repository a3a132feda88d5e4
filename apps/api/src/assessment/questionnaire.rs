//! Questionnaire bank — the fixed question set that feeds DISC scoring.
//!
//! Both forms read the same bank. The short form is the subset flagged
//! `shortForm`, and the full form is every question.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::profile::disc::DiscScore;

const EMBEDDED_BANK: &str = include_str!("../../data/questionnaire.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionnaireForm {
    Short,
    #[default]
    Full,
}

impl QuestionnaireForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionnaireForm::Short => "short",
            QuestionnaireForm::Full => "full",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => Some(QuestionnaireForm::Short),
            "full" => Some(QuestionnaireForm::Full),
            _ => None,
        }
    }
}

/// Sparse per-axis weights; omitted axes weigh zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisWeights {
    pub red: f64,
    pub yellow: f64,
    pub green: f64,
    pub blue: f64,
}

impl AxisWeights {
    pub fn as_score(&self) -> DiscScore {
        DiscScore::new(self.red, self.yellow, self.green, self.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub weights: AxisWeights,
    /// Answer a respondent might pick to look good rather than to be accurate.
    #[serde(default)]
    pub desirable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub short_form: bool,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn in_form(&self, form: QuestionnaireForm) -> bool {
        match form {
            QuestionnaireForm::Short => self.short_form,
            QuestionnaireForm::Full => true,
        }
    }

    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankFile {
    questions: Vec<Question>,
    #[serde(default)]
    consistency_pairs: Vec<(String, String)>,
}

/// Question text without weights, as served to respondents.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<PublicChoice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicChoice {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
    consistency_pairs: Vec<(String, String)>,
}

impl QuestionBank {
    /// The bank compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_BANK)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: BankFile = serde_json::from_str(json)?;
        let index = file
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Ok(Self {
            questions: file.questions,
            index,
            consistency_pairs: file.consistency_pairs,
        })
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Question `id`, only if it belongs to `form`.
    pub fn question_in(&self, form: QuestionnaireForm, id: &str) -> Option<&Question> {
        self.question(id).filter(|q| q.in_form(form))
    }

    pub fn questions(&self, form: QuestionnaireForm) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.in_form(form))
    }

    pub fn public_questions(&self, form: QuestionnaireForm) -> Vec<PublicQuestion> {
        self.questions(form)
            .map(|q| PublicQuestion {
                id: q.id.clone(),
                prompt: q.prompt.clone(),
                choices: q
                    .choices
                    .iter()
                    .map(|c| PublicChoice {
                        id: c.id.clone(),
                        text: c.text.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Pairs of question ids that measure the same construct, limited to `form`.
    pub fn consistency_pairs(&self, form: QuestionnaireForm) -> impl Iterator<Item = (&str, &str)> {
        self.consistency_pairs
            .iter()
            .filter(move |(a, b)| {
                self.question_in(form, a).is_some() && self.question_in(form, b).is_some()
            })
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn len(&self, form: QuestionnaireForm) -> usize {
        self.questions(form).count()
    }
}
