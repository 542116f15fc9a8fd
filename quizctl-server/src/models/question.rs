//! Question contracts

use serde::{Deserialize, Serialize};

use super::{ChoiceResponse, NewChoice};
use crate::db::Question;

/// Body of `POST /questions/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub choices: Vec<NewChoice>,
}

impl NewQuestion {
    /// Start a question with no choices.
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice_text: impl Into<String>, is_correct: bool) -> Self {
        self.choices.push(NewChoice {
            choice_text: choice_text.into(),
            is_correct,
        });
        self
    }
}

/// Question with its choices as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub choices: Vec<ChoiceResponse>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question_text: q.question_text,
            choices: q.choices.into_iter().map(ChoiceResponse::from).collect(),
        }
    }
}
