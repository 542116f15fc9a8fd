//! Choice contracts

use serde::{Deserialize, Serialize};

use crate::db::Choice;

/// Choice as submitted when creating a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChoice {
    pub choice_text: String,
    pub is_correct: bool,
}

/// Choice as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
}

impl From<Choice> for ChoiceResponse {
    fn from(c: Choice) -> Self {
        Self {
            id: c.id,
            choice_text: c.choice_text,
            is_correct: c.is_correct,
        }
    }
}
