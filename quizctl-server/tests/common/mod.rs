//! In-process `QuizStore` doubles for router tests

use std::sync::Mutex;

use async_trait::async_trait;
use quizctl_server::db::{Choice, DbError, Question, QuizStore};
use quizctl_server::models::NewQuestion;

#[derive(Default)]
struct Tables {
    questions: Vec<(i64, String)>,
    choices: Vec<Choice>,
    next_question_id: i64,
    next_choice_id: i64,
}

/// Store that keeps rows in memory, with the same not-found rules as
/// the PostgreSQL store.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn choice_rows(&self) -> Vec<Choice> {
        self.tables.lock().unwrap().choices.clone()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_question_id += 1;
        let id = tables.next_question_id;
        tables.questions.push((id, question.question_text.clone()));

        let mut choices = Vec::new();
        for choice in question.choices {
            tables.next_choice_id += 1;
            let row = Choice {
                id: tables.next_choice_id,
                choice_text: choice.choice_text,
                is_correct: choice.is_correct,
                question_id: id,
            };
            tables.choices.push(row.clone());
            choices.push(row);
        }

        Ok(Question {
            id,
            question_text: question.question_text,
            choices,
        })
    }

    async fn get_question(&self, id: i64) -> Result<Question, DbError> {
        let tables = self.tables.lock().unwrap();
        let (_, text) = tables
            .questions
            .iter()
            .find(|(qid, _)| *qid == id)
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        Ok(Question {
            id,
            question_text: text.clone(),
            choices: tables
                .choices
                .iter()
                .filter(|c| c.question_id == id)
                .cloned()
                .collect(),
        })
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, DbError> {
        let tables = self.tables.lock().unwrap();
        let choices: Vec<_> = tables
            .choices
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect();

        if choices.is_empty() {
            return Err(DbError::NotFound {
                resource: "choices for question",
                id: question_id.to_string(),
            });
        }
        Ok(choices)
    }
}

/// Store whose every call fails the way a lost database would.
pub struct FailingStore;

fn unavailable() -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(
        "connection to server at 10.0.0.5 refused".into(),
    ))
}

#[async_trait]
impl QuizStore for FailingStore {
    async fn create_question(&self, _question: NewQuestion) -> Result<Question, DbError> {
        Err(unavailable())
    }

    async fn get_question(&self, _id: i64) -> Result<Question, DbError> {
        Err(unavailable())
    }

    async fn list_choices(&self, _question_id: i64) -> Result<Vec<Choice>, DbError> {
        Err(unavailable())
    }
}
