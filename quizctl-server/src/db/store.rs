//! Store seam between the HTTP layer and the database
//!
//! Handlers hold an `Arc<dyn QuizStore>`; production wires in [`PgStore`].

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{Choice, ChoiceRepo, DbError, Question, QuestionRepo};
use crate::models::NewQuestion;

/// Quiz operations the HTTP layer depends on.
#[async_trait]
pub trait QuizStore: Send + Sync + 'static {
    /// Persist a question and its choices atomically.
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Load a question with its choices; `NotFound` if absent.
    async fn get_question(&self, id: i64) -> Result<Question, DbError>;

    /// Load the choices of a question; `NotFound` if there are none.
    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool)
            .create_with_choices(&question)
            .await
    }

    async fn get_question(&self, id: i64) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, DbError> {
        ChoiceRepo::new(&self.pool)
            .list_for_question(question_id)
            .await
    }
}
