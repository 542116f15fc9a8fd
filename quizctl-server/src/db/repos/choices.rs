//! Choice repository
//!
//! Choices are only ever written by `QuestionRepo::create_with_choices`;
//! this repository covers the read side.

use sqlx::{FromRow, PgExecutor, PgPool};

use super::DbError;

/// Choice record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Choice {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i64,
}

/// Load every choice for a question, in insertion order.
///
/// Generic over the executor so the create transaction can re-read the rows
/// it just wrote on its own connection.
pub(crate) async fn fetch_for_question<'e, E>(
    executor: E,
    question_id: i64,
) -> Result<Vec<Choice>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as(
        r#"
        SELECT id, choice_text, is_correct, question_id
        FROM choices
        WHERE question_id = $1
        ORDER BY id
        "#,
    )
    .bind(question_id)
    .fetch_all(executor)
    .await
}

/// Choice repository
pub struct ChoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ChoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the choices of a question.
    ///
    /// An empty result is reported as `NotFound`, whether the question has
    /// no choices or does not exist at all.
    pub async fn list_for_question(&self, question_id: i64) -> Result<Vec<Choice>, DbError> {
        let choices = fetch_for_question(self.pool, question_id).await?;

        if choices.is_empty() {
            return Err(DbError::NotFound {
                resource: "choices for question",
                id: question_id.to_string(),
            });
        }

        Ok(choices)
    }
}
