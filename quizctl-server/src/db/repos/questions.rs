//! Question repository
//!
//! - create_with_choices: question + all choices in one transaction
//! - get: question and its choices via a single LEFT JOIN

use sqlx::{PgPool, Row};

use super::choices::{self, Choice};
use super::DbError;
use crate::models::NewQuestion;

/// Question record with its choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub choices: Vec<Choice>,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a question together with its choices (atomic).
    ///
    /// Inserts the question, one row per choice, then re-reads the choices
    /// inside the same transaction. Any failure drops the transaction
    /// uncommitted, which rolls it back.
    pub async fn create_with_choices(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let mut tx = self.pool.begin().await?;

        let (id, question_text): (i64, String) = sqlx::query_as(
            r#"
            INSERT INTO questions (question_text)
            VALUES ($1)
            RETURNING id, question_text
            "#,
        )
        .bind(&new.question_text)
        .fetch_one(&mut *tx)
        .await?;

        for choice in &new.choices {
            sqlx::query(
                r#"
                INSERT INTO choices (choice_text, is_correct, question_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&choice.choice_text)
            .bind(choice.is_correct)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let choices = choices::fetch_for_question(&mut *tx, id).await?;

        tx.commit().await?;

        tracing::debug!(question_id = id, choices = choices.len(), "question created");
        Ok(Question {
            id,
            question_text,
            choices,
        })
    }

    /// Get a question and its choices by ID.
    pub async fn get(&self, id: i64) -> Result<Question, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                q.id,
                q.question_text,
                c.id AS choice_id,
                c.choice_text,
                c.is_correct
            FROM questions q
            LEFT JOIN choices c ON c.question_id = q.id
            WHERE q.id = $1
            ORDER BY c.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let Some(first) = rows.first() else {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        };
        let question_text: String = first.try_get("question_text")?;

        let mut choices = Vec::with_capacity(rows.len());
        for row in &rows {
            // LEFT JOIN yields one all-NULL choice row for a question without choices
            let Some(choice_id) = row.try_get::<Option<i64>, _>("choice_id")? else {
                continue;
            };
            choices.push(Choice {
                id: choice_id,
                choice_text: row.try_get("choice_text")?,
                is_correct: row.try_get("is_correct")?,
                question_id: id,
            });
        }

        Ok(Question {
            id,
            question_text,
            choices,
        })
    }
}
