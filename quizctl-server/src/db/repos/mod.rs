//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues explicit SQL:
//! - JOINs instead of per-row follow-up queries
//! - Transactions for multi-step writes
//! - Missing rows surface as `DbError::NotFound`

pub mod choices;
pub mod questions;

pub use choices::{Choice, ChoiceRepo};
pub use questions::{Question, QuestionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
