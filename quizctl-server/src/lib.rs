//! quizctl-server: HTTP API for quiz questions and their answer choices
//!
//! Questions and choices live in PostgreSQL. The HTTP layer talks to the
//! database only through the [`db::QuizStore`] trait, so the router can be
//! exercised without a live database.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError, PgStore, QuizStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
