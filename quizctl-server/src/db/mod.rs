//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool, built explicitly at startup and closed at shutdown
//! - A request holds a pooled connection only for the duration of its query
//!   or transaction
//! - Reads use explicit JOINs, nothing is lazily loaded
//! - Multi-row writes run inside a single transaction

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use schema::ensure_schema;
pub use store::{PgStore, QuizStore};
pub use sqlx::PgPool;
