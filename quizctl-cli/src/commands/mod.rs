//! Subcommand implementations

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use quizctl_server::db::{create_pool_with_options, ensure_schema, PgPool, DEFAULT_MAX_CONNECTIONS};

/// Database connection arguments shared by subcommands
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env files)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum connections held by the pool
    #[arg(long, env = "QUIZCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect the pool and make sure the quiz tables exist.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.quizctl/.env",
        )?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        ensure_schema(&pool)
            .await
            .context("Failed to create quiz schema")?;

        Ok(pool)
    }
}
