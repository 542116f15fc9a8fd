//! HTTP server command for the quiz API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use quizctl_server::{run_server, PgStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "QUIZCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting quizctl server on {}", args.bind);

    let pool = args.db.connect().await?;
    let store = Arc::new(PgStore::new(pool.clone()));

    // Run server (blocks until shutdown), then release every pooled connection
    let result = run_server(store, args.server_config()).await;
    pool.close().await;
    result.context("Server error")?;

    Ok(())
}
