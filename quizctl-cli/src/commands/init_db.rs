//! Schema bootstrap command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the schema and exit
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    pool.close().await;

    tracing::info!("Database initialized");
    Ok(())
}
