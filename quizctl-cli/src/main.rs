//! quizctl CLI - quiz question API server
//!
//! Subcommands:
//! - `serve`: run the HTTP API (creates the schema first)
//! - `init-db`: create the schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "quizctl",
    author,
    version,
    about = "Quiz question API backed by PostgreSQL",
    long_about = "Store quiz questions with multiple-choice answers and serve them over HTTP."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the questions and choices tables if they are missing
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks can see its values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    if env_files.is_empty() {
        debug!("No .env files found (current dir or ~/.quizctl)");
    } else {
        let paths: Vec<_> = env_files.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded configuration from: {}", paths.join(", "));
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
