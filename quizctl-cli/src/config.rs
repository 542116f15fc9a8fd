//! Environment loading for quizctl
//!
//! Settings come from flags, then environment variables, which may be seeded
//! from `.env` files.

use std::path::{Path, PathBuf};

/// Get the quizctl config directory path (~/.quizctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".quizctl"))
}

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.quizctl/.env
///
/// dotenvy never overwrites a variable that is already set, so loading in
/// this order gives the priorities above. Runs before logging is set up, so
/// the loaded paths are returned for the caller to report.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(dir) = config_dir() {
        if let Some(path) = load_env_file(&dir.join(".env")) {
            loaded_from.push(path);
        }
    }

    loaded_from
}

fn load_env_file(path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        return None;
    }
    dotenvy::from_path(path).ok().map(|()| path.to_path_buf())
}
