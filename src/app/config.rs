//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, CONFIG_FILE_NAME, parse_config_content};

/// Load configuration.
///
/// An explicit path must exist. Without one, `learnsphere.toml` in `dir` is used
/// when present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
