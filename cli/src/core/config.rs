//! Resolution of the data directory that holds the saved and recent
//! collections.

use crate::core::error::ApiError;
use std::path::{Path, PathBuf};

/// Directory created under the user's home when nothing else is configured.
pub const DEFAULT_DATA_DIR_NAME: &str = ".postalbro";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "POSTALBRO_HOME";

/// Resolve the data directory: explicit path first, then the user's home.
///
/// `clap` already folds `POSTALBRO_HOME` into the explicit path, so callers
/// only pass one optional value.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, ApiError> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(ApiError::Config("data directory must not be empty".into()));
        }
        return Ok(path.to_path_buf());
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
        .ok_or_else(|| {
            ApiError::Config(format!(
                "could not determine home directory; set {DATA_DIR_ENV_VAR} or pass --data-dir"
            ))
        })
}
