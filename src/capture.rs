//! File naming for saved frames.

use crate::config::CaptureConfig;
use crate::error::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// File name from a chrono template and the current local time.
pub fn generate_filename(template: &str) -> String {
    format!("{}.png", Local::now().format(template))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating frame directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf()))
}

/// Timestamped destination for a frame saved without an explicit path.
pub fn next_frame_path(config: &CaptureConfig) -> Result<PathBuf> {
    let directory = ensure_directory_exists(&expand_tilde(&config.save_directory))?;
    Ok(directory.join(generate_filename(&config.filename_template)))
}
