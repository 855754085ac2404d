//! Utility functions shared across CLI commands

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so shell
/// and container overrides stay consistent with what the user's scripts
/// see.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}

/// Expand a leading `~` and resolve the path to absolute form
///
/// The target may not exist yet (greenfield mode), so the path is made
/// absolute without canonicalization.
pub fn resolve_project_path(input: &Utf8Path) -> Result<Utf8PathBuf> {
    let expanded: PathBuf = if input.as_str() == "~" {
        get_home_dir()?
    } else if let Some(rest) = input.as_str().strip_prefix("~/") {
        get_home_dir()?.join(rest)
    } else {
        input.as_std_path().to_path_buf()
    };

    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve project path: {input}"))?;

    Utf8PathBuf::from_path_buf(absolute)
        .map_err(|p| anyhow!("Project path is not valid UTF-8: {}", p.display()))
}
