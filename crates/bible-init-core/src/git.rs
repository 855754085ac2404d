//! Git bootstrap operations
//!
//! The exit status and stderr of `git init` are captured and logged so a
//! failed init is visible; callers downgrade the failure to a warning and
//! keep the setup run going.

use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Check whether `path` is already a git repository
pub fn is_repository(path: &Utf8Path) -> bool {
    path.join(".git").exists()
}

/// Initialize a new git repository at `path`
///
/// # Errors
/// Returns error if:
/// - Git is not installed
/// - The directory doesn't exist
/// - `git init` exits non-zero
pub async fn init_repository(path: &Utf8Path) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    check_git_available().await?;

    if !path.exists() {
        return Err(Error::project_not_found(path.as_str()));
    }

    if is_repository(path) {
        debug!("Git repository already exists at: {}", path);
        return Ok(());
    }

    let output = Command::new("git")
        .current_dir(path)
        .arg("init")
        .output()
        .await?;

    debug!("git init exited with status: {}", output.status);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git init failed: {}", stderr)));
    }

    info!("Repository initialized successfully");
    Ok(())
}

/// Check if git is available in PATH
async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}
