//! Error types for bible-init-core

use thiserror::Error;

/// Result type alias using bible-init-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project setup error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project directory not found (brownfield mode)
    #[error("Project directory does not exist: {path}")]
    ProjectNotFound { path: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Confirmation prompt failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project not found error
    pub fn project_not_found(path: impl Into<String>) -> Self {
        Self::ProjectNotFound { path: path.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}
