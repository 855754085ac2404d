//! Core types for project setup

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Initialization mode for a target project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Brand-new project directory
    Greenfield,
    /// Already-existing project directory
    Brownfield,
}

impl Mode {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greenfield => "greenfield",
            Self::Brownfield => "brownfield",
        }
    }

    /// Get description for the mode
    pub fn description(&self) -> &'static str {
        match self {
            Self::Greenfield => "new project",
            Self::Brownfield => "existing project",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for a single setup run
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Absolute path to the target project directory
    pub project_path: Utf8PathBuf,
    /// Initialization mode
    pub mode: Mode,
    /// Root directory holding the template sources. `None` resolves the
    /// installation root from `BIBLE_INIT_HOME` or the executable location.
    pub install_root: Option<Utf8PathBuf>,
}

impl SetupOptions {
    /// Create options for the given path and mode, resolving the install
    /// root lazily at copy time.
    pub fn new(project_path: impl Into<Utf8PathBuf>, mode: Mode) -> Self {
        Self {
            project_path: project_path.into(),
            mode,
            install_root: None,
        }
    }

    /// Override the template installation root (used by tests)
    pub fn with_install_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.install_root = Some(root.into());
        self
    }
}

/// What happened to the target's `.gitignore` during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitignoreOutcome {
    /// File was missing and has been created with the marker block
    Created,
    /// File existed without the marker; the comment block was appended
    Appended,
    /// Marker already present, file left untouched
    AlreadyMarked,
}

/// Per-source result of the template copy step
#[derive(Debug, Clone, Serialize)]
pub struct CopiedSet {
    /// Human-readable label of the template source
    pub label: String,
    /// Number of files copied into the bible directory
    pub files: usize,
}

/// Summary of a completed setup run, returned by [`ProjectSetup::run`]
///
/// [`ProjectSetup::run`]: crate::scaffold::ProjectSetup::run
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    /// Absolute target project path
    pub project_path: Utf8PathBuf,
    /// Path to the populated bible directory
    pub bible_path: Utf8PathBuf,
    /// Mode the run executed in
    pub mode: Mode,
    /// Whether the bible directory was created by this run
    pub bible_created: bool,
    /// Template sources that were found and copied
    pub copied: Vec<CopiedSet>,
    /// Outcome of the `.gitignore` marker step
    pub gitignore: GitignoreOutcome,
    /// Whether a git repository was initialized by this run
    pub git_initialized: bool,
}
