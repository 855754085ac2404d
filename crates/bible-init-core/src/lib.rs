//! # bible-init-core
//!
//! Scaffolding library for the bible-init CLI providing:
//! - The sequential project setup pipeline (greenfield and brownfield)
//! - Template source discovery and copying
//! - Generated document rendering
//! - Git repository bootstrap
//!
//! # Examples
//!
//! ## Run a full greenfield setup
//!
//! ```no_run
//! use bible_init_core::{AssumeDefault, Mode, ProjectSetup, SetupOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = SetupOptions::new("/tmp/my-new-app", Mode::Greenfield);
//! let mut setup = ProjectSetup::new(options, Box::new(AssumeDefault));
//! let report = setup.run().await?;
//! assert!(report.bible_path.ends_with(".bible"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod prompt;
pub mod scaffold;
pub mod types;

pub use error::{Error, Result};
pub use prompt::{AssumeDefault, Prompt};
pub use scaffold::ProjectSetup;
pub use types::{CopiedSet, GitignoreOutcome, Mode, SetupOptions, SetupReport};
