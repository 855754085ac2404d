//! Project scaffolding
//!
//! This module owns everything written into the target project: the
//! bible directory and its copied templates, the generated README and
//! setup summary, the ADR directory, and the `.gitignore` marker.

pub mod render;
pub mod setup;
pub mod sources;

pub use setup::ProjectSetup;
