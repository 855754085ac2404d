//! Injectable confirmation capability
//!
//! Interactive questions go through the [`Prompt`] trait so the setup
//! pipeline can run against a real terminal, a `--no-input` session, or a
//! scripted fake in tests.

use crate::error::Result;

/// A yes/no confirmation source
pub trait Prompt {
    /// Ask `question` and return the answer, falling back to `default`
    /// on empty input.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Prompt implementation that never asks and always returns the default
/// answer. Backs the CLI's `--no-input` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeDefault;

impl Prompt for AssumeDefault {
    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_default_returns_default() {
        let mut prompt = AssumeDefault;
        assert!(!prompt.confirm("Overwrite?", false).unwrap());
        assert!(prompt.confirm("Continue?", true).unwrap());
    }
}
