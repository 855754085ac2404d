//! Generated document rendering
//!
//! The two generated documents are embedded at compile time and rendered
//! with literal `{var}` replacement. The README has no variables; the
//! setup summary interpolates the project name, setup date, and mode.

use chrono::Local;
use serde::Serialize;

use crate::types::Mode;

/// Embedded `.bible/README.md` content
pub const BIBLE_README: &str = include_str!("../../templates/bible-readme.md");

/// Embedded `.bible/SETUP-SUMMARY.md` template
pub const SETUP_SUMMARY: &str = include_str!("../../templates/setup-summary.md");

/// Placeholder written into `.bible/decisions/.gitkeep`
pub const ADR_PLACEHOLDER: &str = "# Architecture Decision Records

Place your ADRs in this directory using the format:
ADR-001-[decision-title].md
";

/// Variables interpolated into generated documents
#[derive(Debug, Clone, Serialize)]
pub struct DocVars {
    pub project_name: String,
    pub setup_date: String,
    pub project_type: String,
}

impl DocVars {
    /// Create variables for `project_name` and `mode`, stamped with
    /// today's date in `YYYY-MM-DD` form.
    pub fn new(project_name: impl Into<String>, mode: Mode) -> Self {
        Self {
            project_name: project_name.into(),
            setup_date: Local::now().format("%Y-%m-%d").to_string(),
            project_type: mode.as_str().to_string(),
        }
    }
}

/// Render a template with literal `{var}` replacement
pub fn render_string(template: &str, vars: &DocVars) -> String {
    template
        .replace("{project_name}", &vars.project_name)
        .replace("{setup_date}", &vars.setup_date)
        .replace("{project_type}", &vars.project_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_names_the_bible() {
        assert!(BIBLE_README.contains("Project Architecture Bible"));
    }

    #[test]
    fn test_render_summary_interpolates_all_vars() {
        let vars = DocVars::new("demo-app", Mode::Greenfield);
        let rendered = render_string(SETUP_SUMMARY, &vars);

        assert!(rendered.contains("**Project:** demo-app"));
        assert!(rendered.contains(&format!("**Setup Date:** {}", vars.setup_date)));
        assert!(rendered.contains("**Project Type:** greenfield"));
        assert!(!rendered.contains("{project_name}"));
    }

    #[test]
    fn test_setup_date_is_iso_formatted() {
        let vars = DocVars::new("demo", Mode::Brownfield);
        let parts: Vec<&str> = vars.setup_date.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }
}
