//! Project initialization command
//!
//! Drives a full setup run: banner, mode-specific bootstrap and bible
//! population via the core pipeline, then the completion report.

use anyhow::Result;
use dialoguer::Confirm;

use bible_init_core::{
    AssumeDefault, Error as CoreError, Prompt, ProjectSetup, SetupOptions, SetupReport,
};

use crate::cli::Cli;
use crate::output::{self, Accent};
use crate::utils;

/// Prompt implementation backed by an interactive terminal
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str, default: bool) -> bible_init_core::Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| CoreError::prompt(e.to_string()))
    }
}

/// Run the initialization command
pub async fn run(cli: Cli) -> Result<()> {
    output::banner(
        "Modern Architecture 101 - Project Initialization",
        Accent::Blue,
    );

    let project_path = utils::resolve_project_path(&cli.project_path)?;
    tracing::debug!("Resolved project path: {}", project_path);
    let options = SetupOptions::new(project_path, cli.mode.into());

    let prompt: Box<dyn Prompt> = if cli.no_input {
        Box::new(AssumeDefault)
    } else {
        Box::new(TerminalPrompt)
    };

    let mut setup = ProjectSetup::new(options, prompt);
    let report = match setup.run().await {
        Ok(report) => report,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    print_completion(&report);
    Ok(())
}

/// Print the completion banner, run summary, and next steps
fn print_completion(report: &SetupReport) {
    println!();
    output::banner("✓ Project Initialization Complete!", Accent::Green);

    output::kv("Project Path", report.project_path.as_str());
    output::kv("Project Type", report.mode.as_str());

    if report.git_initialized {
        output::success("Initialized git repository");
    }
    if !report.copied.is_empty() {
        let files: usize = report.copied.iter().map(|c| c.files).sum();
        output::info(&format!("Copied {files} methodology document(s)"));
    }

    output::header("Next Steps");
    println!("  1. cd {}", report.project_path);
    println!("  2. Review .bible/README.md for guidance");
    println!("  3. Read the core principles in .bible/");
    println!("  4. Create your first ADR when making architectural decisions");

    println!();
    output::kv(
        "Reference",
        "https://github.com/dudleypeacockqa/Modern-Architecture-101",
    );
}
