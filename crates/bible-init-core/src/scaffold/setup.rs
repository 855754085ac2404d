//! The sequential setup pipeline
//!
//! [`ProjectSetup`] owns one run against a target project: mode-specific
//! bootstrap, bible directory creation, template copy, generated
//! documents, ADR directory, and the `.gitignore` marker. Every step is
//! idempotent-safe, so the whole pipeline may be re-run against the same
//! target any number of times.

use std::fs;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::git;
use crate::prompt::Prompt;
use crate::scaffold::{render, sources};
use crate::types::{CopiedSet, GitignoreOutcome, Mode, SetupOptions, SetupReport};

/// Marker substring checked before appending to `.gitignore`
const GITIGNORE_MARKER: &str = ".bible";

/// Comment block appended when the marker is absent. The lines are
/// comments only; the bible directory stays under version control.
const GITIGNORE_NOTE: &str = "\n# Architecture methodology (keep in version control)\n# .bible/\n";

/// One setup run against a target project
pub struct ProjectSetup {
    options: SetupOptions,
    bible_path: Utf8PathBuf,
    prompt: Box<dyn Prompt>,
}

impl ProjectSetup {
    /// Create a setup run for `options`, asking questions through `prompt`
    pub fn new(options: SetupOptions, prompt: Box<dyn Prompt>) -> Self {
        let bible_path = options.project_path.join(".bible");
        Self {
            options,
            bible_path,
            prompt,
        }
    }

    /// Path of the bible directory this run populates
    pub fn bible_path(&self) -> &Utf8Path {
        &self.bible_path
    }

    /// Execute the full pipeline and return a report of what happened
    ///
    /// # Errors
    /// The only fatal condition is a brownfield target that does not
    /// exist. Missing template sources, pre-existing output files, and
    /// git failures all degrade to skip-or-overwrite.
    pub async fn run(&mut self) -> Result<SetupReport> {
        let git_initialized = match self.options.mode {
            Mode::Greenfield => self.bootstrap_greenfield().await?,
            Mode::Brownfield => self.bootstrap_brownfield().await?,
        };

        // A declined overwrite only skips the mkdir; an existing
        // directory is still refreshed by the steps below.
        let bible_created = self.ensure_bible_directory()?;
        let copied = self.copy_templates()?;
        self.write_readme()?;
        self.ensure_adr_directory()?;
        let gitignore = self.ensure_gitignore_entry()?;
        self.write_setup_summary()?;

        Ok(SetupReport {
            project_path: self.options.project_path.clone(),
            bible_path: self.bible_path.clone(),
            mode: self.options.mode,
            bible_created,
            copied,
            gitignore,
            git_initialized,
        })
    }

    /// Create the project directory, git repository, and standard source
    /// tree for a brand-new project. Returns whether git was initialized.
    async fn bootstrap_greenfield(&mut self) -> Result<bool> {
        info!("Initializing greenfield project...");
        let path = self.options.project_path.clone();

        if !path.exists() {
            fs::create_dir_all(&path)?;
            info!("Created project directory");
        }

        let git_initialized = if git::is_repository(&path) {
            false
        } else {
            self.try_init_git(&path).await
        };

        for dir in ["src", "tests", "docs"] {
            fs::create_dir_all(path.join(dir))?;
        }
        info!("Created standard project structure");

        Ok(git_initialized)
    }

    /// Verify an existing project and optionally initialize git there.
    /// Returns whether git was initialized.
    async fn bootstrap_brownfield(&mut self) -> Result<bool> {
        info!("Initializing brownfield project...");
        let path = self.options.project_path.clone();

        if !path.exists() {
            return Err(Error::project_not_found(path.as_str()));
        }

        if git::is_repository(&path) {
            return Ok(false);
        }

        warn!("Project is not a git repository");
        if !self.prompt.confirm("Do you want to initialize git?", false)? {
            return Ok(false);
        }

        Ok(self.try_init_git(&path).await)
    }

    /// Run `git init`, logging failure as a warning instead of aborting
    async fn try_init_git(&self, path: &Utf8Path) -> bool {
        match git::init_repository(path).await {
            Ok(()) => {
                info!("Initialized git repository");
                true
            }
            Err(e) => {
                warn!("Skipping git initialization: {}", e);
                false
            }
        }
    }

    /// Create the bible directory, asking before touching an existing one.
    ///
    /// Returns `false` when the user declines the overwrite; the caller
    /// still proceeds with the remaining steps against the existing
    /// directory.
    fn ensure_bible_directory(&mut self) -> Result<bool> {
        if self.bible_path.exists() {
            warn!(".bible directory already exists");
            if !self
                .prompt
                .confirm("Do you want to overwrite existing files?", false)?
            {
                info!("Skipping .bible directory creation");
                return Ok(false);
            }
        }

        fs::create_dir_all(&self.bible_path)?;
        info!("Created .bible directory at {}", self.bible_path);
        Ok(true)
    }

    /// Copy every available template source into the bible directory
    fn copy_templates(&self) -> Result<Vec<CopiedSet>> {
        info!("Copying core methodology documents...");

        let root = self
            .options
            .install_root
            .clone()
            .or_else(sources::default_install_root);
        let Some(root) = root else {
            debug!("No template installation root available, skipping copy step");
            return Ok(Vec::new());
        };

        let mut copied = Vec::new();
        for source in sources::builtin_sources() {
            match sources::copy_into(&root, &source, &self.bible_path)? {
                Some(files) => {
                    info!("Copied {} ({} files)", source.label, files);
                    copied.push(CopiedSet {
                        label: source.label.to_string(),
                        files,
                    });
                }
                None => debug!("Template source missing, skipped: {}", source.label),
            }
        }

        Ok(copied)
    }

    /// Write `.bible/README.md`, overwriting any previous copy
    fn write_readme(&self) -> Result<()> {
        fs::write(self.bible_path.join("README.md"), render::BIBLE_README)?;
        info!("Created .bible/README.md");
        Ok(())
    }

    /// Create `.bible/decisions/` and its placeholder file
    fn ensure_adr_directory(&self) -> Result<()> {
        let adr_path = self.bible_path.join("decisions");
        fs::create_dir_all(&adr_path)?;
        fs::write(adr_path.join(".gitkeep"), render::ADR_PLACEHOLDER)?;
        info!("Created ADR directory at {}", adr_path);
        Ok(())
    }

    /// Append the informational `.bible` comment block to `.gitignore`
    /// exactly once. Existing content is never truncated or rewritten.
    fn ensure_gitignore_entry(&self) -> Result<GitignoreOutcome> {
        let gitignore_path = self.options.project_path.join(".gitignore");

        let created = !gitignore_path.exists();
        if created {
            fs::write(&gitignore_path, "")?;
            info!("Created .gitignore");
        }

        let content = fs::read_to_string(&gitignore_path)?;
        if content.contains(GITIGNORE_MARKER) {
            debug!(".gitignore already carries the .bible note");
            return Ok(GitignoreOutcome::AlreadyMarked);
        }

        let mut file = fs::OpenOptions::new().append(true).open(&gitignore_path)?;
        file.write_all(GITIGNORE_NOTE.as_bytes())?;
        info!("Added .bible note to .gitignore (commented out to keep in version control)");

        Ok(if created {
            GitignoreOutcome::Created
        } else {
            GitignoreOutcome::Appended
        })
    }

    /// Render and write `.bible/SETUP-SUMMARY.md`
    fn write_setup_summary(&self) -> Result<()> {
        let vars = render::DocVars::new(self.project_name(), self.options.mode);
        let summary = render::render_string(render::SETUP_SUMMARY, &vars);
        fs::write(self.bible_path.join("SETUP-SUMMARY.md"), summary)?;
        info!("Created setup summary");
        Ok(())
    }

    /// Base name of the target directory, used as the project name
    fn project_name(&self) -> &str {
        self.options.project_path.file_name().unwrap_or("project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AssumeDefault;
    use tempfile::TempDir;

    fn utf8(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_gitignore_note_is_comment_only() {
        for line in GITIGNORE_NOTE.lines().filter(|l| !l.is_empty()) {
            assert!(line.starts_with('#'), "line is not a comment: {line}");
        }
    }

    #[test]
    fn test_gitignore_marker_outcomes() {
        let temp = TempDir::new().unwrap();
        let project = utf8(&temp).join("app");
        fs::create_dir_all(&project).unwrap();

        let setup = ProjectSetup::new(
            SetupOptions::new(project.clone(), Mode::Brownfield),
            Box::new(AssumeDefault),
        );

        assert_eq!(
            setup.ensure_gitignore_entry().unwrap(),
            GitignoreOutcome::Created
        );
        assert_eq!(
            setup.ensure_gitignore_entry().unwrap(),
            GitignoreOutcome::AlreadyMarked
        );

        let content = fs::read_to_string(project.join(".gitignore")).unwrap();
        assert_eq!(content.matches("# .bible/").count(), 1);
    }

    #[test]
    fn test_gitignore_append_preserves_existing_content() {
        let temp = TempDir::new().unwrap();
        let project = utf8(&temp).join("app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(".gitignore"), "target/\n").unwrap();

        let setup = ProjectSetup::new(
            SetupOptions::new(project.clone(), Mode::Brownfield),
            Box::new(AssumeDefault),
        );

        assert_eq!(
            setup.ensure_gitignore_entry().unwrap(),
            GitignoreOutcome::Appended
        );

        let content = fs::read_to_string(project.join(".gitignore")).unwrap();
        assert!(content.starts_with("target/\n"));
        assert!(content.contains("# .bible/"));
    }

    #[test]
    fn test_project_name_is_directory_base_name() {
        let setup = ProjectSetup::new(
            SetupOptions::new("/tmp/some/demo-app", Mode::Greenfield),
            Box::new(AssumeDefault),
        );
        assert_eq!(setup.project_name(), "demo-app");
    }
}
