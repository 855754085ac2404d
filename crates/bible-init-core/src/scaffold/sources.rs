//! Template source locations
//!
//! The methodology documents ship alongside the installed tool. Each
//! source is addressed relative to the installation root and copied
//! verbatim into the target's bible directory; a missing source is not an
//! error, the copy step simply skips it.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;

/// Environment variable overriding the template installation root
pub const INSTALL_ROOT_ENV: &str = "BIBLE_INIT_HOME";

/// A fixed template source relative to the installation root
#[derive(Debug, Clone, Copy)]
pub struct TemplateSource {
    /// Human-readable label used in logs and the setup report
    pub label: &'static str,
    /// Where the files live under the installation root
    pub location: SourceLocation,
}

/// How a template source is addressed
#[derive(Debug, Clone, Copy)]
pub enum SourceLocation {
    /// Copy every `*.md` file from this directory
    MarkdownDir(&'static str),
    /// Copy a single file
    File(&'static str),
}

/// The four template sources shipped with the methodology
pub fn builtin_sources() -> [TemplateSource; 4] {
    [
        TemplateSource {
            label: "BMAD integration documents",
            location: SourceLocation::MarkdownDir(".bible"),
        },
        TemplateSource {
            label: "core principles",
            location: SourceLocation::MarkdownDir("core-principles"),
        },
        TemplateSource {
            label: "ADR template",
            location: SourceLocation::File(
                "decision-frameworks/01-architecture-decision-record-template.md",
            ),
        },
        TemplateSource {
            label: "PRD template",
            location: SourceLocation::File("prd-templates/01-architecture-aware-prd.md"),
        },
    ]
}

/// Resolve the installation root holding the template sources
///
/// Prefers the `BIBLE_INIT_HOME` environment variable; otherwise derives
/// the root from the running executable (`<root>/bin/bible-init` →
/// `<root>`). Returns `None` when neither resolves, in which case the
/// copy step degrades to a no-op.
pub fn default_install_root() -> Option<Utf8PathBuf> {
    if let Ok(root) = std::env::var(INSTALL_ROOT_ENV) {
        return Some(Utf8PathBuf::from(root));
    }

    let exe = std::env::current_exe().ok()?;
    let exe = Utf8PathBuf::from_path_buf(exe).ok()?;
    Some(exe.parent()?.parent()?.to_path_buf())
}

/// Copy one template source into `dest`, overwriting same-named files
///
/// Returns `Ok(None)` when the source does not exist under `root`, and
/// `Ok(Some(count))` with the number of files copied otherwise.
pub fn copy_into(
    root: &Utf8Path,
    source: &TemplateSource,
    dest: &Utf8Path,
) -> Result<Option<usize>> {
    match source.location {
        SourceLocation::MarkdownDir(rel) => {
            let dir = root.join(rel);
            if !dir.is_dir() {
                return Ok(None);
            }

            let mut count = 0;
            for entry in dir.read_dir_utf8()? {
                let entry = entry?;
                let path = entry.path();
                if path.is_file() && path.extension() == Some("md") {
                    if let Some(name) = path.file_name() {
                        fs::copy(path, dest.join(name))?;
                        count += 1;
                    }
                }
            }
            Ok(Some(count))
        }
        SourceLocation::File(rel) => {
            let file = root.join(rel);
            if !file.is_file() {
                return Ok(None);
            }
            let Some(name) = file.file_name() else {
                return Ok(None);
            };
            fs::copy(&file, dest.join(name))?;
            Ok(Some(1))
        }
    }
}
