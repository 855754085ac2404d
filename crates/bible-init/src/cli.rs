//! CLI argument parsing with clap

use bible_init_core::Mode;
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Initialize a project with the Modern-Architecture-101 methodology
#[derive(Parser, Debug)]
#[command(name = "bible-init")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to your project directory
    pub project_path: Utf8PathBuf,

    /// Type of project initialization
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Never prompt; assume the default answer for every question
    #[arg(long)]
    pub no_input: bool,
}

/// Initialization mode token accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Brand-new project directory
    Greenfield,
    /// Already-existing project directory
    Brownfield,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Greenfield => Mode::Greenfield,
            ModeArg::Brownfield => Mode::Brownfield,
        }
    }
}
