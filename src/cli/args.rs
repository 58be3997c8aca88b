//! CLI argument definitions using clap
//!
//! Commands:
//! - patchdrill evaluate --scenario <path> [--submission <path>]
//! - patchdrill regions --scenario <path> [--submission <path>]
//! - patchdrill strip --scenario <path>
//! - patchdrill check --scenario <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// patchdrill - a strict, deterministic code-exercise evaluation engine
#[derive(Parser, Debug)]
#[command(name = "patchdrill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a submission against a scenario's rules
    Evaluate {
        /// Path to the scenario JSON file
        #[arg(long)]
        scenario: PathBuf,

        /// Path to the submission text; read from stdin when omitted
        #[arg(long)]
        submission: Option<PathBuf>,
    },

    /// Locate the editable regions within a submission
    Regions {
        /// Path to the scenario JSON file
        #[arg(long)]
        scenario: PathBuf,

        /// Path to the submission text; the pristine starter when omitted
        #[arg(long)]
        submission: Option<PathBuf>,
    },

    /// Print the marker-free starter shown to students
    Strip {
        /// Path to the scenario JSON file
        #[arg(long)]
        scenario: PathBuf,
    },

    /// Check a scenario for authoring mistakes
    Check {
        /// Path to the scenario JSON file
        #[arg(long)]
        scenario: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
