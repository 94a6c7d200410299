//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use updater_core::{DEFAULT_REPLACEMENT, DEFAULT_THRESHOLD};

/// Patch outdated Lambda runtimes in a CloudFormation/SAM template
#[derive(Parser, Debug)]
#[command(name = "runtime-update")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the template file to patch in place
    pub template: PathBuf,

    /// Runtimes at or below this version are rewritten
    #[arg(long, env = "RUNTIME_THRESHOLD", default_value = DEFAULT_THRESHOLD)]
    pub threshold: String,

    /// Value written over outdated runtimes
    #[arg(long, env = "RUNTIME_REPLACEMENT", default_value = DEFAULT_REPLACEMENT)]
    pub replacement: String,

    /// Report what would change without touching the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
