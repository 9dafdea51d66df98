use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "cdm-guard")]
#[command(author, version, about = "Conjunction data message guard - check CDMs for consistency")]
#[command(long_about = "Checks a conjunction data message for internal consistency and \
    plausibility,\nproducing a pass/warn/fail report.\n\n\
    Exit codes:\n  \
    0 - Message OK (no FAIL findings)\n  \
    1 - One or more FAIL findings\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Show PASS findings in text output, not just WARN/FAIL
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a conjunction message file (JSON/TOML)
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the message file
    pub path: PathBuf,

    /// Path to a rules file overriding the default thresholds (TOML)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
