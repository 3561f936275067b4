//! CLI argument definitions for `lp_parse`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Parse an LP file and print its structure.
#[derive(Parser)]
#[command(name = "lp_parse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the LP file.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print structured output (JSON only).
    #[arg(long)]
    pub pretty: bool,

    /// Increase output verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    /// Plain-text summary.
    #[default]
    Text,
    /// JSON (requires the `serde` feature).
    #[cfg(feature = "serde")]
    Json,
    /// YAML (requires the `serde` feature).
    #[cfg(feature = "serde")]
    Yaml,
}
