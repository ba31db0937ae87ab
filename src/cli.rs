use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::CheckKind;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "recipe-guard")]
#[command(author, version, about = "Validate notebook recipe folders")]
#[command(long_about = "Validates cookbook recipe folders: notebook JSON structure, hardcoded \
    API keys, emoji in print() output, required files and dependency pins.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Check failures found, or the target is not a directory\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one recipe folder, or every recipe under the examples directory
    Check(CheckArgs),

    /// List the check names accepted by `check --only`
    List,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Recipe folder to validate (default: all notebook recipes in the examples directory)
    pub target: Option<PathBuf>,

    /// Run only one check [possible values: api-guard, api-keys, emojis,
    /// future-annotations, json, pillow, structure]
    #[arg(long, value_name = "CHECK")]
    pub only: Option<CheckKind>,

    /// Directory searched for recipes when no target is given (overrides config)
    #[arg(long)]
    pub examples_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".recipe-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
