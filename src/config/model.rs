use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

pub const DEFAULT_EXAMPLES_DIR: &str = "examples";

/// Top-level `.recipe-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where recipe folders are discovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Root searched when no explicit target is given (default: `examples`).
    #[serde(default = "default_examples_dir")]
    pub examples_dir: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            examples_dir: default_examples_dir(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_examples_dir() -> String {
    DEFAULT_EXAMPLES_DIR.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
