use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RecipeGuardError {
    /// Short category label used as the headline of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::NotADirectory(_) => "Target",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// The human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::NotADirectory(path) => format!("{} is not a directory", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format (see `recipe-guard init`)"),
            Self::FileRead { source, .. } | Self::Io(source) => io_suggestion(source),
            Self::NotADirectory(_) => {
                Some("Pass a recipe folder, or omit the target to check every recipe")
            }
            Self::TomlParse(_) => Some("Check TOML syntax in the config file"),
            Self::JsonSerialize(_) => Some("Report this as a bug: the report is non-serializable"),
        }
    }
}

fn io_suggestion(err: &std::io::Error) -> Option<&'static str> {
    match err.kind() {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, RecipeGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
