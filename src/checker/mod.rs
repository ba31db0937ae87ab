pub mod document;
pub mod folder;
mod result;

pub use document::{
    check_api_guard, check_api_keys, check_emojis, check_future_annotations, valid_json,
};
pub use folder::{REQUIRED_FILES, check_pillow, check_structure};
pub use result::CheckResult;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Basename of `path` as shown in messages and reports; the full path when it has none.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// What a rule takes as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckScope {
    /// One `.ipynb` file.
    Notebook,
    /// A recipe folder as a whole.
    Folder,
}

/// The named checks selectable with `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Json,
    ApiKeys,
    Emojis,
    FutureAnnotations,
    ApiGuard,
    Structure,
    Pillow,
}

impl CheckKind {
    /// Notebook rules in execution order.
    pub const NOTEBOOK: [Self; 5] = [
        Self::Json,
        Self::ApiKeys,
        Self::Emojis,
        Self::FutureAnnotations,
        Self::ApiGuard,
    ];

    /// Folder rules in execution order.
    pub const FOLDER: [Self; 2] = [Self::Structure, Self::Pillow];

    /// Every check, notebook rules first, each family sorted by name.
    pub const ALL: [Self; 7] = [
        Self::ApiGuard,
        Self::ApiKeys,
        Self::Emojis,
        Self::FutureAnnotations,
        Self::Json,
        Self::Pillow,
        Self::Structure,
    ];

    /// Name accepted by `--only`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::ApiKeys => "api-keys",
            Self::Emojis => "emojis",
            Self::FutureAnnotations => "future-annotations",
            Self::ApiGuard => "api-guard",
            Self::Structure => "structure",
            Self::Pillow => "pillow",
        }
    }

    /// Name carried by the results this check produces.
    #[must_use]
    pub const fn result_name(self) -> &'static str {
        match self {
            Self::Json => document::VALID_JSON,
            Self::ApiKeys => document::API_KEYS,
            Self::Emojis => document::EMOJIS,
            Self::FutureAnnotations => document::FUTURE_ANNOTATIONS,
            Self::ApiGuard => document::API_GUARD,
            Self::Structure => folder::STRUCTURE,
            Self::Pillow => folder::PILLOW,
        }
    }

    #[must_use]
    pub const fn scope(self) -> CheckScope {
        match self {
            Self::Structure | Self::Pillow => CheckScope::Folder,
            _ => CheckScope::Notebook,
        }
    }

    /// Runs the check against a notebook file or folder, according to [`Self::scope`].
    #[must_use]
    pub fn run(self, path: &Path) -> CheckResult {
        match self {
            Self::Json => valid_json(path),
            Self::ApiKeys => check_api_keys(path),
            Self::Emojis => check_emojis(path),
            Self::FutureAnnotations => check_future_annotations(path),
            Self::ApiGuard => check_api_guard(path),
            Self::Structure => check_structure(path),
            Self::Pillow => check_pillow(path),
        }
    }

    /// Whether this check runs under an optional `--only` filter.
    #[must_use]
    pub fn selected_by(self, only: Option<Self>) -> bool {
        only.is_none_or(|kind| kind == self)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("Unknown check: {s} (available: {})", names.join(", "))
            })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
