//! Recipe folder discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{RecipeGuardError, Result};

/// Recipe folders left out of automatic discovery.
///
/// `TEMPLATE` is the starter skeleton; the rest are legacy single-notebook
/// examples that predate the recipe conventions.
pub const SKIP_FOLDERS: [&str; 5] = [
    "TEMPLATE",
    "converting_wav_into_mp3",
    "stt",
    "stt-translate",
    "tts",
];

pub const NOTEBOOK_EXTENSION: &str = "ipynb";

#[must_use]
pub fn is_skipped(name: &str) -> bool {
    SKIP_FOLDERS.contains(&name)
}

/// Sorted direct children of `dir`, at depth 1 only.
///
/// Symlinks are followed, so entry file types describe the link target.
/// Dangling links are dropped.
fn children(dir: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
}

fn is_notebook(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
}

/// Notebook files directly inside `folder`, sorted by name.
#[must_use]
pub fn notebooks_in(folder: &Path) -> Vec<PathBuf> {
    children(folder)
        .filter(|e| e.file_type().is_file() && is_notebook(e.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Every immediate subdirectory of `examples_dir` that is not exempt and holds
/// at least one notebook, sorted by name.
///
/// A missing `examples_dir` yields no folders.
#[must_use]
pub fn discover_recipes(examples_dir: &Path) -> Vec<PathBuf> {
    children(examples_dir)
        .filter(|e| e.file_type().is_dir())
        .filter(|e| !is_skipped(&e.file_name().to_string_lossy()))
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !notebooks_in(path).is_empty())
        .collect()
}

/// Validates an explicitly named target, bypassing exemption and discovery.
///
/// # Errors
/// Returns [`RecipeGuardError::NotADirectory`] if `path` is not a directory.
pub fn resolve_explicit(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(RecipeGuardError::NotADirectory(path.to_path_buf()));
    }
    Ok(dunce::canonicalize(path)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
