//! Runs the rule set over recipe folders and aggregates the results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{CheckKind, CheckResult, file_name};
use crate::scanner::notebooks_in;

/// Results for one recipe folder, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderReport {
    pub name: String,
    pub path: PathBuf,
    pub results: Vec<CheckResult>,
}

impl FolderReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }
}

/// Accumulated outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub folders: Vec<FolderReport>,
}

impl ValidationReport {
    /// Number of individual check results.
    #[must_use]
    pub fn total(&self) -> usize {
        self.folders.iter().map(|f| f.results.len()).sum()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.folders.iter().map(FolderReport::failed).sum()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.total() - self.failed()
    }

    /// True when no check failed. An empty run is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs folder rules once, then notebook rules once per notebook in `folder`.
///
/// Checks not selected by `only` are never executed.
#[must_use]
pub fn run_folder(folder: &Path, only: Option<CheckKind>) -> Vec<CheckResult> {
    let mut results: Vec<CheckResult> = CheckKind::FOLDER
        .into_iter()
        .filter(|kind| kind.selected_by(only))
        .map(|kind| kind.run(folder))
        .collect();

    let notebook_checks: Vec<CheckKind> = CheckKind::NOTEBOOK
        .into_iter()
        .filter(|kind| kind.selected_by(only))
        .collect();
    if notebook_checks.is_empty() {
        return results;
    }

    for notebook in notebooks_in(folder) {
        results.extend(notebook_checks.iter().map(|kind| kind.run(&notebook)));
    }
    results
}

/// Validates every folder in order, calling `on_folder` after each one.
pub fn validate<F>(folders: &[PathBuf], only: Option<CheckKind>, mut on_folder: F) -> ValidationReport
where
    F: FnMut(&FolderReport),
{
    let mut report = ValidationReport::default();
    for folder in folders {
        let folder_report = FolderReport {
            name: file_name(folder),
            path: folder.clone(),
            results: run_folder(folder, only),
        };
        on_folder(&folder_report);
        report.folders.push(folder_report);
    }
    report
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
