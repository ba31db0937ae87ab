use serde::Serialize;

use crate::error::Result;
use crate::runner::{FolderReport, ValidationReport};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    folders: &'a [FolderReport],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total: report.total(),
                passed: report.passed(),
                failed: report.failed(),
            },
            folders: &report.folders,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
