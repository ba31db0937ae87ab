use std::fmt::Write;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::runner::{FolderReport, ValidationReport};

use super::{ColorMode, OutputFormatter, ansi};

const DIVIDER_WIDTH: usize = 52;

pub const NO_FOLDERS_MESSAGE: &str = "No notebook recipe folders found to validate.";

/// Plain console report: one `[PASS]`/`[FAIL]` line per message, grouped by folder.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        let color = if result.is_passed() {
            ansi::GREEN
        } else {
            ansi::RED
        };
        let status = self.colorize_with_color(result.status_label(), color);
        for msg in result.messages() {
            let _ = writeln!(output, "  [{status}] {msg}");
        }
    }

    fn format_folder(&self, folder: &FolderReport, output: &mut String) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", folder.name);
        for result in &folder.results {
            self.format_result(result, output);
        }
    }

    fn format_summary(&self, report: &ValidationReport, output: &mut String) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", "=".repeat(DIVIDER_WIDTH));
        let _ = writeln!(
            output,
            "Results: {}/{} checks passed.",
            report.passed(),
            report.total()
        );

        if report.is_success() {
            let _ = writeln!(
                output,
                "{}",
                self.colorize_with_color("All checks passed.", ansi::GREEN)
            );
        } else {
            let failed = format!("FAILED: {} check(s) did not pass.", report.failed());
            let _ = writeln!(output, "{}", self.colorize_with_color(&failed, ansi::RED));
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();

        if report.folders.is_empty() {
            let _ = writeln!(output, "{NO_FOLDERS_MESSAGE}");
            return Ok(output);
        }

        for folder in &report.folders {
            self.format_folder(folder, &mut output);
        }
        self.format_summary(report, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
