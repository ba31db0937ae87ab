use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over recipe folders.
///
/// Hidden in quiet mode or when stderr is not a TTY.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a progress bar for `total` folders on stderr.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Validating [{bar:40.cyan/blue}] {pos}/{len} recipes {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Marks one folder as done.
    pub fn inc(&self, folder_name: &str) {
        self.progress_bar.set_message(folder_name.to_string());
        self.progress_bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
