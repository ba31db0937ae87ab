use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::RecipeGuardError;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR};

pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Examples root: CLI flag, then config, then the built-in default.
pub(crate) fn resolve_examples_dir(cli_dir: Option<&Path>, config: &Config) -> PathBuf {
    cli_dir.map_or_else(
        || PathBuf::from(&config.scanner.examples_dir),
        Path::to_path_buf,
    )
}

pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Prints `err` on stderr and maps it to a process exit code.
///
/// An invalid target counts as a validation failure; everything else is a
/// configuration or runtime error.
pub(crate) fn report_error(err: &RecipeGuardError, mode: ColorMode) -> i32 {
    write_error_report(&mut std::io::stderr().lock(), err, mode)
}

fn write_error_report<W: Write>(w: &mut W, err: &RecipeGuardError, mode: ColorMode) -> i32 {
    let detail = err.detail();
    ErrorOutput::new(mode).write_error(
        w,
        err.error_type(),
        &err.message(),
        detail.as_deref(),
        err.suggestion(),
    );
    match err {
        RecipeGuardError::NotADirectory(_) => EXIT_CHECKS_FAILED,
        _ => EXIT_CONFIG_ERROR,
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
