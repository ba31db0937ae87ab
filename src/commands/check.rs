use std::path::PathBuf;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress,
    TextFormatter,
};
use crate::runner::{ValidationReport, validate};
use crate::scanner::{discover_recipes, notebooks_in, resolve_explicit};
use crate::{EXIT_CHECKS_FAILED, EXIT_SUCCESS};

use super::context::{
    color_choice_to_mode, load_config, report_error, resolve_examples_dir, write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, color_choice_to_mode(cli.color)),
    }
}

/// Runs a validation pass and returns the process exit code.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the explicit target is not a
/// directory, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Select targets; an invalid explicit target aborts before any check runs
    let folders = select_folders(args, &config, cli)?;

    // 3. Run checks folder by folder
    let progress = ScanProgress::new(folders.len() as u64, cli.quiet);
    let report = validate(&folders, args.only, |folder| {
        if cli.verbose > 0 {
            eprintln!(
                "Checked {} ({} result(s), {} failed)",
                folder.name,
                folder.results.len(),
                folder.failed()
            );
        }
        progress.inc(&folder.name);
    });
    progress.finish();

    // 4. Format and write the report
    let format = args.format.unwrap_or(config.output.format);
    let output = format_output(format, &report, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_CHECKS_FAILED
    })
}

fn select_folders(args: &CheckArgs, config: &Config, cli: &Cli) -> crate::Result<Vec<PathBuf>> {
    if let Some(target) = &args.target {
        let folder = resolve_explicit(target)?;
        if cli.verbose > 0 {
            eprintln!(
                "Target {} ({} notebook(s))",
                folder.display(),
                notebooks_in(&folder).len()
            );
        }
        return Ok(vec![folder]);
    }

    let examples_dir = resolve_examples_dir(args.examples_dir.as_deref(), config);
    if !examples_dir.is_dir() && !cli.quiet {
        ErrorOutput::new(color_choice_to_mode(cli.color)).print_warning(&format!(
            "examples directory not found: {}",
            examples_dir.display()
        ));
    }

    let folders = discover_recipes(&examples_dir);
    if cli.verbose > 0 {
        eprintln!(
            "Discovered {} recipe folder(s) in {}",
            folders.len(),
            examples_dir.display()
        );
        if cli.verbose > 1 {
            for folder in &folders {
                eprintln!("  {}", folder.display());
            }
        }
    }
    Ok(folders)
}

pub(crate) fn format_output(
    format: OutputFormat,
    report: &ValidationReport,
    color_mode: ColorMode,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
