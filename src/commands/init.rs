use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_SUCCESS, RecipeGuardError, Result};

use super::context::{color_choice_to_mode, report_error};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, color_choice_to_mode(cli.color)),
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RecipeGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# recipe-guard configuration file

[scanner]
# Directory whose immediate subfolders are validated when no target is given
examples_dir = "examples"

[output]
# Report format: "text" or "json"
format = "text"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
