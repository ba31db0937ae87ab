pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod notebook;
pub mod output;
pub mod runner;
pub mod scanner;
pub mod unicode;

pub use error::{RecipeGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
