//! Rules that inspect a single notebook file.

use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use super::{CheckResult, file_name};
use crate::notebook::{Notebook, line_of};
use crate::unicode::is_emoji;

pub const VALID_JSON: &str = "valid_json";
pub const API_KEYS: &str = "check_api_keys";
pub const EMOJIS: &str = "check_emojis";
pub const FUTURE_ANNOTATIONS: &str = "check_future_annotations";
pub const API_GUARD: &str = "check_api_guard";

/// Keys every notebook document must carry at the top level.
const REQUIRED_KEYS: [&str; 2] = ["cells", "nbformat"];

/// Environment variable holding the platform API key.
const API_KEY_ENV: &str = "SARVAM_API_KEY";

const FUTURE_IMPORT: &str = "from __future__ import annotations";
const GUARD_RAISE: &str = "raise RuntimeError";

static API_KEY_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\bsk-[A-Za-z0-9_\-]{10,}").expect("Invalid regex"),
        Regex::new(r#"SARVAM_API_KEY\s*=\s*["'][A-Za-z0-9_\-]{8,}["']"#).expect("Invalid regex"),
        Regex::new(r#"(?i)api[_\-]?key\s*=\s*["'][A-Za-z0-9_\-]{8,}["']"#)
            .expect("Invalid regex"),
    ]
});

/// `print(` followed by at most 500 characters up to the first `)`.
static PRINT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bprint\s*\((.{0,500}?)\)").expect("Invalid regex"));

/// Loads the notebook and hands it to `scan`, or fails `rule` if it cannot be parsed.
fn with_notebook(
    rule: &'static str,
    path: &Path,
    scan: impl FnOnce(&str, &Notebook) -> CheckResult,
) -> CheckResult {
    let name = file_name(path);
    Notebook::load(path).map_or_else(
        || CheckResult::fail(rule, format!("Could not parse {name}")),
        |nb| scan(&name, &nb),
    )
}

/// Verifies that the file is valid JSON with the notebook top-level keys.
#[must_use]
pub fn valid_json(path: &Path) -> CheckResult {
    let name = file_name(path);
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return CheckResult::fail(VALID_JSON, format!("Cannot read {name}: {e}")),
    };
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => return CheckResult::fail(VALID_JSON, format!("Invalid JSON in {name}: {e}")),
    };

    let nb = Notebook::from_value(value);
    let missing: Vec<&str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !nb.has_key(key))
        .collect();

    if missing.is_empty() {
        CheckResult::pass(VALID_JSON, format!("{name}: valid notebook JSON"))
    } else {
        CheckResult::fail(
            VALID_JSON,
            format!("{name}: missing top-level key(s): {}", missing.join(", ")),
        )
    }
}

/// Flags code that looks like a hardcoded API key.
#[must_use]
pub fn check_api_keys(path: &Path) -> CheckResult {
    with_notebook(API_KEYS, path, |name, nb| {
        let mut violations = Vec::new();
        for cell in nb.code_cells() {
            for pattern in API_KEY_PATTERNS.iter() {
                for m in pattern.find_iter(&cell.source) {
                    violations.push(format!(
                        "{name} cell {}, line {}: possible hardcoded key matching '{}'",
                        cell.index,
                        line_of(&cell.source, m.start()),
                        pattern.as_str()
                    ));
                }
            }
        }

        if violations.is_empty() {
            CheckResult::pass(API_KEYS, format!("{name}: no hardcoded API key patterns found"))
        } else {
            CheckResult::fail_many(API_KEYS, violations)
        }
    })
}

/// Flags emoji inside `print(...)` arguments.
#[must_use]
pub fn check_emojis(path: &Path) -> CheckResult {
    with_notebook(EMOJIS, path, |name, nb| {
        let mut violations = Vec::new();
        for cell in nb.code_cells() {
            for caps in PRINT_CALL.captures_iter(&cell.source) {
                let (Some(call), Some(arg)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let found: IndexSet<char> = arg.as_str().chars().filter(|&c| is_emoji(c)).collect();
                if found.is_empty() {
                    continue;
                }
                let emojis: String = found.into_iter().collect();
                violations.push(format!(
                    "{name} cell {}, line {}: emoji in print() — '{emojis}'",
                    cell.index,
                    line_of(&cell.source, call.start()),
                ));
            }
        }

        if violations.is_empty() {
            CheckResult::pass(EMOJIS, format!("{name}: no emojis found in print statements"))
        } else {
            CheckResult::fail_many(EMOJIS, violations)
        }
    })
}

/// Requires `from __future__ import annotations` in some code cell.
#[must_use]
pub fn check_future_annotations(path: &Path) -> CheckResult {
    with_notebook(FUTURE_ANNOTATIONS, path, |name, nb| {
        nb.code_cells()
            .iter()
            .find(|cell| cell.source.contains(FUTURE_IMPORT))
            .map_or_else(
                || {
                    CheckResult::fail(
                        FUTURE_ANNOTATIONS,
                        format!("{name}: '{FUTURE_IMPORT}' not found in any code cell"),
                    )
                },
                |cell| {
                    CheckResult::pass(
                        FUTURE_ANNOTATIONS,
                        format!("{name}: found in cell {}", cell.index),
                    )
                },
            )
    })
}

/// Requires a cell that raises `RuntimeError` when the API key variable is missing.
#[must_use]
pub fn check_api_guard(path: &Path) -> CheckResult {
    with_notebook(API_GUARD, path, |name, nb| {
        nb.code_cells()
            .iter()
            .find(|cell| cell.source.contains(GUARD_RAISE) && cell.source.contains(API_KEY_ENV))
            .map_or_else(
                || {
                    CheckResult::fail(
                        API_GUARD,
                        format!(
                            "{name}: no RuntimeError API key guard found. \
                             Add the fail-fast guard described in CONTRIBUTING.md."
                        ),
                    )
                },
                |cell| {
                    CheckResult::pass(
                        API_GUARD,
                        format!("{name}: API key guard found in cell {}", cell.index),
                    )
                },
            )
    })
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
