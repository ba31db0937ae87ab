//! Rules that inspect a recipe folder without parsing its notebooks.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{CheckResult, file_name};

pub const STRUCTURE: &str = "check_structure";
pub const PILLOW: &str = "check_pillow";

/// Files every notebook recipe folder must contain, relative to its root.
pub const REQUIRED_FILES: [&str; 4] = [
    ".env.example",
    "requirements.txt",
    "README.md",
    "sample_data/.gitkeep",
];

const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Lowest acceptable Pillow pin (major, minor, patch).
pub const MIN_PILLOW: (u64, u64, u64) = (12, 1, 1);

static PILLOW_LISTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpillow\b").expect("Invalid regex"));
static PILLOW_PIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)pillow\s*>=\s*(\d+)\.(\d+)\.(\d+)").expect("Invalid regex")
});
static PILLOW_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpillow\b([^\n]*)").expect("Invalid regex"));

/// Verifies that the folder contains every entry in [`REQUIRED_FILES`].
#[must_use]
pub fn check_structure(folder: &Path) -> CheckResult {
    let name = file_name(folder);
    let missing: Vec<String> = REQUIRED_FILES
        .iter()
        .filter(|rel| !folder.join(rel).exists())
        .map(|rel| format!("{name}: missing {rel}"))
        .collect();

    if missing.is_empty() {
        CheckResult::pass(STRUCTURE, format!("{name}: all required files present"))
    } else {
        CheckResult::fail_many(STRUCTURE, missing)
    }
}

/// If Pillow is listed in `requirements.txt`, verifies it is pinned `>=` [`MIN_PILLOW`].
#[must_use]
pub fn check_pillow(folder: &Path) -> CheckResult {
    let name = file_name(folder);
    let req_path = folder.join(REQUIREMENTS_FILE);
    if !req_path.exists() {
        return CheckResult::pass(PILLOW, format!("{name}: no {REQUIREMENTS_FILE}, skipping"));
    }

    let text = match std::fs::read_to_string(&req_path) {
        Ok(text) => text,
        Err(e) => {
            return CheckResult::fail(PILLOW, format!("{name}: cannot read {REQUIREMENTS_FILE}: {e}"));
        }
    };

    if !PILLOW_LISTED.is_match(&text) {
        return CheckResult::pass(PILLOW, format!("{name}: Pillow not listed, skipping"));
    }

    let Some((major, minor, patch)) = parse_pin(&text) else {
        return CheckResult::fail(
            PILLOW,
            format!(
                "{name}: Pillow present but not pinned >= {}. Found: '{}'",
                min_version(),
                raw_requirement(&text)
            ),
        );
    };

    if (major, minor, patch) < MIN_PILLOW {
        CheckResult::fail(
            PILLOW,
            format!(
                "{name}: Pillow>={major}.{minor}.{patch} is below the minimum {}",
                min_version()
            ),
        )
    } else {
        CheckResult::pass(
            PILLOW,
            format!("{name}: Pillow>={major}.{minor}.{patch} meets >= {}", min_version()),
        )
    }
}

fn min_version() -> String {
    let (major, minor, patch) = MIN_PILLOW;
    format!("{major}.{minor}.{patch}")
}

/// First `pillow>=X.Y.Z` lower bound in the manifest.
fn parse_pin(text: &str) -> Option<(u64, u64, u64)> {
    let caps = PILLOW_PIN.captures(text)?;
    let part = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    Some((part(1)?, part(2)?, part(3)?))
}

/// The Pillow requirement as written, or `(unpinned)` when it has no version expression.
fn raw_requirement(text: &str) -> String {
    let Some(caps) = PILLOW_LINE.captures(text) else {
        return "(unpinned)".to_string();
    };
    let version_expr = caps.get(1).map_or("", |m| m.as_str());
    let version_expr = version_expr.split('#').next().unwrap_or_default();
    if version_expr.contains(['<', '>', '=', '!', '~']) {
        caps.get(0)
            .map_or_else(|| "(unpinned)".to_string(), |m| m.as_str().trim().to_string())
    } else {
        "(unpinned)".to_string()
    }
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;
