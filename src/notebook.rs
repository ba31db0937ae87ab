//! Notebook loading and code-cell extraction.

use std::path::Path;

use serde_json::Value;

/// A parsed `.ipynb` document.
///
/// The raw JSON is kept as-is so that structurally incomplete notebooks still
/// load; only `valid_json` cares about the required top-level keys.
#[derive(Debug, Clone)]
pub struct Notebook {
    raw: Value,
}

/// One code cell with its position in the unfiltered cell list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCell {
    pub index: usize,
    pub source: String,
}

impl Notebook {
    /// Reads and parses a notebook. Returns `None` on any read or parse failure.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok().map(Self::from_value)
    }

    #[must_use]
    pub const fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Whether the document is an object carrying `key` at the top level.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.raw.as_object().is_some_and(|obj| obj.contains_key(key))
    }

    /// Code cells in document order. Indices refer to the original cell list,
    /// so markdown cells leave gaps.
    #[must_use]
    pub fn code_cells(&self) -> Vec<CodeCell> {
        let Some(cells) = self.raw.get("cells").and_then(Value::as_array) else {
            return Vec::new();
        };

        cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.get("cell_type").and_then(Value::as_str) == Some("code"))
            .map(|(index, cell)| CodeCell {
                index,
                source: join_source(cell.get("source")),
            })
            .collect()
    }
}

/// `source` is either one string or a list of fragments.
fn join_source(source: Option<&Value>) -> String {
    match source {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}

/// 1-based line number of `offset` within `source`.
#[must_use]
pub fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

#[cfg(test)]
#[path = "notebook_tests.rs"]
mod tests;
