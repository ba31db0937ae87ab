#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the recipe-guard binary.
#[macro_export]
macro_rules! recipe_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("recipe-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a recipe-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".recipe-guard.toml", content);
    }

    /// Creates a complete, passing recipe folder with one notebook at `relative_path`.
    pub fn create_recipe(&self, relative_path: &str) -> PathBuf {
        for file in [".env.example", "README.md", "sample_data/.gitkeep"] {
            self.create_file(&format!("{relative_path}/{file}"), "");
        }
        self.create_file(
            &format!("{relative_path}/requirements.txt"),
            "requests\nPillow>=12.1.1\n",
        );
        self.create_file(&format!("{relative_path}/demo.ipynb"), GOOD_NOTEBOOK);
        self.path().join(relative_path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Notebook that passes every notebook rule.
pub const GOOD_NOTEBOOK: &str = r##"{
  "cells": [
    {"cell_type": "markdown", "source": ["# Demo 🚀\n"]},
    {"cell_type": "code", "source": ["from __future__ import annotations\n", "import os\n"]},
    {"cell_type": "code", "source": ["if not os.getenv(\"SARVAM_API_KEY\"):\n", "    raise RuntimeError(\"Set SARVAM_API_KEY\")\n"]},
    {"cell_type": "code", "source": "print(\"done\")"}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"##;

/// Notebook that prints an emoji and hardcodes a key, but is otherwise fine.
pub const LEAKY_NOTEBOOK: &str = r#"{
  "cells": [
    {"cell_type": "code", "source": ["from __future__ import annotations\n", "import os\n"]},
    {"cell_type": "code", "source": ["if not os.getenv(\"SARVAM_API_KEY\"):\n", "    raise RuntimeError(\"Set SARVAM_API_KEY\")\n"]},
    {"cell_type": "code", "source": ["client = Client(api_key=\"abcd1234efgh\")\n", "print(\"ready ✅\")\n"]}
  ],
  "nbformat": 4
}"#;

/// Config pointing discovery at `recipes/` and selecting JSON output.
pub const JSON_CONFIG: &str = r#"
[scanner]
examples_dir = "recipes"

[output]
format = "json"
"#;
