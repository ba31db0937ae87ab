use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::checker::{CheckKind, CheckScope};

#[must_use]
pub fn run_list() -> i32 {
    print!("{}", format_check_list());
    EXIT_SUCCESS
}

/// One line per check: `--only` name, scope, and the rule name it reports under.
#[must_use]
pub fn format_check_list() -> String {
    let mut output = String::new();
    for kind in CheckKind::ALL {
        let scope = match kind.scope() {
            CheckScope::Notebook => "notebook",
            CheckScope::Folder => "folder",
        };
        let _ = writeln!(
            output,
            "{:<20} {scope:<9} {}",
            kind.as_str(),
            kind.result_name()
        );
    }
    output
}
