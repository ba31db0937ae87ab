use std::path::PathBuf;

use super::*;

fn folder(name: &str, results: Vec<CheckResult>) -> FolderReport {
    FolderReport {
        name: name.to_string(),
        path: PathBuf::from("examples").join(name),
        results,
    }
}

fn mixed_report() -> ValidationReport {
    ValidationReport {
        folders: vec![
            folder(
                "bill-interpreter",
                vec![
                    CheckResult::pass("check_structure", "bill-interpreter: all required files present"),
                    CheckResult::fail_many(
                        "check_emojis",
                        vec![
                            "demo.ipynb cell 1, line 1: emoji in print() — '✅'".to_string(),
                            "demo.ipynb cell 4, line 2: emoji in print() — '🚀'".to_string(),
                        ],
                    ),
                ],
            ),
            folder(
                "voice-notes",
                vec![CheckResult::pass("check_pillow", "voice-notes: Pillow not listed, skipping")],
            ),
        ],
    }
}

#[test]
fn format_lists_each_message_under_its_folder() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&mixed_report())
        .unwrap();

    let expected = "\nbill-interpreter\n\
        \x20 [PASS] bill-interpreter: all required files present\n\
        \x20 [FAIL] demo.ipynb cell 1, line 1: emoji in print() — '✅'\n\
        \x20 [FAIL] demo.ipynb cell 4, line 2: emoji in print() — '🚀'\n\
        \nvoice-notes\n\
        \x20 [PASS] voice-notes: Pillow not listed, skipping\n";
    assert!(output.starts_with(expected), "got:\n{output}");
}

#[test]
fn format_summary_counts_checks_not_messages() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&mixed_report())
        .unwrap();

    assert!(output.contains(&"=".repeat(52)));
    assert!(output.contains("Results: 2/3 checks passed."));
    assert!(output.ends_with("FAILED: 1 check(s) did not pass.\n"));
}

#[test]
fn format_all_passed() {
    let report = ValidationReport {
        folders: vec![folder(
            "r",
            vec![CheckResult::pass("valid_json", "demo.ipynb: valid notebook JSON")],
        )],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert!(output.contains("Results: 1/1 checks passed."));
    assert!(output.ends_with("All checks passed.\n"));
}

#[test]
fn format_empty_report() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&ValidationReport::default())
        .unwrap();

    assert_eq!(output, "No notebook recipe folders found to validate.\n");
}

#[test]
fn format_folder_with_no_results_still_prints_name() {
    let report = ValidationReport {
        folders: vec![folder("empty", Vec::new())],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert!(output.starts_with("\nempty\n\n"));
    assert!(output.contains("Results: 0/0 checks passed."));
}

#[test]
fn colors_applied_when_always() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&mixed_report())
        .unwrap();

    assert!(output.contains("\x1b[32mPASS\x1b[0m"));
    assert!(output.contains("\x1b[31mFAIL\x1b[0m"));
}

#[test]
fn no_colors_when_never() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&mixed_report())
        .unwrap();

    assert!(!output.contains("\x1b["));
}
