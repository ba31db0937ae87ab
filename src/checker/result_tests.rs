use super::*;

#[test]
fn pass_carries_single_message() {
    let result = CheckResult::pass("valid_json", "demo.ipynb: valid notebook JSON");

    assert!(result.is_passed());
    assert!(!result.is_failed());
    assert_eq!(result.name(), "valid_json");
    assert_eq!(result.messages(), ["demo.ipynb: valid notebook JSON"]);
    assert_eq!(result.status_label(), "PASS");
}

#[test]
fn fail_many_preserves_message_order() {
    let result = CheckResult::fail_many(
        "check_structure",
        vec!["r: missing README.md".to_string(), "r: missing .env.example".to_string()],
    );

    assert!(result.is_failed());
    assert_eq!(result.status_label(), "FAIL");
    assert_eq!(
        result.messages(),
        ["r: missing README.md", "r: missing .env.example"]
    );
}

#[test]
fn serializes_name_status_and_messages() {
    let result = CheckResult::fail("check_pillow", "r: Pillow>=11.0.0 is below the minimum 12.1.1");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["name"], "check_pillow");
    assert_eq!(value["passed"], false);
    assert_eq!(value["messages"][0], "r: Pillow>=11.0.0 is below the minimum 12.1.1");
}
