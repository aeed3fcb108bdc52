use super::common::load_fixture;
use fieldrules::primitives::format_message;
use serde_json::Value;

#[derive(Debug, serde::Deserialize)]
struct FormatCase {
    id: String,
    name: String,
    template: String,
    parameter: Value,
    expected: String,
}

#[test]
fn format_message_suite() {
    let cases: Vec<FormatCase> = load_fixture("format.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let result = format_message(&case.template, &case.parameter);
        if result == case.expected {
            passed += 1;
        } else {
            eprintln!(
                "  FAIL [{}] {}: expected {:?}, got {:?}",
                case.id, case.name, case.expected, result
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nformat_message: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} format_message tests failed", failed);
}
