use super::common::load_fixture;
use fieldrules::evaluate::evaluate_rule;
use fieldrules::types::Rule;
use serde_json::{Value, json};

#[derive(Debug, serde::Deserialize)]
struct RuleCase {
    id: String,
    name: String,
    rule: Value,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    absent: bool,
    #[serde(default)]
    state: Option<Value>,
    expected: bool,
}

fn build_rule(case: &RuleCase) -> Rule {
    let entries = case.rule.as_object().expect("rule must be a mapping");
    assert_eq!(entries.len(), 1, "[{}] rule must have one entry", case.id);
    let (name, param) = entries.iter().next().unwrap();
    Rule::from_entry("field", name, param)
        .unwrap_or_else(|e| panic!("[{}] invalid rule: {}", case.id, e))
}

#[test]
fn evaluate_rule_suite() {
    let cases: Vec<RuleCase> = load_fixture("evaluate.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let rule = build_rule(case);
        let state = case.state.clone().unwrap_or_else(|| json!({}));
        let value = if case.absent { None } else { Some(&case.value) };

        let result = evaluate_rule(&rule, value, &state);

        if result == case.expected {
            passed += 1;
        } else {
            eprintln!(
                "  FAIL [{}] {}: expected {}, got {}",
                case.id, case.name, case.expected, result
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nevaluate_rule: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} evaluate_rule tests failed", failed);
}
