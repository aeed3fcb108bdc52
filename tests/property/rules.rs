use fieldrules::evaluate::evaluate_rule;
use fieldrules::types::Rule;
use proptest::prelude::*;
use serde_json::{Value, json};

fn rule(name: &str, param: Value) -> Rule {
    Rule::from_entry("field", name, &param).expect("valid rule")
}

/// Leaf rules that never read other fields.
fn arb_leaf_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        any::<bool>().prop_map(|b| rule("required", json!(b))),
        Just(rule("integer", json!(true))),
        any::<bool>().prop_map(|b| rule("email", json!(b))),
        any::<bool>().prop_map(|b| rule("phone", json!(b))),
        (-50..50i64).prop_map(|n| rule("min", json!(n))),
        (-50..50i64).prop_map(|n| rule("max", json!(n))),
        (0..10u64).prop_map(|n| rule("minLength", json!(n))),
        (0..10u64).prop_map(|n| rule("maxLength", json!(n))),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (-100..100i64).prop_map(|n| json!(n)),
        "[a-z0-9@.+]{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn or_passes_iff_any_branch_passes(
        branches in prop::collection::vec(arb_leaf_rule(), 0..5),
        value in arb_value(),
    ) {
        let state = json!({});
        let expected = branches.iter().any(|r| evaluate_rule(r, Some(&value), &state));
        let composite = Rule::Or(branches);
        prop_assert_eq!(evaluate_rule(&composite, Some(&value), &state), expected);
    }

    #[test]
    fn min_and_max_are_inclusive(bound in -1000..1000i64) {
        let state = json!({});
        prop_assert!(evaluate_rule(&rule("min", json!(bound)), Some(&json!(bound)), &state));
        prop_assert!(evaluate_rule(&rule("max", json!(bound)), Some(&json!(bound)), &state));
        prop_assert!(!evaluate_rule(&rule("min", json!(bound)), Some(&json!(bound - 1)), &state));
        prop_assert!(!evaluate_rule(&rule("max", json!(bound)), Some(&json!(bound + 1)), &state));
    }

    #[test]
    fn range_matches_bounds(lo in -100..0i64, hi in 0..100i64, value in -200..200i64) {
        let state = json!({});
        let result = evaluate_rule(&rule("range", json!([lo, hi])), Some(&json!(value)), &state);
        prop_assert_eq!(result, value >= lo && value <= hi);
    }

    #[test]
    fn range_length_matches_char_count(text in "\\PC{0,20}", lo in 0..5u64, hi in 5..15u64) {
        let state = json!({});
        let len = text.chars().count() as u64;
        let result = evaluate_rule(&rule("rangeLength", json!([lo, hi])), Some(&json!(text)), &state);
        prop_assert_eq!(result, len >= lo && len <= hi);
    }

    #[test]
    fn integer_accepts_whole_numbers(n in any::<i32>()) {
        let state = json!({});
        prop_assert!(evaluate_rule(&rule("integer", json!(true)), Some(&json!(n)), &state));
        prop_assert!(evaluate_rule(&rule("integer", json!(true)), Some(&json!(n.to_string())), &state));
    }
}
