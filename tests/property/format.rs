use fieldrules::primitives::format_message;
use proptest::prelude::*;
use serde_json::{Value, json};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Text without braces passes through untouched.
    #[test]
    fn template_without_placeholders_is_unchanged(
        template in "[a-zA-Z0-9 .,]{0,40}",
        parameter in any::<i64>(),
    ) {
        prop_assert_eq!(format_message(&template, &json!(parameter)), template);
    }

    #[test]
    fn scalar_replaces_every_placeholder_zero(
        repeats in 1..5usize,
        parameter in "[a-z]{1,8}",
    ) {
        let template = vec!["{0}"; repeats].join(" ");
        let expected = vec![parameter.as_str(); repeats].join(" ");
        prop_assert_eq!(format_message(&template, &Value::String(parameter.clone())), expected);
    }

    #[test]
    fn array_fills_placeholders_by_position(
        lo in 0..1000i64,
        hi in 0..1000i64,
    ) {
        let message = format_message("from {0} to {1}", &json!([lo, hi]));
        prop_assert_eq!(message, format!("from {} to {}", lo, hi));
    }
}
