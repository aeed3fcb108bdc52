use fieldrules::primitives::{resolve_path, write_path};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z]{1,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9]{0,5}", inner), 1..5).prop_map(|pairs| {
                let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                Value::Object(map)
            }),
        ]
    })
}

/// Dot-paths made of object keys only.
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn empty_path_returns_root(value in arb_json(3)) {
        prop_assert_eq!(resolve_path("", &value), Some(value));
    }

    #[test]
    fn write_then_read_returns_written_value(
        state in arb_json(3),
        path in arb_path(),
        written in arb_json(1),
    ) {
        let mut state = state;
        write_path(&mut state, &path, written.clone());
        prop_assert_eq!(resolve_path(&path, &state), Some(written));
    }

    #[test]
    fn write_leaves_unrelated_top_level_keys_alone(
        path in arb_path(),
        written in arb_json(1),
    ) {
        // "_" never starts a generated segment.
        let mut state = json!({ "_keep": 42 });
        write_path(&mut state, &path, written);
        prop_assert_eq!(resolve_path("_keep", &state), Some(json!(42)));
    }

    #[test]
    fn resolve_never_panics(
        path in "\\PC{0,30}",
        value in arb_json(2),
    ) {
        let _ = resolve_path(&path, &value);
    }

    // Digit segments are left out: a large index would pad an array to
    // that length.
    #[test]
    fn write_never_panics(
        path in "[a-z._]{0,30}",
        value in arb_json(2),
    ) {
        let mut value = value;
        write_path(&mut value, &path, Value::Bool(true));
    }
}
