use fieldrules::{JsonState, StateWriter, Validator};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        (-100..100i64).prop_map(|n| json!(n)),
        "[a-z0-9@.]{1,12}".prop_map(Value::String),
    ]
}

fn config() -> Value {
    json!({ "rules": {
        "name": { "minLength": 3, "maxLength": 8, "errorState": "errors.name" },
        "age": { "required": true, "integer": true, "min": 0, "errorState": "errors.age" },
        "contact": { "or": { "email": true, "phone": true }, "errorState": "errors.contact" },
        "nickname": { "pattern": "^[a-z]+$" }
    } })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn validate_twice_gives_same_errors(
        name in arb_field_value(),
        age in arb_field_value(),
        contact in arb_field_value(),
        nickname in arb_field_value(),
    ) {
        let state = json!({ "name": name, "age": age, "contact": contact, "nickname": nickname });
        let mut v = Validator::from_value(config(), JsonState::new(state)).unwrap();
        let first = v.validate(&[]);
        let second = v.validate(&[]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn optional_empty_fields_never_error(
        empty in prop_oneof![Just(Value::Null), Just(json!(""))],
    ) {
        let state = json!({ "name": empty.clone(), "contact": empty.clone(), "nickname": empty, "age": 1 });
        let mut v = Validator::from_value(config(), JsonState::new(state)).unwrap();
        prop_assert_eq!(v.validate(&[]), None);
    }

    #[test]
    fn active_fields_stay_active(
        values in prop::collection::vec(arb_field_value(), 1..6),
    ) {
        let state = json!({ "name": "", "age": 1 });
        let mut v = Validator::from_value(config(), JsonState::new(state)).unwrap();
        v.validate(&["name"]);
        for value in values {
            v.host_mut().write("name", value);
            v.validate_when_active(&[]);
            v.activate_validator(&[]);
            prop_assert!(v.is_active("name"));
        }
    }

    #[test]
    fn error_map_only_holds_failing_fields(
        name in arb_field_value(),
        age in arb_field_value(),
    ) {
        let state = json!({ "name": name, "age": age });
        let mut v = Validator::from_value(config(), JsonState::new(state)).unwrap();
        let errors = v.validate(&[]).unwrap_or_default();
        for (field, kind) in &errors {
            let message = v.host().value()
                .pointer(&format!("/errors/{}", field))
                .and_then(Value::as_str)
                .map(str::to_string);
            if let Some(message) = message {
                prop_assert!(!message.is_empty(), "{} failed {} without a message", field, kind);
            }
        }
        prop_assert_eq!(errors.is_empty(), v.errors().is_empty());
    }
}
