#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use fieldrules::evaluate::evaluate_rule;
use fieldrules::types::Rule;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

const RULE_NAMES: &[&str] = &[
    "required",
    "integer",
    "equalTo",
    "url",
    "email",
    "phone",
    "uuid",
    "pattern",
    "min",
    "max",
    "range",
    "minLength",
    "maxLength",
    "rangeLength",
    "minDate",
    "maxDate",
    "or",
];

/// Generate a simple arbitrary JSON value from fuzzer bytes.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max = if depth == 0 { 3 } else { 5 };
    match u.int_in_range(0..=max)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            let n = f64::arbitrary(u)?;
            Ok(serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => {
            let len = u.int_in_range(0..=3)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => {
            let len = u.int_in_range(0..=3)?;
            let mut map = serde_json::Map::new();
            for _ in 0..len {
                let name = *u.choose(RULE_NAMES)?;
                map.insert(name.to_string(), arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Object(map))
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let Ok(name) = u.choose(RULE_NAMES) else {
        return;
    };
    let Ok(param) = arbitrary_value(&mut u, 3) else {
        return;
    };
    let Ok(value) = arbitrary_value(&mut u, 2) else {
        return;
    };
    let Ok(state) = arbitrary_value(&mut u, 2) else {
        return;
    };

    // Rejected parameters are fine; accepted rules must evaluate without panicking.
    if let Ok(rule) = Rule::from_entry("field", name, &param) {
        let _ = evaluate_rule(&rule, Some(&value), &state);
        let _ = evaluate_rule(&rule, None, &state);
    }
});
