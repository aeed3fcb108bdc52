#![no_main]

use fieldrules::primitives::format_message;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let (template_bytes, parameter_bytes) = data.split_at(data.len() / 2);
    let template = String::from_utf8_lossy(template_bytes);
    let parameter = String::from_utf8_lossy(parameter_bytes);

    let _ = format_message(&template, &Value::String(parameter.to_string()));
    let parts: Vec<Value> = parameter
        .split(',')
        .map(|p| Value::String(p.to_string()))
        .collect();
    let _ = format_message(&template, &Value::Array(parts));
});
