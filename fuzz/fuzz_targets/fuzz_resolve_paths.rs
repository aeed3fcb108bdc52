#![no_main]

use fieldrules::primitives::{resolve_path, write_path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use the first byte to determine the split point between path and JSON value.
    let split = data[0] as usize % data.len().max(1);
    let (path_bytes, value_bytes) = data.split_at(split.min(data.len()));

    let path = String::from_utf8_lossy(path_bytes);
    // Large numeric segments would pad arrays to their index.
    if path.split('.').any(|s| s.len() > 4 && s.bytes().all(|b| b.is_ascii_digit())) {
        return;
    }

    if let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(value_bytes) {
        let _ = resolve_path(&path, &value);
        write_path(&mut value, &path, serde_json::Value::Bool(true));
        assert_eq!(resolve_path(&path, &value), Some(serde_json::Value::Bool(true)));
    }
});
