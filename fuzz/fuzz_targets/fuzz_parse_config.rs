#![no_main]

use fieldrules::{JsonState, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Any configuration that parses must be usable by the engine.
    if let Ok(config) = fieldrules::parse_config(input) {
        let mut validator = Validator::new(config, JsonState::default());
        let _ = validator.validate(&[]);
    }
});
