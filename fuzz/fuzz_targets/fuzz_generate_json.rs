#![no_main]
use libfuzzer_sys::fuzz_target;
use objgen::{Options, generate_json};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let opts = Options::default();
        if let Ok(text) = generate_json(s, &opts) {
            serde_json::from_str::<serde_json::Value>(&text)
                .expect("generated text must be valid JSON");
        }
    }
});
