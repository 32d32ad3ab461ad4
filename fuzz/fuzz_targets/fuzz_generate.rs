#![no_main]
use libfuzzer_sys::fuzz_target;
use objgen::{Options, generate_value};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let opts = Options::default();
        let _ = generate_value(s, &opts);
    }
});
