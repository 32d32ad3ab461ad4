#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use objgen::Options;

#[derive(Arbitrary, Debug)]
struct Input {
    model: String,
    spaces_per_level: u8,
    indent_width: u8,
}

fuzz_target!(|input: Input| {
    let opts = Options {
        spaces_per_level: input.spaces_per_level as usize,
        indent_width: input.indent_width as usize,
    };
    if let Ok(text) = objgen::generate_json(&input.model, &opts) {
        serde_json::from_str::<serde_json::Value>(&text)
            .expect("generated text must be valid JSON");
    }
});
