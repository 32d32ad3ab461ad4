#![doc = include_str!("../README.md")]

pub mod decode;
pub mod error;
pub mod options;
pub mod value;

mod number;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Number, Value};

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Generate the JSON value tree described by `model`.
///
/// Malformed model text never fails; at worst the tree contains defaulted
/// scalars or dropped lines.
pub fn generate_value(model: &str, options: &Options) -> Value {
    crate::decode::builder::build(model, options)
}

/// Generate and convert to a [`serde_json::Value`] for interop. Object keys
/// keep first-insertion order.
pub fn generate(model: &str, options: &Options) -> serde_json::Value {
    generate_value(model, options).into_json()
}

/// Generate pretty-printed JSON text, indented by `options.indent_width`
/// spaces.
pub fn generate_json(model: &str, options: &Options) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, &generate_value(model, options), options.indent_width)?;
    String::from_utf8(buf).map_err(|e| Error::Message(e.to_string()))
}

/// Generate pretty-printed JSON text for `model` and write it to `writer`.
pub fn generate_json_to_writer<W: Write>(
    mut writer: W,
    model: &str,
    options: &Options,
) -> Result<()> {
    write_pretty(&mut writer, &generate_value(model, options), options.indent_width)
}

fn write_pretty<W: Write>(writer: W, value: &Value, indent_width: usize) -> Result<()> {
    let indent = " ".repeat(indent_width);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}
