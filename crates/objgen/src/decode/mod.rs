//! Model-to-JSON pipeline: line tokenizer and model builder

pub mod builder;
pub(crate) mod coerce;
pub mod scanner;
