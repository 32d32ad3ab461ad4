use thiserror::Error;

use std::io;

/// Errors from the output half of the crate. Building a value from model
/// text cannot fail, so only reading input on behalf of a caller or writing
/// JSON text can produce one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
