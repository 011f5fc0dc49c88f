use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The upstream decode step could not parse its input. Carries the
    /// failing condition's category and message, never a stack trace.
    #[error("{kind}: {message}")]
    Decode { kind: String, message: String },

    /// A non-finite float survived into an output tree. Normalization never
    /// produces this; it guards hand-built trees at the encoding boundary.
    #[error("non-finite number in output tree")]
    NonFinite,
}

pub type Result<T> = core::result::Result<T, Error>;
