//! Shared error types

use thiserror::Error;

/// Errors raised while interpreting a model response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("empty response: the service returned no usable text")]
    EmptyResponse,

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
