//! Model error types

use thiserror::Error;

/// Errors raised while validating the summary date inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// One of the two dates was left empty
    #[error("Both start and end dates are required")]
    Missing,

    /// A date did not match `YYYY-MM-DD`
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    Invalid(String),
}

/// Errors raised while extracting a chart image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The reference is not a `data:` URL (e.g. a remote link)
    #[error("Image is not an inline data URL")]
    NotDataUrl,

    /// The data URL is not base64-encoded
    #[error("Image data URL is not base64-encoded")]
    NotBase64,

    /// The base64 payload could not be decoded
    #[error("Failed to decode image: {0}")]
    Decode(String),
}
