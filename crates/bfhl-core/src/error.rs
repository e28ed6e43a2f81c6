//! Error types for payload handling.

use thiserror::Error;

/// Errors detected locally before any request is sent.
///
/// The display text of each variant is the user-facing message; the
/// `InvalidJson` text is fixed and must not change, since it is the message
/// the form shows for any syntactically invalid input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PayloadError {
    /// The input text is not syntactically valid JSON.
    #[error("Invalid JSON format")]
    InvalidJson,

    /// The parsed payload has no `data` field.
    #[error("Payload has no \"data\" field")]
    MissingData,

    /// The `data` field is not an array.
    #[error("Payload field \"data\" must be an array")]
    DataNotArray,
}
