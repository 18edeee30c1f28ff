//! Error types for formpart
//!
//! The decoding core itself never fails on malformed input; degraded output
//! (fewer parts, or zero) is its only failure signal. The errors here belong
//! to the calling layer: boundary-less requests, oversized bodies, missing
//! required parts, and rejected file formats, with HTTP status mapping and a
//! structured JSON body shape for API responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formpart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Calling-layer error for multipart uploads
#[derive(Debug, Error)]
pub enum Error {
    /// The request Content-Type is not multipart/form-data
    #[error("request is not multipart/form-data")]
    NotMultipart,

    /// The Content-Type header carries no usable boundary token
    #[error("multipart boundary missing from Content-Type header")]
    MissingBoundary,

    /// The request body exceeded the configured buffering limit
    #[error("request body exceeds the {limit_bytes} byte limit")]
    BodyTooLarge {
        /// The configured maximum body size in bytes
        limit_bytes: usize,
    },

    /// A required named part was absent from the decoded form
    #[error("missing required part: {name}")]
    MissingPart {
        /// The part name the caller required
        name: String,
    },

    /// An uploaded file failed a format acceptance check
    #[error("unsupported file format: {file_name}")]
    UnsupportedFormat {
        /// Name of the rejected file
        file_name: String,
    },
}

impl Error {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - the client sent an unusable request shape
            Error::NotMultipart | Error::MissingBoundary | Error::MissingPart { .. } => 400,

            // 413 Payload Too Large
            Error::BodyTooLarge { .. } => 413,

            // 422 Unprocessable Entity - well-formed upload, rejected content
            Error::UnsupportedFormat { .. } => 422,
        }
    }

    /// Machine-readable error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotMultipart => "not_multipart",
            Error::MissingBoundary => "missing_boundary",
            Error::BodyTooLarge { .. } => "body_too_large",
            Error::MissingPart { .. } => "missing_part",
            Error::UnsupportedFormat { .. } => "unsupported_format",
        }
    }
}

/// API error response format
///
/// Returned by upload endpoints when a request is rejected. Standard shape
/// with a machine-readable code and a human-readable message.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "unsupported_format",
///     "message": "unsupported file format: notes.txt"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "missing_part")
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::new(err.error_code(), err.to_string())
    }
}
