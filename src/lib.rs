//! # formpart
//!
//! Buffered multipart/form-data decoding and upload file validation for
//! HTTP backends that accept receipts, documents, and similar user uploads.
//!
//! ## Design Philosophy
//!
//! formpart is designed to be:
//! - **Buffered** - The whole request body is in memory before decoding
//!   starts; there is no streaming parser and no backpressure
//! - **Forgiving** - Malformed multipart input never raises; it degrades to
//!   a smaller (possibly empty) part list
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding in
//!   upload endpoints
//! - **Pure** - Every decode and validation operation is a function of its
//!   byte/string inputs, so concurrent use needs no coordination
//!
//! ## Quick Start
//!
//! ```
//! use formpart::{FormatPolicy, ParsedForm};
//!
//! let body = b"--XYZ\r\n\
//!     Content-Disposition: form-data; name=\"receiptType\"\r\n\r\n\
//!     comida\r\n\
//!     --XYZ\r\n\
//!     Content-Disposition: form-data; name=\"file\"; filename=\"r.jpg\"\r\n\
//!     Content-Type: image/jpeg\r\n\r\n\
//!     \xFF\xD8\xFF\xE0data\r\n\
//!     --XYZ--\r\n";
//!
//! let form = ParsedForm::parse(body, "XYZ");
//! assert_eq!(form.value("receiptType"), Some("comida"));
//!
//! let receipt = form.file("file").unwrap();
//! assert!(FormatPolicy::Permissive.accepts("r.jpg", receipt.data.as_deref().unwrap()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Content-Type boundary token extraction
pub mod boundary;
/// Calling-layer configuration
pub mod config;
/// Error types
pub mod error;
/// axum request extraction
#[cfg(feature = "axum")]
pub mod extract;
/// Multipart body decoding
pub mod multipart;
/// File-signature sniffing and format acceptance policies
pub mod signature;

// Re-export commonly used types
pub use boundary::extract_boundary;
pub use config::UploadConfig;
pub use error::{ApiError, Error, ErrorDetail, Result};
#[cfg(feature = "axum")]
pub use extract::UploadForm;
pub use multipart::{ParsedForm, Part};
pub use signature::{FileKind, FormatPolicy, inferred_extension};

/// Decode a request body given the raw `Content-Type` header value.
///
/// Convenience wrapper over [`extract_boundary`] and [`ParsedForm::parse`]
/// that surfaces a missing boundary token as [`Error::MissingBoundary`]
/// instead of an empty form, so callers don't have to distinguish "no parts"
/// from "not even a boundary".
///
/// # Errors
///
/// Returns [`Error::MissingBoundary`] when the header carries no usable
/// `boundary=` token. Malformed part content never errors; it just yields
/// fewer parts.
///
/// # Example
///
/// ```
/// let body = b"--B\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--B--\r\n";
/// let form = formpart::parse_request("multipart/form-data; boundary=B", body)?;
/// assert_eq!(form.value("note"), Some("hello"));
/// # Ok::<(), formpart::Error>(())
/// ```
pub fn parse_request(content_type: &str, body: &[u8]) -> Result<ParsedForm> {
    let boundary = extract_boundary(content_type).ok_or(Error::MissingBoundary)?;
    Ok(ParsedForm::parse(body, &boundary))
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_decodes_body_with_quoted_boundary() {
        let body =
            b"--abc\r\nContent-Disposition: form-data; name=\"k\"\r\n\r\nv\r\n--abc--\r\n";
        let form =
            parse_request("multipart/form-data; boundary=\"abc\"", body).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form.value("k"), Some("v"));
    }

    #[test]
    fn parse_request_without_boundary_token_is_an_error() {
        let err = parse_request("multipart/form-data", b"irrelevant").unwrap_err();
        assert!(matches!(err, Error::MissingBoundary));
    }
}
