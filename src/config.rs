//! Configuration types
//!
//! The decoding core places no bound on its input; the only practical limit
//! is the memory cost of buffering a whole request body, and that bound
//! belongs to whatever does the buffering. [`UploadConfig`] carries it for
//! the calling layer (the `axum` extractor when that feature is enabled).

use serde::{Deserialize, Serialize};

/// Default maximum buffered request-body size: 16 MiB.
const fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

/// Upload handling configuration for the calling layer.
///
/// # Example
///
/// ```
/// use formpart::UploadConfig;
///
/// let config = UploadConfig::default();
/// assert_eq!(config.max_body_bytes, 16 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum request-body size accepted before decoding, in bytes.
    ///
    /// Bodies over this limit are rejected before any parsing happens.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_sixteen_mebibytes() {
        assert_eq!(UploadConfig::default().max_body_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: UploadConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UploadConfig::default());
    }

    #[test]
    fn explicit_limit_round_trips() {
        let config = UploadConfig {
            max_body_bytes: 1024,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: UploadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
