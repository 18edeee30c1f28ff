//! Per-part header block parsing.
//!
//! Each candidate range starts with a header block terminated by a blank
//! line (CR LF CR LF). The block is matched as text against fixed patterns:
//! a `form-data` Content-Disposition carrying the field name and an optional
//! filename, and an optional Content-Type line of its own.

use regex::Regex;
use std::sync::LazyLock;

/// Byte sequence separating a part's header block from its content.
pub(crate) const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"(?i)form-data\s*;\s*name="([^"]*)""#));

static FILENAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"(?i)filename="([^"]*)""#));

static CONTENT_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?im)^content-type:\s*([^\r\n]+)"));

// Patterns are fixed literals; compilation is exercised by every test below
#[allow(clippy::expect_used)]
fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("hard-coded pattern compiles")
}

/// Fields extracted from one part's header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PartHeaders {
    /// Form field name from the Content-Disposition header.
    pub(crate) name: String,
    /// Client-claimed filename, when the part is a file upload.
    pub(crate) file_name: Option<String>,
    /// Declared content type of the part, when present.
    pub(crate) content_type: Option<String>,
}

impl PartHeaders {
    /// Parse a header block.
    ///
    /// Returns `None` when no non-empty `form-data; name="..."` can be
    /// extracted; such candidates are dropped by the caller.
    pub(crate) fn parse(header_text: &str) -> Option<Self> {
        let name = NAME_PATTERN
            .captures(header_text)?
            .get(1)?
            .as_str()
            .to_string();
        if name.is_empty() {
            return None;
        }

        let file_name = FILENAME_PATTERN
            .captures(header_text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string());

        let content_type = CONTENT_TYPE_PATTERN
            .captures(header_text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string());

        Some(PartHeaders {
            name,
            file_name,
            content_type,
        })
    }
}
