//! Buffered multipart/form-data decoding
//!
//! [`ParsedForm::parse`] cuts a fully-buffered request body into parts using
//! the declared boundary, extracts each part's headers, and classifies the
//! content as either file bytes or a text field value. Malformed input never
//! raises: candidates that cannot be decoded are dropped, and the worst case
//! is an empty form.
//!
//! Decoding is a pure, single-pass function over an immutable buffer, so
//! concurrent use across requests needs no coordination. The parts are
//! returned in body order; callers look them up by name and hand file bytes
//! to storage or validation.

mod headers;
mod split;

use headers::{HEADER_SEPARATOR, PartHeaders};
use split::{candidate_ranges, find_subsequence, trim_trailing_artifacts};

use crate::error::{Error, Result};

/// One named subsection of a multipart/form-data body.
///
/// Exactly one of [`data`](Self::data) and [`value`](Self::value) is
/// populated: file parts carry raw bytes, text fields carry a trimmed UTF-8
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Form field name from the part's Content-Disposition header; never empty.
    pub name: String,

    /// Client-claimed filename, when the part was sent as a file upload.
    pub file_name: Option<String>,

    /// Declared content type of the part, when one was sent.
    pub content_type: Option<String>,

    /// Raw content bytes; populated for file parts.
    pub data: Option<Vec<u8>>,

    /// Decoded text value; populated for form fields.
    pub value: Option<String>,
}

impl Part {
    /// Whether this part carries file bytes rather than a text value.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.data.is_some()
    }

    /// Content bytes of a file part.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

/// Ordered parts decoded from one multipart body.
///
/// Order matches appearance order in the body. It carries no meaning for
/// callers, but it is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedForm {
    parts: Vec<Part>,
}

impl ParsedForm {
    /// Decode a buffered multipart body.
    ///
    /// `boundary` is the bare token from the Content-Type header, without
    /// the leading `--` (see [`extract_boundary`]). Candidates that lack a
    /// header/body separator or a `form-data` name are dropped silently; a
    /// body without any boundary occurrence (or an empty boundary) decodes
    /// to an empty form. This function never fails.
    ///
    /// [`extract_boundary`]: crate::extract_boundary
    #[must_use]
    pub fn parse(body: &[u8], boundary: &str) -> Self {
        let mut parts = Vec::new();
        for range in candidate_ranges(body, boundary) {
            if let Some(part) = decode_candidate(&body[range]) {
                parts.push(part);
            }
        }
        tracing::debug!(parts = parts.len(), "decoded multipart body");
        ParsedForm { parts }
    }

    /// All parts, in body order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of decoded parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate over the parts in body order.
    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// First part with the given name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// First file part with the given name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&Part> {
        self.parts
            .iter()
            .find(|part| part.name == name && part.is_file())
    }

    /// Text value of the first form field with the given name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .and_then(|part| part.value.as_deref())
    }

    /// File part with the given name, or [`Error::MissingPart`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPart`] when no file part carries the name.
    pub fn require_file(&self, name: &str) -> Result<&Part> {
        self.file(name).ok_or_else(|| Error::MissingPart {
            name: name.to_string(),
        })
    }
}

impl IntoIterator for ParsedForm {
    type Item = Part;
    type IntoIter = std::vec::IntoIter<Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedForm {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// Decode one candidate range into a part, or drop it.
fn decode_candidate(raw: &[u8]) -> Option<Part> {
    let Some(separator) = find_subsequence(raw, HEADER_SEPARATOR, 0) else {
        tracing::debug!("dropping candidate without header/body separator");
        return None;
    };

    let header_text = String::from_utf8_lossy(&raw[..separator]);
    let Some(headers) = PartHeaders::parse(&header_text) else {
        tracing::debug!("dropping candidate without a form-data name");
        return None;
    };

    let content = trim_trailing_artifacts(&raw[separator + HEADER_SEPARATOR.len()..]);
    Some(classify(headers, content))
}

/// Build the part, deciding between file bytes and a text field value.
///
/// A part with a filename is always a file. Without one, a declared content
/// type starting with `image/` or `application/` still marks it as a file,
/// including `application/json` text payloads, which callers read back from
/// [`Part::data`]. Everything else is a text field, decoded as UTF-8
/// (lossily) and whitespace-trimmed.
fn classify(headers: PartHeaders, content: &[u8]) -> Part {
    let binary = headers.file_name.is_some()
        || headers
            .content_type
            .as_deref()
            .is_some_and(|declared| {
                declared.starts_with("image/") || declared.starts_with("application/")
            });

    let (data, value) = if binary {
        (Some(content.to_vec()), None)
    } else {
        let text = String::from_utf8_lossy(content).trim().to_string();
        (None, Some(text))
    };

    Part {
        name: headers.name,
        file_name: headers.file_name,
        content_type: headers.content_type,
        data,
        value,
    }
}
