//! Boundary token extraction from a `Content-Type` header value.
//!
//! A multipart request declares its delimiter as
//! `multipart/form-data; boundary=<token>`, with the token optionally quoted.
//! Extraction is a plain parameter scan; it makes no attempt to validate the
//! media type itself.

/// Parameter prefix that introduces the boundary token.
const BOUNDARY_TOKEN: &str = "boundary=";

/// Extract the multipart boundary from a `Content-Type` header value.
///
/// Scans the `;`-separated header parameters for a `boundary=` token
/// (case-insensitive), stripping surrounding whitespace and double quotes.
///
/// Returns `None` when the header carries no boundary or the token is empty.
/// An absent boundary is not an error here; [`ParsedForm::parse`] treats an
/// empty boundary as "no parts found".
///
/// [`ParsedForm::parse`]: crate::ParsedForm::parse
///
/// # Examples
///
/// ```
/// use formpart::extract_boundary;
///
/// assert_eq!(
///     extract_boundary("multipart/form-data; boundary=----WebKitFormBoundaryX"),
///     Some("----WebKitFormBoundaryX".to_string()),
/// );
/// assert_eq!(
///     extract_boundary("multipart/form-data; boundary=\"quoted\""),
///     Some("quoted".to_string()),
/// );
/// assert_eq!(extract_boundary("application/json"), None);
/// ```
#[must_use]
pub fn extract_boundary(content_type: &str) -> Option<String> {
    for param in content_type.split(';') {
        let param = param.trim();
        if let Some(prefix) = param.get(..BOUNDARY_TOKEN.len())
            && prefix.eq_ignore_ascii_case(BOUNDARY_TOKEN)
        {
            let token = param[BOUNDARY_TOKEN.len()..].trim().trim_matches('"').trim();
            if token.is_empty() {
                return None;
            }
            return Some(token.to_string());
        }
    }
    None
}
