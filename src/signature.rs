//! File-signature ("magic number") sniffing and format acceptance policies
//!
//! Uploaded files arrive with a client-chosen filename, so the extension
//! alone proves nothing. This module inspects leading content bytes to
//! derive the true file kind, and provides the two acceptance policies the
//! upload endpoints use: a permissive allow-list for receipt images and a
//! strict PDF-only check for mortgage documents.

use std::path::Path;

/// Minimum content length for a meaningful signature check.
const MIN_SIGNATURE_LENGTH: usize = 4;

/// Extensions accepted by [`FormatPolicy::Permissive`].
const PERMISSIVE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "pdf"];

/// The `%PDF` leading bytes required by [`FormatPolicy::PdfOnly`].
const PDF_SIGNATURE: [u8; 4] = [0x25, 0x50, 0x44, 0x46];

/// File kinds recognized by their leading byte signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// JPEG image (`FF D8 FF`)
    Jpeg,
    /// PNG image (`89 50 4E 47`)
    Png,
    /// GIF image (`47 49 46 38`)
    Gif,
    /// PDF document (`25 50 44 46`)
    Pdf,
    /// WebP image (`RIFF` at offset 0 and `WEBP` at offset 8)
    Webp,
}

impl FileKind {
    /// Sniff the file kind from leading content bytes.
    ///
    /// The result depends only on the bytes, never on any claimed filename
    /// or extension. Returns `None` when no known signature matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use formpart::FileKind;
    ///
    /// assert_eq!(FileKind::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(FileKind::Jpeg));
    /// assert_eq!(FileKind::detect(b"%PDF-1.7"), Some(FileKind::Pdf));
    /// assert_eq!(FileKind::detect(b"plain text"), None);
    /// ```
    #[must_use]
    pub fn detect(data: &[u8]) -> Option<FileKind> {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(FileKind::Jpeg);
        }
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(FileKind::Png);
        }
        if data.starts_with(b"GIF8") {
            return Some(FileKind::Gif);
        }
        if data.starts_with(&PDF_SIGNATURE) {
            return Some(FileKind::Pdf);
        }
        // WebP is a RIFF container; the format tag sits after the chunk size
        if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(FileKind::Webp);
        }
        None
    }

    /// Canonical file extension for this kind, with the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Jpeg => ".jpg",
            FileKind::Png => ".png",
            FileKind::Gif => ".gif",
            FileKind::Pdf => ".pdf",
            FileKind::Webp => ".webp",
        }
    }
}

/// Infer a storage extension from content bytes.
///
/// Falls back to `.jpg` when no known signature matches. The fallback is an
/// extension-inference default for naming stored blobs, never a claim that
/// the content is valid; use [`FormatPolicy::accepts`] for validity.
#[must_use]
pub fn inferred_extension(data: &[u8]) -> &'static str {
    FileKind::detect(data).unwrap_or(FileKind::Jpeg).extension()
}

/// Format acceptance policy applied to an uploaded file.
///
/// Policies are pure predicates over the claimed filename and the content
/// bytes; translating a `false` into a user-facing rejection is the caller's
/// job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPolicy {
    /// Accept the common receipt formats by extension alone.
    ///
    /// The extension must be one of jpg/jpeg/png/gif/webp/pdf
    /// (case-insensitive) and the content at least 4 bytes long. Content
    /// whose signature matches nothing known is still accepted (fail-open);
    /// the signature check only informs logging.
    Permissive,

    /// Accept only genuine PDF documents.
    ///
    /// The extension must be exactly `pdf` and the leading four bytes must
    /// equal `%PDF`. Anything else is rejected (fail-closed).
    PdfOnly,
}

impl FormatPolicy {
    /// Check whether a file passes this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use formpart::FormatPolicy;
    ///
    /// assert!(FormatPolicy::Permissive.accepts("r.jpg", &[0xFF, 0xD8, 0xFF, 0xE0]));
    /// assert!(FormatPolicy::PdfOnly.accepts("deed.pdf", b"%PDF-1.4"));
    /// assert!(!FormatPolicy::PdfOnly.accepts("deed.pdf", &[0x89, 0x50, 0x4E, 0x47]));
    /// ```
    #[must_use]
    pub fn accepts(self, file_name: &str, data: &[u8]) -> bool {
        let Some(extension) = extension_of(file_name) else {
            return false;
        };

        match self {
            FormatPolicy::Permissive => {
                if !PERMISSIVE_EXTENSIONS
                    .iter()
                    .any(|allowed| extension.eq_ignore_ascii_case(allowed))
                {
                    return false;
                }
                if data.len() < MIN_SIGNATURE_LENGTH {
                    return false;
                }
                if FileKind::detect(data).is_none() {
                    tracing::debug!(file_name, "accepting upload with unrecognized signature");
                }
                true
            }
            FormatPolicy::PdfOnly => {
                extension.eq_ignore_ascii_case("pdf")
                    && data.len() >= MIN_SIGNATURE_LENGTH
                    && data[..MIN_SIGNATURE_LENGTH] == PDF_SIGNATURE
            }
        }
    }
}

/// Extension of a claimed filename, without the dot.
fn extension_of(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension().and_then(|e| e.to_str())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    const GIF: &[u8] = b"GIF89a";
    const PDF: &[u8] = b"%PDF-1.7\n";
    const WEBP: &[u8] = b"RIFF\x24\x00\x00\x00WEBPVP8 ";

    #[test]
    fn detects_each_known_signature() {
        assert_eq!(FileKind::detect(JPEG), Some(FileKind::Jpeg));
        assert_eq!(FileKind::detect(PNG), Some(FileKind::Png));
        assert_eq!(FileKind::detect(GIF), Some(FileKind::Gif));
        assert_eq!(FileKind::detect(PDF), Some(FileKind::Pdf));
        assert_eq!(FileKind::detect(WEBP), Some(FileKind::Webp));
    }

    #[test]
    fn detection_ignores_the_claimed_extension() {
        // Content wins: JPEG bytes are JPEG no matter what the filename says
        assert_eq!(FileKind::detect(JPEG), Some(FileKind::Jpeg));
        assert_eq!(inferred_extension(JPEG), ".jpg");
        // A .png claim changes nothing because detect never sees it
    }

    #[test]
    fn unknown_content_is_not_detected() {
        assert_eq!(FileKind::detect(b"hello world"), None);
        assert_eq!(FileKind::detect(&[]), None);
        assert_eq!(FileKind::detect(&[0xFF]), None);
    }

    #[test]
    fn webp_requires_both_riff_and_webp_tags() {
        assert_eq!(FileKind::detect(b"RIFF\x24\x00\x00\x00WAVEfmt "), None);
        assert_eq!(FileKind::detect(b"RIFF\x24\x00"), None);
    }

    #[test]
    fn inferred_extension_falls_back_to_jpg() {
        assert_eq!(inferred_extension(PNG), ".png");
        assert_eq!(inferred_extension(b"no signature here"), ".jpg");
        assert_eq!(inferred_extension(&[]), ".jpg");
    }

    #[test]
    fn permissive_accepts_allowed_extensions() {
        assert!(FormatPolicy::Permissive.accepts("r.jpg", JPEG));
        assert!(FormatPolicy::Permissive.accepts("r.jpeg", JPEG));
        assert!(FormatPolicy::Permissive.accepts("shot.png", PNG));
        assert!(FormatPolicy::Permissive.accepts("anim.gif", GIF));
        assert!(FormatPolicy::Permissive.accepts("pic.webp", WEBP));
        assert!(FormatPolicy::Permissive.accepts("scan.pdf", PDF));
    }

    #[test]
    fn permissive_extension_check_is_case_insensitive() {
        assert!(FormatPolicy::Permissive.accepts("RECEIPT.JPG", JPEG));
        assert!(FormatPolicy::Permissive.accepts("Scan.Pdf", PDF));
    }

    #[test]
    fn permissive_is_fail_open_on_unrecognized_signatures() {
        // Allowed extension, content matching no known signature: accepted
        assert!(FormatPolicy::Permissive.accepts("r.jpg", b"not an image"));
    }

    #[test]
    fn permissive_rejects_disallowed_extensions() {
        assert!(!FormatPolicy::Permissive.accepts("notes.txt", JPEG));
        assert!(!FormatPolicy::Permissive.accepts("archive.zip", JPEG));
        assert!(!FormatPolicy::Permissive.accepts("noextension", JPEG));
    }

    #[test]
    fn permissive_rejects_content_shorter_than_a_signature() {
        assert!(!FormatPolicy::Permissive.accepts("r.jpg", &[0xFF, 0xD8, 0xFF]));
        assert!(!FormatPolicy::Permissive.accepts("r.jpg", &[]));
    }

    #[test]
    fn pdf_only_accepts_a_genuine_pdf() {
        assert!(FormatPolicy::PdfOnly.accepts("deed.pdf", PDF));
        assert!(FormatPolicy::PdfOnly.accepts("DEED.PDF", PDF));
    }

    #[test]
    fn pdf_only_rejects_png_bytes_behind_a_pdf_name() {
        assert!(!FormatPolicy::PdfOnly.accepts("deed.pdf", PNG));
    }

    #[test]
    fn pdf_only_rejects_pdf_bytes_behind_a_wrong_extension() {
        assert!(!FormatPolicy::PdfOnly.accepts("deed.jpg", PDF));
        assert!(!FormatPolicy::PdfOnly.accepts("deed", PDF));
    }

    #[test]
    fn pdf_only_rejects_truncated_content() {
        assert!(!FormatPolicy::PdfOnly.accepts("deed.pdf", b"%PD"));
        assert!(!FormatPolicy::PdfOnly.accepts("deed.pdf", &[]));
    }

    #[test]
    fn policy_names_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&FormatPolicy::PdfOnly).unwrap(),
            "\"pdf_only\""
        );
        let policy: FormatPolicy = serde_json::from_str("\"permissive\"").unwrap();
        assert_eq!(policy, FormatPolicy::Permissive);
    }
}
