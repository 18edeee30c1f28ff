//! Boundary-based byte splitting.
//!
//! A multipart body is cut into candidate part ranges by literal search for
//! the `--<boundary>` marker. The search is a plain forward scan over the
//! buffer; bodies are request-sized, so no indexing structure is warranted.

use std::ops::Range;

/// Find the next occurrence of `pattern` in `haystack` at or after `from`.
pub(crate) fn find_subsequence(haystack: &[u8], pattern: &[u8], from: usize) -> Option<usize> {
    if pattern.is_empty() || from + pattern.len() > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|position| position + from)
}

/// Cut a body into candidate part ranges for the given boundary.
///
/// Candidates are the gaps between consecutive `--<boundary>` occurrences.
/// The preamble before the first occurrence and the tail after the last one
/// (which holds the terminal `--` line) never produce a candidate. A body
/// without any occurrence yields no candidates; that is not an error here.
pub(crate) fn candidate_ranges(body: &[u8], boundary: &str) -> Vec<Range<usize>> {
    if boundary.is_empty() {
        return Vec::new();
    }

    let marker = format!("--{boundary}").into_bytes();

    let mut occurrences = Vec::new();
    let mut from = 0;
    while let Some(found) = find_subsequence(body, &marker, from) {
        occurrences.push(found);
        from = found + marker.len();
    }

    occurrences
        .windows(2)
        .map(|pair| pair[0] + marker.len()..pair[1])
        .collect()
}

/// Strip trailing boundary-line artifacts from part content.
///
/// Content inside a candidate range ends with the CR/LF (and, before the
/// terminal marker, `--` dashes) belonging to the next boundary line. Bytes
/// are removed one at a time while the last byte is CR, LF, or `-`.
///
/// Content that legitimately ends in one of those bytes loses them too; the
/// behavior is kept as-is for compatibility with the endpoints that already
/// store data this way (see the trim tests below).
pub(crate) fn trim_trailing_artifacts(mut content: &[u8]) -> &[u8] {
    while matches!(content.last(), Some(b'\r' | b'\n' | b'-')) {
        content = &content[..content.len() - 1];
    }
    content
}
