//! URL construction utilities for index-administration API paths.
//!
//! Provides percent-encoding for URL path segments so special characters in
//! index, alias, and template names cannot cause path traversal or incorrect
//! URL resolution, plus helpers for the comma-separated multi-index paths
//! the API uses.

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use std::time::Duration;

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that have special meaning
/// in the REST API paths or could cause issues:
/// - Slash: must be encoded to prevent path traversal
/// - Percent: must be encoded to prevent double-encoding issues
/// - Comma: the multi-index separator, encoded inside individual names
/// - Question mark and hash: have special URL meaning
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Use this for any user-provided value interpolated into a URL path:
/// index names, alias names, template names, field names.
/// Wildcard characters (`*`) pass through unchanged.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Join names into the comma-separated list form used in multi-index paths.
///
/// Each name is individually encoded; the separating commas are not.
pub fn join_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| encode_path_segment(name))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build a path of the form `/{indices}/{suffix}`, collapsing to `/{suffix}`
/// when no indices are given (the API's "all indices" form).
pub fn index_path(indices: &[String], suffix: &str) -> String {
    if indices.is_empty() {
        format!("/{}", suffix)
    } else {
        format!("/{}/{}", join_names(indices), suffix)
    }
}

/// Format a duration as the millisecond time value the API accepts.
pub fn duration_param(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}
