//! Request header helpers

use axum::http::HeaderMap;

/// Read a single-valued header as a trimmed, non-empty string
///
/// Header names are case-insensitive, so `x-jwt-token` and `X-JWT-TOKEN`
/// resolve to the same entry.
pub fn extract_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
