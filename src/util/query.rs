//! Query-string building for API calls and login redirects.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Write as _;

/// Percent-encode a query component.
///
/// Unreserved characters and `/` pass through so redirect targets stay
/// readable (`/login?redirect=/cv/edit`); everything else is encoded byte-wise.
pub fn encode_component(raw: &str) -> String {
    percent_encode(raw, true)
}

/// Percent-encode `raw` as a single path segment, `/` included.
///
/// Returns `None` for empty, `.` and `..`, which the browser would resolve
/// against the surrounding path instead of sending as an id.
pub fn encode_path_segment(raw: &str) -> Option<String> {
    if matches!(raw, "" | "." | "..") {
        return None;
    }
    Some(percent_encode(raw, false))
}

fn percent_encode(raw: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') || (keep_slash && byte == b'/') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Append encoded `pairs` to `path` as a query string.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}
