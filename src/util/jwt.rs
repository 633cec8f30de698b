//! Identity-claim extraction from the bearer token.
//!
//! The token is treated as an unverified JWT: three dot-separated segments,
//! the middle one base64url-encoded JSON. Only the `sub` claim is read; the
//! signature is never checked client-side.
//!
//! Decoding never panics. Callers decide whether a failure is silent or ends
//! the session.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet, padding optional, trailing bits ignored (the lenient
/// rules browsers apply in `atob`).
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("token is not three dot-separated segments")]
    Segments,
    #[error("claim segment is not base64: {0}")]
    Base64(String),
    #[error("claim segment is not UTF-8")]
    Utf8,
    #[error("claim segment is not JSON: {0}")]
    Json(String),
    #[error("claim has no usable `sub`")]
    MissingSubject,
}

/// Decode the subject identifier carried by `token`.
///
/// # Errors
///
/// Returns a [`ClaimError`] naming the first step that failed.
pub fn decode_subject(token: &str) -> Result<String, ClaimError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimError::Segments);
    };

    let standard: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = FORGIVING
        .decode(standard.as_bytes())
        .map_err(|e| ClaimError::Base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| ClaimError::Utf8)?;
    let claims: serde_json::Value = serde_json::from_str(&text).map_err(|e| ClaimError::Json(e.to_string()))?;

    match claims.get("sub") {
        Some(serde_json::Value::String(sub)) if !sub.is_empty() => Ok(sub.clone()),
        Some(serde_json::Value::Number(n)) => Ok(number_text(n)),
        _ => Err(ClaimError::MissingSubject),
    }
}

/// 2^53: above this, integral floats no longer map to one integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render a numeric claim the way it reads in a URL: `4.2e1` is `42`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract().abs() < f64::EPSILON && f.abs() < MAX_SAFE_INTEGER => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}
