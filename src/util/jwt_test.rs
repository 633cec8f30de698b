use super::*;

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decodes_numeric_string_subject() {
    assert_eq!(decode_subject("abc.eyJzdWIiOiI0MiJ9.sig"), Ok("42".to_owned()));
}

#[test]
fn decodes_uuid_subject_alongside_other_claims() {
    let token = "h.eyJzdWIiOiJkMmIyZjFlOC02YzFhLTRjOGUtOWE1My0wZjVmNWYwZTJhMTEiLCJlbWFpbCI6ImFkYUBleGFtcGxlLmNvbSJ9.s";
    assert_eq!(decode_subject(token), Ok("d2b2f1e8-6c1a-4c8e-9a53-0f5f5f0e2a11".to_owned()));
}

#[test]
fn translates_url_safe_alphabet_and_multibyte_text() {
    // payload {"sub":"José?~~"} encodes with a '-' in base64url.
    assert_eq!(decode_subject("h.eyJzdWIiOiJKb3PDqT9-fiJ9.s"), Ok("José?~~".to_owned()));
}

#[test]
fn accepts_padded_and_unpadded_payloads() {
    // payload {"sub":"ÿ>?"} encodes with a '_' and one pad char.
    assert_eq!(decode_subject("h.eyJzdWIiOiLDvz4_In0=.s"), Ok("ÿ>?".to_owned()));
    assert_eq!(decode_subject("h.eyJzdWIiOiLDvz4_In0.s"), Ok("ÿ>?".to_owned()));
}

#[test]
fn numeric_subject_is_stringified() {
    assert_eq!(decode_subject("h.eyJzdWIiOjd9.s"), Ok("7".to_owned()));
}

#[test]
fn integral_float_subject_drops_the_fraction() {
    // {"sub":4.2e1} and {"sub":42.0}
    assert_eq!(decode_subject("h.eyJzdWIiOjQuMmUxfQ.s"), Ok("42".to_owned()));
    assert_eq!(decode_subject("h.eyJzdWIiOjQyLjB9.s"), Ok("42".to_owned()));
    // {"sub":4.5}
    assert_eq!(decode_subject("h.eyJzdWIiOjQuNX0.s"), Ok("4.5".to_owned()));
}

// =============================================================
// Malformed tokens
// =============================================================

#[test]
fn rejects_wrong_segment_counts() {
    assert_eq!(decode_subject(""), Err(ClaimError::Segments));
    assert_eq!(decode_subject("opaque"), Err(ClaimError::Segments));
    assert_eq!(decode_subject("a.eyJzdWIiOiI0MiJ9"), Err(ClaimError::Segments));
    assert_eq!(decode_subject("a.eyJzdWIiOiI0MiJ9.b.c"), Err(ClaimError::Segments));
}

#[test]
fn rejects_non_base64_payload() {
    assert!(matches!(decode_subject("a.***.b"), Err(ClaimError::Base64(_))));
}

#[test]
fn rejects_invalid_utf8_payload() {
    assert_eq!(decode_subject("a.__4.b"), Err(ClaimError::Utf8));
}

#[test]
fn rejects_non_json_payload() {
    assert!(matches!(decode_subject("a.bm90IGpzb24.b"), Err(ClaimError::Json(_))));
}

#[test]
fn rejects_missing_or_null_subject() {
    assert_eq!(decode_subject("a.eyJlbWFpbCI6IngifQ.b"), Err(ClaimError::MissingSubject));
    assert_eq!(decode_subject("a.eyJzdWIiOm51bGx9.b"), Err(ClaimError::MissingSubject));
}
