//! Candidate credential extraction from request headers.
//!
//! Accepted forms, first match wins:
//! - `Authorization: Bearer <key>`
//! - `Authorization: <key>` (no scheme; Basic/Digest are never used as keys)
//! - `X-API-Key: <key>`
//!
//! Header values are read as byte strings: repeated headers are joined with
//! `", "` and bytes outside visible ASCII decode as Latin-1, so such a value
//! is still a (non-matching) credential rather than a missing header.

use std::borrow::Cow;

use axum::http::{HeaderMap, HeaderName, HeaderValue, header};

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

const BEARER: &str = "bearer ";
const NON_KEY_SCHEMES: [&str; 2] = ["basic ", "digest "];

/// Returns the candidate credential, or `None` when no header supplies one.
///
/// `Some("")` is possible (e.g. `Authorization: Bearer   `) and is never a
/// valid key.
pub fn extract(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    if let Some(auth) = header_text(headers, &header::AUTHORIZATION) {
        if has_scheme(&auth, BEARER) {
            return Some(trim_from(auth, BEARER.len()));
        }
        if !NON_KEY_SCHEMES.iter().any(|scheme| has_scheme(&auth, scheme)) {
            return Some(trim_from(auth, 0));
        }
    }

    header_text(headers, &X_API_KEY).map(|key| trim_from(key, 0))
}

// Only a missing or empty header counts as absent.
fn header_text<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<Cow<'a, str>> {
    let mut values = headers.get_all(name).iter();
    let mut text = decode(values.next()?);

    for value in values {
        let joined = text.to_mut();
        joined.push_str(", ");
        joined.push_str(&decode(value));
    }

    (!text.is_empty()).then_some(text)
}

fn decode(value: &HeaderValue) -> Cow<'_, str> {
    match value.to_str() {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(value.as_bytes().iter().map(|&b| char::from(b)).collect()),
    }
}

// `start` is either 0 or the length of a scheme already matched by `has_scheme`.
fn trim_from(value: Cow<'_, str>, start: usize) -> Cow<'_, str> {
    match value {
        Cow::Borrowed(s) => Cow::Borrowed(s[start..].trim()),
        Cow::Owned(s) => Cow::Owned(s[start..].trim().to_string()),
    }
}

fn has_scheme(value: &str, scheme: &str) -> bool {
    value
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}
