use std::collections::HashSet;

use axum::http::HeaderMap;

use crate::config::InboundAuthConfig;
use crate::services::auth::credential;
use crate::services::auth::{Admission, AuthDecision, Rejection};

/// Static API key gate.
///
/// Both sets are fixed at construction and only read afterwards, so one
/// instance is shared across all requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct InboundAuth {
    allowed_keys: HashSet<String>,
    skip_paths: HashSet<String>,
}

impl InboundAuth {
    pub fn new(config: &InboundAuthConfig) -> Self {
        Self {
            allowed_keys: config.allowed_keys.clone(),
            skip_paths: config.skip_paths.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.allowed_keys.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.allowed_keys.len()
    }

    pub fn skip_path_count(&self) -> usize {
        self.skip_paths.len()
    }

    /// Admit or reject one request. Headers are only read when the path is
    /// not skipped and at least one key is configured.
    pub fn decide(&self, headers: &HeaderMap, path: &str) -> AuthDecision {
        if !self.is_enabled() {
            return AuthDecision::Admitted(Admission::Disabled);
        }

        if self.skip_paths.contains(path) {
            return AuthDecision::Admitted(Admission::SkipPath);
        }

        match credential::extract(headers) {
            None => AuthDecision::Rejected(Rejection::MissingCredential),
            Some(key) if self.allowed_keys.contains(&*key) => {
                AuthDecision::Admitted(Admission::Credential)
            }
            Some(_) => AuthDecision::Rejected(Rejection::UnknownCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn auth(single: Option<&str>, list: Option<&str>, skip: Option<&str>) -> InboundAuth {
        InboundAuth::new(&InboundAuthConfig::from_values(single, list, skip))
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    #[test]
    fn unconfigured_admits_everything() {
        let auth = auth(None, Some(" , "), Some("/usage"));
        assert!(!auth.is_enabled());

        for h in [
            headers(&[]),
            headers(&[("authorization", "Bearer anything")]),
            headers(&[("authorization", "Basic abc")]),
        ] {
            assert_eq!(
                auth.decide(&h, "/api/v1/anything"),
                AuthDecision::Admitted(Admission::Disabled)
            );
        }
    }

    #[test]
    fn skip_path_admits_without_credential() {
        let auth = auth(Some("abc123"), None, Some("/usage"));

        assert_eq!(
            auth.decide(&headers(&[]), "/usage"),
            AuthDecision::Admitted(Admission::SkipPath)
        );
        assert_eq!(
            auth.decide(&headers(&[("x-api-key", "wrong")]), "/usage"),
            AuthDecision::Admitted(Admission::SkipPath)
        );
    }

    #[test]
    fn skip_path_match_is_exact() {
        let auth = auth(Some("abc123"), None, Some("/usage"));

        assert_eq!(
            auth.decide(&headers(&[]), "/usage/"),
            AuthDecision::Rejected(Rejection::MissingCredential)
        );
        assert_eq!(
            auth.decide(&headers(&[]), "/Usage"),
            AuthDecision::Rejected(Rejection::MissingCredential)
        );
    }

    #[test]
    fn bearer_key_membership_decides() {
        let auth = auth(Some("abc123"), None, None);

        assert_eq!(
            auth.decide(&headers(&[("authorization", "Bearer abc123")]), "/"),
            AuthDecision::Admitted(Admission::Credential)
        );
        assert_eq!(
            auth.decide(&headers(&[("authorization", "Bearer wrong")]), "/"),
            AuthDecision::Rejected(Rejection::UnknownCredential)
        );
    }

    #[test]
    fn any_key_from_the_list_is_accepted() {
        let auth = auth(Some("k0"), Some("k1,k2"), None);

        for key in ["k0", "k1", "k2"] {
            let mut h = HeaderMap::new();
            h.insert("x-api-key", HeaderValue::from_str(key).unwrap());
            assert_eq!(
                auth.decide(&h, "/"),
                AuthDecision::Admitted(Admission::Credential),
                "{key}"
            );
        }
    }

    #[test]
    fn raw_authorization_fallback_is_admitted() {
        let auth = auth(Some("abc123"), None, None);
        assert_eq!(
            auth.decide(&headers(&[("authorization", "abc123")]), "/"),
            AuthDecision::Admitted(Admission::Credential)
        );
    }

    #[test]
    fn basic_scheme_is_rejected_even_with_valid_key() {
        let auth = auth(Some("abc123"), None, None);
        assert_eq!(
            auth.decide(&headers(&[("authorization", "Basic abc123")]), "/"),
            AuthDecision::Rejected(Rejection::MissingCredential)
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let auth = auth(Some("abc123"), None, None);
        assert_eq!(
            auth.decide(&headers(&[("x-api-key", "ABC123")]), "/"),
            AuthDecision::Rejected(Rejection::UnknownCredential)
        );
    }

    #[test]
    fn authorization_precedes_api_key() {
        let auth = auth(Some("k1"), None, None);

        let valid_bearer = headers(&[("authorization", "Bearer k1"), ("x-api-key", "bad")]);
        assert_eq!(
            auth.decide(&valid_bearer, "/"),
            AuthDecision::Admitted(Admission::Credential)
        );

        let invalid_bearer = headers(&[("authorization", "Bearer bad"), ("x-api-key", "k1")]);
        assert_eq!(
            auth.decide(&invalid_bearer, "/"),
            AuthDecision::Rejected(Rejection::UnknownCredential)
        );
    }

    #[test]
    fn non_ascii_authorization_does_not_fall_back_to_api_key() {
        let auth = auth(Some("k1"), None, None);

        let mut h = HeaderMap::new();
        h.insert(
            "authorization",
            HeaderValue::from_bytes(b"Bearer cl\xc3\xa9").unwrap(),
        );
        h.insert("x-api-key", HeaderValue::from_static("k1"));

        assert_eq!(
            auth.decide(&h, "/"),
            AuthDecision::Rejected(Rejection::UnknownCredential)
        );
    }

    #[test]
    fn only_the_joined_authorization_value_is_checked() {
        let auth = auth(Some("k1"), None, None);

        let mut h = HeaderMap::new();
        h.append("authorization", HeaderValue::from_static("Bearer k1"));
        h.append("authorization", HeaderValue::from_static("Bearer other"));

        assert_eq!(
            auth.decide(&h, "/"),
            AuthDecision::Rejected(Rejection::UnknownCredential)
        );
    }

    #[test]
    fn decisions_are_repeatable() {
        let auth = auth(Some("abc123"), None, None);
        let h = headers(&[("authorization", "Bearer abc123")]);

        let first = auth.decide(&h, "/");
        for _ in 0..3 {
            assert_eq!(auth.decide(&h, "/"), first);
        }
    }
}
