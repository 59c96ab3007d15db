//! Route admission control.
//!
//! Credentials arrive either as an `Authorization: Bearer <key>` header
//! or as a raw `key` query parameter. The query form is compared without
//! percent-decoding, so keys issued to existing deployments keep matching
//! byte-for-byte.

use std::collections::HashSet;

use hyper::header::AUTHORIZATION;
use hyper::HeaderMap;

use crate::http::query;
use crate::routing::Route;

/// Pull the credential out of a request: the first `Bearer` header wins,
/// falling back to the raw `key` query parameter.
pub fn extract_credential<'a>(
    headers: &'a HeaderMap,
    query_str: Option<&'a str>,
) -> Option<&'a str> {
    for value in headers.get_all(AUTHORIZATION) {
        if let Ok(text) = value.to_str() {
            if let Some(token) = text.strip_prefix("Bearer ") {
                return Some(token.trim());
            }
        }
    }

    query_str.and_then(|q| query::raw_param(q, "key"))
}

/// Decide admission for a matched route.
///
/// Routes with `auth: false` admit unconditionally. A route-specific key
/// must match exactly and the global set is not consulted; otherwise the
/// credential must be a member of the allowed key set.
pub fn authorize(
    route: &Route,
    headers: &HeaderMap,
    query_str: Option<&str>,
    allowed_keys: &HashSet<String>,
) -> bool {
    if !route.auth {
        return true;
    }

    let Some(credential) = extract_credential(headers, query_str) else {
        return false;
    };

    match &route.key {
        Some(key) => credential == key,
        None => allowed_keys.contains(credential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn route(auth: bool, key: Option<&str>) -> Route {
        Route {
            path: "/api".to_string(),
            dir: String::new(),
            index: None,
            allow: ["GET".to_string()].into(),
            auth,
            key: key.map(ToString::to_string),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    fn keys(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_bearer_header_extraction() {
        let headers = bearer("secret ");
        assert_eq!(extract_credential(&headers, None), Some("secret"));
    }

    #[test]
    fn test_non_bearer_header_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(extract_credential(&headers, None), None);
    }

    #[test]
    fn test_query_key_fallback() {
        let headers = HeaderMap::new();
        assert_eq!(
            extract_credential(&headers, Some("key=secret&x=1")),
            Some("secret")
        );
    }

    #[test]
    fn test_header_wins_over_query() {
        let headers = bearer("from-header");
        assert_eq!(
            extract_credential(&headers, Some("key=from-query")),
            Some("from-header")
        );
    }

    #[test]
    fn test_no_auth_route_admits_without_credential() {
        let headers = HeaderMap::new();
        assert!(authorize(&route(false, None), &headers, None, &keys(&[])));
    }

    #[test]
    fn test_auth_route_denies_without_credential() {
        let headers = HeaderMap::new();
        assert!(!authorize(
            &route(true, None),
            &headers,
            None,
            &keys(&["secret"])
        ));
    }

    #[test]
    fn test_global_key_set_membership() {
        let allowed = keys(&["alpha", "beta"]);
        assert!(authorize(&route(true, None), &bearer("alpha"), None, &allowed));
        assert!(!authorize(&route(true, None), &bearer("gamma"), None, &allowed));
    }

    #[test]
    fn test_route_key_overrides_global_set() {
        let allowed = keys(&["alpha"]);
        let specific = route(true, Some("secret"));
        // A key in the global set does not admit when the route pins its own.
        assert!(!authorize(&specific, &bearer("alpha"), None, &allowed));
        assert!(authorize(&specific, &bearer("secret"), None, &allowed));
    }

    #[test]
    fn test_query_credential_is_not_decoded() {
        let allowed = keys(&["aA"]);
        let headers = HeaderMap::new();
        // "%41" would decode to "A"; the raw comparison must not admit it.
        assert!(!authorize(
            &route(true, None),
            &headers,
            Some("key=a%41"),
            &allowed
        ));
        assert!(authorize(
            &route(true, None),
            &headers,
            Some("key=aA"),
            &allowed
        ));
    }
}
