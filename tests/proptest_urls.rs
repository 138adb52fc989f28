//! Property-based tests for URL construction using proptest
//!
//! These tests check how paths and queries are assembled for arbitrary
//! inputs.

use deezer_catalog::api::url::object_url;
use deezer_catalog::converters::KIND_NAMES;
use deezer_catalog::ClientConfig;
use proptest::prelude::*;

/// Pick any valid object type, including the search endpoint
fn arb_object_type() -> impl Strategy<Value = &'static str> {
    let mut names: Vec<&'static str> = KIND_NAMES.iter().map(|(_, name)| *name).collect();
    names.push("search");
    prop::sample::select(names)
}

/// Optional path segment, sometimes empty
fn arb_segment() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof!["[a-z0-9]{1,12}", Just(String::new())])
}

/// Optional path segment drawn from characters that are reserved in URLs
fn arb_reserved_segment() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z0-9?#/%& ]{0,12}")
}

/// Query parameters with printable values
fn arb_params() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z_]{1,8}", "[ -~]{0,16}"), 0..5)
}

proptest! {
    #[test]
    fn path_segments_in_order_without_empty_ones(
        object_type in arb_object_type(),
        id in arb_segment(),
        relation in arb_segment(),
    ) {
        let config = ClientConfig::default();
        let url = object_url(&config, object_type, id.as_deref(), relation.as_deref(), &[]).unwrap();

        let path = url.strip_prefix("https://api.deezer.com/").unwrap();
        prop_assert!(!path.contains("//"));
        prop_assert!(!path.ends_with('/'));

        let expected: Vec<&str> = [Some(object_type), id.as_deref(), relation.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        prop_assert_eq!(path.split('/').collect::<Vec<_>>(), expected);
    }

    #[test]
    fn reserved_characters_stay_inside_their_segment(
        object_type in arb_object_type(),
        id in arb_reserved_segment(),
        relation in arb_reserved_segment(),
    ) {
        let config = ClientConfig::default();
        let built = object_url(&config, object_type, id.as_deref(), relation.as_deref(), &[]).unwrap();
        let parsed = url::Url::parse(&built).unwrap();

        prop_assert_eq!(parsed.query(), None);
        prop_assert_eq!(parsed.fragment(), None);
        prop_assert!(!parsed.path().contains("//"));

        let expected = [id.as_deref(), relation.as_deref()]
            .into_iter()
            .flatten()
            .map(|s| s.trim_matches('/'))
            .filter(|s| !s.is_empty())
            .count();
        let segments: Vec<&str> = parsed.path_segments().unwrap().collect();
        prop_assert_eq!(segments.len(), expected + 1);
        prop_assert_eq!(segments[0], object_type);
        prop_assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn query_keeps_caller_order(params in arb_params()) {
        let config = ClientConfig::default();
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let url = object_url(&config, "search", None, None, &pairs).unwrap();

        let decoded: Vec<(String, String)> = match url.split_once('?') {
            Some((_, query)) => url::form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
            None => Vec::new(),
        };
        prop_assert_eq!(decoded, params);
    }

    #[test]
    fn access_token_always_last(params in arb_params(), token in "[A-Za-z0-9]{1,24}") {
        let config = ClientConfig::default().with_access_token(token.clone());
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let url = object_url(&config, "album", Some("12"), None, &pairs).unwrap();

        let expected_suffix = format!("access_token={}", token);
        prop_assert!(url.ends_with(&expected_suffix));
    }
}
