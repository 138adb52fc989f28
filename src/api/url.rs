//! URL construction for the Deezer API.
//!
//! Paths are assembled as `scheme://host/object_type[/id][/relation]` and
//! query parameters are form-encoded in the order the caller gave them.

use url::{form_urlencoded, Url};

use crate::config::ClientConfig;
use crate::converters::ResourceKind;
use crate::error::{DeezerError, Result};

/// Object type of the search endpoint. Not a record kind.
pub const SEARCH: &str = "search";

/// Query parameter carrying the access token.
const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Check that `object_type` is a record kind or the search endpoint.
pub fn validate_object_type(object_type: &str) -> Result<()> {
    if object_type == SEARCH {
        return Ok(());
    }
    object_type.parse::<ResourceKind>().map(|_| ())
}

/// Join `path` to the configured origin with exactly one `/`.
pub fn url(config: &ClientConfig, path: &str) -> String {
    format!("{}/{}", config.origin(), path.trim_start_matches('/'))
}

/// Build the URL of an API object.
///
/// Empty `object_id` or `relation` segments are treated as absent; other
/// segments are percent-encoded, so `/`, `?` and `#` stay inside their
/// segment. The configured access token, if any, is appended last and
/// replaces any `access_token` pair passed in `params`.
pub fn object_url(
    config: &ClientConfig,
    object_type: &str,
    object_id: Option<&str>,
    relation: Option<&str>,
    params: &[(&str, &str)],
) -> Result<String> {
    validate_object_type(object_type)?;

    let mut base_url =
        Url::parse(&config.origin()).map_err(|e| DeezerError::InvalidUrl(e.to_string()))?;
    base_url
        .path_segments_mut()
        .map_err(|_| DeezerError::InvalidUrl(config.origin()))?
        .pop_if_empty()
        .extend(
            [Some(object_type), object_id, relation]
                .into_iter()
                .flatten()
                .map(|segment| segment.trim_matches('/'))
                .filter(|segment| !segment.is_empty()),
        );

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut has_params = false;
    for (key, value) in params {
        if config.access_token.is_some() && *key == ACCESS_TOKEN_PARAM {
            continue;
        }
        query.append_pair(key, value);
        has_params = true;
    }
    if let Some(token) = &config.access_token {
        query.append_pair(ACCESS_TOKEN_PARAM, token);
        has_params = true;
    }

    if has_params {
        Ok(format!("{}?{}", base_url, query.finish()))
    } else {
        Ok(base_url.into())
    }
}

/// Build the `q` value of an advanced search.
///
/// Each term becomes `field:"value"`; terms are joined by one space in the
/// order given.
pub fn advanced_query(terms: &[(&str, &str)]) -> String {
    terms
        .iter()
        .map(|(field, value)| format!("{}:\"{}\"", field, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reject identifiers that cannot name an API object.
pub fn validate_id(object_id: i64) -> Result<()> {
    if object_id < 0 {
        return Err(DeezerError::InvalidId(object_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::default()
    }

    #[test]
    fn test_url_adds_single_slash() {
        assert_eq!(url(&config(), "/user"), "https://api.deezer.com/user");
        assert_eq!(url(&config(), "user"), "https://api.deezer.com/user");
        assert_eq!(url(&config(), ""), "https://api.deezer.com/");
    }

    #[test]
    fn test_object_url_segments() {
        let c = config();
        assert_eq!(
            object_url(&c, "album", None, None, &[]).unwrap(),
            "https://api.deezer.com/album"
        );
        assert_eq!(
            object_url(&c, "album", Some("12"), None, &[]).unwrap(),
            "https://api.deezer.com/album/12"
        );
        assert_eq!(
            object_url(&c, "album", Some(12.to_string().as_str()), None, &[]).unwrap(),
            "https://api.deezer.com/album/12"
        );
        assert_eq!(
            object_url(&c, "album", Some("12"), Some("artist"), &[]).unwrap(),
            "https://api.deezer.com/album/12/artist"
        );
        assert_eq!(
            object_url(&c, "chart", None, None, &[]).unwrap(),
            "https://api.deezer.com/chart"
        );
    }

    #[test]
    fn test_object_url_with_params() {
        let c = config();
        assert_eq!(
            object_url(&c, "album", Some("12"), None, &[("limit", "1")]).unwrap(),
            "https://api.deezer.com/album/12?limit=1"
        );
        assert_eq!(
            object_url(&c, "album", Some("12"), Some("artist"), &[("limit", "1")]).unwrap(),
            "https://api.deezer.com/album/12/artist?limit=1"
        );
        assert_eq!(
            object_url(&c, "artist", Some("12"), Some("albums"), &[("limit", "1")]).unwrap(),
            "https://api.deezer.com/artist/12/albums?limit=1"
        );
    }

    #[test]
    fn test_object_url_keeps_param_order() {
        let url = object_url(
            &config(),
            "search",
            None,
            None,
            &[("q", "x"), ("limit", "2"), ("index", "1"), ("q", "y")],
        )
        .unwrap();
        assert_eq!(url, "https://api.deezer.com/search?q=x&limit=2&index=1&q=y");
    }

    #[test]
    fn test_object_url_search_encoding() {
        let c = config();
        assert_eq!(
            object_url(&c, "search", None, None, &[("q", "Soliloquy")]).unwrap(),
            "https://api.deezer.com/search?q=Soliloquy"
        );
        assert_eq!(
            object_url(&c, "search", None, Some("album"), &[("q", "Daft Punk")]).unwrap(),
            "https://api.deezer.com/search/album?q=Daft+Punk"
        );
        assert_eq!(
            object_url(&c, "search", None, None, &[("q", "artist:\"Lou Doillon\"")]).unwrap(),
            "https://api.deezer.com/search?q=artist%3A%22Lou+Doillon%22"
        );
    }

    #[test]
    fn test_object_url_rejects_unknown_type() {
        let err = object_url(&config(), "foo", None, None, &[]).unwrap_err();
        assert!(matches!(err, DeezerError::InvalidObjectType(t) if t == "foo"));
    }

    #[test]
    fn test_object_url_skips_empty_segments() {
        assert_eq!(
            object_url(&config(), "album", Some(""), Some("tracks"), &[]).unwrap(),
            "https://api.deezer.com/album/tracks"
        );
    }

    #[test]
    fn test_object_url_encodes_reserved_characters() {
        let c = config();
        assert_eq!(
            object_url(&c, "album", Some("12?x=1#y"), None, &[("limit", "1")]).unwrap(),
            "https://api.deezer.com/album/12%3Fx=1%23y?limit=1"
        );
        assert_eq!(
            object_url(&c, "album", Some("1//2"), None, &[]).unwrap(),
            "https://api.deezer.com/album/1%2F%2F2"
        );
        assert_eq!(
            object_url(&c, "artist", Some("27"), Some("top 5"), &[]).unwrap(),
            "https://api.deezer.com/artist/27/top%205"
        );
    }

    #[test]
    fn test_access_token_appended() {
        let c = config().with_access_token("token");
        assert_eq!(
            object_url(&c, "user", Some("me"), None, &[]).unwrap(),
            "https://api.deezer.com/user/me?access_token=token"
        );
        assert_eq!(
            object_url(&c, "album", Some("12"), None, &[("limit", "1")]).unwrap(),
            "https://api.deezer.com/album/12?limit=1&access_token=token"
        );
    }

    #[test]
    fn test_configured_token_replaces_param() {
        let c = config().with_access_token("token");
        assert_eq!(
            object_url(&c, "user", Some("me"), None, &[("access_token", "other")]).unwrap(),
            "https://api.deezer.com/user/me?access_token=token"
        );
    }

    #[test]
    fn test_http_scheme() {
        let c = config().with_ssl(false);
        assert_eq!(
            object_url(&c, "genre", None, None, &[]).unwrap(),
            "http://api.deezer.com/genre"
        );
    }

    #[test]
    fn test_advanced_query() {
        assert_eq!(
            advanced_query(&[("artist", "Lou Doillon"), ("album", "Lay Low")]),
            "artist:\"Lou Doillon\" album:\"Lay Low\""
        );
        assert_eq!(advanced_query(&[]), "");
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(0).is_ok());
        assert!(validate_id(302127).is_ok());
        assert!(matches!(validate_id(-1), Err(DeezerError::InvalidId(-1))));
    }
}
