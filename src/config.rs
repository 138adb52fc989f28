//! Client configuration.

use std::fmt;

/// Default API host.
pub const DEFAULT_HOST: &str = "api.deezer.com";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("deezer-catalog/", env!("CARGO_PKG_VERSION"));

/// URL scheme used to reach the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
}

impl Scheme {
    /// Get the scheme as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a [`DeezerClient`](crate::DeezerClient).
///
/// # Example
///
/// ```rust
/// use deezer_catalog::{ClientConfig, Scheme};
///
/// let config = ClientConfig::default()
///     .with_access_token("token")
///     .with_language("fr");
/// assert_eq!(config.scheme, Scheme::Https);
/// assert_eq!(config.access_token.as_deref(), Some("token"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Host (and optional port) of the API origin.
    pub host: String,

    /// Scheme used to build URLs.
    pub scheme: Scheme,

    /// Access token appended to every request as `access_token`.
    pub access_token: Option<String>,

    /// Value of the `Accept-Language` header, if any.
    pub language: Option<String>,

    /// Application id. Stored for callers, not sent.
    pub app_id: Option<String>,

    /// Application secret. Stored for callers, not sent.
    pub app_secret: Option<String>,

    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: Scheme::Https,
            access_token: None,
            language: None,
            app_id: None,
            app_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the API host, e.g. `127.0.0.1:8080`.
    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Use `https` when `ssl` is true, `http` otherwise.
    pub fn with_ssl(self, ssl: bool) -> Self {
        self.with_scheme(if ssl { Scheme::Https } else { Scheme::Http })
    }

    /// Set the access token.
    pub fn with_access_token<S: Into<String>>(mut self, token: S) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the `Accept-Language` header value.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Store application credentials.
    pub fn with_app_credentials<S1: Into<String>, S2: Into<String>>(
        mut self,
        app_id: S1,
        app_secret: S2,
    ) -> Self {
        self.app_id = Some(app_id.into());
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Origin as `scheme://host`.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.origin(), "https://api.deezer.com");
        assert!(config.access_token.is_none());
        assert!(config.language.is_none());
    }

    #[test]
    fn test_ssl_switch() {
        assert_eq!(ClientConfig::default().with_ssl(false).scheme, Scheme::Http);
        assert_eq!(ClientConfig::default().with_ssl(true).scheme, Scheme::Https);
        assert_eq!(
            ClientConfig::default().with_ssl(false).origin(),
            "http://api.deezer.com"
        );
    }

    #[test]
    fn test_app_credentials_kept_verbatim() {
        let config = ClientConfig::default().with_app_credentials("foo", "bar");
        assert_eq!(config.app_id.as_deref(), Some("foo"));
        assert_eq!(config.app_secret.as_deref(), Some("bar"));
    }
}
