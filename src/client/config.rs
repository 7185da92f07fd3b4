//! # Base-URL Resolution
//!
//! Servers in this domain hand out relative hrefs (`/api/posts/1/publish`).
//! What they are relative *to* depends on where the client runs: deployed
//! next to the API they resolve against the serving origin, in local
//! development they are prefixed with an explicit endpoint. [`ApiBase`] makes
//! that policy an injected value instead of ambient configuration.

use url::Url;

/// Endpoint used when no environment configuration is present.
pub const DEFAULT_DEV_ENDPOINT: &str = "http://localhost:3000";

/// How relative hrefs become absolute request targets.
///
/// Absolute `http(s)://` hrefs always pass through unchanged, whichever
/// variant is in use.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBase {
    /// Deployed: relative hrefs resolve against the serving origin, with
    /// standard URL resolution (`/x` lands on the origin root).
    Origin(Url),

    /// Local development: relative hrefs are prefixed with an explicit
    /// endpoint, verbatim.
    Endpoint(String),
}

impl ApiBase {
    /// A deployed base resolving against `origin`.
    pub fn origin(origin: &str) -> Result<Self, url::ParseError> {
        Ok(ApiBase::Origin(Url::parse(origin)?))
    }

    /// A development base prefixing `endpoint`. Trailing slashes are trimmed
    /// so `endpoint + "/api/..."` concatenates cleanly.
    pub fn endpoint(endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }
        ApiBase::Endpoint(endpoint)
    }

    /// Builds the base from the environment: `BLOG_API_ORIGIN` selects the
    /// deployed policy, otherwise `BLOG_API_URL` (default
    /// `http://localhost:3000`) selects the development policy.
    pub fn from_env() -> Self {
        if let Ok(origin) = std::env::var("BLOG_API_ORIGIN") {
            if let Ok(base) = Self::origin(&origin) {
                return base;
            }
        }
        let endpoint =
            std::env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_DEV_ENDPOINT.to_string());
        Self::endpoint(endpoint)
    }

    /// Resolves an href to an absolute request target.
    pub fn resolve(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            return href.to_string();
        }
        match self {
            ApiBase::Origin(origin) => origin
                .join(href)
                .map(String::from)
                // An unresolvable href is passed through for the transport
                // to report, matching the pass-through of absolute hrefs.
                .unwrap_or_else(|_| href.to_string()),
            ApiBase::Endpoint(endpoint) => format!("{endpoint}{href}"),
        }
    }
}
