//! Endpoint registry
//!
//! The fixed set of HTTP targets checked by one sweep. Endpoints are
//! assembled once at startup and never mutated afterwards. URLs are not
//! validated here; a malformed URL simply surfaces as a failed probe.

/// A single named HTTP target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Identifier, unique within the registry
    pub name: String,
    /// Target address for the GET probe
    pub url: String,
    /// Extra request headers (may be empty)
    pub headers: Vec<(String, String)>,
}

impl Endpoint {
    /// Create an endpoint with no extra headers
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Endpoint {
            name: name.into(),
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Build the built-in endpoint set for the given base URL.
///
/// The API key is injected by the caller (sourced from the environment at
/// startup) rather than compiled in. When no key is available the keyed
/// endpoints are probed without the header and the target decides how to
/// respond.
pub fn builtin_endpoints(base_url: &str, api_key: Option<&str>) -> Vec<Endpoint> {
    let base = base_url.trim_end_matches('/');

    let keyed = |endpoint: Endpoint| match api_key {
        Some(key) => endpoint.with_header("X-API-Key", key),
        None => endpoint,
    };

    vec![
        keyed(Endpoint::new("export", format!("{}/api/export", base))),
        keyed(Endpoint::new("audit", format!("{}/api/audit", base))),
        Endpoint::new("health", format!("{}/health", base)),
    ]
}
