//! Client configuration.
//!
//! Everything the session stack needs to know about the backend lives here:
//! base URL, the API path prefix the authorizer keys on, the public-route
//! allowlist, and the cookie TTLs for the token pair. Built once at startup
//! and shared as an `Arc`.

use url::Url;

/// Cookie names for the stored token pair. Part of the persisted-state
/// contract; do not rename.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin of the backend, e.g. `http://localhost:3000`.
    pub base_url: Url,
    /// Path prefix identifying API calls; anything outside it passes the
    /// authorizer untouched.
    pub api_prefix: String,
    /// Routes that never need (or get) an Authorization header.
    pub public_routes: Vec<String>,
    /// Access-token cookie lifetime, in days.
    pub access_ttl_days: i64,
    /// Refresh-token cookie lifetime, in days.
    pub refresh_ttl_days: i64,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_prefix: "/api".to_string(),
            public_routes: vec![
                "/api/auth/login".to_string(),
                "/api/auth/register".to_string(),
            ],
            access_ttl_days: 1,
            refresh_ttl_days: 7,
        }
    }

    /// Read the backend origin from `CLINIC_API_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let raw =
            std::env::var("CLINIC_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Ok(Self::new(Url::parse(&raw)?))
    }

    /// Full request path for an API resource, e.g. `path("/auth/login")`
    /// yields `/api/auth/login`.
    pub fn path(&self, resource: &str) -> String {
        format!("{}{}", self.api_prefix, resource)
    }

    /// True when the path is an API call at all.
    pub fn is_api_path(&self, path: &str) -> bool {
        path.starts_with(&self.api_prefix)
    }

    /// True when the path matches the public-route allowlist.
    pub fn is_public_route(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| path.contains(route))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;
    use url::Url;

    fn config() -> ApiConfig {
        ApiConfig::new(Url::parse("http://localhost:3000").unwrap())
    }

    #[test]
    fn classifies_api_and_public_paths() {
        let cfg = config();
        assert!(cfg.is_api_path("/api/patients"));
        assert!(!cfg.is_api_path("/assets/logo.svg"));
        assert!(cfg.is_public_route("/api/auth/login"));
        assert!(cfg.is_public_route("/api/auth/register"));
        assert!(!cfg.is_public_route("/api/patients"));
    }

    #[test]
    fn builds_prefixed_paths() {
        assert_eq!(config().path("/patients"), "/api/patients");
    }
}
