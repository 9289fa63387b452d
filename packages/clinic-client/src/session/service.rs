//! The session service.
//!
//! Owns the login/logout lifecycle and token exposure. Constructed once and
//! injected by handle into every collaborator that needs it (guard,
//! authorizer, console views) rather than reached through ambient state.
//!
//! There is no refresh-token exchange: access-token expiry is handled
//! reactively through the `401` teardown in the request authorizer, never
//! proactively here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::claims;
use crate::config::{ApiConfig, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::error::ApiError;
use crate::store::TokenStore;
use crate::transport::{ApiRequest, HttpTransport};

/// Login request body. Field names are the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub documento: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Result of a login call that reached the backend and came back 2xx,
/// decoded once at the boundary. Anything without a complete token pair is
/// `Incomplete`: no store mutation happened and the raw body is handed to
/// the caller for presentation.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated { tokens: TokenPair },
    Incomplete { raw: serde_json::Value },
}

pub struct SessionService {
    store: Arc<dyn TokenStore>,
    /// The base (un-authorized) transport. Login is on the public-route
    /// allowlist, so routing it around the authorizer changes nothing
    /// observable and breaks the session/authorizer construction cycle.
    transport: Arc<dyn HttpTransport>,
    config: Arc<ApiConfig>,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn TokenStore>,
        transport: Arc<dyn HttpTransport>,
        config: Arc<ApiConfig>,
    ) -> Self {
        Self {
            store,
            transport,
            config,
        }
    }

    /// One call to the authentication endpoint. On a response shaped
    /// `{success: true, data: {tokens: {accessToken, refreshToken}}}` the
    /// pair is stored (1-day and 7-day TTLs); any other 2xx shape mutates
    /// nothing. Non-2xx outcomes are forwarded unmodified — a `429` arrives
    /// as [`ApiError::RateLimited`] for the login view to present.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
        let body = serde_json::to_value(credentials)
            .map_err(|e| ApiError::decode(format!("credentials did not serialize: {e}")))?;
        let request = ApiRequest::post(self.config.path("/auth/login"), body);
        let response = self.transport.send(request).await?;

        let success = response
            .body
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);
        let tokens = success
            .then(|| response.body.pointer("/data/tokens"))
            .flatten()
            .and_then(|t| serde_json::from_value::<TokenPair>(t.clone()).ok());

        match tokens {
            Some(tokens) => {
                self.store_pair(&tokens);
                info!("session established");
                Ok(LoginOutcome::Authenticated { tokens })
            }
            None => {
                debug!("login response carried no token pair; session unchanged");
                Ok(LoginOutcome::Incomplete { raw: response.body })
            }
        }
    }

    /// The two writes are independent; a persistence failure on either is
    /// logged and the session continues as a degraded in-memory pair.
    fn store_pair(&self, tokens: &TokenPair) {
        if let Err(e) = self.store.set(
            ACCESS_TOKEN_COOKIE,
            &tokens.access_token,
            self.config.access_ttl_days,
        ) {
            warn!(error = %e, "failed to persist access token");
        }
        if let Err(e) = self.store.set(
            REFRESH_TOKEN_COOKIE,
            &tokens.refresh_token,
            self.config.refresh_ttl_days,
        ) {
            warn!(error = %e, "failed to persist refresh token");
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_COOKIE)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_COOKIE)
    }

    /// Decoded on demand from the current access token; never cached,
    /// never fails — a malformed token reads as "no identity".
    pub fn current_user_id(&self) -> Option<String> {
        self.access_token()
            .and_then(|token| claims::user_id_from_token(&token))
    }

    /// Clear both tokens unconditionally. Idempotent; never fails.
    pub fn logout(&self) {
        self.store.remove(ACCESS_TOKEN_COOKIE);
        self.store.remove(REFRESH_TOKEN_COOKIE);
        info!("session cleared");
    }
}
