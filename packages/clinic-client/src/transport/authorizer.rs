//! Request authorizer.
//!
//! Wraps a transport and uniformly attaches bearer authorization to
//! protected API calls, so resource clients never handle tokens
//! themselves. Reactions to the response (session teardown on `401`,
//! diagnostics for `403` and connectivity failures) run as an ordered list
//! of post-response hooks after the inner call resolves; hooks observe the
//! outcome and never alter it.
//!
//! Behavior preserved from the original, oversight included: a protected
//! request with no stored token triggers one redirect to login but is still
//! forwarded unauthenticated, and no hooks run for it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use super::navigator::Navigator;
use super::{ApiRequest, ApiResponse, HttpTransport};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::SessionService;

/// Observes the outcome of a protected call after the transport resolves.
/// Hooks run synchronously, in installation order, and must not mutate the
/// outcome.
pub trait ResponseHook: Send + Sync {
    fn on_outcome(&self, request: &ApiRequest, outcome: &Result<ApiResponse, ApiError>);
}

pub struct RequestAuthorizer<T> {
    inner: T,
    session: Arc<SessionService>,
    config: Arc<ApiConfig>,
    navigator: Arc<dyn Navigator>,
    hooks: Vec<Arc<dyn ResponseHook>>,
}

impl<T> RequestAuthorizer<T> {
    /// Authorizer with the standard hook list: session teardown on `401`,
    /// then log-only diagnostics.
    pub fn new(
        inner: T,
        session: Arc<SessionService>,
        config: Arc<ApiConfig>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let hooks: Vec<Arc<dyn ResponseHook>> = vec![
            Arc::new(SessionTeardownHook {
                session: Arc::clone(&session),
                navigator: Arc::clone(&navigator),
            }),
            Arc::new(DiagnosticsHook),
        ];
        Self {
            inner,
            session,
            config,
            navigator,
            hooks,
        }
    }

    /// Replace the hook list. Order is significant.
    pub fn with_hooks(mut self, hooks: Vec<Arc<dyn ResponseHook>>) -> Self {
        self.hooks = hooks;
        self
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for RequestAuthorizer<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        // Only API calls are our business.
        if !self.config.is_api_path(&request.path) {
            return self.inner.send(request).await;
        }
        // Public routes go out untouched.
        if self.config.is_public_route(&request.path) {
            return self.inner.send(request).await;
        }

        let token = match self.session.access_token() {
            Some(token) => token,
            None => {
                warn!(path = %request.path, "no token found for protected request");
                self.navigator.to_login();
                // Forwarded unmodified; the backend answers as it sees fit.
                return self.inner.send(request).await;
            }
        };

        let request = request.with_authorization(normalize_bearer(&token));
        let outcome = self.inner.send(request.clone()).await;
        for hook in &self.hooks {
            hook.on_outcome(&request, &outcome);
        }
        outcome
    }
}

/// `401` is the sole session-expiry signal: one logout, one redirect to
/// login, and the error still propagates to the caller unchanged.
pub struct SessionTeardownHook {
    session: Arc<SessionService>,
    navigator: Arc<dyn Navigator>,
}

impl ResponseHook for SessionTeardownHook {
    fn on_outcome(&self, request: &ApiRequest, outcome: &Result<ApiResponse, ApiError>) {
        if let Err(err) = outcome {
            if err.is_unauthorized() {
                warn!(path = %request.path, "unauthorized response, clearing session");
                self.session.logout();
                self.navigator.to_login();
            }
        }
    }
}

/// Log-only observer for the remaining contract statuses. No session
/// mutation; presentation stays with the view layer.
pub struct DiagnosticsHook;

impl ResponseHook for DiagnosticsHook {
    fn on_outcome(&self, request: &ApiRequest, outcome: &Result<ApiResponse, ApiError>) {
        match outcome {
            Err(ApiError::Forbidden { .. }) => {
                warn!(path = %request.path, "forbidden response");
            }
            Err(ApiError::Connectivity { detail }) => {
                error!(path = %request.path, detail = %detail, "network error");
            }
            _ => {}
        }
    }
}

/// Normalize a stored token into an `Authorization` header value: trim,
/// strip one layer of literal quotes, and prepend the `Bearer ` scheme
/// unless it is already there (case-insensitive).
fn normalize_bearer(raw: &str) -> String {
    let mut token = raw.trim();
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token = &token[1..token.len() - 1];
    }
    if has_bearer_scheme(token) {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

fn has_bearer_scheme(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() > 6
        && token[..6].eq_ignore_ascii_case("bearer")
        && bytes[6].is_ascii_whitespace()
}
