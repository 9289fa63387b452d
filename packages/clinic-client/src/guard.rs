//! Navigation guard for protected views.

use std::sync::Arc;

use tracing::debug;

use crate::session::SessionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Gates entry into protected views on token presence alone. No expiry,
/// signature or claims validation happens here: an expired-but-present
/// token passes the guard and fails later at the backend with a `401`.
pub struct RouteGuard {
    session: Arc<SessionService>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self { session }
    }

    pub fn can_activate(&self, target: &str) -> GuardDecision {
        if self.session.access_token().is_some() {
            GuardDecision::Allow
        } else {
            debug!(target, "no session, redirecting to login");
            GuardDecision::RedirectToLogin
        }
    }
}
