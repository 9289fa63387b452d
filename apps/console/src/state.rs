//! Shared application context.
//!
//! Everything is wired once at startup and injected by handle: the session
//! service, guard and resource clients all share the same store, config and
//! authorized transport. No ambient globals.

use std::sync::Arc;

use clinic_client::{
    ApiConfig, AppointmentsClient, CookieTokenStore, HttpTransport, Navigator, PatientsClient,
    RequestAuthorizer, ReqwestTransport, RouteGuard, SessionService, UsersClient,
};
use tracing::warn;

use crate::navigator::ConsoleNavigator;

pub struct AppContext {
    pub config: Arc<ApiConfig>,
    pub session: Arc<SessionService>,
    pub guard: RouteGuard,
    pub navigator: Arc<dyn Navigator>,
    pub patients: PatientsClient,
    pub users: UsersClient,
    pub appointments: AppointmentsClient,
}

/// Session cookies live in a jar file so the console session survives
/// between invocations; `CLINIC_SESSION_FILE` overrides the location.
fn session_store() -> Arc<CookieTokenStore> {
    let path = std::env::var("CLINIC_SESSION_FILE")
        .unwrap_or_else(|_| ".clinic-session".to_string());
    match CookieTokenStore::open(&path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(path, error = %e, "session file unavailable, using in-memory session");
            Arc::new(CookieTokenStore::new())
        }
    }
}

pub fn build_context(config: ApiConfig) -> AppContext {
    let config = Arc::new(config);
    let store = session_store();
    let navigator: Arc<dyn Navigator> = Arc::new(ConsoleNavigator);

    let wire = Arc::new(ReqwestTransport::new(config.base_url.clone()));
    let session = Arc::new(SessionService::new(
        store,
        wire.clone() as Arc<dyn HttpTransport>,
        config.clone(),
    ));
    let authorized: Arc<dyn HttpTransport> = Arc::new(RequestAuthorizer::new(
        wire,
        session.clone(),
        config.clone(),
        navigator.clone(),
    ));

    AppContext {
        guard: RouteGuard::new(session.clone()),
        patients: PatientsClient::new(authorized.clone(), config.clone()),
        users: UsersClient::new(authorized.clone(), config.clone()),
        appointments: AppointmentsClient::new(authorized, config.clone()),
        navigator,
        session,
        config,
    }
}
