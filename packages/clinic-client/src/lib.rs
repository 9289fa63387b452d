//! Client library for the clinic administration backend.
//!
//! The core is the session/authorization pipeline: a cookie-semantics
//! token store, a session service owning the login/logout lifecycle, a
//! request authorizer that attaches bearer authorization to protected API
//! calls and tears the session down on `401`, and a route guard gating
//! protected views. Typed resource clients for patients, users and
//! appointments sit on top of the authorized transport.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod store;
pub mod transport;

// Re-exports for public API
pub use api::{
    Appointment, AppointmentDraft, AppointmentFilters, AppointmentsClient, Page, Pagination,
    Patient, PatientDraft, PatientsClient, User, UserDraft, UsersClient,
};
pub use config::{ApiConfig, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
pub use error::ApiError;
pub use guard::{GuardDecision, RouteGuard};
pub use session::{Credentials, LoginOutcome, SessionService, TokenPair};
pub use store::{CookieTokenStore, StoreError, TokenStore};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, Navigator, RequestAuthorizer, ResponseHook,
    ReqwestTransport,
};

// Prelude for test convenience
pub mod prelude {
    pub use super::api::*;
    pub use super::config::*;
    pub use super::error::*;
    pub use super::guard::*;
    pub use super::session::*;
    pub use super::store::*;
    pub use super::transport::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
