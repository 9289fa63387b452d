//! Session lifecycle: login, logout, token exposure, identity derivation.

pub mod claims;
pub mod service;

pub use service::{Credentials, LoginOutcome, SessionService, TokenPair};
