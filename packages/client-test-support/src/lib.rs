//! Client test support utilities
//!
//! This crate provides utilities for testing the clinic client: bearer-token
//! builders, backend response-envelope builders, unique test data, and
//! unified logging initialization.

pub mod envelopes;
pub mod logging;
pub mod tokens;
pub mod unique_helpers;
