//! Durable, clearable storage for the session token pair.

pub mod cookie_store;
pub mod token_store;

pub use cookie_store::CookieTokenStore;
pub use token_store::{StoreError, TokenStore};
