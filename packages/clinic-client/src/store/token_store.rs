//! Storage contract for the token pair.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to persist token store: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage for opaque token strings with per-record expiry.
///
/// Records are write-once-per-set: `set` replaces any existing record under
/// the same name. A record past its TTL is indistinguishable from a missing
/// one. `remove` invalidates immediately and never fails; persistence
/// problems during removal are logged, not surfaced, so `logout()` stays
/// infallible.
pub trait TokenStore: Send + Sync {
    /// Write `value` under `name`, retrievable for `ttl_days` days.
    fn set(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), StoreError>;

    /// Current value, or `None` when missing or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Invalidate immediately, regardless of remaining TTL.
    fn remove(&self, name: &str);
}
