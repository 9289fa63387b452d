//! Cookie-jar token store.
//!
//! Tokens are kept as `Secure; SameSite=Strict; Path=/` cookies with an
//! absolute expiry timestamp, preserving the scoping and confidentiality
//! posture of the browser cookies this replaces. The jar lives in memory
//! and can optionally be backed by a file (one `Set-Cookie` line per
//! record) so a console session survives process restarts.
//!
//! Removal follows the cookie idiom: the record is overwritten with an
//! already-expired cookie rather than deleted outright.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use cookie::{Cookie, SameSite};
use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use super::token_store::{StoreError, TokenStore};

pub struct CookieTokenStore {
    jar: Mutex<HashMap<String, Cookie<'static>>>,
    backing: Option<PathBuf>,
}

fn build_cookie(name: &str, value: &str, expires: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((name.to_string(), value.to_string()))
        .secure(true)
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/".to_string())
        .expires(expires)
        .build()
}

fn is_expired(cookie: &Cookie<'_>, now: OffsetDateTime) -> bool {
    match cookie.expires_datetime() {
        Some(expires) => expires <= now,
        // No expiry attribute: treat as a session record that is always live.
        None => false,
    }
}

impl CookieTokenStore {
    /// In-memory jar with no file backing.
    pub fn new() -> Self {
        Self {
            jar: Mutex::new(HashMap::new()),
            backing: None,
        }
    }

    /// Jar backed by `path`. Existing records are loaded eagerly; expired or
    /// unparsable lines are dropped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut jar = HashMap::new();
        if path.exists() {
            let now = OffsetDateTime::now_utc();
            let raw = std::fs::read_to_string(&path)?;
            for line in raw.lines().filter(|l| !l.trim().is_empty()) {
                match Cookie::parse(line.trim().to_string()) {
                    Ok(cookie) if !is_expired(&cookie, now) => {
                        jar.insert(cookie.name().to_string(), cookie);
                    }
                    Ok(expired) => {
                        debug!(name = expired.name(), "dropping expired token record");
                    }
                    Err(e) => {
                        warn!(error = %e, "dropping unparsable token record");
                    }
                }
            }
        }
        Ok(Self {
            jar: Mutex::new(jar),
            backing: Some(path),
        })
    }

    fn persist(&self, jar: &HashMap<String, Cookie<'static>>) -> Result<(), StoreError> {
        let Some(path) = &self.backing else {
            return Ok(());
        };
        let now = OffsetDateTime::now_utc();
        let mut file = std::fs::File::create(path)?;
        for cookie in jar.values() {
            if !is_expired(cookie, now) {
                writeln!(file, "{cookie}")?;
            }
        }
        Ok(())
    }
}

impl Default for CookieTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for CookieTokenStore {
    fn set(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), StoreError> {
        let expires = OffsetDateTime::now_utc() + Duration::days(ttl_days);
        let mut jar = self.jar.lock();
        jar.insert(name.to_string(), build_cookie(name, value, expires));
        self.persist(&jar)
    }

    fn get(&self, name: &str) -> Option<String> {
        let jar = self.jar.lock();
        let cookie = jar.get(name)?;
        if is_expired(cookie, OffsetDateTime::now_utc()) {
            return None;
        }
        Some(cookie.value().to_string())
    }

    fn remove(&self, name: &str) {
        let mut jar = self.jar.lock();
        // Overwrite with an already-expired record.
        let expired = OffsetDateTime::now_utc() - Duration::days(1);
        jar.insert(name.to_string(), build_cookie(name, "", expired));
        if let Err(e) = self.persist(&jar) {
            warn!(name, error = %e, "failed to persist token removal");
        }
    }
}
