//! Test helpers for generating unique test data
//!
//! ULID-based helpers to keep concurrently running tests from colliding on
//! identifiers.

use ulid::Ulid;

/// Generate a unique string with the given prefix
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique document number (digits only, as the backend expects)
pub fn unique_documento() -> String {
    let n: u128 = Ulid::new().into();
    format!("{}", n % 10_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::{unique_documento, unique_str};

    #[test]
    fn unique_strings_differ() {
        assert_ne!(unique_str("user"), unique_str("user"));
    }

    #[test]
    fn documento_is_numeric() {
        assert!(unique_documento().chars().all(|c| c.is_ascii_digit()));
    }
}
