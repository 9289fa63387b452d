//! Bearer-token builders.
//!
//! The client never verifies signatures, so test tokens only need the
//! three-segment JWT shape with a base64url JSON claims segment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

/// Token whose claims segment is the given JSON value.
pub fn token_with_claims(claims: &Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("test-header.{payload}.test-signature")
}

/// Token carrying a single `id` claim.
pub fn token_for_user(id: &str) -> String {
    token_with_claims(&serde_json::json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::token_for_user;

    #[test]
    fn tokens_have_three_segments() {
        let token = token_for_user("u-1");
        assert_eq!(token.split('.').count(), 3);
    }
}
