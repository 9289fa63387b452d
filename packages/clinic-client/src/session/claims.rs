//! Identity-claims derivation from the access token.
//!
//! The access token is an opaque JWT; only its middle segment is read
//! (base64url JSON), and nothing is verified. The user id claim is `id`,
//! else `userId`, else `sub`. Derivation never fails the caller: every
//! malformed input maps to `None` with a diagnostic log.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde_json::Value;
use tracing::debug;

/// User id from the token's claims segment, if one can be derived.
pub fn user_id_from_token(token: &str) -> Option<String> {
    let claims = decode_claims_segment(token)?;
    let id = ["id", "userId", "sub"]
        .iter()
        .find_map(|claim| claims.get(*claim).and_then(claim_as_string));
    if id.is_none() {
        debug!("access token claims carry no id, userId or sub");
    }
    id
}

fn decode_claims_segment(token: &str) -> Option<Value> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) => payload,
        _ => {
            debug!("access token is not segmented like a JWT");
            return None;
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .map_err(|e| debug!(error = %e, "access token claims segment is not base64"))
        .ok()?;

    serde_json::from_slice::<Value>(&bytes)
        .map_err(|e| debug!(error = %e, "access token claims segment is not JSON"))
        .ok()
}

/// Claims arrive as strings or numbers depending on the backend; both read
/// as an id.
fn claim_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
