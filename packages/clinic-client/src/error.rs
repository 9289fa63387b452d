//! Error taxonomy for the clinic API client.
//!
//! Backend responses are decoded once at the transport boundary and mapped
//! to a typed error; callers branch on the variant (or on `status()`) for
//! presentation. The authorizer never swallows an error: it reacts to `401`
//! as a side effect and propagates the original value unchanged.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// HTTP 401. The sole session-expiry signal; the authorizer tears the
    /// session down when it observes this.
    #[error("unauthorized: {}", .message.as_deref().unwrap_or("authentication required"))]
    Unauthorized { message: Option<String> },

    /// HTTP 403. No session mutation; presentation only.
    #[error("forbidden: {}", .message.as_deref().unwrap_or("access denied"))]
    Forbidden { message: Option<String> },

    /// HTTP 409. Carries the backend message verbatim (scheduling overlap
    /// and the like); the client performs no conflict detection of its own.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// HTTP 429, only expected from the login endpoint.
    #[error("rate limited: {}", .message.as_deref().unwrap_or("too many attempts"))]
    RateLimited { message: Option<String> },

    /// The request never produced an HTTP status: connection refused, DNS
    /// failure, timeout. Reported as status 0, matching the browser
    /// convention the backend contract assumes.
    #[error("connectivity error: {detail}")]
    Connectivity { detail: String },

    /// HTTP 5xx.
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("internal error"))]
    Server { status: u16, message: Option<String> },

    /// Any other non-success status.
    #[error("api error ({status}): {}", .message.as_deref().unwrap_or("request failed"))]
    Api { status: u16, message: Option<String> },

    /// A 2xx body that does not match the documented envelope.
    #[error("decode error: {detail}")]
    Decode { detail: String },
}

impl ApiError {
    /// HTTP status this error corresponds to; `0` when the request never
    /// reached the backend.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized { .. } => 401,
            ApiError::Forbidden { .. } => 403,
            ApiError::Conflict { .. } => 409,
            ApiError::RateLimited { .. } => 429,
            ApiError::Connectivity { .. } => 0,
            ApiError::Server { status, .. } => *status,
            ApiError::Api { status, .. } => *status,
            ApiError::Decode { .. } => 0,
        }
    }

    /// Backend-provided message, when one was present in the error body.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Forbidden { message }
            | ApiError::RateLimited { message }
            | ApiError::Server { message, .. }
            | ApiError::Api { message, .. } => message.as_deref(),
            ApiError::Conflict { message } => Some(message),
            ApiError::Connectivity { .. } | ApiError::Decode { .. } => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Map a non-success HTTP status plus the decoded error body to the
    /// taxonomy. The `message` field of the body is the only part the UI
    /// layer consumes.
    pub fn from_status(status: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);
        match status {
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            409 => ApiError::Conflict {
                message: message.unwrap_or_else(|| "conflict".to_string()),
            },
            429 => ApiError::RateLimited { message },
            s if s >= 500 => ApiError::Server { status: s, message },
            s => ApiError::Api { status: s, message },
        }
    }

    pub fn connectivity(detail: impl Into<String>) -> Self {
        ApiError::Connectivity {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        ApiError::Decode {
            detail: detail.into(),
        }
    }
}
