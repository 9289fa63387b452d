//! Backend response-envelope builders for tests.

use serde_json::{json, Value};

/// Successful login body: `{success, data: {tokens: {...}}}`.
pub fn login_success(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "tokens": {
                "accessToken": access_token,
                "refreshToken": refresh_token
            }
        }
    })
}

/// Paginated list body with an explicit pagination block.
pub fn list_page(data: Value, page: u32, limit: u32, total: u64, pages: u32) -> Value {
    json!({
        "success": true,
        "data": data,
        "pagination": { "page": page, "limit": limit, "total": total, "pages": pages }
    })
}

/// List body with the pagination block missing entirely.
pub fn list_without_pagination(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// Error body carrying a backend message.
pub fn error_message(message: &str) -> Value {
    json!({ "success": false, "message": message })
}
