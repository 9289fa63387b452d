//! Typed REST clients for the clinic resources.
//!
//! Every endpoint's body is decoded once, here, into typed values; the
//! views never touch raw JSON. List endpoints share the
//! `{success, data, pagination}` envelope.

pub mod appointments;
pub mod patients;
pub mod users;

pub use appointments::{Appointment, AppointmentDraft, AppointmentFilters, AppointmentsClient};
pub use patients::{Patient, PatientDraft, PatientsClient};
pub use users::{User, UserDraft, UsersClient};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Pagination block of a list envelope. Field-level defaults mirror the
/// original views: a missing block reads as page 1, limit 10, empty total.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
            pages: 0,
        }
    }
}

/// One page of a listed resource.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Decode a list envelope. `data` defaults to empty and `pagination` to its
/// documented defaults when absent; anything else malformed is a typed
/// decode error rather than a silent absence.
pub(crate) fn decode_page<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<Page<T>, ApiError> {
    let items = match body.get("data") {
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(data) => serde_json::from_value(data.clone())
            .map_err(|e| ApiError::decode(format!("list data did not decode: {e}")))?,
    };
    let pagination = match body.get("pagination") {
        None | Some(serde_json::Value::Null) => Pagination::default(),
        Some(p) => serde_json::from_value(p.clone())
            .map_err(|e| ApiError::decode(format!("pagination block did not decode: {e}")))?,
    };
    Ok(Page { items, pagination })
}

/// Decode a single-resource body. Some endpoints wrap the resource in
/// `{success, data}`, others return it bare; both shapes are accepted.
pub(crate) fn decode_resource<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<T, ApiError> {
    let payload = match body.get("data") {
        Some(data) if !data.is_null() => data.clone(),
        _ => body,
    };
    serde_json::from_value(payload)
        .map_err(|e| ApiError::decode(format!("resource did not decode: {e}")))
}

/// Backend message off a `{success, message}` body, when present.
pub(crate) fn decode_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{decode_page, decode_resource, Pagination};
    use serde_json::json;

    #[test]
    fn page_decodes_envelope() {
        let body = json!({
            "success": true,
            "data": [{ "id": "p-1", "documento": "123" }],
            "pagination": { "page": 2, "limit": 10, "total": 31, "pages": 4 }
        });
        let page = decode_page::<super::Patient>(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total, 31);
    }

    #[test]
    fn page_defaults_when_pagination_absent() {
        let body = json!({ "success": true, "data": [] });
        let page = decode_page::<super::Patient>(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total, 0);
    }

    #[test]
    fn page_defaults_missing_pagination_fields() {
        let body = json!({ "data": [], "pagination": { "total": 7 } });
        let page = decode_page::<super::Patient>(body).unwrap();
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total, 7);
    }

    #[test]
    fn resource_accepts_wrapped_and_bare_shapes() {
        let bare = json!({ "id": "p-1", "documento": "123" });
        let wrapped = json!({ "success": true, "data": { "id": "p-1", "documento": "123" } });
        let a = decode_resource::<super::Patient>(bare).unwrap();
        let b = decode_resource::<super::Patient>(wrapped).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn pagination_default_matches_contract() {
        let p = Pagination::default();
        assert_eq!((p.page, p.limit, p.total, p.pages), (1, 10, 0, 0));
    }
}
