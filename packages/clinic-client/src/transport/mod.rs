//! HTTP transport seam.
//!
//! `HttpTransport` is the object-safe boundary between the client stack and
//! the wire. The production implementation is [`ReqwestTransport`]; the
//! [`authorizer::RequestAuthorizer`] wraps any transport and composes with
//! it, and tests substitute recording fakes.

pub mod authorizer;
pub mod navigator;
pub mod reqwest_transport;

pub use authorizer::{RequestAuthorizer, ResponseHook};
pub use navigator::Navigator;
pub use reqwest_transport::ReqwestTransport;

use async_trait::async_trait;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// An outgoing API call. `path` carries the full request path including the
/// `/api` prefix; the transport resolves it against the configured origin.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Set by the request authorizer; `None` means the call goes out
    /// unauthenticated.
    pub authorization: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorization: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(Method::Post, path);
        request.body = Some(body);
        request
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(Method::Put, path);
        request.body = Some(body);
        request
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub(crate) fn with_authorization(mut self, header: String) -> Self {
        self.authorization = Some(header);
        self
    }
}

/// A resolved API call. Non-success statuses never reach this type; they
/// are mapped to [`ApiError`] at the transport boundary.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue the call. `Ok` for 2xx responses; every other outcome is a
    /// typed [`ApiError`] (`Connectivity` when no HTTP status was produced).
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}
