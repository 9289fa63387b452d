//! Production transport over reqwest.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::debug;
use url::Url;

use super::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::error::ApiError;

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn resolve(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(&request.path)
            .map_err(|e| ApiError::decode(format!("invalid request path: {e}")))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        Ok(url)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.resolve(&request)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Put => self.client.put(url.clone()),
            Method::Delete => self.client.delete(url.clone()),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(header) = &request.authorization {
            builder = builder.header(AUTHORIZATION, header);
        }

        debug!(method = request.method.as_str(), %url, "dispatching api request");

        // No HTTP status at all: the browser-era "status 0" bucket.
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);

        if (200..300).contains(&status) {
            Ok(ApiResponse { status, body })
        } else {
            Err(ApiError::from_status(status, &body))
        }
    }
}
