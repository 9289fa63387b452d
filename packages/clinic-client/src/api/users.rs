//! Staff/users resource client.
//!
//! List and mutation endpoints are admin-only on the backend (`rol_id` 1);
//! the client forwards whatever `403` the backend answers with.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::{decode_page, decode_resource, Page};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub documento: String,
    #[serde(default)]
    pub tipo_documento_id: Option<i32>,
    #[serde(default)]
    pub nombres: Option<String>,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub rol_id: Option<i32>,
    #[serde(default)]
    pub genero_id: Option<i32>,
    #[serde(default)]
    pub activo: Option<bool>,
    #[serde(default)]
    pub creado_en: Option<String>,
    #[serde(default)]
    pub actualizado_en: Option<String>,
    #[serde(default)]
    pub actualizado_por: Option<String>,
    #[serde(default)]
    pub rol_nombre: Option<String>,
    #[serde(default)]
    pub genero_nombre: Option<String>,
    #[serde(default)]
    pub tipo_documento: Option<String>,
}

/// Create/update payload. `contrasena` is write-only: it never comes back
/// in a `User`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_documento_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

pub struct UsersClient {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ApiConfig>,
}

impl UsersClient {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ApiConfig>) -> Self {
        Self { transport, config }
    }

    pub async fn list(&self, page: u32, limit: u32, search: &str) -> Result<Page<User>, ApiError> {
        let mut request = ApiRequest::get(self.config.path("/users"))
            .with_query("page", page.to_string())
            .with_query("limit", limit.to_string());
        let search = search.trim();
        if !search.is_empty() {
            request = request.with_query("search", search);
        }
        debug!(page, limit, search, "loading users");
        let response = self.transport.send(request).await?;
        decode_page(response.body)
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let request = ApiRequest::get(self.config.path(&format!("/users/{id}")));
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("user draft did not serialize: {e}")))?;
        let request = ApiRequest::post(self.config.path("/users"), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn update(&self, id: &str, draft: &UserDraft) -> Result<User, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("user draft did not serialize: {e}")))?;
        let request = ApiRequest::put(self.config.path(&format!("/users/{id}")), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    /// Soft delete on the backend.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::delete(self.config.path(&format!("/users/{id}")));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Reactivate via `PUT {activo: true}`.
    pub async fn activate(&self, id: &str) -> Result<(), ApiError> {
        self.set_active(id, true).await
    }

    /// Deactivate via `PUT {activo: false}`.
    pub async fn deactivate(&self, id: &str) -> Result<(), ApiError> {
        self.set_active(id, false).await
    }

    async fn set_active(&self, id: &str, activo: bool) -> Result<(), ApiError> {
        let request = ApiRequest::put(
            self.config.path(&format!("/users/{id}")),
            json!({ "activo": activo }),
        );
        self.transport.send(request).await?;
        Ok(())
    }

    /// Password change via `PUT {contrasena}`.
    pub async fn change_password(&self, id: &str, contrasena: &str) -> Result<(), ApiError> {
        let request = ApiRequest::put(
            self.config.path(&format!("/users/{id}")),
            json!({ "contrasena": contrasena }),
        );
        self.transport.send(request).await?;
        Ok(())
    }
}
