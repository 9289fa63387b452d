//! Patients resource client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{decode_page, decode_resource, Page};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport};

/// Patient as returned by the backend. Wire field names are the contract;
/// the trailing fields are joined/descriptive values the list endpoint adds.
#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
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
    pub correo: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub genero_id: Option<i32>,
    #[serde(default)]
    pub estado_civil_id: Option<i32>,
    #[serde(default)]
    pub creado_en: Option<String>,
    #[serde(default)]
    pub actualizado_en: Option<String>,
    #[serde(default)]
    pub actualizado_por: Option<String>,
    #[serde(default)]
    pub genero_nombre: Option<String>,
    #[serde(default)]
    pub estado_civil: Option<String>,
    #[serde(default)]
    pub tipo_documento: Option<String>,
}

/// Create/update payload. The backend generates `id` and the audit fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientDraft {
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
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_civil_id: Option<i32>,
}

pub struct PatientsClient {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ApiConfig>,
}

impl PatientsClient {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ApiConfig>) -> Self {
        Self { transport, config }
    }

    /// Paginated, searchable list. An empty or whitespace-only search is
    /// omitted from the query entirely.
    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<Page<Patient>, ApiError> {
        let mut request = ApiRequest::get(self.config.path("/patients"))
            .with_query("page", page.to_string())
            .with_query("limit", limit.to_string());
        let search = search.trim();
        if !search.is_empty() {
            request = request.with_query("search", search);
        }
        debug!(page, limit, search, "loading patients");
        let response = self.transport.send(request).await?;
        decode_page(response.body)
    }

    pub async fn get(&self, id: &str) -> Result<Patient, ApiError> {
        let request = ApiRequest::get(self.config.path(&format!("/patients/{id}")));
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn create(&self, draft: &PatientDraft) -> Result<Patient, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("patient draft did not serialize: {e}")))?;
        let request = ApiRequest::post(self.config.path("/patients"), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn update(&self, id: &str, draft: &PatientDraft) -> Result<Patient, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("patient draft did not serialize: {e}")))?;
        let request = ApiRequest::put(self.config.path(&format!("/patients/{id}")), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::delete(self.config.path(&format!("/patients/{id}")));
        self.transport.send(request).await?;
        Ok(())
    }
}
