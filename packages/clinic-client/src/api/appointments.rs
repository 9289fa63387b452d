//! Appointments resource client.
//!
//! Scheduling-conflict detection lives entirely in the backend: a `409` on
//! create/update arrives here as [`ApiError::Conflict`] carrying the
//! backend message verbatim, and the client adds no overlap logic of its
//! own.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{decode_message, decode_page, decode_resource, Page};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport};

#[derive(Debug, Clone, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub paciente_id: String,
    #[serde(default)]
    pub profesional_id: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(default)]
    pub tipo_servicio_id: Option<i32>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub estado_id: Option<i32>,
    #[serde(default)]
    pub creado_en: Option<String>,
    #[serde(default)]
    pub actualizado_en: Option<String>,
    #[serde(default)]
    pub actualizado_por: Option<String>,
    #[serde(default)]
    pub paciente_nombre: Option<String>,
    #[serde(default)]
    pub paciente_documento: Option<String>,
    #[serde(default)]
    pub paciente_telefono: Option<String>,
    #[serde(default)]
    pub profesional_nombre: Option<String>,
    #[serde(default)]
    pub tipo_servicio: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paciente_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profesional_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_servicio_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_id: Option<i32>,
}

/// Optional list filters; only set values reach the query string.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilters {
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub estado_id: Option<i32>,
    pub profesional_id: Option<String>,
    pub tipo_servicio_id: Option<i32>,
    pub search: Option<String>,
}

pub struct AppointmentsClient {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ApiConfig>,
}

impl AppointmentsClient {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ApiConfig>) -> Self {
        Self { transport, config }
    }

    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        filters: &AppointmentFilters,
    ) -> Result<Page<Appointment>, ApiError> {
        let mut request = ApiRequest::get(self.config.path("/appointments"))
            .with_query("page", page.to_string())
            .with_query("limit", limit.to_string());
        if let Some(v) = &filters.fecha_inicio {
            request = request.with_query("fecha_inicio", v);
        }
        if let Some(v) = &filters.fecha_fin {
            request = request.with_query("fecha_fin", v);
        }
        if let Some(v) = filters.estado_id {
            request = request.with_query("estado_id", v.to_string());
        }
        if let Some(v) = &filters.profesional_id {
            request = request.with_query("profesional_id", v);
        }
        if let Some(v) = filters.tipo_servicio_id {
            request = request.with_query("tipo_servicio_id", v.to_string());
        }
        if let Some(v) = &filters.search {
            request = request.with_query("search", v);
        }
        debug!(page, limit, "loading appointments");
        let response = self.transport.send(request).await?;
        decode_page(response.body)
    }

    pub async fn get(&self, id: i64) -> Result<Appointment, ApiError> {
        let request = ApiRequest::get(self.config.path(&format!("/appointments/{id}")));
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn create(&self, draft: &AppointmentDraft) -> Result<Appointment, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("appointment draft did not serialize: {e}")))?;
        let request = ApiRequest::post(self.config.path("/appointments"), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    pub async fn update(&self, id: i64, draft: &AppointmentDraft) -> Result<Appointment, ApiError> {
        let body = serde_json::to_value(draft)
            .map_err(|e| ApiError::decode(format!("appointment draft did not serialize: {e}")))?;
        let request = ApiRequest::put(self.config.path(&format!("/appointments/{id}")), body);
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }

    /// DELETE is a cancellation on the backend (state change, not removal).
    /// Returns the backend confirmation message when one is sent.
    pub async fn cancel(&self, id: i64) -> Result<Option<String>, ApiError> {
        let request = ApiRequest::delete(self.config.path(&format!("/appointments/{id}")));
        let response = self.transport.send(request).await?;
        Ok(decode_message(&response.body))
    }

    /// Calendar view: `GET /appointments/calendar/view` with an optional
    /// date window and professional filter.
    pub async fn calendar(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        profesional_id: Option<&str>,
    ) -> Result<Vec<Appointment>, ApiError> {
        let mut request = ApiRequest::get(self.config.path("/appointments/calendar/view"));
        if let Some(v) = start {
            request = request.with_query("start", v);
        }
        if let Some(v) = end {
            request = request.with_query("end", v);
        }
        if let Some(v) = profesional_id {
            request = request.with_query("profesional_id", v);
        }
        let response = self.transport.send(request).await?;
        decode_resource(response.body)
    }
}
