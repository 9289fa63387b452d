//! Error presentation at the view boundary.
//!
//! Errors are recovered here for display only: the transport layer has
//! already performed any session side effect (the `401` teardown), so the
//! views just map the taxonomy onto user-facing messages and a retry
//! affordance.

use clinic_client::ApiError;

#[derive(Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub retry: bool,
}

/// Message mapping shared by every list/detail screen.
pub fn describe(error: &ApiError) -> Feedback {
    match error {
        ApiError::Unauthorized { .. } => Feedback {
            message: "Tu sesión ha expirado. Serás redirigido al login.".to_string(),
            retry: false,
        },
        ApiError::Forbidden { .. } => Feedback {
            message: "No tienes permisos para acceder a esta información.".to_string(),
            retry: false,
        },
        ApiError::Conflict { message } => Feedback {
            // Backend message verbatim (scheduling overlaps and the like).
            message: message.clone(),
            retry: false,
        },
        ApiError::RateLimited { .. } => Feedback {
            message: "Demasiados intentos. Espera unos minutos e intenta de nuevo.".to_string(),
            retry: false,
        },
        ApiError::Connectivity { .. } | ApiError::Server { .. } => Feedback {
            message: "Error de conexión. Verifica que el servidor esté funcionando.".to_string(),
            retry: true,
        },
        other => Feedback {
            message: other
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| "Error desconocido al cargar los datos.".to_string()),
            retry: true,
        },
    }
}

pub fn print_error(error: &ApiError) {
    let feedback = describe(error);
    eprintln!("✖ {}", feedback.message);
    if feedback.retry {
        eprintln!("  Puedes reintentar el comando.");
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, Feedback};
    use clinic_client::ApiError;
    use serde_json::json;

    #[test]
    fn unauthorized_maps_to_session_expired_notice() {
        let feedback = describe(&ApiError::from_status(401, &json!({})));
        assert_eq!(
            feedback,
            Feedback {
                message: "Tu sesión ha expirado. Serás redirigido al login.".to_string(),
                retry: false,
            }
        );
    }

    #[test]
    fn connection_class_offers_retry() {
        assert!(describe(&ApiError::connectivity("refused")).retry);
        assert!(describe(&ApiError::from_status(500, &json!({}))).retry);
    }

    #[test]
    fn conflict_message_is_verbatim() {
        let feedback = describe(&ApiError::from_status(
            409,
            &json!({ "message": "El profesional ya tiene una cita en ese horario" }),
        ));
        assert_eq!(
            feedback.message,
            "El profesional ya tiene una cita en ese horario"
        );
        assert!(!feedback.retry);
    }

    #[test]
    fn unknown_errors_prefer_backend_message() {
        let feedback = describe(&ApiError::from_status(422, &json!({ "message": "inválido" })));
        assert_eq!(feedback.message, "inválido");
        assert!(feedback.retry);

        let feedback = describe(&ApiError::from_status(422, &json!({})));
        assert_eq!(feedback.message, "Error desconocido al cargar los datos.");
    }
}
