//! Login screen.

use clinic_client::{ApiError, Credentials, LoginOutcome};
use dialoguer::{Input, Password};

use super::feedback;
use crate::state::AppContext;

/// Prompt for whatever credentials were not passed on the command line and
/// attempt a login. Returns `true` when a session was established.
pub async fn run(ctx: &AppContext, documento: Option<String>) -> bool {
    let documento = match documento {
        Some(d) => d,
        None => match Input::<String>::new().with_prompt("Documento").interact_text() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("✖ No se pudo leer el documento: {e}");
                return false;
            }
        },
    };
    let contrasena = match Password::new().with_prompt("Contraseña").interact() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✖ No se pudo leer la contraseña: {e}");
            return false;
        }
    };

    attempt(
        ctx,
        Credentials {
            documento,
            contrasena,
        },
    )
    .await
}

/// One login attempt; navigation to the dashboard goes through the injected
/// navigator, same as every other routing side effect.
pub(crate) async fn attempt(ctx: &AppContext, credentials: Credentials) -> bool {
    match ctx.session.login(&credentials).await {
        Ok(LoginOutcome::Authenticated { .. }) => {
            println!("✔ Sesión iniciada");
            ctx.navigator.to_dashboard();
            true
        }
        Ok(LoginOutcome::Incomplete { raw }) => {
            let message = raw
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Credenciales inválidas");
            eprintln!("✖ {message}");
            false
        }
        Err(ApiError::RateLimited { .. }) => {
            eprintln!("✖ Demasiados intentos. Espera unos minutos e intenta de nuevo.");
            false
        }
        Err(err) => {
            feedback::print_error(&err);
            false
        }
    }
}
