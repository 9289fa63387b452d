//! Dashboard screen: the four summary counters.
//!
//! The counts are independent calls issued concurrently; completion of the
//! screen is a single transition once all four have resolved, in whatever
//! order, and an individual failure only blanks its own counter.

use clinic_client::{ApiError, AppointmentFilters};
use time::OffsetDateTime;
use tracing::warn;

use crate::state::AppContext;

pub async fn run(ctx: &AppContext) {
    println!("Cargando resumen...");

    let (patients, users, today, pending) = tokio::join!(
        count_patients(ctx),
        count_users(ctx),
        count_appointments_today(ctx),
        count_appointments_pending(ctx),
    );

    // Single "loading finished" transition, regardless of arrival order.
    println!();
    println!("  Pacientes registrados : {}", render(patients));
    println!("  Usuarios activos      : {}", render(users));
    println!("  Citas de hoy          : {}", render(today));
    println!("  Citas pendientes      : {}", render(pending));
}

fn render(count: Result<u64, ApiError>) -> String {
    match count {
        Ok(n) => n.to_string(),
        Err(_) => "—".to_string(),
    }
}

// Each counter reads the list envelope's total with the smallest page the
// backend accepts.

async fn count_patients(ctx: &AppContext) -> Result<u64, ApiError> {
    ctx.patients
        .list(1, 1, "")
        .await
        .map(|page| page.pagination.total)
        .map_err(log_count_error("pacientes"))
}

async fn count_users(ctx: &AppContext) -> Result<u64, ApiError> {
    ctx.users
        .list(1, 1, "")
        .await
        .map(|page| page.pagination.total)
        .map_err(log_count_error("usuarios"))
}

async fn count_appointments_today(ctx: &AppContext) -> Result<u64, ApiError> {
    let today = OffsetDateTime::now_utc().date().to_string();
    let filters = AppointmentFilters {
        fecha_inicio: Some(today.clone()),
        fecha_fin: Some(today),
        ..Default::default()
    };
    ctx.appointments
        .list(1, 1, &filters)
        .await
        .map(|page| page.pagination.total)
        .map_err(log_count_error("citas de hoy"))
}

async fn count_appointments_pending(ctx: &AppContext) -> Result<u64, ApiError> {
    let filters = AppointmentFilters {
        estado_id: Some(1),
        ..Default::default()
    };
    ctx.appointments
        .list(1, 1, &filters)
        .await
        .map(|page| page.pagination.total)
        .map_err(log_count_error("citas pendientes"))
}

fn log_count_error(counter: &'static str) -> impl Fn(ApiError) -> ApiError {
    move |err| {
        warn!(counter, error = %err, "counter failed to load");
        err
    }
}
