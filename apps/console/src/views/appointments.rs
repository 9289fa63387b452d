//! Appointments screen, including the calendar view.

use clinic_client::{ApiError, Appointment, AppointmentDraft, AppointmentFilters};
use dialoguer::Confirm;

use super::pager::ListState;
use crate::cli::{AppointmentArgs, ListArgs};
use crate::state::AppContext;

pub async fn list(
    ctx: &AppContext,
    args: &ListArgs,
    filters: AppointmentFilters,
) -> Result<(), ApiError> {
    let page = ctx
        .appointments
        .list(args.page, args.limit, &filters)
        .await?;

    let mut state = ListState::default();
    state.apply(&page.pagination);

    if page.items.is_empty() {
        println!("Sin citas para mostrar.");
    } else {
        for appointment in &page.items {
            print_row(appointment);
        }
    }
    println!("{}", state.summary());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: i64) -> Result<(), ApiError> {
    let appointment = ctx.appointments.get(id).await?;
    print_detail(&appointment);
    Ok(())
}

pub async fn create(ctx: &AppContext, args: &AppointmentArgs) -> Result<(), ApiError> {
    let appointment = ctx.appointments.create(&draft_from(args)).await?;
    println!("✔ Cita creada: {}", appointment.id);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: i64, args: &AppointmentArgs) -> Result<(), ApiError> {
    ctx.appointments.update(id, &draft_from(args)).await?;
    println!("✔ Cita actualizada");
    Ok(())
}

pub async fn cancel(ctx: &AppContext, id: i64, yes: bool) -> Result<(), ApiError> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("¿Cancelar cita?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Operación cancelada.");
            return Ok(());
        }
    }
    let message = ctx.appointments.cancel(id).await?;
    println!("✔ {}", message.as_deref().unwrap_or("Cita cancelada"));
    Ok(())
}

pub async fn calendar(
    ctx: &AppContext,
    start: Option<&str>,
    end: Option<&str>,
    profesional_id: Option<&str>,
) -> Result<(), ApiError> {
    let appointments = ctx.appointments.calendar(start, end, profesional_id).await?;
    if appointments.is_empty() {
        println!("Sin citas en el calendario.");
        return Ok(());
    }
    for appointment in &appointments {
        print_row(appointment);
    }
    println!("{} citas", appointments.len());
    Ok(())
}

fn draft_from(args: &AppointmentArgs) -> AppointmentDraft {
    AppointmentDraft {
        paciente_id: args.paciente_id.clone(),
        profesional_id: args.profesional_id.clone(),
        fecha_inicio: args.fecha_inicio.clone(),
        fecha_fin: args.fecha_fin.clone(),
        tipo_servicio_id: args.tipo_servicio_id,
        observaciones: args.observaciones.clone(),
        estado_id: args.estado_id,
    }
}

fn print_row(appointment: &Appointment) {
    println!(
        "{}  {} → {}  {}  con {}  [{}]",
        appointment.id,
        appointment.fecha_inicio,
        appointment.fecha_fin,
        appointment.paciente_nombre.as_deref().unwrap_or("-"),
        appointment.profesional_nombre.as_deref().unwrap_or("-"),
        appointment.estado.as_deref().unwrap_or("-"),
    );
}

fn print_detail(appointment: &Appointment) {
    println!("Cita {}", appointment.id);
    println!(
        "  Paciente    : {} ({})",
        appointment.paciente_nombre.as_deref().unwrap_or("-"),
        appointment.paciente_documento.as_deref().unwrap_or("-")
    );
    println!(
        "  Profesional : {}",
        appointment.profesional_nombre.as_deref().unwrap_or("-")
    );
    println!("  Inicio      : {}", appointment.fecha_inicio);
    println!("  Fin         : {}", appointment.fecha_fin);
    println!(
        "  Servicio    : {}",
        appointment.tipo_servicio.as_deref().unwrap_or("-")
    );
    println!(
        "  Estado      : {}",
        appointment.estado.as_deref().unwrap_or("-")
    );
    if let Some(obs) = &appointment.observaciones {
        println!("  Observación : {obs}");
    }
}
