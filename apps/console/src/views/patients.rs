//! Patients screen.

use clinic_client::{ApiError, Patient, PatientDraft};
use dialoguer::Confirm;

use super::pager::ListState;
use crate::cli::{ListArgs, PatientArgs};
use crate::state::AppContext;

pub async fn list(ctx: &AppContext, args: &ListArgs) -> Result<(), ApiError> {
    let page = ctx
        .patients
        .list(args.page, args.limit, &args.search)
        .await?;

    let mut state = ListState::default();
    state.apply(&page.pagination);

    if page.items.is_empty() {
        println!("Sin pacientes para mostrar.");
    } else {
        for patient in &page.items {
            println!(
                "{}  {:<12} {} {}",
                patient.id,
                patient.documento,
                patient.nombres.as_deref().unwrap_or("-"),
                patient.apellidos.as_deref().unwrap_or("-"),
            );
        }
    }
    println!("{}", state.summary());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    let patient = ctx.patients.get(id).await?;
    print_detail(&patient);
    Ok(())
}

pub async fn create(ctx: &AppContext, args: &PatientArgs) -> Result<(), ApiError> {
    let patient = ctx.patients.create(&draft_from(args)).await?;
    println!("✔ Paciente creado: {}", patient.id);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: &str, args: &PatientArgs) -> Result<(), ApiError> {
    ctx.patients.update(id, &draft_from(args)).await?;
    println!("✔ Paciente actualizado");
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str, yes: bool) -> Result<(), ApiError> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("¿Eliminar paciente?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Operación cancelada.");
            return Ok(());
        }
    }
    ctx.patients.delete(id).await?;
    println!("✔ Paciente eliminado");
    Ok(())
}

fn draft_from(args: &PatientArgs) -> PatientDraft {
    PatientDraft {
        documento: args.documento.clone(),
        tipo_documento_id: args.tipo_documento_id,
        nombres: args.nombres.clone(),
        apellidos: args.apellidos.clone(),
        fecha_nacimiento: args.fecha_nacimiento.clone(),
        telefono: args.telefono.clone(),
        correo: args.correo.clone(),
        direccion: args.direccion.clone(),
        genero_id: args.genero_id,
        estado_civil_id: args.estado_civil_id,
    }
}

fn print_detail(patient: &Patient) {
    println!("Paciente {}", patient.id);
    println!(
        "  Documento : {} ({})",
        patient.documento,
        patient.tipo_documento.as_deref().unwrap_or("-")
    );
    println!(
        "  Nombre    : {} {}",
        patient.nombres.as_deref().unwrap_or("-"),
        patient.apellidos.as_deref().unwrap_or("-")
    );
    println!(
        "  Nacimiento: {}",
        patient.fecha_nacimiento.as_deref().unwrap_or("-")
    );
    println!("  Teléfono  : {}", patient.telefono.as_deref().unwrap_or("-"));
    println!("  Correo    : {}", patient.correo.as_deref().unwrap_or("-"));
    println!(
        "  Dirección : {}",
        patient.direccion.as_deref().unwrap_or("-")
    );
}
