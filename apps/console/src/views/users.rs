//! Users screen (staff administration).

use clinic_client::{ApiError, User, UserDraft};
use dialoguer::{Confirm, Password};

use super::pager::ListState;
use crate::cli::{ListArgs, UserArgs};
use crate::state::AppContext;

pub async fn list(ctx: &AppContext, args: &ListArgs) -> Result<(), ApiError> {
    let page = ctx.users.list(args.page, args.limit, &args.search).await?;

    let mut state = ListState::default();
    state.apply(&page.pagination);

    if page.items.is_empty() {
        println!("Sin usuarios para mostrar.");
    } else {
        for user in &page.items {
            println!(
                "{}  {:<12} {} {}  [{}{}]",
                user.id,
                user.documento,
                user.nombres.as_deref().unwrap_or("-"),
                user.apellidos.as_deref().unwrap_or("-"),
                user.rol_nombre.as_deref().unwrap_or("sin rol"),
                if user.activo == Some(false) {
                    ", inactivo"
                } else {
                    ""
                },
            );
        }
    }
    println!("{}", state.summary());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    let user = ctx.users.get(id).await?;
    print_detail(&user);
    Ok(())
}

pub async fn create(ctx: &AppContext, args: &UserArgs) -> Result<(), ApiError> {
    let mut draft = draft_from(args);
    // New accounts need an initial password; never taken as a flag.
    draft.contrasena = Some(
        Password::new()
            .with_prompt("Contraseña inicial")
            .interact()
            .map_err(|e| ApiError::decode(format!("no se pudo leer la contraseña: {e}")))?,
    );
    let user = ctx.users.create(&draft).await?;
    println!("✔ Usuario creado: {}", user.id);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: &str, args: &UserArgs) -> Result<(), ApiError> {
    ctx.users.update(id, &draft_from(args)).await?;
    println!("✔ Usuario actualizado");
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str, yes: bool) -> Result<(), ApiError> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("¿Desactivar usuario?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Operación cancelada.");
            return Ok(());
        }
    }
    ctx.users.delete(id).await?;
    println!("✔ Usuario desactivado");
    Ok(())
}

pub async fn activate(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    ctx.users.activate(id).await?;
    println!("✔ Usuario activado");
    Ok(())
}

pub async fn deactivate(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    ctx.users.deactivate(id).await?;
    println!("✔ Usuario desactivado");
    Ok(())
}

pub async fn set_password(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    let contrasena = Password::new()
        .with_prompt("Nueva contraseña")
        .with_confirmation("Confirmar contraseña", "Las contraseñas no coinciden")
        .interact()
        .map_err(|e| ApiError::decode(format!("no se pudo leer la contraseña: {e}")))?;
    ctx.users.change_password(id, &contrasena).await?;
    println!("✔ Contraseña actualizada");
    Ok(())
}

fn draft_from(args: &UserArgs) -> UserDraft {
    UserDraft {
        documento: args.documento.clone(),
        tipo_documento_id: args.tipo_documento_id,
        nombres: args.nombres.clone(),
        apellidos: args.apellidos.clone(),
        fecha_nacimiento: args.fecha_nacimiento.clone(),
        telefono: args.telefono.clone(),
        contrasena: None,
        rol_id: args.rol_id,
        genero_id: args.genero_id,
        activo: None,
    }
}

fn print_detail(user: &User) {
    println!("Usuario {}", user.id);
    println!(
        "  Documento : {} ({})",
        user.documento,
        user.tipo_documento.as_deref().unwrap_or("-")
    );
    println!(
        "  Nombre    : {} {}",
        user.nombres.as_deref().unwrap_or("-"),
        user.apellidos.as_deref().unwrap_or("-")
    );
    println!("  Rol       : {}", user.rol_nombre.as_deref().unwrap_or("-"));
    println!(
        "  Activo    : {}",
        match user.activo {
            Some(true) => "sí",
            Some(false) => "no",
            None => "-",
        }
    );
}
