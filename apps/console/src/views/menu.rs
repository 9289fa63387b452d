//! Navigation map plus the current session status.

use crate::state::AppContext;

pub fn run(ctx: &AppContext) {
    match ctx.session.current_user_id() {
        Some(user_id) => println!("Sesión activa · usuario {user_id}"),
        None => println!("Sin sesión activa"),
    }
    println!();
    println!("  login         Iniciar sesión");
    println!("  logout        Cerrar sesión");
    println!("  whoami        Usuario de la sesión actual");
    println!("  dashboard     Resumen con los contadores principales");
    println!("  patients      Gestión de pacientes");
    println!("  users         Gestión de usuarios (solo administradores)");
    println!("  appointments  Gestión de citas");
    println!();
    println!("Usa `clinic-console <comando> --help` para ver las opciones.");
}
