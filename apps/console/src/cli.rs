//! Command-line surface of the admin console.
//!
//! One subcommand per routed view of the original front end, plus the CRUD
//! verbs each view exposed.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clinic-console", about = "Consola administrativa de la clínica")]
pub struct Cli {
    /// Backend origin; overrides CLINIC_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Iniciar sesión
    Login {
        #[arg(long)]
        documento: Option<String>,
    },
    /// Cerrar sesión
    Logout,
    /// Mostrar el usuario de la sesión actual
    Whoami,
    /// Mapa de navegación y estado de sesión
    Menu,
    /// Resumen con los contadores principales
    Dashboard,
    /// Gestión de pacientes
    Patients {
        #[command(subcommand)]
        action: PatientsAction,
    },
    /// Gestión de usuarios (solo administradores)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Gestión de citas
    Appointments {
        #[command(subcommand)]
        action: AppointmentsAction,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Subcommand)]
pub enum PatientsAction {
    List(ListArgs),
    Show {
        id: String,
    },
    Create(PatientArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: PatientArgs,
    },
    Delete {
        id: String,
        /// No pedir confirmación
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct PatientArgs {
    #[arg(long)]
    pub documento: Option<String>,
    #[arg(long)]
    pub tipo_documento_id: Option<i32>,
    #[arg(long)]
    pub nombres: Option<String>,
    #[arg(long)]
    pub apellidos: Option<String>,
    #[arg(long)]
    pub fecha_nacimiento: Option<String>,
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub correo: Option<String>,
    #[arg(long)]
    pub direccion: Option<String>,
    #[arg(long)]
    pub genero_id: Option<i32>,
    #[arg(long)]
    pub estado_civil_id: Option<i32>,
}

#[derive(Subcommand)]
pub enum UsersAction {
    List(ListArgs),
    Show {
        id: String,
    },
    Create(UserArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: UserArgs,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    Activate {
        id: String,
    },
    Deactivate {
        id: String,
    },
    /// Cambiar la contraseña (se solicita por consola)
    SetPassword {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct UserArgs {
    #[arg(long)]
    pub documento: Option<String>,
    #[arg(long)]
    pub tipo_documento_id: Option<i32>,
    #[arg(long)]
    pub nombres: Option<String>,
    #[arg(long)]
    pub apellidos: Option<String>,
    #[arg(long)]
    pub fecha_nacimiento: Option<String>,
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub rol_id: Option<i32>,
    #[arg(long)]
    pub genero_id: Option<i32>,
}

#[derive(Subcommand)]
pub enum AppointmentsAction {
    List {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long)]
        fecha_inicio: Option<String>,
        #[arg(long)]
        fecha_fin: Option<String>,
        #[arg(long)]
        estado_id: Option<i32>,
        #[arg(long)]
        profesional_id: Option<String>,
        #[arg(long)]
        tipo_servicio_id: Option<i32>,
    },
    Show {
        id: i64,
    },
    Create(AppointmentArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: AppointmentArgs,
    },
    Cancel {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    Calendar {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        profesional_id: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AppointmentArgs {
    #[arg(long)]
    pub paciente_id: Option<String>,
    #[arg(long)]
    pub profesional_id: Option<String>,
    #[arg(long)]
    pub fecha_inicio: Option<String>,
    #[arg(long)]
    pub fecha_fin: Option<String>,
    #[arg(long)]
    pub tipo_servicio_id: Option<i32>,
    #[arg(long)]
    pub observaciones: Option<String>,
    #[arg(long)]
    pub estado_id: Option<i32>,
}
