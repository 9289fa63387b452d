mod cli;
mod navigator;
mod state;
mod telemetry;
mod views;

use std::process::ExitCode;

use clap::Parser;
use clinic_client::{ApiConfig, ApiError, GuardDecision};
use url::Url;

use crate::cli::{AppointmentsAction, Cli, Command, PatientsAction, UsersAction};
use crate::state::AppContext;
use crate::views::{appointments, dashboard, feedback, login, menu, patients, users};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let cli = Cli::parse();
    let config = match resolve_config(cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✖ URL del backend inválida: {e}");
            return ExitCode::FAILURE;
        }
    };
    let ctx = state::build_context(config);

    match run(&ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            feedback::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(api_url: Option<&str>) -> Result<ApiConfig, url::ParseError> {
    match api_url {
        Some(raw) => Ok(ApiConfig::new(Url::parse(raw)?)),
        None => ApiConfig::from_env(),
    }
}

async fn run(ctx: &AppContext, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Login { documento } => {
            login::run(ctx, documento).await;
            Ok(())
        }
        Command::Logout => {
            ctx.session.logout();
            println!("✔ Sesión cerrada");
            Ok(())
        }
        Command::Whoami => {
            match ctx.session.current_user_id() {
                Some(user_id) => println!("{user_id}"),
                None => println!("Sin sesión activa"),
            }
            Ok(())
        }
        Command::Menu => {
            menu::run(ctx);
            Ok(())
        }
        Command::Dashboard => {
            if !ensure_session(ctx, "/dashboard").await {
                return Ok(());
            }
            dashboard::run(ctx).await;
            Ok(())
        }
        Command::Patients { action } => {
            if !ensure_session(ctx, "/patients").await {
                return Ok(());
            }
            match action {
                PatientsAction::List(args) => patients::list(ctx, &args).await,
                PatientsAction::Show { id } => patients::show(ctx, &id).await,
                PatientsAction::Create(args) => patients::create(ctx, &args).await,
                PatientsAction::Update { id, fields } => patients::update(ctx, &id, &fields).await,
                PatientsAction::Delete { id, yes } => patients::delete(ctx, &id, yes).await,
            }
        }
        Command::Users { action } => {
            if !ensure_session(ctx, "/users").await {
                return Ok(());
            }
            match action {
                UsersAction::List(args) => users::list(ctx, &args).await,
                UsersAction::Show { id } => users::show(ctx, &id).await,
                UsersAction::Create(args) => users::create(ctx, &args).await,
                UsersAction::Update { id, fields } => users::update(ctx, &id, &fields).await,
                UsersAction::Delete { id, yes } => users::delete(ctx, &id, yes).await,
                UsersAction::Activate { id } => users::activate(ctx, &id).await,
                UsersAction::Deactivate { id } => users::deactivate(ctx, &id).await,
                UsersAction::SetPassword { id } => users::set_password(ctx, &id).await,
            }
        }
        Command::Appointments { action } => {
            if !ensure_session(ctx, "/appointments").await {
                return Ok(());
            }
            match action {
                AppointmentsAction::List {
                    list,
                    fecha_inicio,
                    fecha_fin,
                    estado_id,
                    profesional_id,
                    tipo_servicio_id,
                } => {
                    let filters = clinic_client::AppointmentFilters {
                        fecha_inicio,
                        fecha_fin,
                        estado_id,
                        profesional_id,
                        tipo_servicio_id,
                        search: (!list.search.is_empty()).then(|| list.search.clone()),
                    };
                    appointments::list(ctx, &list, filters).await
                }
                AppointmentsAction::Show { id } => appointments::show(ctx, id).await,
                AppointmentsAction::Create(args) => appointments::create(ctx, &args).await,
                AppointmentsAction::Update { id, fields } => {
                    appointments::update(ctx, id, &fields).await
                }
                AppointmentsAction::Cancel { id, yes } => appointments::cancel(ctx, id, yes).await,
                AppointmentsAction::Calendar {
                    start,
                    end,
                    profesional_id,
                } => {
                    appointments::calendar(
                        ctx,
                        start.as_deref(),
                        end.as_deref(),
                        profesional_id.as_deref(),
                    )
                    .await
                }
            }
        }
    }
}

/// Protected screens consult the guard first; an anonymous user gets the
/// redirect plus an inline login attempt, and only continues if it succeeds.
async fn ensure_session(ctx: &AppContext, target: &str) -> bool {
    match ctx.guard.can_activate(target) {
        GuardDecision::Allow => true,
        GuardDecision::RedirectToLogin => {
            println!("→ /login");
            login::run(ctx, None).await
        }
    }
}
