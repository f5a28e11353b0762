//! # ward CLI entry point
//!
//! Parses command-line arguments, connects to the backend and dispatches
//! to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ward_cli::doctors::{run_doctor, DoctorArgs, DoctorCommand};
use ward_cli::orders::{run_order, OrderArgs};
use ward_cli::patients::{run_patient, PatientArgs, PatientCommand};
use ward_cli::{connect, resolve_config};
use ward_core::Role;

/// Ward orders: patient roster, doctor orders and nurse task tracking.
#[derive(Parser, Debug)]
#[command(name = "ward", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Who is using the ward: `doctor` or `nurse`.
    #[arg(long, global = true, default_value = "doctor", env = "WARD_ROLE")]
    role: Role,

    /// Backend base URL. Overrides SUPABASE_URL.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Anonymous API key. Overrides SUPABASE_ANON_KEY.
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the patient roster.
    Patients,

    /// Register or open a patient.
    Patient(PatientArgs),

    /// Issue orders and tick off tasks.
    Order(OrderArgs),

    /// List doctors by name.
    Doctors,

    /// Doctor reference data.
    Doctor(DoctorArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(role = %cli.role, "ward CLI starting");

    let result = run(cli).await;

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = resolve_config(cli.url.as_deref(), cli.key.as_deref())?;
    let mut controller = connect(config, cli.role)?;

    match cli.command {
        Commands::Patients => {
            let args = PatientArgs {
                command: PatientCommand::List,
            };
            run_patient(&args, &mut controller).await
        }
        Commands::Patient(args) => run_patient(&args, &mut controller).await,
        Commands::Order(args) => run_order(&args, &mut controller).await,
        Commands::Doctors => {
            let args = DoctorArgs {
                command: DoctorCommand::List,
            };
            run_doctor(&args, &mut controller).await
        }
        Commands::Doctor(args) => run_doctor(&args, &mut controller).await,
    }
}
