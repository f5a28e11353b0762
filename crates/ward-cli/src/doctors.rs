//! # Doctor Subcommands
//!
//! Doctors are reference data. `add` exists to seed a fresh ward and
//! talks to the client directly since the controller never creates
//! doctors.

use anyhow::Result;
use clap::{Args, Subcommand};

use ward_client::WardClient;
use ward_core::NewDoctor;
use ward_state::WardController;

use crate::render;

/// Arguments for the `ward doctor` subcommand.
#[derive(Args, Debug)]
pub struct DoctorArgs {
    #[command(subcommand)]
    pub command: DoctorCommand,
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommand {
    /// List doctors by name.
    List,

    /// Add a doctor.
    Add {
        /// Full name.
        #[arg(long)]
        name: String,
    },
}

pub async fn run_doctor(
    args: &DoctorArgs,
    controller: &mut WardController<WardClient>,
) -> Result<u8> {
    match &args.command {
        DoctorCommand::List => cmd_list(controller).await,
        DoctorCommand::Add { name } => {
            let doctor = controller
                .backend()
                .doctors()
                .create(&NewDoctor {
                    full_name: name.clone(),
                })
                .await?;
            tracing::info!(doctor_id = %doctor.id, "doctor added");
            println!("OK: added Dr. {} ({})", doctor.full_name, doctor.id);
            Ok(0)
        }
    }
}

pub async fn cmd_list(controller: &mut WardController<WardClient>) -> Result<u8> {
    controller.load_doctors().await?;
    print!("{}", render::doctors(controller.doctors()));
    Ok(0)
}
