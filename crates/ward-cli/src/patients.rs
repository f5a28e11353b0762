//! # Patient Subcommands
//!
//! - `list` (also `ward patients`): print the roster, newest first.
//! - `add`: register a patient (doctor role).
//! - `show`: open a patient and print their orders.

use anyhow::Result;
use clap::{Args, Subcommand};

use ward_core::{DoctorId, PatientId};
use ward_state::{WardBackend, WardController};

use crate::{refuse_unless, render};

/// Arguments for the `ward patient` subcommand.
#[derive(Args, Debug)]
pub struct PatientArgs {
    #[command(subcommand)]
    pub command: PatientCommand,
}

#[derive(Subcommand, Debug)]
pub enum PatientCommand {
    /// Print the patient roster.
    List,

    /// Register a new patient.
    Add {
        /// Full name.
        #[arg(long)]
        name: String,
        /// Room label, free text.
        #[arg(long)]
        room: String,
        /// Attending doctor. Omit to leave the patient unassigned.
        #[arg(long)]
        doctor: Option<DoctorId>,
    },

    /// Show one patient and their orders.
    Show {
        /// Patient identifier.
        id: PatientId,
    },
}

pub async fn run_patient<B: WardBackend>(
    args: &PatientArgs,
    controller: &mut WardController<B>,
) -> Result<u8> {
    match &args.command {
        PatientCommand::List => cmd_list(controller).await,
        PatientCommand::Add { name, room, doctor } => {
            cmd_add(controller, name, room, *doctor).await
        }
        PatientCommand::Show { id } => cmd_show(controller, *id).await,
    }
}

pub async fn cmd_list<B: WardBackend>(controller: &mut WardController<B>) -> Result<u8> {
    controller.load_patients().await?;
    print!("{}", render::roster(controller.patients()));
    Ok(0)
}

async fn cmd_add<B: WardBackend>(
    controller: &mut WardController<B>,
    name: &str,
    room: &str,
    doctor: Option<DoctorId>,
) -> Result<u8> {
    let role = controller.role();
    if let Some(code) = refuse_unless(role.can_register_patients(), role, "patient add") {
        return Ok(code);
    }

    controller.open_new_patient_form();
    let form = controller.new_patient_form_mut();
    form.full_name = name.to_string();
    form.room = room.to_string();
    form.doctor_id = doctor;

    let patient = controller.submit_new_patient().await?;
    println!("OK: registered patient {} ({})", patient.full_name, patient.id);
    print!("{}", render::roster(controller.patients()));
    Ok(0)
}

async fn cmd_show<B: WardBackend>(
    controller: &mut WardController<B>,
    id: PatientId,
) -> Result<u8> {
    controller.load_patients().await?;
    controller.select_patient(id).await?;
    if let Some(patient) = controller.selected_patient() {
        print!("{}", render::patient_header(patient));
    }
    println!();
    print!("{}", render::order_list(controller.orders()));
    Ok(0)
}
