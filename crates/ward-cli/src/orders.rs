//! # Order Subcommands
//!
//! - `add`: issue an order for a patient (doctor role). The issuing
//!   doctor is the patient's attending doctor, or the first doctor by
//!   name when the patient has none.
//! - `toggle`: flip one task on an order between done and not done
//!   (nurse role).

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use ward_core::{Order, OrderId, PatientId, TaskCategory};
use ward_state::{WardBackend, WardController};

use crate::{refuse_unless, render};

/// Arguments for the `ward order` subcommand.
#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Issue a new order.
    Add {
        /// Patient the order is for.
        #[arg(long)]
        patient: PatientId,
        /// Medications.
        #[arg(long, default_value = "")]
        ilaclar: String,
        /// IV fluids.
        #[arg(long, default_value = "")]
        serum: String,
        /// Monitoring checks.
        #[arg(long, default_value = "")]
        kontroller: String,
        /// Free-text notes. Never completable.
        #[arg(long, default_value = "")]
        notlar: String,
    },

    /// Mark a task done, or undo it.
    Toggle {
        #[arg(long)]
        patient: PatientId,
        #[arg(long)]
        order: OrderId,
        /// One of `ilaclar`, `serum`, `kontroller`.
        #[arg(long)]
        task: TaskCategory,
    },
}

pub async fn run_order<B: WardBackend>(
    args: &OrderArgs,
    controller: &mut WardController<B>,
) -> Result<u8> {
    let role = controller.role();
    match &args.command {
        OrderCommand::Add {
            patient,
            ilaclar,
            serum,
            kontroller,
            notlar,
        } => {
            if let Some(code) = refuse_unless(role.can_issue_orders(), role, "order add") {
                return Ok(code);
            }
            controller.init().await?;
            controller.select_patient(*patient).await?;

            controller.open_new_order_form();
            let form = controller.new_order_form_mut();
            form.medications = ilaclar.clone();
            form.iv_fluids = serum.clone();
            form.checks = kontroller.clone();
            form.notes = notlar.clone();
            if form.is_blank() {
                bail!("nothing to order: give --ilaclar, --serum, --kontroller or --notlar");
            }

            let order = controller.submit_new_order().await?;
            println!("OK: issued order {} by doctor {}", order.id, order.doctor_id);
            print!("{}", render::order_list(controller.orders()));
            Ok(0)
        }

        OrderCommand::Toggle {
            patient,
            order,
            task,
        } => {
            if let Some(code) = refuse_unless(role.can_complete_tasks(), role, "order toggle") {
                return Ok(code);
            }
            controller.load_patients().await?;
            controller.select_patient(*patient).await?;
            check_toggle_target(controller.orders(), *order, *task)?;
            controller.toggle_task(*order, *task).await?;

            let state = if controller.is_task_completed(*order, *task) {
                "done"
            } else {
                "not done"
            };
            println!("OK: {} marked {state} on order {order}", task.label());
            print!("{}", render::order_list(controller.orders()));
            Ok(0)
        }
    }
}

/// Only sections that are shown can be ticked: the order must be in the
/// patient's list and the section must have text.
fn check_toggle_target(orders: &[Order], order_id: OrderId, task: TaskCategory) -> Result<()> {
    let Some(order) = orders.iter().find(|o| o.id == order_id) else {
        bail!("order {order_id} is not in this patient's order list");
    };
    if order.section(task).trim().is_empty() {
        bail!("order {order_id} has no {} section to complete", task.label());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ward_core::{CompletedTasks, DoctorId};

    fn order_with(medications: &str, iv_fluids: &str) -> Order {
        Order {
            id: OrderId::new(),
            patient_id: PatientId::new(),
            doctor_id: DoctorId::new(),
            medications: medications.into(),
            iv_fluids: iv_fluids.into(),
            checks: String::new(),
            notes: String::new(),
            completed: CompletedTasks::new(),
            created_at: Utc::now(),
            doctor: None,
        }
    }

    #[test]
    fn toggle_allows_sections_with_text() {
        let order = order_with("Parol 500mg", "");
        let id = order.id;
        assert!(check_toggle_target(&[order], id, TaskCategory::Medications).is_ok());
    }

    #[test]
    fn toggle_refuses_empty_section() {
        let order = order_with("Parol 500mg", "  ");
        let id = order.id;
        let err = check_toggle_target(&[order], id, TaskCategory::IvFluids).unwrap_err();
        assert!(err.to_string().contains("Serum"));
    }

    #[test]
    fn toggle_refuses_order_outside_the_list() {
        let order = order_with("Parol 500mg", "");
        let other = OrderId::new();
        assert!(check_toggle_target(&[order], other, TaskCategory::Medications).is_err());
    }
}
