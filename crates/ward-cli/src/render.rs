//! Plain-text rendering of the roster, the patient header and the order
//! list. Every function returns a `String`; printing is the caller's job.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use ward_core::{Doctor, Order, Patient, TaskCategory};

/// Shown in place of an empty order list.
pub const NO_ORDERS: &str = "Bu hasta için henüz order oluşturulmamış";
/// Shown in place of an empty roster.
pub const NO_PATIENTS: &str = "Henüz hasta kaydı yok";

/// Strike through `text` with a combining long stroke overlay.
pub fn strike(text: &str) -> String {
    text.chars().flat_map(|c| [c, '\u{0336}']).collect()
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y %H:%M:%S").to_string()
}

pub fn roster(patients: &[Patient]) -> String {
    let mut out = format!("Hasta Listesi ({})\n", patients.len());
    if patients.is_empty() {
        let _ = writeln!(out, "  {NO_PATIENTS}");
        return out;
    }
    for patient in patients {
        let _ = write!(out, "  {}  {}  Oda: {}", patient.id, patient.full_name, patient.room);
        if let Some(doctor) = &patient.doctor {
            let _ = write!(out, "  Dr. {}", doctor.full_name);
        }
        out.push('\n');
    }
    out
}

pub fn patient_header(patient: &Patient) -> String {
    let mut out = format!("{}\nOda: {}\n", patient.full_name, patient.room);
    if let Some(doctor) = &patient.doctor {
        let _ = writeln!(out, "Dr. {}", doctor.full_name);
    }
    out
}

/// One order card. Empty sections are omitted; completed sections are
/// marked `[x]` and struck through.
pub fn order(order: &Order) -> String {
    let mut out = format!("Order {}  {}\n", order.id, timestamp(order.created_at));
    if let Some(doctor) = &order.doctor {
        let _ = writeln!(out, "  Dr. {}", doctor.full_name);
    }
    for category in TaskCategory::ALL {
        let text = order.section(category);
        if text.is_empty() {
            continue;
        }
        let (marker, body) = if order.is_completed(category) {
            ("[x]", strike(text))
        } else {
            ("[ ]", text.to_string())
        };
        let _ = writeln!(out, "  {marker} {} ({category}): {body}", category.label());
    }
    if !order.notes.is_empty() {
        let _ = writeln!(out, "      Notlar: {}", order.notes);
    }
    out
}

pub fn order_list(orders: &[Order]) -> String {
    let mut out = String::from("Order Listesi\n");
    if orders.is_empty() {
        let _ = writeln!(out, "  {NO_ORDERS}");
        return out;
    }
    for (i, o) in orders.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&order(o));
    }
    out
}

pub fn doctors(doctors: &[Doctor]) -> String {
    let mut out = format!("Doktorlar ({})\n", doctors.len());
    for doctor in doctors {
        let _ = writeln!(out, "  {}  Dr. {}", doctor.id, doctor.full_name);
    }
    out
}
