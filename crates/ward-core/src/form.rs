//! # Pending Form Buffers
//!
//! What the user has typed into the two creation forms but not yet
//! submitted. Converting a buffer into an insert payload does not clear
//! it; the controller resets a buffer only after the insert succeeds.

use crate::identity::{DoctorId, PatientId};
use crate::model::{NewOrder, NewPatient};

/// The "new patient" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatientForm {
    pub full_name: String,
    pub room: String,
    /// `None` when the "choose a doctor" placeholder is still selected.
    pub doctor_id: Option<DoctorId>,
}

impl NewPatientForm {
    pub fn to_insert(&self) -> NewPatient {
        NewPatient {
            full_name: self.full_name.clone(),
            room: self.room.clone(),
            doctor_id: self.doctor_id,
        }
    }
}

/// The "new order" form. The patient and doctor are filled in from the
/// current selection at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOrderForm {
    pub medications: String,
    pub iv_fluids: String,
    pub checks: String,
    pub notes: String,
}

impl NewOrderForm {
    pub fn to_insert(&self, patient_id: PatientId, doctor_id: DoctorId) -> NewOrder {
        NewOrder {
            patient_id,
            doctor_id,
            medications: self.medications.clone(),
            iv_fluids: self.iv_fluids.clone(),
            checks: self.checks.clone(),
            notes: self.notes.clone(),
        }
    }

    /// True when every section is blank.
    pub fn is_blank(&self) -> bool {
        [&self.medications, &self.iv_fluids, &self.checks, &self.notes]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_form_carries_selection_into_payload() {
        let form = NewOrderForm {
            medications: "Parol 500mg".into(),
            ..Default::default()
        };
        let patient = PatientId::new();
        let doctor = DoctorId::new();
        let payload = form.to_insert(patient, doctor);
        assert_eq!(payload.patient_id, patient);
        assert_eq!(payload.doctor_id, doctor);
        assert_eq!(payload.medications, "Parol 500mg");
        assert_eq!(payload.notes, "");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        let mut form = NewOrderForm::default();
        assert!(form.is_blank());
        form.notes = "  ".into();
        assert!(form.is_blank());
        form.checks = "TA q4h".into();
        assert!(!form.is_blank());
    }

    #[test]
    fn patient_form_keeps_placeholder_as_none() {
        let form = NewPatientForm {
            full_name: "Ali".into(),
            room: "3".into(),
            doctor_id: None,
        };
        assert_eq!(form.to_insert().doctor_id, None);
    }
}
