//! # Ward Records
//!
//! Row types for the `doctors`, `patients` and `orders` collections, plus
//! the insert payloads the client posts. Field names are English; the
//! backend's column names are applied with `#[serde(rename)]`.
//!
//! Read types tolerate schema drift: text columns that come back `null`
//! decode as empty strings and unknown columns are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::identity::{DoctorId, OrderId, PatientId};
use crate::task::{CompletedTasks, TaskCategory};

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A doctor row. Doctors are never edited by this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// The doctor columns embedded into patient and order reads
/// (`doctors(ad_soyad)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSummary {
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
}

/// A patient row, optionally carrying the attending doctor's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
    /// Free-text room label ("101", "ICU-3").
    #[serde(rename = "oda_no", deserialize_with = "nullable_text", default)]
    pub room: String,
    #[serde(rename = "doktor_id", default)]
    pub doctor_id: Option<DoctorId>,
    pub created_at: DateTime<Utc>,
    /// Present only when the read expanded the `doctors` relation.
    #[serde(rename = "doctors", default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorSummary>,
}

/// A care order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "hasta_id")]
    pub patient_id: PatientId,
    #[serde(rename = "doktor_id")]
    pub doctor_id: DoctorId,
    #[serde(rename = "ilaclar", deserialize_with = "nullable_text", default)]
    pub medications: String,
    #[serde(rename = "serum", deserialize_with = "nullable_text", default)]
    pub iv_fluids: String,
    #[serde(rename = "kontroller", deserialize_with = "nullable_text", default)]
    pub checks: String,
    #[serde(rename = "notlar", deserialize_with = "nullable_text", default)]
    pub notes: String,
    #[serde(rename = "tamamlanan_gorevler", default)]
    pub completed: CompletedTasks,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "doctors", default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorSummary>,
}

impl Order {
    /// The free text for a completable section.
    pub fn section(&self, category: TaskCategory) -> &str {
        match category {
            TaskCategory::Medications => &self.medications,
            TaskCategory::IvFluids => &self.iv_fluids,
            TaskCategory::Checks => &self.checks,
        }
    }

    /// Whether `category` is marked done on this order.
    pub fn is_completed(&self, category: TaskCategory) -> bool {
        self.completed.contains(category)
    }
}

/// Insert payload for `doctors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDoctor {
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
}

/// Insert payload for `patients`. A missing doctor is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPatient {
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
    #[serde(rename = "oda_no")]
    pub room: String,
    #[serde(rename = "doktor_id")]
    pub doctor_id: Option<DoctorId>,
}

/// Insert payload for `orders`. The completed set is left to the
/// backend's default (empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    #[serde(rename = "hasta_id")]
    pub patient_id: PatientId,
    #[serde(rename = "doktor_id")]
    pub doctor_id: DoctorId,
    #[serde(rename = "ilaclar")]
    pub medications: String,
    #[serde(rename = "serum")]
    pub iv_fluids: String,
    #[serde(rename = "kontroller")]
    pub checks: String,
    #[serde(rename = "notlar")]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patient_decodes_with_embedded_doctor() {
        let patient: Patient = serde_json::from_value(json!({
            "id": "7d0b7f4e-6a61-4a39-9b58-0f0a1f7c2d11",
            "ad_soyad": "Ayşe Yılmaz",
            "oda_no": "101",
            "doktor_id": "2b3c0a5e-1f0e-4b5e-8f37-2a4b6c8d0e12",
            "created_at": "2026-03-01T08:30:00.123456+00:00",
            "doctors": { "ad_soyad": "Mehmet Kaya" }
        }))
        .unwrap();
        assert_eq!(patient.full_name, "Ayşe Yılmaz");
        assert_eq!(patient.room, "101");
        assert!(patient.doctor_id.is_some());
        assert_eq!(patient.doctor.unwrap().full_name, "Mehmet Kaya");
    }

    #[test]
    fn patient_without_doctor_decodes_null_reference() {
        let patient: Patient = serde_json::from_value(json!({
            "id": "7d0b7f4e-6a61-4a39-9b58-0f0a1f7c2d11",
            "ad_soyad": "Ali Demir",
            "oda_no": null,
            "doktor_id": null,
            "created_at": "2026-03-01T08:30:00Z",
            "doctors": null
        }))
        .unwrap();
        assert!(patient.doctor_id.is_none());
        assert!(patient.doctor.is_none());
        assert_eq!(patient.room, "");
    }

    #[test]
    fn order_decodes_null_text_and_null_completed_set() {
        let order: Order = serde_json::from_value(json!({
            "id": "0e1f2a3b-4c5d-4e6f-8a9b-0c1d2e3f4a5b",
            "hasta_id": "7d0b7f4e-6a61-4a39-9b58-0f0a1f7c2d11",
            "doktor_id": "2b3c0a5e-1f0e-4b5e-8f37-2a4b6c8d0e12",
            "ilaclar": "Parol 500mg 08:00",
            "serum": null,
            "kontroller": "",
            "notlar": null,
            "tamamlanan_gorevler": null,
            "created_at": "2026-03-01T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(order.section(TaskCategory::Medications), "Parol 500mg 08:00");
        assert_eq!(order.iv_fluids, "");
        assert!(order.completed.is_empty());
        assert!(order.doctor.is_none());
    }

    #[test]
    fn order_reports_completed_sections() {
        let order: Order = serde_json::from_value(json!({
            "id": "0e1f2a3b-4c5d-4e6f-8a9b-0c1d2e3f4a5b",
            "hasta_id": "7d0b7f4e-6a61-4a39-9b58-0f0a1f7c2d11",
            "doktor_id": "2b3c0a5e-1f0e-4b5e-8f37-2a4b6c8d0e12",
            "ilaclar": "a", "serum": "b", "kontroller": "c", "notlar": "d",
            "tamamlanan_gorevler": ["serum"],
            "created_at": "2026-03-01T09:00:00Z"
        }))
        .unwrap();
        assert!(order.is_completed(TaskCategory::IvFluids));
        assert!(!order.is_completed(TaskCategory::Checks));
    }

    #[test]
    fn new_patient_serializes_wire_columns() {
        let payload = NewPatient {
            full_name: "Ali Demir".into(),
            room: "204".into(),
            doctor_id: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "ad_soyad": "Ali Demir", "oda_no": "204", "doktor_id": null })
        );
    }

    #[test]
    fn new_order_serializes_wire_columns() {
        let patient_id = PatientId::new();
        let doctor_id = DoctorId::new();
        let payload = NewOrder {
            patient_id,
            doctor_id,
            medications: "m".into(),
            iv_fluids: "s".into(),
            checks: "k".into(),
            notes: "n".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["hasta_id"], json!(patient_id.to_string()));
        assert_eq!(value["doktor_id"], json!(doctor_id.to_string()));
        assert_eq!(value["notlar"], json!("n"));
        assert!(value.get("tamamlanan_gorevler").is_none());
    }
}
