//! Typed client for the `patients` collection.
//!
//! | Method | Query | Operation |
//! |--------|-------|-----------|
//! | GET    | `select=*,doctors(ad_soyad)&order=created_at.desc` | Roster, newest first |
//! | POST   | `select=*` | Register a patient |

use ward_core::{NewPatient, Patient};

use crate::error::WardApiError;
use crate::query::{Direction, TableQuery};
use crate::rest::Rest;

const TABLE: &str = "patients";

/// Select list that embeds the attending doctor's name.
pub const PATIENT_SELECT: &str = "*,doctors(ad_soyad)";

/// Client for the `patients` collection.
#[derive(Debug, Clone)]
pub struct PatientClient {
    rest: Rest,
}

impl PatientClient {
    pub(crate) fn new(rest: Rest) -> Self {
        Self { rest }
    }

    /// List every patient with the attending doctor joined in, newest first.
    pub async fn list(&self) -> Result<Vec<Patient>, WardApiError> {
        let query = TableQuery::on(TABLE)
            .select(PATIENT_SELECT)
            .order("created_at", Direction::Descending);
        self.rest.select(&query).await
    }

    /// Register a patient and return the stored row (without the embedded
    /// doctor; reload the roster to get it).
    pub async fn create(&self, patient: &NewPatient) -> Result<Patient, WardApiError> {
        self.rest.insert(&TableQuery::on(TABLE), patient).await
    }
}
