//! Typed client for the `doctors` collection.
//!
//! | Method | Query | Operation |
//! |--------|-------|-----------|
//! | GET    | `select=*&order=ad_soyad.asc` | List doctors by name |
//! | POST   | `select=*` | Register a doctor |

use ward_core::{Doctor, NewDoctor};

use crate::error::WardApiError;
use crate::query::{Direction, TableQuery};
use crate::rest::Rest;

const TABLE: &str = "doctors";

/// Client for the `doctors` collection.
#[derive(Debug, Clone)]
pub struct DoctorClient {
    rest: Rest,
}

impl DoctorClient {
    pub(crate) fn new(rest: Rest) -> Self {
        Self { rest }
    }

    /// List every doctor ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<Doctor>, WardApiError> {
        let query = TableQuery::on(TABLE).order("ad_soyad", Direction::Ascending);
        self.rest.select(&query).await
    }

    /// Register a doctor and return the stored row.
    pub async fn create(&self, doctor: &NewDoctor) -> Result<Doctor, WardApiError> {
        self.rest.insert(&TableQuery::on(TABLE), doctor).await
    }
}
