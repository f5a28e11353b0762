//! The backend seam the controller drives.

use async_trait::async_trait;
use ward_client::{WardApiError, WardClient};
use ward_core::{CompletedTasks, Doctor, NewOrder, NewPatient, Order, OrderId, Patient, PatientId};

/// The six calls the ward makes against its three collections.
///
/// Ordering is part of the contract: patients and orders newest first,
/// doctors by name ascending.
#[async_trait]
pub trait WardBackend: Send + Sync {
    async fn list_patients(&self) -> Result<Vec<Patient>, WardApiError>;

    async fn list_doctors(&self) -> Result<Vec<Doctor>, WardApiError>;

    /// Orders belonging to `patient_id` only.
    async fn list_orders(&self, patient_id: PatientId) -> Result<Vec<Order>, WardApiError>;

    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, WardApiError>;

    async fn create_order(&self, order: &NewOrder) -> Result<Order, WardApiError>;

    /// Overwrite the whole completed-task set of one order.
    async fn set_completed(
        &self,
        order_id: OrderId,
        completed: &CompletedTasks,
    ) -> Result<Order, WardApiError>;
}

#[async_trait]
impl WardBackend for WardClient {
    async fn list_patients(&self) -> Result<Vec<Patient>, WardApiError> {
        self.patients().list().await
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, WardApiError> {
        self.doctors().list().await
    }

    async fn list_orders(&self, patient_id: PatientId) -> Result<Vec<Order>, WardApiError> {
        self.orders().list_for_patient(patient_id).await
    }

    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, WardApiError> {
        self.patients().create(patient).await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order, WardApiError> {
        self.orders().create(order).await
    }

    async fn set_completed(
        &self,
        order_id: OrderId,
        completed: &CompletedTasks,
    ) -> Result<Order, WardApiError> {
        self.orders().set_completed(order_id, completed).await
    }
}
