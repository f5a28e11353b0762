use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Mutex;
use ward_client::WardApiError;
use ward_core::{
    CompletedTasks, Doctor, DoctorId, DoctorSummary, NewOrder, NewPatient, Order, OrderId, Patient,
    PatientId,
};

use crate::backend::WardBackend;

/// In-memory backend with call counting and one-shot failure injection.
#[derive(Default)]
pub struct FakeBackend {
    doctors: Mutex<Vec<Doctor>>,
    patients: Mutex<Vec<Patient>>,
    orders: Mutex<Vec<Order>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    fail_next: AtomicBool,
    fail_on: Mutex<Option<&'static str>>,
    clock: AtomicI64,
}

impl FakeBackend {
    pub async fn add_doctor(&self, name: &str) -> DoctorId {
        let doctor = Doctor {
            id: DoctorId::new(),
            full_name: name.to_string(),
            created_at: self.tick(),
        };
        let id = doctor.id;
        self.doctors.lock().await.push(doctor);
        id
    }

    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Fail the next call to `name` only.
    pub async fn fail_call(&self, name: &'static str) {
        *self.fail_on.lock().await = Some(name);
    }

    /// How many patients are stored, regardless of what the controller cached.
    pub async fn stored_patients(&self) -> usize {
        self.patients.lock().await.len()
    }

    pub async fn calls(&self, name: &'static str) -> usize {
        self.calls.lock().await.get(name).copied().unwrap_or(0)
    }

    fn tick(&self) -> DateTime<Utc> {
        let n = self.clock.fetch_add(1, Ordering::SeqCst);
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap() + Duration::seconds(n)
    }

    async fn enter(&self, name: &'static str) -> Result<(), WardApiError> {
        *self.calls.lock().await.entry(name).or_default() += 1;
        let targeted = {
            let mut fail_on = self.fail_on.lock().await;
            if *fail_on == Some(name) {
                fail_on.take().is_some()
            } else {
                false
            }
        };
        if targeted || self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(WardApiError::ApiError {
                endpoint: name.to_string(),
                status: 503,
                body: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    async fn summary(&self, id: DoctorId) -> Option<DoctorSummary> {
        self.doctors
            .lock()
            .await
            .iter()
            .find(|d| d.id == id)
            .map(|d| DoctorSummary {
                full_name: d.full_name.clone(),
            })
    }
}

#[async_trait]
impl WardBackend for FakeBackend {
    async fn list_patients(&self) -> Result<Vec<Patient>, WardApiError> {
        self.enter("list_patients").await?;
        let mut rows = self.patients.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for row in &mut rows {
            row.doctor = match row.doctor_id {
                Some(id) => self.summary(id).await,
                None => None,
            };
        }
        Ok(rows)
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, WardApiError> {
        self.enter("list_doctors").await?;
        let mut rows = self.doctors.lock().await.clone();
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(rows)
    }

    async fn list_orders(&self, patient_id: PatientId) -> Result<Vec<Order>, WardApiError> {
        self.enter("list_orders").await?;
        let mut rows: Vec<Order> = self
            .orders
            .lock()
            .await
            .iter()
            .filter(|o| o.patient_id == patient_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for row in &mut rows {
            row.doctor = self.summary(row.doctor_id).await;
        }
        Ok(rows)
    }

    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, WardApiError> {
        self.enter("create_patient").await?;
        let row = Patient {
            id: PatientId::new(),
            full_name: patient.full_name.clone(),
            room: patient.room.clone(),
            doctor_id: patient.doctor_id,
            created_at: self.tick(),
            doctor: None,
        };
        self.patients.lock().await.push(row.clone());
        Ok(row)
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order, WardApiError> {
        self.enter("create_order").await?;
        let row = Order {
            id: OrderId::new(),
            patient_id: order.patient_id,
            doctor_id: order.doctor_id,
            medications: order.medications.clone(),
            iv_fluids: order.iv_fluids.clone(),
            checks: order.checks.clone(),
            notes: order.notes.clone(),
            completed: CompletedTasks::new(),
            created_at: self.tick(),
            doctor: None,
        };
        self.orders.lock().await.push(row.clone());
        Ok(row)
    }

    async fn set_completed(
        &self,
        order_id: OrderId,
        completed: &CompletedTasks,
    ) -> Result<Order, WardApiError> {
        self.enter("set_completed").await?;
        let mut orders = self.orders.lock().await;
        let row = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| WardApiError::NotFound {
                endpoint: "set_completed".to_string(),
            })?;
        row.completed = completed.clone();
        Ok(row.clone())
    }
}
