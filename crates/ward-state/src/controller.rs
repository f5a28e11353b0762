//! # Ward Controller
//!
//! ```text
//!            select_patient(id)
//!   Roster ─────────────────────▶ Detail(id)
//!      ▲                              │
//!      └────── deselect_patient ──────┘
//! ```
//!
//! Writes (`submit_new_patient`, `submit_new_order`, `toggle_task`) are
//! terminal actions: on success the affected list is re-read from the
//! backend; on failure nothing changes and the error is returned. A write
//! that succeeded is reported as success even when the re-read fails; the
//! stale list stays cached until the next load.

use tracing::{info, warn};
use ward_core::{
    Doctor, DoctorId, NewOrderForm, NewPatientForm, Order, OrderId, Patient, PatientId, Role,
    TaskCategory,
};

use crate::backend::WardBackend;
use crate::error::ControllerError;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The patient roster.
    Roster,
    /// One patient's detail page with its orders.
    Detail(PatientId),
}

/// State holder for one ward session.
pub struct WardController<B> {
    backend: B,
    role: Role,
    selected: Option<Patient>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    orders: Vec<Order>,
    new_patient: NewPatientForm,
    new_order: NewOrderForm,
    show_new_patient_form: bool,
    show_new_order_form: bool,
}

impl<B: WardBackend> WardController<B> {
    /// A controller with empty caches, doctor role, roster view.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            role: Role::default(),
            selected: None,
            patients: Vec::new(),
            doctors: Vec::new(),
            orders: Vec::new(),
            new_patient: NewPatientForm::default(),
            new_order: NewOrderForm::default(),
            show_new_patient_form: false,
            show_new_order_form: false,
        }
    }

    /// Initial load: roster and doctor list.
    ///
    /// Both loads are attempted; the first failure is returned.
    pub async fn init(&mut self) -> Result<(), ControllerError> {
        let patients = self.load_patients().await;
        let doctors = self.load_doctors().await;
        patients.and(doctors)
    }

    // ── Loads ───────────────────────────────────────────────────────

    pub async fn load_patients(&mut self) -> Result<(), ControllerError> {
        match self.backend.list_patients().await {
            Ok(patients) => {
                self.patients = patients;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load patients");
                Err(e.into())
            }
        }
    }

    pub async fn load_doctors(&mut self) -> Result<(), ControllerError> {
        match self.backend.list_doctors().await {
            Ok(doctors) => {
                self.doctors = doctors;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load doctors");
                Err(e.into())
            }
        }
    }

    pub async fn load_orders(&mut self, patient_id: PatientId) -> Result<(), ControllerError> {
        match self.backend.list_orders(patient_id).await {
            Ok(orders) => {
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, %patient_id, "failed to load orders");
                Err(e.into())
            }
        }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Open a patient from the cached roster and load its orders.
    ///
    /// The order cache is cleared before loading so the detail view never
    /// shows the previous patient's orders. If the load fails the patient
    /// stays selected with an empty order list.
    pub async fn select_patient(&mut self, patient_id: PatientId) -> Result<(), ControllerError> {
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .cloned()
            .ok_or(ControllerError::UnknownPatient(patient_id))?;

        self.selected = Some(patient);
        self.orders.clear();
        self.show_new_order_form = false;
        self.load_orders(patient_id).await
    }

    /// Back to the roster.
    pub fn deselect_patient(&mut self) {
        self.selected = None;
        self.show_new_order_form = false;
    }

    pub fn view(&self) -> View {
        match &self.selected {
            Some(patient) => View::Detail(patient.id),
            None => View::Roster,
        }
    }

    // ── Role ────────────────────────────────────────────────────────

    /// Switch the advisory role. Nothing in the controller checks it.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn role(&self) -> Role {
        self.role
    }

    // ── Forms ───────────────────────────────────────────────────────

    pub fn open_new_patient_form(&mut self) {
        self.show_new_patient_form = true;
    }

    pub fn close_new_patient_form(&mut self) {
        self.show_new_patient_form = false;
    }

    pub fn open_new_order_form(&mut self) {
        self.show_new_order_form = true;
    }

    pub fn close_new_order_form(&mut self) {
        self.show_new_order_form = false;
    }

    pub fn new_patient_form(&self) -> &NewPatientForm {
        &self.new_patient
    }

    pub fn new_patient_form_mut(&mut self) -> &mut NewPatientForm {
        &mut self.new_patient
    }

    pub fn new_order_form(&self) -> &NewOrderForm {
        &self.new_order
    }

    pub fn new_order_form_mut(&mut self) -> &mut NewOrderForm {
        &mut self.new_order
    }

    pub fn is_new_patient_form_open(&self) -> bool {
        self.show_new_patient_form
    }

    pub fn is_new_order_form_open(&self) -> bool {
        self.show_new_order_form
    }

    // ── Writes ──────────────────────────────────────────────────────

    /// Insert the patient in the form buffer, then reload the roster.
    ///
    /// Only a failed insert is an error. A failed reload after a successful
    /// insert leaves the previous roster cached and still returns the row.
    pub async fn submit_new_patient(&mut self) -> Result<Patient, ControllerError> {
        let payload = self.new_patient.to_insert();
        let created = match self.backend.create_patient(&payload).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "failed to create patient");
                return Err(e.into());
            }
        };
        info!(patient_id = %created.id, "patient registered");

        self.new_patient = NewPatientForm::default();
        self.show_new_patient_form = false;
        // The insert stands even if the reload fails; `load_patients` logs it
        // and keeps the previous roster.
        let _ = self.load_patients().await;
        Ok(created)
    }

    /// The doctor an order for `patient` would be issued by: the patient's
    /// attending doctor, else the first doctor by name.
    pub fn default_doctor_for(&self, patient: &Patient) -> Option<DoctorId> {
        patient
            .doctor_id
            .or_else(|| self.doctors.first().map(|d| d.id))
    }

    /// Insert the order in the form buffer for the open patient, then
    /// reload that patient's orders.
    pub async fn submit_new_order(&mut self) -> Result<Order, ControllerError> {
        let patient = self
            .selected
            .as_ref()
            .ok_or(ControllerError::NoPatientSelected)?;
        let patient_id = patient.id;
        let doctor_id = self
            .default_doctor_for(patient)
            .ok_or(ControllerError::NoDoctorAvailable)?;

        let payload = self.new_order.to_insert(patient_id, doctor_id);
        let created = match self.backend.create_order(&payload).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, %patient_id, "failed to create order");
                return Err(e.into());
            }
        };
        info!(order_id = %created.id, %patient_id, %doctor_id, "order issued");

        self.new_order = NewOrderForm::default();
        self.show_new_order_form = false;
        let _ = self.load_orders(patient_id).await;
        Ok(created)
    }

    /// Flip one category on a cached order and write the whole set back,
    /// then reload the open patient's orders.
    pub async fn toggle_task(
        &mut self,
        order_id: OrderId,
        category: TaskCategory,
    ) -> Result<(), ControllerError> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or(ControllerError::UnknownOrder(order_id))?;
        let next = order.completed.toggled(category);

        if let Err(e) = self.backend.set_completed(order_id, &next).await {
            warn!(error = %e, %order_id, task = %category, "failed to update completed tasks");
            return Err(e.into());
        }
        info!(%order_id, task = %category, done = next.contains(category), "task toggled");

        if let Some(patient_id) = self.selected.as_ref().map(|p| p.id) {
            let _ = self.load_orders(patient_id).await;
        }
        Ok(())
    }

    /// Whether `category` is done on a cached order. Unknown orders count
    /// as not done.
    pub fn is_task_completed(&self, order_id: OrderId, category: TaskCategory) -> bool {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .is_some_and(|o| o.is_completed(category))
    }

    // ── Read access ─────────────────────────────────────────────────

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.selected.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
