//! # ward-core: Foundational Types for the Ward Orders System
//!
//! Defines the data model shared by every other crate in the workspace:
//! doctors, patients, care orders and the completed-task set that nurses
//! toggle. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `DoctorId`, `PatientId` and `OrderId` are
//!    distinct types. An order's patient reference cannot be filled with a
//!    doctor id by accident.
//!
//! 2. **Closed task taxonomy.** `TaskCategory` has exactly three variants
//!    (`ilaclar`, `serum`, `kontroller`). Notes (`notlar`) are displayed but
//!    are not a variant, so they can never enter a completed-task set.
//!
//! 3. **Wire names stay on the wire.** Rust field names are English; the
//!    backend's column names are applied with `#[serde(rename)]` only.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ward-*` crates.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod form;
pub mod identity;
pub mod model;
pub mod role;
pub mod task;

pub use error::ValidationError;
pub use form::{NewOrderForm, NewPatientForm};
pub use identity::{DoctorId, OrderId, PatientId};
pub use model::{Doctor, DoctorSummary, NewDoctor, NewOrder, NewPatient, Order, Patient};
pub use role::Role;
pub use task::{CompletedTasks, TaskCategory, NOTES_KEY};
