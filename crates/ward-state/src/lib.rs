//! # ward-state: Ward Application State Controller
//!
//! Owns everything the ward screen shows: the advisory role, which patient
//! is open, cached patient / doctor / order lists, the two creation form
//! buffers and their modal flags.
//!
//! ## Consistency
//!
//! The controller never patches a cached list locally. Every successful
//! write is followed by a full re-read of the affected list, and a failed
//! call leaves the cache exactly as it was. Operations take `&mut self`,
//! so one action (including its reload) finishes before the next starts.
//!
//! ## Backends
//!
//! The controller talks to the backend through [`WardBackend`], implemented
//! for [`ward_client::WardClient`].

pub mod backend;
pub mod controller;
pub mod error;

#[cfg(test)]
mod fake;

pub use backend::WardBackend;
pub use controller::{View, WardController};
pub use error::ControllerError;
