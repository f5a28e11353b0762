//! # Error Types
//!
//! Validation failures raised while parsing user- or wire-supplied values
//! into the closed domain enums.

use thiserror::Error;

/// A value could not be parsed into a domain type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The label is not one of the known task categories.
    #[error("unknown task category {0:?}; expected one of ilaclar, serum, kontroller")]
    UnknownTaskCategory(String),

    /// The label names a category that exists on an order but cannot be
    /// marked complete (the notes section).
    #[error("task category {0:?} cannot be marked complete")]
    NotCompletable(String),

    /// The value is not a known role.
    #[error("unknown role {0:?}; expected doctor or nurse")]
    UnknownRole(String),
}
