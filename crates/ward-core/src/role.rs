//! # Ward Role
//!
//! The role selector only decides which actions a front end exposes. It is
//! not sent to the backend and nothing downstream checks it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Who is using the ward screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Registers patients and issues orders.
    #[default]
    Doctor,
    /// Works through orders and ticks off completed tasks.
    Nurse,
}

impl Role {
    pub fn can_register_patients(&self) -> bool {
        matches!(self, Self::Doctor)
    }

    pub fn can_issue_orders(&self) -> bool {
        matches!(self, Self::Doctor)
    }

    pub fn can_complete_tasks(&self) -> bool {
        matches!(self, Self::Nurse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
        }
    }

    /// Ward-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctor => "Doktor",
            Self::Nurse => "Hemşire",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "doctor" | "doktor" => Ok(Self::Doctor),
            "nurse" | "hemsire" | "hemşire" => Ok(Self::Nurse),
            _ => Err(ValidationError::UnknownRole(s.to_string())),
        }
    }
}
