//! # Task Categories and the Completed-Task Set
//!
//! An order carries four free-text sections. Three of them are tasks a
//! nurse can mark done; the fourth (notes) is informational only.
//!
//! | Key | Section | Completable |
//! |-----|---------|-------------|
//! | `ilaclar` | Medications | yes |
//! | `serum` | IV fluids | yes |
//! | `kontroller` | Monitoring checks | yes |
//! | `notlar` | Notes | no |
//!
//! The backend stores the completed set as a plain text array and does not
//! validate it. [`CompletedTasks`] enforces the subset invariant on the
//! client side: it holds only [`TaskCategory`] values and never duplicates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Wire key of the notes section. Never completable.
pub const NOTES_KEY: &str = "notlar";

/// A completable section of a care order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskCategory {
    /// Medications to administer.
    #[serde(rename = "ilaclar")]
    Medications,
    /// IV fluid instructions.
    #[serde(rename = "serum")]
    IvFluids,
    /// Monitoring checks (vitals, observations).
    #[serde(rename = "kontroller")]
    Checks,
}

impl TaskCategory {
    /// All completable categories in display order.
    pub const ALL: [TaskCategory; 3] = [Self::Medications, Self::IvFluids, Self::Checks];

    /// The wire key stored in `tamamlanan_gorevler`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medications => "ilaclar",
            Self::IvFluids => "serum",
            Self::Checks => "kontroller",
        }
    }

    /// Ward-facing section heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Medications => "İlaçlar",
            Self::IvFluids => "Serum",
            Self::Checks => "Kontroller",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ilaclar" => Ok(Self::Medications),
            "serum" => Ok(Self::IvFluids),
            "kontroller" => Ok(Self::Checks),
            NOTES_KEY => Err(ValidationError::NotCompletable(s.to_string())),
            other => Err(ValidationError::UnknownTaskCategory(other.to_string())),
        }
    }
}

/// The set of categories marked done on one order.
///
/// Keeps insertion order so that a toggled set is written back in the
/// order the nurse ticked the boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletedTasks(Vec<TaskCategory>);

impl CompletedTasks {
    /// An empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether `category` is marked done.
    pub fn contains(&self, category: TaskCategory) -> bool {
        self.0.contains(&category)
    }

    /// Mark `category` done. Returns `false` if it already was.
    pub fn insert(&mut self, category: TaskCategory) -> bool {
        if self.contains(category) {
            return false;
        }
        self.0.push(category);
        true
    }

    /// Clear `category`. Returns `false` if it was not marked.
    pub fn remove(&mut self, category: TaskCategory) -> bool {
        let before = self.0.len();
        self.0.retain(|c| *c != category);
        self.0.len() != before
    }

    /// The set that results from toggling `category`: removed if present,
    /// appended if absent. `self` is left untouched.
    pub fn toggled(&self, category: TaskCategory) -> Self {
        let mut next = self.clone();
        if !next.remove(category) {
            next.0.push(category);
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskCategory> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The wire keys, in stored order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.0.iter().map(TaskCategory::as_str).collect()
    }
}

impl FromIterator<TaskCategory> for CompletedTasks {
    fn from_iter<I: IntoIterator<Item = TaskCategory>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Lenient decode: `null` is empty, unknown labels and duplicates are dropped.
impl<'de> Deserialize<'de> for CompletedTasks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .iter()
            .filter_map(|label| label.parse::<TaskCategory>().ok())
            .collect())
    }
}
