//! Class (cohort) model.
//!
//! A class is the cohort a timetable is generated for: a name such as
//! `"10th"` and a division such as `"A"`. Every class receives one entry
//! per (day, slot), teaching or not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class division that lessons are scheduled against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Class name.
    pub name: String,
    /// Division within the class.
    pub division: String,
}

impl ClassGroup {
    /// Creates a class division.
    pub fn new(name: impl Into<String>, division: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            division: division.into(),
        }
    }

    /// Whether this is the given class division.
    pub fn matches(&self, name: &str, division: &str) -> bool {
        self.name == name && self.division == division
    }
}

impl fmt::Display for ClassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.division)
    }
}
