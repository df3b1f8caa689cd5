//! Teaching assignment (demand) model.
//!
//! A teaching assignment states that a teacher teaches a subject to one
//! class division, with independent weekly quotas for plain lectures and
//! for lab sessions. Lab sessions additionally claim the subject's shared
//! lab for the duration of the slot.

use serde::{Deserialize, Serialize};

/// Weekly teaching load of one teacher for one subject and class division.
///
/// Assignments are immutable inputs; the allocator only tracks how many
/// sessions remain (see [`DemandLedger`](crate::scheduler::DemandLedger)).
///
/// # JSON Form
/// `{"name", "subject", "targetClass", "targetDivision", "lecturesPerWeek", "labsPerWeek"}`.
/// Missing quotas default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingAssignment {
    /// Teacher name.
    #[serde(rename = "name")]
    pub teacher: String,
    /// Subject name. Also identifies the subject's lab.
    pub subject: String,
    /// Name of the class taught.
    pub target_class: String,
    /// Division of the class taught.
    pub target_division: String,
    /// Plain classroom sessions per week.
    #[serde(default)]
    pub lectures_per_week: u32,
    /// Lab sessions per week.
    #[serde(default)]
    pub labs_per_week: u32,
}

impl TeachingAssignment {
    /// Creates an assignment with zero quotas.
    pub fn new(
        teacher: impl Into<String>,
        subject: impl Into<String>,
        target_class: impl Into<String>,
        target_division: impl Into<String>,
    ) -> Self {
        Self {
            teacher: teacher.into(),
            subject: subject.into(),
            target_class: target_class.into(),
            target_division: target_division.into(),
            lectures_per_week: 0,
            labs_per_week: 0,
        }
    }

    /// Sets the weekly lecture quota.
    pub fn with_lectures(mut self, lectures_per_week: u32) -> Self {
        self.lectures_per_week = lectures_per_week;
        self
    }

    /// Sets the weekly lab quota.
    pub fn with_labs(mut self, labs_per_week: u32) -> Self {
        self.labs_per_week = labs_per_week;
        self
    }

    /// Whether both quotas are zero. Inert assignments are never placed.
    pub fn is_inert(&self) -> bool {
        self.lectures_per_week == 0 && self.labs_per_week == 0
    }
}
