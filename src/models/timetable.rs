//! Timetable (solution) model.
//!
//! A timetable is a flat list of entries, one per (day, slot, class).
//! Entries are flat records with stable field names so that presentation
//! and export layers can project them by class or by teacher without
//! knowing anything about how they were generated.
//!
//! Non-teaching cells use sentinel values that consumers must handle
//! distinctly from real sessions:
//!
//! | Cell | `subject` | `teacher_name` |
//! |------|-----------|----------------|
//! | Recess | [`RECESS_SUBJECT`] | [`RECESS_TEACHER`] |
//! | Free period | [`FREE_PERIOD_SUBJECT`] | [`FREE_PERIOD_TEACHER`] |

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{ClockTime, SchoolDay};

/// Subject of a recess cell.
pub const RECESS_SUBJECT: &str = "Recess";
/// Teacher of a recess cell.
pub const RECESS_TEACHER: &str = "N/A";
/// Subject of a cell no assignment could fill.
pub const FREE_PERIOD_SUBJECT: &str = "Free Period";
/// Teacher of a cell no assignment could fill.
pub const FREE_PERIOD_TEACHER: &str = "None";

/// Opaque entry identifier, unique within one timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub(crate) u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// One cell of the weekly grid: a class during one slot of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEntry {
    /// Unique identifier.
    pub id: EntryId,
    pub day: SchoolDay,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Subject taught, or a sentinel.
    pub subject: String,
    /// Teacher, or a sentinel.
    pub teacher_name: String,
    pub class_name: String,
    pub division: String,
    /// Whether this is the recess slot.
    pub is_break: bool,
    /// Whether the session occupies the subject's lab.
    pub is_lab: bool,
}

impl ScheduledEntry {
    /// Whether this is a recess cell.
    pub fn is_recess(&self) -> bool {
        self.is_break
    }

    /// Whether this cell was left unfilled.
    pub fn is_free_period(&self) -> bool {
        !self.is_break
            && self.subject == FREE_PERIOD_SUBJECT
            && self.teacher_name == FREE_PERIOD_TEACHER
    }

    /// Whether a teacher is actually teaching in this cell.
    pub fn is_session(&self) -> bool {
        !self.is_recess() && !self.is_free_period()
    }
}

/// A generated weekly timetable.
///
/// Entry order is not meaningful; use [`Timetable::sorted_by_day_and_time`]
/// when a chronological view is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// All cells of the weekly grid.
    pub entries: Vec<ScheduledEntry>,
}

/// A broken timetable invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    pub day: SchoolDay,
    pub start_time: ClockTime,
    /// Teacher or subject involved.
    pub entity: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A teacher appears in more than one class during one slot.
    TeacherDoubleBooked,
    /// A subject's lab is used by more than one class during one slot.
    LabCollision,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries of one class division (one class's grid).
    pub fn for_class(&self, class_name: &str, division: &str) -> Vec<&ScheduledEntry> {
        self.entries
            .iter()
            .filter(|e| e.class_name == class_name && e.division == division)
            .collect()
    }

    /// Entries taught by one teacher (a teacher's duty chart).
    pub fn for_teacher(&self, teacher_name: &str) -> Vec<&ScheduledEntry> {
        self.entries
            .iter()
            .filter(|e| e.is_session() && e.teacher_name == teacher_name)
            .collect()
    }

    /// Entries on one day.
    pub fn for_day(&self, day: SchoolDay) -> Vec<&ScheduledEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Entries ordered by (day, start time, class, division).
    pub fn sorted_by_day_and_time(&self) -> Vec<&ScheduledEntry> {
        let mut sorted: Vec<&ScheduledEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            // A zero-length recess sorts before the period starting with it.
            (a.day, a.start_time, !a.is_break, &a.class_name, &a.division).cmp(&(
                b.day,
                b.start_time,
                !b.is_break,
                &b.class_name,
                &b.division,
            ))
        });
        sorted
    }

    /// Number of teaching sessions placed.
    pub fn session_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_session()).count()
    }

    /// Number of free-period cells.
    pub fn free_period_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_free_period()).count()
    }

    /// Audits the double-booking and lab-sharing invariants.
    ///
    /// Returns one violation per duplicate teacher or lab subject per
    /// (day, slot). A generated timetable always returns an empty list.
    pub fn conflicts(&self) -> Vec<Violation> {
        let mut teachers: HashMap<(SchoolDay, ClockTime), HashSet<&str>> = HashMap::new();
        let mut labs: HashMap<(SchoolDay, ClockTime), HashSet<&str>> = HashMap::new();
        let mut violations = Vec::new();

        for e in self.entries.iter().filter(|e| e.is_session()) {
            let cell = (e.day, e.start_time);

            if !teachers.entry(cell).or_default().insert(&e.teacher_name) {
                violations.push(Violation {
                    violation_type: ViolationType::TeacherDoubleBooked,
                    day: e.day,
                    start_time: e.start_time,
                    entity: e.teacher_name.clone(),
                    message: format!(
                        "{} is booked for more than one class on {} at {}",
                        e.teacher_name, e.day, e.start_time
                    ),
                });
            }

            if e.is_lab && !labs.entry(cell).or_default().insert(&e.subject) {
                violations.push(Violation {
                    violation_type: ViolationType::LabCollision,
                    day: e.day,
                    start_time: e.start_time,
                    entity: e.subject.clone(),
                    message: format!(
                        "{} lab is used by more than one class on {} at {}",
                        e.subject, e.day, e.start_time
                    ),
                });
            }
        }

        violations
    }
}
