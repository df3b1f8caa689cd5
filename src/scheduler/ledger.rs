//! Demand ledger: remaining weekly sessions per teaching assignment.
//!
//! The ledger is the only mutable state of a generation run. It is built
//! fresh from the input assignments for each run and dropped afterwards.
//!
//! # Duplicate Keys
//! Assignments sharing the same (teacher, subject, class, division) key
//! are merged by summing their quotas.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::models::{ClassGroup, TeachingAssignment};

/// Identity of a teaching assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentKey {
    pub teacher: String,
    pub subject: String,
    pub class_name: String,
    pub division: String,
}

impl AssignmentKey {
    /// Key of an assignment.
    pub fn of(assignment: &TeachingAssignment) -> Self {
        Self {
            teacher: assignment.teacher.clone(),
            subject: assignment.subject.clone(),
            class_name: assignment.target_class.clone(),
            division: assignment.target_division.clone(),
        }
    }
}

impl fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.teacher, self.subject, self.class_name, self.division
        )
    }
}

/// Kind of session placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Plain classroom session.
    Lecture,
    /// Session that also occupies the subject's lab.
    Lab,
}

/// Remaining sessions for one assignment key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub key: AssignmentKey,
    pub lectures_remaining: u32,
    pub labs_remaining: u32,
}

/// Per-run record of remaining sessions, keyed by assignment.
///
/// Entries keep the order in which their keys first appear in the input,
/// so a seeded run is reproducible.
///
/// ```
/// use u_timetable::models::TeachingAssignment;
/// use u_timetable::scheduler::DemandLedger;
///
/// let ledger = DemandLedger::from_assignments(&[
///     TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(3),
///     TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(2).with_labs(1),
/// ]);
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.entries()[0].lectures_remaining, 5);
/// assert_eq!(ledger.entries()[0].labs_remaining, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DemandLedger {
    entries: Vec<LedgerEntry>,
    index: HashMap<AssignmentKey, usize>,
}

impl DemandLedger {
    /// Seeds a ledger from the input assignments, merging duplicate keys.
    /// Inert assignments carry no demand and get no entry.
    pub fn from_assignments(assignments: &[TeachingAssignment]) -> Self {
        let mut ledger = Self::default();

        for a in assignments {
            if a.is_inert() {
                trace!(teacher = %a.teacher, subject = %a.subject, "skipped inert assignment");
                continue;
            }
            let key = AssignmentKey::of(a);
            match ledger.index.get(&key) {
                Some(&idx) => {
                    let entry = &mut ledger.entries[idx];
                    entry.lectures_remaining =
                        entry.lectures_remaining.saturating_add(a.lectures_per_week);
                    entry.labs_remaining = entry.labs_remaining.saturating_add(a.labs_per_week);
                    debug!(
                        key = %entry.key,
                        lectures = entry.lectures_remaining,
                        labs = entry.labs_remaining,
                        "merged duplicate teaching assignment"
                    );
                }
                None => {
                    ledger.index.insert(key.clone(), ledger.entries.len());
                    ledger.entries.push(LedgerEntry {
                        key,
                        lectures_remaining: a.lectures_per_week,
                        labs_remaining: a.labs_per_week,
                    });
                }
            }
        }

        ledger
    }

    /// All entries, in first-appearance order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of distinct assignment keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a key.
    pub fn get(&self, key: &AssignmentKey) -> Option<&LedgerEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Indices of the entries targeting a class division.
    pub fn indices_for_class(&self, class: &ClassGroup) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| class.matches(&e.key.class_name, &e.key.division))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Consumes one session of `kind` from the entry at `idx`.
    ///
    /// Saturates at zero; the allocator only consumes sessions it has
    /// checked are available.
    pub fn consume(&mut self, idx: usize, kind: SessionKind) {
        let entry = &mut self.entries[idx];
        match kind {
            SessionKind::Lecture => {
                entry.lectures_remaining = entry.lectures_remaining.saturating_sub(1)
            }
            SessionKind::Lab => entry.labs_remaining = entry.labs_remaining.saturating_sub(1),
        }
    }

    /// Lectures not yet placed, across all entries.
    pub fn remaining_lectures(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.lectures_remaining))
            .sum()
    }

    /// Labs not yet placed, across all entries.
    pub fn remaining_labs(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.labs_remaining)).sum()
    }

    /// Sessions of either kind not yet placed.
    pub fn remaining_sessions(&self) -> u64 {
        self.remaining_lectures() + self.remaining_labs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assignments() -> Vec<TeachingAssignment> {
        vec![
            TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(4),
            TeachingAssignment::new("Rao", "Physics", "10th", "A")
                .with_lectures(2)
                .with_labs(1),
            TeachingAssignment::new("Rao", "Physics", "10th", "B").with_labs(2),
        ]
    }

    #[test]
    fn test_seeded_from_quotas() {
        let ledger = DemandLedger::from_assignments(&sample_assignments());
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.remaining_lectures(), 6);
        assert_eq!(ledger.remaining_labs(), 3);
        assert_eq!(ledger.remaining_sessions(), 9);

        let key = AssignmentKey::of(&sample_assignments()[1]);
        let entry = ledger.get(&key).unwrap();
        assert_eq!(entry.lectures_remaining, 2);
        assert_eq!(entry.labs_remaining, 1);
    }

    #[test]
    fn test_duplicates_merge_by_sum() {
        let mut input = sample_assignments();
        input.push(TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(1).with_labs(2));

        let ledger = DemandLedger::from_assignments(&input);
        assert_eq!(ledger.len(), 3);
        let entry = &ledger.entries()[0];
        assert_eq!(entry.lectures_remaining, 5);
        assert_eq!(entry.labs_remaining, 2);
    }

    #[test]
    fn test_key_display() {
        let key = AssignmentKey::of(&sample_assignments()[0]);
        assert_eq!(key.to_string(), "Iyer|Math|10th|A");
    }

    #[test]
    fn test_indices_for_class() {
        let ledger = DemandLedger::from_assignments(&sample_assignments());
        assert_eq!(ledger.indices_for_class(&ClassGroup::new("10th", "A")), vec![0, 1]);
        assert_eq!(ledger.indices_for_class(&ClassGroup::new("10th", "B")), vec![2]);
        assert!(ledger.indices_for_class(&ClassGroup::new("9th", "A")).is_empty());
    }

    #[test]
    fn test_consume() {
        let mut ledger = DemandLedger::from_assignments(&sample_assignments());
        ledger.consume(1, SessionKind::Lab);
        ledger.consume(1, SessionKind::Lecture);
        assert_eq!(ledger.entries()[1].labs_remaining, 0);
        assert_eq!(ledger.entries()[1].lectures_remaining, 1);

        // Saturates
        ledger.consume(1, SessionKind::Lab);
        assert_eq!(ledger.entries()[1].labs_remaining, 0);
        assert_eq!(ledger.remaining_sessions(), 4 + 1 + 2);
    }

    #[test]
    fn test_inert_assignments_skipped() {
        let mut assignments = vec![TeachingAssignment::new("Ghost", "Latin", "10th", "A")];
        assignments.extend(sample_assignments());
        assignments.push(TeachingAssignment::new("Iyer", "Math", "10th", "A"));

        let ledger = DemandLedger::from_assignments(&assignments);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.entries()[0].key.teacher, "Iyer");
        assert_eq!(ledger.entries()[0].lectures_remaining, 4);
        assert!(ledger
            .get(&AssignmentKey::of(&assignments[0]))
            .is_none());
    }

    #[test]
    fn test_empty() {
        let ledger = DemandLedger::from_assignments(&[]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.remaining_sessions(), 0);
    }
}
