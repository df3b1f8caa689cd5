//! Timetable quality metrics.
//!
//! Computes how well a generated timetable meets its teaching load.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Teaching cells | Cells holding a lecture or lab |
//! | Free periods | Non-recess cells left unfilled |
//! | Unplaced lectures / labs | Quota minus placed sessions, summed over assignments |
//! | Fill rate | Teaching cells / non-recess cells |
//! | Fulfillment | Per-assignment placed vs. quota |

use std::collections::HashMap;

use crate::models::{TeachingAssignment, Timetable};

use super::ledger::{AssignmentKey, DemandLedger};

/// Placed sessions vs. weekly quota for one assignment key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub key: AssignmentKey,
    pub lectures_placed: u32,
    pub lectures_quota: u32,
    pub labs_placed: u32,
    pub labs_quota: u32,
}

impl Fulfillment {
    /// Whether every lecture and lab of the quota was placed.
    pub fn is_complete(&self) -> bool {
        self.lectures_placed >= self.lectures_quota && self.labs_placed >= self.labs_quota
    }

    /// Sessions of the quota left unplaced.
    pub fn unplaced(&self) -> u64 {
        self.unplaced_lectures() + self.unplaced_labs()
    }

    fn unplaced_lectures(&self) -> u64 {
        u64::from(self.lectures_quota.saturating_sub(self.lectures_placed))
    }

    fn unplaced_labs(&self) -> u64 {
        u64::from(self.labs_quota.saturating_sub(self.labs_placed))
    }
}

/// Timetable quality indicators.
#[derive(Debug, Clone)]
pub struct TimetableReport {
    /// All cells in the timetable.
    pub total_cells: usize,
    /// Cells holding a session.
    pub teaching_cells: usize,
    /// Cells holding a lab session.
    pub lab_cells: usize,
    /// Unfilled non-recess cells.
    pub free_periods: usize,
    /// Recess cells.
    pub recess_cells: usize,
    /// Quota lectures not placed.
    pub unplaced_lectures: u64,
    /// Quota labs not placed.
    pub unplaced_labs: u64,
    /// Teaching cells / non-recess cells (0.0..1.0).
    pub fill_rate: f64,
    /// Per-assignment fulfillment, in first-appearance order. Duplicate
    /// input keys are merged by summing quotas; inert assignments are omitted.
    pub fulfillment: Vec<Fulfillment>,
}

impl TimetableReport {
    /// Computes the report for a timetable and the assignments it was
    /// generated from.
    pub fn calculate(timetable: &Timetable, assignments: &[TeachingAssignment]) -> Self {
        let quotas = DemandLedger::from_assignments(assignments);

        let mut placed: HashMap<AssignmentKey, (u32, u32)> = HashMap::new();
        let mut teaching_cells = 0;
        let mut lab_cells = 0;
        let mut free_periods = 0;
        let mut recess_cells = 0;

        for e in &timetable.entries {
            if e.is_recess() {
                recess_cells += 1;
            } else if e.is_free_period() {
                free_periods += 1;
            } else {
                teaching_cells += 1;
                let key = AssignmentKey {
                    teacher: e.teacher_name.clone(),
                    subject: e.subject.clone(),
                    class_name: e.class_name.clone(),
                    division: e.division.clone(),
                };
                let counts = placed.entry(key).or_insert((0, 0));
                if e.is_lab {
                    lab_cells += 1;
                    counts.1 += 1;
                } else {
                    counts.0 += 1;
                }
            }
        }

        let fulfillment: Vec<Fulfillment> = quotas
            .entries()
            .iter()
            .map(|q| {
                let (lectures_placed, labs_placed) =
                    placed.get(&q.key).copied().unwrap_or((0, 0));
                Fulfillment {
                    key: q.key.clone(),
                    lectures_placed,
                    lectures_quota: q.lectures_remaining,
                    labs_placed,
                    labs_quota: q.labs_remaining,
                }
            })
            .collect();

        let unplaced_lectures = fulfillment
            .iter()
            .map(Fulfillment::unplaced_lectures)
            .sum();
        let unplaced_labs = fulfillment
            .iter()
            .map(Fulfillment::unplaced_labs)
            .sum();

        let schedulable = teaching_cells + free_periods;
        let fill_rate = if schedulable == 0 {
            0.0
        } else {
            teaching_cells as f64 / schedulable as f64
        };

        Self {
            total_cells: timetable.entry_count(),
            teaching_cells,
            lab_cells,
            free_periods,
            recess_cells,
            unplaced_lectures,
            unplaced_labs,
            fill_rate,
            fulfillment,
        }
    }

    /// Whether all demand was placed.
    pub fn is_fully_satisfied(&self) -> bool {
        self.unplaced_lectures == 0 && self.unplaced_labs == 0
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_unplaced: u64, min_fill_rate: f64) -> bool {
        self.unplaced_lectures + self.unplaced_labs <= max_unplaced
            && self.fill_rate >= min_fill_rate
    }
}
