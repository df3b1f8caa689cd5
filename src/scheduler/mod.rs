//! Weekly timetable generation pipeline and quality metrics.
//!
//! # Pipeline
//!
//! 1. [`build_daily_slots`] expands the period layout into the daily slot
//!    sequence shared by all six school days.
//! 2. [`DemandLedger`] is seeded from the teaching assignments.
//! 3. [`GreedyAllocator`] fills every (day, slot, class) cell, consuming
//!    demand from the ledger.
//! 4. The emitter records each cell as a [`ScheduledEntry`](crate::models::ScheduledEntry).
//!
//! [`TimetableGenerator`] runs the whole pipeline behind validation and an
//! [`AllocationStrategy`].
//!
//! # Algorithm
//!
//! The allocator is a greedy, lab-first, non-backtracking heuristic. It is
//! not optimal, but it never breaks the teacher and lab conflict rules and
//! never exceeds a quota.
//!
//! # Report
//!
//! [`TimetableReport`] computes cell counts, per-assignment fulfillment,
//! unplaced demand, and fill rate.

mod allocator;
mod emitter;
mod generator;
mod ledger;
mod report;
mod slots;

pub use allocator::GreedyAllocator;
pub use emitter::Emitter;
pub use generator::{AllocationStrategy, TimetableGenerator};
pub use ledger::{AssignmentKey, DemandLedger, LedgerEntry, SessionKind};
pub use report::{Fulfillment, TimetableReport};
pub use slots::build_daily_slots;
