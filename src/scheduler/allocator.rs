//! Greedy, lab-first weekly allocator.
//!
//! # Algorithm
//!
//! For each day, for each slot, for each class (in roster order):
//! 1. Recess slots emit a recess cell for every class; nothing is contested.
//! 2. Otherwise, collect the class's assignments that are *eligible*: the
//!    teacher is not yet teaching in this slot, and either a lecture remains
//!    or a lab remains whose subject lab is free in this slot.
//! 3. No eligible assignment → free period. The cell is never revisited.
//! 4. Prefer lab placement: if any eligible assignment can run its lab now,
//!    pick one uniformly at random among those and place it as a lab.
//!    Otherwise pick uniformly at random among all eligible assignments and
//!    place a lecture.
//! 5. Consume the session from the ledger, mark the teacher busy, and mark
//!    the subject lab busy if a lab was placed.
//!
//! Labs go first because a subject's lab is shared by the whole school,
//! while a lecture is only limited by its teacher. The random pick spreads
//! ties fairly across assignments; pass a seeded generator for reproducible
//! output.
//!
//! This is a single pass without backtracking. Under tight quotas some
//! demand may remain unplaced while classes receive free periods.
//!
//! # Complexity
//! O(d * s * c * a) where d=days, s=slots, c=classes, a=assignments per class.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::models::{ClassGroup, SchoolDay, TimeSlot, Timetable};

use super::emitter::Emitter;
use super::ledger::{DemandLedger, SessionKind};

/// Conflict state of one (day, slot).
#[derive(Debug, Default)]
struct SlotConflicts {
    busy_teachers: HashSet<String>,
    busy_labs: HashSet<String>,
}

impl SlotConflicts {
    fn occupy(&mut self, teacher: &str, subject: &str, kind: SessionKind) {
        self.busy_teachers.insert(teacher.to_string());
        if kind == SessionKind::Lab {
            self.busy_labs.insert(subject.to_string());
        }
    }
}

/// Single-pass greedy allocator over a fixed slot sequence and class roster.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_timetable::models::{ClassGroup, ClockTime, TeachingAssignment, TimetableConfig};
/// use u_timetable::scheduler::{build_daily_slots, DemandLedger, GreedyAllocator};
///
/// let config = TimetableConfig::new(ClockTime::from_hm(9, 0).unwrap(), 40, 4)
///     .with_break(2, 20);
/// let slots = build_daily_slots(&config);
/// let classes = vec![ClassGroup::new("10th", "A")];
/// let mut ledger = DemandLedger::from_assignments(&[
///     TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(3),
/// ]);
///
/// let allocator = GreedyAllocator::new(&slots, &classes);
/// let timetable = allocator.allocate(&mut ledger, &mut StdRng::seed_from_u64(7));
///
/// assert_eq!(timetable.entry_count(), 6 * 5);
/// assert_eq!(timetable.session_count(), 3);
/// assert_eq!(ledger.remaining_sessions(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyAllocator<'a> {
    slots: &'a [TimeSlot],
    classes: &'a [ClassGroup],
}

impl<'a> GreedyAllocator<'a> {
    /// Creates an allocator for a daily slot sequence and class roster.
    pub fn new(slots: &'a [TimeSlot], classes: &'a [ClassGroup]) -> Self {
        Self { slots, classes }
    }

    /// Number of cells in the weekly grid.
    pub fn cell_count(&self) -> usize {
        SchoolDay::WEEK.len() * self.slots.len() * self.classes.len()
    }

    /// Fills every (day, slot, class) cell, consuming demand from `ledger`.
    pub fn allocate<R: Rng + ?Sized>(&self, ledger: &mut DemandLedger, rng: &mut R) -> Timetable {
        let demand_by_class: Vec<Vec<usize>> = self
            .classes
            .iter()
            .map(|class| ledger.indices_for_class(class))
            .collect();

        let mut emitter = Emitter::with_capacity(self.cell_count());

        for day in SchoolDay::WEEK {
            let mut placed = 0usize;
            let mut free = 0usize;

            for slot in self.slots {
                if slot.is_break {
                    for class in self.classes {
                        emitter.recess(day, slot, class);
                    }
                    continue;
                }

                let mut conflicts = SlotConflicts::default();

                for (class, candidates) in self.classes.iter().zip(&demand_by_class) {
                    match pick(ledger, candidates, &conflicts, rng) {
                        Some((idx, kind)) => {
                            ledger.consume(idx, kind);
                            let key = &ledger.entries()[idx].key;
                            trace!(%day, start = %slot.start, %class, %key, ?kind, "placed session");
                            conflicts.occupy(&key.teacher, &key.subject, kind);
                            emitter.session(day, slot, class, key, kind);
                            placed += 1;
                        }
                        None => {
                            emitter.free_period(day, slot, class);
                            free += 1;
                        }
                    }
                }
            }

            debug!(%day, placed, free, "allocated day");
        }

        emitter.finish()
    }
}

/// Selects the winning assignment for one class in one slot.
///
/// Returns the ledger index and the kind of session to place, or `None`
/// if no candidate is eligible.
fn pick<R: Rng + ?Sized>(
    ledger: &DemandLedger,
    candidates: &[usize],
    conflicts: &SlotConflicts,
    rng: &mut R,
) -> Option<(usize, SessionKind)> {
    let entries = ledger.entries();
    let lab_ready = |idx: usize| {
        let e = &entries[idx];
        e.labs_remaining > 0 && !conflicts.busy_labs.contains(&e.key.subject)
    };

    let eligible: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&idx| {
            let e = &entries[idx];
            !conflicts.busy_teachers.contains(&e.key.teacher)
                && (e.lectures_remaining > 0 || lab_ready(idx))
        })
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let labs: Vec<usize> = eligible.iter().copied().filter(|&idx| lab_ready(idx)).collect();
    if let Some(&idx) = labs.choose(rng) {
        return Some((idx, SessionKind::Lab));
    }

    // Every remaining eligible candidate has a lecture left.
    eligible
        .choose(rng)
        .map(|&idx| (idx, SessionKind::Lecture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, TeachingAssignment, TimetableConfig};
    use crate::scheduler::build_daily_slots;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn slots(periods: u32) -> Vec<TimeSlot> {
        let config =
            TimetableConfig::new(ClockTime::from_hm(8, 0).unwrap(), 45, periods).with_break(1, 15);
        build_daily_slots(&config)
    }

    fn run(
        periods: u32,
        classes: &[ClassGroup],
        assignments: &[TeachingAssignment],
        seed: u64,
    ) -> (Timetable, DemandLedger) {
        let slots = slots(periods);
        let mut ledger = DemandLedger::from_assignments(assignments);
        let mut rng = StdRng::seed_from_u64(seed);
        let timetable = GreedyAllocator::new(&slots, classes).allocate(&mut ledger, &mut rng);
        (timetable, ledger)
    }

    #[test]
    fn test_full_grid_coverage() {
        let classes = vec![ClassGroup::new("10th", "A"), ClassGroup::new("10th", "B")];
        let (t, _) = run(5, &classes, &[], 1);
        assert_eq!(t.entry_count(), 6 * 6 * 2);
        assert_eq!(t.free_period_count(), 6 * 5 * 2);
        assert_eq!(t.entries.iter().filter(|e| e.is_recess()).count(), 6 * 2);
    }

    #[test]
    fn test_quota_consumed_exactly() {
        let classes = vec![ClassGroup::new("10th", "A")];
        let assignments = vec![TeachingAssignment::new("Iyer", "Math", "10th", "A")
            .with_lectures(4)
            .with_labs(2)];
        let (t, ledger) = run(3, &classes, &assignments, 3);

        assert_eq!(t.session_count(), 6);
        assert_eq!(t.entries.iter().filter(|e| e.is_lab).count(), 2);
        assert_eq!(ledger.remaining_sessions(), 0);
    }

    #[test]
    fn test_labs_placed_first() {
        let classes = vec![ClassGroup::new("10th", "A")];
        let assignments = vec![
            TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(20),
            TeachingAssignment::new("Rao", "Physics", "10th", "A").with_labs(2),
        ];

        for seed in 0..10 {
            let (t, _) = run(3, &classes, &assignments, seed);
            let first_two: Vec<_> = t.entries.iter().filter(|e| e.is_session()).take(2).collect();
            assert!(first_two.iter().all(|e| e.is_lab && e.subject == "Physics"));
        }
    }

    #[test]
    fn test_teacher_not_double_booked() {
        let classes = vec![ClassGroup::new("10th", "A"), ClassGroup::new("10th", "B")];
        let assignments = vec![
            TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(30),
            TeachingAssignment::new("Iyer", "Math", "10th", "B").with_lectures(30),
        ];
        let (t, _) = run(4, &classes, &assignments, 11);

        assert!(t.conflicts().is_empty());
        // One teacher, one class per slot: 6 days × 4 periods.
        assert_eq!(t.session_count(), 24);
    }

    #[test]
    fn test_shared_lab_blocks_second_class() {
        let classes = vec![ClassGroup::new("10th", "A"), ClassGroup::new("10th", "B")];
        let assignments = vec![
            TeachingAssignment::new("Rao", "Physics", "10th", "A").with_labs(1),
            TeachingAssignment::new("Sen", "Physics", "10th", "B").with_labs(1),
        ];
        let (t, ledger) = run(2, &classes, &assignments, 5);

        let labs: Vec<_> = t.entries.iter().filter(|e| e.is_lab).collect();
        assert_eq!(labs.len(), 2);
        assert_ne!((labs[0].day, labs[0].start_time), (labs[1].day, labs[1].start_time));
        assert!(t.conflicts().is_empty());
        assert_eq!(ledger.remaining_sessions(), 0);
    }

    #[test]
    fn test_busy_lab_falls_back_to_lecture() {
        let classes = vec![ClassGroup::new("10th", "A"), ClassGroup::new("10th", "B")];
        let assignments = vec![
            TeachingAssignment::new("Rao", "Physics", "10th", "A").with_labs(1),
            TeachingAssignment::new("Sen", "Physics", "10th", "B")
                .with_lectures(1)
                .with_labs(1),
        ];
        let (t, _) = run(2, &classes, &assignments, 9);

        // First teaching slot: 10th-A takes the Physics lab, so 10th-B gets a lecture.
        let first: Vec<_> = t.entries.iter().take(2).collect();
        assert!(first[0].is_lab && first[0].class_name == "10th" && first[0].division == "A");
        assert_eq!(first[1].teacher_name, "Sen");
        assert!(!first[1].is_lab);
    }

    #[test]
    fn test_inert_assignment_never_placed() {
        let classes = vec![ClassGroup::new("10th", "A")];
        let assignments = vec![
            TeachingAssignment::new("Ghost", "Latin", "10th", "A"),
            TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(3),
        ];
        let (t, _) = run(3, &classes, &assignments, 2);
        assert!(t.entries.iter().all(|e| e.teacher_name != "Ghost"));
    }

    #[test]
    fn test_unknown_class_demand_unused() {
        let classes = vec![ClassGroup::new("10th", "A")];
        let assignments = vec![TeachingAssignment::new("Iyer", "Math", "12th", "Z").with_lectures(3)];
        let (t, ledger) = run(2, &classes, &assignments, 2);
        assert_eq!(t.session_count(), 0);
        assert_eq!(ledger.remaining_lectures(), 3);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let classes = vec![ClassGroup::new("10th", "A"), ClassGroup::new("10th", "B")];
        let assignments = vec![
            TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(5),
            TeachingAssignment::new("Rao", "Physics", "10th", "A").with_lectures(3).with_labs(1),
            TeachingAssignment::new("Iyer", "Math", "10th", "B").with_lectures(5),
            TeachingAssignment::new("Sen", "Chemistry", "10th", "B").with_labs(2),
        ];
        let (a, _) = run(5, &classes, &assignments, 42);
        let (b, _) = run(5, &classes, &assignments, 42);
        assert_eq!(a, b);
    }
}
