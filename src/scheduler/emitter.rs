//! Schedule emitter: turns per-cell decisions into timetable entries.

use crate::models::{
    ClassGroup, EntryId, SchoolDay, ScheduledEntry, TimeSlot, Timetable, FREE_PERIOD_SUBJECT,
    FREE_PERIOD_TEACHER, RECESS_SUBJECT, RECESS_TEACHER,
};

use super::ledger::{AssignmentKey, SessionKind};

/// Appends one entry per (day, slot, class) cell, numbering them in order.
#[derive(Debug, Default)]
pub struct Emitter {
    entries: Vec<ScheduledEntry>,
    next_id: u32,
}

impl Emitter {
    /// Creates an emitter sized for `cells` entries.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cells),
            next_id: 0,
        }
    }

    /// Emits a recess cell.
    pub fn recess(&mut self, day: SchoolDay, slot: &TimeSlot, class: &ClassGroup) {
        self.push(day, slot, class, RECESS_SUBJECT, RECESS_TEACHER, false);
    }

    /// Emits a cell no eligible assignment could fill.
    pub fn free_period(&mut self, day: SchoolDay, slot: &TimeSlot, class: &ClassGroup) {
        self.push(day, slot, class, FREE_PERIOD_SUBJECT, FREE_PERIOD_TEACHER, false);
    }

    /// Emits a teaching session.
    pub fn session(
        &mut self,
        day: SchoolDay,
        slot: &TimeSlot,
        class: &ClassGroup,
        key: &AssignmentKey,
        kind: SessionKind,
    ) {
        self.push(
            day,
            slot,
            class,
            &key.subject,
            &key.teacher,
            kind == SessionKind::Lab,
        );
    }

    /// Finishes emission.
    pub fn finish(self) -> Timetable {
        Timetable {
            entries: self.entries,
        }
    }

    fn push(
        &mut self,
        day: SchoolDay,
        slot: &TimeSlot,
        class: &ClassGroup,
        subject: &str,
        teacher: &str,
        is_lab: bool,
    ) {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ScheduledEntry {
            id,
            day,
            start_time: slot.start,
            end_time: slot.end,
            subject: subject.to_string(),
            teacher_name: teacher.to_string(),
            class_name: class.name.clone(),
            division: class.division.clone(),
            is_break: slot.is_break,
            is_lab,
        });
    }
}
