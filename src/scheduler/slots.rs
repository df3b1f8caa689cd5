//! Daily slot builder.
//!
//! Expands the period layout of a configuration into the ordered slot
//! sequence shared by every day of the week.

use crate::models::{TimeSlot, TimetableConfig};

/// Builds the daily slot sequence.
///
/// Produces `lecture_count` teaching periods of `lecture_duration` minutes
/// back to back from `start_time`, with one recess of `break_duration`
/// minutes inserted after period `break_after`. When `break_after` is at or
/// beyond the last period, the recess is appended after the last period.
///
/// Always returns `lecture_count + 1` slots with no gaps and no overlap.
/// Deterministic: identical configurations yield identical sequences.
///
/// ```
/// use u_timetable::models::{ClockTime, TimetableConfig};
/// use u_timetable::scheduler::build_daily_slots;
///
/// let config = TimetableConfig::new(ClockTime::from_hm(8, 30).unwrap(), 45, 2)
///     .with_break(1, 15);
/// let slots = build_daily_slots(&config);
///
/// let times: Vec<String> = slots
///     .iter()
///     .map(|s| format!("{}-{}", s.start, s.end))
///     .collect();
/// assert_eq!(times, ["08:30-09:15", "09:15-09:30", "09:30-10:15"]);
/// assert!(slots[1].is_break);
/// ```
pub fn build_daily_slots(config: &TimetableConfig) -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(config.slots_per_day() as usize);
    let mut cursor = config.start_time;
    let mut break_placed = false;

    for period in 1..=config.lecture_count {
        let slot = TimeSlot::period(cursor, config.lecture_duration);
        cursor = slot.end;
        slots.push(slot);

        if period == config.break_after {
            let recess = TimeSlot::recess(cursor, config.break_duration);
            cursor = recess.end;
            slots.push(recess);
            break_placed = true;
        }
    }

    if !break_placed {
        slots.push(TimeSlot::recess(cursor, config.break_duration));
    }

    slots
}
