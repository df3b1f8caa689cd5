//! Timetable domain models.
//!
//! Provides the data types for describing a school's weekly teaching load
//! and the generated weekly grid.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term | School term |
//! |-------------|-----------------|-------------|
//! | TeachingAssignment | Demand | Teacher's weekly load for one class |
//! | ClassGroup | Cohort | Class division |
//! | TimeSlot | Time bucket | Period / recess |
//! | Timetable | Schedule | Weekly timetable |

mod assignment;
mod calendar;
mod class_group;
mod config;
mod timetable;

pub use assignment::TeachingAssignment;
pub use calendar::{ClockTime, ParseClockTimeError, SchoolDay, TimeSlot, MINUTES_PER_DAY};
pub use class_group::ClassGroup;
pub use config::TimetableConfig;
pub use timetable::{
    EntryId, ScheduledEntry, Timetable, Violation, ViolationType, FREE_PERIOD_SUBJECT,
    FREE_PERIOD_TEACHER, RECESS_SUBJECT, RECESS_TEACHER,
};
