//! Weekly school timetable allocation.
//!
//! Turns a roster of teaching assignments (teacher, subject, class
//! division, weekly lecture and lab quotas) into a conflict-free weekly
//! grid for six school days, with a recess in every day.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TeachingAssignment`, `ClassGroup`,
//!   `TimeSlot`, `TimetableConfig`, `ScheduledEntry`, `Timetable`
//! - **`scheduler`**: Slot builder, demand ledger, greedy allocator,
//!   `TimetableGenerator`, and `TimetableReport`
//! - **`validation`**: Configuration checks (zero counts, unknown classes,
//!   duplicate classes, size limits)
//! - **`error`**: `TimetableError`
//!
//! # Guarantees
//!
//! Every generated timetable holds exactly one entry per (day, slot, class).
//! No teacher teaches two classes in one slot, no subject lab hosts two
//! classes in one slot, and no assignment is placed beyond its quota.
//! Demand that cannot be placed leaves free periods; it is not an error.
//!
//! # Example
//!
//! ```
//! use u_timetable::models::TimetableConfig;
//! use u_timetable::scheduler::TimetableGenerator;
//!
//! let config = TimetableConfig::from_json(r#"{
//!     "startTime": "08:30", "lectureDuration": 45, "lectureCount": 2,
//!     "breakAfter": 1, "breakDuration": 15,
//!     "teachers": [{"name": "Prof. X", "subject": "Math", "targetClass": "10th",
//!                   "targetDivision": "A", "lecturesPerWeek": 2, "labsPerWeek": 0}],
//!     "classes": [{"name": "10th", "division": "A"}]
//! }"#)?;
//!
//! let timetable = TimetableGenerator::new().generate_seeded(&config, 1)?;
//! assert_eq!(timetable.entry_count(), 6 * 3);
//! assert_eq!(timetable.for_teacher("Prof. X").len(), 2);
//! # Ok::<(), u_timetable::TimetableError>(())
//! ```

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::TimetableError;
