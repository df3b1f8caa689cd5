//! Timetable generation input.

use serde::{Deserialize, Serialize};

use super::{ClassGroup, ClockTime, TeachingAssignment};
use crate::error::TimetableError;

/// Everything needed to generate a weekly timetable.
///
/// # JSON Form
///
/// ```
/// use u_timetable::models::TimetableConfig;
///
/// let config = TimetableConfig::from_json(r#"{
///     "startTime": "08:30",
///     "lectureDuration": 45,
///     "lectureCount": 2,
///     "breakAfter": 1,
///     "breakDuration": 15,
///     "teachers": [
///         {"name": "Prof. X", "subject": "Math", "targetClass": "10th",
///          "targetDivision": "A", "lecturesPerWeek": 2, "labsPerWeek": 0}
///     ],
///     "classes": [{"name": "10th", "division": "A"}]
/// }"#).unwrap();
///
/// assert_eq!(config.lecture_count, 2);
/// assert_eq!(config.teachers[0].teacher, "Prof. X");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableConfig {
    /// Start of the first period.
    pub start_time: ClockTime,
    /// Length of each teaching period (minutes).
    pub lecture_duration: u32,
    /// Teaching periods per day.
    pub lecture_count: u32,
    /// 1-based period after which the recess falls.
    pub break_after: u32,
    /// Length of the recess (minutes). May be zero.
    #[serde(default)]
    pub break_duration: u32,
    /// Teaching load to place.
    #[serde(default)]
    pub teachers: Vec<TeachingAssignment>,
    /// Class roster.
    #[serde(default)]
    pub classes: Vec<ClassGroup>,
}

impl TimetableConfig {
    /// Creates a configuration with the recess after the first period,
    /// a zero-length recess, and empty rosters.
    pub fn new(start_time: ClockTime, lecture_duration: u32, lecture_count: u32) -> Self {
        Self {
            start_time,
            lecture_duration,
            lecture_count,
            break_after: 1,
            break_duration: 0,
            teachers: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Places a recess of `duration` minutes after period `after`.
    pub fn with_break(mut self, after: u32, duration: u32) -> Self {
        self.break_after = after;
        self.break_duration = duration;
        self
    }

    /// Adds a teaching assignment.
    pub fn with_assignment(mut self, assignment: TeachingAssignment) -> Self {
        self.teachers.push(assignment);
        self
    }

    /// Adds a class to the roster.
    pub fn with_class(mut self, class: ClassGroup) -> Self {
        self.classes.push(class);
        self
    }

    /// Slots per day: every teaching period plus the recess.
    pub fn slots_per_day(&self) -> u32 {
        self.lecture_count.saturating_add(1)
    }

    /// Minutes from the first period's start to the end of the day.
    pub fn day_length_minutes(&self) -> u64 {
        u64::from(self.lecture_duration) * u64::from(self.lecture_count)
            + u64::from(self.break_duration)
    }
}
