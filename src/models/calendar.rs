//! Clock times, school days, and daily time slots.
//!
//! # Time Model
//! All times are whole minutes since midnight of a school day. There is
//! no date, timezone, or rollover handling: a school day is expected to
//! finish by 24:00, which validation enforces.
//!
//! Slots carry no day identity. The same daily slot sequence is shared by
//! every [`SchoolDay`] of the week.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in one day. `ClockTime` values up to and including this are valid.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, in minutes since midnight.
///
/// Parses from and renders to 24-hour `HH:MM`. `24:00` is accepted as
/// the end of a day that finishes at midnight; no later time parses.
///
/// ```
/// use u_timetable::models::ClockTime;
///
/// let t: ClockTime = "08:30".parse().unwrap();
/// assert_eq!(t.minutes(), 510);
/// assert_eq!(t.plus_minutes(45).to_string(), "09:15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
}

/// Error returned when a string is not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time '{input}': expected 24-hour HH:MM")]
pub struct ParseClockTimeError {
    input: String,
}

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Creates a time from hours and minutes.
    ///
    /// Returns `None` if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Exact-minute addition. May run past midnight; callers validate.
    #[inline]
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self {
            minutes: self.minutes.saturating_add(minutes),
        }
    }

    /// Whether this time still falls within the same day (at most 24:00).
    #[inline]
    pub fn is_within_day(&self) -> bool {
        self.minutes <= MINUTES_PER_DAY
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError {
            input: s.to_string(),
        };

        // End of a day that finishes exactly at midnight.
        if s == "24:00" {
            return Ok(Self {
                minutes: MINUTES_PER_DAY,
            });
        }

        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(h) || !two_digits(m) {
            return Err(err());
        }

        let hour: u32 = h.parse().map_err(|_| err())?;
        let minute: u32 = m.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A teaching day. The week runs Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl SchoolDay {
    /// The six school days, in order.
    pub const WEEK: [SchoolDay; 6] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
    ];

    /// Day name, e.g. `"Monday"`.
    pub fn name(&self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
            SchoolDay::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time interval [start, end) within a school day.
///
/// Either a teaching period or the recess (`is_break`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
    /// Whether this slot is the recess.
    pub is_break: bool,
}

impl TimeSlot {
    /// Creates a teaching period of `minutes` starting at `start`.
    pub fn period(start: ClockTime, minutes: u32) -> Self {
        Self {
            start,
            end: start.plus_minutes(minutes),
            is_break: false,
        }
    }

    /// Creates a recess of `minutes` starting at `start`.
    pub fn recess(start: ClockTime, minutes: u32) -> Self {
        Self {
            start,
            end: start.plus_minutes(minutes),
            is_break: true,
        }
    }

    /// Duration of this slot in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }
}
