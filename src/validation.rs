//! Input validation for timetable generation.
//!
//! Checks a [`TimetableConfig`] before any slot is built. Detects:
//! - Zero durations and counts
//! - Pathologically large inputs (bounded work per run)
//! - School days running past midnight
//! - Empty or duplicated class rosters
//! - Assignments naming a class that is not on the roster
//! - Blank names
//! - Names reserved for recess and free-period cells
//!
//! Duplicate assignment keys are not an error: the demand ledger merges
//! them by summing quotas.

use crate::models::{
    TimetableConfig, FREE_PERIOD_SUBJECT, FREE_PERIOD_TEACHER, MINUTES_PER_DAY, RECESS_SUBJECT,
    RECESS_TEACHER,
};
use std::collections::HashSet;
use thiserror::Error;

/// Maximum teaching periods per day.
pub const MAX_LECTURE_COUNT: u32 = 16;
/// Maximum teaching assignments per configuration.
pub const MAX_ASSIGNMENTS: usize = 5_000;
/// Maximum classes per configuration.
pub const MAX_CLASSES: usize = 500;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A duration that must be positive is zero.
    InvalidDuration,
    /// A count or position that must be positive is zero.
    InvalidCount,
    /// An input exceeds the per-run size limits.
    LimitExceeded,
    /// The last slot of the day ends after midnight.
    DayOverflow,
    /// The class roster is empty.
    EmptyRoster,
    /// Two classes share the same name and division.
    DuplicateClass,
    /// An assignment targets a class that is not on the roster.
    UnknownClassReference,
    /// A required name is empty.
    BlankField,
    /// A teacher or subject uses a name that marks recess or free-period cells.
    ReservedName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetable configuration.
///
/// Checks:
/// 1. Lecture duration, lecture count, and break position are positive
/// 2. Lecture count, assignment count, and class count are within limits
/// 3. The day (all periods plus recess) ends by 24:00
/// 4. The class roster is non-empty and has no duplicate divisions
/// 5. Class and assignment names are non-blank
/// 6. No assignment uses a recess or free-period teacher or subject name
/// 7. Every assignment targets a class on the roster
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &TimetableConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.lecture_duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "Lecture duration must be at least one minute",
        ));
    }
    if config.lecture_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "Lecture count must be at least one",
        ));
    }
    if config.break_after == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "Break position is 1-based and must be at least one",
        ));
    }

    if config.lecture_count > MAX_LECTURE_COUNT {
        errors.push(ValidationError::new(
            ValidationErrorKind::LimitExceeded,
            format!(
                "Lecture count {} exceeds the limit of {MAX_LECTURE_COUNT}",
                config.lecture_count
            ),
        ));
    }
    if config.teachers.len() > MAX_ASSIGNMENTS {
        errors.push(ValidationError::new(
            ValidationErrorKind::LimitExceeded,
            format!(
                "{} teaching assignments exceed the limit of {MAX_ASSIGNMENTS}",
                config.teachers.len()
            ),
        ));
    }
    if config.classes.len() > MAX_CLASSES {
        errors.push(ValidationError::new(
            ValidationErrorKind::LimitExceeded,
            format!(
                "{} classes exceed the limit of {MAX_CLASSES}",
                config.classes.len()
            ),
        ));
    }

    let day_end = u64::from(config.start_time.minutes()) + config.day_length_minutes();
    if day_end > u64::from(MINUTES_PER_DAY) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DayOverflow,
            format!(
                "School day starting at {} runs {} minutes past midnight",
                config.start_time,
                day_end - u64::from(MINUTES_PER_DAY)
            ),
        ));
    }

    // Class roster
    if config.classes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Class roster is empty",
        ));
    }

    let mut class_keys = HashSet::new();
    for class in &config.classes {
        if class.name.trim().is_empty() || class.division.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankField,
                format!("Class '{class}' has a blank name or division"),
            ));
        }
        if !class_keys.insert((class.name.as_str(), class.division.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClass,
                format!("Duplicate class: {class}"),
            ));
        }
    }

    // Assignments
    for a in &config.teachers {
        if a.teacher.trim().is_empty() || a.subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankField,
                format!(
                    "Assignment for class {}-{} has a blank teacher or subject",
                    a.target_class, a.target_division
                ),
            ));
        }
        let reserved_teacher = a.teacher == RECESS_TEACHER || a.teacher == FREE_PERIOD_TEACHER;
        let reserved_subject = a.subject == RECESS_SUBJECT || a.subject == FREE_PERIOD_SUBJECT;
        if reserved_teacher || reserved_subject {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                format!(
                    "Assignment '{}' / '{}' uses a name reserved for recess or free periods",
                    a.teacher, a.subject
                ),
            ));
        }
        if !class_keys.contains(&(a.target_class.as_str(), a.target_division.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownClassReference,
                format!(
                    "Assignment '{}' / '{}' references unknown class '{}-{}'",
                    a.teacher, a.subject, a.target_class, a.target_division
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassGroup, ClockTime, TeachingAssignment};

    fn sample_config() -> TimetableConfig {
        TimetableConfig::new(ClockTime::from_hm(8, 30).unwrap(), 45, 6)
            .with_break(3, 15)
            .with_class(ClassGroup::new("10th", "A"))
            .with_class(ClassGroup::new("10th", "B"))
            .with_assignment(TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(5))
            .with_assignment(
                TeachingAssignment::new("Rao", "Physics", "10th", "B")
                    .with_lectures(3)
                    .with_labs(1),
            )
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&sample_config()).is_ok());
    }

    #[test]
    fn test_zero_duration() {
        let mut config = sample_config();
        config.lecture_duration = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidDuration));
    }

    #[test]
    fn test_zero_counts() {
        let mut config = sample_config();
        config.lecture_count = 0;
        config.break_after = 0;

        let errors = validate_config(&config).unwrap_err();
        let count_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidCount)
            .count();
        assert_eq!(count_errors, 2);
    }

    #[test]
    fn test_break_after_last_period_is_valid() {
        let config = sample_config().with_break(10, 15);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_lecture_count_limit() {
        let mut config = sample_config();
        config.lecture_duration = 30;
        config.start_time = ClockTime::MIDNIGHT;
        config.lecture_count = MAX_LECTURE_COUNT + 1;

        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::LimitExceeded));
    }

    #[test]
    fn test_day_overflow() {
        let mut config = sample_config();
        config.start_time = ClockTime::from_hm(20, 0).unwrap();

        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DayOverflow));
    }

    #[test]
    fn test_day_ending_at_midnight_is_valid() {
        // 22:00 + 2 × 45 + 30 = 24:00
        let config = TimetableConfig::new(ClockTime::from_hm(22, 0).unwrap(), 45, 2)
            .with_break(1, 30)
            .with_class(ClassGroup::new("10th", "A"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let mut config = sample_config();
        config.classes.clear();
        config.teachers.clear();

        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyRoster));
    }

    #[test]
    fn test_duplicate_class() {
        let config = sample_config().with_class(ClassGroup::new("10th", "A"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateClass && e.message.contains("10th-A")));
    }

    #[test]
    fn test_unknown_class_reference() {
        let config = sample_config()
            .with_assignment(TeachingAssignment::new("Sen", "Art", "12th", "C").with_lectures(1));

        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownClassReference));
    }

    #[test]
    fn test_blank_fields() {
        let config = sample_config()
            .with_class(ClassGroup::new("11th", " "))
            .with_assignment(TeachingAssignment::new("", "Art", "10th", "A"));

        let errors = validate_config(&config).unwrap_err();
        let blanks = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::BlankField)
            .count();
        assert_eq!(blanks, 2);
    }

    #[test]
    fn test_reserved_names() {
        for assignment in [
            TeachingAssignment::new(FREE_PERIOD_TEACHER, "Art", "10th", "A"),
            TeachingAssignment::new("Sen", FREE_PERIOD_SUBJECT, "10th", "A"),
            TeachingAssignment::new(RECESS_TEACHER, "Art", "10th", "A"),
            TeachingAssignment::new("Sen", RECESS_SUBJECT, "10th", "B"),
        ] {
            let config = sample_config().with_assignment(assignment.with_lectures(1));
            let errors = validate_config(&config).unwrap_err();
            assert!(has_kind(&errors, ValidationErrorKind::ReservedName));
        }

        // Only exact matches are reserved.
        let config = sample_config()
            .with_assignment(TeachingAssignment::new("Nonesuch", "Free Periodicals", "10th", "A"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_assignment_is_not_an_error() {
        let config = sample_config()
            .with_assignment(TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(1));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = sample_config()
            .with_assignment(TeachingAssignment::new("Sen", "Art", "12th", "C"));
        config.lecture_duration = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors[0].to_string().contains("Lecture duration"));
    }
}
