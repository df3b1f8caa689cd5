//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by timetable generation.
///
/// Unsatisfiable demand is not an error: it shows up as free periods
/// in the generated timetable.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// The configuration failed boundary validation.
    #[error("invalid timetable configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// A configuration document could not be parsed.
    #[error("failed to parse timetable configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TimetableError {
    /// Validation problems, if this is a configuration error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            TimetableError::InvalidConfig(errors) => errors,
            TimetableError::Parse(_) => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
