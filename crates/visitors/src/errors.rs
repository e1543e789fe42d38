use thiserror::Error;

/// Errors raised when parsing or validating dashboard domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitorError {
    #[error("Unknown day: {0:?} (expected Saturday or Sunday)")]
    UnknownDay(String),

    #[error("Hour out of range: {0} (expected 0-23)")]
    InvalidHour(u8),

    #[error("Unknown hour label: {0:?}")]
    UnknownHourLabel(String),

    #[error("Unknown age group: {0:?}")]
    UnknownAgeGroup(String),
}
