use thiserror::Error;
use weekgrid_core::error::CoreError;

/// Errors raised while reading RRULE text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("Rule part {0:?} is missing '='")]
    MissingSeparator(String),

    #[error("Rule has no FREQ part")]
    MissingFrequency,

    #[error("Invalid number {value:?} for {part}")]
    InvalidNumber { part: &'static str, value: String },

    #[error("Invalid weekday code: {0:?}")]
    InvalidWeekday(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
