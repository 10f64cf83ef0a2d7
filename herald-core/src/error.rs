//! Error types for payload validation and verdict translation

use thiserror::Error;

/// The status API payload does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Top-level payload is not a JSON object
    #[error("API response is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    /// A required top-level key is absent
    #[error("API response is missing the `{0}` key")]
    MissingKey(&'static str),

    /// `homeworks` is present but is not an array
    #[error("API response `homeworks` is not a list (got {0})")]
    HomeworksNotAList(&'static str),
}

/// A single homework record cannot be translated into a verdict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Record could not be decoded as a homework at all
    #[error("Malformed homework record: {0}")]
    Malformed(String),

    /// `homework_name` is absent or empty
    #[error("Homework name is missing or empty")]
    MissingName,

    /// `status` is absent
    #[error("Homework status is missing")]
    MissingStatus,

    /// `status` is not one of the known codes
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}
