//! Verdict translation
//!
//! Turns a homework record into the chat message announcing its new status.

use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Homework, HomeworkStatus};
use crate::error::RecordError;

/// Translates a raw homework record from the API payload
///
/// # Errors
/// [`RecordError::Malformed`] if the record cannot be decoded as a
/// homework, otherwise whatever [`status_message`] reports.
pub fn parse_status(record: &Value) -> Result<String, RecordError> {
    let homework = Homework::deserialize(record).map_err(|e| {
        error!("Failed to decode homework record: {}", e);
        RecordError::Malformed(e.to_string())
    })?;
    status_message(&homework)
}

/// Builds the notification text for a homework
///
/// # Errors
/// - [`RecordError::MissingName`] if the name is absent or empty
/// - [`RecordError::MissingStatus`] if the status is absent
/// - [`RecordError::UnknownStatus`] if the status code is not known
pub fn status_message(homework: &Homework) -> Result<String, RecordError> {
    let name = match homework.homework_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            error!("Homework name is missing or empty");
            return Err(RecordError::MissingName);
        }
    };

    let Some(code) = homework.status.as_deref() else {
        error!("Homework `{}` has no status", name);
        return Err(RecordError::MissingStatus);
    };

    let Some(status) = HomeworkStatus::from_code(code) else {
        error!("Unknown status `{}` for homework `{}`", code, name);
        return Err(RecordError::UnknownStatus(code.to_string()));
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
