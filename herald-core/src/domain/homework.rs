//! Homework domain types

use serde::Deserialize;

/// A homework record as reported by the status API
///
/// Both fields stay optional here; the API is not trusted to send them and
/// the verdict translation rejects records that lack either one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Homework {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(name.into()),
            status: Some(status.into()),
        }
    }
}

/// Review status of a homework
///
/// Only these three codes are known; any other code is a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Looks up a status by its wire code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Wire code used by the status API
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
