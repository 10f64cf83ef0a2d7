//! Notification gate
//!
//! Suppresses a notification whose text is identical to the last one
//! delivered. Status updates and failure reports go through the same gate,
//! so an error repeating verbatim every cycle is reported once.
//!
//! Comparison is exact. A failure text that embeds something volatile
//! (a timestamp, a request id) will never be suppressed.

use crate::error::CycleError;

/// Returns `true` if `candidate` differs from the last delivered text
pub fn should_send(candidate: &str, last_sent: &str) -> bool {
    candidate != last_sent
}

/// Chat text reporting a failed poll cycle
pub fn failure_message(error: &CycleError) -> String {
    format!("Сбой в работе программы: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::SchemaError;

    #[test]
    fn test_should_send_new_message() {
        assert!(should_send("status changed", ""));
        assert!(should_send("status changed", "previous status"));
    }

    #[test]
    fn test_should_not_resend_identical_message() {
        assert!(!should_send("status changed", "status changed"));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(should_send("status changed ", "status changed"));
        assert!(should_send("Status changed", "status changed"));
    }

    #[test]
    fn test_failure_message() {
        let error = CycleError::from(SchemaError::MissingKey("homeworks"));
        assert_eq!(
            failure_message(&error),
            "Сбой в работе программы: API response is missing the `homeworks` key"
        );
    }
}
