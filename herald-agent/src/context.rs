//! Poll context
//!
//! Holds the only state that survives between poll cycles: the cursor
//! sent as `from_date` and the text of the last delivered notification.
//! Owned by the poller; nothing else reads or writes it.

/// State carried from one poll cycle to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollContext {
    /// Lower bound (unix seconds) of the next query window
    cursor: i64,

    /// Text of the most recently delivered notification
    last_sent: String,
}

impl PollContext {
    /// Creates a context with the given cursor and nothing sent yet
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_sent: String::new(),
        }
    }

    /// Creates a context whose cursor is the current wall-clock time
    pub fn starting_now() -> Self {
        Self::new(now_timestamp())
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Cursor to send with the next request
    ///
    /// A zero (or negative) cursor is never sent; the current time is used
    /// instead.
    pub fn effective_cursor(&self) -> i64 {
        if self.cursor > 0 {
            self.cursor
        } else {
            now_timestamp()
        }
    }

    /// Moves the cursor to the server-reported date, if there is one
    pub fn advance_cursor(&mut self, current_date: Option<i64>) {
        if let Some(date) = current_date {
            self.cursor = date;
        }
    }

    pub fn last_sent(&self) -> &str {
        &self.last_sent
    }

    /// Remembers a successfully delivered notification
    pub fn record_sent(&mut self, message: String) {
        self.last_sent = message;
    }
}

fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_cursor() {
        let mut context = PollContext::new(500);

        context.advance_cursor(Some(1000));
        assert_eq!(context.cursor(), 1000);

        context.advance_cursor(None);
        assert_eq!(context.cursor(), 1000);
    }

    #[test]
    fn test_zero_cursor_is_replaced_by_now() {
        let before = chrono::Utc::now().timestamp();
        let context = PollContext::new(0);
        assert!(context.effective_cursor() >= before);
        assert_eq!(PollContext::new(1000).effective_cursor(), 1000);
    }

    #[test]
    fn test_record_sent() {
        let mut context = PollContext::default();
        assert_eq!(context.last_sent(), "");

        context.record_sent("hello".to_string());
        assert_eq!(context.last_sent(), "hello");
    }
}
