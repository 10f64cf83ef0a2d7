//! Service layer
//!
//! Pure decision logic used by the poller.

mod notification_gate;

pub use notification_gate::{failure_message, should_send};
