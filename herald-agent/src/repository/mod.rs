//! Repository layer
//!
//! Repositories are thin wrappers over the HTTP clients that give the
//! poller two narrow seams: fetching statuses and delivering a message.
//!
//! Both are trait-based so the poller can be driven by in-memory fakes.

mod notifier;
mod statuses;

// Re-export traits
pub use notifier::Notifier;
pub use statuses::StatusRepository;

// Re-export implementations
pub use notifier::TelegramNotifier;
pub use statuses::HttpStatusRepository;
