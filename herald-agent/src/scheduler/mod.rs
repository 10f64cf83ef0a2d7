//! Scheduler layer for the agent
//!
//! Drives the poll cycle: fetch, validate, translate, gate, notify, wait.

pub mod poller;

pub use poller::{CycleOutcome, StatusPoller};
