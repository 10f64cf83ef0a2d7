//! Core domain types
//!
//! These types describe what the status API reports about a single homework.
//! They are shared between the HTTP client (decoding) and the agent (translation).

pub mod homework;

pub use homework::{Homework, HomeworkStatus};
