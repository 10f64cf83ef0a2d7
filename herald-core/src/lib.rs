//! Herald Core
//!
//! Core types and pure logic for the homework status herald.
//!
//! This crate contains:
//! - Domain types: the homework record and its known review statuses
//! - Validation: shape checks for status API payloads
//! - Verdicts: translation of a homework record into a notification text

pub mod domain;
pub mod error;
pub mod validation;
pub mod verdict;

pub use error::{RecordError, SchemaError};
pub use validation::{check_response, current_date};
pub use verdict::{parse_status, status_message};
