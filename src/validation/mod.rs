//! Validation subsystem for flightdb
//!
//! Every flight row is checked against a fixed rule set before it may enter
//! the document store.
//!
//! # Design Principles
//!
//! - Missing required fields short-circuit all other rules
//! - All other rules accumulate and are reported together
//! - Every coercion (timestamp, price) is an explicit fallible conversion
//! - Validation is pure and deterministic

mod errors;
mod validator;

pub use errors::{Rejection, ValidationIssue, ValidationResult};
pub use validator::FlightValidator;
