//! Flight record model
//!
//! Two shapes of the same record:
//! - `RawFlightRecord`: as read from a tabular row, every field optional text
//! - `FlightRecord`: promoted by the validator, timestamps and price typed
//!
//! Nothing outside `validation` constructs a `FlightRecord` from raw input.

mod datetime;
mod types;

pub use datetime::{parse_minute, FlightTimestamp, DATETIME_FORMAT};
pub use types::{FlightRecord, RawFlightRecord, REQUIRED_FIELDS};
