//! Flight row validator
//!
//! Rule order:
//! 1. Presence of every required field (short-circuits)
//! 2. flight_id shape
//! 3. origin / destination shape
//! 4. Timestamp parsing
//! 5. Chronology, when both timestamps parsed
//! 6. Price
//!
//! Steps 2-6 accumulate; a row is accepted only when none of them fire.

use super::errors::{Rejection, ValidationIssue, ValidationResult};
use crate::record::{FlightRecord, FlightTimestamp, RawFlightRecord, REQUIRED_FIELDS};

const FLIGHT_ID_MIN_LEN: usize = 2;
const FLIGHT_ID_MAX_LEN: usize = 8;
const AIRPORT_CODE_LEN: usize = 3;

/// Validates raw flight rows and promotes accepted ones to `FlightRecord`.
///
/// Validation is pure and deterministic: the same row always yields the same
/// outcome and the input is never mutated.
pub struct FlightValidator;

impl FlightValidator {
    /// Validates a raw row.
    ///
    /// # Errors
    ///
    /// Returns a `Rejection` listing every issue found, in rule order. When any
    /// required field is missing, only the missing-field issues are reported.
    pub fn validate(raw: &RawFlightRecord) -> ValidationResult<FlightRecord> {
        let [flight_id, origin, destination, departure, arrival, price] = present_fields(raw)?;

        let mut issues = Vec::new();

        if !is_flight_id(flight_id.trim()) {
            issues.push(ValidationIssue::InvalidFormat("flight_id"));
        }
        if !is_airport_code(origin.trim()) {
            issues.push(ValidationIssue::InvalidFormat("origin"));
        }
        if !is_airport_code(destination.trim()) {
            issues.push(ValidationIssue::InvalidFormat("destination"));
        }

        let departure = parse_timestamp("departure_datetime", departure, &mut issues);
        let arrival = parse_timestamp("arrival_datetime", arrival, &mut issues);

        if let (Some(dep), Some(arr)) = (&departure, &arrival) {
            if arr.at() <= dep.at() {
                issues.push(ValidationIssue::ChronologyViolation);
            }
        }

        let price = match parse_price(price) {
            Some(p) if p <= 0.0 => {
                issues.push(ValidationIssue::NonPositivePrice);
                None
            }
            Some(p) => Some(p),
            None => {
                issues.push(ValidationIssue::InvalidFormat("price"));
                None
            }
        };

        match (departure, arrival, price) {
            (Some(dep), Some(arr), Some(price)) if issues.is_empty() => Ok(FlightRecord::new(
                flight_id.to_string(),
                origin.to_string(),
                destination.to_string(),
                dep,
                arr,
                price,
                raw.extra.clone(),
            )),
            _ => Err(Rejection::new(issues)),
        }
    }

    /// Boolean/reason form of `validate`: `(true, "")` or `(false, reasons)`.
    pub fn verdict(raw: &RawFlightRecord) -> (bool, String) {
        match Self::validate(raw) {
            Ok(_) => (true, String::new()),
            Err(rejection) => (false, rejection.reason()),
        }
    }

    /// Returns true if the row passes every rule.
    pub fn is_valid(raw: &RawFlightRecord) -> bool {
        Self::validate(raw).is_ok()
    }
}

/// Returns the required field values in `REQUIRED_FIELDS` order, or a
/// rejection naming every missing one.
fn present_fields(raw: &RawFlightRecord) -> ValidationResult<[&str; 6]> {
    let mut values = [""; 6];
    let mut missing = Vec::new();

    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        match raw.get(field) {
            Some(value) if !value.is_empty() => *slot = value,
            _ => missing.push(ValidationIssue::MissingField(field)),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(Rejection::new(missing))
    }
}

fn is_flight_id(value: &str) -> bool {
    let len = value.chars().count();
    (FLIGHT_ID_MIN_LEN..=FLIGHT_ID_MAX_LEN).contains(&len)
        && value.chars().all(char::is_alphanumeric)
}

fn is_airport_code(value: &str) -> bool {
    value.chars().count() == AIRPORT_CODE_LEN
        && value.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn parse_timestamp(
    field: &'static str,
    value: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<FlightTimestamp> {
    let parsed = FlightTimestamp::parse(value);
    if parsed.is_none() {
        issues.push(ValidationIssue::InvalidFormat(field));
    }
    parsed
}

/// Parses a price; non-finite values count as unparseable.
fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}
