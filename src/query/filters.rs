//! Criterion filtering for query execution
//!
//! AND semantics, evaluated in query order, stopping at the first failing
//! criterion. Equality is exact: no case folding, no trimming, no coercion.

use serde_json::Value;

use super::spec::Criterion;
use crate::record::FlightRecord;

/// Evaluates compiled criteria against records
pub struct QueryFilter;

impl QueryFilter {
    /// Checks if a record matches all criteria
    pub fn matches(record: &FlightRecord, criteria: &[Criterion]) -> bool {
        criteria
            .iter()
            .all(|criterion| Self::matches_criterion(record, criterion))
    }

    fn matches_criterion(record: &FlightRecord, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::PriceAtMost(bound) => record.price() <= *bound,
            Criterion::Equals { field, value } => Self::eq_match(record, field, value),
        }
    }

    /// Missing fields and non-string targets never match
    fn eq_match(record: &FlightRecord, field: &str, expected: &Value) -> bool {
        match (record.field(field), expected) {
            (Some(actual), Value::String(expected)) => actual == expected.as_str(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawFlightRecord;
    use crate::validation::FlightValidator;
    use serde_json::json;

    fn record(id: &str, origin: &str, price: &str) -> FlightRecord {
        let raw = RawFlightRecord::from_pairs([
            ("flight_id", id),
            ("origin", origin),
            ("destination", "LAX"),
            ("departure_datetime", "2024-03-01 09:00"),
            ("arrival_datetime", "2024-03-01 12:15"),
            ("price", price),
            ("airline", "Acme"),
        ]);
        FlightValidator::validate(&raw).unwrap()
    }

    fn eq(field: &str, value: Value) -> Criterion {
        Criterion::Equals {
            field: field.into(),
            value,
        }
    }

    #[test]
    fn test_equality_match() {
        let rec = record("AA1", "JFK", "100");
        assert!(QueryFilter::matches(&rec, &[eq("origin", json!("JFK"))]));
        assert!(!QueryFilter::matches(&rec, &[eq("origin", json!("LGA"))]));
    }

    #[test]
    fn test_equality_is_exact() {
        let rec = record("AA1", "JFK", "100");
        assert!(!QueryFilter::matches(&rec, &[eq("origin", json!("jfk"))]));
        assert!(!QueryFilter::matches(&rec, &[eq("origin", json!(" JFK"))]));
    }

    #[test]
    fn test_non_string_target_never_matches() {
        let rec = record("12", "JFK", "100");
        assert!(!QueryFilter::matches(&rec, &[eq("flight_id", json!(12))]));
    }

    #[test]
    fn test_price_bound_inclusive() {
        let rec = record("AA1", "JFK", "200");
        assert!(QueryFilter::matches(&rec, &[Criterion::PriceAtMost(200.0)]));
        assert!(!QueryFilter::matches(&rec, &[Criterion::PriceAtMost(199.99)]));
    }

    #[test]
    fn test_missing_field_no_match() {
        let rec = record("AA1", "JFK", "100");
        assert!(!QueryFilter::matches(&rec, &[eq("gate", json!("B1"))]));
    }

    #[test]
    fn test_extra_column_match() {
        let rec = record("AA1", "JFK", "100");
        assert!(QueryFilter::matches(&rec, &[eq("airline", json!("Acme"))]));
    }

    #[test]
    fn test_timestamp_match() {
        let rec = record("AA1", "JFK", "100");
        assert!(QueryFilter::matches(
            &rec,
            &[eq("departure_datetime", json!("2024-03-01 09:00"))]
        ));
    }

    #[test]
    fn test_timestamp_matches_source_text_only() {
        let raw = RawFlightRecord::from_pairs([
            ("flight_id", "AA1"),
            ("origin", "JFK"),
            ("destination", "LAX"),
            ("departure_datetime", "2024-3-1 9:00"),
            ("arrival_datetime", "2024-03-01 12:15"),
            ("price", "100"),
        ]);
        let rec = FlightValidator::validate(&raw).unwrap();

        assert!(QueryFilter::matches(&rec, &[eq("departure_datetime", json!("2024-3-1 9:00"))]));
        assert!(!QueryFilter::matches(
            &rec,
            &[eq("departure_datetime", json!("2024-03-01 09:00"))]
        ));
    }

    #[test]
    fn test_empty_criteria_match() {
        let rec = record("AA1", "JFK", "100");
        assert!(QueryFilter::matches(&rec, &[]));
    }
}
