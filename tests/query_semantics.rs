//! Query Semantics Tests
//!
//! - `price` is an inclusive upper bound
//! - other keys are exact string matches (AND semantics)
//! - store order and query order are preserved
//! - malformed bounds are fatal

use flightdb::ingest::ingest_reader;
use flightdb::query::{QueryEngine, QuerySpec};
use flightdb::record::FlightRecord;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn records() -> Vec<FlightRecord> {
    let csv = "flight_id,origin,destination,departure_datetime,arrival_datetime,price,airline\n\
               AA1,JFK,LAX,2024-01-01 08:00,2024-01-01 11:00,100,Acme\n\
               BB2,JFK,SFO,2024-01-01 09:00,2024-01-01 12:00,500,Bolt\n\
               CC3,BOS,LAX,2024-01-02 07:00,2024-01-02 10:30,200,Acme\n\
               DD4,JFK,LAX,2024-01-03 13:00,2024-01-03 16:00,200.0,Bolt\n";
    let outcome = ingest_reader("fixture.csv", csv.as_bytes()).unwrap();
    assert!(outcome.rejections.is_empty());
    outcome.accepted
}

fn ids(records: &[FlightRecord]) -> Vec<&str> {
    records.iter().map(FlightRecord::flight_id).collect()
}

fn query(value: serde_json::Value) -> QuerySpec {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_origin_and_price_bound() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine.filter(&query(json!({"origin": "JFK", "price": 200}))).unwrap();
    assert_eq!(ids(&matches), vec!["AA1", "DD4"]);
}

#[test]
fn test_bound_is_inclusive() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine.filter(&query(json!({"price": 200}))).unwrap();
    assert_eq!(ids(&matches), vec!["AA1", "CC3", "DD4"]);

    let matches = engine.filter(&query(json!({"price": 99.99}))).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_string_bound_accepted() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine.filter(&query(json!({"price": "150"}))).unwrap();
    assert_eq!(ids(&matches), vec!["AA1"]);
}

#[test]
fn test_empty_query_matches_everything() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine.filter(&QuerySpec::new()).unwrap();
    assert_eq!(matches, records);
}

#[test]
fn test_conjunction_of_fields() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine
        .filter(&query(json!({"destination": "LAX", "airline": "Bolt"})))
        .unwrap();
    assert_eq!(ids(&matches), vec!["DD4"]);
}

#[test]
fn test_unknown_field_matches_nothing() {
    let records = records();
    let engine = QueryEngine::new(&records);

    let matches = engine.filter(&query(json!({"gate": "A1"}))).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_case_sensitive_match() {
    let records = records();
    let engine = QueryEngine::new(&records);

    assert!(engine.filter(&query(json!({"airline": "acme"}))).unwrap().is_empty());
}

#[test]
fn test_timestamps_match_by_source_text() {
    let csv = "flight_id,origin,destination,departure_datetime,arrival_datetime,price\n\
               AA1,JFK,LAX,2024-1-1 8:00,2024-01-01 11:00,100\n\
               BB2,JFK,LAX, 2024-01-02 08:00 ,2024-01-02 11:00,100\n";
    let outcome = ingest_reader("padding.csv", csv.as_bytes()).unwrap();
    assert_eq!(outcome.valid_count(), 2);
    let engine = QueryEngine::new(&outcome.accepted);

    let matches = engine
        .filter(&query(json!({"departure_datetime": "2024-1-1 8:00"})))
        .unwrap();
    assert_eq!(ids(&matches), vec!["AA1"]);

    let matches = engine
        .filter(&query(json!({"departure_datetime": " 2024-01-02 08:00 "})))
        .unwrap();
    assert_eq!(ids(&matches), vec!["BB2"]);

    let matches = engine
        .filter(&query(json!({"departure_datetime": "2024-01-01 08:00"})))
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_non_finite_bound_is_fatal() {
    let records = records();
    let engine = QueryEngine::new(&records);

    for bound in ["NaN", "inf", "1e400"] {
        let err = engine.filter(&query(json!({"price": bound}))).unwrap_err();
        assert_eq!(err.code().code(), "FLIGHT_QUERY_INVALID_BOUND", "{bound}");
    }
}

// =============================================================================
// Batches
// =============================================================================

#[test]
fn test_batch_result_document_shape() {
    let records = records();
    let engine = QueryEngine::new(&records);
    let queries = vec![
        query(json!({"origin": "BOS"})),
        query(json!({"origin": "JFK", "price": 100})),
    ];

    let results = engine.run_batch(&queries).unwrap();
    let document = serde_json::to_value(&results).unwrap();

    assert_eq!(document[0]["query"], json!({"origin": "BOS"}));
    assert_eq!(document[0]["matches"][0]["flight_id"], "CC3");
    assert_eq!(document[1]["query"], json!({"origin": "JFK", "price": 100}));
    assert_eq!(document[1]["matches"][0]["price"], json!(100.0));
    assert_eq!(document[1]["matches"][0]["airline"], "Acme");
}

#[test]
fn test_non_numeric_bound_aborts_batch() {
    let records = records();
    let engine = QueryEngine::new(&records);
    let queries = vec![query(json!({"origin": "JFK"})), query(json!({"price": "a lot"}))];

    let err = engine.run_batch(&queries).unwrap_err();
    assert_eq!(err.code().code(), "FLIGHT_QUERY_INVALID_BOUND");
    assert_eq!(err.query_index(), Some(1));
}
