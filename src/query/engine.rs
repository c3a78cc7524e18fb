//! Query engine for flightdb
//!
//! Evaluates queries against the accepted record set.
//!
//! Execution flow (strict order):
//! 1. Compile every query in the batch (price bounds coerced here)
//! 2. Scan records in store order
//! 3. Keep records matching every criterion
//! 4. Return one result per query, in query order

use super::errors::QueryOpResult;
use super::filters::QueryFilter;
use super::result::QueryResult;
use super::spec::{Criterion, QuerySpec};
use crate::observability::{log_event_with_fields, warn_event, Event};
use crate::record::FlightRecord;

/// Query engine over an in-memory record set
pub struct QueryEngine<'a> {
    records: &'a [FlightRecord],
}

impl<'a> QueryEngine<'a> {
    /// Creates a new engine over records in store order
    pub fn new(records: &'a [FlightRecord]) -> Self {
        Self { records }
    }

    /// Returns the records matching one query, in store order.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_QUERY_INVALID_BOUND` for a non-numeric price bound,
    /// even when the record set is empty.
    pub fn filter(&self, query: &QuerySpec) -> QueryOpResult<Vec<FlightRecord>> {
        let criteria = query.compile()?;
        Ok(self.scan(&criteria))
    }

    /// Runs a batch of queries, returning one result per query in order.
    ///
    /// Every query is compiled before any is evaluated, so a malformed query
    /// anywhere in the batch aborts it without partial output.
    pub fn run_batch(&self, queries: &[QuerySpec]) -> QueryOpResult<Vec<QueryResult>> {
        let compiled = queries
            .iter()
            .enumerate()
            .map(|(index, query)| {
                query.compile().map_err(|e| {
                    warn_event(
                        Event::QueryRejected,
                        &[("index", &index.to_string()), ("reason", e.message())],
                    );
                    e.at_query(index)
                })
            })
            .collect::<QueryOpResult<Vec<_>>>()?;

        let results = queries
            .iter()
            .zip(compiled)
            .enumerate()
            .map(|(index, (query, criteria))| {
                let matches = self.scan(&criteria);
                log_event_with_fields(
                    Event::QueryEvaluated,
                    &[
                        ("index", &index.to_string()),
                        ("matches", &matches.len().to_string()),
                    ],
                );
                QueryResult::new(query.clone(), matches)
            })
            .collect();

        Ok(results)
    }

    fn scan(&self, criteria: &[Criterion]) -> Vec<FlightRecord> {
        self.records
            .iter()
            .filter(|record| QueryFilter::matches(record, criteria))
            .cloned()
            .collect()
    }
}
