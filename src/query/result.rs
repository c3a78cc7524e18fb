//! Result types for query execution

use serde::{Deserialize, Serialize};

use super::spec::QuerySpec;
use crate::record::FlightRecord;

/// A query paired with its matches, in store order.
///
/// Serializes as `{"query": {...}, "matches": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: QuerySpec,
    pub matches: Vec<FlightRecord>,
}

impl QueryResult {
    pub fn new(query: QuerySpec, matches: Vec<FlightRecord>) -> Self {
        Self { query, matches }
    }

    /// Returns true if no records matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns the ids of the matched flights, in order
    pub fn flight_ids(&self) -> Vec<&str> {
        self.matches.iter().map(FlightRecord::flight_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_result_shape() {
        let result = QueryResult::new(QuerySpec::new().with("origin", "JFK"), Vec::new());
        assert!(result.is_empty());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"query": {"origin": "JFK"}, "matches": []})
        );
    }
}
