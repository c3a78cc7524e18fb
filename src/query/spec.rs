//! Query documents and their compiled criteria
//!
//! A query is a JSON object mapping field names to target values. The `price`
//! key is an inclusive upper bound; every other key is an exact string match.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{QueryError, QueryOpResult};

/// Field interpreted as an upper bound instead of an equality match
pub const PRICE_FIELD: &str = "price";

/// A single query, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuerySpec(Map<String, Value>);

impl QuerySpec {
    /// Creates an empty query, which matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Compiles the query into criteria, coercing the price bound.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_QUERY_INVALID_BOUND` if `price` is neither a JSON
    /// number nor a string holding one.
    pub fn compile(&self) -> QueryOpResult<Vec<Criterion>> {
        self.0
            .iter()
            .map(|(field, value)| {
                if field == PRICE_FIELD {
                    price_bound(value).map(Criterion::PriceAtMost)
                } else {
                    Ok(Criterion::Equals {
                        field: field.clone(),
                        value: value.clone(),
                    })
                }
            })
            .collect()
    }
}

impl From<Map<String, Value>> for QuerySpec {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A compiled query criterion
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Record price must be <= bound
    PriceAtMost(f64),
    /// Record's textual value at `field` must equal `value` exactly
    Equals { field: String, value: Value },
}

fn price_bound(value: &Value) -> QueryOpResult<f64> {
    let bound = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    bound
        .filter(|b| b.is_finite())
        .ok_or_else(|| QueryError::invalid_bound(value))
}
