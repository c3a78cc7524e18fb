//! Query subsystem for flightdb
//!
//! Filters the accepted record set by attribute equality and a price bound.
//!
//! # Semantics
//!
//! - `price` is an inclusive upper bound; a non-numeric bound is fatal
//! - every other key is an exact string match; missing keys never match
//! - all criteria must hold (AND)
//! - results keep store order; batches keep query order

mod engine;
mod errors;
mod filters;
mod result;
mod spec;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryErrorCode, QueryOpResult};
pub use filters::QueryFilter;
pub use result::QueryResult;
pub use spec::{Criterion, QuerySpec, PRICE_FIELD};
