//! flightdb - A strict flight record validator with a flat JSON document store
//!
//! Pipeline: CSV rows → validation → document store → filter queries.

pub mod cli;
pub mod ingest;
pub mod observability;
pub mod query;
pub mod record;
pub mod storage;
pub mod validation;
