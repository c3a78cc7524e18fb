//! Raw and validated flight record types

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::datetime::FlightTimestamp;

/// Fields every flight row must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "flight_id",
    "origin",
    "destination",
    "departure_datetime",
    "arrival_datetime",
    "price",
];

/// A flight row before validation.
///
/// Every required field is optional text. Columns that are not required
/// fields are carried in `extra` and survive promotion unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFlightRecord {
    pub flight_id: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_datetime: Option<String>,
    pub arrival_datetime: Option<String>,
    pub price: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl RawFlightRecord {
    /// Creates an empty raw record (every required field missing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a raw record from `(column, value)` pairs.
    ///
    /// A repeated column keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::new();
        for (key, value) in pairs {
            raw.set(key.as_ref(), value);
        }
        raw
    }

    /// Sets a column value, routing unknown columns to `extra`.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        match self.slot_mut(field) {
            Some(slot) => *slot = Some(value.into()),
            None => {
                self.extra.insert(field.to_string(), value.into());
            }
        }
    }

    /// Returns the value of a column, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "flight_id" => self.flight_id.as_deref(),
            "origin" => self.origin.as_deref(),
            "destination" => self.destination.as_deref(),
            "departure_datetime" => self.departure_datetime.as_deref(),
            "arrival_datetime" => self.arrival_datetime.as_deref(),
            "price" => self.price.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "flight_id" => Some(&mut self.flight_id),
            "origin" => Some(&mut self.origin),
            "destination" => Some(&mut self.destination),
            "departure_datetime" => Some(&mut self.departure_datetime),
            "arrival_datetime" => Some(&mut self.arrival_datetime),
            "price" => Some(&mut self.price),
            _ => None,
        }
    }
}

impl From<&FlightRecord> for RawFlightRecord {
    fn from(record: &FlightRecord) -> Self {
        Self {
            flight_id: Some(record.flight_id.clone()),
            origin: Some(record.origin.clone()),
            destination: Some(record.destination.clone()),
            departure_datetime: Some(record.departure_datetime.as_str().to_string()),
            arrival_datetime: Some(record.arrival_datetime.as_str().to_string()),
            price: Some(record.price.to_string()),
            extra: record.extra.clone(),
        }
    }
}

/// A validated flight record.
///
/// Every field except `price` holds the source text as read; timestamps also
/// carry their parsed value.
/// Fields are read-only; the validator is the only constructor for input
/// data, and the document store the only one for persisted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    flight_id: String,
    origin: String,
    destination: String,
    departure_datetime: FlightTimestamp,
    arrival_datetime: FlightTimestamp,
    price: f64,
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

impl FlightRecord {
    pub(crate) fn new(
        flight_id: String,
        origin: String,
        destination: String,
        departure_datetime: FlightTimestamp,
        arrival_datetime: FlightTimestamp,
        price: f64,
        extra: BTreeMap<String, String>,
    ) -> Self {
        Self {
            flight_id,
            origin,
            destination,
            departure_datetime,
            arrival_datetime,
            price,
            extra,
        }
    }

    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_datetime(&self) -> &FlightTimestamp {
        &self.departure_datetime
    }

    pub fn arrival_datetime(&self) -> &FlightTimestamp {
        &self.arrival_datetime
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Columns beyond the required fields.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Returns the textual value of any attribute, as it appears in the store.
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "flight_id" => Some(Cow::Borrowed(&self.flight_id)),
            "origin" => Some(Cow::Borrowed(&self.origin)),
            "destination" => Some(Cow::Borrowed(&self.destination)),
            "departure_datetime" => Some(Cow::Borrowed(self.departure_datetime.as_str())),
            "arrival_datetime" => Some(Cow::Borrowed(self.arrival_datetime.as_str())),
            "price" => Some(Cow::Owned(self.price.to_string())),
            other => self.extra.get(other).map(|v| Cow::Borrowed(v.as_str())),
        }
    }
}
