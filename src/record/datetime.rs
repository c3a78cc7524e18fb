//! Minute-precision timestamp format
//!
//! Flight timestamps are `YYYY-MM-DD HH:MM`, 24-hour clock, no seconds and no
//! timezone. Leading and trailing whitespace is ignored when parsing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// chrono format string for flight timestamps
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a flight timestamp.
pub fn parse_minute(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

/// A flight timestamp as read, together with its parsed value.
///
/// The source text is what the store holds and what queries compare
/// against; surrounding whitespace and unpadded numbers survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightTimestamp {
    text: String,
    at: NaiveDateTime,
}

impl FlightTimestamp {
    /// Parses `text` after trimming, keeping the untrimmed text.
    pub fn parse(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let at = parse_minute(text.trim())?;
        Some(Self { text, at })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }
}

impl Serialize for FlightTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for FlightTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(text.as_str()).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "timestamp '{}' does not match {}",
                text, DATETIME_FORMAT
            ))
        })
    }
}
