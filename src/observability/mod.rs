//! Observability subsystem for flightdb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Scope-based begin/complete logging for pipeline phases
//!
//! Observability is read-only: a failed log write never changes the outcome
//! of a run.

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
///
/// Per-row and per-query events log at TRACE, fatal events at FATAL,
/// everything else at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else if event.is_detail() {
        Severity::Trace
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log a warning-level event with fields
pub fn warn_event(event: Event, fields: &[(&str, &str)]) {
    Logger::warn(event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        log_event(Event::ConfigLoaded);
        log_event(Event::StoreMissing);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::StorePersisted, &[("path", "/tmp/db.json"), ("records", "3")]);
        warn_event(Event::QueryRejected, &[("index", "0")]);
    }
}
