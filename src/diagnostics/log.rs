// SPDX-License-Identifier: MPL-2.0
//! Bounded, in-memory log of diagnostic events.

use super::{CircularBuffer, DiagnosticEvent, DiagnosticKind};

/// Default number of retained events.
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// Bounded log of diagnostic events, oldest evicted first.
///
/// A missing translation key is a content defect, not a crash: the log keeps
/// the evidence while the session carries on.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticLog {
    /// Creates a log with [`DEFAULT_LOG_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Creates a log retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::with_capacity(capacity),
        }
    }

    /// Records an event and echoes its console form to stderr.
    pub fn record(&mut self, kind: DiagnosticKind) {
        eprintln!("{}", kind.message());
        self.events.push(DiagnosticEvent::new(kind));
    }

    /// Returns the recorded events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of recorded missing-key events.
    #[must_use]
    pub fn missing_key_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticKind::MissingKey { .. }))
            .count()
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(key: &str) -> DiagnosticKind {
        DiagnosticKind::MissingKey {
            key: key.to_string(),
            language: "fr".to_string(),
            fallback: "en".to_string(),
        }
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = DiagnosticLog::new();

        log.record(missing("first"));
        log.record(missing("second"));

        let keys: Vec<_> = log
            .iter()
            .map(|event| match &event.kind {
                DiagnosticKind::MissingKey { key, .. } => key.clone(),
                _ => panic!("expected MissingKey"),
            })
            .collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn capacity_bounds_retained_events() {
        let mut log = DiagnosticLog::with_capacity(2);

        log.record(missing("a"));
        log.record(missing("b"));
        log.record(missing("c"));

        assert_eq!(log.len(), 2);
        let first = log.iter().next().expect("log should not be empty");
        assert!(matches!(
            &first.kind,
            DiagnosticKind::MissingKey { key, .. } if key == "b"
        ));
    }

    #[test]
    fn missing_key_count_ignores_other_kinds() {
        let mut log = DiagnosticLog::new();

        log.record(missing("cta"));
        log.record(DiagnosticKind::ConfigLoadFailed {
            detail: "bad toml".to_string(),
        });

        assert_eq!(log.missing_key_count(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn default_log_is_empty() {
        let log = DiagnosticLog::default();
        assert!(log.is_empty());
        assert_eq!(log.missing_key_count(), 0);
    }
}
