//! Sinks for human-readable failure messages.

use std::sync::Mutex;

/// Receives formatted diagnostic text.
pub trait Diagnostics {
    fn report(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

/// Forwards every message to `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, message: &str) {
        tracing::error!(target: "syst_meta::diagnostics", "{message}");
    }
}

/// Keeps every message in memory, in the order reported.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // Poisoned data is still a complete Vec.
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_keeps_order() {
        let sink = CollectingDiagnostics::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clear_empties_the_sink() {
        let sink = CollectingDiagnostics::new();
        sink.report("x");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn reference_forwards_to_owner() {
        let sink = CollectingDiagnostics::new();
        let by_ref = &sink;
        by_ref.report("via reference");
        assert_eq!(sink.messages(), vec!["via reference"]);
    }

    #[test]
    fn tracing_sink_does_not_panic_without_subscriber() {
        TracingDiagnostics.report("nobody is listening");
    }
}
