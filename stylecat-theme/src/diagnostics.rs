//! Non-fatal diagnostic reporting.
//!
//! Failures that must not abort the caller (dependency cycles, malformed
//! default colour resources, failed stylesheet writes) are reported through a
//! [`DiagnosticSink`] owned by the catalog.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ThemeError;

/// Receives non-fatal errors.
pub trait DiagnosticSink {
    /// Report `error`; `context` names the operation that failed.
    fn report(&self, context: &str, error: &ThemeError);
}

/// Writes diagnostics to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, context: &str, error: &ThemeError) {
        log::error!("{context}: {error}");
    }
}

/// A recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The operation that failed.
    pub context: String,
    /// The error message.
    pub message: String,
}

/// Records diagnostics in memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Rc<RefCell<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records.borrow().clone()
    }

    /// Remove and return the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, context: &str, error: &ThemeError) {
        log::debug!("Recorded diagnostic: {context}: {error}");
        self.records.borrow_mut().push(Diagnostic {
            context: context.to_string(),
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_records() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.report("select", &ThemeError::unsupported("blue"));

        let records = handle.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].context, "select");
        assert_eq!(records[0].message, "Unsupported theme 'blue'");
        assert!(sink.is_empty());
    }
}
