//! The logging capability consumed by the order history.
//!
//! The history never talks to a concrete logging mechanism; it is handed a
//! [`LogSink`] and invokes it through [`log_best_effort`], which guarantees
//! a broken sink cannot fail an otherwise-successful creation.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use tracing::info;

/// A best-effort, fire-and-forget log sink.
///
/// Implementations are assumed non-blocking; the caller never inspects the
/// outcome of a `log` call.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Production sink: delegates to the `tracing` pipeline.
pub struct TracingLog;

impl LogSink for TracingLog {
    fn log(&self, message: &str) {
        info!("{message}");
    }
}

/// Disabled sink: drops every message.
pub struct NullLog;

impl LogSink for NullLog {
    fn log(&self, _message: &str) {}
}

/// Capturing sink: accumulates messages behind a mutex for later inspection.
#[derive(Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything logged so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemoryLog {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Invokes a sink and discards any failure, including a panic inside the
/// sink. Callers never observe the outcome of logging.
pub(crate) fn log_best_effort(sink: &dyn LogSink, message: &str) {
    let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.log(message)));
}
