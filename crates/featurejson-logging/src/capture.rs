//! In-memory log capture

use crate::layer::CaptureLayer;
use featurejson_core::LogLevel;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// One captured log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    /// Module path of the event
    pub target: String,
    /// Message text followed by any structured fields as `key=value`
    pub message: String,
}

#[derive(Debug)]
struct CaptureState {
    records: Mutex<Vec<LogRecord>>,
    level: AtomicU8,
}

/// Shared buffer of log records
///
/// Clones share the same buffer, so a capture handed to a [`CaptureLayer`]
/// can still be inspected afterwards.
///
/// ```
/// use featurejson_logging::{LogCapture, LogLevel};
///
/// let capture = LogCapture::new(LogLevel::Debug);
/// capture.in_scope(|| tracing::debug!("hello"));
///
/// assert!(capture.contains(LogLevel::Debug, "hello"));
/// ```
#[derive(Debug, Clone)]
pub struct LogCapture {
    state: Arc<CaptureState>,
}

impl LogCapture {
    /// Capture events at `level` and above
    pub fn new(level: LogLevel) -> Self {
        Self {
            state: Arc::new(CaptureState {
                records: Mutex::new(Vec::new()),
                level: AtomicU8::new(level as u8),
            }),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.state.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is captured
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Append a record if its level is captured
    pub fn record(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        self.state.records.lock().push(LogRecord {
            level,
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    /// Copy of everything captured so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.state.records.lock().clone()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.state.records.lock())
    }

    pub fn clear(&self) {
        self.state.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.state.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record at exactly `level` has `fragment` in its message
    pub fn contains(&self, level: LogLevel, fragment: &str) -> bool {
        self.state
            .records
            .lock()
            .iter()
            .any(|record| record.level == level && record.message.contains(fragment))
    }

    /// A tracing layer feeding this capture
    pub fn layer(&self) -> CaptureLayer {
        CaptureLayer::new(self.clone())
    }

    /// Run `f` with this capture as the thread's default subscriber
    pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        use tracing_subscriber::prelude::*;

        let subscriber = tracing_subscriber::registry().with(self.layer());
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl Default for LogCapture {
    fn default() -> Self {
        Self::new(LogLevel::Trace)
    }
}
