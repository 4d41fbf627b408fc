//! featurejson-logging - tracing setup and log capture
//!
//! This crate provides:
//! - [`init_logging`] to install a global subscriber writing to stderr
//! - [`ReloadHandle`] to change the level of that subscriber at runtime
//! - [`CaptureLayer`] and [`LogCapture`] to record events in memory

mod capture;
mod layer;
mod reload;

pub use capture::{LogCapture, LogRecord};
pub use featurejson_core::LogLevel;
pub use layer::{CaptureLayer, init_logging, init_logging_from_config};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CaptureLayer, LogCapture, LogLevel, LogRecord, ReloadHandle, init_logging};
}
