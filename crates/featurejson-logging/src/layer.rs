//! Tracing layer that records events into a [`LogCapture`], and global setup

use crate::capture::LogCapture;
use crate::reload::{ReloadHandle, level_filter};
use featurejson_core::{FeatureResult, JsonConfig, LogLevel};
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that appends events to a [`LogCapture`]
///
/// Filtering happens in the capture, so callsite interest is never cached
/// as disabled for other subscribers running at the same time.
pub struct CaptureLayer {
    capture: LogCapture,
}

impl CaptureLayer {
    pub fn new(capture: LogCapture) -> Self {
        Self { capture }
    }

    pub fn capture(&self) -> &LogCapture {
        &self.capture
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());
        if !self.capture.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.capture
            .record(level, metadata.target(), &visitor.into_message());
    }
}

/// Collects the `message` field plus other fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), value);
        }
    }
}

/// Install the global subscriber: a reloadable level filter and a stderr
/// `fmt` layer
///
/// `RUST_LOG`, when set, narrows the output further by target. Returns
/// `false` when a global subscriber was already installed; that subscriber is
/// kept and the level is not changed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt, reload};

    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(EnvFilter::try_from_default_env().ok())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    tracing::debug!("logging initialized at {}", level);
    true
}

/// [`init_logging`] at the level named by `config.log_level`
pub fn init_logging_from_config(config: &JsonConfig) -> FeatureResult<bool> {
    Ok(init_logging(config.log_level()?))
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
