//! Dynamic log level reloading support

use featurejson_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called by [`init_logging`](crate::init_logging))
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        let Some(handle) = guard.as_ref() else {
            return Err("Reload handle not initialized".to_string());
        };
        handle
            .reload(level_filter(level))
            .map_err(|e| format!("Failed to reload filter: {e}"))
    }

    /// Level currently let through by the filter
    pub fn current_level(&self) -> Option<LogLevel> {
        let guard = self.handle.lock();
        let filter = guard.as_ref()?.clone_current()?;
        Some(filter_level(filter))
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

fn filter_level(filter: LevelFilter) -> LogLevel {
    match filter {
        LevelFilter::TRACE => LogLevel::Trace,
        LevelFilter::DEBUG => LogLevel::Debug,
        LevelFilter::INFO => LogLevel::Info,
        LevelFilter::WARN => LogLevel::Warn,
        LevelFilter::ERROR => LogLevel::Error,
        _ => LogLevel::Off,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test]
    fn ReloadHandle___reload_level___uninitialized_is_error() {
        let handle = ReloadHandle::new();

        let result = handle.reload_level(LogLevel::Debug);

        assert_eq!(result, Err("Reload handle not initialized".to_string()));
        assert!(!handle.is_initialized());
        assert_eq!(handle.current_level(), None);
    }

    #[test]
    fn ReloadHandle___reload_level___changes_current_level() {
        let handle = ReloadHandle::new();
        let (_layer, reload_handle) =
            reload::Layer::<LevelFilter, tracing_subscriber::Registry>::new(LevelFilter::INFO);
        handle.set_handle(reload_handle);

        handle.reload_level(LogLevel::Trace).unwrap();

        assert_eq!(handle.current_level(), Some(LogLevel::Trace));
    }

    #[test_case(LogLevel::Trace ; "trace")]
    #[test_case(LogLevel::Debug ; "debug")]
    #[test_case(LogLevel::Info ; "info")]
    #[test_case(LogLevel::Warn ; "warn")]
    #[test_case(LogLevel::Error ; "error")]
    #[test_case(LogLevel::Off ; "off")]
    fn level_filter___converts_back(level: LogLevel) {
        assert_eq!(filter_level(level_filter(level)), level);
    }
}
