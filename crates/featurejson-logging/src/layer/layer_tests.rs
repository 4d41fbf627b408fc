#![allow(non_snake_case)]

use super::*;
use tracing_subscriber::prelude::*;

// CaptureLayer tests

#[test]
fn CaptureLayer___convert_level___trace() {
    assert_eq!(CaptureLayer::convert_level(&Level::TRACE), LogLevel::Trace);
}

#[test]
fn CaptureLayer___convert_level___debug() {
    assert_eq!(CaptureLayer::convert_level(&Level::DEBUG), LogLevel::Debug);
}

#[test]
fn CaptureLayer___convert_level___info() {
    assert_eq!(CaptureLayer::convert_level(&Level::INFO), LogLevel::Info);
}

#[test]
fn CaptureLayer___convert_level___warn() {
    assert_eq!(CaptureLayer::convert_level(&Level::WARN), LogLevel::Warn);
}

#[test]
fn CaptureLayer___convert_level___error() {
    assert_eq!(CaptureLayer::convert_level(&Level::ERROR), LogLevel::Error);
}

#[test]
fn CaptureLayer___with_subscriber___filters_below_level() {
    let capture = LogCapture::new(LogLevel::Info);
    let subscriber = tracing_subscriber::registry().with(capture.layer());

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("Test info message");
        tracing::debug!("Test debug message");
        tracing::error!("Test error message");
    });

    let levels: Vec<LogLevel> = capture.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Info, LogLevel::Error]);
}

#[test]
fn CaptureLayer___record___keeps_target() {
    let capture = LogCapture::default();

    capture.in_scope(|| tracing::warn!(target: "featurejson_io::reader", "odd field"));

    let records = capture.records();
    assert_eq!(records[0].target, "featurejson_io::reader");
}

#[test]
fn CaptureLayer___with_structured_fields___includes_fields_in_message() {
    let capture = LogCapture::default();

    capture.in_scope(|| tracing::info!(bundles = 3, "Feature written"));

    let message = &capture.records()[0].message;
    assert!(message.contains("Feature written"), "{message}");
    assert!(message.contains("bundles=3"), "{message}");
}

#[test]
fn CaptureLayer___with_multiple_fields___includes_all_fields() {
    let capture = LogCapture::default();

    capture.in_scope(|| {
        tracing::debug!(pid = "my.pid", tagged = true, errors = 0, "Decoded properties");
    });

    let message = &capture.records()[0].message;
    assert!(message.starts_with("Decoded properties"), "{message}");
    assert!(message.contains("pid=my.pid"), "{message}");
    assert!(message.contains("tagged=true"), "{message}");
    assert!(message.contains("errors=0"), "{message}");
}

#[test]
fn CaptureLayer___message_only___no_extra_fields() {
    let capture = LogCapture::default();

    capture.in_scope(|| tracing::info!("Simple message"));

    assert_eq!(capture.records()[0].message, "Simple message");
}

#[test]
fn CaptureLayer___fields_only___fields_become_message() {
    let capture = LogCapture::default();

    capture.in_scope(|| tracing::info!(count = 2));

    assert_eq!(capture.records()[0].message, "count=2");
}

#[test]
fn CaptureLayer___capture___is_the_given_buffer() {
    let capture = LogCapture::default();
    let layer = capture.layer();

    layer.capture().record(LogLevel::Info, "t", "direct");

    assert_eq!(capture.len(), 1);
}

#[test]
fn init_logging_from_config___unknown_level___is_error() {
    let config = JsonConfig {
        log_level: "loud".to_string(),
        ..JsonConfig::default()
    };

    assert!(init_logging_from_config(&config).is_err());
}
