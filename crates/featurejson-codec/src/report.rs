//! Accumulated decode diagnostics

use std::fmt;

/// One problem found while decoding, with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the offending element, e.g. `configurations/my.pid/port:Integer`
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Location of `segment` below `location`; a top-level segment stands alone
pub fn child_location(location: &str, segment: &str) -> String {
    if location.is_empty() {
        segment.to_string()
    } else {
        format!("{location}/{segment}")
    }
}

/// Errors and warnings collected over one decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, location: impl Into<String>, message: impl fmt::Display) {
        let diagnostic = Diagnostic {
            location: location.into(),
            message: message.to_string(),
        };
        tracing::warn!("decode error at {}", diagnostic);
        self.errors.push(diagnostic);
    }

    /// Record a warning
    pub fn warning(&mut self, location: impl Into<String>, message: impl fmt::Display) {
        let diagnostic = Diagnostic {
            location: location.into(),
            message: message.to_string(),
        };
        tracing::warn!("decode warning at {}", diagnostic);
        self.warnings.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Append all diagnostics of another report
    pub fn merge(&mut self, other: Report) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )?;
        for diagnostic in &self.errors {
            write!(f, "\n  error: {diagnostic}")?;
        }
        for diagnostic in &self.warnings {
            write!(f, "\n  warning: {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}

/// A best-effort decoded value plus the diagnostics produced while decoding it
///
/// Elements that failed to decode are left out of `value` and described in
/// `report`. Callers pick the policy: inspect the report, or use
/// [`Decoded::into_result`] to fail on the first pass with errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub report: Report,
}

impl<T> Decoded<T> {
    pub fn new(value: T, report: Report) -> Self {
        Self { value, report }
    }

    /// A value decoded without any diagnostics
    pub fn clean(value: T) -> Self {
        Self::new(value, Report::new())
    }

    /// The value, or the report if it holds errors
    pub fn into_result(self) -> Result<T, Report> {
        if self.report.has_errors() {
            Err(self.report)
        } else {
            Ok(self.value)
        }
    }

    /// The value, or the report if it holds errors or warnings
    pub fn into_strict_result(self) -> Result<T, Report> {
        if self.report.is_clean() {
            Ok(self.value)
        } else {
            Err(self.report)
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            report: self.report,
        }
    }
}
