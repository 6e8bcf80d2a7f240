//! Report structures shared by the human and JSON outputs.

use pickler::{EventKind, ParseError};
use serde::Serialize;

/// One reported violation within a file.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorReport {
    line: u32,
    found: &'static str,
    expected: Vec<&'static str>,
    message: String,
}

impl ErrorReport {
    pub(crate) fn from_parse_error(error: &ParseError) -> Self {
        Self {
            line: error.line(),
            found: error.found().as_str(),
            expected: error.expected().iter().map(EventKind::as_str).collect(),
            message: error.to_string(),
        }
    }

    pub(crate) fn from_exhaustion(line: u32, expected: &[EventKind], message: String) -> Self {
        Self {
            line,
            found: EventKind::Eof.as_str(),
            expected: expected.iter().map(EventKind::as_str).collect(),
            message,
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// All violations found in one file.
#[derive(Debug, Serialize)]
pub(crate) struct FileReport {
    path: String,
    errors: Vec<ErrorReport>,
}

impl FileReport {
    pub(crate) fn new(path: String, errors: Vec<ErrorReport>) -> Self {
        Self { path, errors }
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Human-readable lines, one per violation.
    pub(crate) fn render_lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| format!("{}: {}", self.path, error.message()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorReport, FileReport};
    use pickler::{EventKind, ParseError};

    fn sample_error() -> ParseError {
        ParseError::new(EventKind::Step, 4, vec![EventKind::Scenario])
    }

    #[test]
    fn json_report_emits_fields() -> eyre::Result<()> {
        let report = FileReport::new(
            "billing.feature".to_string(),
            vec![ErrorReport::from_parse_error(&sample_error())],
        );
        let mut buffer = Vec::new();
        serde_json::to_writer(&mut buffer, &[report])?;
        let parsed: serde_json::Value = serde_json::from_slice(&buffer)?;
        let entry = parsed
            .as_array()
            .and_then(|array| array.first())
            .ok_or_else(|| eyre::eyre!("missing entry"))?;
        assert_eq!(
            entry.get("path"),
            Some(&serde_json::Value::String("billing.feature".into()))
        );
        let error = entry
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .and_then(|errors| errors.first())
            .ok_or_else(|| eyre::eyre!("missing error entry"))?;
        assert_eq!(error.get("line"), Some(&serde_json::Value::from(4_u64)));
        assert_eq!(
            error.get("found"),
            Some(&serde_json::Value::String("step".into()))
        );
        assert_eq!(
            error.get("message"),
            Some(&serde_json::Value::String(
                "Parse error on line 4. Found step when expecting one of: scenario.".into()
            ))
        );
        Ok(())
    }

    #[test]
    fn human_lines_prefix_the_path() {
        let report = FileReport::new(
            "billing.feature".to_string(),
            vec![ErrorReport::from_parse_error(&sample_error())],
        );
        assert_eq!(
            report.render_lines(),
            ["billing.feature: Parse error on line 4. Found step when expecting one of: scenario."]
        );
    }

    #[test]
    fn exhaustion_reports_use_the_failure_message() {
        let report = ErrorReport::from_exhaustion(
            9,
            &[EventKind::Eof],
            "source ended on line 9 before end-of-input was accepted".to_string(),
        );
        assert_eq!(report.message(), "source ended on line 9 before end-of-input was accepted");
    }
}
