//! The listener that collects grammar violations for reporting.

use pickler::{EventKind, Listener, ListenerResult, ParseError};

/// A consumer that ignores every validated event and keeps each violation
/// reported under the recovering policy. It never aborts a session.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    /// The violations collected so far, in document order.
    pub(crate) fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

impl Listener for Diagnostics {
    fn syntax_error(&mut self, found: EventKind, line: u32, expected: &[EventKind])
    -> ListenerResult {
        self.errors.push(ParseError::new(found, line, expected.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Diagnostics;
    use pickler::{EventKind, Listener};

    #[test]
    fn collects_violations_in_order() {
        let mut diagnostics = Diagnostics::default();
        assert!(diagnostics
            .syntax_error(EventKind::Step, 2, &[EventKind::Feature])
            .is_ok());
        assert!(diagnostics
            .syntax_error(EventKind::Row, 5, &[EventKind::Scenario])
            .is_ok());
        let lines: Vec<u32> = diagnostics.errors().iter().map(pickler::ParseError::line).collect();
        assert_eq!(lines, [2, 5]);
    }

    #[test]
    fn validated_events_are_ignored() {
        let mut diagnostics = Diagnostics::default();
        assert!(diagnostics.feature("Feature", "Login", 1).is_ok());
        assert!(diagnostics.eof().is_ok());
        assert!(diagnostics.errors().is_empty());
    }
}
