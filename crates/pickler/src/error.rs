//! The engine's error taxonomy.

use std::fmt;

use pickler_events::{EventKind, ListenerAbort};
use thiserror::Error;

/// A rejected event: the offending kind, its source line, and the kinds that
/// would have been legal in the state at rejection time.
///
/// Created by the engine at the moment of rejection, before any transition,
/// and never mutated afterwards. Its rendering is stable:
///
/// ```
/// use pickler::{EventKind, ParseError};
///
/// let error = ParseError::new(EventKind::Step, 4, vec![EventKind::Scenario]);
/// assert_eq!(
///     error.to_string(),
///     "Parse error on line 4. Found step when expecting one of: scenario.",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    found: EventKind,
    line: u32,
    expected: Vec<EventKind>,
}

impl ParseError {
    /// Create an error for an event rejected on `line` while `expected` were
    /// the legal kinds.
    #[must_use]
    pub fn new(found: EventKind, line: u32, expected: Vec<EventKind>) -> Self {
        Self {
            found,
            line,
            expected,
        }
    }

    /// The rejected event kind.
    #[must_use]
    pub const fn found(&self) -> EventKind {
        self.found
    }

    /// The 1-based source line of the rejected event.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The kinds that were legal at the point of rejection.
    #[must_use]
    pub fn expected(&self) -> &[EventKind] {
        &self.expected
    }
}

fn join_kinds(kinds: &[EventKind]) -> String {
    kinds
        .iter()
        .map(EventKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error on line {}. Found {} when expecting one of: {}.",
            self.line,
            self.found,
            join_kinds(&self.expected),
        )
    }
}

impl std::error::Error for ParseError {}

/// Why a parse session ended abnormally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// A grammar violation surfaced under the strict policy.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// The source ran out of events before end-of-input was accepted.
    /// Always fatal, in both policies.
    #[error("source ended on line {line} before end-of-input was accepted")]
    SourceExhausted {
        /// The line of the last event seen, or 1 when the source was empty.
        line: u32,
        /// The kinds that were legal when the source ran out.
        expected: Vec<EventKind>,
    },
    /// A listener handler aborted the session. Always fatal, never
    /// reinterpreted as a grammar violation.
    #[error(transparent)]
    Aborted(#[from] ListenerAbort),
}
