//! A recording listener for test suites.
//!
//! Only available with the `test-support` feature. Downstream crates enable
//! it from their dev-dependencies to assert on delivery order, recovery
//! notifications, and abort propagation without writing bespoke doubles.

use crate::event::EventKind;
use crate::listener::{Listener, ListenerAbort, ListenerResult};

/// One recorded listener call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedCall {
    /// `comment(content, line)` was delivered.
    Comment {
        /// Comment text.
        content: String,
        /// Source line.
        line: u32,
    },
    /// `tag(name, line)` was delivered.
    Tag {
        /// Tag name including the leading `@`.
        name: String,
        /// Source line.
        line: u32,
    },
    /// A construct header (`feature`, `background`, `scenario`,
    /// `scenario_outline`, or `examples`) was delivered.
    Construct {
        /// The construct's event kind.
        kind: EventKind,
        /// The matched keyword.
        keyword: String,
        /// The construct name.
        name: String,
        /// Source line.
        line: u32,
    },
    /// `step(keyword, text, line)` was delivered.
    Step {
        /// The matched step keyword.
        keyword: String,
        /// The step text.
        text: String,
        /// Source line.
        line: u32,
    },
    /// `row(cells, line)` was delivered.
    Row {
        /// The row's cells in order.
        cells: Vec<String>,
        /// Source line.
        line: u32,
    },
    /// `py_string(content, line)` was delivered.
    PyString {
        /// The dedented docstring content.
        content: String,
        /// Source line of the opening fence.
        line: u32,
    },
    /// `eof()` was delivered.
    Eof,
    /// `syntax_error(found, line, expected)` was delivered.
    SyntaxError {
        /// The rejected event kind.
        found: EventKind,
        /// Source line of the rejected event.
        line: u32,
        /// The kinds that were legal at the point of rejection.
        expected: Vec<EventKind>,
    },
}

/// A [`Listener`] that records every call it receives, optionally aborting
/// when a configured trigger fires.
#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: Vec<RecordedCall>,
    abort_on: Option<EventKind>,
    abort_on_syntax_error: bool,
}

impl RecordingListener {
    /// Create a listener that records everything and never aborts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listener that aborts when the given kind is delivered. The
    /// triggering call is still recorded before the abort is raised.
    #[must_use]
    pub fn aborting_on(kind: EventKind) -> Self {
        Self {
            abort_on: Some(kind),
            ..Self::default()
        }
    }

    /// Create a listener that aborts from its `syntax_error` handler.
    #[must_use]
    pub fn aborting_on_syntax_error() -> Self {
        Self {
            abort_on_syntax_error: true,
            ..Self::default()
        }
    }

    /// The calls recorded so far, in delivery order.
    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// The number of `syntax_error` notifications recorded.
    #[must_use]
    pub fn syntax_error_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RecordedCall::SyntaxError { .. }))
            .count()
    }

    fn record(&mut self, kind: EventKind, call: RecordedCall) -> ListenerResult {
        self.calls.push(call);
        if self.abort_on == Some(kind) {
            return Err(ListenerAbort::new(format!(
                "recording listener aborted on {kind}"
            )));
        }
        Ok(())
    }

    fn record_construct(
        &mut self,
        kind: EventKind,
        keyword: &str,
        name: &str,
        line: u32,
    ) -> ListenerResult {
        self.record(
            kind,
            RecordedCall::Construct {
                kind,
                keyword: keyword.to_string(),
                name: name.to_string(),
                line,
            },
        )
    }
}

impl Listener for RecordingListener {
    fn comment(&mut self, content: &str, line: u32) -> ListenerResult {
        self.record(
            EventKind::Comment,
            RecordedCall::Comment {
                content: content.to_string(),
                line,
            },
        )
    }

    fn tag(&mut self, name: &str, line: u32) -> ListenerResult {
        self.record(
            EventKind::Tag,
            RecordedCall::Tag {
                name: name.to_string(),
                line,
            },
        )
    }

    fn feature(&mut self, keyword: &str, name: &str, line: u32) -> ListenerResult {
        self.record_construct(EventKind::Feature, keyword, name, line)
    }

    fn background(&mut self, keyword: &str, name: &str, line: u32) -> ListenerResult {
        self.record_construct(EventKind::Background, keyword, name, line)
    }

    fn scenario(&mut self, keyword: &str, name: &str, line: u32) -> ListenerResult {
        self.record_construct(EventKind::Scenario, keyword, name, line)
    }

    fn scenario_outline(&mut self, keyword: &str, name: &str, line: u32) -> ListenerResult {
        self.record_construct(EventKind::ScenarioOutline, keyword, name, line)
    }

    fn examples(&mut self, keyword: &str, name: &str, line: u32) -> ListenerResult {
        self.record_construct(EventKind::Examples, keyword, name, line)
    }

    fn step(&mut self, keyword: &str, text: &str, line: u32) -> ListenerResult {
        self.record(
            EventKind::Step,
            RecordedCall::Step {
                keyword: keyword.to_string(),
                text: text.to_string(),
                line,
            },
        )
    }

    fn row(&mut self, cells: &[String], line: u32) -> ListenerResult {
        self.record(
            EventKind::Row,
            RecordedCall::Row {
                cells: cells.to_vec(),
                line,
            },
        )
    }

    fn py_string(&mut self, content: &str, line: u32) -> ListenerResult {
        self.record(
            EventKind::PyString,
            RecordedCall::PyString {
                content: content.to_string(),
                line,
            },
        )
    }

    fn eof(&mut self) -> ListenerResult {
        self.record(EventKind::Eof, RecordedCall::Eof)
    }

    fn syntax_error(&mut self, found: EventKind, line: u32, expected: &[EventKind])
    -> ListenerResult {
        self.calls.push(RecordedCall::SyntaxError {
            found,
            line,
            expected: expected.to_vec(),
        });
        if self.abort_on_syntax_error {
            return Err(ListenerAbort::new(
                "recording listener aborted on syntax error",
            ));
        }
        Ok(())
    }
}
