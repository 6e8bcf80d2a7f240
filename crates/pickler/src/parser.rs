//! The dispatch engine: the parse loop that drives one session.

use pickler_events::{Event, EventKind, Listener, ListenerAbort};

use crate::error::{ParseError, ParseFailure};
use crate::grammar::Grammar;
use crate::tracker::StateTracker;

/// How a session treats grammar violations. Chosen at construction and fixed
/// for the session's lifetime; the policy fully determines behaviour at the
/// single rejection site in the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort on the first violation and surface it to the caller. No further
    /// events are processed. Suits fail-fast tests and one-shot validation.
    #[default]
    Strict,
    /// Report each violation through [`Listener::syntax_error`], discard the
    /// offending event, and continue from the unchanged state. Suits tooling
    /// that collects every defect in a document in one pass.
    Recovering,
}

impl ErrorPolicy {
    /// Whether violations are reported and survived rather than raised.
    #[must_use]
    pub const fn is_recovering(self) -> bool {
        matches!(self, Self::Recovering)
    }
}

/// One parse session: a current-state pointer over a borrowed [`Grammar`],
/// a borrowed listener, and an error policy.
///
/// Sessions are single-threaded, synchronous, and single-use: [`run`]
/// consumes the session, so no mutable state can leak between parses. The
/// grammar itself is read-only and freely shared across sessions.
///
/// [`run`]: Self::run
#[derive(Debug)]
pub struct Parser<'g, 'l, L> {
    tracker: StateTracker<'g>,
    listener: &'l mut L,
    policy: ErrorPolicy,
}

impl<'g, 'l, L: Listener> Parser<'g, 'l, L> {
    /// Create a session positioned at the grammar's initial state.
    #[must_use]
    pub fn new(grammar: &'g Grammar, listener: &'l mut L, policy: ErrorPolicy) -> Self {
        Self {
            tracker: StateTracker::new(grammar),
            listener,
            policy,
        }
    }

    /// Pull events from `source` until end-of-input is accepted.
    ///
    /// Each legal event first advances the state, then reaches the listener;
    /// a listener re-entering the engine can therefore never observe a stale
    /// state. Illegal events never change state: under the strict policy the
    /// first one ends the session, under the recovering policy each produces
    /// exactly one `syntax_error` notification and is discarded, leaving
    /// subsequent events validated against the same expectation set.
    ///
    /// # Errors
    ///
    /// [`ParseFailure::Syntax`] for a grammar violation under the strict
    /// policy, [`ParseFailure::SourceExhausted`] when the source runs out
    /// before a legal end-of-input event, and [`ParseFailure::Aborted`] when
    /// any listener handler aborts (fatal under both policies).
    pub fn run<I>(mut self, source: I) -> Result<(), ParseFailure>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut events = source.into_iter();
        let mut last_line = 0u32;
        loop {
            let Some(event) = events.next() else {
                return Err(ParseFailure::SourceExhausted {
                    line: last_line.max(1),
                    expected: self.tracker.expected(),
                });
            };
            last_line = event.line();
            if self.tracker.is_legal(event.kind()) {
                log::trace!(
                    "line {}: {} accepted in state `{}`",
                    event.line(),
                    event.kind(),
                    self.tracker.current_name(),
                );
                self.tracker.advance(event.kind());
                let finished = event.kind() == EventKind::Eof;
                self.dispatch(&event)?;
                if finished {
                    return Ok(());
                }
            } else {
                let error = ParseError::new(event.kind(), event.line(), self.tracker.expected());
                match self.policy {
                    ErrorPolicy::Strict => return Err(error.into()),
                    ErrorPolicy::Recovering => {
                        log::debug!(
                            "line {}: discarding {} in state `{}`",
                            event.line(),
                            event.kind(),
                            self.tracker.current_name(),
                        );
                        self.listener
                            .syntax_error(error.found(), error.line(), error.expected())?;
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, event: &Event) -> Result<(), ListenerAbort> {
        let line = event.line();
        match event.kind() {
            EventKind::Comment => self.listener.comment(event.arg(0), line),
            EventKind::Tag => self.listener.tag(event.arg(0), line),
            EventKind::Feature => self.listener.feature(event.arg(0), event.arg(1), line),
            EventKind::Background => self.listener.background(event.arg(0), event.arg(1), line),
            EventKind::Scenario => self.listener.scenario(event.arg(0), event.arg(1), line),
            EventKind::ScenarioOutline => {
                self.listener.scenario_outline(event.arg(0), event.arg(1), line)
            }
            EventKind::Examples => self.listener.examples(event.arg(0), event.arg(1), line),
            EventKind::Step => self.listener.step(event.arg(0), event.arg(1), line),
            EventKind::Row => self.listener.row(event.args(), line),
            EventKind::PyString => self.listener.py_string(event.arg(0), line),
            EventKind::Eof => self.listener.eof(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorPolicy;

    #[test]
    fn strict_is_the_default_policy() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Strict);
        assert!(!ErrorPolicy::Strict.is_recovering());
        assert!(ErrorPolicy::Recovering.is_recovering());
    }
}
