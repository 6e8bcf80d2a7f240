//! The current-state pointer and its legality queries.

use pickler_events::EventKind;

use crate::grammar::{Grammar, StateId};

/// Walks one [`Grammar`] on behalf of a single session.
///
/// The tracker owns nothing but the automaton topology (borrowed) and the
/// current-state pointer. It is deliberately not shareable: one tracker per
/// session, created at the grammar's initial state and advanced exactly once
/// per validated event.
#[derive(Debug)]
pub struct StateTracker<'g> {
    grammar: &'g Grammar,
    current: StateId,
}

impl<'g> StateTracker<'g> {
    /// Create a tracker positioned at the grammar's initial state.
    #[must_use]
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            current: grammar.initial(),
        }
    }

    /// The state the tracker currently points at.
    #[must_use]
    pub const fn current(&self) -> StateId {
        self.current
    }

    /// The diagnostic name of the current state.
    #[must_use]
    pub fn current_name(&self) -> &str {
        self.grammar.state_name(self.current)
    }

    /// Whether `kind` is legal in the current state. Pure: the answer never
    /// changes without an intervening [`advance`](Self::advance).
    #[must_use]
    pub fn is_legal(&self, kind: EventKind) -> bool {
        self.grammar.transition(self.current, kind).is_some()
    }

    /// The event kinds accepted by the current state, in a stable order.
    /// Used for diagnostics at the moment of rejection.
    #[must_use]
    pub fn expected(&self) -> Vec<EventKind> {
        self.grammar.expected(self.current)
    }

    /// Move to the state mapped for `kind`.
    ///
    /// Contract: the caller has already established legality via
    /// [`is_legal`](Self::is_legal). Calling this with an illegal kind is a
    /// programming error; the tracker asserts the contract in debug builds
    /// and stays put otherwise.
    pub fn advance(&mut self, kind: EventKind) {
        debug_assert!(
            self.is_legal(kind),
            "advance({kind}) called in state `{}` where it is illegal",
            self.current_name(),
        );
        if let Some(next) = self.grammar.transition(self.current, kind) {
            self.current = next;
        }
    }
}
