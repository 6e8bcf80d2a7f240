//! The grammar table: states, transitions, and their builder.

use std::collections::BTreeMap;

use pickler_events::EventKind;
use thiserror::Error;

/// Identifies one state within the [`Grammar`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

/// Errors raised while assembling a grammar table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A `(state, kind)` pair was mapped twice. The automaton must be
    /// deterministic: at most one transition per pair.
    #[error("state `{state}` already accepts `{kind}`")]
    DuplicateTransition {
        /// Name of the state with the conflicting mapping.
        state: String,
        /// The event kind mapped twice.
        kind: EventKind,
    },
    /// A [`StateId`] did not come from this builder.
    #[error("state id {index} is out of range for this grammar")]
    UnknownState {
        /// The out-of-range index.
        index: usize,
    },
}

#[derive(Clone, Debug)]
struct StateDef {
    name: String,
    transitions: BTreeMap<EventKind, StateId>,
}

/// An immutable automaton: a finite set of named states, each mapping the
/// event kinds it accepts to a next state.
///
/// A kind absent from a state's mapping is illegal in that state; the mapping
/// is the sole source of truth for legality. Grammars are read-only after
/// [`GrammarBuilder::build`] and safely reused across any number of
/// sequential parse sessions.
#[derive(Clone, Debug)]
pub struct Grammar {
    states: Vec<StateDef>,
    initial: StateId,
}

impl Grammar {
    /// The designated initial state for a new session.
    #[must_use]
    pub const fn initial(&self) -> StateId {
        self.initial
    }

    /// The number of states in the table.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The diagnostic name of a state.
    #[must_use]
    pub fn state_name(&self, id: StateId) -> &str {
        self.states.get(id.0).map_or("<unknown>", |s| s.name.as_str())
    }

    pub(crate) fn transition(&self, from: StateId, kind: EventKind) -> Option<StateId> {
        self.states
            .get(from.0)
            .and_then(|state| state.transitions.get(&kind).copied())
    }

    pub(crate) fn expected(&self, at: StateId) -> Vec<EventKind> {
        self.states
            .get(at.0)
            .map(|state| state.transitions.keys().copied().collect())
            .unwrap_or_default()
    }
}

/// Assembles a [`Grammar`], enforcing determinism structurally.
///
/// # Examples
///
/// ```
/// use pickler::{EventKind, GrammarBuilder};
///
/// # fn main() -> Result<(), pickler::GrammarError> {
/// let mut builder = GrammarBuilder::new();
/// let start = builder.add_state("start");
/// let end = builder.add_state("end");
/// builder.stay(start, EventKind::Comment)?;
/// builder.allow(start, EventKind::Eof, end)?;
/// let grammar = builder.build(start)?;
/// assert_eq!(grammar.state_name(grammar.initial()), "start");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    states: Vec<StateDef>,
}

impl GrammarBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state and return its id.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(StateDef {
            name: name.into(),
            transitions: BTreeMap::new(),
        });
        id
    }

    /// Declare that `from` accepts `kind` and transitions to `to`.
    ///
    /// # Errors
    ///
    /// [`GrammarError::DuplicateTransition`] when `from` already maps `kind`,
    /// and [`GrammarError::UnknownState`] when either id does not belong to
    /// this builder.
    pub fn allow(&mut self, from: StateId, kind: EventKind, to: StateId) -> Result<(), GrammarError> {
        if to.0 >= self.states.len() {
            return Err(GrammarError::UnknownState { index: to.0 });
        }
        let state = self
            .states
            .get_mut(from.0)
            .ok_or(GrammarError::UnknownState { index: from.0 })?;
        if state.transitions.contains_key(&kind) {
            return Err(GrammarError::DuplicateTransition {
                state: state.name.clone(),
                kind,
            });
        }
        state.transitions.insert(kind, to);
        Ok(())
    }

    /// Declare that `state` accepts `kind` and stays where it is.
    ///
    /// # Errors
    ///
    /// Same conditions as [`allow`](Self::allow).
    pub fn stay(&mut self, state: StateId, kind: EventKind) -> Result<(), GrammarError> {
        self.allow(state, kind, state)
    }

    /// Finish the table, designating the initial state.
    ///
    /// # Errors
    ///
    /// [`GrammarError::UnknownState`] when `initial` does not belong to this
    /// builder (including building with no states at all).
    pub fn build(self, initial: StateId) -> Result<Grammar, GrammarError> {
        if initial.0 >= self.states.len() {
            return Err(GrammarError::UnknownState { index: initial.0 });
        }
        Ok(Grammar {
            states: self.states,
            initial,
        })
    }
}
