//! The consumer-side contract for validated events.

use thiserror::Error;

use crate::event::EventKind;

/// Raised by a listener handler to abort the whole parse session.
///
/// An abort is always fatal and is never reinterpreted as a grammar
/// violation; the engine propagates it unchanged out of the dispatch loop
/// regardless of the configured error policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener aborted the session: {reason}")]
pub struct ListenerAbort {
    reason: String,
}

impl ListenerAbort {
    /// Create an abort with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason given when the abort was raised.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type returned by every listener handler.
pub type ListenerResult = Result<(), ListenerAbort>;

/// Receiver of ordered, validated semantic events.
///
/// The trait is a fixed capability: one handler per event kind in the
/// vocabulary, plus one error-notification entry point used only by the
/// recovering error policy. Every handler has a default no-op body so a
/// consumer only implements the kinds it cares about; kinds the grammar never
/// produces simply never arrive.
///
/// Handlers run after the state transition for their event, so a listener
/// never observes a stale state. Returning `Err` from any handler (including
/// [`syntax_error`](Self::syntax_error)) aborts the session.
pub trait Listener {
    /// A comment line was accepted.
    fn comment(&mut self, _content: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A tag was accepted.
    fn tag(&mut self, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A feature header was accepted.
    fn feature(&mut self, _keyword: &str, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A background header was accepted.
    fn background(&mut self, _keyword: &str, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A scenario header was accepted.
    fn scenario(&mut self, _keyword: &str, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A scenario outline header was accepted.
    fn scenario_outline(&mut self, _keyword: &str, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// An examples header was accepted.
    fn examples(&mut self, _keyword: &str, _name: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A step line was accepted.
    fn step(&mut self, _keyword: &str, _text: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A table row was accepted.
    fn row(&mut self, _cells: &[String], _line: u32) -> ListenerResult {
        Ok(())
    }

    /// A docstring block was accepted.
    fn py_string(&mut self, _content: &str, _line: u32) -> ListenerResult {
        Ok(())
    }

    /// End-of-input was accepted; the session ends normally after this call.
    fn eof(&mut self) -> ListenerResult {
        Ok(())
    }

    /// A grammar violation was survived under the recovering policy.
    ///
    /// `found` is the rejected kind, `line` its source line, and `expected`
    /// the kinds that were legal at the point of rejection. The engine
    /// discards the offending event and continues from the unchanged state.
    fn syntax_error(&mut self, _found: EventKind, _line: u32, _expected: &[EventKind])
    -> ListenerResult {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Listener, ListenerAbort, ListenerResult};
    use crate::event::EventKind;

    struct CountingListener {
        steps: usize,
    }

    impl Listener for CountingListener {
        fn step(&mut self, _keyword: &str, _text: &str, _line: u32) -> ListenerResult {
            self.steps += 1;
            Ok(())
        }
    }

    #[test]
    fn default_handlers_accept_everything() {
        let mut listener = CountingListener { steps: 0 };
        assert!(listener.feature("Feature", "Login", 1).is_ok());
        assert!(listener.row(&["a".to_string()], 2).is_ok());
        assert!(listener.syntax_error(EventKind::Step, 3, &[EventKind::Scenario]).is_ok());
        assert!(listener.eof().is_ok());
        assert_eq!(listener.steps, 0);
    }

    #[test]
    fn overridden_handler_is_used() {
        let mut listener = CountingListener { steps: 0 };
        assert!(listener.step("Given", "a user", 4).is_ok());
        assert_eq!(listener.steps, 1);
    }

    #[test]
    fn abort_carries_its_reason() {
        let abort = ListenerAbort::new("tree builder out of memory");
        assert_eq!(abort.reason(), "tree builder out of memory");
        assert_eq!(
            abort.to_string(),
            "listener aborted the session: tree builder out of memory"
        );
    }
}
