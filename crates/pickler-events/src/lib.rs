//! Event vocabulary and listener contract for the `pickler` parsing engine.
//!
//! This crate defines the fixed vocabulary of lexical events a feature
//! document can produce ([`EventKind`]), the [`Event`] value that carries one
//! occurrence of such an event from a lexer to the engine, and the
//! [`Listener`] trait through which validated events reach a consumer. It is
//! the shared leaf crate: lexers depend on it to produce events, the engine
//! depends on it to validate and dispatch them, and consumers depend on it to
//! receive them.

mod event;
mod listener;
#[cfg(feature = "test-support")]
pub mod recording;

pub use event::{Event, EventKind, UnknownEventKind};
pub use listener::{Listener, ListenerAbort, ListenerResult};
#[cfg(feature = "test-support")]
pub use recording::{RecordedCall, RecordingListener};
