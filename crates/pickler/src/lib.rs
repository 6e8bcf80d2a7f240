//! Table-controlled parsing engine for feature documents.
//!
//! The engine turns an ordered stream of lexical [`Event`]s into validated
//! calls on a [`Listener`], using a [`Grammar`] table as the sole source of
//! truth for which event kind may legally appear next. The three concerns are
//! deliberately separate:
//!
//! - *grammar legality* lives in the [`Grammar`] table and the
//!   [`StateTracker`] that walks it;
//! - *lexical recognition* is the business of whichever event source feeds
//!   [`Parser::run`] (see the `pickler-lexer` crate);
//! - *semantic action* is the listener's business; the engine only guarantees
//!   ordered, validated delivery.
//!
//! One grammar table serves any number of sequential sessions, and many
//! lexers (one per source language) can map local keywords onto the same
//! event vocabulary without the engine changing.
//!
//! # Examples
//!
//! ```
//! use pickler::{ErrorPolicy, Event, EventKind, GrammarBuilder, Parser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = GrammarBuilder::new();
//! let start = builder.add_state("start");
//! let body = builder.add_state("body");
//! let end = builder.add_state("end");
//! builder.allow(start, EventKind::Scenario, body)?;
//! builder.stay(body, EventKind::Step)?;
//! builder.allow(body, EventKind::Eof, end)?;
//! let grammar = builder.build(start)?;
//!
//! struct Sink;
//! impl pickler::Listener for Sink {}
//!
//! let mut sink = Sink;
//! Parser::new(&grammar, &mut sink, ErrorPolicy::Strict).run([
//!     Event::construct(EventKind::Scenario, "Scenario", "Login", 1),
//!     Event::step("Given", "a registered user", 2),
//!     Event::eof(3),
//! ])?;
//! # Ok(())
//! # }
//! ```

mod error;
mod feature;
mod grammar;
mod parser;
mod tracker;

pub use error::{ParseError, ParseFailure};
pub use feature::feature_grammar;
pub use grammar::{Grammar, GrammarBuilder, GrammarError, StateId};
pub use parser::{ErrorPolicy, Parser};
pub use tracker::StateTracker;

pub use pickler_events::{Event, EventKind, Listener, ListenerAbort, ListenerResult};
