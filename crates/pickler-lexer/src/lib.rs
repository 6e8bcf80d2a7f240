//! Line-oriented lexer for feature documents.
//!
//! The lexer turns raw source text into the ordered event sequence consumed
//! by the `pickler` engine, terminating in an end-of-input event. Keyword
//! recognition is driven by a per-language [`KeywordSet`], selected
//! explicitly at construction: many lexers map local keywords onto the same
//! event vocabulary, so one grammar table serves every source language.
//!
//! # Examples
//!
//! ```
//! use pickler_lexer::{KeywordSet, Lexer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keywords = KeywordSet::for_code("en").ok_or("missing language")?;
//! let events = Lexer::new(keywords).scan("Feature: Login\n");
//! assert_eq!(events.len(), 2); // the feature header and end-of-input
//! # Ok(())
//! # }
//! ```

mod keywords;
mod scanner;

pub use keywords::KeywordSet;
pub use scanner::Lexer;
