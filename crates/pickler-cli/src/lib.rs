//! Command line validation front end for `pickler`.
//!
//! The binary lexes each given feature file with the selected language's
//! keyword table, runs the event stream through the shared feature grammar,
//! and reports every grammar violation it finds. The default (recovering)
//! mode collects all defects in a document in one pass; `--strict` stops at
//! the first.

mod cli;
mod diagnostics;
mod report;

pub use cli::run;
