//! Lexical events and their fixed vocabulary.

use std::fmt;
use std::str::FromStr;

/// The category of a lexical event, drawn from the grammar's fixed vocabulary.
///
/// The vocabulary is closed: every grammar table and every listener is defined
/// over exactly these kinds, so event routing is an exhaustive match rather
/// than a runtime name lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// A `#`-prefixed comment line.
    Comment,
    /// A single `@tag` taken from a tag line.
    Tag,
    /// A feature header (`Feature: …`).
    Feature,
    /// A background header (`Background: …`).
    Background,
    /// A scenario header (`Scenario: …`).
    Scenario,
    /// A scenario outline header (`Scenario Outline: …`).
    ScenarioOutline,
    /// An examples header inside a scenario outline (`Examples: …`).
    Examples,
    /// A step line (`Given …`, `When …`, …).
    Step,
    /// A `|`-delimited table row.
    Row,
    /// A `"""`-fenced docstring block.
    PyString,
    /// The designated end-of-input event; every well-formed source ends here.
    Eof,
}

impl EventKind {
    /// Every kind in the vocabulary, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Comment,
        Self::Tag,
        Self::Feature,
        Self::Background,
        Self::Scenario,
        Self::ScenarioOutline,
        Self::Examples,
        Self::Step,
        Self::Row,
        Self::PyString,
        Self::Eof,
    ];

    /// Return the stable lowercase name used in diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use pickler_events::EventKind;
    ///
    /// assert_eq!(EventKind::ScenarioOutline.as_str(), "scenario_outline");
    /// assert_eq!(EventKind::Eof.as_str(), "eof");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Tag => "tag",
            Self::Feature => "feature",
            Self::Background => "background",
            Self::Scenario => "scenario",
            Self::ScenarioOutline => "scenario_outline",
            Self::Examples => "examples",
            Self::Step => "step",
            Self::Row => "row",
            Self::PyString => "py_string",
            Self::Eof => "eof",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`EventKind`] from its diagnostic name
/// fails. Contains the unrecognised text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(pub String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed)
            .ok_or_else(|| UnknownEventKind(trimmed.to_string()))
    }
}

/// One lexical event: a kind, the 1-based source line it came from, and the
/// ordered payload arguments carried to the consumer.
///
/// Events are immutable once produced; ownership passes from the source to
/// the engine and, by reference, on to the listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    line: u32,
    args: Vec<String>,
}

impl Event {
    /// Create an event from its raw parts.
    #[must_use]
    pub fn new(kind: EventKind, line: u32, args: Vec<String>) -> Self {
        Self { kind, line, args }
    }

    /// Create a comment event carrying the comment text.
    #[must_use]
    pub fn comment(content: impl Into<String>, line: u32) -> Self {
        Self::new(EventKind::Comment, line, vec![content.into()])
    }

    /// Create a tag event carrying the tag name (with its leading `@`).
    #[must_use]
    pub fn tag(name: impl Into<String>, line: u32) -> Self {
        Self::new(EventKind::Tag, line, vec![name.into()])
    }

    /// Create a construct-header event (`feature`, `background`, `scenario`,
    /// `scenario_outline`, or `examples`) carrying the matched keyword and
    /// the construct name.
    #[must_use]
    pub fn construct(
        kind: EventKind,
        keyword: impl Into<String>,
        name: impl Into<String>,
        line: u32,
    ) -> Self {
        debug_assert!(
            matches!(
                kind,
                EventKind::Feature
                    | EventKind::Background
                    | EventKind::Scenario
                    | EventKind::ScenarioOutline
                    | EventKind::Examples
            ),
            "construct events carry a keyword and a name"
        );
        Self::new(kind, line, vec![keyword.into(), name.into()])
    }

    /// Create a step event carrying the matched keyword and the step text.
    #[must_use]
    pub fn step(keyword: impl Into<String>, text: impl Into<String>, line: u32) -> Self {
        Self::new(EventKind::Step, line, vec![keyword.into(), text.into()])
    }

    /// Create a table-row event carrying one argument per cell.
    #[must_use]
    pub fn row(cells: Vec<String>, line: u32) -> Self {
        Self::new(EventKind::Row, line, cells)
    }

    /// Create a docstring event carrying the dedented content.
    #[must_use]
    pub fn py_string(content: impl Into<String>, line: u32) -> Self {
        Self::new(EventKind::PyString, line, vec![content.into()])
    }

    /// Create the end-of-input event. By convention the line is one past the
    /// last source line.
    #[must_use]
    pub fn eof(line: u32) -> Self {
        Self::new(EventKind::Eof, line, Vec::new())
    }

    /// The event's kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// The 1-based source line the event was produced from.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The ordered payload arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The payload argument at `index`, or the empty string when the payload
    /// is shorter than the dispatch position asks for.
    #[must_use]
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map_or("", String::as_str)
    }
}
