//! The line classifier that produces parse events.

use pickler_events::{Event, EventKind};

use crate::keywords::KeywordSet;

const FENCE: &str = "\"\"\"";

/// Scans feature-document source text into the engine's event sequence.
///
/// The scan is strictly line-oriented: every line is classified on its own,
/// except inside a `"""` docstring fence, and every event carries the 1-based
/// line it came from. The scan always terminates in an end-of-input event one
/// line past the end of the source. Lines that match nothing (free-form
/// description text) produce no event; legality is the grammar's business,
/// not the lexer's.
#[derive(Debug)]
pub struct Lexer<'k> {
    keywords: &'k KeywordSet,
}

struct DocString {
    indent: usize,
    line: u32,
    content: Vec<String>,
}

impl<'k> Lexer<'k> {
    /// Create a lexer for the given keyword table.
    #[must_use]
    pub const fn new(keywords: &'k KeywordSet) -> Self {
        Self { keywords }
    }

    /// Produce the event sequence for `source`, ending with `eof`.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Event> {
        let mut events = Vec::new();
        let mut fence: Option<DocString> = None;
        let mut line = 0u32;

        for (index, raw) in source.lines().enumerate() {
            line = u32::try_from(index).unwrap_or(u32::MAX - 1).saturating_add(1);

            if let Some(doc) = fence.as_mut() {
                if raw.trim() == FENCE {
                    if let Some(doc) = fence.take() {
                        events.push(close_docstring(doc));
                    }
                } else {
                    doc.content.push(unescape_fences(dedent(raw, doc.indent)));
                }
                continue;
            }

            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                events.push(Event::comment(comment.trim(), line));
            } else if trimmed.starts_with('@') {
                for token in trimmed.split_whitespace() {
                    if token.starts_with('@') {
                        events.push(Event::tag(token, line));
                    }
                }
            } else if trimmed.starts_with('|') {
                events.push(Event::row(split_cells(trimmed), line));
            } else if trimmed == FENCE {
                fence = Some(DocString {
                    indent: leading_whitespace(raw),
                    line,
                    content: Vec::new(),
                });
            } else if let Some(event) = self.match_construct(trimmed, line) {
                events.push(event);
            } else if let Some(event) = self.match_step(trimmed, line) {
                events.push(event);
            } else {
                log::trace!("line {line} is description text; no event produced");
            }
        }

        if let Some(doc) = fence.take() {
            log::trace!("docstring opened on line {} was never closed", doc.line);
            events.push(close_docstring(doc));
        }
        events.push(Event::eof(line.saturating_add(1)));
        events
    }

    fn match_construct(&self, trimmed: &str, line: u32) -> Option<Event> {
        // Outline spellings first: `Scenario` is a prefix of `Scenario Outline`.
        let tables: [(EventKind, &[&str]); 5] = [
            (EventKind::ScenarioOutline, self.keywords.scenario_outline()),
            (EventKind::Feature, self.keywords.feature()),
            (EventKind::Background, self.keywords.background()),
            (EventKind::Scenario, self.keywords.scenario()),
            (EventKind::Examples, self.keywords.examples()),
        ];
        for (kind, spellings) in tables {
            for keyword in spellings {
                if let Some(rest) = trimmed.strip_prefix(keyword)
                    && let Some(name) = rest.strip_prefix(':')
                {
                    return Some(Event::construct(kind, *keyword, name.trim(), line));
                }
            }
        }
        None
    }

    fn match_step(&self, trimmed: &str, line: u32) -> Option<Event> {
        for keyword in self.keywords.steps() {
            if let Some(rest) = trimmed.strip_prefix(keyword)
                && rest.chars().next().is_some_and(char::is_whitespace)
            {
                return Some(Event::step(*keyword, rest.trim(), line));
            }
        }
        None
    }
}

fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// Strip up to `indent` leading whitespace characters, preserving deeper
/// indentation inside the docstring.
fn dedent(raw: &str, indent: usize) -> &str {
    let mut rest = raw;
    for _ in 0..indent {
        match rest.strip_prefix([' ', '\t']) {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }
    rest
}

fn unescape_fences(content: &str) -> String {
    content.replace("\\\"\\\"\\\"", FENCE)
}

fn close_docstring(doc: DocString) -> Event {
    Event::py_string(doc.content.join("\n"), doc.line)
}

/// Split a `|`-delimited row into trimmed cells, honouring `\|`, `\n`, and
/// `\\` escapes. Text before the leading pipe and after the trailing pipe is
/// not a cell.
fn split_cells(row: &str) -> Vec<String> {
    let mut segments: Vec<String> = vec![String::new()];
    let mut escaped = false;
    for ch in row.chars() {
        if escaped {
            if let Some(cell) = segments.last_mut() {
                match ch {
                    '|' => cell.push('|'),
                    'n' => cell.push('\n'),
                    '\\' => cell.push('\\'),
                    other => {
                        cell.push('\\');
                        cell.push(other);
                    }
                }
            }
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '|' {
            segments.push(String::new());
        } else if let Some(cell) = segments.last_mut() {
            cell.push(ch);
        }
    }
    if escaped && let Some(cell) = segments.last_mut() {
        cell.push('\\');
    }

    // The first segment precedes the leading pipe; a final empty segment
    // trails the closing pipe.
    if !segments.is_empty() {
        segments.remove(0);
    }
    if segments.last().is_some_and(|cell| cell.is_empty()) {
        segments.pop();
    }
    segments.iter().map(|cell| cell.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{split_cells, Lexer};
    use crate::keywords::KeywordSet;
    use pickler_events::{Event, EventKind};
    use rstest::{fixture, rstest};

    #[fixture]
    fn english() -> &'static KeywordSet {
        match KeywordSet::for_code("en") {
            Some(set) => set,
            None => panic!("the English table is built in"),
        }
    }

    #[rstest]
    #[case("| name | value |", vec!["name", "value"])]
    #[case("| a |  | c |", vec!["a", "", "c"])]
    #[case("| pipe \\| cell |", vec!["pipe | cell"])]
    #[case("| back\\\\slash |", vec!["back\\slash"])]
    #[case("| two\\nlines |", vec!["two\nlines"])]
    #[case("| unknown \\q escape |", vec!["unknown \\q escape"])]
    #[case("| unterminated", vec!["unterminated"])]
    fn splits_row_cells(#[case] row: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_cells(row), expected);
    }

    #[rstest]
    fn classifies_headers_and_steps(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("Feature: Login\n  Scenario: Happy path\n    Given a user\n");
        assert_eq!(
            events,
            vec![
                Event::construct(EventKind::Feature, "Feature", "Login", 1),
                Event::construct(EventKind::Scenario, "Scenario", "Happy path", 2),
                Event::step("Given", "a user", 3),
                Event::eof(4),
            ]
        );
    }

    #[rstest]
    fn outline_wins_over_scenario(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("Scenario Outline: Proration\n");
        assert_eq!(
            events.first(),
            Some(&Event::construct(
                EventKind::ScenarioOutline,
                "Scenario Outline",
                "Proration",
                1,
            ))
        );
    }

    #[rstest]
    fn a_tag_line_yields_one_event_per_tag(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("@billing @smoke\n");
        assert_eq!(
            events,
            vec![Event::tag("@billing", 1), Event::tag("@smoke", 1), Event::eof(2)]
        );
    }

    #[rstest]
    fn comments_and_blank_lines(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("# header note\n\n   \n");
        assert_eq!(
            events,
            vec![Event::comment("header note", 1), Event::eof(4)]
        );
    }

    #[rstest]
    fn description_lines_produce_no_event(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("Feature: Login\n  As a registered user\n  I want to sign in\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events.last(), Some(&Event::eof(4)));
    }

    #[rstest]
    fn docstrings_are_dedented_to_the_fence(english: &'static KeywordSet) {
        let source = "    \"\"\"\n      indented body\n    flush body\n    \"\"\"\n";
        let events = Lexer::new(english).scan(source);
        assert_eq!(
            events,
            vec![
                Event::py_string("  indented body\nflush body", 1),
                Event::eof(5),
            ]
        );
    }

    #[rstest]
    fn docstring_fences_can_be_escaped(english: &'static KeywordSet) {
        let source = "\"\"\"\nquoting \\\"\\\"\\\" inline\n\"\"\"\n";
        let events = Lexer::new(english).scan(source);
        assert_eq!(
            events.first(),
            Some(&Event::py_string("quoting \"\"\" inline", 1))
        );
    }

    #[rstest]
    fn unterminated_docstring_still_closes(english: &'static KeywordSet) {
        let events = Lexer::new(english).scan("\"\"\"\ndangling content\n");
        assert_eq!(
            events,
            vec![Event::py_string("dangling content", 1), Event::eof(3)]
        );
    }

    #[rstest]
    fn empty_source_yields_only_eof(english: &'static KeywordSet) {
        assert_eq!(Lexer::new(english).scan(""), vec![Event::eof(1)]);
    }

    #[rstest]
    fn keywords_need_their_separator(english: &'static KeywordSet) {
        // `Feature` without a colon and `Givenx` without a space are
        // description text, not events.
        let events = Lexer::new(english).scan("Feature without colon\nGivenx no space\n");
        assert_eq!(events, vec![Event::eof(3)]);
    }
}
