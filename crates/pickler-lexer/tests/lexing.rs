//! Behavioural tests running lexed documents through the feature grammar.

use pickler::{feature_grammar, ErrorPolicy, EventKind, ParseFailure, Parser};
use pickler_events::{RecordedCall, RecordingListener};
use pickler_lexer::{KeywordSet, Lexer};
use rstest::rstest;

fn keywords(code: &str) -> &'static KeywordSet {
    match KeywordSet::for_code(code) {
        Some(set) => set,
        None => panic!("{code} should be a built-in language"),
    }
}

const ENGLISH_DOCUMENT: &str = "\
# billing features
@billing
Feature: Monthly invoicing
  As a subscriber I am billed monthly.

  Background:
    Given an active subscription

  Scenario Outline: Proration
    When the plan changes to <plan>
    Then the invoice is prorated
    \"\"\"
    line one
    line two
    \"\"\"

    Examples:
      | plan |
      | pro  |

  @smoke
  Scenario: Cancellation
    Then no further invoices are raised
";

const FRENCH_DOCUMENT: &str = "\
Fonctionnalité: Facturation mensuelle

  Contexte:
    Soit un abonnement actif

  Scénario: Résiliation
    Quand l'abonnement est résilié
    Alors aucune facture n'est émise
";

const SWEDISH_DOCUMENT: &str = "\
Egenskap: Månadsfakturering

  Bakgrund:
    Givet en aktiv prenumeration

  Scenario: Uppsägning
    När prenumerationen sägs upp
    Så skapas inga fler fakturor
";

#[rstest]
#[case::english("en", ENGLISH_DOCUMENT)]
#[case::french("fr", FRENCH_DOCUMENT)]
#[case::swedish("sv", SWEDISH_DOCUMENT)]
fn built_in_languages_parse_strictly(#[case] code: &str, #[case] source: &str) {
    let events = Lexer::new(keywords(code)).scan(source);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    assert_eq!(result, Ok(()), "{code} document should parse");
    assert_eq!(listener.calls().last(), Some(&RecordedCall::Eof));
    assert_eq!(listener.syntax_error_count(), 0);
}

#[test]
fn the_english_document_delivers_its_full_event_sequence() {
    let events = Lexer::new(keywords("en")).scan(ENGLISH_DOCUMENT);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    assert_eq!(result, Ok(()));

    let delivered: Vec<_> = listener
        .calls()
        .iter()
        .map(|call| match call {
            RecordedCall::Comment { .. } => "comment",
            RecordedCall::Tag { .. } => "tag",
            RecordedCall::Construct { kind, .. } => kind.as_str(),
            RecordedCall::Step { .. } => "step",
            RecordedCall::Row { .. } => "row",
            RecordedCall::PyString { .. } => "py_string",
            RecordedCall::Eof => "eof",
            RecordedCall::SyntaxError { .. } => "syntax_error",
        })
        .collect();
    assert_eq!(
        delivered,
        [
            "comment",
            "tag",
            "feature",
            "background",
            "step",
            "scenario_outline",
            "step",
            "step",
            "py_string",
            "examples",
            "row",
            "row",
            "tag",
            "scenario",
            "step",
            "eof",
        ]
    );
}

#[test]
fn docstring_content_survives_the_round_trip() {
    let events = Lexer::new(keywords("en")).scan(ENGLISH_DOCUMENT);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    assert_eq!(result, Ok(()));
    let Some(RecordedCall::PyString { content, line }) = listener
        .calls()
        .iter()
        .find(|call| matches!(call, RecordedCall::PyString { .. }))
    else {
        panic!("the docstring should be delivered");
    };
    assert_eq!(content, "line one\nline two");
    assert_eq!(*line, 12);
}

#[test]
fn table_rows_reach_the_listener_as_cells() {
    let events = Lexer::new(keywords("en")).scan(ENGLISH_DOCUMENT);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    assert_eq!(result, Ok(()));
    let rows: Vec<_> = listener
        .calls()
        .iter()
        .filter_map(|call| match call {
            RecordedCall::Row { cells, .. } => Some(cells.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(rows, [vec!["plan".to_string()], vec!["pro".to_string()]]);
}

#[test]
fn a_misplaced_examples_block_is_collected_in_recovering_mode() {
    let source = "\
Feature: Monthly invoicing

  Scenario: Cancellation
    Examples:
      | plan |
    Then no further invoices are raised
";
    let events = Lexer::new(keywords("en")).scan(source);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Recovering).run(events);
    assert_eq!(result, Ok(()));
    assert_eq!(listener.syntax_error_count(), 1);
    let Some(RecordedCall::SyntaxError { found, line, .. }) = listener
        .calls()
        .iter()
        .find(|call| matches!(call, RecordedCall::SyntaxError { .. }))
    else {
        panic!("the misplaced examples block should be reported");
    };
    assert_eq!(*found, EventKind::Examples);
    assert_eq!(*line, 4);
}

#[test]
fn a_step_before_any_feature_fails_strictly_with_the_documented_message() {
    let events = Lexer::new(keywords("en")).scan("Given a step with no feature\n");
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    let Err(ParseFailure::Syntax(error)) = result else {
        panic!("expected a syntax failure, got {result:?}");
    };
    assert_eq!(
        error.to_string(),
        "Parse error on line 1. Found step when expecting one of: comment, tag, feature, eof.",
    );
}

#[test]
fn french_keywords_do_not_resolve_with_the_english_table() {
    let events = Lexer::new(keywords("en")).scan(FRENCH_DOCUMENT);
    // Every line is description text to the English table, so the document
    // lexes to a bare eof and parses as an empty document.
    assert_eq!(events.len(), 1);
    let mut listener = RecordingListener::new();
    let result = Parser::new(feature_grammar(), &mut listener, ErrorPolicy::Strict).run(events);
    assert_eq!(result, Ok(()));
    assert_eq!(listener.calls(), [RecordedCall::Eof]);
}
