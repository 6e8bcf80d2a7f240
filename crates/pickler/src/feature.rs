//! The concrete grammar table for feature documents.

use std::sync::LazyLock;

use pickler_events::EventKind;

use crate::grammar::{Grammar, GrammarBuilder, GrammarError, StateId};

static FEATURE_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    build_feature_grammar()
        .unwrap_or_else(|error| panic!("feature document grammar is inconsistent: {error}"))
});

/// The automaton for a feature document.
///
/// Comments are legal everywhere. Tags accumulate before the feature header
/// and before each scenario-level construct; a tag after a step-bearing
/// construct opens the next scenario group, and a document may not end on a
/// dangling tag. Steps, table rows, and docstrings are legal inside
/// `background`, `scenario`, and `scenario_outline`; `examples` blocks only
/// follow an outline. End-of-input is legal in every state except the
/// dangling-tag state, so empty and comment-only documents parse cleanly.
///
/// The table is built once and shared; sessions borrow it read-only.
#[must_use]
pub fn feature_grammar() -> &'static Grammar {
    &FEATURE_GRAMMAR
}

struct States {
    start: StateId,
    feature: StateId,
    background: StateId,
    pre_scenario: StateId,
    scenario: StateId,
    outline: StateId,
    examples: StateId,
    end: StateId,
}

fn build_feature_grammar() -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new();
    let states = States {
        start: builder.add_state("start"),
        feature: builder.add_state("feature"),
        background: builder.add_state("background"),
        pre_scenario: builder.add_state("pre_scenario"),
        scenario: builder.add_state("scenario"),
        outline: builder.add_state("outline"),
        examples: builder.add_state("examples"),
        end: builder.add_state("end"),
    };

    builder.stay(states.start, EventKind::Comment)?;
    builder.stay(states.start, EventKind::Tag)?;
    builder.allow(states.start, EventKind::Feature, states.feature)?;
    builder.allow(states.start, EventKind::Eof, states.end)?;

    builder.stay(states.feature, EventKind::Comment)?;
    builder.stay(states.feature, EventKind::Tag)?;
    builder.allow(states.feature, EventKind::Background, states.background)?;
    builder.allow(states.feature, EventKind::Scenario, states.scenario)?;
    builder.allow(states.feature, EventKind::ScenarioOutline, states.outline)?;
    builder.allow(states.feature, EventKind::Eof, states.end)?;

    for step_bearing in [states.background, states.scenario, states.outline] {
        builder.stay(step_bearing, EventKind::Comment)?;
        builder.stay(step_bearing, EventKind::Step)?;
        builder.stay(step_bearing, EventKind::Row)?;
        builder.stay(step_bearing, EventKind::PyString)?;
        builder.allow(step_bearing, EventKind::Tag, states.pre_scenario)?;
        builder.allow(step_bearing, EventKind::Scenario, states.scenario)?;
        builder.allow(step_bearing, EventKind::ScenarioOutline, states.outline)?;
        builder.allow(step_bearing, EventKind::Eof, states.end)?;
    }
    builder.allow(states.outline, EventKind::Examples, states.examples)?;

    builder.stay(states.pre_scenario, EventKind::Comment)?;
    builder.stay(states.pre_scenario, EventKind::Tag)?;
    builder.allow(states.pre_scenario, EventKind::Scenario, states.scenario)?;
    builder.allow(states.pre_scenario, EventKind::ScenarioOutline, states.outline)?;

    builder.stay(states.examples, EventKind::Comment)?;
    builder.stay(states.examples, EventKind::Row)?;
    builder.stay(states.examples, EventKind::Examples)?;
    builder.allow(states.examples, EventKind::Tag, states.pre_scenario)?;
    builder.allow(states.examples, EventKind::Scenario, states.scenario)?;
    builder.allow(states.examples, EventKind::ScenarioOutline, states.outline)?;
    builder.allow(states.examples, EventKind::Eof, states.end)?;

    builder.build(states.start)
}
