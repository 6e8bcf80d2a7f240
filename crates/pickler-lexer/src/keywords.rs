//! Per-language keyword tables.

/// The keyword vocabulary of one source language.
///
/// Each construct lists its accepted spellings; where one spelling is a
/// prefix of another (`Scenario` / `Scenario Outline`), the scanner tries the
/// scenario-outline table first, so order within a table does not matter.
#[derive(Debug)]
pub struct KeywordSet {
    code: &'static str,
    native_name: &'static str,
    feature: &'static [&'static str],
    background: &'static [&'static str],
    scenario: &'static [&'static str],
    scenario_outline: &'static [&'static str],
    examples: &'static [&'static str],
    steps: &'static [&'static str],
}

static ENGLISH: KeywordSet = KeywordSet {
    code: "en",
    native_name: "English",
    feature: &["Feature"],
    background: &["Background"],
    scenario: &["Scenario"],
    scenario_outline: &["Scenario Outline"],
    examples: &["Examples", "Scenarios"],
    steps: &["Given", "When", "Then", "And", "But", "*"],
};

static FRENCH: KeywordSet = KeywordSet {
    code: "fr",
    native_name: "français",
    feature: &["Fonctionnalité"],
    background: &["Contexte"],
    scenario: &["Scénario"],
    scenario_outline: &["Plan du scénario", "Plan du Scénario"],
    examples: &["Exemples"],
    steps: &[
        "Soit",
        "Étant donné",
        "Etant donné",
        "Quand",
        "Lorsque",
        "Alors",
        "Et",
        "Mais",
        "*",
    ],
};

static SWEDISH: KeywordSet = KeywordSet {
    code: "sv",
    native_name: "svenska",
    feature: &["Egenskap"],
    background: &["Bakgrund"],
    scenario: &["Scenario"],
    scenario_outline: &["Abstrakt Scenario", "Scenariomall"],
    examples: &["Exempel"],
    steps: &["Givet", "När", "Så", "Och", "Men", "*"],
};

static ALL: [&KeywordSet; 3] = [&ENGLISH, &FRENCH, &SWEDISH];

impl KeywordSet {
    /// Resolve a language code against the built-in tables.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use pickler_lexer::KeywordSet;
    ///
    /// assert!(KeywordSet::for_code("fr").is_some());
    /// assert!(KeywordSet::for_code(" EN ").is_some());
    /// assert!(KeywordSet::for_code("tlh").is_none());
    /// ```
    #[must_use]
    pub fn for_code(code: &str) -> Option<&'static Self> {
        let trimmed = code.trim();
        ALL.into_iter()
            .find(|set| set.code.eq_ignore_ascii_case(trimmed))
    }

    /// The language codes with built-in tables.
    #[must_use]
    pub fn supported_codes() -> Vec<&'static str> {
        ALL.into_iter().map(|set| set.code).collect()
    }

    /// The language code this table belongs to.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The language's own name for itself.
    #[must_use]
    pub const fn native_name(&self) -> &'static str {
        self.native_name
    }

    /// Spellings of the feature keyword.
    #[must_use]
    pub const fn feature(&self) -> &'static [&'static str] {
        self.feature
    }

    /// Spellings of the background keyword.
    #[must_use]
    pub const fn background(&self) -> &'static [&'static str] {
        self.background
    }

    /// Spellings of the scenario keyword.
    #[must_use]
    pub const fn scenario(&self) -> &'static [&'static str] {
        self.scenario
    }

    /// Spellings of the scenario outline keyword.
    #[must_use]
    pub const fn scenario_outline(&self) -> &'static [&'static str] {
        self.scenario_outline
    }

    /// Spellings of the examples keyword.
    #[must_use]
    pub const fn examples(&self) -> &'static [&'static str] {
        self.examples
    }

    /// The step keywords, including the language-neutral `*`.
    #[must_use]
    pub const fn steps(&self) -> &'static [&'static str] {
        self.steps
    }
}
