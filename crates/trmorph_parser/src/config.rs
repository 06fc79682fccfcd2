//! Configuration for building an analyzer.

use trmorph_morphotactics::GraphExtensions;

/// Which graph layers, root finders and lexicon variants an [`Analyzer`]
/// is built with.
///
/// [`Analyzer`]: crate::Analyzer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ParserConfig {
    /// Layers composed on top of the basic graph.
    pub graph: GraphExtensions,

    /// Also analyze a capitalized word with its first letter lowercased.
    pub lowercase_fallback: bool,

    /// Also index circumflex-free spellings of roots (`kağıt` for `kâğıt`).
    pub circumflex_variants: bool,

    /// Treat a closed-class root missing from the lexicon as an error
    /// instead of skipping its predefined paths.
    pub strict_predefined_paths: bool,

    /// Find numerals written with digits.
    pub digit_numerals: bool,

    /// Find capitalized proper nouns and abbreviations.
    pub proper_nouns: bool,

    /// Guess noun roots for words the lexicon does not know.
    pub brute_force_nouns: bool,

    /// Guess verb roots for words the lexicon does not know.
    pub brute_force_verbs: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl ParserConfig {
    /// The basic graph and lexicon lookup only.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            graph: GraphExtensions::basic(),
            lowercase_fallback: false,
            circumflex_variants: false,
            strict_predefined_paths: false,
            digit_numerals: false,
            proper_nouns: false,
            brute_force_nouns: false,
            brute_force_verbs: false,
        }
    }

    /// Every layer and every finder except the brute-force guesses.
    #[must_use]
    pub fn full() -> Self {
        Self {
            graph: GraphExtensions::full(),
            lowercase_fallback: true,
            circumflex_variants: true,
            strict_predefined_paths: false,
            digit_numerals: true,
            proper_nouns: true,
            brute_force_nouns: false,
            brute_force_verbs: false,
        }
    }

    /// Builder method to set the graph layers.
    #[must_use]
    pub fn with_graph(mut self, graph: GraphExtensions) -> Self {
        self.graph = graph;
        self
    }

    /// Builder method to enable/disable the lowercase fallback.
    #[must_use]
    pub fn with_lowercase_fallback(mut self, enabled: bool) -> Self {
        self.lowercase_fallback = enabled;
        self
    }

    /// Builder method to enable/disable circumflex-free root spellings.
    #[must_use]
    pub fn with_circumflex_variants(mut self, enabled: bool) -> Self {
        self.circumflex_variants = enabled;
        self
    }

    /// Builder method to make missing predefined-path roots an error.
    #[must_use]
    pub fn with_strict_predefined_paths(mut self, strict: bool) -> Self {
        self.strict_predefined_paths = strict;
        self
    }

    /// Builder method to enable/disable digit numerals.
    #[must_use]
    pub fn with_digit_numerals(mut self, enabled: bool) -> Self {
        self.digit_numerals = enabled;
        self
    }

    /// Builder method to enable/disable proper noun finders.
    #[must_use]
    pub fn with_proper_nouns(mut self, enabled: bool) -> Self {
        self.proper_nouns = enabled;
        self
    }

    /// Builder method to enable/disable brute-force noun guesses.
    #[must_use]
    pub fn with_brute_force_nouns(mut self, enabled: bool) -> Self {
        self.brute_force_nouns = enabled;
        self
    }

    /// Builder method to enable/disable brute-force verb guesses.
    #[must_use]
    pub fn with_brute_force_verbs(mut self, enabled: bool) -> Self {
        self.brute_force_verbs = enabled;
        self
    }
}
