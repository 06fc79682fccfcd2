//! One-call construction of a ready parser.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::info;
use trmorph_foundation::Result;
use trmorph_lexicon::{
    CircumflexConvertingRootGenerator, Lexeme, LexiconLoader, RootMap, StandardRootGenerator,
    bundled_lexemes,
};
use trmorph_morphotactics::{MorphemeContainer, PredefinedPaths, SuffixGraph};

use crate::config::ParserConfig;
use crate::finders::{
    BruteForceCompoundNounRootFinder, BruteForceNounRootFinder, BruteForceVerbRootFinder,
    DigitNumeralRootFinder,
    ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder, RootFinder,
    TextNumeralRootFinder, WordRootFinder,
};
use crate::parser::ContextlessParser;

/// A root map, a suffix graph, predefined paths and a parser built from
/// one configuration.
///
/// Everything is immutable once built and shared behind `Arc`, so an
/// analyzer can be used from many threads at once.
#[derive(Debug)]
pub struct Analyzer {
    config: ParserConfig,
    roots: Arc<RootMap>,
    parser: ContextlessParser,
}

impl Analyzer {
    /// Builds an analyzer over the given lexemes.
    ///
    /// # Errors
    ///
    /// Returns an error if a root cannot be generated, the graph does not
    /// compose, or a predefined path cannot be built.
    pub fn new(config: ParserConfig, lexemes: impl IntoIterator<Item = Arc<Lexeme>>) -> Result<Self> {
        let roots = if config.circumflex_variants {
            RootMap::build(lexemes, &CircumflexConvertingRootGenerator::new(StandardRootGenerator))?
        } else {
            RootMap::build(lexemes, &StandardRootGenerator)?
        };
        let roots = Arc::new(roots);
        let graph = Arc::new(SuffixGraph::build(&config.graph)?);
        let predefined = Arc::new(PredefinedPaths::build(
            &roots,
            &graph,
            config.strict_predefined_paths,
        )?);
        let finders = Self::finders(&config, &roots);
        info!(
            "analyzer ready: {} roots, {} predefined roots, {} root finders",
            roots.len(),
            predefined.len(),
            finders.len()
        );

        let parser = ContextlessParser::new(graph, predefined, finders)
            .with_lowercase_fallback(config.lowercase_fallback);
        Ok(Self {
            config,
            roots,
            parser,
        })
    }

    /// Builds an analyzer over the bundled lexicon.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::new`].
    pub fn bundled(config: ParserConfig) -> Result<Self> {
        Self::new(config, bundled_lexemes()?)
    }

    /// Builds an analyzer over lexicon text.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed lexicon line, and see
    /// [`Analyzer::new`].
    pub fn from_lexicon_str(config: ParserConfig, source: &str, text: &str) -> Result<Self> {
        let lexemes = LexiconLoader::new().with_source(source).load_str(text)?;
        Self::new(config, lexemes.into_iter().map(Arc::new))
    }

    /// Builds an analyzer over a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, and see
    /// [`Analyzer::from_lexicon_str`].
    pub fn from_lexicon_file(config: ParserConfig, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_lexicon_str(config, &path.display().to_string(), &text)
    }

    fn finders(config: &ParserConfig, roots: &Arc<RootMap>) -> Vec<Box<dyn RootFinder>> {
        let mut finders: Vec<Box<dyn RootFinder>> = vec![
            Box::new(WordRootFinder::new(Arc::clone(roots))),
            Box::new(TextNumeralRootFinder::new(Arc::clone(roots))),
        ];
        if config.digit_numerals {
            finders.push(Box::new(DigitNumeralRootFinder));
        }
        if config.proper_nouns {
            finders.push(Box::new(ProperNounFromApostropheRootFinder));
            finders.push(Box::new(ProperNounWithoutApostropheRootFinder));
        }
        if config.brute_force_nouns {
            finders.push(Box::new(BruteForceNounRootFinder));
            finders.push(Box::new(BruteForceCompoundNounRootFinder));
        }
        if config.brute_force_verbs {
            finders.push(Box::new(BruteForceVerbRootFinder));
        }
        finders
    }

    /// Every analysis of a word.
    #[must_use]
    pub fn analyze(&self, word: &str) -> Vec<MorphemeContainer> {
        self.parser.parse(word)
    }

    /// The configuration this analyzer was built with.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The root map.
    #[must_use]
    pub fn roots(&self) -> &RootMap {
        &self.roots
    }

    /// The parser.
    #[must_use]
    pub fn parser(&self) -> &ContextlessParser {
        &self.parser
    }

    /// The suffix graph.
    #[must_use]
    pub fn graph(&self) -> &SuffixGraph {
        self.parser.graph()
    }
}

#[cfg(test)]
mod tests {
    use trmorph_foundation::{ErrorKind, SecondaryCategory};
    use trmorph_morphotactics::GraphExtensions;

    use super::*;
    use crate::formatter::format_for_tests;

    fn formatted(analyzer: &Analyzer, word: &str) -> Vec<String> {
        analyzer.analyze(word).iter().map(format_for_tests).collect()
    }

    #[test]
    fn analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }

    #[test]
    fn bundled_full_analyzer() {
        let analyzer = Analyzer::bundled(ParserConfig::full()).unwrap();
        assert!(analyzer.roots().contains("kitab"));
        assert!(analyzer.graph().state_by_name("VERB_COPULA_WITH_TENSE").is_some());
        assert!(!analyzer.analyze("kitaba").is_empty());
    }

    #[test]
    fn digit_numerals_need_their_finder() {
        let basic = Analyzer::bundled(ParserConfig::basic()).unwrap();
        assert!(basic.analyze("3'te").is_empty());

        let full = Analyzer::bundled(ParserConfig::full()).unwrap();
        let results = full.analyze("3'te");
        assert!(!results.is_empty());
        assert!(
            results
                .iter()
                .all(|c| c.root().lexeme.secondary == Some(SecondaryCategory::Digits))
        );
    }

    #[test]
    fn proper_nouns_need_their_finder() {
        let basic = Analyzer::bundled(ParserConfig::basic()).unwrap();
        assert!(basic.analyze("Trabzon'a").is_empty());

        let full = Analyzer::bundled(ParserConfig::full()).unwrap();
        let out = formatted(&full, "Trabzon'a");
        assert!(out.iter().any(|s| s.starts_with("Trabzon(Trabzon)+Noun+Prop")), "{out:?}");
    }

    #[test]
    fn brute_force_finds_unknown_nouns() {
        let config = ParserConfig::basic().with_brute_force_nouns(true);
        let analyzer = Analyzer::bundled(config).unwrap();
        let out = formatted(&analyzer, "sandalyeler");
        assert!(
            out.iter().any(|s| s.starts_with("sandalye(sandalye)+Noun+A3pl")),
            "{out:?}"
        );
    }

    #[test]
    fn brute_force_finds_unknown_verbs() {
        let config = ParserConfig::basic().with_brute_force_verbs(true);
        let analyzer = Analyzer::bundled(config).unwrap();
        let out = formatted(&analyzer, "zoburacak");
        for expected in [
            "zobur(zoburmak)+Verb+Pos+Fut(+yAcAk[acak])+A3sg",
            "zob(zobmak)+Verb+Verb+Caus(Ir[ur])+Pos+Fut(+yAcAk[acak])+A3sg",
        ] {
            assert!(out.iter().any(|s| s == expected), "{expected} not in {out:?}");
        }

        let basic = Analyzer::bundled(ParserConfig::basic()).unwrap();
        assert!(basic.analyze("zoburacak").is_empty());
    }

    #[test]
    fn circumflex_variants() {
        let with = Analyzer::bundled(ParserConfig::basic().with_circumflex_variants(true)).unwrap();
        assert!(!with.analyze("kağıt").is_empty());

        let without = Analyzer::bundled(ParserConfig::basic()).unwrap();
        assert!(without.analyze("kağıt").is_empty());
        assert!(!without.analyze("kâğıt").is_empty());
    }

    #[test]
    fn lexicon_text() {
        let text = "elma\nkedi\nkoşmak\n";
        let analyzer = Analyzer::from_lexicon_str(ParserConfig::basic(), "<test>", text).unwrap();
        assert!(!analyzer.analyze("elmalar").is_empty());
        assert!(!analyzer.analyze("koştu").is_empty());
        assert!(analyzer.analyze("kitap").is_empty());
    }

    #[test]
    fn strict_paths_need_closed_class_roots() {
        let text = "elma\n";
        let lenient = Analyzer::from_lexicon_str(ParserConfig::basic(), "<test>", text);
        assert!(lenient.is_ok());

        let strict = ParserConfig::basic().with_strict_predefined_paths(true);
        let err = Analyzer::from_lexicon_str(strict, "<test>", text).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingRoot { .. }));
    }

    #[test]
    fn missing_lexicon_file() {
        let err = Analyzer::from_lexicon_file(ParserConfig::basic(), "/nonexistent/lexicon.txt").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Io(_)));
    }

    #[test]
    fn graph_follows_config() {
        let config = ParserConfig::basic().with_graph(GraphExtensions::basic().with_copula(true));
        let analyzer = Analyzer::bundled(config).unwrap();
        assert!(analyzer.graph().state_by_name("NOUN_COPULA").is_some());
        assert!(analyzer.graph().state_by_name("PROPER_NOUN_ROOT").is_none());
    }
}
