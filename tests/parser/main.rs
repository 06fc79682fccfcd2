//! Integration tests for Layer 3: Parser
//!
//! End-to-end analyses of words through the bundled lexicon, the output
//! formats, and analyzer configuration.

mod config;
mod formats;
mod scenarios;

use std::sync::LazyLock;

use trmorph_parser::{Analyzer, Format, ParserConfig};

pub static FULL: LazyLock<Analyzer> =
    LazyLock::new(|| Analyzer::bundled(ParserConfig::full()).unwrap());

pub static BASIC: LazyLock<Analyzer> =
    LazyLock::new(|| Analyzer::bundled(ParserConfig::basic()).unwrap());

/// Every analysis of `word` rendered in `format`.
pub fn rendered(analyzer: &Analyzer, word: &str, format: Format) -> Vec<String> {
    analyzer.analyze(word).iter().map(|c| format.render(c)).collect()
}
