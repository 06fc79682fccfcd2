//! Lexemes, roots and the lexicon format for trmorph.
//!
//! This crate provides:
//! - [`Lexeme`] - Dictionary entries with categories and attributes
//! - [`Root`] - The orthographic allomorphs the parser matches
//! - [`RootGenerator`] - Allomorph synthesis, with a circumflex-aware wrapper
//! - [`RootMap`] - Roots indexed by surface text
//! - [`LexiconLoader`] - The line-oriented lexicon text format
//! - [`BUNDLED`] - A small built-in lexicon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
pub mod inference;
pub mod lexeme;
pub mod loader;
pub mod root;
pub mod root_map;

use std::sync::Arc;

pub use generator::{CircumflexConvertingRootGenerator, RootGenerator, StandardRootGenerator};
pub use inference::infer_attributes;
pub use lexeme::Lexeme;
pub use loader::{LexiconLoader, LexiconRecord};
pub use root::Root;
pub use root_map::RootMap;

/// The built-in lexicon: closed-class words, the irregular stems and a
/// handful of open-class entries.
pub const BUNDLED: &str = include_str!("../resources/lexicon.txt");

/// Loads the built-in lexicon.
///
/// # Errors
///
/// Only fails if the bundled text itself is malformed.
pub fn bundled_lexemes() -> trmorph_foundation::Result<Vec<Arc<Lexeme>>> {
    Ok(LexiconLoader::new()
        .with_source("<bundled>")
        .load_str(BUNDLED)?
        .into_iter()
        .map(Arc::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use trmorph_foundation::{SecondaryCategory, SyntacticCategory};

    use super::*;

    #[test]
    fn bundled_lexicon_loads() {
        let lexemes = bundled_lexemes().unwrap();
        assert!(lexemes.len() > 100);
        assert!(lexemes.iter().any(|l| l.lemma == "yapmak" && l.root == "yap"));
        assert!(lexemes.iter().any(|l| l.lemma == "o"
            && l.category == SyntacticCategory::Pronoun
            && l.secondary == Some(SecondaryCategory::Demonstrative)));
    }

    #[test]
    fn bundled_roots_cover_irregular_stems() {
        let map = RootMap::build(bundled_lexemes().unwrap(), &StandardRootGenerator).unwrap();
        assert!(map.contains("ban"));
        assert!(map.contains("hep"));
        assert!(map.contains("kitab"));
        assert!(map.get("yi").iter().any(|r| r.lexeme.lemma == "yemek"));
    }
}
