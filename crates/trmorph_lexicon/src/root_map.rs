//! Roots indexed by their text.

use std::collections::HashMap;
use std::sync::Arc;

use trmorph_foundation::Result;

use crate::generator::RootGenerator;
use crate::lexeme::Lexeme;
use crate::root::Root;

/// Every generated root, keyed by root text.
///
/// Several roots may share a key (`yemek` the noun and the `ye` of `yemek`
/// the verb); they are kept in generation order.
#[derive(Debug, Clone, Default)]
pub struct RootMap {
    roots: HashMap<String, Vec<Root>>,
    len: usize,
}

impl RootMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the given roots.
    #[must_use]
    pub fn from_roots(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut map = Self::new();
        for root in roots {
            map.insert(root);
        }
        map
    }

    /// Generates the roots of every lexeme and indexes them.
    ///
    /// # Errors
    ///
    /// Fails on the first lexeme the generator rejects.
    pub fn build<G: RootGenerator>(
        lexemes: impl IntoIterator<Item = Arc<Lexeme>>,
        generator: &G,
    ) -> Result<Self> {
        let mut map = Self::new();
        for lexeme in lexemes {
            for root in generator.generate(&lexeme)? {
                map.insert(root);
            }
        }
        log::info!("root map built: {} roots under {} keys", map.len, map.roots.len());
        Ok(map)
    }

    /// Adds a root.
    pub fn insert(&mut self, root: Root) {
        self.roots.entry(root.text.clone()).or_default().push(root);
        self.len += 1;
    }

    /// Roots whose text is exactly `text`.
    #[must_use]
    pub fn get(&self, text: &str) -> &[Root] {
        self.roots.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if some root has this text.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.roots.contains_key(text)
    }

    /// Total number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map has no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over every root, in no particular key order.
    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SyntacticCategory};

    use super::*;
    use crate::generator::StandardRootGenerator;

    #[test]
    fn shared_keys_keep_every_root() {
        let noun = Arc::new(
            Lexeme::new("yemek", "yemek", SyntacticCategory::Noun)
                .with_attributes(LexemeAttributes::of(LexemeAttribute::Voicing)),
        );
        let verb = Arc::new(Lexeme::new("yemek", "ye", SyntacticCategory::Verb));
        let map = RootMap::build([noun, verb], &StandardRootGenerator).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("yemek").len(), 1);
        assert_eq!(map.get("yemeğ").len(), 1);
        assert_eq!(map.get("ye")[0].category(), SyntacticCategory::Verb);
        assert!(map.get("yem").is_empty());
        assert!(!map.contains("yem"));
    }
}
