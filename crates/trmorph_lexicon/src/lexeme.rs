//! Dictionary entries.

use std::fmt;

use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SecondaryCategory, SyntacticCategory};

/// A dictionary entry: citation form, inflection base, categories and
/// morphological attributes.
///
/// Lexemes are built once while the lexicon loads and are shared behind an
/// `Arc` by every root generated from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    /// Citation form (`yapmak`).
    pub lemma: String,
    /// Inflection base (`yap`).
    pub root: String,
    /// Primary part of speech.
    pub category: SyntacticCategory,
    /// Optional refinement of the category.
    pub secondary: Option<SecondaryCategory>,
    /// Morphological attributes after inference.
    pub attributes: LexemeAttributes,
}

impl Lexeme {
    /// Creates a lexeme with no secondary category and no attributes.
    #[must_use]
    pub fn new(lemma: impl Into<String>, root: impl Into<String>, category: SyntacticCategory) -> Self {
        Self {
            lemma: lemma.into(),
            root: root.into(),
            category,
            secondary: None,
            attributes: LexemeAttributes::empty(),
        }
    }

    /// Sets the secondary category.
    #[must_use]
    pub fn with_secondary(mut self, secondary: SecondaryCategory) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Replaces the attribute set.
    #[must_use]
    pub fn with_attributes(mut self, attributes: LexemeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns true if the lexeme carries the attribute.
    #[must_use]
    pub fn has(&self, attribute: LexemeAttribute) -> bool {
        self.attributes.contains(attribute)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})+{}", self.lemma, self.root, self.category)?;
        if let Some(secondary) = self.secondary {
            write!(f, "+{secondary}")?;
        }
        if !self.attributes.is_empty() {
            let names: Vec<&str> = self.attributes.iter().map(LexemeAttribute::as_str).collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}
