//! The lexicon text format.
//!
//! One lexeme per line:
//!
//! ```text
//! kitap
//! akşamüstü [P:Noun, Time; A:CompoundP3sg; R:akşamüst]
//! gitmek [A:Voicing, Causative_dIr]
//! ```
//!
//! `P:` gives the category and an optional secondary category, `A:` the
//! explicit attributes, `R:` a root differing from the lemma and `S:` is
//! ignored. Blank lines and lines starting with `#` are skipped.

use std::collections::HashSet;

use trmorph_foundation::{
    Error, ErrorContext, LexemeAttributes, Result, SecondaryCategory, SyntacticCategory,
    parse_attributes,
};

use crate::inference::infer_attributes;
use crate::lexeme::Lexeme;

/// A lexicon line as written, before category and attribute inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconRecord {
    /// The lemma.
    pub lemma: String,
    /// The root, the lemma unless `R:` says otherwise.
    pub root: String,
    /// The category from `P:`.
    pub category: Option<SyntacticCategory>,
    /// The secondary category from `P:`.
    pub secondary: Option<SecondaryCategory>,
    /// The attributes from `A:`.
    pub attributes: LexemeAttributes,
}

impl LexiconRecord {
    /// Parses one non-empty, non-comment line.
    ///
    /// # Errors
    ///
    /// Returns an error for unbalanced brackets, unknown meta parts and
    /// unknown category or attribute tokens.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (lemma, meta) = match line.split_once('[') {
            Some((lemma, meta)) => (lemma.trim(), Some(meta.trim())),
            None => (line, None),
        };
        if lemma.is_empty() {
            return Err(Error::malformed_line("missing lemma"));
        }

        let mut record = Self {
            lemma: lemma.to_string(),
            root: lemma.to_string(),
            category: None,
            secondary: None,
            attributes: LexemeAttributes::empty(),
        };

        let Some(meta) = meta else {
            return Ok(record);
        };
        let meta = meta
            .strip_suffix(']')
            .filter(|m| !m.contains('[') && !m.contains(']'))
            .ok_or_else(|| Error::malformed_line("unbalanced brackets"))?;

        for part in meta.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            if let Some(categories) = part.strip_prefix("P:") {
                record.parse_categories(categories)?;
            } else if let Some(attributes) = part.strip_prefix("A:") {
                record.attributes = parse_attributes(attributes)?;
            } else if let Some(root) = part.strip_prefix("R:") {
                record.root = root.trim().to_string();
            } else if part.starts_with("S:") {
                // Stem hints are not used.
            } else {
                return Err(Error::malformed_line(format!("unknown meta part '{part}'")));
            }
        }

        Ok(record)
    }

    fn parse_categories(&mut self, text: &str) -> Result<()> {
        let mut tokens = text.split(',').map(str::trim);
        if let Some(primary) = tokens.next().filter(|t| !t.is_empty()) {
            self.category = Some(primary.parse()?);
        }
        if let Some(secondary) = tokens.next().filter(|t| !t.is_empty()) {
            self.secondary = Some(secondary.parse()?);
        }
        if tokens.next().is_some() {
            return Err(Error::malformed_line(format!("too many categories in '{text}'")));
        }
        Ok(())
    }

    /// Fills in the category, strips the infinitive marker from verbs and
    /// infers the remaining attributes.
    ///
    /// A capitalized root is always a proper noun. Without a category, a
    /// root ending in `mak`/`mek` is a verb and anything else is a noun.
    ///
    /// # Errors
    ///
    /// Returns an error for a secondary category without a primary one.
    pub fn into_lexeme(self) -> Result<Lexeme> {
        let Self {
            lemma,
            mut root,
            category,
            mut secondary,
            attributes,
        } = self;

        let capitalized = root.chars().next().is_some_and(char::is_uppercase);
        let category = if capitalized {
            secondary = Some(SecondaryCategory::ProperNoun);
            SyntacticCategory::Noun
        } else {
            match (category, secondary) {
                (Some(category), _) => category,
                (None, None) if root.ends_with("mak") || root.ends_with("mek") => {
                    root.truncate(root.len() - "mak".len());
                    SyntacticCategory::Verb
                }
                (None, None) => SyntacticCategory::Noun,
                (None, Some(secondary)) => {
                    return Err(Error::malformed_line(format!(
                        "secondary category {secondary} without a primary one"
                    )));
                }
            }
        };

        let attributes = infer_attributes(category, &root, attributes);
        Ok(Lexeme {
            lemma,
            root,
            category,
            secondary,
            attributes,
        })
    }
}

/// Reads lexicon text into lexemes.
#[derive(Debug, Clone, Default)]
pub struct LexiconLoader {
    source: Option<String>,
}

impl LexiconLoader {
    /// Creates a loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the source in error messages.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Loads every lexeme in the text, in order, dropping exact duplicates.
    ///
    /// # Errors
    ///
    /// Stops at the first bad line; the error carries its line number.
    pub fn load_str(&self, text: &str) -> Result<Vec<Lexeme>> {
        let mut seen = HashSet::new();
        let mut lexemes = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lexeme = LexiconRecord::parse(line)
                .and_then(LexiconRecord::into_lexeme)
                .map_err(|e| e.with_context(self.context(index + 1, line)))?;
            if seen.insert(lexeme.clone()) {
                lexemes.push(lexeme);
            }
        }

        log::info!("loaded {} lexemes", lexemes.len());
        Ok(lexemes)
    }

    fn context(&self, line: usize, snippet: &str) -> ErrorContext {
        let context = ErrorContext::new().with_line(line).with_snippet(snippet);
        match &self.source {
            Some(source) => context.with_source(source.clone()),
            None => context,
        }
    }
}
