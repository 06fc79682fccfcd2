//! Root allomorph synthesis.
//!
//! A lexeme with none of the modifying attributes gets a single root. One
//! with voicing, doubling, vowel drop or inverse harmony gets a plain root
//! and, when different, a modified one; each carries the expectation that
//! keeps it on its side of the alternation. Irregular stems come from a
//! fixed table.

use std::sync::Arc;

use trmorph_foundation::phonetics::{self, has_vowel};
use trmorph_foundation::{
    Error, ErrorKind, LexemeAttribute as A, PhoneticAttribute as P, PhoneticExpectation,
    PhoneticExpectations, Result, SyntacticCategory, alphabet,
};

use crate::lexeme::Lexeme;
use crate::root::Root;

/// Attributes that make a lexeme produce more than its plain root.
const MODIFIERS: [A; 7] = [
    A::Doubling,
    A::LastVowelDrop,
    A::ProgressiveVowelDrop,
    A::InverseHarmony,
    A::Voicing,
    A::VoicingOpt,
    A::RootChange,
];

/// Irregular stems: lemma and the roots it owns.
const ROOT_CHANGES: &[(&str, [&str; 2])] = &[
    ("ben", ["ben", "ban"]),
    ("sen", ["sen", "san"]),
    ("demek", ["di", "de"]),
    ("yemek", ["yi", "ye"]),
    ("hepsi", ["hep", "hepsi"]),
    ("ora", ["or", "ora"]),
    ("bura", ["bur", "bura"]),
    ("şura", ["şur", "şura"]),
    ("nere", ["ner", "nere"]),
    ("içeri", ["içer", "içeri"]),
    ("dışarı", ["dışar", "dışarı"]),
    ("birbiri", ["birbir", "birbiri"]),
];

/// Turns a lexeme into the roots the parser can match.
pub trait RootGenerator {
    /// Generates every root of the lexeme.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the lexeme's attributes cannot be
    /// realized, e.g. an irregular stem missing from the stem table.
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>>;
}

/// The standard generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRootGenerator;

impl RootGenerator for StandardRootGenerator {
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>> {
        if MODIFIERS.iter().any(|m| lexeme.has(*m)) {
            generate_modified(lexeme)
        } else {
            Ok(vec![Root::plain(lexeme.root.clone(), Arc::clone(lexeme))])
        }
    }
}

fn generate_modified(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>> {
    if lexeme.has(A::RootChange) {
        return root_changes(lexeme);
    }

    let mut modified: Vec<char> = lexeme.root.chars().collect();
    let mut original_attributes = phonetics::plain_attributes(&lexeme.root);
    let mut modified_attributes = original_attributes;
    let mut original_expectations = PhoneticExpectations::empty();
    let mut modified_expectations = PhoneticExpectations::empty();

    if lexeme.has(A::Voicing) || lexeme.has(A::VoicingOpt) {
        let last = modified.last().copied().unwrap_or_default();
        let voiced = if lexeme.lemma.ends_with("nk") {
            Some('g')
        } else {
            alphabet::voice(last)
        };
        let voiced = voiced.ok_or_else(|| {
            Error::internal(format!("cannot voice final '{last}' of {}", lexeme.lemma))
        })?;
        if let Some(slot) = modified.last_mut() {
            *slot = voiced;
        }

        modified_attributes = modified_attributes.remove(P::LastLetterVoicelessStop);
        modified_attributes = if alphabet::letter(voiced).continuant {
            modified_attributes
                .remove(P::LastLetterNotContinuant)
                .insert(P::LastLetterContinuant)
        } else {
            modified_attributes
                .remove(P::LastLetterContinuant)
                .insert(P::LastLetterNotContinuant)
        };
        if !lexeme.has(A::VoicingOpt) {
            original_expectations = original_expectations.insert(PhoneticExpectation::ConsonantStart);
        }
        modified_expectations = modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if lexeme.has(A::Doubling) {
        if let Some(&last) = modified.last() {
            modified.push(last);
        }
        original_expectations = original_expectations.insert(PhoneticExpectation::ConsonantStart);
        modified_expectations = modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if lexeme.has(A::LastVowelDrop) && modified.len() >= 2 {
        modified.remove(modified.len() - 2);
        if lexeme.category != SyntacticCategory::Verb {
            original_expectations = original_expectations.insert(PhoneticExpectation::ConsonantStart);
        }
        modified_expectations = modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if lexeme.has(A::InverseHarmony) {
        original_attributes = original_attributes
            .insert(P::LastVowelFrontal)
            .remove(P::LastVowelBack);
        modified_attributes = modified_attributes
            .insert(P::LastVowelFrontal)
            .remove(P::LastVowelBack);
    }

    if lexeme.has(A::ProgressiveVowelDrop) {
        modified.pop();
        let text: String = modified.iter().collect();
        if has_vowel(&text) {
            modified_attributes = phonetics::plain_attributes(&text);
        }
        modified_expectations = modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    let original = Root::new(
        lexeme.root.clone(),
        Arc::clone(lexeme),
        original_expectations,
        original_attributes,
    );
    let modified = Root::new(
        modified.into_iter().collect::<String>(),
        Arc::clone(lexeme),
        modified_expectations,
        modified_attributes,
    );

    if original == modified {
        Ok(vec![original])
    } else {
        Ok(vec![original, modified])
    }
}

/// Builds the tabled roots of an irregular stem.
///
/// The roots share a copy of the lexeme without the `RootChange` marker.
fn root_changes(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>> {
    let (_, texts) = ROOT_CHANGES
        .iter()
        .find(|(lemma, _)| *lemma == lexeme.lemma)
        .ok_or_else(|| Error::new(ErrorKind::UnhandledRootChange(lexeme.lemma.clone())))?;

    let stripped = Arc::new(Lexeme {
        attributes: lexeme.attributes.remove(A::RootChange),
        ..Lexeme::clone(lexeme)
    });
    Ok(texts
        .iter()
        .map(|text| Root::plain(*text, Arc::clone(&stripped)))
        .collect())
}

/// Wraps another generator and adds circumflex-free spellings.
///
/// `kâğıt` is also written `kağıt`; both spellings map to the same lexeme.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircumflexConvertingRootGenerator<G = StandardRootGenerator> {
    inner: G,
}

impl<G: RootGenerator> CircumflexConvertingRootGenerator<G> {
    /// Wraps the given generator.
    #[must_use]
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: RootGenerator> RootGenerator for CircumflexConvertingRootGenerator<G> {
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>> {
        let mut roots = self.inner.generate(lexeme)?;
        if alphabet::has_circumflex(&lexeme.root) {
            let plain: Vec<Root> = roots
                .iter()
                .map(|root| Root {
                    text: alphabet::strip_circumflex(&root.text),
                    ..root.clone()
                })
                .collect();
            roots.extend(plain);
        }
        Ok(roots)
    }
}
