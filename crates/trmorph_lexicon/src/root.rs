//! Concrete root allomorphs.

use std::fmt;
use std::sync::Arc;

use trmorph_foundation::phonetics::{self, PhoneticAttributes, PhoneticExpectations};
use trmorph_foundation::{
    Result, SecondaryCategory, SyntacticCategory, alphabet, digits_to_words,
};

use crate::lexeme::Lexeme;

/// One orthographic allomorph of a lexeme.
///
/// `kitap` owns two roots: `kitap`, which wants a consonant next, and
/// `kitab`, which wants a vowel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    /// The root text as it appears on the surface.
    pub text: String,
    /// The lexeme this root belongs to.
    pub lexeme: Arc<Lexeme>,
    /// Constraints on the first letter of whatever attaches next.
    pub expectations: PhoneticExpectations,
    /// Phonetic facts about the end of the root.
    pub attributes: PhoneticAttributes,
}

impl Root {
    /// Creates a root.
    ///
    /// A root without phonetic attributes (an empty string) keeps no
    /// expectations either.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        lexeme: Arc<Lexeme>,
        expectations: PhoneticExpectations,
        attributes: PhoneticAttributes,
    ) -> Self {
        let expectations = if attributes.is_empty() {
            PhoneticExpectations::empty()
        } else {
            expectations
        };
        Self {
            text: text.into(),
            lexeme,
            expectations,
            attributes,
        }
    }

    /// Creates a root whose attributes are computed from its own letters.
    #[must_use]
    pub fn plain(text: impl Into<String>, lexeme: Arc<Lexeme>) -> Self {
        let text = text.into();
        let attributes = phonetics::plain_attributes(&text);
        Self::new(text, lexeme, PhoneticExpectations::empty(), attributes)
    }

    /// A numeral written with digits, such as `3` or `1.000,5`.
    ///
    /// Suffixes follow the number as it is read aloud, so the attributes come
    /// from the spelled-out form.
    ///
    /// # Errors
    ///
    /// Returns an error if the digits do not form a readable number.
    pub fn numeral(digits: &str) -> Result<Self> {
        let words = digits_to_words(digits)?;
        let lexeme = Lexeme::new(digits, digits, SyntacticCategory::Numeral)
            .with_secondary(SecondaryCategory::Digits);
        Ok(Self::new(
            digits,
            Arc::new(lexeme),
            PhoneticExpectations::empty(),
            phonetics::plain_attributes(&words),
        ))
    }

    /// An abbreviation such as `TBMM` or `ODTÜ`.
    ///
    /// Consonant-final abbreviations are read with a trailing `e` sound.
    #[must_use]
    pub fn abbreviation(abbr: &str) -> Self {
        let lexeme = Lexeme::new(abbr, abbr, SyntacticCategory::Noun)
            .with_secondary(SecondaryCategory::Abbreviation);
        let ends_in_vowel = abbr.chars().last().is_some_and(alphabet::is_vowel);
        let attributes = if ends_in_vowel {
            phonetics::plain_attributes(abbr)
        } else {
            phonetics::plain_attributes(&format!("{abbr}E"))
        };
        Self::new(abbr, Arc::new(lexeme), PhoneticExpectations::empty(), attributes)
    }

    /// A proper noun that is not in the lexicon.
    #[must_use]
    pub fn proper_noun(noun: &str) -> Self {
        let lexeme = Lexeme::new(noun, noun, SyntacticCategory::Noun)
            .with_secondary(SecondaryCategory::ProperNoun);
        Self::plain(noun, Arc::new(lexeme))
    }

    /// The syntactic category of the owning lexeme.
    #[must_use]
    pub fn category(&self) -> SyntacticCategory {
        self.lexeme.category
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.text, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use trmorph_foundation::{PhoneticAttribute as P, PhoneticExpectation};

    use super::*;

    #[test]
    fn empty_root_keeps_no_expectations() {
        let lexeme = Arc::new(Lexeme::new("", "", SyntacticCategory::Noun));
        let root = Root::new(
            "",
            lexeme,
            PhoneticExpectations::of(PhoneticExpectation::VowelStart),
            PhoneticAttributes::empty(),
        );
        assert!(root.expectations.is_empty());
    }

    #[test]
    fn numeral_attributes_come_from_words() {
        let three = Root::numeral("3").unwrap();
        assert_eq!(three.text, "3");
        assert_eq!(three.lexeme.secondary, Some(SecondaryCategory::Digits));
        assert!(three.attributes.contains(P::LastVowelFrontal));
        assert!(three.attributes.contains(P::LastLetterVowel));

        let six = Root::numeral("6").unwrap();
        assert!(six.attributes.contains(P::LastVowelBack));
        assert!(six.attributes.contains(P::LastLetterVowel));

        assert!(Root::numeral("abc").is_err());
    }

    #[test]
    fn abbreviation_reads_with_trailing_e() {
        let tbmm = Root::abbreviation("TBMM");
        assert_eq!(tbmm.lexeme.secondary, Some(SecondaryCategory::Abbreviation));
        assert!(tbmm.attributes.contains(P::LastLetterVowel));
        assert!(tbmm.attributes.contains(P::LastVowelFrontal));

        let odtu = Root::abbreviation("ODTÜ");
        assert!(odtu.attributes.contains(P::LastVowelRounded));
    }

    #[test]
    fn proper_noun_uses_its_own_letters() {
        let ankara = Root::proper_noun("Ankara");
        assert_eq!(ankara.category(), SyntacticCategory::Noun);
        assert!(ankara.attributes.contains(P::LastVowelBack));
    }
}
