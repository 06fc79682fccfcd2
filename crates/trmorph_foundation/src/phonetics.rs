//! Phonetic attributes and suffix form resolution.
//!
//! Suffix forms are written with a small pattern language:
//!
//! - a leading `+` marks an optional first letter: `+yA` drops the `y` after
//!   a consonant, `+Im` drops the `I` after a vowel;
//! - `A`, `I` and `O` are placeholders resolved by vowel harmony;
//! - `!` after an `I` forces the unrounded member of the pair.
//!
//! None of these functions fail on well formed input. A combination that
//! cannot be resolved is reported as `false` or `None`, and the parser simply
//! prunes that branch.

use crate::alphabet::{self, Letter};
use crate::attribute::{LexemeAttribute, LexemeAttributes};
use crate::flags::{Flag, FlagSet};

/// A phonetic fact about the end (or start) of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhoneticAttribute {
    /// The last letter is a vowel.
    LastLetterVowel,
    /// The last letter is a consonant.
    LastLetterConsonant,
    /// The last vowel is a front vowel.
    LastVowelFrontal,
    /// The last vowel is a back vowel.
    LastVowelBack,
    /// The last vowel is rounded.
    LastVowelRounded,
    /// The last vowel is unrounded.
    LastVowelUnrounded,
    /// The last letter is voiceless.
    LastLetterVoiceless,
    /// The last letter is not voiceless.
    LastLetterNotVoiceless,
    /// The last letter is a continuant.
    LastLetterContinuant,
    /// The last letter is not a continuant.
    LastLetterNotContinuant,
    /// The last letter is a voiced stop.
    LastLetterVoicedStop,
    /// The last letter is a voiceless stop.
    LastLetterVoicelessStop,
    /// The first letter is a vowel.
    FirstLetterVowel,
    /// The first letter is a consonant.
    FirstLetterConsonant,
    /// The text has no vowel at all.
    HasNoVowel,
}

impl Flag for PhoneticAttribute {
    const ALL: &'static [Self] = &[
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterNotVoiceless,
        Self::LastLetterContinuant,
        Self::LastLetterNotContinuant,
        Self::LastLetterVoicedStop,
        Self::LastLetterVoicelessStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::HasNoVowel,
    ];

    fn bit(self) -> u32 {
        self as u32
    }
}

/// A set of phonetic attributes.
pub type PhoneticAttributes = FlagSet<PhoneticAttribute>;

/// A requirement on the first letter of whatever attaches next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhoneticExpectation {
    /// The next suffix must start with a vowel.
    VowelStart,
    /// The next suffix must start with a consonant.
    ConsonantStart,
}

impl Flag for PhoneticExpectation {
    const ALL: &'static [Self] = &[Self::VowelStart, Self::ConsonantStart];

    fn bit(self) -> u32 {
        self as u32
    }
}

/// A set of phonetic expectations.
pub type PhoneticExpectations = FlagSet<PhoneticExpectation>;

/// Returns the last vowel of the text.
#[must_use]
pub fn last_vowel(seq: &str) -> Option<Letter> {
    seq.chars().rev().map(alphabet::letter).find(|l| l.vowel)
}

/// Returns true if the text contains a vowel.
#[must_use]
pub fn has_vowel(seq: &str) -> bool {
    last_vowel(seq).is_some()
}

/// Counts the vowels of the text.
#[must_use]
pub fn vowel_count(seq: &str) -> usize {
    seq.chars().filter(|c| alphabet::is_vowel(*c)).count()
}

/// Computes the phonetic attributes of a text from its letters alone.
#[must_use]
pub fn plain_attributes(seq: &str) -> PhoneticAttributes {
    use PhoneticAttribute as P;

    let Some(last) = seq.chars().last().map(alphabet::letter) else {
        return PhoneticAttributes::empty();
    };

    let mut attrs = PhoneticAttributes::empty();
    if let Some(vowel) = last_vowel(seq) {
        attrs = attrs.insert(if vowel.rounded {
            P::LastVowelRounded
        } else {
            P::LastVowelUnrounded
        });
        attrs = attrs.insert(if vowel.frontal {
            P::LastVowelFrontal
        } else {
            P::LastVowelBack
        });
    }

    attrs = attrs.insert(if last.vowel {
        P::LastLetterVowel
    } else {
        P::LastLetterConsonant
    });

    if last.voiceless {
        attrs = attrs.insert(P::LastLetterVoiceless);
        if !last.continuant {
            attrs = attrs.insert(P::LastLetterVoicelessStop);
        }
    } else {
        attrs = attrs.insert(P::LastLetterNotVoiceless);
        if !last.continuant && !last.vowel {
            attrs = attrs.insert(P::LastLetterVoicedStop);
        }
    }

    attrs.insert(if last.continuant {
        P::LastLetterContinuant
    } else {
        P::LastLetterNotContinuant
    })
}

/// Computes the phonetic attributes of a text, honoring inverse harmony.
#[must_use]
pub fn attributes(word: &str, lexeme_attributes: LexemeAttributes) -> PhoneticAttributes {
    use PhoneticAttribute as P;

    let attrs = plain_attributes(word);
    if !lexeme_attributes.contains(LexemeAttribute::InverseHarmony) {
        return attrs;
    }
    if attrs.contains(P::LastVowelBack) {
        attrs.remove(P::LastVowelBack).insert(P::LastVowelFrontal)
    } else if attrs.contains(P::LastVowelFrontal) {
        attrs.remove(P::LastVowelFrontal).insert(P::LastVowelBack)
    } else {
        attrs
    }
}

/// Splits a form into its first character and the rest.
fn split_first(form: &str) -> Option<(char, &str)> {
    let mut chars = form.chars();
    chars.next().map(|c| (c, chars.as_str()))
}

/// Skips the optional-letter marker and the optional letter after it.
fn skip_optional(form: &str) -> &str {
    let mut chars = form.chars();
    chars.next();
    chars.next();
    chars.as_str()
}

/// Checks whether a suffix form can attach to a word at all.
///
/// Only the word's letters are considered; a vowel-initial form cannot follow
/// a vowel unless the vowel is an optional `+` letter.
#[must_use]
pub fn is_suffix_form_applicable(word: &str, form: &str) -> bool {
    if form.trim().is_empty() {
        return true;
    }
    if word.trim().is_empty() {
        return false;
    }
    let word = word.trim();
    let form = form.trim();
    let ends_in_vowel = plain_attributes(word).contains(PhoneticAttribute::LastLetterVowel);

    let Some((first, rest)) = split_first(form) else {
        return true;
    };
    if first == '+' {
        let optional_is_vowel = rest.chars().next().is_some_and(alphabet::is_vowel);
        match (optional_is_vowel, ends_in_vowel) {
            (true, true) | (false, false) => is_suffix_form_applicable(word, skip_optional(form)),
            _ => true,
        }
    } else if alphabet::is_vowel(first) {
        !ends_in_vowel
    } else {
        true
    }
}

/// Resolves a suffix form against a word.
///
/// Returns the possibly voiced word and the realized suffix text, or `None`
/// when the word is empty.
#[must_use]
pub fn apply(
    word: &str,
    attrs: PhoneticAttributes,
    form: &str,
    lexeme_attributes: LexemeAttributes,
) -> Option<(String, String)> {
    if form.trim().is_empty() {
        return Some((word.to_string(), String::new()));
    }
    if word.trim().is_empty() {
        return None;
    }

    let ends_in_vowel = attrs.contains(PhoneticAttribute::LastLetterVowel);
    let Some((first, rest)) = split_first(form) else {
        return Some((word.to_string(), String::new()));
    };
    if first != '+' {
        return Some(handle(word, attrs, form, lexeme_attributes));
    }

    let optional_is_vowel = rest.chars().next().is_some_and(alphabet::is_vowel);
    if optional_is_vowel == ends_in_vowel {
        apply(word, attrs, skip_optional(form), lexeme_attributes)
    } else {
        Some(handle(word, attrs, rest, lexeme_attributes))
    }
}

/// Applies voicing and devoicing repairs, then expands harmony placeholders.
fn handle(
    word: &str,
    attrs: PhoneticAttributes,
    form: &str,
    lexeme_attributes: LexemeAttributes,
) -> (String, String) {
    use PhoneticAttribute as P;

    let mut word = word.to_string();
    let mut form: Vec<char> = form.chars().collect();
    let Some(&first) = form.first() else {
        return (word, String::new());
    };
    let first_is_vowel = alphabet::is_vowel(first);

    if !lexeme_attributes.contains(LexemeAttribute::NoVoicing)
        && attrs.contains(P::LastLetterVoicelessStop)
        && first_is_vowel
    {
        if let Some(voiced) = word.chars().last().and_then(alphabet::voice) {
            word.pop();
            word.push(voiced);
        }
    }

    if attrs.contains(P::LastLetterVoiceless) {
        if let Some(devoiced) = alphabet::devoice(first) {
            form[0] = devoiced;
        }
    }

    let back = attrs.contains(P::LastVowelBack);
    let unrounded = attrs.contains(P::LastVowelUnrounded);
    let mut applied = String::with_capacity(form.len() + 2);
    for (i, &c) in form.iter().enumerate() {
        if c == '!' {
            continue;
        }
        let forced_unrounded = form.get(i + 1) == Some(&'!');
        match c {
            'A' => applied.push(if back { 'a' } else { 'e' }),
            'I' => applied.push(match (back, unrounded || forced_unrounded) {
                (true, true) => 'ı',
                (true, false) => 'u',
                (false, true) => 'i',
                (false, false) => 'ü',
            }),
            'O' => applied.push(if back { 'o' } else { 'ö' }),
            // Other upper-case vowels have no harmony rule and vanish.
            'E' | 'U' | 'İ' | 'Ö' | 'Ü' | 'Â' | 'Î' | 'Û' => {}
            other => applied.push(other),
        }
    }

    (word, applied)
}

/// Checks pending phonetic expectations against the form about to attach.
#[must_use]
pub fn expectations_satisfied(expectations: PhoneticExpectations, form: &str) -> bool {
    if expectations.is_empty() {
        return true;
    }
    let form = form.trim();
    if form.is_empty() {
        return false;
    }
    expectations
        .iter()
        .all(|expectation| expectation_satisfied(expectation, form))
}

fn expectation_satisfied(expectation: PhoneticExpectation, form: &str) -> bool {
    let Some((first, rest)) = split_first(form) else {
        return false;
    };
    if first == '+' {
        return expectation_satisfied(expectation, rest)
            || expectation_satisfied(expectation, skip_optional(form));
    }
    match expectation {
        PhoneticExpectation::VowelStart => alphabet::is_vowel(first),
        PhoneticExpectation::ConsonantStart => !alphabet::is_vowel(first),
    }
}

/// Checks whether the surface continues with the applied text.
///
/// With `voicing_allowed`, the last letter of `applied` may also appear in
/// its voiced form on the surface (`armut` matches `armudu`).
#[must_use]
pub fn application_matches(word: &str, applied: &str, voicing_allowed: bool) -> bool {
    if applied.is_empty() {
        return false;
    }
    let word_chars: Vec<char> = word.chars().collect();
    let applied_chars: Vec<char> = applied.chars().collect();
    if applied_chars.len() > word_chars.len() {
        return false;
    }
    if word_chars.starts_with(&applied_chars) {
        return true;
    }
    if !voicing_allowed {
        return false;
    }
    let (last, init) = applied_chars.split_last().unwrap_or((&' ', &[]));
    word_chars.starts_with(init)
        && alphabet::voice(*last).is_some_and(|voiced| voiced == word_chars[init.len()])
}
