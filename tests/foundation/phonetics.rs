//! Integration tests for suffix form resolution.
//!
//! Tests vowel harmony, the optional `+` letter, voicing and devoicing.

use trmorph_foundation::phonetics::{apply, attributes, plain_attributes};
use trmorph_foundation::{LexemeAttribute, LexemeAttributes, PhoneticAttribute};

fn resolve(word: &str, form: &str) -> String {
    resolve_with(word, form, LexemeAttributes::empty())
}

fn resolve_with(word: &str, form: &str, lexeme: LexemeAttributes) -> String {
    let (stem, applied) = apply(word, attributes(word, lexeme), form, lexeme).unwrap();
    format!("{stem}{applied}")
}

// =============================================================================
// Harmony
// =============================================================================

#[test]
fn two_way_harmony() {
    assert_eq!(resolve("kapı", "dA"), "kapıda");
    assert_eq!(resolve("ev", "dA"), "evde");
    assert_eq!(resolve("okul", "lAr"), "okullar");
}

#[test]
fn four_way_harmony() {
    assert_eq!(resolve("ev", "+yI"), "evi");
    assert_eq!(resolve("okul", "+yI"), "okulu");
    assert_eq!(resolve("göz", "+yI"), "gözü");
    assert_eq!(resolve("kız", "+yI"), "kızı");
}

#[test]
fn forced_unrounded() {
    assert_eq!(resolve("gel", "mAlI!"), "gelmeli");
    assert_eq!(resolve("oku", "+yAlI!"), "okuyalı");
}

#[test]
fn inverse_harmony() {
    let inverse = LexemeAttributes::of(LexemeAttribute::InverseHarmony);
    assert_eq!(resolve_with("saat", "lAr", inverse), "saatler");
    assert!(attributes("saat", inverse).contains(PhoneticAttribute::LastVowelFrontal));
}

// =============================================================================
// Optional Letters
// =============================================================================

#[test]
fn optional_letter_after_vowel_and_consonant() {
    assert_eq!(resolve("kapı", "+yA"), "kapıya");
    assert_eq!(resolve("ev", "+yA"), "eve");
    assert_eq!(resolve("araba", "+sI"), "arabası");
    assert_eq!(resolve("ev", "+sI"), "evi");
}

// =============================================================================
// Voicing
// =============================================================================

#[test]
fn voicing_before_vowels() {
    assert_eq!(resolve("kitap", "+yA"), "kitaba");
    assert_eq!(resolve("armut", "+yI"), "armudu");
    assert_eq!(resolve("ağaç", "+yI"), "ağacı");
}

#[test]
fn no_voicing_attribute_blocks_voicing() {
    let no_voicing = LexemeAttributes::of(LexemeAttribute::NoVoicing);
    assert_eq!(resolve_with("top", "+yA", no_voicing), "topa");
}

#[test]
fn devoicing_after_voiceless() {
    assert_eq!(resolve("git", "dI"), "gitti");
    assert_eq!(resolve("kitap", "dA"), "kitapta");
    assert_eq!(resolve("ağaç", "cI"), "ağaççı");
}

#[test]
fn plain_attributes_of_empty_text() {
    assert!(plain_attributes("").is_empty());
}
