//! Root generation and root map tests.

use std::sync::Arc;

use trmorph_foundation::{LexemeAttribute, PhoneticExpectation, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::{
    CircumflexConvertingRootGenerator, LexiconLoader, Root, RootGenerator, RootMap,
    StandardRootGenerator, bundled_lexemes,
};

fn root_map(text: &str) -> RootMap {
    let lexemes = LexiconLoader::new().load_str(text).unwrap();
    RootMap::build(lexemes.into_iter().map(Arc::new), &StandardRootGenerator).unwrap()
}

fn texts(roots: &[Root]) -> Vec<&str> {
    roots.iter().map(|r| r.text.as_str()).collect()
}

// =============================================================================
// Allomorphs
// =============================================================================

#[test]
fn voicing_allomorphs_share_the_lexeme() {
    let map = root_map("armut\n");
    let plain = &map.get("armut")[0];
    let voiced = &map.get("armud")[0];
    assert!(Arc::ptr_eq(&plain.lexeme, &voiced.lexeme));
    assert!(plain.expectations.contains(PhoneticExpectation::ConsonantStart));
    assert!(voiced.expectations.contains(PhoneticExpectation::VowelStart));
}

#[test]
fn doubling_and_vowel_drop() {
    let map = root_map("hak [A:Doubling]\nburun [A:LastVowelDrop]\n");
    assert!(map.contains("hakk"));
    assert!(map.contains("burn"));
    assert!(map.contains("burun"));
}

#[test]
fn progressive_vowel_drop() {
    let map = root_map("okumak\n");
    assert!(map.contains("oku"));
    assert!(map.contains("ok"));
    assert!(map.get("oku")[0].lexeme.has(LexemeAttribute::ProgressiveVowelDrop));
}

#[test]
fn irregular_stems_come_from_the_table() {
    let map = root_map("ben [P:Pron, Pers; A:RootChange]\n");
    assert_eq!(texts(map.get("ban")), ["ban"]);
    assert!(!map.get("ben")[0].lexeme.has(LexemeAttribute::RootChange));
}

#[test]
fn unknown_irregular_stem_is_an_error() {
    let lexemes = LexiconLoader::new().load_str("kalem [A:RootChange]\n").unwrap();
    assert!(RootMap::build(lexemes.into_iter().map(Arc::new), &StandardRootGenerator).is_err());
}

#[test]
fn circumflex_variants() {
    let lexemes = LexiconLoader::new().load_str("kâğıt\n").unwrap();
    let lexeme = Arc::new(lexemes.into_iter().next().unwrap());
    let roots = CircumflexConvertingRootGenerator::new(StandardRootGenerator)
        .generate(&lexeme)
        .unwrap();
    let texts = texts(&roots);
    assert!(texts.contains(&"kâğıt"));
    assert!(texts.contains(&"kağıt"));
    assert!(texts.contains(&"kağıd"));
}

// =============================================================================
// Dynamic Roots
// =============================================================================

#[test]
fn numeral_roots() {
    let root = Root::numeral("3").unwrap();
    assert_eq!(root.text, "3");
    assert_eq!(root.category(), SyntacticCategory::Numeral);
    assert_eq!(root.lexeme.secondary, Some(SecondaryCategory::Digits));
    assert!(Root::numeral("3a").is_err());
}

#[test]
fn proper_noun_and_abbreviation_roots() {
    let prop = Root::proper_noun("Trabzon");
    assert_eq!(prop.lexeme.secondary, Some(SecondaryCategory::ProperNoun));
    let abbr = Root::abbreviation("TBMM");
    assert_eq!(abbr.lexeme.secondary, Some(SecondaryCategory::Abbreviation));
}

// =============================================================================
// Root Map
// =============================================================================

#[test]
fn homographs_share_a_key() {
    let map = root_map("yüz [P:Num, Card]\nyüz\nyüzmek\n");
    let categories: Vec<SyntacticCategory> = map.get("yüz").iter().map(Root::category).collect();
    assert_eq!(categories.len(), 3);
    assert!(categories.contains(&SyntacticCategory::Numeral));
    assert!(categories.contains(&SyntacticCategory::Noun));
    assert!(categories.contains(&SyntacticCategory::Verb));
}

#[test]
fn bundled_root_map() {
    let map = RootMap::build(bundled_lexemes().unwrap(), &StandardRootGenerator).unwrap();
    assert!(map.contains("kitab"));
    assert!(map.contains("gid"));
    assert!(map.get("xyz").is_empty());
    assert!(map.len() > map.iter().filter(|r| r.lexeme.category == SyntacticCategory::Verb).count());
}
