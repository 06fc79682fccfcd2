//! Lexicon loading tests.

use trmorph_foundation::{ErrorKind, LexemeAttribute, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::{LexiconLoader, bundled_lexemes};

const TEXT: &str = "\
# a small lexicon
kitap
armut
Ankara
gitmek [A:Voicing, Causative_dIr]
nasıl [P:Adv, Ques]

akşamüstü [P:Noun, Time; A:CompoundP3sg; R:akşamüst]
";

#[test]
fn loads_records_in_order() {
    let lexemes = LexiconLoader::new().load_str(TEXT).unwrap();
    let lemmas: Vec<&str> = lexemes.iter().map(|l| l.lemma.as_str()).collect();
    assert_eq!(lemmas, ["kitap", "armut", "Ankara", "gitmek", "nasıl", "akşamüstü"]);
}

#[test]
fn infers_categories_and_roots() {
    let lexemes = LexiconLoader::new().load_str(TEXT).unwrap();

    let ankara = &lexemes[2];
    assert_eq!(ankara.category, SyntacticCategory::Noun);
    assert_eq!(ankara.secondary, Some(SecondaryCategory::ProperNoun));

    let gitmek = &lexemes[3];
    assert_eq!(gitmek.category, SyntacticCategory::Verb);
    assert_eq!(gitmek.root, "git");
    assert!(gitmek.has(LexemeAttribute::AoristA));

    let aksamustu = &lexemes[5];
    assert_eq!(aksamustu.root, "akşamüst");
    assert_eq!(aksamustu.secondary, Some(SecondaryCategory::Time));
}

#[test]
fn infers_voicing_for_multisyllabic_stops() {
    let lexemes = LexiconLoader::new().load_str(TEXT).unwrap();
    assert!(lexemes[0].has(LexemeAttribute::Voicing));
    assert!(lexemes[1].has(LexemeAttribute::Voicing));
}

#[test]
fn duplicate_lines_are_dropped() {
    let lexemes = LexiconLoader::new().load_str("ev\nev\nev [P:Noun]\n").unwrap();
    assert_eq!(lexemes.len(), 1);
}

#[test]
fn errors_carry_line_context() {
    let err = LexiconLoader::new()
        .with_source("test.txt")
        .load_str("kitap\nkalem [P:Nuon]\n")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCategory(_)));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(2));
    assert_eq!(context.source.as_deref(), Some("test.txt"));
}

#[test]
fn unknown_attribute_is_an_error() {
    let err = LexiconLoader::new().load_str("kitap [A:Loud]").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownAttribute(_)));
}

#[test]
fn bundled_lexicon_loads() {
    let lexemes = bundled_lexemes().unwrap();
    assert!(lexemes.len() > 100);
    assert!(lexemes.iter().any(|l| l.lemma == "yapmak" && l.root == "yap"));
}
