//! Root finders and analyzer configuration.

use trmorph_foundation::{ErrorKind, SecondaryCategory, SyntacticCategory};
use trmorph_morphotactics::GraphExtensions;
use std::sync::LazyLock;

use trmorph_parser::{
    Analyzer, BruteForceVerbRootFinder, DigitNumeralRootFinder, Format, ParserConfig,
    ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder, RootFinder,
};

use crate::{BASIC, FULL, rendered};

// =============================================================================
// Root Finders
// =============================================================================

#[test]
fn digit_finder_reads_numbers() {
    let finder = DigitNumeralRootFinder;
    for digits in ["3", "-12", "3,5", "1.000.000"] {
        let roots = finder.find_roots(digits, digits);
        assert_eq!(roots.len(), 1, "{digits}");
        assert_eq!(roots[0].lexeme.secondary, Some(SecondaryCategory::Digits));
    }
    assert!(finder.find_roots("3a", "3a").is_empty());
    assert!(finder.find_roots("1.00", "1.00").is_empty());
    assert!(finder.find_roots("٣", "٣'e").is_empty());
}

#[test]
fn only_ascii_digits_are_numerals() {
    assert!(!FULL.analyze("3'e").is_empty());
    for word in ["٣'e", "٣"] {
        let digits = FULL
            .analyze(word)
            .into_iter()
            .filter(|c| c.root().lexeme.secondary == Some(SecondaryCategory::Digits))
            .count();
        assert_eq!(digits, 0, "{word}");
    }
}

#[test]
fn apostrophe_finder() {
    let finder = ProperNounFromApostropheRootFinder;
    let roots = finder.find_roots("Ankara'", "Ankara'ya");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].text, "Ankara");
    assert_eq!(roots[0].lexeme.secondary, Some(SecondaryCategory::ProperNoun));

    let roots = finder.find_roots("TBMM'", "TBMM'ye");
    assert_eq!(roots[0].lexeme.secondary, Some(SecondaryCategory::Abbreviation));

    assert!(finder.find_roots("Ankara", "Ankara'ya").is_empty());
    assert!(finder.find_roots("kitap'", "kitap'a").is_empty());
}

#[test]
fn capitalized_finder() {
    let finder = ProperNounWithoutApostropheRootFinder;
    assert_eq!(finder.find_roots("Ankara", "Ankaralı")[0].text, "Ankara");
    assert_eq!(
        finder.find_roots("TBMM", "TBMM")[0].lexeme.secondary,
        Some(SecondaryCategory::Abbreviation)
    );
    assert!(finder.find_roots("ankara", "ankaralı").is_empty());
    assert!(finder.find_roots("Ankara", "Ankara'ya").is_empty());
}

#[test]
fn finders_have_distinct_names() {
    let finders: [&dyn RootFinder; 4] = [
        &DigitNumeralRootFinder,
        &ProperNounFromApostropheRootFinder,
        &ProperNounWithoutApostropheRootFinder,
        &BruteForceVerbRootFinder,
    ];
    let mut names: Vec<_> = finders.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 4);
}

// =============================================================================
// Brute-Force Verbs
// =============================================================================

static VERBS: LazyLock<Analyzer> = LazyLock::new(|| {
    Analyzer::bundled(ParserConfig::basic().with_brute_force_verbs(true)).unwrap()
});

fn assert_verb_analyses(word: &str, expected: &[&str]) {
    let out = rendered(&VERBS, word, Format::Tests);
    for analysis in expected {
        assert!(out.iter().any(|s| s == analysis), "{analysis} not in {out:?}");
    }
}

#[test]
fn brute_force_verbs_stay_off_by_default() {
    assert!(!ParserConfig::full().brute_force_verbs);
    assert!(BASIC.analyze("asdasmo").is_empty());
}

#[test]
fn unknown_verbs_without_suffixes() {
    assert_verb_analyses("asdasmo", &["asdasmo(asdasmomak)+Verb+Pos+Imp+A2sg"]);
    assert_verb_analyses("balpaze", &["balpaze(balpazemek)+Verb+Pos+Imp+A2sg"]);
    for word in ["dp", "ayl", "anf", "azz", "ddr", "xxx"] {
        assert!(VERBS.analyze(word).is_empty(), "{word}");
    }
}

#[test]
fn unknown_verbs_with_progressive_vowel_drop() {
    assert_verb_analyses(
        "elliyorduk",
        &[
            "ell(ellemek)+Verb+Pos+Prog(Iyor[iyor])+Past(dI[du])+A1pl(k[k])",
            "ell(ellimek)+Verb+Pos+Prog(Iyor[iyor])+Past(dI[du])+A1pl(k[k])",
        ],
    );
}

#[test]
fn unknown_verbs_with_causatives_and_aorists() {
    assert_verb_analyses(
        "zebersin",
        &[
            "zeb(zebmek)+Verb+Pos+Aor(+Ar[er])+A2sg(sIn[sin])",
            "zeb(zebmek)+Verb+Verb+Caus(Ar[er])+Pos+Imp+A3sg(sIn[sin])",
        ],
    );
    assert_verb_analyses(
        "akıtmışlar",
        &[
            "ak(akmak)+Verb+Verb+Caus(It[ıt])+Pos+Narr(mIş[mış])+A3pl(lAr[lar])",
            "akı(akımak)+Verb+Verb+Caus(t[t])+Pos+Narr(mIş[mış])+A3pl(lAr[lar])",
        ],
    );
}

#[test]
fn unknown_verbs_with_passives() {
    assert_verb_analyses(
        "zebersin",
        &["zebersi(zebersimek)+Verb+Verb+Pass(+In[n])+Pos+Imp+A2sg"],
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn full_finds_more_than_basic() {
    assert!(BASIC.analyze("Ankara'ya").is_empty());
    let out = rendered(&FULL, "Ankara'ya", Format::Parseset);
    assert!(out.iter().any(|s| s.starts_with("Ankara+Noun+Prop")), "{out:?}");

    assert!(BASIC.analyze("3'te").is_empty());
    assert!(!FULL.analyze("3'te").is_empty());
}

#[test]
fn lowercase_fallback() {
    assert!(BASIC.analyze("Kitaba").is_empty());
    let out = rendered(&FULL, "Kitaba", Format::Tests);
    assert!(out.iter().any(|s| s.starts_with("kitab(kitap)+Noun")), "{out:?}");
}

#[test]
fn text_numerals() {
    let out = rendered(&FULL, "üç", Format::Parseset);
    assert!(out.iter().any(|s| s.starts_with("üç+Num+Card")), "{out:?}");
}

#[test]
fn copula_layer() {
    let without = Analyzer::bundled(
        ParserConfig::basic().with_graph(GraphExtensions::basic().with_copula(false)),
    )
    .unwrap();
    let with = Analyzer::bundled(
        ParserConfig::basic().with_graph(GraphExtensions::basic().with_copula(true)),
    )
    .unwrap();
    assert!(with.analyze("evdeyim").len() >= without.analyze("evdeyim").len());
    assert!(!with.analyze("evdeyim").is_empty());
}

#[test]
fn custom_lexicon() {
    let analyzer =
        Analyzer::from_lexicon_str(ParserConfig::basic(), "<test>", "elma\nkoşmak\n").unwrap();
    assert!(analyzer.roots().contains("elma"));
    assert!(!analyzer.analyze("elmalar").is_empty());
    let out = rendered(&analyzer, "koştu", Format::Tests);
    assert!(out.iter().any(|s| s.contains("Past(dI[tu])")), "{out:?}");
    assert!(analyzer.analyze("kitap").is_empty());
    assert_eq!(
        analyzer.analyze("elmalar")[0].root().lexeme.category,
        SyntacticCategory::Noun
    );
}

#[test]
fn malformed_lexicon() {
    let err = Analyzer::from_lexicon_str(ParserConfig::basic(), "<test>", "elma [P:Nuon]\n")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCategory(_)));
}
