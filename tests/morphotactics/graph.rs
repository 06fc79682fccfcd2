//! Suffix graph composition tests.

use std::collections::HashSet;
use std::sync::Arc;

use trmorph_foundation::SyntacticCategory;
use trmorph_lexicon::{LexiconLoader, Root, RootMap, StandardRootGenerator};
use trmorph_morphotactics::{GraphExtensions, StateKind, SuffixGraph};

fn graph(extensions: &GraphExtensions) -> SuffixGraph {
    SuffixGraph::build(extensions).unwrap()
}

fn first_root(map: &RootMap, text: &str) -> Root {
    map.get(text)[0].clone()
}

// =============================================================================
// Layers
// =============================================================================

#[test]
fn layers_compose_in_order() {
    assert_eq!(graph(&GraphExtensions::basic()).layer_names().collect::<Vec<_>>(), ["basic"]);
    assert_eq!(
        graph(&GraphExtensions::full()).layer_names().collect::<Vec<_>>(),
        ["basic", "proper_noun", "numeral", "copula"]
    );
}

#[test]
fn layers_can_be_toggled() {
    let no_copula = graph(&GraphExtensions::full().with_copula(false));
    assert!(no_copula.state_by_name("NOUN_COPULA").is_none());
    assert!(no_copula.state_by_name("PROPER_NOUN_ROOT").is_some());

    let copula = graph(&GraphExtensions::basic().with_copula(true));
    assert!(copula.state_by_name("NOUN_COPULA").is_some());
    assert!(copula.state_by_name("PROPER_NOUN_ROOT").is_none());
}

#[test]
fn extensions_only_add() {
    let basic = graph(&GraphExtensions::basic());
    let full = graph(&GraphExtensions::full());
    assert!(full.states().len() > basic.states().len());
    assert!(full.suffixes().len() > basic.suffixes().len());
    for state in basic.states() {
        assert!(full.state_by_name(state.name).is_some(), "{}", state.name);
    }
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn names_are_unique() {
    let full = graph(&GraphExtensions::full());
    let states: HashSet<_> = full.states().iter().map(|s| s.name).collect();
    assert_eq!(states.len(), full.states().len());
    let suffixes: HashSet<_> = full.suffixes().iter().map(|s| s.name).collect();
    assert_eq!(suffixes.len(), full.suffixes().len());
}

#[test]
fn edges_stay_inside_the_graph() {
    let full = graph(&GraphExtensions::full());
    for state in full.states() {
        for edge in full.outputs(state.id()) {
            let target = full.state(edge.to);
            assert_eq!(full.state_by_name(target.name).map(|s| s.id()), Some(edge.to));
            assert!(!full.forms(edge.suffix).is_empty(), "{} has no forms", full.suffix(edge.suffix));
        }
    }
}

#[test]
fn terminal_states_have_no_outputs() {
    let full = graph(&GraphExtensions::full());
    for state in full.states().iter().filter(|s| s.kind == StateKind::Terminal) {
        assert!(full.outputs(state.id()).is_empty(), "{}", state.name);
    }
}

#[test]
fn suffix_lookup() {
    let full = graph(&GraphExtensions::full());
    let dat = full.suffix_by_name("Dat_Noun").unwrap();
    assert_eq!(dat.pretty_name, "Dat");
    assert!(full.suffix_by_name("Dat_Verb").is_none());

    let noun_root = full.state_by_name("NOUN_ROOT").unwrap();
    assert_eq!(noun_root.category, SyntacticCategory::Noun);
    assert!(!full.outputs(noun_root.id()).is_empty());
}

#[test]
fn suffix_groups_are_exclusive() {
    let full = graph(&GraphExtensions::full());
    assert!(!full.groups().is_empty());
    let mut seen = HashSet::new();
    for group in full.groups() {
        for member in &group.members {
            assert!(seen.insert(member.name), "{} is in two groups", member.name);
        }
    }
}

// =============================================================================
// Entry States
// =============================================================================

#[test]
fn entry_states_for_loaded_roots() {
    let lexemes = LexiconLoader::new()
        .load_str("kitap\ngitmek [A:Voicing]\nhızlı [P:Adj]\nben [P:Pron, Pers]\n")
        .unwrap();
    let map = RootMap::build(lexemes.into_iter().map(Arc::new), &StandardRootGenerator).unwrap();
    let full = graph(&GraphExtensions::full());
    let entry = |text: &str| full.default_root_state(&first_root(&map, text)).unwrap();

    assert_eq!(entry("kitab").name, "NOUN_ROOT");
    assert_eq!(entry("git").name, "VERB_ROOT");
    assert_eq!(entry("hızlı").category, SyntacticCategory::Adjective);
    assert_eq!(entry("ben").category, SyntacticCategory::Pronoun);
}
