//! Suffix application tests.

use std::sync::Arc;

use trmorph_lexicon::{LexiconLoader, Root, RootMap, StandardRootGenerator};
use trmorph_morphotactics::{GraphExtensions, MorphemeContainer, SuffixGraph, try_suffix};

fn setup(lexicon: &str) -> (RootMap, SuffixGraph) {
    let lexemes = LexiconLoader::new().load_str(lexicon).unwrap();
    let roots = RootMap::build(lexemes.into_iter().map(Arc::new), &StandardRootGenerator).unwrap();
    let graph = SuffixGraph::build(&GraphExtensions::basic()).unwrap();
    (roots, graph)
}

fn seed(graph: &SuffixGraph, root: &Root, word: &str) -> MorphemeContainer {
    let state = graph.default_root_state(root).unwrap();
    let rest = word.strip_prefix(root.text.as_str()).unwrap();
    MorphemeContainer::new(root.clone(), state, rest)
}

/// Applies the named suffix along the first matching edge out of the
/// container's current state.
fn apply(graph: &SuffixGraph, container: &MorphemeContainer, name: &str, word: &str) -> Vec<MorphemeContainer> {
    let edge = graph
        .outputs(container.last_state().id)
        .iter()
        .find(|e| graph.suffix(e.suffix).name == name)
        .unwrap_or_else(|| panic!("no {name} edge"));
    let to = graph.state_ref(edge.to);
    try_suffix(container, graph.suffix(edge.suffix), graph.forms(edge.suffix), to, word)
}

#[test]
fn free_suffix_consumes_nothing() {
    let (roots, graph) = setup("ev\n");
    let root = &roots.get("ev")[0];
    let container = seed(&graph, root, "evler");

    let applied = apply(&graph, &container, "A3Sg_Noun", "evler");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].surface_so_far(), "ev");
    assert_eq!(applied[0].remaining(), "ler");
    assert_eq!(applied[0].last_state().name, "NOUN_WITH_AGREEMENT");
}

#[test]
fn plural_follows_harmony() {
    let (roots, graph) = setup("ev\nkapı\n");

    let ev = seed(&graph, &roots.get("ev")[0], "evler");
    let applied = apply(&graph, &ev, "A3Pl_Noun", "evler");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].surface_so_far(), "evler");
    assert_eq!(applied[0].remaining(), "");
    let transition = applied[0].last_transition().unwrap();
    assert_eq!(transition.application.actual, "ler");
    assert_eq!(transition.pattern(), "lAr");

    let kapi = seed(&graph, &roots.get("kapı")[0], "kapılar");
    let applied = apply(&graph, &kapi, "A3Pl_Noun", "kapılar");
    assert_eq!(applied[0].surface_so_far(), "kapılar");
}

#[test]
fn mismatching_surface_is_rejected() {
    let (roots, graph) = setup("ev\n");
    let container = seed(&graph, &roots.get("ev")[0], "evlar");
    assert!(apply(&graph, &container, "A3Pl_Noun", "evlar").is_empty());
}

#[test]
fn application_does_not_touch_the_source() {
    let (roots, graph) = setup("ev\n");
    let container = seed(&graph, &roots.get("ev")[0], "evler");
    let before = container.clone();
    let _ = apply(&graph, &container, "A3Pl_Noun", "evler");
    assert_eq!(container, before);
    assert!(container.transitions().is_empty());
}
