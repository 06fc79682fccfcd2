//! Predefined path tests against the bundled lexicon.

use std::sync::LazyLock;

use trmorph_foundation::SyntacticCategory;
use trmorph_lexicon::{Root, RootMap, StandardRootGenerator, bundled_lexemes};
use trmorph_morphotactics::{GraphExtensions, PredefinedPaths, SuffixGraph};

struct Fixture {
    roots: RootMap,
    paths: PredefinedPaths,
}

static FIXTURE: LazyLock<Fixture> = LazyLock::new(|| {
    let roots = RootMap::build(bundled_lexemes().unwrap(), &StandardRootGenerator).unwrap();
    let graph = SuffixGraph::build(&GraphExtensions::full()).unwrap();
    let paths = PredefinedPaths::build(&roots, &graph, true).unwrap();
    Fixture { roots, paths }
});

fn pronoun(text: &str) -> &'static Root {
    FIXTURE
        .roots
        .get(text)
        .iter()
        .find(|r| r.lexeme.category == SyntacticCategory::Pronoun)
        .unwrap()
}

#[test]
fn paths_belong_to_their_root() {
    for root in FIXTURE.roots.iter().filter(|r| FIXTURE.paths.has_paths(r)) {
        for container in FIXTURE.paths.paths(root) {
            assert_eq!(container.root(), root);
            assert!(container.surface_so_far().starts_with(root.text.as_str()));
            assert!(!container.transitions().is_empty(), "{container}");
        }
    }
}

#[test]
fn changed_root_is_dative_only() {
    let ban = pronoun("ban");
    let paths = FIXTURE.paths.paths(ban);
    assert_eq!(paths.len(), 1);
    let names: Vec<_> = paths[0].transitions().iter().map(|t| t.suffix().pretty_name).collect();
    assert_eq!(names.last(), Some(&"Dat"));
    assert_eq!(paths[0].transitions().last().unwrap().application.actual, "a");
}

#[test]
fn ordinary_roots_have_no_paths() {
    let kitab = &FIXTURE.roots.get("kitab")[0];
    assert!(!FIXTURE.paths.has_paths(kitab));
    assert!(FIXTURE.paths.paths(kitab).is_empty());
}

#[test]
fn empty_table() {
    let paths = PredefinedPaths::empty();
    assert!(paths.is_empty());
    assert_eq!(paths.len(), 0);
    assert!(!paths.has_paths(pronoun("ban")));
    assert!(FIXTURE.paths.len() > 0);
}
