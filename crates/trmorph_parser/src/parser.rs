//! The contextless parser.
//!
//! ```text
//! "kitaba"
//!     │
//!     ▼
//! ┌─────────────────┐
//! │  ROOT FINDERS   │  → k, ki, kit, kita, kitab <kitap>, kitab <Brute>, ...
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ SEED / PREDEF.  │  → kitab+NOUN_ROOT ..a   (or a predefined chain)
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ REQUIRED        │  → progressive vowel drop: ar + Pos + Prog(ıyor)
//! │ TRANSITIONS     │
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ GRAPH SEARCH    │  → kitab+Noun+A3sg+Pnon+Dat(a)
//! └─────────────────┘
//! ```
//!
//! Every candidate is extended one edge at a time, level by level, until it
//! reaches a terminal state. Terminal candidates with nothing left to explain
//! are results; the rest are dropped.

use std::sync::Arc;

use log::{debug, log_enabled, trace, Level};
use trmorph_foundation::alphabet;
use trmorph_foundation::{LexemeAttribute, SyntacticCategory};
use trmorph_lexicon::Root;
use trmorph_morphotactics::{
    MorphemeContainer, PredefinedPaths, StateRef, SuffixGraph, SuffixId, try_suffix,
    try_suffix_form, transition_allowed_for_suffix,
};

use crate::finders::RootFinder;
use crate::formatter::format_for_tests;

/// Finds every analysis of a word without looking at its neighbors.
///
/// The parser owns no mutable state; one instance can serve any number of
/// threads.
pub struct ContextlessParser {
    graph: Arc<SuffixGraph>,
    predefined: Arc<PredefinedPaths>,
    finders: Vec<Box<dyn RootFinder>>,
    lowercase_fallback: bool,
}

impl ContextlessParser {
    /// Creates a parser.
    #[must_use]
    pub fn new(
        graph: Arc<SuffixGraph>,
        predefined: Arc<PredefinedPaths>,
        finders: Vec<Box<dyn RootFinder>>,
    ) -> Self {
        Self {
            graph,
            predefined,
            finders,
            lowercase_fallback: false,
        }
    }

    /// Builder method to also parse capitalized input with its first letter
    /// lowercased.
    #[must_use]
    pub fn with_lowercase_fallback(mut self, enabled: bool) -> Self {
        self.lowercase_fallback = enabled;
        self
    }

    /// The suffix graph.
    #[must_use]
    pub fn graph(&self) -> &SuffixGraph {
        &self.graph
    }

    /// Every analysis of `input`. An empty result means nothing explains
    /// the word.
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        let mut results = self.parse_exact(input);
        if self.lowercase_fallback {
            let mut chars = input.chars();
            if let Some(first) = chars.next().filter(|c| c.is_uppercase()) {
                let lowered = format!("{}{}", alphabet::to_lower(first), chars.as_str());
                debug!("also parsing {lowered}");
                results.extend(self.parse_exact(&lowered));
            }
        }
        results
    }

    fn parse_exact(&self, input: &str) -> Vec<MorphemeContainer> {
        if input.is_empty() {
            return Vec::new();
        }
        debug!("parsing {input}");

        let candidates = self.initial_candidates(input);
        debug!("{} candidates for {input}", candidates.len());
        let candidates = self.apply_required_transitions(candidates, input);

        let results = self.traverse(candidates, input);
        debug!("{} results for {input}", results.len());
        results
    }

    /// Seeds one candidate per root found for every prefix of `input`.
    fn initial_candidates(&self, input: &str) -> Vec<MorphemeContainer> {
        let mut candidates = Vec::new();
        for (end, _) in input.char_indices().skip(1).chain([(input.len(), ' ')]) {
            let partial = &input[..end];
            let roots = self.find_roots(partial, input);
            if !roots.is_empty() {
                trace!("{} roots for {partial}", roots.len());
            }

            for root in roots {
                if self.predefined.has_paths(&root) {
                    for path in self.predefined.paths(&root) {
                        if let Some(rest) = input.strip_prefix(path.surface_so_far()) {
                            trace!("predefined path applies: {path}");
                            candidates.push(path.with_remaining(rest));
                        }
                    }
                } else {
                    self.seed(root, input, &mut candidates);
                }
            }
        }
        candidates
    }

    fn find_roots(&self, partial: &str, input: &str) -> Vec<Root> {
        self.finders
            .iter()
            .flat_map(|finder| finder.find_roots(partial, input))
            .collect()
    }

    fn seed(&self, root: Root, input: &str, candidates: &mut Vec<MorphemeContainer>) {
        let Some(rest) = input.strip_prefix(root.text.as_str()) else {
            trace!("root {root} does not spell a prefix of {input}");
            return;
        };
        match self.graph.default_root_state(&root) {
            Ok(state) => {
                let rest = rest.to_string();
                candidates.push(MorphemeContainer::new(root, state, rest));
            }
            Err(err) => debug!("skipping root {root}: {err}"),
        }
    }

    /// Verb roots left by progressive vowel drop (`ar` of `ara` in `arıyor`)
    /// only ever take the progressive, so it is applied right away.
    fn apply_required_transitions(
        &self,
        candidates: Vec<MorphemeContainer>,
        word: &str,
    ) -> Vec<MorphemeContainer> {
        candidates
            .into_iter()
            .filter_map(|candidate| {
                let lexeme = &candidate.root().lexeme;
                let dropped = lexeme.category == SyntacticCategory::Verb
                    && lexeme.has(LexemeAttribute::ProgressiveVowelDrop)
                    && candidate.root().text.chars().count() + 1 == lexeme.root.chars().count();
                if dropped {
                    self.progressive(&candidate, word)
                } else {
                    Some(candidate)
                }
            })
            .collect()
    }

    fn progressive(&self, candidate: &MorphemeContainer, word: &str) -> Option<MorphemeContainer> {
        let polarity = self.step(candidate, "Pos", "", "VERB_WITH_POLARITY", word);
        let Some(polarity) = polarity else {
            debug!("progressive vowel drop without polarity: {candidate}");
            return None;
        };
        let tense = self.step(&polarity, "Prog", "Iyor", "VERB_WITH_TENSE", word);
        if tense.is_none() {
            debug!("progressive vowel drop without progressive: {candidate}");
        }
        tense
    }

    fn step(
        &self,
        container: &MorphemeContainer,
        suffix: &str,
        pattern: &str,
        to: &str,
        word: &str,
    ) -> Option<MorphemeContainer> {
        let suffix = self.graph.suffix_by_name(suffix)?;
        if !transition_allowed_for_suffix(container, suffix) {
            return None;
        }
        let form = self
            .graph
            .forms(suffix.id())
            .iter()
            .find(|f| f.pattern == pattern)?;
        let to = self.graph.state_by_name(to)?.state_ref();
        try_suffix_form(container, form, to, word)
    }

    fn traverse(&self, mut candidates: Vec<MorphemeContainer>, word: &str) -> Vec<MorphemeContainer> {
        let mut results = Vec::new();
        while !candidates.is_empty() {
            let mut next = Vec::new();
            for candidate in &candidates {
                for extended in self.traverse_candidate(candidate, word) {
                    if !extended.last_state().is_terminal() {
                        next.push(extended);
                    } else if extended.remaining().is_empty() {
                        if log_enabled!(Level::Debug) {
                            debug!("result: {}", format_for_tests(&extended));
                        }
                        results.push(extended);
                    } else {
                        trace!("terminal with {} left: {extended}", extended.remaining());
                    }
                }
            }
            candidates = next;
        }
        results
    }

    fn traverse_candidate(&self, container: &MorphemeContainer, word: &str) -> Vec<MorphemeContainer> {
        let from = container.last_state();
        if from.is_terminal() {
            return vec![container.clone()];
        }
        self.applicable_edges(from, container)
            .into_iter()
            .flat_map(|(suffix, to)| {
                let suffix_ref = self.graph.suffix(suffix);
                try_suffix(container, suffix_ref, self.graph.forms(suffix), to, word)
            })
            .collect()
    }

    /// Outgoing edges whose suffix is neither used since the last derivation
    /// nor blocked by a group member used since then.
    fn applicable_edges(
        &self,
        from: StateRef,
        container: &MorphemeContainer,
    ) -> Vec<(SuffixId, StateRef)> {
        self.graph
            .outputs(from.id)
            .iter()
            .filter(|edge| {
                let suffix = self.graph.suffix(edge.suffix);
                let used = container.suffixes_since_derivation().any(|s| s.id() == edge.suffix);
                let grouped = suffix
                    .group
                    .is_some_and(|g| container.has_group_since_derivation(g));
                !used && !grouped
            })
            .map(|edge| (edge.suffix, self.graph.state_ref(edge.to)))
            .collect()
    }
}

impl std::fmt::Debug for ContextlessParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextlessParser")
            .field("graph", &self.graph)
            .field("predefined", &self.predefined.len())
            .field("finders", &self.finders.iter().map(|f| f.name()).collect::<Vec<_>>())
            .field("lowercase_fallback", &self.lowercase_fallback)
            .finish()
    }
}
