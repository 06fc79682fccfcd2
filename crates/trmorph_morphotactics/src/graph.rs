//! The composed, immutable suffix graph.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::info;
use trmorph_foundation::{Error, ErrorKind, Result};
use trmorph_lexicon::Root;

use crate::builder::{GraphBuilder, GraphExtension, GraphExtensions};
use crate::model::{Edge, State, StateId, StateRef, Suffix, SuffixForm, SuffixGroup, SuffixId};

/// States, suffixes and edges of every enabled layer.
///
/// Built once and shared read-only between parses.
pub struct SuffixGraph {
    states: Vec<State>,
    suffixes: Vec<Arc<Suffix>>,
    forms: Vec<Vec<Arc<SuffixForm>>>,
    groups: Vec<SuffixGroup>,
    state_index: HashMap<&'static str, StateId>,
    suffix_index: HashMap<&'static str, SuffixId>,
    layers: Vec<Box<dyn GraphExtension>>,
}

impl SuffixGraph {
    /// Composes the basic graph with the enabled extensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers clash or reference unknown names.
    pub fn build(extensions: &GraphExtensions) -> Result<Self> {
        let layers = extensions.layers();
        let mut builder = GraphBuilder::new();
        for layer in &layers {
            layer.extend(&mut builder)?;
        }
        let graph = builder.finish(layers)?;
        info!(
            "suffix graph built: {} states, {} suffixes, {} layers",
            graph.states.len(),
            graph.suffixes.len(),
            graph.layers.len()
        );
        Ok(graph)
    }

    pub(crate) fn from_parts(
        states: Vec<State>,
        suffixes: Vec<Arc<Suffix>>,
        forms: Vec<Vec<Arc<SuffixForm>>>,
        groups: Vec<SuffixGroup>,
        state_index: HashMap<&'static str, StateId>,
        suffix_index: HashMap<&'static str, SuffixId>,
        layers: Vec<Box<dyn GraphExtension>>,
    ) -> Self {
        Self {
            states,
            suffixes,
            forms,
            groups,
            state_index,
            suffix_index,
            layers,
        }
    }

    /// A state by id.
    #[must_use]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// A copyable reference to a state.
    #[must_use]
    pub fn state_ref(&self, id: StateId) -> StateRef {
        self.states[id.0].state_ref()
    }

    /// A state by name.
    #[must_use]
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.state_index.get(name).map(|id| &self.states[id.0])
    }

    /// A suffix by id.
    #[must_use]
    pub fn suffix(&self, id: SuffixId) -> &Arc<Suffix> {
        &self.suffixes[id.0]
    }

    /// A suffix by name.
    #[must_use]
    pub fn suffix_by_name(&self, name: &str) -> Option<&Arc<Suffix>> {
        self.suffix_index.get(name).map(|id| &self.suffixes[id.0])
    }

    /// The forms of a suffix, in registration order.
    #[must_use]
    pub fn forms(&self, id: SuffixId) -> &[Arc<SuffixForm>] {
        &self.forms[id.0]
    }

    /// Outgoing edges of a state.
    #[must_use]
    pub fn outputs(&self, id: StateId) -> &[Edge] {
        &self.states[id.0].outputs
    }

    /// All groups.
    #[must_use]
    pub fn groups(&self) -> &[SuffixGroup] {
        &self.groups
    }

    /// All states.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All suffixes.
    #[must_use]
    pub fn suffixes(&self) -> &[Arc<Suffix>] {
        &self.suffixes
    }

    /// Names of the composed layers in order.
    pub fn layer_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layers.iter().map(|l| l.name())
    }

    /// The state a root enters the graph at.
    ///
    /// The most recently composed layer that claims the root wins.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingEntryState`] if no layer claims the root.
    pub fn default_root_state(&self, root: &Root) -> Result<StateRef> {
        let name = self
            .layers
            .iter()
            .rev()
            .find_map(|layer| layer.entry_state(root))
            .ok_or_else(|| {
                Error::new(ErrorKind::MissingEntryState {
                    lemma: root.lexeme.lemma.clone(),
                    category: root.category(),
                })
            })?;
        let id = self
            .state_index
            .get(name)
            .ok_or_else(|| Error::unknown_state(name))?;
        Ok(self.state_ref(*id))
    }
}

impl fmt::Debug for SuffixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixGraph")
            .field("states", &self.states.len())
            .field("suffixes", &self.suffixes.len())
            .field("layers", &self.layer_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SecondaryCategory, SyntacticCategory};
    use trmorph_lexicon::Lexeme;

    use super::*;
    use crate::model::StateKind;

    fn root(lemma: &str, category: SyntacticCategory) -> Root {
        Root::plain(lemma, Arc::new(Lexeme::new(lemma, lemma, category)))
    }

    #[test]
    fn basic_graph_builds() {
        let graph = SuffixGraph::build(&GraphExtensions::basic()).unwrap();
        assert!(graph.state_by_name("NOUN_ROOT").is_some());
        assert!(graph.state_by_name("VERB_DEGIL_ROOT").is_none());
        assert!(graph.suffix_by_name("Acc_Noun").is_some());
        assert_eq!(graph.layer_names().collect::<Vec<_>>(), ["basic"]);
    }

    #[test]
    fn full_graph_builds() {
        let graph = SuffixGraph::build(&GraphExtensions::full()).unwrap();
        for name in [
            "PROPER_NOUN_ROOT",
            "NUMERAL_CARDINAL_ROOT",
            "VERB_COPULA_WITH_TENSE",
        ] {
            assert!(graph.state_by_name(name).is_some(), "{name}");
        }
        let cop = graph.state_by_name("NOUN_COPULA").unwrap();
        assert_eq!(cop.kind, StateKind::Derivational);
    }

    #[test]
    fn entry_states_by_category() {
        let graph = SuffixGraph::build(&GraphExtensions::full()).unwrap();
        let entry = |r: &Root| graph.default_root_state(r).unwrap().name;

        assert_eq!(entry(&root("ev", SyntacticCategory::Noun)), "NOUN_ROOT");
        assert_eq!(entry(&root("gel", SyntacticCategory::Verb)), "VERB_ROOT");
        assert_eq!(entry(&root("ve", SyntacticCategory::Conjunction)), "CONJUNCTION_ROOT_TERMINAL");
        assert_eq!(entry(&root("değil", SyntacticCategory::Verb)), "VERB_DEGIL_ROOT");
        assert_eq!(entry(&Root::proper_noun("Ankara")), "PROPER_NOUN_ROOT");
        assert_eq!(entry(&Root::numeral("3").unwrap()), "NUMERAL_DIGIT_CARDINAL_ROOT");

        let compound = Root::plain(
            "zeytinyağ",
            Arc::new(
                Lexeme::new("zeytinyağı", "zeytinyağ", SyntacticCategory::Noun)
                    .with_attributes(LexemeAttributes::of(LexemeAttribute::CompoundP3sg)),
            ),
        );
        assert_eq!(entry(&compound), "NOUN_COMPOUND_ROOT");

        let card = Root::plain(
            "iki",
            Arc::new(
                Lexeme::new("iki", "iki", SyntacticCategory::Numeral)
                    .with_secondary(SecondaryCategory::Cardinal),
            ),
        );
        assert_eq!(entry(&card), "NUMERAL_CARDINAL_ROOT");
    }

    #[test]
    fn numerals_need_their_layer() {
        let graph = SuffixGraph::build(&GraphExtensions::basic()).unwrap();
        let err = graph.default_root_state(&Root::numeral("3").unwrap()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingEntryState { .. }));
    }
}
