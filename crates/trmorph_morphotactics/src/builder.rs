//! Composing the suffix graph from layers.
//!
//! Each layer registers its states, then its suffixes, then forms and
//! edges. Later layers may reference anything an earlier layer registered.
//! Names are unique across all layers.

use std::collections::HashMap;
use std::sync::Arc;

use trmorph_foundation::{Error, ErrorKind, Result, SyntacticCategory};
use trmorph_lexicon::Root;

use crate::graph::SuffixGraph;
use crate::graphs::{BasicGraph, CopulaGraph, NumeralGraph, ProperNounGraph};
use crate::model::{
    Edge, GroupId, State, StateId, StateKind, Suffix, SuffixForm, SuffixGroup, SuffixId,
    SuffixKind,
};
use crate::specification::Specification;

/// A layer of the suffix graph.
pub trait GraphExtension: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Registers this layer's states, suffixes, forms and edges.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate or unknown names.
    fn extend(&self, builder: &mut GraphBuilder) -> Result<()>;

    /// Names the entry state this layer offers for a root, if any.
    fn entry_state(&self, root: &Root) -> Option<&'static str>;
}

/// Which optional layers to compose on top of the basic graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphExtensions {
    /// Cardinal, ordinal and digit numerals.
    pub numerals: bool,
    /// Proper nouns and abbreviations.
    pub proper_nouns: bool,
    /// The copula and `değil`.
    pub copula: bool,
}

impl GraphExtensions {
    /// The basic graph alone.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            numerals: false,
            proper_nouns: false,
            copula: false,
        }
    }

    /// Every layer.
    #[must_use]
    pub fn full() -> Self {
        Self {
            numerals: true,
            proper_nouns: true,
            copula: true,
        }
    }

    /// Enables or disables the numeral layer.
    #[must_use]
    pub fn with_numerals(mut self, enabled: bool) -> Self {
        self.numerals = enabled;
        self
    }

    /// Enables or disables the proper noun layer.
    #[must_use]
    pub fn with_proper_nouns(mut self, enabled: bool) -> Self {
        self.proper_nouns = enabled;
        self
    }

    /// Enables or disables the copula layer.
    #[must_use]
    pub fn with_copula(mut self, enabled: bool) -> Self {
        self.copula = enabled;
        self
    }

    /// The enabled layers in composition order.
    #[must_use]
    pub fn layers(&self) -> Vec<Box<dyn GraphExtension>> {
        let mut layers: Vec<Box<dyn GraphExtension>> = vec![Box::new(BasicGraph)];
        if self.proper_nouns {
            layers.push(Box::new(ProperNounGraph));
        }
        if self.numerals {
            layers.push(Box::new(NumeralGraph));
        }
        if self.copula {
            layers.push(Box::new(CopulaGraph));
        }
        layers
    }
}

impl Default for GraphExtensions {
    fn default() -> Self {
        Self::full()
    }
}

/// Declaration of an ordinary suffix.
#[derive(Debug, Clone, Copy)]
pub struct SuffixDecl {
    name: &'static str,
    pretty_name: Option<&'static str>,
    group: Option<&'static str>,
    allow_repetition: bool,
}

impl SuffixDecl {
    /// A suffix shown under its own name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pretty_name: None,
            group: None,
            allow_repetition: false,
        }
    }

    /// The name shown in analyses.
    #[must_use]
    pub fn pretty(mut self, pretty_name: &'static str) -> Self {
        self.pretty_name = Some(pretty_name);
        self
    }

    /// Puts the suffix in a registered group.
    #[must_use]
    pub fn group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    /// Lets the suffix follow itself across a derivation.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.allow_repetition = true;
        self
    }
}

/// Declaration of a suffix form and its conditions.
#[derive(Debug, Clone)]
pub struct FormDecl {
    pattern: String,
    precondition: Option<Specification>,
    postcondition: Option<Specification>,
    post_derivation_condition: Option<Specification>,
}

impl FormDecl {
    /// An unconditional form.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            precondition: None,
            postcondition: None,
            post_derivation_condition: None,
        }
    }

    /// Condition on the analysis before the form.
    #[must_use]
    pub fn pre(mut self, spec: Specification) -> Self {
        self.precondition = Some(spec);
        self
    }

    /// Condition on the analysis after the following suffix.
    #[must_use]
    pub fn post(mut self, spec: Specification) -> Self {
        self.postcondition = Some(spec);
        self
    }

    /// Condition on the analysis once it leaves the derivation this form starts.
    #[must_use]
    pub fn post_derivation(mut self, spec: Specification) -> Self {
        self.post_derivation_condition = Some(spec);
        self
    }
}

/// Shorthand for [`FormDecl::new`].
#[must_use]
pub fn form(pattern: &str) -> FormDecl {
    FormDecl::new(pattern)
}

/// Mutable graph under construction.
#[derive(Default)]
pub struct GraphBuilder {
    states: Vec<State>,
    suffixes: Vec<Arc<Suffix>>,
    forms: Vec<Vec<Arc<SuffixForm>>>,
    groups: Vec<SuffixGroup>,
    state_index: HashMap<&'static str, StateId>,
    suffix_index: HashMap<&'static str, SuffixId>,
    group_index: HashMap<&'static str, GroupId>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateState`] if the name is taken.
    pub fn add_state(
        &mut self,
        name: &'static str,
        kind: StateKind,
        category: SyntacticCategory,
    ) -> Result<StateId> {
        if self.state_index.contains_key(name) {
            return Err(Error::duplicate_state(name));
        }
        let id = StateId(self.states.len());
        self.states.push(State {
            name,
            kind,
            category,
            outputs: Vec::new(),
            id,
        });
        self.state_index.insert(name, id);
        Ok(id)
    }

    /// Registers a suffix group.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateGroup`] if the name is taken.
    pub fn add_group(&mut self, name: &'static str) -> Result<GroupId> {
        if self.group_index.contains_key(name) {
            return Err(Error::new(ErrorKind::DuplicateGroup(name.to_string())));
        }
        let id = GroupId(self.groups.len());
        self.groups.push(SuffixGroup {
            name,
            members: Vec::new(),
        });
        self.group_index.insert(name, id);
        Ok(id)
    }

    /// Registers an ordinary suffix.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the group is unknown.
    pub fn add_suffix(&mut self, decl: SuffixDecl) -> Result<Arc<Suffix>> {
        let group = decl.group.map(|g| self.group_id(g)).transpose()?;
        self.register_suffix(
            decl.name,
            decl.pretty_name.unwrap_or(decl.name),
            SuffixKind::Ordinary,
            group,
            decl.allow_repetition,
        )
    }

    /// Registers several ordinary suffixes in one group.
    ///
    /// Each entry is a name and an optional pretty name.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is taken or the group is unknown.
    pub fn add_group_suffixes(
        &mut self,
        group: &'static str,
        entries: &[(&'static str, Option<&'static str>)],
    ) -> Result<()> {
        for &(name, pretty) in entries {
            let mut decl = SuffixDecl::new(name).group(group);
            if let Some(pretty) = pretty {
                decl = decl.pretty(pretty);
            }
            self.add_suffix(decl)?;
        }
        Ok(())
    }

    /// Registers a free transition from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or a state is unknown.
    pub fn add_free(&mut self, name: &'static str, from: &str, to: &str) -> Result<()> {
        self.add_empty(name, name, SuffixKind::Free, from, to)
    }

    /// Registers a zero transition from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or a state is unknown.
    pub fn add_zero(&mut self, name: &'static str, from: &str, to: &str) -> Result<()> {
        self.add_empty(name, "Zero", SuffixKind::Zero, from, to)
    }

    fn add_empty(
        &mut self,
        name: &'static str,
        pretty_name: &'static str,
        kind: SuffixKind,
        from: &str,
        to: &str,
    ) -> Result<()> {
        let suffix = self.register_suffix(name, pretty_name, kind, None, false)?;
        self.forms[suffix.id.0].push(Arc::new(SuffixForm::plain(Arc::clone(&suffix), "")));
        self.add_edge(from, name, to)
    }

    fn register_suffix(
        &mut self,
        name: &'static str,
        pretty_name: &'static str,
        kind: SuffixKind,
        group: Option<GroupId>,
        allow_repetition: bool,
    ) -> Result<Arc<Suffix>> {
        if self.suffix_index.contains_key(name) {
            return Err(Error::duplicate_suffix(name));
        }
        let id = SuffixId(self.suffixes.len());
        let suffix = Arc::new(Suffix {
            name,
            pretty_name,
            kind,
            group,
            allow_repetition,
            id,
        });
        if let Some(group) = group {
            self.groups[group.0].members.push(Arc::clone(&suffix));
        }
        self.suffixes.push(Arc::clone(&suffix));
        self.forms.push(Vec::new());
        self.suffix_index.insert(name, id);
        Ok(suffix)
    }

    /// Adds forms to a registered suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownSuffix`] if the suffix is not registered.
    pub fn add_forms(
        &mut self,
        suffix: &str,
        forms: impl IntoIterator<Item = FormDecl>,
    ) -> Result<()> {
        let suffix = self.suffix(suffix)?;
        let slot = &mut self.forms[suffix.id.0];
        for decl in forms {
            slot.push(Arc::new(SuffixForm {
                suffix: Arc::clone(&suffix),
                pattern: decl.pattern,
                precondition: decl.precondition,
                postcondition: decl.postcondition,
                post_derivation_condition: decl.post_derivation_condition,
            }));
        }
        Ok(())
    }

    /// Adds an edge `from --suffix--> to`.
    ///
    /// # Errors
    ///
    /// Returns an error if a state or the suffix is not registered.
    pub fn add_edge(&mut self, from: &str, suffix: &str, to: &str) -> Result<()> {
        let from = self.state_id(from)?;
        let to = self.state_id(to)?;
        let suffix = self.suffix(suffix)?.id;
        self.states[from.0].outputs.push(Edge { suffix, to });
        Ok(())
    }

    /// Adds an edge and the suffix's forms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if a state or the suffix is not registered.
    pub fn connect(
        &mut self,
        from: &str,
        suffix: &str,
        to: &str,
        forms: impl IntoIterator<Item = FormDecl>,
    ) -> Result<()> {
        self.add_edge(from, suffix, to)?;
        self.add_forms(suffix, forms)
    }

    /// Looks up a registered suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownSuffix`] if absent.
    pub fn suffix(&self, name: &str) -> Result<Arc<Suffix>> {
        self.suffix_index
            .get(name)
            .map(|id| Arc::clone(&self.suffixes[id.0]))
            .ok_or_else(|| Error::unknown_suffix(name))
    }

    /// Looks up a registered state.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownState`] if absent.
    pub fn state_id(&self, name: &str) -> Result<StateId> {
        self.state_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_state(name))
    }

    fn group_id(&self, name: &str) -> Result<GroupId> {
        self.group_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownGroup(name.to_string())))
    }

    /// Members of a registered group, as registered so far.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownGroup`] if absent.
    pub fn group_members(&self, name: &str) -> Result<Vec<Arc<Suffix>>> {
        let id = self.group_id(name)?;
        Ok(self.groups[id.0].members.clone())
    }

    /// Checks that free and zero transitions never form a cycle.
    ///
    /// Such transitions consume no text, so a cycle would let a parse loop
    /// without progress.
    fn check_empty_cycles(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.states.len()];
        for start in 0..self.states.len() {
            if marks[start] != Mark::New {
                continue;
            }
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::Active;
            while let Some((state, next)) = stack.last_mut() {
                let empties: Vec<usize> = self.states[*state]
                    .outputs
                    .iter()
                    .filter(|e| self.suffixes[e.suffix.0].is_empty_transition())
                    .map(|e| e.to.0)
                    .collect();
                if let Some(&to) = empties.get(*next) {
                    *next += 1;
                    match marks[to] {
                        Mark::Active => {
                            let mut names: Vec<String> = stack
                                .iter()
                                .skip_while(|(s, _)| *s != to)
                                .map(|(s, _)| self.states[*s].name.to_string())
                                .collect();
                            names.push(self.states[to].name.to_string());
                            return Err(Error::new(ErrorKind::EmptyTransitionCycle(names)));
                        }
                        Mark::New => {
                            marks[to] = Mark::Active;
                            stack.push((to, 0));
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[*state] = Mark::Done;
                    stack.pop();
                }
            }
        }
        Ok(())
    }

    /// Validates and freezes the graph.
    ///
    /// # Errors
    ///
    /// Returns an error if free or zero transitions form a cycle.
    pub fn finish(self, layers: Vec<Box<dyn GraphExtension>>) -> Result<SuffixGraph> {
        self.check_empty_cycles()?;
        Ok(SuffixGraph::from_parts(
            self.states,
            self.suffixes,
            self.forms,
            self.groups,
            self.state_index,
            self.suffix_index,
            layers,
        ))
    }
}
