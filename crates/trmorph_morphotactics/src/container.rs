//! Partial and complete analyses.
//!
//! A [`MorphemeContainer`] records one path through the suffix graph: the
//! seed root, the entry state and every transition taken so far, together
//! with the surface consumed and the surface still to explain. Containers
//! fork at every branching point, so the transition list is a persistent
//! vector and cloning shares structure.

use std::fmt;
use std::sync::Arc;

use im::Vector;
use trmorph_foundation::phonetics::{self, PhoneticAttributes, PhoneticExpectations};
use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::Root;

use crate::model::{GroupId, StateKind, StateRef, Suffix, SuffixForm};

/// The realization of a suffix form in a particular word.
#[derive(Debug, Clone)]
pub struct SuffixFormApplication {
    /// The form that was applied.
    pub form: Arc<SuffixForm>,
    /// The surface text the form consumed, after any stem alternation.
    pub actual: String,
    /// The harmonized suffix text.
    pub fitting: String,
}

impl SuffixFormApplication {
    /// Creates an application.
    #[must_use]
    pub fn new(form: Arc<SuffixForm>, actual: impl Into<String>, fitting: impl Into<String>) -> Self {
        Self {
            form,
            actual: actual.into(),
            fitting: fitting.into(),
        }
    }
}

impl PartialEq for SuffixFormApplication {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.form, &other.form)
            && self.actual == other.actual
            && self.fitting == other.fitting
    }
}

impl Eq for SuffixFormApplication {}

/// One step of an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state the step left.
    pub from: StateRef,
    /// How the suffix was realized.
    pub application: SuffixFormApplication,
    /// The state the step reached.
    pub to: StateRef,
}

impl Transition {
    /// The suffix taken.
    #[must_use]
    pub fn suffix(&self) -> &Suffix {
        &self.application.form.suffix
    }

    /// The abstract pattern of the form taken.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.application.form.pattern
    }

    /// Returns true if the step leaves a derivational state.
    #[must_use]
    pub fn is_derivational(&self) -> bool {
        self.from.kind == StateKind::Derivational
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -[{}:{}]-> {}",
            self.from, self.application.form, self.application.actual, self.to
        )
    }
}

/// A partial or complete analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeContainer {
    root: Root,
    root_state: StateRef,
    surface_so_far: String,
    remaining: String,
    transitions: Vector<Transition>,
    expectations: PhoneticExpectations,
}

impl MorphemeContainer {
    /// Seeds an analysis at `root_state` with the root already consumed.
    #[must_use]
    pub fn new(root: Root, root_state: StateRef, remaining: impl Into<String>) -> Self {
        Self {
            surface_so_far: root.text.clone(),
            expectations: root.expectations,
            root,
            root_state,
            remaining: remaining.into(),
            transitions: Vector::new(),
        }
    }

    /// The same analysis with a different unexplained tail.
    #[must_use]
    pub fn with_remaining(&self, remaining: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.remaining = remaining.into();
        clone
    }

    /// Records a transition and consumes its surface text.
    pub fn add_transition(&mut self, transition: Transition) {
        let actual = &transition.application.actual;
        self.surface_so_far.push_str(actual);
        let consumed = actual.chars().count();
        self.remaining = self.remaining.chars().skip(consumed).collect();
        if !transition.pattern().is_empty() {
            self.expectations = PhoneticExpectations::empty();
        }
        self.transitions.push_back(transition);
    }

    /// The seed root.
    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// The entry state.
    #[must_use]
    pub fn root_state(&self) -> StateRef {
        self.root_state
    }

    /// The surface text explained so far.
    #[must_use]
    pub fn surface_so_far(&self) -> &str {
        &self.surface_so_far
    }

    /// The surface text still to explain.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// The whole input this analysis works on.
    #[must_use]
    pub fn surface(&self) -> String {
        format!("{}{}", self.surface_so_far, self.remaining)
    }

    /// Expectations on the next suffix's first letter.
    #[must_use]
    pub fn expectations(&self) -> PhoneticExpectations {
        self.expectations
    }

    /// The transitions in order.
    #[must_use]
    pub fn transitions(&self) -> &Vector<Transition> {
        &self.transitions
    }

    /// The last transition, if any.
    #[must_use]
    pub fn last_transition(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    /// The current state.
    #[must_use]
    pub fn last_state(&self) -> StateRef {
        self.last_transition().map_or(self.root_state, |t| t.to)
    }

    /// Category of the word as it stands.
    #[must_use]
    pub fn surface_category(&self) -> SyntacticCategory {
        self.last_state().category
    }

    /// Secondary category of the word as it stands; lost after a derivation.
    #[must_use]
    pub fn surface_secondary(&self) -> Option<SecondaryCategory> {
        if self.last_derivation().is_some() {
            None
        } else {
            self.root.lexeme.secondary
        }
    }

    /// The stem: surface text up to and including the last derivation.
    #[must_use]
    pub fn stem(&self) -> String {
        let Some(index) = self.last_derivation_index() else {
            return self.root.text.clone();
        };
        let mut stem = self.root.text.clone();
        for transition in self.transitions.iter().take(index + 1) {
            stem.push_str(&transition.application.actual);
        }
        stem
    }

    /// Category of the stem.
    #[must_use]
    pub fn stem_category(&self) -> SyntacticCategory {
        self.last_derivation()
            .map_or(self.root_state.category, |t| t.to.category)
    }

    /// Secondary category of the stem.
    #[must_use]
    pub fn stem_secondary(&self) -> Option<SecondaryCategory> {
        self.surface_secondary()
    }

    /// The dictionary root of the seed lexeme.
    #[must_use]
    pub fn lemma_root(&self) -> &str {
        &self.root.lexeme.root
    }

    /// Category of the seed lexeme.
    #[must_use]
    pub fn lemma_root_category(&self) -> SyntacticCategory {
        self.root.lexeme.category
    }

    /// Secondary category of the seed lexeme.
    #[must_use]
    pub fn lemma_root_secondary(&self) -> Option<SecondaryCategory> {
        self.root.lexeme.secondary
    }

    fn last_derivation_index(&self) -> Option<usize> {
        self.transitions
            .iter()
            .rposition(Transition::is_derivational)
    }

    /// The most recent derivational transition.
    #[must_use]
    pub fn last_derivation(&self) -> Option<&Transition> {
        self.last_derivation_index().and_then(|i| self.transitions.get(i))
    }

    /// Suffix of the most recent derivational transition.
    #[must_use]
    pub fn last_derivation_suffix(&self) -> Option<&Suffix> {
        self.last_derivation().map(Transition::suffix)
    }

    /// The most recent derivational transition whose form was not blank.
    #[must_use]
    pub fn last_non_blank_derivation(&self) -> Option<&Transition> {
        self.transitions
            .iter()
            .rev()
            .find(|t| t.is_derivational() && !t.pattern().is_empty())
    }

    /// Transitions after the last derivation, excluding the derivation.
    pub fn transitions_since_derivation(&self) -> impl Iterator<Item = &Transition> {
        let skip = self.last_derivation_index().map_or(0, |i| i + 1);
        self.transitions.iter().skip(skip)
    }

    /// Transitions from the last derivation on, including it.
    pub fn transitions_from_derivation(&self) -> impl Iterator<Item = &Transition> {
        let skip = self.last_derivation_index().unwrap_or(0);
        self.transitions.iter().skip(skip)
    }

    /// Suffixes taken since the last derivation.
    pub fn suffixes_since_derivation(&self) -> impl Iterator<Item = &Suffix> {
        self.transitions_since_derivation().map(Transition::suffix)
    }

    /// Returns true if some suffix since the last derivation belongs to the group.
    #[must_use]
    pub fn has_group_since_derivation(&self, group: GroupId) -> bool {
        self.suffixes_since_derivation().any(|s| s.group == Some(group))
    }

    /// Lexeme attributes that still constrain the next suffix.
    ///
    /// Once a suffix has consumed text the root's own attributes stop
    /// applying; only a verb stem that ends a derivation (or whose last
    /// suffix was blank) still resists voicing.
    #[must_use]
    pub fn lexeme_attributes(&self) -> LexemeAttributes {
        let consumed = self.transitions.iter().any(|t| !t.application.actual.is_empty());
        if !consumed {
            return self.root.lexeme.attributes;
        }
        let last = self.last_state();
        let last_blank = self
            .last_transition()
            .is_some_and(|t| t.application.actual.is_empty());
        if last.category == SyntacticCategory::Verb
            && (last.kind == StateKind::Derivational || last_blank)
        {
            LexemeAttributes::of(LexemeAttribute::NoVoicing)
        } else {
            LexemeAttributes::empty()
        }
    }

    /// Phonetic attributes of the surface explained so far.
    #[must_use]
    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        let suffix_part = self
            .surface_so_far
            .get(self.root.text.len()..)
            .unwrap_or_default();
        if suffix_part.trim().is_empty() || !suffix_part.chars().all(char::is_alphanumeric) {
            return self.root.attributes;
        }
        phonetics::attributes(&self.surface_so_far, self.lexeme_attributes())
    }
}

impl fmt::Display for MorphemeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})+{}", self.root.text, self.root.lexeme.lemma, self.root_state)?;
        for transition in &self.transitions {
            write!(f, " {} ", transition.application.form)?;
            write!(f, "{}", transition.to)?;
        }
        if !self.remaining.is_empty() {
            write!(f, " ..{}", self.remaining)?;
        }
        Ok(())
    }
}
