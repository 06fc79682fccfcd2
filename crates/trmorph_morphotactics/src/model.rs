//! Graph vocabulary: states, suffixes, suffix forms and groups.
//!
//! States and suffixes live in arenas owned by [`SuffixGraph`](crate::SuffixGraph)
//! and are addressed by small copyable ids. Suffixes and their forms are
//! additionally shared behind `Arc` so that transitions recorded during a
//! parse can describe themselves without a reference back to the graph.

use std::fmt;
use std::sync::Arc;

use trmorph_foundation::SyntacticCategory;

use crate::specification::Specification;

/// Index of a state in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

/// Index of a suffix in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuffixId(pub(crate) usize);

/// Index of a suffix group in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

/// What a parse may do after reaching a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKind {
    /// A complete word may end here.
    Terminal,
    /// More suffixes follow.
    Transfer,
    /// A derivational boundary; the next suffix starts a new word stem.
    Derivational,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Terminal => "TERMINAL",
            Self::Transfer => "TRANSFER",
            Self::Derivational => "DERIVATIONAL",
        })
    }
}

/// A compact, copyable description of a state.
///
/// Transitions store these so analyses can be formatted and inspected
/// without the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateRef {
    /// The state's id.
    pub id: StateId,
    /// The state's unique name.
    pub name: &'static str,
    /// The state's kind.
    pub kind: StateKind,
    /// The syntactic category of words in this state.
    pub category: SyntacticCategory,
}

impl StateRef {
    /// Returns true for terminal states.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind == StateKind::Terminal
    }

    /// Returns true for derivational states.
    #[must_use]
    pub fn is_derivational(&self) -> bool {
        self.kind == StateKind::Derivational
    }
}

impl fmt::Display for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An outgoing edge: taking `suffix` leads to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The suffix consumed along the edge.
    pub suffix: SuffixId,
    /// The target state.
    pub to: StateId,
}

/// A node of the suffix graph.
#[derive(Debug, Clone)]
pub struct State {
    /// Unique name.
    pub name: &'static str,
    /// Kind.
    pub kind: StateKind,
    /// Syntactic category.
    pub category: SyntacticCategory,
    /// Outgoing edges in registration order.
    pub outputs: Vec<Edge>,
    pub(crate) id: StateId,
}

impl State {
    /// The state's id.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// A copyable reference to this state.
    #[must_use]
    pub fn state_ref(&self) -> StateRef {
        StateRef {
            id: self.id,
            name: self.name,
            kind: self.kind,
            category: self.category,
        }
    }
}

/// How a suffix consumes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuffixKind {
    /// Consumes its forms' text and obeys their conditions.
    Ordinary,
    /// Consumes nothing; bridges a state into a sibling state. Never shown.
    Free,
    /// Consumes nothing but changes the category at a derivational boundary.
    Zero,
}

/// A morpheme identity.
#[derive(Debug)]
pub struct Suffix {
    /// Unique name (`Acc_Noun`).
    pub name: &'static str,
    /// Name shown in analyses (`Acc`).
    pub pretty_name: &'static str,
    /// Kind.
    pub kind: SuffixKind,
    /// Group membership, if any.
    pub group: Option<GroupId>,
    /// Whether the suffix may directly follow itself across a derivation.
    pub allow_repetition: bool,
    pub(crate) id: SuffixId,
}

impl Suffix {
    /// The suffix's id.
    #[must_use]
    pub fn id(&self) -> SuffixId {
        self.id
    }

    /// Returns true for free and zero transitions.
    #[must_use]
    pub fn is_empty_transition(&self) -> bool {
        self.kind != SuffixKind::Ordinary
    }
}

impl PartialEq for Suffix {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Suffix {}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One spelling of a suffix together with its guards.
///
/// The pattern uses the abstract notation of the phonetics engine: `A`, `I`
/// and `O` are harmony placeholders, `+` marks an optional letter and `!`
/// forces the unrounded vowel.
#[derive(Debug)]
pub struct SuffixForm {
    /// The suffix this form spells.
    pub suffix: Arc<Suffix>,
    /// The abstract pattern.
    pub pattern: String,
    /// Must hold on the container before the form is tried.
    pub precondition: Option<Specification>,
    /// Must hold on the container after the next suffix is added.
    pub postcondition: Option<Specification>,
    /// Must hold once the parse leaves the derivational state after this form.
    pub post_derivation_condition: Option<Specification>,
}

impl SuffixForm {
    /// A form without conditions.
    #[must_use]
    pub fn plain(suffix: Arc<Suffix>, pattern: impl Into<String>) -> Self {
        Self {
            suffix,
            pattern: pattern.into(),
            precondition: None,
            postcondition: None,
            post_derivation_condition: None,
        }
    }
}

impl fmt::Display for SuffixForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.suffix.name, self.pattern)
    }
}

/// A named set of mutually exclusive suffixes, such as the noun cases.
#[derive(Debug, Clone)]
pub struct SuffixGroup {
    /// Unique name.
    pub name: &'static str,
    /// Members in registration order.
    pub members: Vec<Arc<Suffix>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(id: usize, name: &'static str) -> Suffix {
        Suffix {
            name,
            pretty_name: name,
            kind: SuffixKind::Ordinary,
            group: None,
            allow_repetition: false,
            id: SuffixId(id),
        }
    }

    #[test]
    fn suffix_identity_is_the_id() {
        assert_eq!(suffix(3, "Acc_Noun"), suffix(3, "Acc_Noun"));
        assert_ne!(suffix(3, "Acc_Noun"), suffix(4, "Acc_Noun"));
    }

    #[test]
    fn form_display_names_suffix_and_pattern() {
        let form = SuffixForm::plain(Arc::new(suffix(0, "Dat_Noun")), "+yA");
        assert_eq!(form.to_string(), "Dat_Noun[+yA]");
    }

    #[test]
    fn state_kind_display() {
        assert_eq!(StateKind::Derivational.to_string(), "DERIVATIONAL");
    }
}
