//! Composable predicates over the suffix history of a parse.
//!
//! Specifications gate suffix forms. They are built once while the graph is
//! composed and evaluated against many containers during parsing, so they
//! are plain immutable values. Combinators evaluate left to right and stop
//! at the first decisive operand.
//!
//! The forward-looking constructors (`followed_by*`) build the same
//! predicates as their backward-looking twins; they differ only in when the
//! engine evaluates them: postconditions run on the container extended with
//! the next suffix.

use std::fmt;
use std::sync::Arc;

use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SecondaryCategory};

use crate::container::MorphemeContainer;
use crate::model::{StateKind, Suffix};

/// A boolean predicate over a [`MorphemeContainer`].
#[derive(Debug, Clone)]
pub enum Specification {
    /// Always holds.
    AlwaysTrue,
    /// Never holds.
    AlwaysFalse,
    /// Every operand holds.
    And(Vec<Specification>),
    /// Some operand holds.
    Or(Vec<Specification>),
    /// The operand does not hold.
    Not(Box<Specification>),
    /// The suffix, optionally with the given pattern, occurs since the last
    /// derivation.
    SinceLastDerivation {
        /// The suffix looked for.
        suffix: Arc<Suffix>,
        /// The exact pattern, if any.
        pattern: Option<String>,
    },
    /// The last derivational transition used the suffix.
    AsLastDerivation {
        /// The suffix looked for.
        suffix: Arc<Suffix>,
        /// The exact pattern, if any.
        pattern: Option<String>,
    },
    /// The last derivational transition that consumed a non-empty pattern
    /// used the suffix.
    LastNonBlankDerivation {
        /// The suffix looked for.
        suffix: Arc<Suffix>,
        /// The exact pattern, if any.
        pattern: Option<String>,
    },
    /// The seed root's text equals the literal.
    AppliesToRoot(String),
    /// The most recent transition ends in a state of this kind.
    LastSuffixGoesTo(StateKind),
    /// The root lexeme carries all of the attributes.
    HasLexemeAttributes(LexemeAttributes),
    /// The root lexeme carries none of the attributes.
    LacksLexemeAttributes(LexemeAttributes),
    /// The root lexeme has this secondary category.
    RootHasSecondaryCategory(SecondaryCategory),
}

impl Specification {
    /// Evaluates the predicate.
    #[must_use]
    pub fn is_satisfied_by(&self, container: &MorphemeContainer) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::AlwaysFalse => false,
            Self::And(specs) => specs.iter().all(|s| s.is_satisfied_by(container)),
            Self::Or(specs) => specs.iter().any(|s| s.is_satisfied_by(container)),
            Self::Not(spec) => !spec.is_satisfied_by(container),
            Self::SinceLastDerivation { suffix, pattern } => container
                .transitions_since_derivation()
                .any(|t| t.suffix() == suffix.as_ref() && pattern_matches(pattern, t.pattern())),
            Self::AsLastDerivation { suffix, pattern } => container
                .last_derivation()
                .is_some_and(|t| t.suffix() == suffix.as_ref() && pattern_matches(pattern, t.pattern())),
            Self::LastNonBlankDerivation { suffix, pattern } => container
                .last_non_blank_derivation()
                .is_some_and(|t| t.suffix() == suffix.as_ref() && pattern_matches(pattern, t.pattern())),
            Self::AppliesToRoot(text) => container.root().text == *text,
            Self::LastSuffixGoesTo(kind) => container.last_transition().is_some_and(|t| t.to.kind == *kind),
            Self::HasLexemeAttributes(attrs) => {
                if consumed_suffix_text(container) {
                    return true;
                }
                let own = container.root().lexeme.attributes;
                !own.is_empty() && own.contains_all(attrs)
            }
            Self::LacksLexemeAttributes(attrs) => {
                if consumed_suffix_text(container) {
                    return true;
                }
                !container.root().lexeme.attributes.intersects(attrs)
            }
            Self::RootHasSecondaryCategory(secondary) => {
                container.root().lexeme.secondary == Some(*secondary)
            }
        }
    }

    /// Conjunction, flattening nested conjunctions.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut specs) => {
                specs.push(other);
                Self::And(specs)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Disjunction, flattening nested disjunctions.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut specs) => {
                specs.push(other);
                Self::Or(specs)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Negation.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// Lexeme attributes stop governing once real suffix text has been consumed.
fn consumed_suffix_text(container: &MorphemeContainer) -> bool {
    container
        .transitions()
        .iter()
        .any(|t| !t.suffix().is_empty_transition() && !t.application.actual.is_empty())
}

fn pattern_matches(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().is_none_or(|p| p == actual)
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, specs: &[Specification], sep: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, spec) in specs.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{spec}")?;
            }
            f.write_str(")")
        }
        fn with_pattern(
            f: &mut fmt::Formatter<'_>,
            name: &str,
            suffix: &Suffix,
            pattern: &Option<String>,
        ) -> fmt::Result {
            match pattern {
                Some(p) => write!(f, "{name}({suffix}[{p}])"),
                None => write!(f, "{name}({suffix})"),
            }
        }

        match self {
            Self::AlwaysTrue => f.write_str("true"),
            Self::AlwaysFalse => f.write_str("false"),
            Self::And(specs) => join(f, specs, " & "),
            Self::Or(specs) => join(f, specs, " | "),
            Self::Not(spec) => write!(f, "~{spec}"),
            Self::SinceLastDerivation { suffix, pattern } => {
                with_pattern(f, "since_last_deriv", suffix, pattern)
            }
            Self::AsLastDerivation { suffix, pattern } => {
                with_pattern(f, "as_last_deriv", suffix, pattern)
            }
            Self::LastNonBlankDerivation { suffix, pattern } => {
                with_pattern(f, "last_non_blank_deriv", suffix, pattern)
            }
            Self::AppliesToRoot(text) => write!(f, "applies_to_root({text})"),
            Self::LastSuffixGoesTo(kind) => write!(f, "suffix_goes_to({kind})"),
            Self::HasLexemeAttributes(attrs) => write!(f, "has_lexeme_attributes({})", names(attrs)),
            Self::LacksLexemeAttributes(attrs) => {
                write!(f, "lacks_lexeme_attributes({})", names(attrs))
            }
            Self::RootHasSecondaryCategory(secondary) => {
                write!(f, "root_has_secondary({secondary})")
            }
        }
    }
}

fn names(attrs: &LexemeAttributes) -> String {
    attrs.iter().map(LexemeAttribute::as_str).collect::<Vec<_>>().join(",")
}

// =============================================================================
// Constructors
// =============================================================================

/// A predicate that always holds.
#[must_use]
pub fn always_true() -> Specification {
    Specification::AlwaysTrue
}

/// A predicate that never holds.
#[must_use]
pub fn always_false() -> Specification {
    Specification::AlwaysFalse
}

/// Both predicates hold.
#[must_use]
pub fn and_(a: Specification, b: Specification) -> Specification {
    a.and(b)
}

/// Either predicate holds.
#[must_use]
pub fn or_(a: Specification, b: Specification) -> Specification {
    a.or(b)
}

/// The predicate does not hold.
#[must_use]
pub fn not_(spec: Specification) -> Specification {
    spec.negate()
}

/// The suffix occurs since the last derivation.
#[must_use]
pub fn comes_after(suffix: &Arc<Suffix>) -> Specification {
    Specification::SinceLastDerivation {
        suffix: Arc::clone(suffix),
        pattern: None,
    }
}

/// The suffix occurs since the last derivation with exactly this pattern.
#[must_use]
pub fn comes_after_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    Specification::SinceLastDerivation {
        suffix: Arc::clone(suffix),
        pattern: Some(pattern.to_string()),
    }
}

/// The suffix does not occur since the last derivation.
#[must_use]
pub fn doesnt_come_after(suffix: &Arc<Suffix>) -> Specification {
    comes_after(suffix).negate()
}

/// The suffix with this pattern does not occur since the last derivation.
#[must_use]
pub fn doesnt_come_after_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    comes_after_form(suffix, pattern).negate()
}

/// The last derivation used the suffix.
#[must_use]
pub fn comes_after_derivation(suffix: &Arc<Suffix>) -> Specification {
    Specification::AsLastDerivation {
        suffix: Arc::clone(suffix),
        pattern: None,
    }
}

/// The last derivation used the suffix with exactly this pattern.
#[must_use]
pub fn comes_after_derivation_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    Specification::AsLastDerivation {
        suffix: Arc::clone(suffix),
        pattern: Some(pattern.to_string()),
    }
}

/// The last derivation did not use the suffix.
#[must_use]
pub fn doesnt_come_after_derivation(suffix: &Arc<Suffix>) -> Specification {
    comes_after_derivation(suffix).negate()
}

/// The last derivation did not use the suffix with this pattern.
#[must_use]
pub fn doesnt_come_after_derivation_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    comes_after_derivation_form(suffix, pattern).negate()
}

/// The last derivation with a non-empty pattern used the suffix.
#[must_use]
pub fn comes_after_last_non_blank_derivation(suffix: &Arc<Suffix>) -> Specification {
    Specification::LastNonBlankDerivation {
        suffix: Arc::clone(suffix),
        pattern: None,
    }
}

/// The seed root is spelled exactly so.
#[must_use]
pub fn applies_to_root(text: &str) -> Specification {
    Specification::AppliesToRoot(text.to_string())
}

/// The root lexeme has the secondary category.
#[must_use]
pub fn root_has_secondary_category(secondary: SecondaryCategory) -> Specification {
    Specification::RootHasSecondaryCategory(secondary)
}

/// The root lexeme has the attribute.
#[must_use]
pub fn has_lexeme_attribute(attribute: LexemeAttribute) -> Specification {
    Specification::HasLexemeAttributes(LexemeAttributes::of(attribute))
}

/// The root lexeme lacks the attribute.
#[must_use]
pub fn doesnt_have_lexeme_attribute(attribute: LexemeAttribute) -> Specification {
    Specification::LacksLexemeAttributes(LexemeAttributes::of(attribute))
}

/// The next suffixes include this one (evaluated as a postcondition).
#[must_use]
pub fn followed_by(suffix: &Arc<Suffix>) -> Specification {
    comes_after(suffix)
}

/// The next suffixes include this one with exactly this pattern.
#[must_use]
pub fn followed_by_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    comes_after_form(suffix, pattern)
}

/// The next derivation uses this suffix.
#[must_use]
pub fn followed_by_derivation(suffix: &Arc<Suffix>) -> Specification {
    comes_after_derivation(suffix)
}

/// The next derivation uses this suffix with exactly this pattern.
#[must_use]
pub fn followed_by_derivation_form(suffix: &Arc<Suffix>, pattern: &str) -> Specification {
    comes_after_derivation_form(suffix, pattern)
}

/// The next suffixes include some member of the group.
///
/// The membership is captured when the predicate is built.
#[must_use]
pub fn followed_by_one_from_group(members: &[Arc<Suffix>]) -> Specification {
    members
        .iter()
        .map(followed_by)
        .reduce(Specification::or)
        .unwrap_or(Specification::AlwaysFalse)
}

/// The next suffix ends in a state of this kind.
#[must_use]
pub fn followed_by_suffix_goes_to(kind: StateKind) -> Specification {
    Specification::LastSuffixGoesTo(kind)
}
