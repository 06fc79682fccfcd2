//! The graph layers.
//!
//! - [`BasicGraph`] - Nouns, verbs, adjectives, adverbs, pronouns and the
//!   closed classes
//! - [`ProperNounGraph`] - Proper nouns and abbreviations
//! - [`NumeralGraph`] - Cardinal, ordinal and digit numerals
//! - [`CopulaGraph`] - The copula and `değil`

mod basic;
mod copula;
mod numeral;
mod proper_noun;

pub use basic::BasicGraph;
pub use copula::CopulaGraph;
pub use numeral::NumeralGraph;
pub use proper_noun::ProperNounGraph;

use trmorph_foundation::{Result, SyntacticCategory};

use crate::builder::GraphBuilder;
use crate::model::StateKind;
use crate::specification::{self as spec, Specification};

type StateTable = [(&'static str, StateKind, SyntacticCategory)];

/// Registers a table of `(name, kind, category)` states.
fn add_states(builder: &mut GraphBuilder, states: &StateTable) -> Result<()> {
    for &(name, kind, category) in states {
        builder.add_state(name, kind, category)?;
    }
    Ok(())
}

/// Registers a table of `(name, from, to)` free transitions.
fn add_free_transitions(builder: &mut GraphBuilder, edges: &[(&'static str, &str, &str)]) -> Result<()> {
    for &(name, from, to) in edges {
        builder.add_free(name, from, to)?;
    }
    Ok(())
}

fn after(b: &GraphBuilder, suffix: &str) -> Result<Specification> {
    Ok(spec::comes_after(&b.suffix(suffix)?))
}

fn after_form(b: &GraphBuilder, suffix: &str, pattern: &str) -> Result<Specification> {
    Ok(spec::comes_after_form(&b.suffix(suffix)?, pattern))
}

fn not_after(b: &GraphBuilder, suffix: &str) -> Result<Specification> {
    Ok(spec::doesnt_come_after(&b.suffix(suffix)?))
}

fn then(b: &GraphBuilder, suffix: &str) -> Result<Specification> {
    Ok(spec::followed_by(&b.suffix(suffix)?))
}

fn after_derivation(b: &GraphBuilder, suffix: &str) -> Result<Specification> {
    Ok(spec::comes_after_derivation(&b.suffix(suffix)?))
}

/// Some suffix of the list occurs since the last derivation.
fn after_any(b: &GraphBuilder, suffixes: &[&str]) -> Result<Specification> {
    let specs = suffixes
        .iter()
        .map(|s| after(b, s))
        .collect::<Result<Vec<_>>>()?;
    Ok(Specification::Or(specs))
}

/// No suffix of the list occurs since the last derivation.
fn after_none(b: &GraphBuilder, suffixes: &[&str]) -> Result<Specification> {
    let specs = suffixes
        .iter()
        .map(|s| not_after(b, s))
        .collect::<Result<Vec<_>>>()?;
    Ok(Specification::And(specs))
}

/// The root is one of the listed spellings.
fn root_is_one_of(roots: &[&str]) -> Specification {
    Specification::Or(roots.iter().map(|r| spec::applies_to_root(r)).collect())
}
