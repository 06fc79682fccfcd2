//! Turkish morphotactics for trmorph: which suffixes may follow which.
//!
//! This crate provides:
//! - [`SuffixGraph`] - States and suffix edges, composed from layers
//! - [`GraphBuilder`] / [`GraphExtension`] - Registration of graph layers
//! - [`Specification`] - Composable conditions on suffix forms
//! - [`MorphemeContainer`] - A partial or complete analysis
//! - [`try_suffix`] - Matching suffix forms against a word
//! - [`PredefinedPaths`] - Hand-built analyses of irregular closed-class roots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod applier;
pub mod builder;
pub mod container;
pub mod graph;
pub mod graphs;
pub mod model;
pub mod predefined;
pub mod specification;

pub use applier::{transition_allowed_for_suffix, try_suffix, try_suffix_form};
pub use builder::{FormDecl, GraphBuilder, GraphExtension, GraphExtensions, SuffixDecl, form};
pub use container::{MorphemeContainer, SuffixFormApplication, Transition};
pub use graph::SuffixGraph;
pub use model::{
    Edge, GroupId, State, StateId, StateKind, StateRef, Suffix, SuffixForm, SuffixGroup, SuffixId,
    SuffixKind,
};
pub use predefined::PredefinedPaths;
pub use specification::Specification;
