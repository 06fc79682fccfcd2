//! Morphological parsing of Turkish words.
//!
//! This crate turns a surface word like `kitaplarımızdan` into every
//! analysis the suffix graph allows, and renders those analyses as text.
//!
//! This crate provides:
//! - [`finders`] - Root finders over the lexicon and over the shape of the text
//! - [`parser`] - The contextless parser (root seeding and graph search)
//! - [`formatter`] - The text renderings of analyses
//! - [`config`] - [`ParserConfig`], which layers and finders to use
//! - [`analyzer`] - [`Analyzer`], a parser built from a config and a lexicon
//!
//! # Example
//!
//! ```
//! use trmorph_parser::{Analyzer, ParserConfig, format_for_tests};
//!
//! let analyzer = Analyzer::bundled(ParserConfig::basic()).unwrap();
//! let analyses: Vec<String> = analyzer
//!     .analyze("kapıda")
//!     .iter()
//!     .map(format_for_tests)
//!     .collect();
//! assert!(analyses.contains(&"kapı(kapı)+Noun+A3sg+Pnon+Loc(dA[da])".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod config;
pub mod finders;
pub mod formatter;
pub mod parser;

pub use analyzer::Analyzer;
pub use config::ParserConfig;
pub use finders::{
    BruteForceCompoundNounRootFinder, BruteForceNounRootFinder, BruteForceVerbRootFinder,
    DigitNumeralRootFinder, ProperNounFromApostropheRootFinder,
    ProperNounWithoutApostropheRootFinder, RootFinder, TextNumeralRootFinder, WordRootFinder,
};
pub use formatter::{
    Format, format_for_parseset, format_for_tests, format_simple_parseset, format_transition,
    format_without_suffixes,
};
pub use parser::ContextlessParser;
