//! trmorph - Contextless morphological analyzer for Turkish
//!
//! This crate re-exports all layers of the trmorph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: trmorph_runtime       - REPL, CLI, MessagePack export
//! Layer 3: trmorph_parser        - Root finders, parser, formatters, analyzer
//! Layer 2: trmorph_morphotactics - Suffix graph, conditions, predefined paths
//! Layer 1: trmorph_lexicon       - Lexemes, attribute inference, roots
//! Layer 0: trmorph_foundation    - Alphabet, phonetics, categories, errors
//! ```
//!
//! # Example
//!
//! ```
//! use trmorph::parser::{Analyzer, Format, ParserConfig};
//!
//! let analyzer = Analyzer::bundled(ParserConfig::basic()).unwrap();
//! let parses: Vec<String> = analyzer
//!     .analyze("kitaba")
//!     .iter()
//!     .map(|c| Format::Parseset.render(c))
//!     .collect();
//! assert!(parses.contains(&"kitap+Noun+A3sg+Pnon+Dat".to_string()));
//! ```

pub use trmorph_foundation as foundation;
pub use trmorph_lexicon as lexicon;
pub use trmorph_morphotactics as morphotactics;
pub use trmorph_parser as parser;
pub use trmorph_runtime as runtime;
