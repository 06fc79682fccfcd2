//! Alphabet, phonetics and shared vocabulary for trmorph.
//!
//! This crate provides:
//! - [`alphabet`] - The Turkish letters and their phonological classes
//! - [`phonetics`] - Phonetic attributes and suffix form resolution
//! - [`SyntacticCategory`] / [`SecondaryCategory`] - Parts of speech
//! - [`LexemeAttribute`] - Morphological attributes of lexemes
//! - [`FlagSet`] - Compact immutable sets over those vocabularies
//! - [`digits_to_words`] - Spelling out digit numerals
//! - [`Error`] - Configuration errors with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod alphabet;
pub mod attribute;
pub mod category;
pub mod error;
pub mod flags;
pub mod numeral;
pub mod phonetics;

pub use alphabet::Letter;
pub use attribute::{LexemeAttribute, LexemeAttributes, parse_attributes};
pub use category::{SecondaryCategory, SyntacticCategory};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use flags::{Flag, FlagSet};
pub use numeral::digits_to_words;
pub use phonetics::{
    PhoneticAttribute, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations,
};
