//! REPL, CLI, and serialization for trmorph.
//!
//! This crate provides:
//! - [`Repl`] - Interactive analysis loop
//! - [`OutputFormat`] - Text renderings plus `MessagePack` records
//! - [`AnalysisRecord`] serialization and deserialization
//! - [`StderrLogger`] - A stderr backend for the `log` facade

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod editor;
pub mod logger;
pub mod output;
pub mod repl;
pub mod serialize;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logger::StderrLogger;
pub use output::OutputFormat;
pub use repl::{Repl, Response};
pub use serialize::{
    AnalysisRecord, SuffixRecord, WordRecord, from_bytes, load_from_file, read_records,
    save_to_file, to_bytes, write_record,
};
