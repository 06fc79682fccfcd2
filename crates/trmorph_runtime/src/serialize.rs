//! Analysis export using `MessagePack`.
//!
//! A [`MorphemeContainer`] borrows the suffix graph, so it is flattened into
//! an owned [`AnalysisRecord`] before it is written out. Every word becomes
//! one [`WordRecord`]; a stream is those records back to back.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use trmorph_foundation::{Error, ErrorKind, Result, SecondaryCategory, SyntacticCategory};
use trmorph_morphotactics::{MorphemeContainer, SuffixKind};
use trmorph_parser::format_for_tests;

/// One suffix application in an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRecord {
    /// Internal suffix name (`Dat_Noun`).
    pub name: String,
    /// Name shown in analyses (`Dat`).
    pub pretty_name: String,
    /// The form pattern that matched (`+yA`).
    pub pattern: String,
    /// The text the form consumed (`a`).
    pub actual: String,
    /// Whether the suffix left a derivational state.
    pub derivational: bool,
    /// Category of the state the suffix leads to.
    pub category: SyntacticCategory,
}

/// An owned, serializable view of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The root text as it appears in the word (`kitab`).
    pub root: String,
    /// The dictionary lemma (`kitap`).
    pub lemma: String,
    /// The dictionary root of the lemma (`kitap`, `gel` for `gelmek`).
    pub lemma_root: String,
    /// Category of the root.
    pub category: SyntacticCategory,
    /// Secondary category of the root.
    pub secondary: Option<SecondaryCategory>,
    /// Suffixes in application order. Free transitions are left out.
    pub suffixes: Vec<SuffixRecord>,
    /// Category of the whole word.
    pub surface_category: SyntacticCategory,
    /// The analysis in the tests format.
    pub formatted: String,
}

impl AnalysisRecord {
    /// Flattens an analysis.
    #[must_use]
    pub fn from_container(container: &MorphemeContainer) -> Self {
        let root = container.root();
        let suffixes = container
            .transitions()
            .iter()
            .filter(|t| t.suffix().kind != SuffixKind::Free)
            .map(|t| SuffixRecord {
                name: t.suffix().name.to_string(),
                pretty_name: t.suffix().pretty_name.to_string(),
                pattern: t.pattern().to_string(),
                actual: t.application.actual.clone(),
                derivational: t.is_derivational(),
                category: t.to.category,
            })
            .collect();

        Self {
            root: root.text.clone(),
            lemma: root.lexeme.lemma.clone(),
            lemma_root: root.lexeme.root.clone(),
            category: root.lexeme.category,
            secondary: root.lexeme.secondary,
            suffixes,
            surface_category: container.surface_category(),
            formatted: format_for_tests(container),
        }
    }
}

/// A word and every analysis found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word as given.
    pub word: String,
    /// Its analyses, possibly none.
    pub analyses: Vec<AnalysisRecord>,
}

impl WordRecord {
    /// Flattens the analyses of a word.
    #[must_use]
    pub fn new(word: impl Into<String>, analyses: &[MorphemeContainer]) -> Self {
        Self {
            word: word.into(),
            analyses: analyses.iter().map(AnalysisRecord::from_container).collect(),
        }
    }
}

/// Serializes a word record to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(record: &WordRecord) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(record).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a word record from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<WordRecord> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Writes one record to a stream.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_record<W: Write>(writer: &mut W, record: &WordRecord) -> Result<()> {
    let bytes = to_bytes(record)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Reads every record from a stream of back-to-back records.
///
/// # Errors
///
/// Returns an error if any record fails to decode.
pub fn read_records(bytes: &[u8]) -> Result<Vec<WordRecord>> {
    let mut cursor = Cursor::new(bytes);
    let mut records = Vec::new();
    while usize::try_from(cursor.position()).unwrap_or(usize::MAX) < bytes.len() {
        let record = rmp_serde::from_read(&mut cursor)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
        records.push(record);
    }
    Ok(records)
}

/// Saves records to a file as a stream.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(records: &[WordRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    for record in records {
        write_record(&mut writer, record)?;
    }
    writer.flush().map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    Ok(())
}

/// Loads records from a file written by [`save_to_file`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;
    read_records(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trmorph_parser::{Analyzer, ParserConfig};

    fn record(word: &str) -> WordRecord {
        let analyzer = Analyzer::bundled(ParserConfig::basic()).unwrap();
        WordRecord::new(word, &analyzer.analyze(word))
    }

    #[test]
    fn flattens_an_analysis() {
        let record = record("kitaba");
        let analysis = record
            .analyses
            .iter()
            .find(|a| a.formatted == "kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])")
            .expect("dative analysis");

        assert_eq!(analysis.root, "kitab");
        assert_eq!(analysis.lemma, "kitap");
        assert_eq!(analysis.category, SyntacticCategory::Noun);
        assert_eq!(analysis.surface_category, SyntacticCategory::Noun);
        let names: Vec<&str> = analysis.suffixes.iter().map(|s| s.pretty_name.as_str()).collect();
        assert_eq!(names, ["A3sg", "Pnon", "Dat"]);
        let dative = analysis.suffixes.last().unwrap();
        assert_eq!(dative.pattern, "+yA");
        assert_eq!(dative.actual, "a");
        assert!(!dative.derivational);
    }

    #[test]
    fn roundtrip_bytes() {
        let record = record("evlerde");
        assert!(!record.analyses.is_empty());

        let bytes = to_bytes(&record).expect("serialization failed");
        assert!(!bytes.is_empty());
        let restored = from_bytes(&bytes).expect("deserialization failed");
        assert_eq!(restored, record);
    }

    #[test]
    fn stream_of_records() {
        let words = ["kitaba", "qqq", "geldim"];
        let mut bytes = Vec::new();
        for word in words {
            write_record(&mut bytes, &record(word)).unwrap();
        }

        let restored = read_records(&bytes).unwrap();
        let restored_words: Vec<&str> = restored.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(restored_words, words);
        assert!(restored[1].analyses.is_empty());
    }

    #[test]
    fn roundtrip_file() {
        let records = vec![record("bana"), record("gitti")];
        let temp_path = std::env::temp_dir().join("trmorph_test_records.msgpack");

        save_to_file(&records, &temp_path).expect("save failed");
        let restored = load_from_file(&temp_path).expect("load failed");
        assert_eq!(restored, records);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn truncated_bytes_fail() {
        let bytes = to_bytes(&record("kitaba")).unwrap();
        let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    }

    #[test]
    fn load_nonexistent_file_fails() {
        let result = load_from_file("/nonexistent/path/to/records.msgpack");
        assert!(matches!(result.unwrap_err().kind, ErrorKind::Io(_)));
    }
}
