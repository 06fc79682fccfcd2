//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use trmorph_foundation::{Error, ErrorContext, ErrorKind, SyntacticCategory};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_state() {
    let err = Error::unknown_state("NOUN_ROTO");
    assert!(matches!(err.kind, ErrorKind::UnknownState(_)));
    assert!(format!("{err}").contains("NOUN_ROTO"));
}

#[test]
fn error_duplicate_suffix() {
    let err = Error::duplicate_suffix("Dat_Noun");
    assert!(matches!(err.kind, ErrorKind::DuplicateSuffix(_)));
    assert_eq!(format!("{err}"), "duplicate suffix: Dat_Noun");
}

#[test]
fn error_missing_root() {
    let err = Error::new(ErrorKind::MissingRoot {
        root: "ben".to_string(),
        category: SyntacticCategory::Pronoun,
    });
    let msg = format!("{err}");
    assert!(msg.contains("ben"));
    assert!(msg.contains("Pron"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_is_kept() {
    let err = Error::malformed_line("missing ]").with_context(
        ErrorContext::new()
            .with_source("lexicon.txt")
            .with_line(12)
            .with_snippet("kitap [P:Noun"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("lexicon.txt"));
    assert_eq!(context.line, Some(12));
    assert_eq!(context.snippet.as_deref(), Some("kitap [P:Noun"));
}

#[test]
fn unknown_tokens_are_errors() {
    let err = "Nuon".parse::<SyntacticCategory>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCategory(ref t) if t == "Nuon"));
}
