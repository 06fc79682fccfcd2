//! Error types for trmorph.
//!
//! Every error here is a configuration error raised while the lexicon, the
//! suffix graph or the predefined paths are being built. Parsing itself never
//! fails: a word nothing can explain simply yields no analyses.

use std::fmt;

use thiserror::Error;

use crate::category::SyntacticCategory;

/// The main error type for trmorph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate state error.
    #[must_use]
    pub fn duplicate_state(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateState(name.into()))
    }

    /// Creates a duplicate suffix error.
    #[must_use]
    pub fn duplicate_suffix(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateSuffix(name.into()))
    }

    /// Creates an unknown state error.
    #[must_use]
    pub fn unknown_state(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownState(name.into()))
    }

    /// Creates an unknown suffix error.
    #[must_use]
    pub fn unknown_suffix(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSuffix(name.into()))
    }

    /// Creates a malformed lexicon line error.
    #[must_use]
    pub fn malformed_line(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedLexiconLine(message.into()))
    }

    /// Creates a predefined path construction error.
    #[must_use]
    pub fn predefined_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PredefinedPath(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A state name was registered twice in the composed graph.
    #[error("duplicate state: {0}")]
    DuplicateState(String),

    /// A suffix name was registered twice in the composed graph.
    #[error("duplicate suffix: {0}")]
    DuplicateSuffix(String),

    /// A suffix group name was registered twice.
    #[error("duplicate suffix group: {0}")]
    DuplicateGroup(String),

    /// A state name was referenced but never registered.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// A suffix name was referenced but never registered.
    #[error("unknown suffix: {0}")]
    UnknownSuffix(String),

    /// A suffix group name was referenced but never registered.
    #[error("unknown suffix group: {0}")]
    UnknownGroup(String),

    /// An intermediate state could not be chosen unambiguously.
    #[error("ambiguous path through {state}: {first} or {second}")]
    AmbiguousName {
        /// The state the lookup started from.
        state: String,
        /// The first candidate found.
        first: String,
        /// The second candidate found.
        second: String,
    },

    /// A syntactic category token was not recognized.
    #[error("unknown syntactic category: {0}")]
    UnknownCategory(String),

    /// A secondary syntactic category token was not recognized.
    #[error("unknown secondary syntactic category: {0}")]
    UnknownSecondaryCategory(String),

    /// A lexeme attribute token was not recognized.
    #[error("unknown lexeme attribute: {0}")]
    UnknownAttribute(String),

    /// A lexicon record could not be parsed.
    #[error("malformed lexicon line: {0}")]
    MalformedLexiconLine(String),

    /// A lexeme is marked as an irregular stem but has no stem table entry.
    #[error("no root change rule for lemma: {0}")]
    UnhandledRootChange(String),

    /// The graph has no entry state for a root.
    #[error("no entry state for {lemma} ({category})")]
    MissingEntryState {
        /// The lemma of the root.
        lemma: String,
        /// The category of the root's lexeme.
        category: SyntacticCategory,
    },

    /// Free or zero transitions loop back to a state without consuming text.
    /// Holds the states on the loop, the first repeated at the end.
    #[error("free transitions loop through {}", .0.join(" -> "))]
    EmptyTransitionCycle(Vec<String>),

    /// A predefined path could not be built.
    #[error("predefined path: {0}")]
    PredefinedPath(String),

    /// A root required by a predefined path is missing from the root map.
    #[error("missing root: {root} ({category})")]
    MissingRoot {
        /// The root string.
        root: String,
        /// The expected category.
        category: SyntacticCategory,
    },

    /// A digit sequence could not be read as a number.
    #[error("invalid numeral: {0}")]
    InvalidNumeral(String),

    /// An output format name was not recognized.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Encoding or decoding an analysis record failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading lexicon text failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or table name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// The offending input text.
    pub snippet: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending text.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, ": {snippet}")?;
        }
        Ok(())
    }
}

/// Result type alias using trmorph's error type.
pub type Result<T> = std::result::Result<T, Error>;
