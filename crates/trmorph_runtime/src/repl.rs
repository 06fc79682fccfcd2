//! The interactive analysis loop.

use std::io::{self, Write};
use std::sync::Arc;

use trmorph_foundation::{Error, ErrorKind, Result};
use trmorph_parser::Analyzer;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::output::OutputFormat;

const COMMANDS: &[&str] = &[":help", ":format", ":quit"];

/// What a line of input asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text to print.
    Output(Vec<u8>),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The analyzer words are run through.
    analyzer: Arc<Analyzer>,

    /// How analyses are printed.
    format: OutputFormat,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(analyzer: Arc<Analyzer>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, analyzer))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, analyzer: Arc<Analyzer>) -> Self {
        editor.set_completions(
            COMMANDS
                .iter()
                .copied()
                .chain(OutputFormat::names())
                .map(String::from)
                .collect(),
        );
        Self {
            editor,
            analyzer,
            format: OutputFormat::default(),
            show_banner: true,
            prompt: "trmorph> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The current output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        let stdout = io::stdout();
        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Response::Output(bytes)) => {
                    let mut out = stdout.lock();
                    out.write_all(&bytes)?;
                    out.flush()?;
                }
                Ok(Response::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGüle güle!");
        Ok(())
    }

    /// Evaluates one line: a `:` command, or words to analyze.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or format name.
    pub fn eval(&mut self, line: &str) -> Result<Response> {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return self.analyze_words(line);
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit"), None) => Ok(Response::Quit),
            (Some("h" | "help"), None) => Ok(Response::Output(help_text().into_bytes())),
            (Some("format"), None) => {
                Ok(Response::Output(format!("format: {}\n", self.format).into_bytes()))
            }
            (Some("format"), Some(name)) => {
                self.format = name.parse()?;
                Ok(Response::Output(format!("format: {}\n", self.format).into_bytes()))
            }
            _ => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command: {line} (try :help)"
            )))),
        }
    }

    fn analyze_words(&self, line: &str) -> Result<Response> {
        let mut out = Vec::new();
        for word in line.split_whitespace() {
            let analyses = self.analyzer.analyze(word);
            match self.format {
                OutputFormat::Text(_) => {
                    self.format.write(&mut out, word, &analyses)?;
                }
                // Binary records are shown as hex in the terminal.
                OutputFormat::MessagePack => {
                    let mut bytes = Vec::new();
                    self.format.write(&mut bytes, word, &analyses)?;
                    for byte in &bytes {
                        write!(out, "{byte:02x}")?;
                    }
                    writeln!(out)?;
                }
            }
        }
        Ok(Response::Output(out))
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mtrmorph\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} roots loaded. Type words to analyze, :help for commands.\n",
            self.analyzer.roots().len()
        );
        let _ = io::stdout().flush();
    }
}

fn help_text() -> String {
    format!(
        ":help            Show this help
:format          Show the output format
:format <name>   Switch the output format ({})
:quit            Leave (or Ctrl+D)

Any other line is split into words and every analysis of each word is printed.
",
        OutputFormat::names().join(", ")
    )
}
