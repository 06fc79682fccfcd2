//! trmorph CLI entry point.

use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::LevelFilter;
use trmorph_parser::{Analyzer, ParserConfig};
use trmorph_runtime::{OutputFormat, Repl, StderrLogger};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    words: Vec<String>,
    lexicon: Option<PathBuf>,
    format: OutputFormat,
    batch_mode: bool,
    basic: bool,
    brute_force: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--basic" => config.basic = true,
            "--brute-force" => config.brute_force = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "-l" | "--lexicon" => {
                let path = args.next().ok_or("--lexicon requires a path")?;
                config.lexicon = Some(PathBuf::from(path));
            }
            "-f" | "--format" => {
                let name = args.next().ok_or("--format requires a name")?;
                config.format = name.parse()?;
            }
            "--" => config.words.extend(args.by_ref()),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unknown option: {other}").into());
            }
            word => config.words.push(word.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("trmorph {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    StderrLogger::install(match config.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    let parser_config = if config.basic {
        ParserConfig::basic()
    } else {
        ParserConfig::full()
    }
    .with_brute_force_nouns(config.brute_force)
    .with_brute_force_verbs(config.brute_force);

    let analyzer = match &config.lexicon {
        Some(path) => Analyzer::from_lexicon_file(parser_config, path)?,
        None => Analyzer::bundled(parser_config)?,
    };

    // Words on the command line
    if !config.words.is_empty() {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for word in &config.words {
            config.format.write(&mut out, word, &analyzer.analyze(word))?;
        }
        out.flush()?;
        return Ok(());
    }

    // Words from stdin, one or more per line
    if config.batch_mode {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for line in io::stdin().lock().lines() {
            for word in line?.split_whitespace() {
                config.format.write(&mut out, word, &analyzer.analyze(word))?;
            }
        }
        out.flush()?;
        return Ok(());
    }

    let mut repl = Repl::new(Arc::new(analyzer))?.with_format(config.format);
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mtrmorph\x1b[0m - Morphological analyzer for Turkish

\x1b[1mUSAGE:\x1b[0m
    trmorph [OPTIONS] [WORDS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS...]    Words to analyze; without words, start the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -l, --lexicon PATH     Load the lexicon from PATH instead of the bundled one
    -f, --format NAME      Output format: tests, parseset, simple, stem, msgpack
    -b, --batch            Analyze words read from stdin and exit
    --basic                Basic suffix graph and lexicon lookup only
    --brute-force          Guess noun and verb roots the lexicon does not know
    -v, --verbose          Log more (repeat for debug output)

\x1b[1mEXAMPLES:\x1b[0m
    trmorph                             Start the REPL
    trmorph kitaba evlerde              Analyze two words
    trmorph -f parseset kitaplarımızdan Print parse-set analyses
    trmorph -b -f msgpack < words.txt > out.msgpack
                                        Export analyses as MessagePack

\x1b[1mREPL COMMANDS:\x1b[0m
    :help             Show help
    :format <name>    Switch the output format
    :quit             Exit REPL (or Ctrl+D)"
    );
}
