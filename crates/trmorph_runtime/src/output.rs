//! Writing the analyses of a word in a chosen format.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use trmorph_foundation::{Error, ErrorKind, Result};
use trmorph_morphotactics::MorphemeContainer;
use trmorph_parser::Format;

use crate::serialize::{WordRecord, write_record};

/// A text rendering or a binary `MessagePack` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per analysis.
    Text(Format),
    /// One [`WordRecord`] per word.
    MessagePack,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text(Format::default())
    }
}

impl OutputFormat {
    /// Every format name accepted by [`OutputFormat::from_str`].
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Format::ALL
            .iter()
            .map(|f| f.as_str())
            .chain(std::iter::once("msgpack"))
            .collect()
    }

    /// Whether the output is binary.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::MessagePack)
    }

    /// Writes the analyses of one word.
    ///
    /// Text formats write one line per analysis, or a single
    /// `word: no analysis` line when there are none.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or encoding fails.
    pub fn write<W: Write>(
        self,
        writer: &mut W,
        word: &str,
        analyses: &[MorphemeContainer],
    ) -> Result<()> {
        match self {
            Self::Text(format) => {
                if analyses.is_empty() {
                    writeln!(writer, "{word}: no analysis")?;
                }
                for analysis in analyses {
                    writeln!(writer, "{}", format.render(analysis))?;
                }
                Ok(())
            }
            Self::MessagePack => write_record(writer, &WordRecord::new(word, analyses)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(format) => write!(f, "{format}"),
            Self::MessagePack => f.write_str("msgpack"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "msgpack" => Ok(Self::MessagePack),
            other => other
                .parse()
                .map(Self::Text)
                .map_err(|_| Error::new(ErrorKind::UnknownFormat(other.to_string()))),
        }
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::serialize::read_records;

    proptest! {
        #[test]
        fn only_known_names_parse(name in "[a-z]{0,10}") {
            let known = OutputFormat::names().contains(&name.as_str());
            prop_assert_eq!(name.parse::<OutputFormat>().is_ok(), known);
        }

        #[test]
        fn unanalyzed_words_get_one_line(word in "\\PC{1,16}") {
            let mut out = Vec::new();
            OutputFormat::default().write(&mut out, &word, &[]).unwrap();
            prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{word}: no analysis\n"));
        }

        #[test]
        fn unanalyzed_words_keep_their_text(word in "\\PC{0,16}") {
            let mut out = Vec::new();
            OutputFormat::MessagePack.write(&mut out, &word, &[]).unwrap();
            let records = read_records(&out).unwrap();
            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(&records[0].word, &word);
            prop_assert!(records[0].analyses.is_empty());
        }
    }
}
