//! Syntactic categories of lexemes and graph states.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Declares a closed vocabulary enum whose members read and print as the
/// short tokens used in lexicon files and analysis strings.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $unknown:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The token used in lexicon files and analyses.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    other => Err(Error::new(ErrorKind::$unknown(other.to_string()))),
                }
            }
        }
    };
}

pub(crate) use token_enum;

token_enum! {
    /// Primary part of speech.
    SyntacticCategory, UnknownCategory {
        /// Noun.
        Noun => "Noun",
        /// Adjective.
        Adjective => "Adj",
        /// Adverb.
        Adverb => "Adv",
        /// Conjunction.
        Conjunction => "Conj",
        /// Interjection.
        Interjection => "Interj",
        /// Verb.
        Verb => "Verb",
        /// Pronoun.
        Pronoun => "Pron",
        /// Numeral.
        Numeral => "Num",
        /// Determiner.
        Determiner => "Det",
        /// Particle.
        Particle => "Part",
        /// Question particle.
        Question => "Ques",
        /// Punctuation.
        Punctuation => "Punc",
    }
}

token_enum! {
    /// Secondary category refining the primary one.
    SecondaryCategory, UnknownSecondaryCategory {
        /// Duplicator.
        Duplicator => "Dup",
        /// Post-position.
        PostPositive => "Postp",
        /// Interrogative.
        Question => "Ques",
        /// Demonstrative.
        Demonstrative => "Demons",
        /// Reflexive.
        Reflexive => "Reflex",
        /// Personal.
        Personal => "Pers",
        /// Time expression.
        Time => "Time",
        /// Proper noun.
        ProperNoun => "Prop",
        /// Abbreviation.
        Abbreviation => "Abbr",
        /// Cardinal numeral.
        Cardinal => "Card",
        /// Ordinal numeral.
        Ordinal => "Ord",
        /// Numeral written with digits.
        Digits => "Digits",
    }
}
