//! Morphological attributes attached to lexemes.

use std::fmt;
use std::str::FromStr;

use crate::category::token_enum;
use crate::error::{Error, ErrorKind};
use crate::flags::{Flag, FlagSet};

token_enum! {
    /// A morphological attribute of a lexeme.
    ///
    /// These govern allomorph synthesis (voicing, doubling, vowel drop),
    /// harmony overrides, and which aorist, causative and passive allomorph a
    /// verb takes.
    LexemeAttribute, UnknownAttribute {
        /// Final stop is voiced before a vowel (`kitap` → `kitabı`).
        Voicing => "Voicing",
        /// Voicing is optional; both allomorphs are valid.
        VoicingOpt => "VoicingOpt",
        /// Final stop never voices.
        NoVoicing => "NoVoicing",
        /// Suffix vowels take the opposite frontness (`saat` → `saati`).
        InverseHarmony => "InverseHarmony",
        /// The last vowel drops before a vowel (`burun` → `burnu`).
        LastVowelDrop => "LastVowelDrop",
        /// The final consonant doubles before a vowel (`hak` → `hakkı`).
        Doubling => "Doubling",
        /// Irregular stem handled by a fixed table.
        RootChange => "RootChange",
        /// Inherently plural.
        Plural => "Plural",
        /// Takes no suffixes.
        NoSuffix => "NoSuffix",
        /// Compound noun already carrying a third person possessive.
        CompoundP3sg => "CompoundP3sg",
        /// Verb-final vowel drops before `-Iyor`.
        ProgressiveVowelDrop => "ProgressiveVowelDrop",
        /// Aorist with `-Ir`.
        AoristI => "Aorist_I",
        /// Aorist with `-Ar`.
        AoristA => "Aorist_A",
        /// Causative with `-t`.
        CausativeT => "Causative_t",
        /// Causative with `-Ir`.
        CausativeIr => "Causative_Ir",
        /// Causative with `-It`.
        CausativeIt => "Causative_It",
        /// Causative with `-Ar`.
        CausativeAr => "Causative_Ar",
        /// Causative with `-dIr`.
        CausativeDIr => "Causative_dIr",
        /// Passive with `-Il`.
        PassiveIl => "Passive_Il",
        /// Passive with `-In`.
        PassiveIn => "Passive_In",
        /// Passive with `-InIl`.
        PassiveInIl => "Passive_InIl",
    }
}

impl LexemeAttribute {
    /// The causative family.
    pub const CAUSATIVES: &'static [Self] = &[
        Self::CausativeT,
        Self::CausativeIr,
        Self::CausativeIt,
        Self::CausativeAr,
        Self::CausativeDIr,
    ];
}

impl Flag for LexemeAttribute {
    const ALL: &'static [Self] = Self::ALL;

    fn bit(self) -> u32 {
        self as u32
    }
}

/// A set of lexeme attributes.
pub type LexemeAttributes = FlagSet<LexemeAttribute>;

/// Parses a comma separated attribute list such as `Voicing, Doubling`.
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownAttribute`] for an unrecognized token.
pub fn parse_attributes(list: &str) -> crate::Result<LexemeAttributes> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse::<LexemeAttribute>)
        .collect()
}
