//! The Turkish alphabet and its phonological letter classes.
//!
//! The table is a `const` array built at compile time; lookups are plain
//! matches over it, so there is no global state to initialize.

/// One letter of the alphabet with its phonological properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    /// Lower-case form.
    pub ch: char,
    /// Upper-case form (Turkish casing: `ı` ↔ `I`, `i` ↔ `İ`).
    pub upper: char,
    /// 1-based position in the alphabet; 0 for characters outside it.
    pub index: u8,
    /// True for vowels.
    pub vowel: bool,
    /// True for front vowels.
    pub frontal: bool,
    /// True for rounded vowels.
    pub rounded: bool,
    /// True for voiceless consonants.
    pub voiceless: bool,
    /// True for continuant consonants.
    pub continuant: bool,
    /// Closest ASCII letter.
    pub ascii: char,
}

impl Letter {
    const fn consonant(ch: char, upper: char, index: u8, voiceless: bool, continuant: bool) -> Self {
        Self {
            ch,
            upper,
            index,
            vowel: false,
            frontal: false,
            rounded: false,
            voiceless,
            continuant,
            ascii: ch,
        }
    }

    const fn vowel(ch: char, upper: char, index: u8, frontal: bool, rounded: bool) -> Self {
        Self {
            ch,
            upper,
            index,
            vowel: true,
            frontal,
            rounded,
            voiceless: false,
            continuant: false,
            ascii: ch,
        }
    }

    const fn with_ascii(mut self, ascii: char) -> Self {
        self.ascii = ascii;
        self
    }

    /// A character outside the alphabet: punctuation, digits, form markers.
    #[must_use]
    pub const fn unknown(ch: char) -> Self {
        Self::consonant(ch, ch, 0, false, false)
    }

    /// Returns true if the letter belongs to the alphabet.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.index != 0
    }
}

/// All letters in alphabetical order, followed by the circumflexed vowels.
pub const LETTERS: [Letter; 35] = [
    Letter::vowel('a', 'A', 1, false, false),
    Letter::consonant('b', 'B', 2, false, false),
    Letter::consonant('c', 'C', 3, false, false),
    Letter::consonant('ç', 'Ç', 4, true, false).with_ascii('c'),
    Letter::consonant('d', 'D', 5, false, false),
    Letter::vowel('e', 'E', 6, true, false),
    Letter::consonant('f', 'F', 7, true, true),
    Letter::consonant('g', 'G', 8, false, false),
    Letter::consonant('ğ', 'Ğ', 9, false, true).with_ascii('g'),
    Letter::consonant('h', 'H', 10, true, true),
    Letter::vowel('ı', 'I', 11, false, false).with_ascii('i'),
    Letter::vowel('i', 'İ', 12, true, false),
    Letter::consonant('j', 'J', 13, false, true),
    Letter::consonant('k', 'K', 14, true, false),
    Letter::consonant('l', 'L', 15, false, true),
    Letter::consonant('m', 'M', 16, false, true),
    Letter::consonant('n', 'N', 17, false, true),
    Letter::vowel('o', 'O', 18, false, true),
    Letter::vowel('ö', 'Ö', 19, true, true).with_ascii('o'),
    Letter::consonant('p', 'P', 20, true, false),
    Letter::consonant('r', 'R', 21, false, true),
    Letter::consonant('s', 'S', 22, true, true),
    Letter::consonant('ş', 'Ş', 23, true, true).with_ascii('s'),
    Letter::consonant('t', 'T', 24, true, false),
    Letter::vowel('u', 'U', 25, false, true),
    Letter::vowel('ü', 'Ü', 26, true, true).with_ascii('u'),
    Letter::consonant('v', 'V', 27, false, true),
    Letter::consonant('y', 'Y', 28, false, true),
    Letter::consonant('z', 'Z', 29, false, true),
    Letter::consonant('q', 'Q', 30, false, false),
    Letter::consonant('w', 'W', 31, false, false),
    Letter::consonant('x', 'X', 32, false, false),
    Letter::vowel('â', 'Â', 33, false, false).with_ascii('a'),
    Letter::vowel('î', 'Î', 34, true, false).with_ascii('i'),
    Letter::vowel('û', 'Û', 35, false, true).with_ascii('u'),
];

/// Looks up the letter for a character, accepting either case.
///
/// Characters outside the alphabet come back as [`Letter::unknown`], which
/// has every phonological flag cleared.
#[must_use]
pub fn letter(c: char) -> Letter {
    LETTERS
        .iter()
        .find(|l| l.ch == c)
        .or_else(|| LETTERS.iter().find(|l| l.upper == c))
        .copied()
        .unwrap_or_else(|| Letter::unknown(c))
}

/// Returns true if `c` is a vowel of the alphabet, in either case.
#[must_use]
pub fn is_vowel(c: char) -> bool {
    letter(c).vowel
}

/// Voiced counterpart used when a stem-final stop meets a vowel.
#[must_use]
pub fn voice(c: char) -> Option<char> {
    match letter(c).ch {
        'p' => Some('b'),
        'ç' => Some('c'),
        't' => Some('d'),
        'g' | 'k' => Some('ğ'),
        _ => None,
    }
}

/// Voiceless counterpart used after a voiceless stem-final letter.
#[must_use]
pub fn devoice(c: char) -> Option<char> {
    match letter(c).ch {
        'b' => Some('p'),
        'c' => Some('ç'),
        'd' => Some('t'),
        'g' => Some('k'),
        _ => None,
    }
}

/// Letters a voiced surface letter may have come from.
#[must_use]
pub fn inverse_voice(c: char) -> &'static [char] {
    match c {
        'b' => &['p'],
        'c' => &['ç'],
        'd' => &['t'],
        'g' => &['k'],
        'ğ' => &['g', 'k'],
        _ => &[],
    }
}

/// Lower-cases one character with Turkish casing rules.
#[must_use]
pub fn to_lower(c: char) -> char {
    if let Some(l) = LETTERS.iter().find(|l| l.upper == c) {
        return l.ch;
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Lower-cases a string with Turkish casing rules (`I` → `ı`, `İ` → `i`).
#[must_use]
pub fn lowercase(word: &str) -> String {
    word.chars().map(to_lower).collect()
}

/// Replaces circumflexed vowels with their plain forms.
#[must_use]
pub fn strip_circumflex(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'â' => 'a',
            'î' => 'i',
            'û' => 'u',
            'Â' => 'A',
            'Î' => 'İ',
            'Û' => 'U',
            other => other,
        })
        .collect()
}

/// Returns true if the word contains a circumflexed vowel.
#[must_use]
pub fn has_circumflex(word: &str) -> bool {
    word.chars().any(|c| matches!(c, 'â' | 'î' | 'û' | 'Â' | 'Î' | 'Û'))
}
