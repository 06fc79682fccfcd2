//! Root finders.
//!
//! A root finder looks at a prefix of the input (and at the whole input for
//! context) and proposes the roots that could spell that prefix. Some consult
//! the root map; others synthesize roots from the shape of the text alone:
//! digits, capitalization, a trailing apostrophe or, for words the lexicon
//! does not know, the letters around the prefix boundary.

use std::sync::{Arc, LazyLock};

use log::debug;
use regex::Regex;
use trmorph_foundation::alphabet;
use trmorph_foundation::phonetics::{self, PhoneticExpectations};
use trmorph_foundation::{LexemeAttribute, LexemeAttributes, SyntacticCategory};
use trmorph_lexicon::{Lexeme, Root, RootMap};

const APOSTROPHE: char = '\'';

static NUMBER_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        r"^[-+]?[0-9]+(,[0-9])?[0-9]*$",
        r"^[-+]?([0-9]{1,3}\.)+[0-9]{3}(,[0-9])?[0-9]*$",
    ]
    .map(|pattern| {
        Regex::new(pattern).unwrap_or_else(|e| panic!("invalid number pattern {pattern}: {e}"))
    })
});

/// Proposes roots for a prefix of the input.
pub trait RootFinder: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Roots that could spell `partial`, a prefix of `whole`.
    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root>;
}

/// Lexicon lookup for every category but numerals.
#[derive(Debug, Clone)]
pub struct WordRootFinder {
    roots: Arc<RootMap>,
}

impl WordRootFinder {
    /// Creates a finder over a root map.
    #[must_use]
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self { roots }
    }
}

impl RootFinder for WordRootFinder {
    fn name(&self) -> &'static str {
        "word"
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        self.roots
            .get(partial)
            .iter()
            .filter(|r| r.category() != SyntacticCategory::Numeral)
            .cloned()
            .collect()
    }
}

/// Lexicon lookup for spelled-out numerals.
#[derive(Debug, Clone)]
pub struct TextNumeralRootFinder {
    roots: Arc<RootMap>,
}

impl TextNumeralRootFinder {
    /// Creates a finder over a root map.
    #[must_use]
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self { roots }
    }
}

impl RootFinder for TextNumeralRootFinder {
    fn name(&self) -> &'static str {
        "text_numeral"
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        self.roots
            .get(partial)
            .iter()
            .filter(|r| r.category() == SyntacticCategory::Numeral)
            .cloned()
            .collect()
    }
}

/// Numerals written with digits: `3`, `-12`, `3,5`, `1.000.000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitNumeralRootFinder;

impl RootFinder for DigitNumeralRootFinder {
    fn name(&self) -> &'static str {
        "digit_numeral"
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        if !NUMBER_PATTERNS.iter().any(|re| re.is_match(partial)) {
            return Vec::new();
        }
        match Root::numeral(partial) {
            Ok(root) => vec![root],
            Err(err) => {
                debug!("digits {partial} not readable: {err}");
                Vec::new()
            }
        }
    }
}

/// Proper nouns and abbreviations followed by an apostrophe: `Ankara'`,
/// `TBMM'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounFromApostropheRootFinder;

impl RootFinder for ProperNounFromApostropheRootFinder {
    fn name(&self) -> &'static str {
        "proper_noun_apostrophe"
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        let Some(candidate) = partial.strip_suffix(APOSTROPHE) else {
            return Vec::new();
        };
        if candidate.is_empty() {
            Vec::new()
        } else if is_all_upper(candidate) {
            vec![Root::abbreviation(candidate)]
        } else if starts_upper(candidate) {
            vec![Root::proper_noun(candidate)]
        } else {
            Vec::new()
        }
    }
}

/// Capitalized words written without an apostrophe.
///
/// A whole word in capitals is an abbreviation (`TBMM`); any other
/// capitalized prefix is a proper noun (`Ankara` in `Ankaralı`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounWithoutApostropheRootFinder;

impl RootFinder for ProperNounWithoutApostropheRootFinder {
    fn name(&self) -> &'static str {
        "proper_noun"
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root> {
        if whole.contains(APOSTROPHE) || partial.contains(APOSTROPHE) {
            return Vec::new();
        }
        let Some(first) = partial.chars().next() else {
            return Vec::new();
        };
        if !first.is_alphabetic() || !first.is_uppercase() {
            return Vec::new();
        }
        if partial == whole && is_all_upper(partial) {
            vec![Root::abbreviation(partial)]
        } else {
            vec![Root::proper_noun(partial)]
        }
    }
}

/// Hypothesizes noun roots for words the lexicon does not know.
///
/// Looks for the signs of voicing (`kitab` + `ı`), doubling (`hakk` + `ı`),
/// explicit no-voicing (`saat` + `i`) and inverse harmony at the prefix
/// boundary. Vowel drop is not guessed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceNounRootFinder;

/// A hypothesized lexeme root with its attributes, before it becomes a
/// [`Root`].
#[derive(Debug, Clone)]
struct Guess {
    lexeme_root: String,
    attributes: LexemeAttributes,
}

impl Guess {
    fn plain(partial: &str) -> Self {
        Self {
            lexeme_root: partial.to_string(),
            attributes: LexemeAttributes::empty(),
        }
    }

    fn with(&self, attribute: LexemeAttribute) -> Self {
        Self {
            lexeme_root: self.lexeme_root.clone(),
            attributes: self.attributes.insert(attribute),
        }
    }

    /// `hakk` was `hak`: the second to last letter is dropped.
    fn undoubled(&self) -> Self {
        let mut chars: Vec<char> = self.lexeme_root.chars().collect();
        if chars.len() >= 2 {
            chars.remove(chars.len() - 2);
        }
        Self {
            lexeme_root: chars.into_iter().collect(),
            attributes: self.attributes.insert(LexemeAttribute::Doubling),
        }
    }

    /// `kitab` was `kitap`: one guess per voiceless counterpart.
    fn devoiced(&self, last: char) -> Vec<Self> {
        let stem: String = {
            let mut chars: Vec<char> = self.lexeme_root.chars().collect();
            chars.pop();
            chars.into_iter().collect()
        };
        alphabet::inverse_voice(last)
            .iter()
            .map(|c| Self {
                lexeme_root: format!("{stem}{c}"),
                attributes: self.attributes,
            })
            .collect()
    }

    fn into_root(self, text: &str) -> Root {
        let lexeme = Lexeme::new(&self.lexeme_root, &self.lexeme_root, SyntacticCategory::Noun)
            .with_attributes(self.attributes);
        let attributes = phonetics::attributes(text, self.attributes);
        Root::new(text, Arc::new(lexeme), PhoneticExpectations::empty(), attributes)
    }
}

impl BruteForceNounRootFinder {
    fn guesses(partial: &str, whole: &str) -> Vec<Guess> {
        let partial_len = partial.chars().count();
        let whole_len = whole.chars().count();
        let plain = Guess::plain(partial);

        if partial_len < 2 && whole_len >= 2 {
            return Vec::new();
        }
        if partial == whole || partial_len < 2 {
            return vec![plain];
        }
        let Some(last_vowel) = phonetics::last_vowel(partial) else {
            return vec![plain];
        };
        let (Some(last), Some(next)) = (partial.chars().last(), whole.chars().nth(partial_len)) else {
            return vec![plain];
        };
        if last.is_uppercase() || next.is_uppercase() {
            return vec![plain];
        }

        let mut guesses = Self::voicing_and_doubling(partial, last, next, plain);

        let first_vowel_after = whole
            .chars()
            .skip(partial_len - 1)
            .map(alphabet::letter)
            .find(|l| l.vowel);
        if first_vowel_after.is_some_and(|v| v.frontal != last_vowel.frontal) {
            guesses = guesses
                .into_iter()
                .map(|g| g.with(LexemeAttribute::InverseHarmony))
                .collect();
        }
        guesses
    }

    fn voicing_and_doubling(partial: &str, last: char, next: char, plain: Guess) -> Vec<Guess> {
        let next_is_vowel = alphabet::is_vowel(next);
        let no_voicing = alphabet::voice(last).is_some() && next_is_vowel;
        let voicing = !alphabet::inverse_voice(last).is_empty() && next_is_vowel;
        let doubling = partial.chars().count() > 2
            && !alphabet::is_vowel(last)
            && partial.chars().rev().nth(1) == Some(last)
            && next_is_vowel;

        match (doubling, no_voicing, voicing) {
            (true, true, _) => {
                let plain = plain.with(LexemeAttribute::NoVoicing);
                let undoubled = plain.undoubled();
                vec![plain, undoubled]
            }
            (true, false, true) => {
                let undoubled = plain.undoubled();
                let devoiced: Vec<Guess> = plain
                    .devoiced(last)
                    .iter()
                    .map(Guess::undoubled)
                    .collect();
                let mut guesses = vec![plain, undoubled];
                guesses.extend(devoiced);
                guesses
            }
            (true, false, false) => {
                let undoubled = plain.undoubled();
                vec![plain, undoubled]
            }
            (false, true, _) => vec![plain.with(LexemeAttribute::NoVoicing)],
            (false, false, true) => {
                let devoiced = plain.devoiced(last);
                let mut guesses = vec![plain];
                guesses.extend(devoiced);
                guesses
            }
            (false, false, false) => vec![plain],
        }
    }
}

impl RootFinder for BruteForceNounRootFinder {
    fn name(&self) -> &'static str {
        "brute_force_noun"
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root> {
        if partial.is_empty() || !whole.starts_with(partial) {
            return Vec::new();
        }
        Self::guesses(partial, whole)
            .into_iter()
            .map(|g| g.into_root(partial))
            .collect()
    }
}

/// Hypothesizes compound nouns with a third person possessive, such as
/// `acemborusu` or `keçiboynuzu`, for words the lexicon does not know.
///
/// Only the `n` before a case suffix gives such a compound away
/// (`suborusuna`), so nothing is guessed without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCompoundNounRootFinder;

impl BruteForceCompoundNounRootFinder {
    fn compound(root: Root, text: String, partial: &str) -> Root {
        let lexeme = Lexeme::new(partial, partial, SyntacticCategory::Noun)
            .with_attributes(root.lexeme.attributes.insert(LexemeAttribute::CompoundP3sg));
        Root::new(text, Arc::new(lexeme), root.expectations, root.attributes)
    }
}

impl RootFinder for BruteForceCompoundNounRootFinder {
    fn name(&self) -> &'static str {
        "brute_force_compound_noun"
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root> {
        let chars: Vec<char> = partial.chars().collect();
        if chars.len() < 5 || partial == whole || !whole.starts_with(partial) {
            return Vec::new();
        }
        let last = chars[chars.len() - 1];
        let previous = chars[chars.len() - 2];
        if last.is_uppercase() || previous.is_uppercase() {
            return Vec::new();
        }
        if !matches!(last, 'i' | 'ı' | 'u' | 'ü') {
            return Vec::new();
        }
        let mut after = whole.chars().skip(chars.len());
        if after.next() != Some('n') || after.next().is_none() {
            return Vec::new();
        }

        let nouns = BruteForceNounRootFinder;
        let one_short: String = chars[..chars.len() - 1].iter().collect();
        let mut compounds: Vec<Root> = nouns
            .find_roots(&one_short, whole)
            .into_iter()
            .map(|r| {
                let text = r.lexeme.root.clone();
                Self::compound(r, text, partial)
            })
            .collect();

        // suborusu: the possessive is `+sI` on `suboru`
        if previous == 's' {
            let two_short: String = chars[..chars.len() - 2].iter().collect();
            compounds.extend(nouns.find_roots(&two_short, whole).into_iter().map(|r| {
                let text = r.text.clone();
                Self::compound(r, text, partial)
            }));
        }
        compounds
    }
}

/// Hypothesizes verb roots for words the lexicon does not know.
///
/// Reads the letters right after the prefix for the signs of progressive
/// vowel drop (`başl` + `ıyor`), the aorist allomorph (`yap` + `ar`,
/// `gel` + `ir`), causatives, passives and `t`/`d` voicing (`gid` + `er`).
/// A causative or passive guess carries that attribute alone. Guesses whose
/// lexeme root could not end a Turkish verb (`zanh`) are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceVerbRootFinder;

const PROGRESSIVE_ENDINGS: [&str; 4] = ["iyor", "ıyor", "uyor", "üyor"];

const CAUSATIVE_ENDINGS: [(LexemeAttribute, &[&str]); 5] = [
    (LexemeAttribute::CausativeT, &["t"]),
    (LexemeAttribute::CausativeIr, &["ir", "ır", "ur", "ür"]),
    (LexemeAttribute::CausativeIt, &["it", "ıt", "ut", "üt"]),
    (LexemeAttribute::CausativeAr, &["ar", "er"]),
    (
        LexemeAttribute::CausativeDIr,
        &["dir", "dır", "dur", "dür", "tir", "tır", "tur", "tür"],
    ),
];

/// Passive endings after a consonant, then after a vowel.
const PASSIVE_ENDINGS: [(LexemeAttribute, &[&str], &[&str]); 3] = [
    (LexemeAttribute::PassiveIl, &["il", "ıl", "ul", "ül"], &["l"]),
    (LexemeAttribute::PassiveIn, &["in", "ın", "un", "ün"], &["n"]),
    (
        LexemeAttribute::PassiveInIl,
        &["inil", "ınıl", "unul", "ünül"],
        &["nil", "nıl", "nul", "nül"],
    ),
];

impl BruteForceVerbRootFinder {
    fn guesses(partial: &str, whole: &str) -> Vec<Guess> {
        let rest = &whole[partial.len()..];
        let followed_by = |endings: &[&str]| starts_with_any(rest, endings);
        let plain = Guess::plain(partial);

        let Some(last_vowel) = phonetics::last_vowel(partial) else {
            return Vec::new();
        };
        let (Some(last), Some(next)) = (partial.chars().last(), rest.chars().next()) else {
            return vec![plain];
        };
        let consonant_final = !alphabet::is_vowel(last);

        let mut guesses = vec![plain.clone()];
        if consonant_final && followed_by(&PROGRESSIVE_ENDINGS[..]) {
            guesses.extend(Self::dropped_vowels(last_vowel).into_iter().map(|v| Guess {
                lexeme_root: format!("{partial}{v}"),
                attributes: LexemeAttributes::of(LexemeAttribute::ProgressiveVowelDrop),
            }));
        }
        if consonant_final && followed_by(&["ar", "er"][..]) {
            guesses.push(plain.with(LexemeAttribute::AoristA));
        }
        // no Aorist_I for -ur, -ür
        if consonant_final && followed_by(&["ır", "ir"][..]) {
            guesses.push(plain.with(LexemeAttribute::AoristI));
        }
        for (attribute, endings) in CAUSATIVE_ENDINGS {
            if followed_by(endings) {
                guesses.push(plain.with(attribute));
            }
        }
        for (attribute, after_consonant, after_vowel) in PASSIVE_ENDINGS {
            if followed_by(if consonant_final { after_consonant } else { after_vowel }) {
                guesses.push(plain.with(attribute));
            }
        }

        // verbs only voice a final t: git + er -> gider
        if last == 'd' && alphabet::is_vowel(next) {
            let voiced: Vec<Guess> = guesses
                .iter()
                .filter(|g| g.lexeme_root == partial)
                .map(|g| Guess {
                    lexeme_root: format!("{}t", &partial[..partial.len() - 1]),
                    attributes: g.attributes.insert(LexemeAttribute::Voicing),
                })
                .collect();
            guesses.extend(voiced);
        }
        guesses
    }

    /// Candidates for the vowel `-Iyor` swallowed: `başl` was `başla` or
    /// `başlı`.
    fn dropped_vowels(last_vowel: alphabet::Letter) -> [char; 2] {
        match (last_vowel.frontal, last_vowel.rounded) {
            (false, false) => ['a', 'ı'],
            (false, true) => ['a', 'u'],
            (true, false) => ['e', 'i'],
            (true, true) => ['e', 'ü'],
        }
    }

    /// Whether `root` could end a verb: `ürk` and `büyült` can, `zanh` cannot.
    fn could_end_a_verb(root: &str) -> bool {
        let mut letters = root.chars().rev().map(alphabet::letter);
        let (Some(last), Some(previous)) = (letters.next(), letters.next()) else {
            return false;
        };
        last.vowel
            || previous.vowel
            || (matches!(previous.ch, 'l' | 'r' | 'n') && !last.continuant)
    }

    fn into_root(guess: Guess, text: &str) -> Root {
        let attributes = if text.ends_with('d') && guess.lexeme_root.ends_with('t') {
            guess.attributes.remove(LexemeAttribute::NoVoicing).insert(LexemeAttribute::Voicing)
        } else {
            guess.attributes.remove(LexemeAttribute::Voicing).insert(LexemeAttribute::NoVoicing)
        };
        let phonetic = phonetics::attributes(text, attributes);
        let lemma = phonetics::apply(&guess.lexeme_root, phonetic, "mAk", attributes)
            .map_or_else(|| guess.lexeme_root.clone(), |(word, suffix)| word + &suffix);
        let lexeme = Lexeme::new(lemma, &guess.lexeme_root, SyntacticCategory::Verb)
            .with_attributes(attributes);
        Root::new(text, Arc::new(lexeme), PhoneticExpectations::empty(), phonetic)
    }
}

impl RootFinder for BruteForceVerbRootFinder {
    fn name(&self) -> &'static str {
        "brute_force_verb"
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root> {
        // d-iyor and y-iyor are in the lexicon
        if partial.chars().count() < 2 || !whole.starts_with(partial) {
            return Vec::new();
        }
        if whole[partial.len()..].chars().next().is_some_and(char::is_uppercase) {
            return Vec::new();
        }
        let mut roots: Vec<Root> = Vec::new();
        for guess in Self::guesses(partial, whole) {
            if !Self::could_end_a_verb(&guess.lexeme_root) {
                continue;
            }
            let root = Self::into_root(guess, partial);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        roots
    }
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| text.starts_with(p))
}

fn is_all_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

fn starts_upper(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use trmorph_foundation::{PhoneticAttribute, SecondaryCategory};
    use trmorph_lexicon::{StandardRootGenerator, bundled_lexemes};

    use super::*;

    fn roots() -> Arc<RootMap> {
        Arc::new(RootMap::build(bundled_lexemes().unwrap(), &StandardRootGenerator).unwrap())
    }

    fn lexeme_roots(roots: &[Root]) -> Vec<&str> {
        roots.iter().map(|r| r.lexeme.root.as_str()).collect()
    }

    #[test]
    fn word_and_numeral_lookups_split_the_map() {
        let map = roots();
        let words = WordRootFinder::new(Arc::clone(&map));
        let numerals = TextNumeralRootFinder::new(map);

        assert!(words.find_roots("iki", "ikisi").is_empty());
        assert_eq!(numerals.find_roots("iki", "ikisi").len(), 1);
        assert!(!words.find_roots("kitab", "kitabı").is_empty());
        assert!(numerals.find_roots("kitab", "kitabı").is_empty());
        // "bir" is both a determiner and a numeral
        assert_eq!(words.find_roots("bir", "bir").len(), 1);
        assert_eq!(numerals.find_roots("bir", "bir").len(), 1);
    }

    #[test]
    fn digit_numerals() {
        let finder = DigitNumeralRootFinder;
        for digits in ["3", "-12", "+7", "3,5", "1.000", "12.345.678", "1.000,25"] {
            let found = finder.find_roots(digits, digits);
            assert_eq!(found.len(), 1, "{digits}");
            assert_eq!(found[0].lexeme.secondary, Some(SecondaryCategory::Digits));
        }
        for text in ["", "3'", "1.00", "abc", "3,", "1,2,3", "٣", "１２", "1.٠٠٠"] {
            assert!(finder.find_roots(text, text).is_empty(), "{text}");
        }
    }

    #[test]
    fn apostrophe_marks_proper_nouns() {
        let finder = ProperNounFromApostropheRootFinder;
        let ankara = finder.find_roots("Ankara'", "Ankara'ya");
        assert_eq!(ankara.len(), 1);
        assert_eq!(ankara[0].text, "Ankara");
        assert_eq!(ankara[0].lexeme.secondary, Some(SecondaryCategory::ProperNoun));

        let tbmm = finder.find_roots("TBMM'", "TBMM'de");
        assert_eq!(tbmm[0].lexeme.secondary, Some(SecondaryCategory::Abbreviation));

        assert!(finder.find_roots("Ankara", "Ankara'ya").is_empty());
        assert!(finder.find_roots("'", "'").is_empty());
        assert!(finder.find_roots("ankara'", "ankara'ya").is_empty());
    }

    #[test]
    fn capitalized_words_without_apostrophe() {
        let finder = ProperNounWithoutApostropheRootFinder;
        let tbmm = finder.find_roots("TBMM", "TBMM");
        assert_eq!(tbmm[0].lexeme.secondary, Some(SecondaryCategory::Abbreviation));

        let ankara = finder.find_roots("Ankara", "Ankaralı");
        assert_eq!(ankara[0].lexeme.secondary, Some(SecondaryCategory::ProperNoun));

        // an upper-case prefix of a longer word is not an abbreviation
        let prefix = finder.find_roots("TB", "TBMM");
        assert_eq!(prefix[0].lexeme.secondary, Some(SecondaryCategory::ProperNoun));

        assert!(finder.find_roots("Ankara", "Ankara'ya").is_empty());
        assert!(finder.find_roots("ankara", "ankara").is_empty());
        assert!(finder.find_roots("3A", "3A").is_empty());
    }

    #[test]
    fn brute_force_plain_noun() {
        let finder = BruteForceNounRootFinder;
        let found = finder.find_roots("masa", "masa");
        assert_eq!(lexeme_roots(&found), ["masa"]);
        assert_eq!(found[0].category(), SyntacticCategory::Noun);

        assert!(finder.find_roots("m", "masa").is_empty());
        assert_eq!(finder.find_roots("m", "m").len(), 1);
        // no vowel: nothing to harmonize with
        assert_eq!(lexeme_roots(&finder.find_roots("tsk", "tskler")), ["tsk"]);
    }

    #[test]
    fn brute_force_inverse_voicing() {
        let found = BruteForceNounRootFinder.find_roots("kitab", "kitabı");
        assert_eq!(lexeme_roots(&found), ["kitab", "kitap"]);
        assert!(found.iter().all(|r| r.text == "kitab"));

        let found = BruteForceNounRootFinder.find_roots("renğ", "renği");
        assert_eq!(lexeme_roots(&found), ["renğ", "reng", "renk"]);
    }

    #[test]
    fn brute_force_no_voicing() {
        let found = BruteForceNounRootFinder.find_roots("sepet", "sepeti");
        assert_eq!(lexeme_roots(&found), ["sepet"]);
        assert!(found[0].lexeme.has(LexemeAttribute::NoVoicing));
    }

    #[test]
    fn brute_force_doubling() {
        let found = BruteForceNounRootFinder.find_roots("hakk", "hakkı");
        assert_eq!(lexeme_roots(&found), ["hakk", "hak"]);
        assert!(found.iter().all(|r| r.lexeme.has(LexemeAttribute::NoVoicing)));
        assert!(found[1].lexeme.has(LexemeAttribute::Doubling));

        let found = BruteForceNounRootFinder.find_roots("hadd", "haddi");
        assert_eq!(lexeme_roots(&found), ["hadd", "had", "hat"]);

        let found = BruteForceNounRootFinder.find_roots("zann", "zannı");
        assert_eq!(lexeme_roots(&found), ["zann", "zan"]);
    }

    #[test]
    fn brute_force_inverse_harmony() {
        let found = BruteForceNounRootFinder.find_roots("saat", "saati");
        assert!(found[0].lexeme.has(LexemeAttribute::InverseHarmony));
        assert!(found[0].attributes.contains(PhoneticAttribute::LastVowelFrontal));

        let found = BruteForceNounRootFinder.find_roots("masa", "masalar");
        assert!(!found[0].lexeme.has(LexemeAttribute::InverseHarmony));
    }

    #[test]
    fn brute_force_compound_nouns() {
        let finder = BruteForceCompoundNounRootFinder;
        let found = finder.find_roots("suborusu", "suborusuna");
        let texts: Vec<_> = found.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["suborus", "suboru"]);
        assert!(found.iter().all(|r| r.lexeme.root == "suborusu"));
        assert!(found.iter().all(|r| r.lexeme.has(LexemeAttribute::CompoundP3sg)));

        let found = finder.find_roots("bacakkalemi", "bacakkalemini");
        let texts: Vec<_> = found.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["bacakkalem"]);

        assert!(finder.find_roots("suborusu", "suborusu").is_empty());
        assert!(finder.find_roots("suborusu", "suborusun").is_empty());
        assert!(finder.find_roots("suborusu", "suborusuda").is_empty());
        assert!(finder.find_roots("atsu", "atsuna").is_empty());
    }

    fn lemmas(roots: &[Root]) -> Vec<&str> {
        roots.iter().map(|r| r.lexeme.lemma.as_str()).collect()
    }

    #[test]
    fn brute_force_verb_rejects_impossible_roots() {
        let finder = BruteForceVerbRootFinder;
        for (partial, whole) in [
            ("d", "diyor"),
            ("dp", "dp"),
            ("ayl", "ayl"),
            ("anf", "anf"),
            ("azz", "azz"),
            ("ddr", "ddr"),
            ("xxx", "xxx"),
        ] {
            assert!(finder.find_roots(partial, whole).is_empty(), "{partial}");
        }
        assert!(finder.find_roots("ab", "abC").is_empty());
    }

    #[test]
    fn brute_force_plain_verb() {
        let found = BruteForceVerbRootFinder.find_roots("sok", "sok");
        assert_eq!(lemmas(&found), ["sokmak"]);
        assert_eq!(found[0].category(), SyntacticCategory::Verb);
        assert!(found[0].lexeme.has(LexemeAttribute::NoVoicing));
    }

    #[test]
    fn brute_force_progressive_vowel_drop() {
        let found = BruteForceVerbRootFinder.find_roots("başl", "başlıyor");
        assert_eq!(lexeme_roots(&found), ["başla", "başlı"]);
        assert_eq!(lemmas(&found), ["başlamak", "başlımak"]);
        assert!(found.iter().all(|r| r.text == "başl"));
        assert!(found.iter().all(|r| r.lexeme.has(LexemeAttribute::ProgressiveVowelDrop)));

        let found = BruteForceVerbRootFinder.find_roots("söyl", "söylüyor");
        assert_eq!(lexeme_roots(&found), ["söyle", "söylü"]);
    }

    #[test]
    fn brute_force_aorists_and_causatives() {
        let found = BruteForceVerbRootFinder.find_roots("gel", "gelir");
        assert_eq!(found.len(), 3);
        assert!(found.iter().any(|r| r.lexeme.has(LexemeAttribute::AoristI)));
        assert!(found.iter().any(|r| r.lexeme.has(LexemeAttribute::CausativeIr)));
        assert!(found.iter().all(|r| !r.lexeme.has(LexemeAttribute::AoristA)));

        let found = BruteForceVerbRootFinder.find_roots("yürü", "yürütecek");
        assert_eq!(found.len(), 2);
        assert!(found[1].lexeme.has(LexemeAttribute::CausativeT));

        let found = BruteForceVerbRootFinder.find_roots("al", "aldırsın");
        assert!(found.iter().any(|r| r.lexeme.has(LexemeAttribute::CausativeDIr)));
    }

    #[test]
    fn brute_force_passives() {
        let found = BruteForceVerbRootFinder.find_roots("sev", "sevildi");
        assert_eq!(found.len(), 2);
        assert!(found[1].lexeme.has(LexemeAttribute::PassiveIl));

        let found = BruteForceVerbRootFinder.find_roots("de", "denildi");
        assert_eq!(found.len(), 3);
        assert!(found[1].lexeme.has(LexemeAttribute::PassiveIn));
        assert!(found[2].lexeme.has(LexemeAttribute::PassiveInIl));
        // a passive guess carries nothing else
        assert_eq!(found[2].lexeme.attributes.len(), 2);
    }

    #[test]
    fn brute_force_verb_voicing() {
        let found = BruteForceVerbRootFinder.find_roots("gid", "gider");
        assert_eq!(lexeme_roots(&found), ["gid", "gid", "gid", "git", "git", "git"]);
        assert!(found.iter().all(|r| r.text == "gid"));
        let voiced: Vec<_> = found.iter().filter(|r| r.lexeme.root == "git").collect();
        assert!(voiced.iter().all(|r| r.lexeme.has(LexemeAttribute::Voicing)));
        assert!(voiced.iter().all(|r| r.lexeme.lemma == "gitmek"));
        assert!(voiced.iter().any(|r| r.lexeme.has(LexemeAttribute::AoristA)));
    }
}
