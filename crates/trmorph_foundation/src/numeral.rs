//! Spelling out numbers written with digits.
//!
//! Digit numerals such as `3'e` or `1.000'den` take suffixes according to
//! how the number is read aloud, so their phonetic attributes are computed
//! from the spelled-out form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, ErrorKind, Result};

static TURKISH_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]+(,[0-9])?[0-9]*$")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

const ZERO: &str = "sıfır";
const MINUS: &str = "eksi";
const COMMA: &str = "virgül";
const HUNDRED: &str = "yüz";
const THOUSAND: &str = "bin";

const ONES: [&str; 10] = [
    "sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

/// Names of 1000^n for n = 1..=21.
const THOUSAND_POWERS: [&str; 22] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
    "seksilyon",
    "septilyon",
    "oktilyon",
    "nonilyon",
    "desilyon",
    "undesilyon",
    "dodesilyon",
    "tredesilyon",
    "katordesilyon",
    "kendesilyon",
    "seksdesilyon",
    "septendesilyon",
    "oktodesilyon",
    "novemdesilyon",
    "vigintilyon",
];

/// Largest supported natural number has this many digits.
pub const MAX_DIGITS: usize = 66;

/// Spells out a Turkish-formatted number.
///
/// `.` grouping separators are ignored, a leading sign is allowed and `,`
/// separates the fraction: `-1.234,05` reads as
/// `eksi bin iki yüz otuz dört virgül sıfır beş`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidNumeral`] when the text is not a number or a
/// part has more than [`MAX_DIGITS`] significant digits.
pub fn digits_to_words(digits: &str) -> Result<String> {
    let digits = digits.replace('.', "");
    if !TURKISH_NUMBER.is_match(&digits) {
        return Err(invalid(&digits));
    }

    let (integer_str, fraction_str) = match digits.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let negative = integer_str.starts_with('-');
    let unsigned = integer_str.trim_start_matches(['-', '+']);

    let mut integer_words = part_to_words(unsigned).ok_or_else(|| invalid(&digits))?;
    if negative && unsigned.chars().any(|c| c != '0') {
        integer_words = format!("{MINUS} {integer_words}");
    }

    match fraction_str {
        Some(fraction) => {
            let fraction_words = part_to_words(fraction).ok_or_else(|| invalid(&digits))?;
            Ok(format!("{integer_words} {COMMA} {fraction_words}"))
        }
        None => Ok(integer_words),
    }
}

fn invalid(digits: &str) -> Error {
    Error::new(ErrorKind::InvalidNumeral(digits.to_string()))
}

/// Spells an unsigned digit string, reading leading zeros one by one.
fn part_to_words(digits: &str) -> Option<String> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_DIGITS {
        return None;
    }
    let leading_zeros = if significant.is_empty() {
        digits.len().saturating_sub(1)
    } else {
        digits.len() - significant.len()
    };

    let mut words: Vec<&str> = vec![ZERO; leading_zeros];
    if significant.is_empty() {
        words.push(ZERO);
    } else {
        natural_to_words(significant, &mut words);
    }
    Some(words.join(" "))
}

/// Spells a digit string without leading zeros, three digits at a time.
fn natural_to_words(digits: &str, words: &mut Vec<&'static str>) {
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    let head = values.len() % 3;
    let mut groups: Vec<u32> = Vec::with_capacity(values.len() / 3 + 1);
    if head > 0 {
        groups.push(group_value(&values[..head]));
    }
    groups.extend(values[head..].chunks(3).map(group_value));

    let count = groups.len();
    for (i, group) in groups.into_iter().enumerate() {
        let power = count - 1 - i;
        match (group, power) {
            (0, _) => {}
            (1, 1) => words.push(THOUSAND),
            (_, 0) => below_thousand(group, words),
            _ => {
                below_thousand(group, words);
                words.push(THOUSAND_POWERS[power]);
            }
        }
    }
}

fn group_value(digits: &[u32]) -> u32 {
    digits.iter().fold(0, |acc, d| acc * 10 + d)
}

fn below_thousand(n: u32, words: &mut Vec<&'static str>) {
    let hundreds = n / 100;
    let tens = (n / 10) % 10;
    let ones = n % 10;
    if hundreds > 1 {
        words.push(ONES[hundreds as usize]);
    }
    if hundreds > 0 {
        words.push(HUNDRED);
    }
    if tens > 0 {
        words.push(TENS[tens as usize]);
    }
    if ones > 0 {
        words.push(ONES[ones as usize]);
    }
}
