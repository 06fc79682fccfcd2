//! Integration tests for spelling out digit numerals.

use trmorph_foundation::digits_to_words;

#[test]
fn common_numbers() {
    assert_eq!(digits_to_words("3").unwrap(), "üç");
    assert_eq!(digits_to_words("40").unwrap(), "kırk");
    assert_eq!(digits_to_words("1923").unwrap(), "bin dokuz yüz yirmi üç");
}

#[test]
fn separators_signs_and_fractions() {
    assert_eq!(digits_to_words("12.500").unwrap(), "on iki bin beş yüz");
    assert_eq!(digits_to_words("-2").unwrap(), "eksi iki");
    assert_eq!(digits_to_words("3,5").unwrap(), "üç virgül beş");
}

#[test]
fn invalid_input() {
    assert!(digits_to_words("üç").is_err());
    assert!(digits_to_words("1,2,3").is_err());
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// `1234567` as `1.234.567`.
    fn dotted(n: u64) -> String {
        let plain = n.to_string();
        let mut out = String::new();
        for (i, c) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    }

    proptest! {
        #[test]
        fn positive_numbers_have_no_zero_word(n in 1u64..1_000_000_000) {
            let words = digits_to_words(&n.to_string()).unwrap();
            prop_assert!(!words.split(' ').any(|w| w == "sıfır"), "{}", words);
        }

        #[test]
        fn sign_only_prefixes(n in 1u64..1_000_000_000) {
            let positive = digits_to_words(&n.to_string()).unwrap();
            let negative = digits_to_words(&format!("-{n}")).unwrap();
            prop_assert_eq!(negative, format!("eksi {positive}"));
        }

        #[test]
        fn grouping_dots_are_ignored(n in 0u64..1_000_000_000) {
            prop_assert_eq!(
                digits_to_words(&dotted(n)).unwrap(),
                digits_to_words(&n.to_string()).unwrap()
            );
        }
    }
}
