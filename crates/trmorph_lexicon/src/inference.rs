//! Inference of the morphological attributes a lexicon entry leaves implicit.
//!
//! Inference is a pure function from the explicit attributes to the full
//! set. Running it on its own output changes nothing.

use trmorph_foundation::alphabet;
use trmorph_foundation::phonetics::vowel_count;
use trmorph_foundation::{LexemeAttribute as A, LexemeAttributes, SyntacticCategory};

/// Completes the attribute set of a lexeme with the given category and root.
#[must_use]
pub fn infer_attributes(
    category: SyntacticCategory,
    root: &str,
    explicit: LexemeAttributes,
) -> LexemeAttributes {
    let Some(last) = root.chars().last().map(alphabet::letter) else {
        return explicit;
    };
    let vowels = vowel_count(root);

    match category {
        SyntacticCategory::Verb => infer_verb(explicit, last, vowels),
        SyntacticCategory::Noun if explicit.contains(A::CompoundP3sg) => {
            if explicit.contains(A::VoicingOpt) {
                explicit.remove(A::Voicing).remove(A::NoVoicing)
            } else if explicit.contains(A::Voicing) {
                explicit
            } else {
                explicit.insert(A::NoVoicing)
            }
        }
        SyntacticCategory::Noun | SyntacticCategory::Adjective => {
            infer_nominal(explicit, root, last, vowels)
        }
        _ => explicit,
    }
}

fn infer_verb(explicit: LexemeAttributes, last: alphabet::Letter, vowels: usize) -> LexemeAttributes {
    let mut attrs = explicit;

    if last.vowel {
        attrs = attrs.insert(A::ProgressiveVowelDrop).insert(A::PassiveIn);
    }
    if vowels > 1 && !attrs.contains(A::AoristA) {
        attrs = attrs.insert(A::AoristI);
    }
    if vowels == 1 && !attrs.contains(A::AoristI) {
        attrs = attrs.insert(A::AoristA);
    }
    if last.ch == 'l' {
        attrs = attrs.insert(A::PassiveIn);
    }

    if !A::CAUSATIVES.iter().any(|c| attrs.contains(*c)) {
        let causative = if last.vowel || (matches!(last.ch, 'l' | 'r') && vowels > 1) {
            A::CausativeT
        } else if last.ch == 't' && vowels < 2 {
            A::CausativeIr
        } else {
            A::CausativeDIr
        };
        attrs = attrs.insert(causative);
    }

    if attrs.contains(A::ProgressiveVowelDrop) {
        attrs = attrs.insert(A::NoVoicing);
    }
    if !attrs.contains(A::Voicing) && !attrs.contains(A::NoVoicing) {
        attrs = attrs.insert(A::NoVoicing);
    }
    attrs
}

fn infer_nominal(
    explicit: LexemeAttributes,
    root: &str,
    last: alphabet::Letter,
    vowels: usize,
) -> LexemeAttributes {
    if explicit.contains(A::VoicingOpt) {
        return explicit.remove(A::Voicing).remove(A::NoVoicing);
    }
    let voiceless_stop = last.voiceless && !last.continuant;
    if vowels > 1
        && voiceless_stop
        && !explicit.contains(A::NoVoicing)
        && !explicit.contains(A::InverseHarmony)
    {
        explicit.insert(A::Voicing)
    } else if root.ends_with("nk") || root.ends_with("og") || root.ends_with("rt") {
        explicit.insert(A::Voicing)
    } else if explicit.contains(A::Voicing) {
        explicit
    } else {
        explicit.insert(A::NoVoicing)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ROOT: &str = "[bcçdfgğhjklmnprsştvyz]?([aeıioöuü][bcçdfgğhjklmnprsştvyz]{0,2}){1,3}";

    fn category() -> impl Strategy<Value = SyntacticCategory> {
        prop_oneof![
            Just(SyntacticCategory::Noun),
            Just(SyntacticCategory::Adjective),
            Just(SyntacticCategory::Verb),
            Just(SyntacticCategory::Adverb),
        ]
    }

    proptest! {
        #[test]
        fn inference_is_idempotent(category in category(), root in ROOT) {
            let once = infer_attributes(category, &root, LexemeAttributes::empty());
            let twice = infer_attributes(category, &root, once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn verbs_get_one_aorist_and_one_causative(root in ROOT) {
            let attrs = infer_attributes(SyntacticCategory::Verb, &root, LexemeAttributes::empty());
            prop_assert!(attrs.contains(A::AoristA) != attrs.contains(A::AoristI));
            let causatives = A::CAUSATIVES.iter().filter(|c| attrs.contains(**c)).count();
            prop_assert_eq!(causatives, 1);
            prop_assert!(attrs.contains(A::NoVoicing));
        }

        #[test]
        fn nominals_decide_voicing(root in ROOT) {
            let attrs = infer_attributes(SyntacticCategory::Noun, &root, LexemeAttributes::empty());
            prop_assert!(attrs.contains(A::Voicing) != attrs.contains(A::NoVoicing));
        }
    }
}
