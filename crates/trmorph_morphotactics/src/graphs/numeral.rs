//! Cardinal, ordinal and digit numerals.

use trmorph_foundation::{Result, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::Root;

use super::{StateTable, add_free_transitions, add_states};
use crate::builder::{GraphBuilder, GraphExtension, SuffixDecl, form};
use crate::model::StateKind::{Derivational as D, Transfer as T};

use SyntacticCategory::Numeral;

const STATES: &StateTable = &[
    ("NUMERAL_CARDINAL_ROOT", T, Numeral),
    ("NUMERAL_CARDINAL_DERIV", D, Numeral),
    ("NUMERAL_DIGIT_CARDINAL_ROOT", T, Numeral),
    ("NUMERAL_ORDINAL_ROOT", T, Numeral),
    ("NUMERAL_ORDINAL_DERIV", D, Numeral),
];

const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Numeral_Free_Transition_1", "NUMERAL_CARDINAL_ROOT", "NUMERAL_CARDINAL_DERIV"),
    ("Numeral_Free_Transition_2", "NUMERAL_ORDINAL_ROOT", "NUMERAL_ORDINAL_DERIV"),
    ("Digits_Free_Transition_1", "NUMERAL_DIGIT_CARDINAL_ROOT", "NUMERAL_CARDINAL_DERIV"),
];

/// Numeral layer. Numerals derive into adjectives, so `ikiler` and `3'ü`
/// reach the nominal suffixes through `ADJECTIVE_ROOT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralGraph;

impl GraphExtension for NumeralGraph {
    fn name(&self) -> &'static str {
        "numeral"
    }

    fn extend(&self, b: &mut GraphBuilder) -> Result<()> {
        add_states(b, STATES)?;
        add_free_transitions(b, FREE_TRANSITIONS)?;
        b.add_zero("Numeral_Zero_Transition_1", "NUMERAL_CARDINAL_DERIV", "ADJECTIVE_ROOT")?;
        b.add_zero("Numeral_Zero_Transition_2", "NUMERAL_ORDINAL_DERIV", "ADJECTIVE_ROOT")?;

        b.add_suffix(SuffixDecl::new("NumbersOf"))?;
        b.add_suffix(SuffixDecl::new("OfUnit_Number").pretty("OfUnit"))?;
        b.add_suffix(SuffixDecl::new("Apos_Digit").pretty("Apos"))?;

        // ikilerce, üçlük
        b.connect("NUMERAL_CARDINAL_DERIV", "NumbersOf", "ADJECTIVE_ROOT", [form("lArcA")])?;
        b.connect("NUMERAL_CARDINAL_DERIV", "OfUnit_Number", "ADJECTIVE_ROOT", [form("lIk")])?;
        b.connect("NUMERAL_DIGIT_CARDINAL_ROOT", "Apos_Digit", "NUMERAL_CARDINAL_DERIV", [form("'")])
    }

    fn entry_state(&self, root: &Root) -> Option<&'static str> {
        if root.category() != Numeral {
            return None;
        }
        match root.lexeme.secondary? {
            SecondaryCategory::Digits => Some("NUMERAL_DIGIT_CARDINAL_ROOT"),
            SecondaryCategory::Cardinal => Some("NUMERAL_CARDINAL_ROOT"),
            SecondaryCategory::Ordinal => Some("NUMERAL_ORDINAL_ROOT"),
            _ => None,
        }
    }
}
