//! Proper nouns and abbreviations.
//!
//! A bare proper noun is terminal only in the nominative (`Ankara`). Any
//! other suffix must follow an apostrophe (`Ankara'da`), after which the
//! word continues as an ordinary noun.

use trmorph_foundation::{Result, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::Root;

use super::{StateTable, add_states};
use crate::builder::{GraphBuilder, GraphExtension, SuffixDecl, form};
use crate::model::StateKind::{Terminal as Term, Transfer as T};

use SyntacticCategory::Noun;

const STATES: &StateTable = &[
    ("PROPER_NOUN_ROOT", T, Noun),
    ("PROPER_NOUN_WITH_AGREEMENT", T, Noun),
    ("PROPER_NOUN_WITH_POSSESSION", T, Noun),
    ("PROPER_NOUN_WITH_CASE", T, Noun),
    ("PROPER_NOUN_TERMINAL", Term, Noun),
];

/// Proper noun layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounGraph;

impl GraphExtension for ProperNounGraph {
    fn name(&self) -> &'static str {
        "proper_noun"
    }

    fn extend(&self, b: &mut GraphBuilder) -> Result<()> {
        add_states(b, STATES)?;
        b.add_free("Proper_Noun_Free_Transition_1", "PROPER_NOUN_WITH_CASE", "PROPER_NOUN_TERMINAL")?;

        for (name, pretty) in [
            ("A3Sg_Proper_Noun", "A3sg"),
            ("Pnon_Proper_Noun", "Pnon"),
            ("Nom_Proper_Noun", "Nom"),
            ("Apos_Proper_Noun", "Apos"),
        ] {
            b.add_suffix(SuffixDecl::new(name).pretty(pretty))?;
        }

        b.connect("PROPER_NOUN_ROOT", "A3Sg_Proper_Noun", "PROPER_NOUN_WITH_AGREEMENT", [form("")])?;
        b.connect(
            "PROPER_NOUN_WITH_AGREEMENT",
            "Pnon_Proper_Noun",
            "PROPER_NOUN_WITH_POSSESSION",
            [form("")],
        )?;
        b.connect("PROPER_NOUN_WITH_POSSESSION", "Nom_Proper_Noun", "PROPER_NOUN_WITH_CASE", [form("")])?;
        b.connect("PROPER_NOUN_ROOT", "Apos_Proper_Noun", "NOUN_ROOT", [form("'")])
    }

    fn entry_state(&self, root: &Root) -> Option<&'static str> {
        let proper = matches!(
            root.lexeme.secondary,
            Some(SecondaryCategory::ProperNoun | SecondaryCategory::Abbreviation)
        );
        (root.category() == Noun && proper).then_some("PROPER_NOUN_ROOT")
    }
}
