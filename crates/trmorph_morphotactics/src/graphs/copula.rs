//! The copula: `elmayım`, `evdeydik`, `güzelken`, `gelmiştir` and the
//! negative copula `değil`.

use trmorph_foundation::{Result, SyntacticCategory};
use trmorph_lexicon::Root;

use super::{StateTable, add_free_transitions, add_states, after, after_any, after_none};
use crate::builder::{GraphBuilder, GraphExtension, SuffixDecl, form};
use crate::model::StateKind::{Derivational as D, Transfer as T};

use SyntacticCategory::{Adjective, Adverb, Noun, Pronoun, Verb};

const STATES: &StateTable = &[
    ("NOUN_COPULA", D, Noun),
    ("ADJECTIVE_COPULA", D, Adjective),
    ("ADVERB_COPULA", D, Adverb),
    ("PRONOUN_COPULA", D, Pronoun),
    ("VERB_DEGIL_ROOT", T, Verb),
    ("VERB_COPULA_WITHOUT_TENSE", T, Verb),
    ("VERB_COPULA_WITHOUT_TENSE_DERIV", D, Verb),
    ("VERB_COPULA_WITH_TENSE", T, Verb),
];

const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Cop_Free_Transition", "NOUN_TERMINAL_TRANSFER", "NOUN_COPULA"),
    ("Adjective_Cop_Free_Transition", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_COPULA"),
    ("Adverb_Cop_Free_Transition", "ADVERB_TERMINAL_TRANSFER", "ADVERB_COPULA"),
    ("Pronoun_Cop_Free_Transition", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_COPULA"),
    ("Verb_Degil_Free_Transition", "VERB_DEGIL_ROOT", "VERB_COPULA_WITHOUT_TENSE"),
    ("Copula_Deriv_Free_Transition", "VERB_COPULA_WITHOUT_TENSE", "VERB_COPULA_WITHOUT_TENSE_DERIV"),
];

const ZERO_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Copula_Zero_Transition", "NOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Copula_Zero_Transition", "ADJECTIVE_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adverb_Copula_Zero_Transition", "ADVERB_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Pronoun_Copula_Zero_Transition", "PRONOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Adverb_Zero_Transition", "ADJECTIVE_DERIV", "ADVERB_ROOT"),
];

/// Copula layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopulaGraph;

impl GraphExtension for CopulaGraph {
    fn name(&self) -> &'static str {
        "copula"
    }

    fn extend(&self, b: &mut GraphBuilder) -> Result<()> {
        add_states(b, STATES)?;
        add_free_transitions(b, FREE_TRANSITIONS)?;
        for &(name, from, to) in ZERO_TRANSITIONS {
            b.add_zero(name, from, to)?;
        }

        for (name, pretty) in [
            ("Pres_Cop", "Pres"),
            ("Narr_Cop", "Narr"),
            ("Past_Cop", "Past"),
            ("Cond_Cop", "Cond"),
            ("Cond_Cop_Secondary", "Cond"),
            ("While_Cop", "While"),
            ("Cop_Verb", "Cop"),
            ("Cop_Ques", "Cop"),
        ] {
            b.add_suffix(SuffixDecl::new(name).pretty(pretty))?;
        }
        b.add_group("Copula_Agreements_Group")?;
        b.add_group_suffixes(
            "Copula_Agreements_Group",
            &[
                ("A1Sg_Cop", Some("A1sg")),
                ("A2Sg_Cop", Some("A2sg")),
                ("A3Sg_Cop", Some("A3sg")),
                ("A1Pl_Cop", Some("A1pl")),
                ("A2Pl_Cop", Some("A2pl")),
                ("A3Pl_Cop", Some("A3pl")),
            ],
        )?;

        tenses(b)?;
        agreements(b)?;
        b.connect(
            "VERB_COPULA_WITHOUT_TENSE_DERIV",
            "While_Cop",
            "ADVERB_ROOT",
            [form("+yken")],
        )?;
        explicit_copula(b)
    }

    fn entry_state(&self, root: &Root) -> Option<&'static str> {
        (root.category() == Verb && root.text == "değil").then_some("VERB_DEGIL_ROOT")
    }
}

fn tenses(b: &mut GraphBuilder) -> Result<()> {
    let from = "VERB_COPULA_WITHOUT_TENSE";
    let to = "VERB_COPULA_WITH_TENSE";
    b.connect(from, "Pres_Cop", to, [form("")])?;
    b.connect(from, "Narr_Cop", to, [form("+ymIş")])?;
    b.connect(from, "Past_Cop", to, [form("+ydI")])?;
    b.connect(from, "Cond_Cop", to, [form("+ysA")])?;
    // elmaymışsa, evdeydiyse
    let not_present = after(b, "Pres_Cop")?.negate();
    b.connect(to, "Cond_Cop_Secondary", to, [form("+ysA").pre(not_present)])
}

fn agreements(b: &mut GraphBuilder) -> Result<()> {
    let short = after_any(b, &["Cond_Cop", "Cond_Cop_Secondary", "Past_Cop"])?;
    let from = "VERB_COPULA_WITH_TENSE";
    let to = "VERB_TERMINAL_TRANSFER";
    // elmayım but elmaydım
    b.connect(from, "A1Sg_Cop", to, [form("+yIm"), form("m").pre(short.clone())])?;
    b.connect(from, "A2Sg_Cop", to, [form("sIn"), form("n").pre(short.clone())])?;
    b.connect(from, "A3Sg_Cop", to, [form("")])?;
    b.connect(from, "A1Pl_Cop", to, [form("+yIz"), form("k").pre(short.clone())])?;
    b.connect(from, "A2Pl_Cop", to, [form("sInIz"), form("nIz").pre(short)])?;
    b.connect(from, "A3Pl_Cop", to, [form("lAr")])
}

fn explicit_copula(b: &mut GraphBuilder) -> Result<()> {
    // gelmiştir, evdedir; never after a finite tense that rules it out
    let verb_copula = after_none(
        b,
        &[
            "Aor",
            "Past",
            "Cond",
            "Imp",
            "Opt",
            "Cond_Cop",
            "Cond_Cop_Secondary",
            "Past_Cop",
            "Narr_Cop",
            "Narr_Ques",
            "Past_Ques",
        ],
    )?;
    b.connect(
        "VERB_TERMINAL_TRANSFER",
        "Cop_Verb",
        "VERB_TERMINAL_TRANSFER",
        [form("dIr").pre(verb_copula)],
    )?;

    // gelir misindir
    let present_question = after(b, "Pres_Ques")?;
    b.connect(
        "QUESTION_WITH_AGREEMENT",
        "Cop_Ques",
        "QUESTION_WITH_AGREEMENT",
        [form("dIr").pre(present_question)],
    )
}
