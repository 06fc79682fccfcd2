//! The core suffix graph: inflection and derivation of the open classes,
//! entry points for the closed classes.

use trmorph_foundation::{LexemeAttribute, Result, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::Root;

use super::{
    StateTable, add_free_transitions, add_states, after, after_any, after_derivation, after_form,
    not_after, root_is_one_of, then,
};
use crate::builder::{GraphBuilder, GraphExtension, SuffixDecl, form};
use crate::model::StateKind::{Derivational as D, Terminal as Term, Transfer as T};
use crate::specification::{
    self as spec, Specification, comes_after_last_non_blank_derivation, doesnt_have_lexeme_attribute,
    followed_by, followed_by_derivation, followed_by_derivation_form, followed_by_form,
    followed_by_one_from_group, followed_by_suffix_goes_to, has_lexeme_attribute,
    root_has_secondary_category,
};

use SyntacticCategory::{
    Adjective as Adj, Adverb as Adv, Conjunction, Determiner, Interjection, Noun, Particle,
    Pronoun as Pron, Punctuation, Question as Ques, Verb,
};

const STATES: &StateTable = &[
    ("NOUN_ROOT", T, Noun),
    ("NOUN_WITH_AGREEMENT", T, Noun),
    ("NOUN_WITH_POSSESSION", T, Noun),
    ("NOUN_WITH_CASE", T, Noun),
    ("NOUN_TERMINAL_TRANSFER", T, Noun),
    ("NOUN_TERMINAL", Term, Noun),
    ("NOUN_NOM_DERIV", D, Noun),
    ("NOUN_POSSESSIVE_NOM_DERIV", D, Noun),
    ("NOUN_DERIV_WITH_CASE", D, Noun),
    ("NOUN_COMPOUND_ROOT", T, Noun),
    ("NOUN_COMPOUND_WITH_AGREEMENT", T, Noun),
    ("NOUN_COMPOUND_WITH_POSSESSION", T, Noun),
    ("VERB_ROOT", T, Verb),
    ("VERB_WITH_POLARITY", T, Verb),
    ("VERB_WITH_TENSE", T, Verb),
    ("VERB_TERMINAL", Term, Verb),
    ("VERB_TERMINAL_TRANSFER", T, Verb),
    ("VERB_PLAIN_DERIV", D, Verb),
    ("VERB_POLARITY_DERIV", D, Verb),
    ("VERB_WITH_TENSE_BEFORE_DERIV", T, Verb),
    ("VERB_TENSE_DERIV", D, Verb),
    ("VERB_TENSE_ADJ_DERIV", D, Verb),
    ("ADJECTIVE_ROOT", T, Adj),
    ("ADJECTIVE_PART_WITHOUT_POSSESSION", T, Adj),
    ("ADJECTIVE_TERMINAL", Term, Adj),
    ("ADJECTIVE_TERMINAL_TRANSFER", T, Adj),
    ("ADJECTIVE_DERIV", D, Adj),
    ("ADVERB_ROOT", T, Adv),
    ("ADVERB_TERMINAL", Term, Adv),
    ("ADVERB_TERMINAL_TRANSFER", T, Adv),
    ("ADVERB_DERIV", D, Adv),
    ("PRONOUN_ROOT", T, Pron),
    ("PRONOUN_WITH_AGREEMENT", T, Pron),
    ("PRONOUN_WITH_POSSESSION", T, Pron),
    ("PRONOUN_WITH_CASE", T, Pron),
    ("PRONOUN_NOM_DERIV", D, Pron),
    ("PRONOUN_TERMINAL", Term, Pron),
    ("PRONOUN_TERMINAL_TRANSFER", T, Pron),
    ("PRONOUN_DERIV_WITH_CASE", D, Pron),
    ("DETERMINER_ROOT_TERMINAL", Term, Determiner),
    ("INTERJECTION_ROOT_TERMINAL", Term, Interjection),
    ("CONJUNCTION_ROOT_TERMINAL", Term, Conjunction),
    ("QUESTION_ROOT", T, Ques),
    ("QUESTION_WITH_TENSE", T, Ques),
    ("QUESTION_WITH_AGREEMENT", T, Ques),
    ("QUESTION_TERMINAL", Term, Ques),
    ("PUNC_ROOT_TERMINAL", Term, Punctuation),
    ("PART_ROOT_TERMINAL", Term, Particle),
];

const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Free_Transition_1", "NOUN_WITH_CASE", "NOUN_TERMINAL_TRANSFER"),
    ("Noun_Free_Transition_2", "NOUN_TERMINAL_TRANSFER", "NOUN_TERMINAL"),
    ("Noun_Free_Transition_3", "NOUN_WITH_CASE", "NOUN_DERIV_WITH_CASE"),
    ("Verb_Free_Transition_1", "VERB_ROOT", "VERB_PLAIN_DERIV"),
    ("Verb_Free_Transition_2", "VERB_WITH_POLARITY", "VERB_POLARITY_DERIV"),
    ("Verb_Free_Transition_3", "VERB_WITH_TENSE", "VERB_WITH_TENSE_BEFORE_DERIV"),
    ("Verb_Free_Transition_4", "VERB_WITH_TENSE_BEFORE_DERIV", "VERB_TENSE_DERIV"),
    ("Verb_Free_Transition_5", "VERB_TERMINAL_TRANSFER", "VERB_TERMINAL"),
    ("Adj_Free_Transition_1", "ADJECTIVE_ROOT", "ADJECTIVE_TERMINAL_TRANSFER"),
    ("Adj_Free_Transition_2", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_TERMINAL"),
    ("Adj_Free_Transition_3", "ADJECTIVE_ROOT", "ADJECTIVE_DERIV"),
    ("Adv_Free_Transition_1", "ADVERB_ROOT", "ADVERB_TERMINAL_TRANSFER"),
    ("Adv_Free_Transition_2", "ADVERB_TERMINAL_TRANSFER", "ADVERB_TERMINAL"),
    ("Adv_Free_Transition_3", "ADVERB_ROOT", "ADVERB_DERIV"),
    ("Pronoun_Free_Transition_1", "PRONOUN_WITH_CASE", "PRONOUN_TERMINAL_TRANSFER"),
    ("Pronoun_Free_Transition_2", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_TERMINAL"),
    ("Pronoun_Free_Transition_3", "PRONOUN_WITH_CASE", "PRONOUN_DERIV_WITH_CASE"),
    ("Question_Free_Transition_1", "QUESTION_WITH_AGREEMENT", "QUESTION_TERMINAL"),
];

/// Grouped suffixes: group name, then `(name, pretty name)` members.
type GroupTable = [(&'static str, &'static [(&'static str, Option<&'static str>)])];

const GROUPS: &GroupTable = &[
    ("Noun_Agreements_Group", &[("A3Sg_Noun", Some("A3sg")), ("A3Pl_Noun", Some("A3pl"))]),
    (
        "Noun_Possession_Group",
        &[
            ("Pnon_Noun", Some("Pnon")),
            ("P1Sg_Noun", Some("P1sg")),
            ("P2Sg_Noun", Some("P2sg")),
            ("P3Sg_Noun", Some("P3sg")),
            ("P1Pl_Noun", Some("P1pl")),
            ("P2Pl_Noun", Some("P2pl")),
            ("P3Pl_Noun", Some("P3pl")),
        ],
    ),
    (
        "Noun_Case_Group",
        &[
            ("Nom_Noun", Some("Nom")),
            ("Nom_Deriv_Noun", Some("Nom")),
            ("Nom_Deriv_Possessive_Noun", Some("Nom")),
            ("Acc_Noun", Some("Acc")),
            ("Dat_Noun", Some("Dat")),
            ("Loc_Noun", Some("Loc")),
            ("Abl_Noun", Some("Abl")),
            ("Gen_Noun", Some("Gen")),
            ("Ins_Noun", Some("Ins")),
        ],
    ),
    (
        "Relative_Noun_Pronoun_Group",
        &[("RelPron_A3Sg_Noun", Some("A3sg")), ("RelPron_A3Pl_Noun", Some("A3pl"))],
    ),
    (
        "Verb_Agreements_Group",
        &[
            ("A1Sg_Verb", Some("A1sg")),
            ("A2Sg_Verb", Some("A2sg")),
            ("A3Sg_Verb", Some("A3sg")),
            ("A1Pl_Verb", Some("A1pl")),
            ("A2Pl_Verb", Some("A2pl")),
            ("A3Pl_Verb", Some("A3pl")),
        ],
    ),
    ("Verb_Conditions_Group", &[("Neg", None), ("Pos", None)]),
    (
        "Adjective_Possessions_Group",
        &[
            ("Pnon_Adj", Some("Pnon")),
            ("P1Sg_Adj", Some("P1sg")),
            ("P2Sg_Adj", Some("P2sg")),
            ("P3Sg_Adj", Some("P3sg")),
            ("P1Pl_Adj", Some("P1pl")),
            ("P2Pl_Adj", Some("P2pl")),
            ("P3Pl_Adj", Some("P3pl")),
        ],
    ),
    (
        "Pronoun_Agreements_Group",
        &[
            ("A1Sg_Pron", Some("A1sg")),
            ("A2Sg_Pron", Some("A2sg")),
            ("A3Sg_Pron", Some("A3sg")),
            ("A1Pl_Pron", Some("A1pl")),
            ("A2Pl_Pron", Some("A2pl")),
            ("A3Pl_Pron", Some("A3pl")),
        ],
    ),
    (
        "Pronoun_Possessions_Group",
        &[
            ("Pnon_Pron", Some("Pnon")),
            ("P1Sg_Pron", Some("P1sg")),
            ("P2Sg_Pron", Some("P2sg")),
            ("P3Sg_Pron", Some("P3sg")),
            ("P1Pl_Pron", Some("P1pl")),
            ("P2Pl_Pron", Some("P2pl")),
            ("P3Pl_Pron", Some("P3pl")),
        ],
    ),
    (
        "Pronoun_Case_Group",
        &[
            ("Nom_Pron", Some("Nom")),
            ("Nom_Pron_Deriv", Some("Nom")),
            ("Acc_Pron", Some("Acc")),
            ("Dat_Pron", Some("Dat")),
            ("Loc_Pron", Some("Loc")),
            ("Abl_Pron", Some("Abl")),
            ("Gen_Pron", Some("Gen")),
            ("Ins_Pron", Some("Ins")),
            ("AccordingTo", None),
        ],
    ),
    (
        "Relative_Pron_Pronoun_Group",
        &[("RelPron_A3Sg_Pron", Some("A3sg")), ("RelPron_A3Pl_Pron", Some("A3pl"))],
    ),
    (
        "Question_Tense_Group",
        &[
            ("Pres_Ques", Some("Pres")),
            ("Past_Ques", Some("Past")),
            ("Narr_Ques", Some("Narr")),
        ],
    ),
    (
        "Question_Agreements_Group",
        &[
            ("A1Sg_Ques", Some("A1sg")),
            ("A2Sg_Ques", Some("A2sg")),
            ("A3Sg_Ques", Some("A3sg")),
            ("A1Pl_Ques", Some("A1pl")),
            ("A2Pl_Ques", Some("A2pl")),
            ("A3Pl_Ques", Some("A3pl")),
        ],
    ),
];

/// Ungrouped suffixes as `(name, pretty name)`.
const SUFFIXES: &[(&str, Option<&str>)] = &[
    // noun to noun
    ("Dim", None),
    ("Prof", None),
    ("FitFor", None),
    ("Title", None),
    // noun to verb
    ("Acquire", None),
    // noun to adjective
    ("Agt_Noun_to_Adj", Some("Agt")),
    ("With", None),
    ("Without", None),
    ("PointQual_Noun", Some("PointQual")),
    ("JustLike_Noun", Some("JustLike")),
    ("Equ_Noun", Some("Equ")),
    ("Y", None),
    ("For", None),
    ("DurationOf", None),
    ("OfUnit_Noun", Some("OfUnit")),
    // noun to adverb
    ("InTermsOf", None),
    ("By_Pnon", Some("By")),
    ("By_Possessive", Some("By")),
    ("ManyOf", None),
    ("ForALotOfTime", None),
    // compounds
    ("A3Sg_Noun_Compound", Some("A3sg")),
    ("Pnon_Noun_Compound", Some("Pnon")),
    ("P3Sg_Noun_Compound", Some("P3sg")),
    ("P3Pl_Noun_Compound", Some("P3pl")),
    ("Nom_Noun_Compound_Deriv", Some("Nom")),
    // tenses
    ("Aor", None),
    ("Prog", None),
    ("Fut", None),
    ("Narr", None),
    ("Past", None),
    ("Pres", None),
    ("Cond", None),
    ("Imp", None),
    // modals
    ("Neces", None),
    ("Opt", None),
    ("Desr", None),
    // verb to noun
    ("Inf", None),
    ("PastPart_Noun", Some("PastPart")),
    ("FutPart_Noun", Some("FutPart")),
    // verb to verb; Caus is registered separately
    ("Able", None),
    ("Pass", None),
    ("Recip", None),
    ("Hastily", None),
    // verb to adverb
    ("AfterDoingSo", None),
    ("WithoutHavingDoneSo", None),
    ("AsLongAs", None),
    ("ByDoingSo", None),
    ("When", None),
    ("SinceDoingSo", None),
    ("While", None),
    ("AsIf", None),
    ("A3Pl_Verb_For_Adv", Some("A3pl")),
    // verb to adjective
    ("PresPart", None),
    ("PastPart_Adj", Some("PastPart")),
    ("FutPart_Adj", Some("FutPart")),
    ("Agt_Verb_to_Adj", Some("Agt")),
    ("Aorist_to_Adj", Some("Aor")),
    ("Future_to_Adj", Some("Fut")),
    ("Narr_to_Adj", Some("Narr")),
    // adjective derivations
    ("JustLike_Adj", Some("JustLike")),
    ("Equ_Adj", Some("Equ")),
    ("Quite", None),
    ("Ly", None),
    ("Ness", None),
    ("Become", None),
    // pronoun to adjective
    ("Without_Pron", Some("Without")),
    ("PointQual_Pron", Some("PointQual")),
    // adverb to adjective
    ("PointQual_Adv", Some("PointQual")),
];

/// The core layer. Every graph starts with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicGraph;

impl GraphExtension for BasicGraph {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn extend(&self, b: &mut GraphBuilder) -> Result<()> {
        add_states(b, STATES)?;
        add_free_transitions(b, FREE_TRANSITIONS)?;
        b.add_zero("Adj_to_Noun_Zero_Transition", "ADJECTIVE_DERIV", "NOUN_ROOT")?;
        b.add_zero("Verb_to_Adj_Zero_Transition", "VERB_TENSE_ADJ_DERIV", "ADJECTIVE_ROOT")?;

        for &(group, members) in GROUPS {
            b.add_group(group)?;
            b.add_group_suffixes(group, members)?;
        }
        for &(name, pretty) in SUFFIXES {
            let mut decl = SuffixDecl::new(name);
            if let Some(pretty) = pretty {
                decl = decl.pretty(pretty);
            }
            b.add_suffix(decl)?;
        }
        b.add_suffix(SuffixDecl::new("Caus").repeatable())?;

        noun_suffixes(b)?;
        verb_suffixes(b)?;
        adjective_suffixes(b)?;
        pronoun_suffixes(b)?;
        adverb_suffixes(b)?;
        question_suffixes(b)
    }

    fn entry_state(&self, root: &Root) -> Option<&'static str> {
        let lexeme = &root.lexeme;
        Some(match lexeme.category {
            Noun if lexeme.has(LexemeAttribute::CompoundP3sg) => "NOUN_COMPOUND_ROOT",
            Noun => "NOUN_ROOT",
            Verb => "VERB_ROOT",
            Adv => "ADVERB_ROOT",
            Adj => "ADJECTIVE_ROOT",
            Pron => "PRONOUN_ROOT",
            Determiner => "DETERMINER_ROOT_TERMINAL",
            Interjection => "INTERJECTION_ROOT_TERMINAL",
            Conjunction => "CONJUNCTION_ROOT_TERMINAL",
            Punctuation => "PUNC_ROOT_TERMINAL",
            Particle => "PART_ROOT_TERMINAL",
            Ques => "QUESTION_ROOT",
            SyntacticCategory::Numeral => return None,
        })
    }
}

// =============================================================================
// Nouns
// =============================================================================

fn noun_suffixes(b: &mut GraphBuilder) -> Result<()> {
    b.connect("NOUN_ROOT", "A3Sg_Noun", "NOUN_WITH_AGREEMENT", [form("")])?;
    b.connect("NOUN_ROOT", "A3Pl_Noun", "NOUN_WITH_AGREEMENT", [form("lAr")])?;

    let point_quals = ["PointQual_Adv", "PointQual_Noun", "PointQual_Pron"];
    let mut after_point_qual = Vec::new();
    for name in point_quals {
        after_point_qual.push(comes_after_last_non_blank_derivation(&b.suffix(name)?));
    }
    let after_point_qual = Specification::Or(after_point_qual);
    let no_point_qual = after_point_qual.clone().negate();

    b.connect("NOUN_WITH_AGREEMENT", "Pnon_Noun", "NOUN_WITH_POSSESSION", [form("")])?;
    for (suffix, pattern) in [
        ("P1Sg_Noun", "+Im"),
        ("P2Sg_Noun", "+In"),
        ("P3Sg_Noun", "+sI"),
        ("P1Pl_Noun", "+ImIz"),
        ("P2Pl_Noun", "+InIz"),
    ] {
        b.connect(
            "NOUN_WITH_AGREEMENT",
            suffix,
            "NOUN_WITH_POSSESSION",
            [form(pattern).pre(no_point_qual.clone())],
        )?;
    }
    let after_plural = after(b, "A3Pl_Noun")?;
    b.connect(
        "NOUN_WITH_AGREEMENT",
        "P3Pl_Noun",
        "NOUN_WITH_POSSESSION",
        [
            form("lArI!").pre(no_point_qual.clone()),
            form("I!").pre(after_plural.clone().and(no_point_qual)),
        ],
    )?;

    // Cases take an extra n after third person possessives and after
    // singular point qualifiers: kitabında, evdekinde.
    let after_p3 = after_any(
        b,
        &["P3Sg_Noun", "P3Pl_Noun", "P3Sg_Noun_Compound", "P3Pl_Noun_Compound"],
    )?;
    let point_qual_a3sg = after_point_qual
        .clone()
        .and(after_any(b, &["A3Sg_Noun", "A3Sg_Noun_Compound"])?);
    let point_qual_a3pl = after_point_qual.and(after_plural);
    let plain_case = after_p3
        .clone()
        .negate()
        .and(point_qual_a3sg.clone().negate())
        .or(point_qual_a3pl);
    let pronominal_case = after_p3.or(point_qual_a3sg);

    b.connect("NOUN_WITH_POSSESSION", "Nom_Noun", "NOUN_WITH_CASE", [form("")])?;
    let after_pnon = after(b, "Pnon_Noun")?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Noun",
        "NOUN_NOM_DERIV",
        [form("").pre(after_pnon.clone())],
    )?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Possessive_Noun",
        "NOUN_POSSESSIVE_NOM_DERIV",
        [form("").pre(after_pnon.negate())],
    )?;
    for (suffix, plain, pronominal) in [
        ("Acc_Noun", "+yI", "nI"),
        ("Dat_Noun", "+yA", "nA"),
        ("Loc_Noun", "dA", "ndA"),
        ("Abl_Noun", "dAn", "ndAn"),
    ] {
        b.connect(
            "NOUN_WITH_POSSESSION",
            suffix,
            "NOUN_WITH_CASE",
            [
                form(plain).pre(plain_case.clone()),
                form(pronominal).pre(pronominal_case.clone()),
            ],
        )?;
    }
    b.connect("NOUN_WITH_POSSESSION", "Gen_Noun", "NOUN_WITH_CASE", [form("+nIn")])?;
    b.connect("NOUN_WITH_POSSESSION", "Ins_Noun", "NOUN_WITH_CASE", [form("+ylA")])?;

    for (suffix, pattern) in [("Dim", "cIk"), ("Prof", "lIk"), ("FitFor", "lIk"), ("Title", "lIk")] {
        b.connect("NOUN_NOM_DERIV", suffix, "NOUN_ROOT", [form(pattern)])?;
    }

    b.connect("NOUN_NOM_DERIV", "Acquire", "VERB_ROOT", [form("lAn")])?;

    b.connect("NOUN_NOM_DERIV", "Agt_Noun_to_Adj", "ADJECTIVE_ROOT", [form("cI")])?;
    b.connect("NOUN_NOM_DERIV", "With", "ADJECTIVE_ROOT", [form("lI")])?;
    let singular = not_after(b, "A3Pl_Noun")?;
    b.connect("NOUN_NOM_DERIV", "Without", "ADJECTIVE_ROOT", [form("sIz").pre(singular)])?;
    for (suffix, pattern) in [
        ("JustLike_Noun", "+ImsI"),
        ("Equ_Noun", "cA"),
        ("Y", "lIk"),
        ("For", "lIk"),
        ("DurationOf", "lIk"),
        ("OfUnit_Noun", "lIk"),
    ] {
        b.connect("NOUN_NOM_DERIV", suffix, "ADJECTIVE_ROOT", [form(pattern)])?;
    }
    let after_loc = after(b, "Loc_Noun")?;
    b.connect(
        "NOUN_DERIV_WITH_CASE",
        "PointQual_Noun",
        "ADJECTIVE_ROOT",
        [form("ki").pre(after_loc)],
    )?;

    b.connect("NOUN_NOM_DERIV", "InTermsOf", "ADVERB_ROOT", [form("cA")])?;
    b.connect("NOUN_NOM_DERIV", "By_Pnon", "ADVERB_ROOT", [form("cA")])?;
    b.connect("NOUN_POSSESSIVE_NOM_DERIV", "By_Possessive", "ADVERB_ROOT", [form("ncA")])?;
    b.connect("NOUN_NOM_DERIV", "ManyOf", "ADVERB_ROOT", [form("lArcA")])?;
    b.connect(
        "NOUN_NOM_DERIV",
        "ForALotOfTime",
        "ADVERB_ROOT",
        [form("lArcA").pre(root_has_secondary_category(SecondaryCategory::Time))],
    )?;

    // masanınki, kardeşiminkiler
    let after_gen = after(b, "Gen_Noun")?;
    let then_pnon = followed_by(&b.suffix("Pnon_Pron")?);
    b.connect(
        "NOUN_DERIV_WITH_CASE",
        "RelPron_A3Sg_Noun",
        "PRONOUN_WITH_AGREEMENT",
        [form("ki").pre(after_gen.clone()).post(then_pnon.clone())],
    )?;
    b.connect(
        "NOUN_DERIV_WITH_CASE",
        "RelPron_A3Pl_Noun",
        "PRONOUN_WITH_AGREEMENT",
        [form("kiler").pre(after_gen).post(then_pnon)],
    )?;

    b.connect(
        "NOUN_COMPOUND_ROOT",
        "A3Sg_Noun_Compound",
        "NOUN_COMPOUND_WITH_AGREEMENT",
        [form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Sg_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        [form("+sI")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Pl_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        [form("lArI!")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "Pnon_Noun_Compound",
        "NOUN_COMPOUND_WITH_POSSESSION",
        [form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_POSSESSION",
        "Nom_Noun_Compound_Deriv",
        "NOUN_NOM_DERIV",
        [form("")],
    )
}

// =============================================================================
// Verbs
// =============================================================================

fn verb_suffixes(b: &mut GraphBuilder) -> Result<()> {
    verb_agreements(b)?;
    verb_polarity(b)?;
    verb_tenses(b)?;
    modals(b)?;
    verb_to_verb(b)?;
    verb_to_noun(b)?;
    verb_to_adverb(b)?;
    verb_to_adjective(b)
}

fn verb_agreements(b: &mut GraphBuilder) -> Result<()> {
    let imp = after(b, "Imp")?;
    let not_imp = imp.clone().negate();
    let empty_imp = after_form(b, "Imp", "")?;
    let not_opt = not_after(b, "Opt")?;
    let after_opt = after(b, "Opt")?;

    let from = "VERB_WITH_TENSE";
    let to = "VERB_TERMINAL_TRANSFER";
    // yapmaktayım, gelmeliyim
    b.connect(from, "A1Sg_Verb", to, [form("+Im"), form("yIm")])?;
    b.connect(
        from,
        "A2Sg_Verb",
        to,
        [
            form("n").pre(not_imp.clone().and(not_opt.clone())),
            form("sIn").pre(not_imp.clone()),
            form("").pre(imp.clone()),
        ],
    )?;
    b.connect(
        from,
        "A3Sg_Verb",
        to,
        [form("").pre(not_imp.clone()), form("sIn").pre(imp.clone())],
    )?;
    // geldik, gelelim
    b.connect(
        from,
        "A1Pl_Verb",
        to,
        [
            form("+Iz").pre(not_opt.clone()),
            form("k").pre(not_opt.clone()),
            form("yIz").pre(not_opt),
            form("lIm").pre(after_opt),
        ],
    )?;
    b.connect(
        from,
        "A2Pl_Verb",
        to,
        [
            form("").pre(imp.clone().and(empty_imp.clone().negate())),
            form("sInIz").pre(not_imp.clone()),
            form("nIz").pre(not_imp.clone()),
            form("+yIn").pre(empty_imp.clone()),
            form("+yInIz").pre(empty_imp),
        ],
    )?;
    b.connect(
        from,
        "A3Pl_Verb",
        to,
        [form("lAr").pre(not_imp), form("sInlAr").pre(imp)],
    )
}

fn verb_polarity(b: &mut GraphBuilder) -> Result<()> {
    b.connect(
        "VERB_ROOT",
        "Neg",
        "VERB_WITH_POLARITY",
        [
            form("m").post(followed_by_suffix_goes_to(D).negate()),
            form("mA"),
        ],
    )?;
    b.connect("VERB_ROOT", "Pos", "VERB_WITH_POLARITY", [form("")])
}

fn verb_tenses(b: &mut GraphBuilder) -> Result<()> {
    let neg = after(b, "Neg")?;
    let not_neg = neg.clone().negate();
    // gelmem, gelmeyiz
    let then_a1 = followed_by_form(&b.suffix("A1Sg_Verb")?, "+Im")
        .or(followed_by_form(&b.suffix("A1Pl_Verb")?, "yIz"));

    b.add_forms(
        "Aor",
        [
            form("+Ir").pre(has_lexeme_attribute(LexemeAttribute::AoristI).and(not_neg.clone())),
            form("+Ar").pre(not_neg),
            form("z").pre(neg.clone()).post(then_a1.clone().negate()),
            form("").pre(neg).post(then_a1),
        ],
    )?;
    b.add_forms("Prog", [form("Iyor"), form("mAktA")])?;
    b.add_forms("Fut", [form("+yAcAk")])?;
    b.add_forms("Narr", [form("mIş"), form("ymIş")])?;
    b.add_forms("Past", [form("dI"), form("ydI")])?;
    b.add_forms("Cond", [form("+ysA")])?;

    let imperative_persons = then(b, "A2Sg_Verb")?
        .or(then(b, "A3Sg_Verb")?)
        .or(then(b, "A2Pl_Verb")?)
        .or(then(b, "A3Pl_Verb")?);
    let then_a2sg = then(b, "A2Sg_Verb")?;
    let then_a2pl = then(b, "A2Pl_Verb")?;
    b.add_forms(
        "Imp",
        [
            form("").post(imperative_persons),
            form("sAnA").post(then_a2sg),
            form("sAnIzA").post(then_a2pl),
        ],
    )?;
    b.add_forms("Pres", [form("")])?;

    for tense in ["Aor", "Prog", "Fut", "Narr", "Past", "Cond", "Imp"] {
        b.add_edge("VERB_WITH_POLARITY", tense, "VERB_WITH_TENSE")?;
    }
    for tense in ["Cond", "Narr", "Past"] {
        b.add_edge("VERB_WITH_TENSE", tense, "VERB_WITH_TENSE")?;
    }
    Ok(())
}

fn modals(b: &mut GraphBuilder) -> Result<()> {
    let modal_followers = followed_by(&b.suffix("Past")?)
        .or(followed_by(&b.suffix("Narr")?))
        .or(followed_by_one_from_group(&b.group_members("Verb_Agreements_Group")?));
    let not_neg = not_after(b, "Neg")?;

    b.connect("VERB_WITH_POLARITY", "Neces", "VERB_WITH_TENSE", [form("mAlI!")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Opt",
        "VERB_WITH_TENSE",
        [
            form("Ay"),
            form("A").pre(not_neg).post(modal_followers.clone()),
            form("yAy"),
            form("yA").post(modal_followers),
        ],
    )?;
    b.connect("VERB_WITH_POLARITY", "Desr", "VERB_WITH_TENSE", [form("sA")])
}

fn verb_to_verb(b: &mut GraphBuilder) -> Result<()> {
    use LexemeAttribute::{PassiveIl, PassiveIn, PassiveInIl};

    let neg = b.suffix("Neg")?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Able",
        "VERB_ROOT",
        [
            form("+yAbil").post(followed_by(&neg).negate()),
            form("+yA").post(followed_by(&neg)),
        ],
    )?;

    b.connect("VERB_POLARITY_DERIV", "Hastily", "VERB_ROOT", [form("+yIver")])?;

    let passive_il = has_lexeme_attribute(PassiveIl).or(doesnt_have_lexeme_attribute(PassiveIn)
        .and(doesnt_have_lexeme_attribute(PassiveInIl)));
    b.connect(
        "VERB_PLAIN_DERIV",
        "Pass",
        "VERB_ROOT",
        [
            form("+In").pre(has_lexeme_attribute(PassiveIn)),
            form("+nIl").pre(passive_il),
            form("+InIl").pre(has_lexeme_attribute(PassiveInIl)),
        ],
    )?;

    let caus = b.suffix("Caus")?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Recip",
        "VERB_ROOT",
        [form("+Iş").post_derivation(
            followed_by_derivation(&caus)
                .negate()
                .or(followed_by_derivation_form(&caus, "dIr")),
        )],
    )?;

    let not_after_able = after_derivation(b, "Able")?.negate();
    b.connect(
        "VERB_PLAIN_DERIV",
        "Caus",
        "VERB_ROOT",
        [
            form("t").pre(
                has_lexeme_attribute(LexemeAttribute::CausativeT)
                    .and(spec::doesnt_come_after_derivation_form(&caus, "t"))
                    .and(spec::doesnt_come_after_derivation_form(&caus, "It")),
            ),
            form("Ir").pre(
                has_lexeme_attribute(LexemeAttribute::CausativeIr).and(not_after_able.clone()),
            ),
            form("It").pre(
                has_lexeme_attribute(LexemeAttribute::CausativeIt).and(not_after_able.clone()),
            ),
            form("Ar").pre(has_lexeme_attribute(LexemeAttribute::CausativeAr).and(not_after_able)),
            form("dIr").pre(has_lexeme_attribute(LexemeAttribute::CausativeDIr)),
        ],
    )
}

fn verb_to_noun(b: &mut GraphBuilder) -> Result<()> {
    b.connect(
        "VERB_POLARITY_DERIV",
        "Inf",
        "NOUN_ROOT",
        [form("mAk"), form("mA"), form("+yIş")],
    )?;
    b.connect("VERB_POLARITY_DERIV", "PastPart_Noun", "NOUN_ROOT", [form("dIk")])?;
    b.connect("VERB_POLARITY_DERIV", "FutPart_Noun", "NOUN_ROOT", [form("+yAcAk")])
}

fn verb_to_adverb(b: &mut GraphBuilder) -> Result<()> {
    let from = "VERB_POLARITY_DERIV";
    b.connect(from, "AfterDoingSo", "ADVERB_ROOT", [form("+yIp")])?;
    b.connect(
        from,
        "WithoutHavingDoneSo",
        "ADVERB_ROOT",
        [form("mAdAn"), form("mAksIzIn")],
    )?;
    b.connect(from, "AsLongAs", "ADVERB_ROOT", [form("dIkçA")])?;
    b.connect(from, "ByDoingSo", "ADVERB_ROOT", [form("+yArAk")])?;
    b.connect(from, "When", "ADVERB_ROOT", [form("+yIncA")])?;
    b.connect(from, "SinceDoingSo", "ADVERB_ROOT", [form("+yAlI!")])?;

    b.connect(
        "VERB_WITH_TENSE_BEFORE_DERIV",
        "A3Pl_Verb_For_Adv",
        "VERB_TENSE_DERIV",
        [form("lAr")],
    )?;
    b.connect("VERB_TENSE_DERIV", "While", "ADVERB_ROOT", [form("ken")])?;
    let tensed = after_any(b, &["Aor", "Prog", "Fut", "Narr"])?;
    b.connect(
        "VERB_TENSE_DERIV",
        "AsIf",
        "ADVERB_ROOT",
        [form("cAsI!nA").pre(tensed)],
    )
}

fn verb_to_adjective(b: &mut GraphBuilder) -> Result<()> {
    let from = "VERB_POLARITY_DERIV";
    b.connect(from, "PresPart", "ADJECTIVE_ROOT", [form("+yAn")])?;
    b.connect(from, "PastPart_Adj", "ADJECTIVE_PART_WITHOUT_POSSESSION", [form("dIk")])?;
    b.connect(from, "FutPart_Adj", "ADJECTIVE_PART_WITHOUT_POSSESSION", [form("+yAcAk")])?;
    b.connect(from, "Agt_Verb_to_Adj", "ADJECTIVE_ROOT", [form("+yIcI")])?;

    let neg = after(b, "Neg")?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Aorist_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        [
            form("+Ir").pre(has_lexeme_attribute(LexemeAttribute::AoristI)),
            form("+Ar"),
            form("z").pre(neg),
        ],
    )?;
    b.connect("VERB_WITH_POLARITY", "Future_to_Adj", "VERB_TENSE_ADJ_DERIV", [form("+yAcAk")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Narr_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        [form("mIş"), form("ymIş")],
    )
}

// =============================================================================
// Adjectives and adverbs
// =============================================================================

fn adjective_suffixes(b: &mut GraphBuilder) -> Result<()> {
    let from = "ADJECTIVE_DERIV";
    b.connect(from, "JustLike_Adj", "ADJECTIVE_ROOT", [form("+ImsI")])?;
    b.connect(from, "Equ_Adj", "ADJECTIVE_ROOT", [form("cA")])?;
    b.connect(from, "Quite", "ADJECTIVE_ROOT", [form("cA")])?;
    b.connect(from, "Ly", "ADVERB_ROOT", [form("cA")])?;
    b.connect(from, "Ness", "NOUN_ROOT", [form("lIk")])?;
    b.connect(from, "Become", "VERB_ROOT", [form("lAş")])?;

    for (suffix, pattern) in [
        ("Pnon_Adj", ""),
        ("P1Sg_Adj", "+Im"),
        ("P2Sg_Adj", "+In"),
        ("P3Sg_Adj", "+sI"),
        ("P1Pl_Adj", "+ImIz"),
        ("P2Pl_Adj", "+InIz"),
        ("P3Pl_Adj", "lArI!"),
    ] {
        b.connect(
            "ADJECTIVE_PART_WITHOUT_POSSESSION",
            suffix,
            "ADJECTIVE_TERMINAL_TRANSFER",
            [form(pattern)],
        )?;
    }
    Ok(())
}

fn adverb_suffixes(b: &mut GraphBuilder) -> Result<()> {
    // bugünkü, dünkü, öbürkü
    let ku = root_is_one_of(&["bugün", "dün", "gün", "öbür"]);
    b.connect(
        "ADVERB_DERIV",
        "PointQual_Adv",
        "ADJECTIVE_ROOT",
        [form("ki").pre(ku.clone().negate()), form("kü").pre(ku)],
    )
}

// =============================================================================
// Pronouns
// =============================================================================

fn pronoun_suffixes(b: &mut GraphBuilder) -> Result<()> {
    // Only the third persons have productive forms; the rest are spelled
    // out by predefined paths for ben, sen, biz, siz and kendi.
    for agreement in ["A1Sg_Pron", "A2Sg_Pron", "A1Pl_Pron", "A2Pl_Pron"] {
        b.add_edge("PRONOUN_ROOT", agreement, "PRONOUN_WITH_AGREEMENT")?;
    }
    b.connect("PRONOUN_ROOT", "A3Sg_Pron", "PRONOUN_WITH_AGREEMENT", [form("")])?;
    b.connect("PRONOUN_ROOT", "A3Pl_Pron", "PRONOUN_WITH_AGREEMENT", [form("lAr")])?;

    for (suffix, pattern) in [
        ("Pnon_Pron", ""),
        ("P1Sg_Pron", "+Im"),
        ("P2Sg_Pron", "+In"),
        ("P3Sg_Pron", "+sI"),
        ("P1Pl_Pron", "+ImIz"),
        ("P2Pl_Pron", "+InIz"),
    ] {
        b.connect(
            "PRONOUN_WITH_AGREEMENT",
            suffix,
            "PRONOUN_WITH_POSSESSION",
            [form(pattern)],
        )?;
    }
    let after_plural = after(b, "A3Pl_Pron")?;
    b.connect(
        "PRONOUN_WITH_AGREEMENT",
        "P3Pl_Pron",
        "PRONOUN_WITH_POSSESSION",
        [form("lArI!"), form("I!").pre(after_plural)],
    )?;

    let after_p3 = after_any(b, &["P3Sg_Pron", "P3Pl_Pron"])?
        .or(after_derivation(b, "RelPron_A3Sg_Noun")?)
        .or(after_derivation(b, "RelPron_A3Sg_Pron")?);
    let from = "PRONOUN_WITH_POSSESSION";
    b.connect(from, "Nom_Pron", "PRONOUN_WITH_CASE", [form("")])?;
    let after_pnon = after(b, "Pnon_Pron")?;
    b.connect(
        from,
        "Nom_Pron_Deriv",
        "PRONOUN_NOM_DERIV",
        [form("").pre(after_pnon.clone())],
    )?;
    for (suffix, plain, pronominal) in [
        ("Acc_Pron", "+yI", "nI"),
        ("Dat_Pron", "+yA", "nA"),
        ("Loc_Pron", "dA", "ndA"),
        ("Abl_Pron", "dAn", "ndAn"),
    ] {
        b.connect(
            from,
            suffix,
            "PRONOUN_WITH_CASE",
            [
                form(plain).pre(after_p3.clone().negate()),
                form(pronominal).pre(after_p3.clone()),
            ],
        )?;
    }
    b.connect(from, "Gen_Pron", "PRONOUN_WITH_CASE", [form("+nIn")])?;
    b.connect(from, "Ins_Pron", "PRONOUN_WITH_CASE", [form("+ylA")])?;
    b.connect(from, "AccordingTo", "PRONOUN_WITH_CASE", [form("cA")])?;

    // onsuz, bunsuz, şunsuz but bensiz, onlarsız
    let demonstrative = after(b, "A3Sg_Pron")?
        .and(after_pnon)
        .and(root_is_one_of(&["o", "bu", "şu"]));
    b.connect(
        "PRONOUN_NOM_DERIV",
        "Without_Pron",
        "ADJECTIVE_ROOT",
        [
            form("sIz").pre(demonstrative.clone().negate()),
            form("nsuz").pre(demonstrative),
        ],
    )?;
    let after_loc = after(b, "Loc_Pron")?;
    b.connect(
        "PRONOUN_DERIV_WITH_CASE",
        "PointQual_Pron",
        "ADJECTIVE_ROOT",
        [form("ki").pre(after_loc)],
    )?;

    // oranınki, benimki
    let after_gen = after(b, "Gen_Pron")?;
    let then_pnon = followed_by(&b.suffix("Pnon_Pron")?);
    b.connect(
        "PRONOUN_DERIV_WITH_CASE",
        "RelPron_A3Sg_Noun",
        "PRONOUN_WITH_AGREEMENT",
        [form("ki").pre(after_gen.clone()).post(then_pnon.clone())],
    )?;
    b.connect(
        "PRONOUN_DERIV_WITH_CASE",
        "RelPron_A3Pl_Noun",
        "PRONOUN_WITH_AGREEMENT",
        [form("kiler").pre(after_gen).post(then_pnon)],
    )
}

// =============================================================================
// Question particle
// =============================================================================

fn question_suffixes(b: &mut GraphBuilder) -> Result<()> {
    // All forms come from predefined paths.
    for tense in ["Pres_Ques", "Narr_Ques", "Past_Ques"] {
        b.add_edge("QUESTION_ROOT", tense, "QUESTION_WITH_TENSE")?;
    }
    for agreement in [
        "A1Sg_Ques",
        "A2Sg_Ques",
        "A3Sg_Ques",
        "A1Pl_Ques",
        "A2Pl_Ques",
        "A3Pl_Ques",
    ] {
        b.add_edge("QUESTION_WITH_TENSE", agreement, "QUESTION_WITH_AGREEMENT")?;
    }
    Ok(())
}
