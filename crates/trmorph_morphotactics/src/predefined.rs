//! Hand-built analyses for irregular closed-class roots.
//!
//! Personal and demonstrative pronouns, `kendi`, `hepsi`, the question
//! particles and a handful of quantifier pronouns inflect in ways the
//! graph's suffix forms cannot express (`bana`, `onlar`, `kendisi`,
//! `misiniz`). Their analyses are spelled out here as paths through the
//! graph with a literal realization per suffix, and built once against a
//! root map.
//!
//! A path is written as whitespace-separated steps, each a suffix name with
//! an optional `:text` realization:
//!
//! ```text
//! A3Pl_Pron:nlar Pnon_Pron Dat_Pron:a
//! ```
//!
//! When a suffix does not leave the current state directly, the single
//! intermediate edge that reaches it (usually a free transition) is taken
//! with an empty realization.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use trmorph_foundation::{Error, ErrorKind, Result, SecondaryCategory, SyntacticCategory};
use trmorph_lexicon::{Root, RootMap};

use crate::applier::try_suffix_form;
use crate::container::MorphemeContainer;
use crate::graph::SuffixGraph;
use crate::model::{StateRef, Suffix, SuffixForm, SuffixId};

/// Precomputed analyses keyed by root.
#[derive(Debug, Clone, Default)]
pub struct PredefinedPaths {
    paths: HashMap<Root, Vec<MorphemeContainer>>,
}

impl PredefinedPaths {
    /// A table with no paths. Every root goes through the graph.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds every path group against `roots`.
    ///
    /// With `strict`, a group whose roots are missing from the map is an
    /// error; otherwise the group is skipped with a warning. A path that does
    /// not fit the graph is always an error.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingRoot`] in strict mode and
    /// [`ErrorKind::PredefinedPath`] for paths the graph rejects.
    pub fn build(roots: &RootMap, graph: &SuffixGraph, strict: bool) -> Result<Self> {
        let builder = PathBuilder { roots, graph };
        let mut paths: HashMap<Root, Vec<MorphemeContainer>> = HashMap::new();
        for &(name, group) in GROUPS {
            let containers = match group(&builder) {
                Ok(containers) => containers,
                Err(err) if !strict && matches!(err.kind, ErrorKind::MissingRoot { .. }) => {
                    warn!("skipping predefined paths of {name}: {err}");
                    continue;
                }
                Err(err) => return Err(err),
            };
            debug!("predefined paths of {name}: {}", containers.len());
            for container in containers {
                paths.entry(container.root().clone()).or_default().push(container);
            }
        }
        let table = Self { paths };
        info!(
            "predefined paths built: {} paths for {} roots",
            table.len(),
            table.paths.len()
        );
        Ok(table)
    }

    /// Returns true if the root's analyses are predefined.
    #[must_use]
    pub fn has_paths(&self, root: &Root) -> bool {
        self.paths.contains_key(root)
    }

    /// The predefined analyses of a root, empty if it has none.
    #[must_use]
    pub fn paths(&self, root: &Root) -> &[MorphemeContainer] {
        self.paths.get(root).map_or(&[], Vec::as_slice)
    }

    /// Total number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    /// Returns true if no paths are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

type PathGroup = (&'static str, fn(&PathBuilder<'_>) -> Result<Vec<MorphemeContainer>>);

const GROUPS: &[PathGroup] = &[
    ("di", di),
    ("yi", yi),
    ("ben", ben),
    ("sen", sen),
    ("o", o_personal),
    ("biz", biz),
    ("siz", siz),
    ("bu/şu/o", demonstratives),
    ("kendi", kendi),
    ("hepsi", hepsi),
    ("herkes", herkes),
    ("mı/mi/mu/mü", question_particles),
    ("ne", ne),
    ("ora/bura/şura/nere", places),
    ("içeri/dışarı", inside_outside),
    ("quantifier pronouns", quantifiers),
];

struct PathBuilder<'a> {
    roots: &'a RootMap,
    graph: &'a SuffixGraph,
}

impl PathBuilder<'_> {
    fn root(
        &self,
        text: &str,
        category: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
    ) -> Result<Root> {
        self.roots
            .get(text)
            .iter()
            .find(|r| r.lexeme.category == category && r.lexeme.secondary == secondary)
            .cloned()
            .ok_or_else(|| {
                Error::new(ErrorKind::MissingRoot {
                    root: text.to_string(),
                    category,
                })
            })
    }

    fn pronoun(&self, text: &str, secondary: Option<SecondaryCategory>) -> Result<Root> {
        self.root(text, SyntacticCategory::Pronoun, secondary)
    }

    /// Follows `prefix` then each ending in turn.
    fn endings(&self, root: &Root, prefix: &str, endings: &[&str]) -> Result<Vec<MorphemeContainer>> {
        endings
            .iter()
            .map(|ending| self.follow(root, &format!("{prefix} {ending}")))
            .collect()
    }

    fn paths(&self, root: &Root, paths: &[&str]) -> Result<Vec<MorphemeContainer>> {
        paths.iter().map(|path| self.follow(root, path)).collect()
    }

    fn follow(&self, root: &Root, path: &str) -> Result<MorphemeContainer> {
        let entry = self.graph.default_root_state(root)?;
        let mut container = MorphemeContainer::new(root.clone(), entry, "");
        for step in path.split_whitespace() {
            let (name, text) = step.split_once(':').unwrap_or((step, ""));
            let suffix = self
                .graph
                .suffix_by_name(name)
                .ok_or_else(|| Error::unknown_suffix(name))?;
            let so_far = container.surface_so_far().to_string();

            let to = if let Some(to) = self.target(container.last_state(), suffix.id()) {
                to
            } else {
                let (via, middle) = self.intermediate(container.last_state(), suffix.id(), path)?;
                container = self.step(&container, &via, "", middle, &so_far, path)?;
                self.target(middle, suffix.id())
                    .ok_or_else(|| Error::predefined_path(format!("{path}: {name} lost after {}", via.name)))?
            };
            container = self.step(&container, suffix, text, to, &format!("{so_far}{text}"), path)?;
        }
        Ok(container)
    }

    fn target(&self, from: StateRef, suffix: SuffixId) -> Option<StateRef> {
        self.graph
            .outputs(from.id)
            .iter()
            .find(|e| e.suffix == suffix)
            .map(|e| self.graph.state_ref(e.to))
    }

    /// The one edge out of `from` whose target can take `suffix`.
    fn intermediate(&self, from: StateRef, suffix: SuffixId, path: &str) -> Result<(Arc<Suffix>, StateRef)> {
        let mut found = None;
        for edge in self.graph.outputs(from.id) {
            if self.target(self.graph.state_ref(edge.to), suffix).is_none() {
                continue;
            }
            if found.is_some() {
                return Err(Error::predefined_path(format!(
                    "{path}: more than one way to reach {} from {}",
                    self.graph.suffix(suffix).name,
                    from.name
                )));
            }
            found = Some((Arc::clone(self.graph.suffix(edge.suffix)), self.graph.state_ref(edge.to)));
        }
        found.ok_or_else(|| {
            Error::predefined_path(format!(
                "{path}: {} is not reachable from {}",
                self.graph.suffix(suffix).name,
                from.name
            ))
        })
    }

    fn step(
        &self,
        container: &MorphemeContainer,
        suffix: &Arc<Suffix>,
        text: &str,
        to: StateRef,
        word: &str,
        path: &str,
    ) -> Result<MorphemeContainer> {
        let form = Arc::new(SuffixForm::plain(Arc::clone(suffix), text));
        try_suffix_form(container, &form, to, word).ok_or_else(|| {
            Error::predefined_path(format!("{path}: {suffix}[{text}] does not apply to {container}"))
        })
    }
}

// =============================================================================
// Verbs
// =============================================================================

// `demek` and `yemek` keep `i` before a `y`: diyecek, yiyor, diyebil.
const DI_YI: &[&str] = &[
    "Pos Fut:yecek",
    "Pos Fut:yeceğ",
    "Pos Future_to_Adj:yecek",
    "Pos Future_to_Adj:yeceğ",
    "Pos FutPart_Noun:yecek",
    "Pos FutPart_Noun:yeceğ",
    "Pos FutPart_Adj:yecek",
    "Pos FutPart_Adj:yeceğ",
    "Pos Prog:yor",
    "Pos PresPart:yen",
    "Able:yebil Pos",
    "Able:ye Neg:me",
    "Pos Opt:ye",
    "Pos ByDoingSo:yerek",
];

fn di(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let root = b.root("di", SyntacticCategory::Verb, None)?;
    b.paths(&root, DI_YI)
}

fn yi(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let root = b.root("yi", SyntacticCategory::Verb, None)?;
    let mut paths = b.paths(&root, DI_YI)?;
    paths.push(b.follow(&root, "Pos AfterDoingSo:yip")?);
    Ok(paths)
}

// =============================================================================
// Personal and demonstrative pronouns
// =============================================================================

const PERSONAL: Option<SecondaryCategory> = Some(SecondaryCategory::Personal);
const DEMONSTRATIVE: Option<SecondaryCategory> = Some(SecondaryCategory::Demonstrative);

const FRONT_PLURAL_CASES: &[&str] = &[
    "Nom_Pron",
    "Acc_Pron:i",
    "Dat_Pron:e",
    "Loc_Pron:de",
    "Abl_Pron:den",
    "Ins_Pron:le",
    "Gen_Pron:in",
    "AccordingTo:ce",
    "Nom_Pron_Deriv",
];

const BACK_PLURAL_CASES: &[&str] = &[
    "Nom_Pron",
    "Acc_Pron:ı",
    "Dat_Pron:a",
    "Loc_Pron:da",
    "Abl_Pron:dan",
    "Ins_Pron:la",
    "Gen_Pron:ın",
    "Nom_Pron_Deriv",
];

const N_CASES: &[&str] = &[
    "Nom_Pron",
    "Acc_Pron:nu",
    "Dat_Pron:na",
    "Loc_Pron:nda",
    "Abl_Pron:ndan",
    "Ins_Pron:nla",
    "Ins_Pron:nunla",
    "Gen_Pron:nun",
    "Nom_Pron_Deriv",
];

fn ben(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let ben = b.pronoun("ben", PERSONAL)?;
    let ban = b.pronoun("ban", PERSONAL)?;
    let mut paths = b.endings(
        &ben,
        "A1Sg_Pron Pnon_Pron",
        &[
            "Nom_Pron",
            "Acc_Pron:i",
            "Loc_Pron:de",
            "Abl_Pron:den",
            "Ins_Pron:le",
            "Ins_Pron:imle",
            "Gen_Pron:im",
            "AccordingTo:ce",
            "Nom_Pron_Deriv",
        ],
    )?;
    paths.push(b.follow(&ban, "A1Sg_Pron Pnon_Pron Dat_Pron:a")?);
    Ok(paths)
}

fn sen(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let sen = b.pronoun("sen", PERSONAL)?;
    let san = b.pronoun("san", PERSONAL)?;
    let mut paths = b.endings(
        &sen,
        "A2Sg_Pron Pnon_Pron",
        &[
            "Nom_Pron",
            "Acc_Pron:i",
            "Loc_Pron:de",
            "Abl_Pron:den",
            "Ins_Pron:le",
            "Ins_Pron:inle",
            "Gen_Pron:in",
            "AccordingTo:ce",
            "Nom_Pron_Deriv",
        ],
    )?;
    paths.push(b.follow(&san, "A2Sg_Pron Pnon_Pron Dat_Pron:a")?);
    Ok(paths)
}

fn o_personal(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let o = b.pronoun("o", PERSONAL)?;
    let mut paths = b.endings(&o, "A3Sg_Pron Pnon_Pron", N_CASES)?;
    paths.push(b.follow(&o, "A3Sg_Pron Pnon_Pron AccordingTo:nca")?);
    paths.extend(b.endings(&o, "A3Pl_Pron:nlar Pnon_Pron", BACK_PLURAL_CASES)?);
    paths.push(b.follow(&o, "A3Pl_Pron:nlar Pnon_Pron AccordingTo:ca")?);
    Ok(paths)
}

/// `biz` and `siz` differ only in the instrumental and genitive of the
/// singular.
fn first_or_second_plural(
    b: &PathBuilder<'_>,
    text: &str,
    agreement: &str,
    instrumental: &str,
    genitive: &str,
) -> Result<Vec<MorphemeContainer>> {
    let root = b.pronoun(text, PERSONAL)?;
    let mut paths = b.endings(
        &root,
        &format!("{agreement} Pnon_Pron"),
        &[
            "Nom_Pron",
            "Acc_Pron:i",
            "Dat_Pron:e",
            "Loc_Pron:de",
            "Abl_Pron:den",
            "Ins_Pron:le",
            instrumental,
            genitive,
            "AccordingTo:ce",
            "Nom_Pron_Deriv",
        ],
    )?;
    // bizler, sizlere
    paths.extend(b.endings(&root, &format!("{agreement}:ler Pnon_Pron"), FRONT_PLURAL_CASES)?);
    Ok(paths)
}

fn biz(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    first_or_second_plural(b, "biz", "A1Pl_Pron", "Ins_Pron:imle", "Gen_Pron:im")
}

fn siz(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    first_or_second_plural(b, "siz", "A2Pl_Pron", "Ins_Pron:inle", "Gen_Pron:in")
}

fn demonstratives(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let mut paths = Vec::new();
    for text in ["bu", "şu", "o"] {
        let root = b.pronoun(text, DEMONSTRATIVE)?;
        paths.extend(b.endings(&root, "A3Sg_Pron Pnon_Pron", N_CASES)?);
        paths.extend(b.endings(&root, "A3Pl_Pron:nlar Pnon_Pron", BACK_PLURAL_CASES)?);
    }
    Ok(paths)
}

// =============================================================================
// Reflexive and quantifier pronouns
// =============================================================================

const THIRD_PERSON_CASES: &[&str] = &[
    "Nom_Pron",
    "Acc_Pron:ni",
    "Dat_Pron:ne",
    "Loc_Pron:nde",
    "Abl_Pron:nden",
    "Ins_Pron:yle",
    "Gen_Pron:nin",
    "Nom_Pron_Deriv",
];

const FRONT_CASES: &[&str] = &[
    "Nom_Pron",
    "Acc_Pron:i",
    "Dat_Pron:e",
    "Loc_Pron:de",
    "Abl_Pron:den",
    "Ins_Pron:le",
    "Gen_Pron:in",
    "Nom_Pron_Deriv",
];

fn kendi(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let root = b.pronoun("kendi", Some(SecondaryCategory::Reflexive))?;
    let mut paths = Vec::new();
    for prefix in [
        "A1Sg_Pron P1Sg_Pron:m",
        "A2Sg_Pron P2Sg_Pron:n",
        "A1Pl_Pron P1Pl_Pron:miz",
        "A1Pl_Pron:ler P1Pl_Pron:imiz",
        "A2Pl_Pron P2Pl_Pron:niz",
        "A2Pl_Pron:ler P2Pl_Pron:iniz",
    ] {
        paths.extend(b.endings(&root, prefix, FRONT_CASES)?);
    }
    for prefix in ["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P3Sg_Pron:si", "A3Pl_Pron:leri P3Pl_Pron"] {
        paths.extend(b.endings(&root, prefix, THIRD_PERSON_CASES)?);
    }
    Ok(paths)
}

fn hepsi(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let hep = b.pronoun("hep", None)?;
    let hepsi = b.pronoun("hepsi", None)?;
    let mut paths = Vec::new();
    for prefix in ["A1Pl_Pron P1Pl_Pron:imiz", "A2Pl_Pron P2Pl_Pron:iniz"] {
        paths.extend(b.endings(&hep, prefix, FRONT_CASES)?);
        paths.push(b.follow(&hep, &format!("{prefix} AccordingTo:ce"))?);
    }
    paths.extend(b.endings(&hepsi, "A3Pl_Pron P3Pl_Pron", THIRD_PERSON_CASES)?);
    paths.push(b.follow(&hepsi, "A3Pl_Pron P3Pl_Pron AccordingTo:nce")?);
    Ok(paths)
}

fn herkes(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let root = b.pronoun("herkes", None)?;
    b.paths(&root, &["A3Sg_Pron Pnon_Pron"])
}

fn ne(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let root = b.pronoun("ne", Some(SecondaryCategory::Question))?;
    b.paths(
        &root,
        &[
            "A3Sg_Pron P1Sg_Pron:m",
            "A3Sg_Pron P1Sg_Pron:yim",
            "A3Sg_Pron P2Sg_Pron:n",
            "A3Sg_Pron P2Sg_Pron:yin",
            "A3Sg_Pron P3Sg_Pron:yi",
            "A3Sg_Pron P3Sg_Pron:si",
            "A3Sg_Pron P1Pl_Pron:yimiz",
            "A3Sg_Pron P2Pl_Pron:yiniz",
            "A3Sg_Pron P3Pl_Pron:leri",
            "A3Sg_Pron Pnon_Pron Gen_Pron:yin",
            "A3Sg_Pron Pnon_Pron",
            "A3Pl_Pron:ler Pnon_Pron",
        ],
    )
}

/// Short locatives and ablatives: `orda`, `burdan`, `nerde`.
fn places(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let mut paths = Vec::new();
    for (text, secondary, loc, abl) in [
        ("or", None, "da", "dan"),
        ("bur", None, "da", "dan"),
        ("şur", None, "da", "dan"),
        ("ner", Some(SecondaryCategory::Question), "de", "den"),
    ] {
        let root = b.pronoun(text, secondary)?;
        paths.extend(b.endings(
            &root,
            "A3Sg_Pron Pnon_Pron",
            &[&format!("Loc_Pron:{loc}"), &format!("Abl_Pron:{abl}")],
        )?);
    }
    Ok(paths)
}

/// `içerde`, `dışardan`, `içersi`.
fn inside_outside(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let mut paths = Vec::new();
    for (text, loc, abl, p3sg) in [("içer", "de", "den", "si"), ("dışar", "da", "dan", "sı")] {
        let root = b.root(text, SyntacticCategory::Noun, None)?;
        paths.extend(b.paths(
            &root,
            &[
                &format!("A3Sg_Noun Pnon_Noun Loc_Noun:{loc}"),
                &format!("A3Sg_Noun Pnon_Noun Abl_Noun:{abl}"),
                &format!("A3Sg_Noun P3Sg_Noun:{p3sg}"),
            ],
        )?);
    }
    Ok(paths)
}

/// Quantifier pronouns that already carry a possessive: `biri`, `çoğu`,
/// `diğerleri`. Each entry lists the paths of one root.
const QUANTIFIERS: &[(&str, &[&str])] = &[
    ("bazıları", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:mız", "A3Sg_Pron P2Pl_Pron:nız"]),
    ("bazısı", &["A3Sg_Pron P3Sg_Pron"]),
    ("kimileri", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("kimi", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("kimisi", &["A3Sg_Pron P3Sg_Pron"]),
    ("birileri", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("biri", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("birisi", &["A3Sg_Pron P3Sg_Pron"]),
    ("hiçbiri", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("hiçbirisi", &["A3Sg_Pron P3Sg_Pron"]),
    ("birbiri", &["A3Sg_Pron P3Sg_Pron", "A1Pl_Pron P1Pl_Pron:miz", "A2Pl_Pron P2Pl_Pron:niz"]),
    ("birbir", &["A3Pl_Pron P3Pl_Pron:leri"]),
    ("çoğu", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:muz", "A3Sg_Pron P2Pl_Pron:nuz"]),
    ("birçoğu", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:muz", "A3Sg_Pron P2Pl_Pron:nuz"]),
    ("çokları", &["A3Sg_Pron P3Pl_Pron"]),
    ("birçokları", &["A3Sg_Pron P3Pl_Pron"]),
    ("birkaçı", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:mız", "A3Sg_Pron P2Pl_Pron:nız"]),
    ("cümlesi", &["A3Sg_Pron P3Sg_Pron"]),
    ("diğeri", &["A3Sg_Pron P3Sg_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
    ("diğerleri", &["A3Sg_Pron P3Pl_Pron", "A3Sg_Pron P1Pl_Pron:miz", "A3Sg_Pron P2Pl_Pron:niz"]),
];

fn quantifiers(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let mut paths = Vec::new();
    for &(text, root_paths) in QUANTIFIERS {
        let root = b.pronoun(text, None)?;
        paths.extend(b.paths(&root, root_paths)?);
    }
    Ok(paths)
}

// =============================================================================
// Question particles
// =============================================================================

/// Per particle: the vowel its endings harmonize with, then the tense
/// realizations.
const PARTICLES: &[(&str, char, &str, &str)] = &[
    ("mı", 'ı', "ydı", "ymış"),
    ("mi", 'i', "ydi", "ymiş"),
    ("mu", 'u', "ydu", "ymuş"),
    ("mü", 'ü', "ydü", "ymüş"),
];

fn question_particles(b: &PathBuilder<'_>) -> Result<Vec<MorphemeContainer>> {
    let mut paths = Vec::new();
    for &(text, v, past, narr) in PARTICLES {
        let root = b.root(text, SyntacticCategory::Question, None)?;
        let plural = if matches!(v, 'ı' | 'u') { "lar" } else { "ler" };
        paths.extend(b.endings(
            &root,
            "Pres_Ques",
            &[
                &format!("A1Sg_Ques:y{v}m"),
                &format!("A2Sg_Ques:s{v}n"),
                "A3Sg_Ques",
                &format!("A1Pl_Ques:y{v}z"),
                &format!("A2Pl_Ques:s{v}n{v}z"),
                &format!("A3Pl_Ques:{plural}"),
            ],
        )?);
        paths.extend(b.endings(
            &root,
            &format!("Past_Ques:{past}"),
            &[
                "A1Sg_Ques:m",
                "A2Sg_Ques:n",
                "A3Sg_Ques",
                "A1Pl_Ques:k",
                &format!("A2Pl_Ques:n{v}z"),
                &format!("A3Pl_Ques:{plural}"),
            ],
        )?);
        paths.extend(b.endings(
            &root,
            &format!("Narr_Ques:{narr}"),
            &[
                &format!("A1Sg_Ques:{v}m"),
                &format!("A2Sg_Ques:s{v}n"),
                "A3Sg_Ques",
                &format!("A1Pl_Ques:{v}z"),
                &format!("A2Pl_Ques:s{v}n{v}z"),
                &format!("A3Pl_Ques:{plural}"),
            ],
        )?);
    }
    Ok(paths)
}
