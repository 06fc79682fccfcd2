//! Text renderings of analyses.
//!
//! | Format | `kitaba` |
//! |---|---|
//! | [`format_for_tests`] | `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])` |
//! | [`format_for_parseset`] | `kitap+Noun+A3sg+Pnon+Dat` |
//! | [`format_simple_parseset`] | `(1,"kitap+Noun+A3sg+Pnon+Dat")` |
//! | [`format_without_suffixes`] | `kitaba+Noun[kitab(kitap+Noun)+Noun]` |
//!
//! Free transitions never show up. A transition that leaves a derivational
//! state is prefixed with the category it derives (`Adj+With`).

use std::fmt;
use std::str::FromStr;

use trmorph_foundation::alphabet;
use trmorph_foundation::{Error, ErrorKind, SecondaryCategory, SyntacticCategory};
use trmorph_morphotactics::{MorphemeContainer, SuffixKind, Transition};

/// One of the text renderings, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// [`format_for_tests`].
    #[default]
    Tests,
    /// [`format_for_parseset`].
    Parseset,
    /// [`format_simple_parseset`].
    Simple,
    /// [`format_without_suffixes`].
    WithoutSuffixes,
}

impl Format {
    /// Every format.
    pub const ALL: &'static [Self] = &[Self::Tests, Self::Parseset, Self::Simple, Self::WithoutSuffixes];

    /// The name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tests => "tests",
            Self::Parseset => "parseset",
            Self::Simple => "simple",
            Self::WithoutSuffixes => "stem",
        }
    }

    /// Renders an analysis.
    #[must_use]
    pub fn render(self, container: &MorphemeContainer) -> String {
        match self {
            Self::Tests => format_for_tests(container),
            Self::Parseset => format_for_parseset(container),
            Self::Simple => format_simple_parseset(container),
            Self::WithoutSuffixes => format_without_suffixes(container),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownFormat(s.to_string())))
    }
}

/// `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])`: root text, lemma, and every
/// suffix with its pattern and realization.
#[must_use]
pub fn format_for_tests(container: &MorphemeContainer) -> String {
    let root = container.root();
    let mut out = format!("{}({})+{}", root.text, root.lexeme.lemma, root_state_name(container));
    push_secondary(&mut out, root.lexeme.secondary);
    for transition in visible(container) {
        out.push('+');
        out.push_str(&format_transition(transition, true));
    }
    out
}

/// `kitap+Noun+A3sg+Pnon+Dat`: dictionary root and suffix names.
#[must_use]
pub fn format_for_parseset(container: &MorphemeContainer) -> String {
    let root = container.root();
    let mut out = format!("{}+{}", root.lexeme.root, root_state_name(container));
    push_secondary(&mut out, root.lexeme.secondary);
    for transition in visible(container) {
        out.push('+');
        out.push_str(&format_transition(transition, false));
    }
    out
}

/// `(1,"kitap+Noun+A3sg+Pnon+Nom")(2,"Adj+With")`: one numbered group per
/// derivation.
///
/// Secondary categories the parse sets do not annotate (question and time
/// adverbs, question adjectives) are left out, circumflexes are stripped and
/// apostrophes are not shown.
#[must_use]
pub fn format_simple_parseset(container: &MorphemeContainer) -> String {
    let lexeme = &container.root().lexeme;
    let secondary = match (lexeme.category, lexeme.secondary) {
        (SyntacticCategory::Adverb, Some(SecondaryCategory::Question | SecondaryCategory::Time))
        | (SyntacticCategory::Adjective, Some(SecondaryCategory::Question)) => None,
        (_, secondary) => secondary,
    };

    let mut groups: Vec<Vec<&str>> = vec![Vec::new()];
    for transition in container.transitions() {
        if transition.is_derivational() {
            groups.push(vec![transition.to.category.as_str()]);
        }
        if transition.suffix().kind == SuffixKind::Free {
            continue;
        }
        if let Some(group) = groups.last_mut() {
            group.push(transition.suffix().pretty_name);
        }
    }

    let mut first = format!("{}+{}", lexeme.root, root_state_name(container));
    push_secondary(&mut first, secondary);
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let mut body = if i == 0 { first.clone() } else { String::new() };
        if !group.is_empty() {
            if !body.is_empty() {
                body.push('+');
            }
            body.push_str(&group.join("+"));
        }
        out.push_str(&format!("({},\"{body}\")", i + 1));
    }

    alphabet::strip_circumflex(&out).replace("+Apos", "")
}

/// `kitaplaştı+Verb[kitaplaş(kitap+Noun)+Verb]`: surface, stem and lemma
/// root with their categories.
#[must_use]
pub fn format_without_suffixes(container: &MorphemeContainer) -> String {
    format!(
        "{}+{}[{}({}+{})+{}]",
        container.surface(),
        container.surface_category(),
        container.stem(),
        container.lemma_root(),
        container.lemma_root_category(),
        container.stem_category(),
    )
}

/// Renders one transition. With `with_form`, the pattern and the text it
/// consumed are shown whenever that text is alphanumeric.
#[must_use]
pub fn format_transition(transition: &Transition, with_form: bool) -> String {
    let mut out = String::new();
    if transition.is_derivational() {
        out.push_str(transition.to.category.as_str());
        out.push('+');
    }
    let pretty = transition.suffix().pretty_name;
    let actual = &transition.application.actual;
    if with_form && !actual.is_empty() && actual.chars().all(char::is_alphanumeric) {
        out.push_str(&format!("{pretty}({}[{actual}])", transition.pattern()));
    } else {
        out.push_str(pretty);
    }
    out
}

fn root_state_name(container: &MorphemeContainer) -> &'static str {
    container.root_state().category.as_str()
}

fn push_secondary(out: &mut String, secondary: Option<SecondaryCategory>) {
    if let Some(secondary) = secondary {
        out.push('+');
        out.push_str(secondary.as_str());
    }
}

fn visible(container: &MorphemeContainer) -> impl Iterator<Item = &Transition> {
    container
        .transitions()
        .iter()
        .filter(|t| t.suffix().kind != SuffixKind::Free)
}
