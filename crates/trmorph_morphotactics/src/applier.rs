//! Trying suffix forms against the unexplained tail of a word.

use std::sync::Arc;

use log::trace;
use trmorph_foundation::phonetics;

use crate::container::{MorphemeContainer, SuffixFormApplication, Transition};
use crate::model::{StateRef, Suffix, SuffixForm};

/// Name of the entry state for verbs. Stems entering it never voice.
const VERB_ROOT: &str = "VERB_ROOT";

/// Returns false if the suffix may not follow the analysis at all.
///
/// Two members of one group cannot share a derivation span, and a suffix
/// cannot repeat the previous derivation unless it allows repetition.
#[must_use]
pub fn transition_allowed_for_suffix(container: &MorphemeContainer, suffix: &Suffix) -> bool {
    if let Some(group) = suffix.group {
        if container.has_group_since_derivation(group) {
            return false;
        }
    }
    if !suffix.allow_repetition && container.last_derivation_suffix() == Some(suffix) {
        return false;
    }
    true
}

/// Tries every form of `suffix` and returns one extended analysis per form
/// that fits `word`.
#[must_use]
pub fn try_suffix(
    container: &MorphemeContainer,
    suffix: &Suffix,
    forms: &[Arc<SuffixForm>],
    to: StateRef,
    word: &str,
) -> Vec<MorphemeContainer> {
    if !transition_allowed_for_suffix(container, suffix) {
        trace!("{suffix} not allowed after {container}");
        return Vec::new();
    }
    forms
        .iter()
        .filter_map(|form| try_suffix_form(container, form, to, word))
        .collect()
}

/// Tries a single form.
///
/// Checks, in order: the form's precondition, the expectations left by the
/// root, the shape of the word so far, the phonetic realization against the
/// actual word, the previous form's postcondition and, when leaving a
/// derivational state, the post-derivation conditions of the derivation span.
#[must_use]
pub fn try_suffix_form(
    container: &MorphemeContainer,
    form: &Arc<SuffixForm>,
    to: StateRef,
    word: &str,
) -> Option<MorphemeContainer> {
    if let Some(pre) = &form.precondition {
        if !pre.is_satisfied_by(container) {
            trace!("{form} precondition {pre} failed");
            return None;
        }
    }

    if !form.pattern.is_empty()
        && !phonetics::expectations_satisfied(container.expectations(), &form.pattern)
    {
        return None;
    }

    let so_far = container.surface_so_far();
    if !phonetics::is_suffix_form_applicable(so_far, &form.pattern) {
        return None;
    }

    let (modified, fitting) = phonetics::apply(
        so_far,
        container.phonetic_attributes(),
        &form.pattern,
        container.lexeme_attributes(),
    )?;
    let applied = format!("{modified}{fitting}");

    if !phonetics::application_matches(word, &applied, to.name != VERB_ROOT) {
        return None;
    }

    let start = so_far.chars().count();
    let end = applied.chars().count();
    let actual: String = word.chars().skip(start).take(end.saturating_sub(start)).collect();

    let from = container.last_state();
    let mut extended = container.clone();
    extended.add_transition(Transition {
        from,
        application: SuffixFormApplication::new(Arc::clone(form), actual, fitting),
        to,
    });

    if let Some(previous) = container.last_transition() {
        if let Some(post) = &previous.application.form.postcondition {
            if !post.is_satisfied_by(&extended) {
                trace!("{} postcondition {post} failed", previous.application.form);
                return None;
            }
        }
        if previous.to.is_derivational() {
            let violated = container.transitions_from_derivation().any(|t| {
                t.application
                    .form
                    .post_derivation_condition
                    .as_ref()
                    .is_some_and(|c| !c.is_satisfied_by(&extended))
            });
            if violated {
                trace!("post-derivation condition failed before {form}");
                return None;
            }
        }
    }

    trace!("{form} applied: {extended}");
    Some(extended)
}
