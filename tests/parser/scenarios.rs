//! Whole-word analyses of representative words.

use std::sync::Arc;

use trmorph_parser::Format;

use crate::{BASIC, FULL, rendered};

#[test]
fn locative() {
    let out = rendered(&BASIC, "kapıda", Format::Tests);
    assert!(out.contains(&"kapı(kapı)+Noun+A3sg+Pnon+Loc(dA[da])".to_string()), "{out:?}");
}

#[test]
fn voiced_allomorph_shares_the_lexeme() {
    let accusative = FULL.analyze("armudu");
    let genitive = FULL.analyze("armudun");
    assert!(!accusative.is_empty());
    assert!(!genitive.is_empty());

    let armut: Vec<_> = accusative
        .iter()
        .chain(&genitive)
        .filter(|c| c.root().lexeme.lemma == "armut")
        .collect();
    assert!(!armut.is_empty());
    for container in &armut {
        assert_eq!(container.root().text, "armud");
        assert!(Arc::ptr_eq(&container.root().lexeme, &armut[0].root().lexeme));
    }

    let out = rendered(&FULL, "armudun", Format::Tests);
    assert!(out.iter().any(|s| s.starts_with("armud(armut)+Noun+A3sg")), "{out:?}");
}

#[test]
fn infinitive() {
    let out = rendered(&BASIC, "yapmak", Format::Tests);
    assert!(
        out.iter().any(|s| s.starts_with("yap(yapmak)+Verb+Pos+Noun+Inf(mAk[mak])")),
        "{out:?}"
    );
}

#[test]
fn past_tense_devoices() {
    let out = rendered(&BASIC, "gitti", Format::Tests);
    assert!(
        out.iter().any(|s| s.starts_with("git(gitmek)+Verb+Pos") && s.contains("Past(dI[ti])")),
        "{out:?}"
    );
}

#[test]
fn empty_word() {
    assert!(FULL.analyze("").is_empty());
    assert!(BASIC.analyze("").is_empty());
}

#[test]
fn unknown_word() {
    assert!(FULL.analyze("xqzw").is_empty());
}

#[test]
fn changed_pronoun_root() {
    let out = rendered(&FULL, "bana", Format::Tests);
    assert!(out.iter().any(|s| s.starts_with("ban(ben)+Pron+Pers+A1sg+Pnon+Dat(a[a])")), "{out:?}");
}

#[test]
fn inverse_harmony() {
    let out = rendered(&BASIC, "dikkatle", Format::Tests);
    assert!(
        out.iter().any(|s| s.starts_with("dikkat(dikkat)+Noun") && s.contains("Ins(+ylA[le])")),
        "{out:?}"
    );
}

#[test]
fn causatives_and_passives_of_irregular_verbs() {
    for (word, root, derivation) in [
        ("ettirdim", "et(etmek)", "Caus(dIr[tir])"),
        ("denildi", "de(demek)", "Pass(+InIl[nil])"),
        ("dedirir", "de(demek)", "Caus(dIr[dir])"),
        ("yediremiyordu", "ye(yemek)", "Caus(dIr[dir])"),
    ] {
        let out = rendered(&BASIC, word, Format::Tests);
        assert!(
            out.iter().any(|s| s.starts_with(root) && s.contains(derivation)),
            "{word}: {out:?}"
        );
    }
}

#[test]
fn demonstrative_determiners() {
    for word in ["o", "bu", "şu"] {
        let out = rendered(&BASIC, word, Format::Tests);
        assert!(out.contains(&format!("{word}({word})+Det")), "{out:?}");
        assert!(out.iter().any(|s| s.starts_with(&format!("{word}({word})+Pron"))), "{out:?}");
    }
    let out = rendered(&BASIC, "çoğu", Format::Tests);
    assert!(out.iter().any(|s| s.starts_with("çoğu(çoğu)+Adj")), "{out:?}");
    assert!(out.iter().any(|s| s.starts_with("çoğu(çoğu)+Pron")), "{out:?}");
}

#[test]
fn analyses_cover_the_whole_word() {
    for word in ["kitaba", "evlerde", "geldim", "okuyor", "gitti", "armudu"] {
        let results = FULL.analyze(word);
        assert!(!results.is_empty(), "{word}");
        for result in &results {
            assert_eq!(result.surface_so_far(), word);
            assert!(result.remaining().is_empty());
            assert!(result.last_state().is_terminal(), "{result}");
        }
    }
}

#[test]
fn shared_between_threads() {
    let words = ["kitaba", "kapıda", "gitti", "bana"];
    let expected: Vec<_> = words.iter().map(|w| FULL.analyze(w)).collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|word| scope.spawn(move || FULL.analyze(word)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
