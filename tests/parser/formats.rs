//! Output format tests.

use trmorph_parser::{Format, format_for_parseset, format_for_tests, format_transition};

use crate::{BASIC, FULL, rendered};

#[test]
fn every_format_renders_every_analysis() {
    let analyses = FULL.analyze("kitaplarımızdan");
    assert!(!analyses.is_empty());
    for format in Format::ALL {
        for container in &analyses {
            assert!(!format.render(container).is_empty(), "{format}");
        }
    }
}

#[test]
fn format_names_round_trip() {
    for format in Format::ALL {
        assert_eq!(format.as_str().parse::<Format>().unwrap(), *format);
        assert_eq!(format.to_string(), format.as_str());
    }
    assert!("xml".parse::<Format>().is_err());
}

#[test]
fn render_matches_the_free_functions() {
    for container in BASIC.analyze("kitaba") {
        assert_eq!(Format::Tests.render(&container), format_for_tests(&container));
        assert_eq!(Format::Parseset.render(&container), format_for_parseset(&container));
    }
}

#[test]
fn transitions_with_and_without_forms() {
    let analyses = BASIC.analyze("kapıda");
    let container = analyses
        .iter()
        .find(|c| format_for_tests(c) == "kapı(kapı)+Noun+A3sg+Pnon+Loc(dA[da])")
        .unwrap();
    let last = container.transitions().last().unwrap();
    assert_eq!(format_transition(last, true), "Loc(dA[da])");
    assert_eq!(format_transition(last, false), "Loc");
}

#[test]
fn derivations_show_their_category() {
    let out = rendered(&BASIC, "yapmak", Format::Parseset);
    assert!(out.iter().any(|s| s.starts_with("yap+Verb+Pos+Noun+Inf")), "{out:?}");

    let simple = rendered(&BASIC, "yapmak", Format::Simple);
    assert!(
        simple.iter().any(|s| s.starts_with(r#"(1,"yap+Verb+Pos")(2,"Noun+Inf"#)),
        "{simple:?}"
    );
}

#[test]
fn stem_format() {
    let out = rendered(&BASIC, "kitaba", Format::WithoutSuffixes);
    assert!(out.contains(&"kitaba+Noun[kitab(kitap+Noun)+Noun]".to_string()), "{out:?}");
}
