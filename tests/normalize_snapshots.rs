//! Snapshot tests for the normalized text each count type is matched against.

use textmeter::normalize::{
    strip_connectors, strip_html_comments, strip_html_entities, strip_removables,
    strip_shortcodes, strip_spaces, strip_tags, transpose_astrals, transpose_html_entities,
};
use textmeter::{CountType, RuleOverrides, RuleSet, normalize};

const POST: &str = "<h2>Intro</h2><p>Caf&eacute;&nbsp;culture &mdash; a <em>well-known</em> \
                    habit--since 1900.</p><!-- draft note -->[gallery ids=\"1,2\"]<p>Fin 🎉</p>";

fn rules() -> RuleSet {
    RuleSet::resolve(&RuleOverrides::new().with_shortcodes(["gallery"])).unwrap()
}

#[test]
fn words_normalization() {
    let out = normalize(&rules(), POST, CountType::Words);
    insta::assert_debug_snapshot!(
        out,
        @r#""\nIntro\n\nCaf culture  a \nwellknown\n habit since \n\n\nFin 🎉\n\n""#
    );
}

#[test]
fn characters_normalization() {
    let out = normalize(&rules(), POST, CountType::CharactersExcludingSpaces);
    insta::assert_debug_snapshot!(
        out,
        @r#""\nIntro\n\nCafa culture a a \nwell-known\n habit--since 1900.\n\n\nFin a\n\n""#
    );
}

#[test]
fn both_character_types_share_normalization() {
    let rules = rules();
    assert_eq!(
        normalize(&rules, POST, CountType::CharactersExcludingSpaces),
        normalize(&rules, POST, CountType::CharactersIncludingSpaces)
    );
}

#[test]
fn steps_compose_to_normalize() {
    let rules = rules();
    let mut text = format!("{POST}\n");
    for step in [strip_tags, strip_html_comments, strip_shortcodes, strip_spaces] {
        text = step(&rules, &text).into_owned();
    }
    let shared = text.clone();

    for step in [strip_html_entities, strip_connectors, strip_removables] {
        text = step(&rules, &text).into_owned();
    }
    assert_eq!(text, normalize(&rules, POST, CountType::Words));

    let mut text = shared;
    for step in [transpose_html_entities, transpose_astrals] {
        text = step(&rules, &text).into_owned();
    }
    assert_eq!(text, normalize(&rules, POST, CountType::CharactersIncludingSpaces));
}
