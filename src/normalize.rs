//! Text normalization ahead of counting.
//!
//! Each step is a plain substitution driven by one rule. [`normalize`] runs
//! them in order:
//!
//! 1. append `\n` so the last word is delimited like every other word
//! 2. tags become `\n` (separators, so `a<br>b` stays two words)
//! 3. comments are deleted
//! 4. shortcodes, when configured, become `\n`
//! 5. non-breaking space entities become a plain space
//! 6. words: entities deleted, connectors become a space, punctuation deleted;
//!    characters: entities and astral characters each become `a`

use std::borrow::Cow;

use crate::count_type::CountType;
use crate::rules::{Rule, RuleSet};

/// Replace tags with a newline.
#[must_use]
pub fn strip_tags<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::Html).replace_all(text, "\n")
}

/// Delete HTML comments.
#[must_use]
pub fn strip_html_comments<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::HtmlComment).replace_all(text, "")
}

/// Replace configured shortcodes with a newline. No-op without shortcodes.
#[must_use]
pub fn strip_shortcodes<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    match rules.shortcodes() {
        Some(re) => re.replace_all(text, "\n"),
        None => Cow::Borrowed(text),
    }
}

/// Replace non-breaking space entities with a space.
#[must_use]
pub fn strip_spaces<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::Space).replace_all(text, " ")
}

/// Delete HTML entities.
#[must_use]
pub fn strip_html_entities<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::HtmlEntity).replace_all(text, "")
}

/// Replace connectors (`--`, em dash) with a space.
#[must_use]
pub fn strip_connectors<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::Connector).replace_all(text, " ")
}

/// Delete punctuation and symbols.
#[must_use]
pub fn strip_removables<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::Remove).replace_all(text, "")
}

/// Replace each HTML entity with `a` so it counts as one character.
#[must_use]
pub fn transpose_html_entities<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::HtmlEntity).replace_all(text, "a")
}

/// Replace each astral character with `a` so it counts as one character.
#[must_use]
pub fn transpose_astrals<'a>(rules: &RuleSet, text: &'a str) -> Cow<'a, str> {
    rules.get(Rule::Astral).replace_all(text, "a")
}

type Step = for<'a> fn(&RuleSet, &'a str) -> Cow<'a, str>;

const SHARED_STEPS: [Step; 4] = [strip_tags, strip_html_comments, strip_shortcodes, strip_spaces];
const WORD_STEPS: [Step; 3] = [strip_html_entities, strip_connectors, strip_removables];
const CHARACTER_STEPS: [Step; 2] = [transpose_html_entities, transpose_astrals];

/// Run the full normalization sequence for `count_type`.
///
/// The result always ends in whatever the appended `\n` became, so callers
/// must not trim it before matching.
#[must_use]
pub fn normalize(rules: &RuleSet, text: &str, count_type: CountType) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(text);
    out.push('\n');

    let type_steps: &[Step] = match count_type {
        CountType::Words => &WORD_STEPS,
        CountType::CharactersExcludingSpaces | CountType::CharactersIncludingSpaces => {
            &CHARACTER_STEPS
        }
    };

    for step in SHARED_STEPS.iter().chain(type_steps) {
        let replaced = match step(rules, &out) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = replaced {
            out = next;
        }
    }
    out
}
