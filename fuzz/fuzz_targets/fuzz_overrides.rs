//! Fuzz target for caller-supplied rule overrides.
//!
//! Arbitrary patterns and shortcode names must either fail to resolve with
//! an error or count without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textmeter::{CountType, Rule, RuleOverrides, WordCounter};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    rule: u8,
    pattern: &'a str,
    shortcodes: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let rule = Rule::ALL[usize::from(input.rule) % Rule::ALL.len()];
    let overrides = RuleOverrides::new()
        .with_rule(rule, input.pattern)
        .with_shortcodes(input.shortcodes);

    if let Ok(counter) = WordCounter::new(&overrides) {
        for ty in CountType::ALL {
            let _ = counter.count(input.text, ty);
        }
    }
});
