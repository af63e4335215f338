//! Fuzz target for counting with the built-in rules.
//!
//! Counting must never panic, and words can never outnumber characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textmeter::{RuleSet, count_all};

fuzz_target!(|data: &str| {
    let counts = count_all(data, RuleSet::default_rules());
    assert!(counts.words <= counts.characters_excluding_spaces);
});
