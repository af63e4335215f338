//! Counting: normalize, then count matches of the type's pattern.

use ropey::Rope;

use crate::count_type::CountType;
use crate::error::Result;
use crate::normalize::normalize;
use crate::rules::{RuleOverrides, RuleSet};

/// All three counts for one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub words: usize,
    pub characters_excluding_spaces: usize,
    pub characters_including_spaces: usize,
}

impl Counts {
    /// The count for a single type.
    #[must_use]
    pub const fn get(&self, count_type: CountType) -> usize {
        match count_type {
            CountType::Words => self.words,
            CountType::CharactersExcludingSpaces => self.characters_excluding_spaces,
            CountType::CharactersIncludingSpaces => self.characters_including_spaces,
        }
    }
}

/// Count `text` with the built-in rules.
///
/// ```
/// use textmeter::{CountType, count};
///
/// assert_eq!(count("hello world", CountType::Words), 2);
/// assert_eq!(count("hello world", "charsIncludingSpaces"), 11);
/// assert_eq!(count("hello world", "anything else"), 2);
/// ```
#[must_use]
pub fn count(text: &str, count_type: impl Into<CountType>) -> usize {
    count_with_rules(text, count_type, RuleSet::default_rules())
}

/// Count `text` with `overrides` merged over the built-in rules.
///
/// Fails only if an override does not compile.
pub fn count_with(
    text: &str,
    count_type: impl Into<CountType>,
    overrides: &RuleOverrides,
) -> Result<usize> {
    let rules = RuleSet::resolve(overrides)?;
    Ok(count_with_rules(text, count_type, &rules))
}

/// Count `text` with an already resolved rule set.
#[must_use]
pub fn count_with_rules(text: &str, count_type: impl Into<CountType>, rules: &RuleSet) -> usize {
    let count_type = count_type.into();
    if text.is_empty() {
        return 0;
    }

    let cleaned = normalize(rules, text, count_type);
    let total = rules.pattern_for(count_type).find_iter(&cleaned).count();
    tracing::trace!(%count_type, input_len = text.len(), total, "counted");
    total
}

/// Compute every count type for `text`.
#[must_use]
pub fn count_all(text: &str, rules: &RuleSet) -> Counts {
    Counts {
        words: count_with_rules(text, CountType::Words, rules),
        characters_excluding_spaces: count_with_rules(
            text,
            CountType::CharactersExcludingSpaces,
            rules,
        ),
        characters_including_spaces: count_with_rules(
            text,
            CountType::CharactersIncludingSpaces,
            rules,
        ),
    }
}

/// Count the contents of a rope, e.g. an editor buffer.
#[must_use]
pub fn count_rope(rope: &Rope, count_type: impl Into<CountType>, rules: &RuleSet) -> usize {
    if rope.len_bytes() == 0 {
        return 0;
    }
    let text: String = rope.chunks().collect();
    count_with_rules(&text, count_type, rules)
}

/// A counter bound to one resolved rule set.
///
/// Resolving compiles every overridden pattern, so callers that count
/// repeatedly with the same overrides should build one `WordCounter` and
/// reuse it. It is immutable and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct WordCounter {
    rules: RuleSet,
}

impl WordCounter {
    /// Build a counter from caller overrides.
    pub fn new(overrides: &RuleOverrides) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::resolve(overrides)?,
        })
    }

    /// Build a counter around an existing rule set.
    #[must_use]
    pub fn from_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn count(&self, text: &str, count_type: impl Into<CountType>) -> usize {
        count_with_rules(text, count_type, &self.rules)
    }

    #[must_use]
    pub fn count_all(&self, text: &str) -> Counts {
        count_all(text, &self.rules)
    }

    #[must_use]
    pub fn count_rope(&self, rope: &Rope, count_type: impl Into<CountType>) -> usize {
        count_rope(rope, count_type, &self.rules)
    }
}
