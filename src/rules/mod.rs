//! Rule table: the patterns that drive normalization and counting.
//!
//! A [`RuleSet`] is resolved from [`RuleOverrides`] by taking every
//! overridden pattern as given and filling the rest from [`defaults`].
//! The shortcode pattern is never configured directly; it is derived from
//! the `shortcodes` list and exists only when that list is non-empty.

pub mod defaults;
mod overrides;

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::count_type::CountType;
use crate::error::{Error, PatternSource, Result};

pub use overrides::RuleOverrides;

/// One fixed, overridable rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Html,
    HtmlComment,
    Space,
    HtmlEntity,
    Connector,
    Remove,
    Astral,
    WordsPattern,
    CharsExcludingSpacesPattern,
    CharsIncludingSpacesPattern,
}

impl Rule {
    /// Every rule, in pipeline order.
    pub const ALL: [Self; 10] = [
        Self::Html,
        Self::HtmlComment,
        Self::Space,
        Self::HtmlEntity,
        Self::Connector,
        Self::Remove,
        Self::Astral,
        Self::WordsPattern,
        Self::CharsExcludingSpacesPattern,
        Self::CharsIncludingSpacesPattern,
    ];

    /// Configuration key, as used in JSON overrides.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::HtmlComment => "htmlComment",
            Self::Space => "space",
            Self::HtmlEntity => "htmlEntity",
            Self::Connector => "connector",
            Self::Remove => "remove",
            Self::Astral => "astral",
            Self::WordsPattern => "wordsPattern",
            Self::CharsExcludingSpacesPattern => "charsExcludingSpacesPattern",
            Self::CharsIncludingSpacesPattern => "charsIncludingSpacesPattern",
        }
    }

    /// Look up a rule by its configuration key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.key() == key)
    }

    /// The built-in pattern source.
    #[must_use]
    pub const fn default_source(self) -> &'static str {
        match self {
            Self::Html => defaults::HTML,
            Self::HtmlComment => defaults::HTML_COMMENT,
            Self::Space => defaults::SPACE,
            Self::HtmlEntity => defaults::HTML_ENTITY,
            Self::Connector => defaults::CONNECTOR,
            Self::Remove => defaults::REMOVE,
            Self::Astral => defaults::ASTRAL,
            Self::WordsPattern => defaults::WORDS,
            Self::CharsExcludingSpacesPattern => defaults::CHARS_EXCLUDING_SPACES,
            Self::CharsIncludingSpacesPattern => defaults::CHARS_INCLUDING_SPACES,
        }
    }

    /// The counting rule for a count type.
    #[must_use]
    pub const fn for_count_type(count_type: CountType) -> Self {
        match count_type {
            CountType::Words => Self::WordsPattern,
            CountType::CharactersExcludingSpaces => Self::CharsExcludingSpacesPattern,
            CountType::CharactersIncludingSpaces => Self::CharsIncludingSpacesPattern,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Build the shortcode pattern source for a list of tag names.
///
/// Matches `[name ...]` and `[/name]` for any listed name. Names are taken
/// literally; empty names are ignored. Returns `None` when no usable names
/// remain.
#[must_use]
pub fn shortcode_pattern<S: AsRef<str>>(names: &[S]) -> Option<String> {
    let mut alternation = String::new();
    for name in names {
        let name: &str = name.as_ref();
        if name.is_empty() {
            continue;
        }
        if !alternation.is_empty() {
            alternation.push('|');
        }
        alternation.push_str(&regex::escape(name));
    }

    if alternation.is_empty() {
        return None;
    }
    Some(format!(r"\[/?(?:{alternation})[^\]]*?\]"))
}

/// Fully resolved, compiled rules.
///
/// Immutable once built; cloning shares the compiled programs.
#[derive(Clone, Debug)]
pub struct RuleSet {
    compiled: [Regex; 10],
    shortcodes: Option<Regex>,
}

impl RuleSet {
    /// Merge `overrides` over the defaults and compile every pattern.
    ///
    /// Fails only if an overridden pattern (or the shortcode list) does not
    /// compile; the regex engine's error is carried as the source.
    pub fn resolve(overrides: &RuleOverrides) -> Result<Self> {
        if overrides.is_empty() {
            return Ok(Self::default_rules().clone());
        }

        let defaults = Self::default_rules();
        let mut compiled = defaults.compiled.clone();
        for rule in overrides.overridden() {
            if let Some(source) = overrides.get(rule) {
                compiled[rule as usize] = compile(PatternSource::Rule(rule), source)?;
            }
        }

        let shortcodes = match shortcode_pattern(overrides.shortcodes.as_slice()) {
            Some(source) => Some(compile(PatternSource::Shortcodes, &source)?),
            None => None,
        };

        let overridden: Vec<&str> = overrides.overridden().map(Rule::key).collect();
        tracing::debug!(
            ?overridden,
            shortcodes = overrides.shortcodes.len(),
            derived_shortcode_pattern = shortcodes.is_some(),
            "resolved rule set"
        );

        Ok(Self {
            compiled,
            shortcodes,
        })
    }

    /// The built-in rules, compiled once per process.
    #[must_use]
    pub fn default_rules() -> &'static Self {
        static DEFAULT: OnceLock<RuleSet> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            let compiled = Rule::ALL.map(|rule| {
                Regex::new(rule.default_source()).expect("built-in pattern compiles")
            });
            Self {
                compiled,
                shortcodes: None,
            }
        })
    }

    /// The compiled pattern for `rule`.
    #[must_use]
    pub fn get(&self, rule: Rule) -> &Regex {
        &self.compiled[rule as usize]
    }

    /// The derived shortcode pattern, present only when shortcodes were given.
    #[must_use]
    pub fn shortcodes(&self) -> Option<&Regex> {
        self.shortcodes.as_ref()
    }

    /// The counting pattern for `count_type`.
    #[must_use]
    pub fn pattern_for(&self, count_type: CountType) -> &Regex {
        self.get(Rule::for_count_type(count_type))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules().clone()
    }
}

fn compile(origin: PatternSource, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source| Error::InvalidPattern { origin, source })
}
