//! Caller-supplied rule configuration.

use serde::{Deserialize, Serialize};

use super::Rule;
use crate::error::Result;

/// Partial rule configuration, merged key by key over the built-in defaults.
///
/// Every field left as `None` keeps its default pattern. The JSON form uses
/// the rule keys directly:
///
/// ```
/// use textmeter::RuleOverrides;
///
/// let overrides = RuleOverrides::from_json(
///     r#"{ "connector": "--|\\x{2014}|\\x{2013}", "shortcodes": ["gallery"] }"#,
/// )
/// .unwrap();
/// assert_eq!(overrides.shortcodes, vec!["gallery".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RuleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars_excluding_spaces_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars_including_spaces_pattern: Option<String>,
    /// Shortcode tag names to strip, e.g. `["gallery", "caption"]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shortcodes: Vec<String>,
}

impl RuleOverrides {
    /// No overrides: resolves to the default rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the pattern for `rule`.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule, source: impl Into<String>) -> Self {
        *self.slot_mut(rule) = Some(source.into());
        self
    }

    /// Set the shortcode names to strip.
    #[must_use]
    pub fn with_shortcodes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortcodes = names.into_iter().map(Into::into).collect();
        self
    }

    /// The override for `rule`, if any.
    #[must_use]
    pub fn get(&self, rule: Rule) -> Option<&str> {
        let slot = match rule {
            Rule::Html => &self.html,
            Rule::HtmlComment => &self.html_comment,
            Rule::Space => &self.space,
            Rule::HtmlEntity => &self.html_entity,
            Rule::Connector => &self.connector,
            Rule::Remove => &self.remove,
            Rule::Astral => &self.astral,
            Rule::WordsPattern => &self.words_pattern,
            Rule::CharsExcludingSpacesPattern => &self.chars_excluding_spaces_pattern,
            Rule::CharsIncludingSpacesPattern => &self.chars_including_spaces_pattern,
        };
        slot.as_deref()
    }

    /// Rules that carry an override, in declaration order.
    pub fn overridden(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|rule| self.get(*rule).is_some())
    }

    /// True when nothing is overridden and no shortcodes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overridden().next().is_none() && self.shortcodes.is_empty()
    }

    /// Layer `other` on top of `self`: every rule `other` sets wins, and a
    /// non-empty shortcode list in `other` replaces ours.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        for rule in Rule::ALL {
            if let Some(source) = other.get(rule) {
                *self.slot_mut(rule) = Some(source.to_string());
            }
        }
        if !other.shortcodes.is_empty() {
            self.shortcodes = other.shortcodes;
        }
        self
    }

    fn slot_mut(&mut self, rule: Rule) -> &mut Option<String> {
        match rule {
            Rule::Html => &mut self.html,
            Rule::HtmlComment => &mut self.html_comment,
            Rule::Space => &mut self.space,
            Rule::HtmlEntity => &mut self.html_entity,
            Rule::Connector => &mut self.connector,
            Rule::Remove => &mut self.remove,
            Rule::Astral => &mut self.astral,
            Rule::WordsPattern => &mut self.words_pattern,
            Rule::CharsExcludingSpacesPattern => &mut self.chars_excluding_spaces_pattern,
            Rule::CharsIncludingSpacesPattern => &mut self.chars_including_spaces_pattern,
        }
    }
}
