//! The three kinds of measurement the counter can produce.

use std::fmt;

/// What to count.
///
/// Parsing is lenient: any name that is not one of the two character
/// variants falls back to [`CountType::Words`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CountType {
    /// Whitespace-delimited words, after punctuation is stripped.
    #[default]
    Words,
    /// Every non-whitespace character.
    CharactersExcludingSpaces,
    /// Every character except line breaks and soft hyphens.
    CharactersIncludingSpaces,
}

impl CountType {
    /// All count types, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::Words,
        Self::CharactersExcludingSpaces,
        Self::CharactersIncludingSpaces,
    ];

    /// Parse a count type name, coercing anything unrecognized to `Words`.
    ///
    /// Accepts the camelCase names (`charsExcludingSpaces`) as well as the
    /// long snake_case forms (`characters_excluding_spaces`). Matching
    /// ignores ASCII case, `-` and `_`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let folded: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match folded.as_str() {
            "charsexcludingspaces" | "charactersexcludingspaces" => {
                Self::CharactersExcludingSpaces
            }
            "charsincludingspaces" | "charactersincludingspaces" => {
                Self::CharactersIncludingSpaces
            }
            _ => Self::Words,
        }
    }

    /// Canonical name of this count type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::CharactersExcludingSpaces => "charsExcludingSpaces",
            Self::CharactersIncludingSpaces => "charsIncludingSpaces",
        }
    }

    /// Whether this is one of the character-count variants.
    #[must_use]
    pub const fn counts_characters(self) -> bool {
        !matches!(self, Self::Words)
    }
}

impl fmt::Display for CountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for CountType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
