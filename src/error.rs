//! Error types for textmeter.

use std::fmt;
use std::io;

use crate::rules::Rule;

/// Result type alias for textmeter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Where a pattern that failed to compile came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSource {
    /// One of the fixed rules, overridden by the caller.
    Rule(Rule),
    /// The pattern synthesized from the `shortcodes` list.
    Shortcodes,
}

impl fmt::Display for PatternSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => f.write_str(rule.key()),
            Self::Shortcodes => f.write_str("shortcodes"),
        }
    }
}

/// Error type for textmeter operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading input text or a rules file.
    Io(io::Error),
    /// A rule pattern was rejected by the regex engine.
    InvalidPattern {
        origin: PatternSource,
        source: regex::Error,
    },
    /// A rule overrides document could not be parsed.
    InvalidConfig(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidPattern { origin, source } => {
                write!(f, "invalid pattern for rule `{origin}`: {source}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid rule overrides: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidPattern { source, .. } => Some(source),
            Self::InvalidConfig(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e)
    }
}
