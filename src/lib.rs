//! `textmeter` - word and character counting for rich text.
//!
//! Text that may contain markup, comments, shortcodes, HTML entities and
//! irregular whitespace is normalized through a fixed sequence of regex
//! substitutions and then measured as words, characters excluding spaces or
//! characters including spaces. Every pattern can be overridden.
//!
//! ```
//! use textmeter::{CountType, RuleOverrides, count, count_with};
//!
//! assert_eq!(count("hello<br>world", CountType::Words), 2);
//!
//! let overrides = RuleOverrides::new().with_shortcodes(["gallery"]);
//! let words = count_with("before[gallery id=1]after", CountType::Words, &overrides).unwrap();
//! assert_eq!(words, 2);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // RuleSet in rules, CountType in count_type
#![allow(clippy::missing_errors_doc)] // Only pattern compilation can fail
#![allow(clippy::missing_panics_doc)] // Built-in patterns are known to compile
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::needless_pass_by_value)] // impl Into<CountType> arguments

pub mod count_type;
pub mod counter;
pub mod error;
pub mod normalize;
pub mod rules;

pub use count_type::CountType;
pub use counter::{
    Counts, WordCounter, count, count_all, count_rope, count_with, count_with_rules,
};
pub use error::{Error, PatternSource, Result};
pub use normalize::normalize;
pub use rules::{Rule, RuleOverrides, RuleSet, shortcode_pattern};
