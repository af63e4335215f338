//! Built-in pattern sources.
//!
//! All patterns target the `regex` crate syntax. Flags are inline.

/// Opening or closing tag: `<p class="x">`, `</p>`.
pub const HTML: &str = r"(?i)</?[a-z][^>]*?>";

/// `<!-- ... -->`, spanning newlines.
pub const HTML_COMMENT: &str = r"(?s)<!--.*?-->";

/// Non-breaking space as a named, decimal or hex reference.
pub const SPACE: &str = r"(?i)&nbsp;|&#160;|&#xa0;";

/// Any `&...;` sequence without whitespace inside.
pub const HTML_ENTITY: &str = r"&\S+?;";

/// Double hyphen or em dash.
pub const CONNECTOR: &str = r"--|\x{2014}";

/// ASCII and Latin-1 punctuation and symbols plus the general punctuation,
/// symbol and supplemental punctuation blocks. The first band runs through
/// U+0040, so ASCII digits are removed along with punctuation.
pub const REMOVE: &str = concat!(
    r"[",
    r"\x{21}-\x{40}",
    r"\x{5B}-\x{60}",
    r"\x{7B}-\x{7E}",
    r"\x{80}-\x{BF}",
    r"\x{D7}",
    r"\x{F7}",
    r"\x{2000}-\x{2BFF}",
    r"\x{2E00}-\x{2E7F}",
    r"]",
);

/// Any scalar value outside the Basic Multilingual Plane.
pub const ASTRAL: &str = r"[\x{10000}-\x{10FFFF}]";

/// A non-space character followed by whitespace: one match per word end.
pub const WORDS: &str = r"\S\s+";

pub const CHARS_EXCLUDING_SPACES: &str = r"\S";

/// Everything except line breaks, vertical tab, form feed and soft hyphen.
pub const CHARS_INCLUDING_SPACES: &str = r"[^\f\n\r\v\x{AD}\x{2028}\x{2029}]";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn compile(source: &str) -> Regex {
        Regex::new(source).unwrap()
    }

    #[test]
    fn all_defaults_compile() {
        for source in [
            HTML,
            HTML_COMMENT,
            SPACE,
            HTML_ENTITY,
            CONNECTOR,
            REMOVE,
            ASTRAL,
            WORDS,
            CHARS_EXCLUDING_SPACES,
            CHARS_INCLUDING_SPACES,
        ] {
            assert!(Regex::new(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn html_matches_tags_not_comments() {
        let re = compile(HTML);
        assert!(re.is_match("<br>"));
        assert!(re.is_match("</DIV>"));
        assert!(re.is_match("<a href=\"x\">"));
        assert!(!re.is_match("<!-- c -->"));
        assert!(!re.is_match("a < b"));
        assert!(!re.is_match("<1>"));
    }

    #[test]
    fn html_comment_spans_lines() {
        let re = compile(HTML_COMMENT);
        assert_eq!(re.find_iter("<!-- a\nb --> x <!-- c -->").count(), 2);
    }

    #[test]
    fn space_matches_all_spellings() {
        let re = compile(SPACE);
        for s in ["&nbsp;", "&NBSP;", "&#160;", "&#xA0;", "&#xa0;"] {
            assert!(re.is_match(s), "{s}");
        }
        assert!(!re.is_match("&amp;"));
    }

    #[test]
    fn remove_band_boundaries() {
        let re = compile(REMOVE);
        for c in ['!', '-', '/', '0', '9', ':', '@', '[', '`', '{', '~', '\u{80}', '\u{BF}', '×', '÷'] {
            assert!(re.is_match(&c.to_string()), "{c:?} should be removed");
        }
        for c in ['\u{2000}', '\u{2014}', '\u{2BFF}', '\u{2E00}', '\u{2E7F}'] {
            assert!(re.is_match(&c.to_string()), "{c:?} should be removed");
        }
        for c in [' ', 'A', 'a', 'Z', 'é', '\u{C0}', '\u{1FFF}', '\u{2C00}', '\u{2E80}'] {
            assert!(!re.is_match(&c.to_string()), "{c:?} should be kept");
        }
    }

    #[test]
    fn astral_matches_outside_bmp_only() {
        let re = compile(ASTRAL);
        assert!(re.is_match("😀"));
        assert!(re.is_match("\u{10000}"));
        assert!(!re.is_match("\u{FFFF}"));
        assert!(!re.is_match("漢"));
    }

    #[test]
    fn chars_including_spaces_excludes_line_breaks() {
        let re = compile(CHARS_INCLUDING_SPACES);
        for c in ['\u{0C}', '\n', '\r', '\u{0B}', '\u{AD}', '\u{2028}', '\u{2029}'] {
            assert!(!re.is_match(&c.to_string()), "{c:?}");
        }
        for c in [' ', '\t', 'a', '\u{A0}'] {
            assert!(re.is_match(&c.to_string()), "{c:?}");
        }
    }
}
