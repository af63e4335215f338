//! `textmeter` - count words or characters in rich text files.
//!
//! # Usage
//!
//! ```bash
//! textmeter post.html
//! textmeter --type charsIncludingSpaces post.html
//! textmeter --shortcode gallery --shortcode caption --all < post.html
//! textmeter --rules rules.json --rule "connector=--|\x{2014}|\x{2013}" post.html
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use textmeter::{CountType, Rule, RuleOverrides, WordCounter};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "textmeter - count words or characters in rich text

USAGE:
    textmeter [OPTIONS] [FILE]...

Reads standard input when no FILE is given.

OPTIONS:
    -h, --help              Print this help message and exit
    -t, --type <TYPE>       words, charsExcludingSpaces or charsIncludingSpaces
                            (default: words; unknown names count words)
    -a, --all               Print all three counts: words, characters,
                            characters including spaces

    --rules <FILE>          JSON object of rule overrides
    --rule <KEY=PATTERN>    Override one rule (repeatable, applied after --rules)
    --shortcode <NAME>      Strip [NAME ...] shortcodes (repeatable)

    -v, --verbose           Log rule resolution and counts to stderr

RULE KEYS:
    html, htmlComment, space, htmlEntity, connector, remove, astral,
    wordsPattern, charsExcludingSpacesPattern, charsIncludingSpacesPattern
";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub count_type: CountType,
    pub all: bool,
    pub rules_file: Option<PathBuf>,
    pub rules: Vec<(Rule, String)>,
    pub shortcodes: Vec<String>,
    pub verbose: bool,
    pub inputs: Vec<PathBuf>,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "-t" | "--type" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--type requires a value".to_string());
                    };
                    config.count_type = CountType::from_name(&value.to_string_lossy());
                }

                "-a" | "--all" => config.all = true,

                "--rules" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--rules requires a file".to_string());
                    };
                    config.rules_file = Some(PathBuf::from(value));
                }

                "--rule" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--rule requires KEY=PATTERN".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match parse_rule(&value) {
                        Some(rule) => config.rules.push(rule),
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --rule: {value} (use KEY=PATTERN with a known rule key)"
                            ));
                        }
                    }
                }

                "--shortcode" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--shortcode requires a name".to_string());
                    };
                    config.shortcodes.push(value.to_string_lossy().to_string());
                }

                "-v" | "--verbose" => config.verbose = true,

                "-" => config.inputs.push(PathBuf::from("-")),

                other if other.starts_with('-') => {
                    return ParseResult::Error(format!("Unknown option: {other}"));
                }

                _ => config.inputs.push(PathBuf::from(arg.clone())),
            }
        }

        ParseResult::Config(config)
    }

    /// Assemble the rule overrides: the rules file first, then `--rule` and
    /// `--shortcode` flags on top.
    pub fn overrides(&self) -> textmeter::Result<RuleOverrides> {
        let mut overrides = match &self.rules_file {
            Some(path) => RuleOverrides::from_json(&fs::read_to_string(path)?)?,
            None => RuleOverrides::new(),
        };

        let mut flags = RuleOverrides::new().with_shortcodes(self.shortcodes.iter().cloned());
        for (rule, source) in &self.rules {
            flags = flags.with_rule(*rule, source.clone());
        }
        overrides = overrides.merged(flags);
        Ok(overrides)
    }
}

/// Parse `KEY=PATTERN`. The pattern may itself contain `=`.
fn parse_rule(s: &str) -> Option<(Rule, String)> {
    let (key, pattern) = s.split_once('=')?;
    let rule = Rule::from_key(key.trim())?;
    Some((rule, pattern.to_string()))
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.verbose {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::TRACE)
                    .with_writer(io::stderr)
                    .init();
            }
            if let Err(e) = run(&config, &mut io::stdout().lock()) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        ParseResult::Help => print!("{HELP_TEXT}"),
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            process::exit(1);
        }
    }
}

fn run(config: &Config, out: &mut impl Write) -> textmeter::Result<()> {
    let counter = WordCounter::new(&config.overrides()?)?;

    if config.inputs.is_empty() {
        let text = io::read_to_string(io::stdin())?;
        return report(config, &counter, &text, None, out);
    }

    let labelled = config.inputs.len() > 1;
    for path in &config.inputs {
        let text = read_input(path)?;
        let label = labelled.then_some(path.as_path());
        report(config, &counter, &text, label, out)?;
    }
    Ok(())
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

fn report(
    config: &Config,
    counter: &WordCounter,
    text: &str,
    label: Option<&Path>,
    out: &mut impl Write,
) -> textmeter::Result<()> {
    let line = if config.all {
        let counts = counter.count_all(text);
        format!(
            "{}\t{}\t{}",
            counts.words, counts.characters_excluding_spaces, counts.characters_including_spaces
        )
    } else {
        counter.count(text, config.count_type).to_string()
    };

    match label {
        Some(path) => writeln!(out, "{line}\t{}", path.display())?,
        None => writeln!(out, "{line}")?,
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
