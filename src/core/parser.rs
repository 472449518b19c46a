//! Command-line and path splitting.
//!
//! Lines are split on runs of Unicode whitespace, so the non-breaking spaces
//! inserted by the line editor separate words like ordinary spaces. Paths are
//! split on runs of `/`; empty segments are kept and skipped later by resolution.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/+").expect("valid separator pattern"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid word pattern"));

/// A command line split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse a raw line into command name and arguments.
///
/// An empty or blank line yields the `""` command with no arguments.
pub fn parse_input(input: &str) -> ParsedCommand {
    let mut words = WHITESPACE.split(input.trim()).map(str::to_string);
    let name = words.next().unwrap_or_default();
    ParsedCommand {
        name,
        args: words.collect(),
    }
}

/// Split a path on one or more consecutive separators.
///
/// `"/home"` yields `["", "home"]` and `"a//b/"` yields `["a", "b", ""]`.
pub fn split_path(path: &str) -> Vec<String> {
    SEPARATORS.split(path).map(str::to_string).collect()
}

/// Byte ranges of the whitespace-separated words of `input`.
pub fn word_ranges(input: &str) -> Vec<Range<usize>> {
    WORD.find_iter(input).map(|m| m.range()).collect()
}
