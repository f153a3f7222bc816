use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Leading character of a suffix token that only makes sense attached to a base word.
pub const SUFFIX_MARKER: char = '-';

/// Marker printed in front of every headword in the extracted text.
pub const ENTRY_MARKER: char = '■';

/// One headword as found in the extracted text:
///
/// ```text
/// ■\nabecedari\n2\n\t-ària\n
/// ■\nabelià\t-ana [o abelianès]\n
/// ```
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const LETTERS: &str = "A-Za-zÀ-ÖØ-öø-ÿ·";
    // Keep in step with `is_word_char`.
    let pattern = format!(
        r"{marker}\n(?P<word>[{l}]+)(?:\n\d+\n)?(?:\t(?P<suffix>-?[{l}]*))?(?:[ \t]*\[(?P<variants>[^\]\n]*)\])?\n",
        marker = ENTRY_MARKER,
        l = LETTERS,
    );
    Regex::new(&pattern).expect("entry pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'t> {
    /// Headword with the homonym index already removed.
    pub word: &'t str,
    pub suffix: Option<&'t str>,
    /// Contents of the bracketed alternates block, without the brackets.
    pub variants: Option<&'t str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub base_word: String,
    /// Female-form annotation exactly as printed, marker included.
    pub suffix: Option<String>,
}

/// Finds dictionary entries inside noisy extracted text.
///
/// Anything that does not follow the entry layout is skipped.
#[derive(Debug, Clone, Copy)]
pub struct EntryMatcher<'t> {
    text: &'t str,
}

impl<'t> EntryMatcher<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Lazily yields every entry in the text, in order. Can be called repeatedly.
    pub fn entries(&self) -> impl Iterator<Item = RawEntry<'t>> + use<'t> {
        ENTRY_PATTERN.captures_iter(self.text).map(raw_entry)
    }
}

fn raw_entry<'t>(caps: Captures<'t>) -> RawEntry<'t> {
    let word = caps.name("word").map_or("", |m| m.as_str());
    let suffix = caps
        .name("suffix")
        .map(|m| m.as_str())
        .filter(|s| s.chars().any(|c| c != SUFFIX_MARKER));
    let variants = caps.name("variants").map(|m| m.as_str());
    RawEntry {
        word,
        suffix,
        variants,
    }
}

/// Letters allowed in a headword or suffix: Latin-1 letters and the interpunct.
pub fn is_word_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ' | '·')
}

impl RawEntry<'_> {
    pub fn parse(&self) -> ParsedEntry {
        ParsedEntry {
            base_word: self.word.to_string(),
            suffix: self.suffix.map(str::to_string),
        }
    }
}

/// Splits `word\tsuffix` into a base word and an optional suffix.
///
/// Only the first tab separates; a token without one is a standalone word.
pub fn parse_entry(token: &str) -> ParsedEntry {
    match token.split_once('\t') {
        Some((base, suffix)) if !suffix.trim().is_empty() => ParsedEntry {
            base_word: base.trim().to_string(),
            suffix: Some(suffix.trim().to_string()),
        },
        Some((base, _)) => ParsedEntry {
            base_word: base.trim().to_string(),
            suffix: None,
        },
        None => ParsedEntry {
            base_word: token.trim().to_string(),
            suffix: None,
        },
    }
}
