use crate::entry::SUFFIX_MARKER;
use crate::normalize::{fold_char, normalize};

/// Endings replaced, rather than extended, by a single-letter suffix.
const REPLACEABLE_ENDINGS: [char; 2] = ['e', 'o'];

/// Expands a base word and its optional suffix token into literal word forms.
///
/// A suffix without the leading marker is a complete word and is returned
/// verbatim. A one-letter suffix replaces a final `e`/`o` or is appended.
/// Longer suffixes are cut in at every position where their first letter
/// occurs in the base word (compared without diacritics), so ambiguous
/// entries yield several candidates, and none at all if the letter is absent.
pub fn generate_forms(base_word: &str, suffix: Option<&str>) -> Vec<String> {
    let Some(suffix) = suffix else {
        return vec![base_word.to_string()];
    };
    let Some(tail) = suffix.strip_prefix(SUFFIX_MARKER) else {
        return vec![suffix.to_string()];
    };

    let mut tail_chars = tail.chars();
    if let (Some(letter), None) = (tail_chars.next(), tail_chars.next()) {
        return vec![single_letter_form(base_word, letter)];
    }

    let Some(anchor) = normalize(tail).chars().next() else {
        return Vec::new();
    };
    base_word
        .char_indices()
        .filter(|(_, c)| fold_char(*c) == Some(anchor))
        .map(|(cut, _)| format!("{}{}", &base_word[..cut], tail))
        .collect()
}

fn single_letter_form(base_word: &str, letter: char) -> String {
    let mut form = base_word.to_string();
    if form.ends_with(REPLACEABLE_ENDINGS) {
        form.pop();
    }
    form.push(letter);
    form
}
