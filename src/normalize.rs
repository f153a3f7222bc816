use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters that decorate a word in print but are not letters of it.
const DECORATIONS: [char; 3] = ['·', '\u{2027}', '\u{0387}'];

/// Folds a single character to its base letter.
///
/// Accented letters decompose to their base Latin letter. Decoration
/// characters and standalone combining marks fold to `None`. Everything
/// else is returned unchanged.
pub fn fold_char(c: char) -> Option<char> {
    if DECORATIONS.contains(&c) || is_combining_mark(c) {
        return None;
    }
    if c.is_ascii() {
        return Some(c);
    }
    let mut decomposed = std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d));
    Some(decomposed.next().unwrap_or(c))
}

/// ASCII-folds a word: diacritics removed, decoration characters stripped.
pub fn normalize(s: &str) -> String {
    s.chars().filter_map(fold_char).collect()
}
