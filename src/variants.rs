use tracing::debug;

use crate::entry::{SUFFIX_MARKER, is_word_char};
use crate::forms::generate_forms;

/// Keyword separating alternatives inside a variant block.
const ALTERNATOR: &str = "o";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSpec {
    /// Suffix applied to the enclosing entry's base word.
    SuffixOnly { suffix: String },
    /// Independent spelling, optionally with its own suffix.
    FullWord { text: String, suffix: Option<String> },
}

/// Parses the contents of a `[o alt1 o alt2\t-sub]` block.
///
/// Each alternative must be a single word or suffix token. Anything else in
/// the brackets (cross-references, numbers, prose) contributes nothing.
pub fn parse_variants(block: &str) -> Vec<VariantSpec> {
    let mut alternatives: Vec<Vec<&str>> = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    for token in block.split(' ').filter(|t| !t.is_empty()) {
        if token == ALTERNATOR {
            alternatives.extend(current.replace(Vec::new()));
            continue;
        }
        match current.as_mut() {
            Some(tokens) => tokens.push(token),
            None => debug!("ignoring {token:?} before the first alternative"),
        }
    }
    alternatives.extend(current);

    alternatives
        .into_iter()
        .filter_map(|tokens| match tokens.as_slice() {
            [] => None,
            [token] => variant_spec(token),
            many => {
                debug!("skipping non-word alternative {many:?}");
                None
            }
        })
        .collect()
}

fn word_token(s: &str) -> bool {
    let letters = s.strip_prefix(SUFFIX_MARKER).unwrap_or(s);
    !letters.is_empty() && letters.chars().all(is_word_char)
}

fn variant_spec(token: &str) -> Option<VariantSpec> {
    let (text, sub_suffix) = match token.split_once('\t') {
        Some((text, sub)) => (text, Some(sub)),
        None => (token, None),
    };
    if !word_token(text) {
        debug!("skipping non-word alternative {token:?}");
        return None;
    }
    let sub_suffix = match sub_suffix {
        None => None,
        Some(sub) if sub.chars().all(|c| c == SUFFIX_MARKER) => None,
        Some(sub) if word_token(sub) => Some(sub),
        Some(_) => {
            debug!("skipping alternative with malformed sub-suffix {token:?}");
            return None;
        }
    };

    if text.starts_with(SUFFIX_MARKER) {
        if let Some(sub) = sub_suffix {
            debug!("dropping sub-suffix {sub} of suffix-only variant {text}");
        }
        return Some(VariantSpec::SuffixOnly {
            suffix: text.to_string(),
        });
    }
    Some(VariantSpec::FullWord {
        text: text.to_string(),
        suffix: sub_suffix.map(str::to_string),
    })
}

/// Word forms contributed by a variant block, always relative to the entry's base word.
pub fn expand_variants(base_word: &str, block: &str) -> Vec<String> {
    let mut forms = Vec::new();
    for spec in parse_variants(block) {
        match spec {
            VariantSpec::SuffixOnly { suffix } => {
                forms.extend(generate_forms(base_word, Some(&suffix)));
            }
            VariantSpec::FullWord { text, suffix } => {
                let generated = suffix
                    .as_deref()
                    .map(|s| generate_forms(&text, Some(s)))
                    .unwrap_or_default();
                forms.push(text);
                forms.extend(generated);
            }
        }
    }
    forms
}
