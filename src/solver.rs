use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::collector::Dictionary;

pub const MIN_WORD_LEN: usize = 3;

/// Finds the dictionary words that can be spelled with a fixed letter set.
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Dictionary,
}

#[derive(Debug)]
pub struct SolveParams<'a> {
    pub letters: &'a [char],
    pub main_letter: char,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub total: usize,
    pub items: Vec<String>,
    pub has_more: bool,
}

impl Solver {
    pub fn new(dictionary: Dictionary) -> Arc<Self> {
        Arc::new(Self { dictionary })
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Words of at least three characters that use the main letter and no
    /// letter outside the set. Matching is on the stored spelling as is.
    pub fn solve(&self, params: SolveParams<'_>) -> SolveResult {
        let allowed: HashSet<char> = params.letters.iter().copied().collect();
        let offset = params
            .page
            .saturating_sub(1)
            .saturating_mul(params.page_size);

        let mut total = 0usize;
        let mut items = Vec::with_capacity(params.page_size.min(64));
        for word in self.dictionary.words() {
            if !is_solution(word, &allowed, params.main_letter) {
                continue;
            }
            total += 1;
            if total > offset && items.len() < params.page_size {
                items.push(word.clone());
            }
        }

        let has_more = offset + items.len() < total;
        SolveResult {
            total,
            items,
            has_more,
        }
    }
}

fn is_solution(word: &str, allowed: &HashSet<char>, main_letter: char) -> bool {
    word.chars().count() >= MIN_WORD_LEN
        && word.contains(main_letter)
        && word.chars().all(|c| allowed.contains(&c))
}

/// Parses a letter set such as `"abcdefg"` or `"a, b, c"`; duplicates collapse.
pub fn parse_letters(raw: &str) -> Result<Vec<char>, SolveError> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for c in raw.chars() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        if !c.is_alphabetic() {
            return Err(SolveError::InvalidChar(c));
        }
        if seen.insert(c) {
            result.push(c);
        }
    }
    if result.is_empty() {
        return Err(SolveError::MissingLetters);
    }
    Ok(result)
}

pub fn parse_main_letter(raw: &str) -> Result<char, SolveError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        (Some(c), None) => Err(SolveError::InvalidChar(c)),
        _ => Err(SolveError::InvalidMainLetter(raw.to_string())),
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid character in letters: {0}")]
    InvalidChar(char),
    #[error("letters are required")]
    MissingLetters,
    #[error("main letter must be a single letter, got {0:?}")]
    InvalidMainLetter(String),
}
