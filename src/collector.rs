use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Final word list: sorted, duplicate-free, exact-match strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(rename = "diccionari")]
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from arbitrary words, restoring the sorted and unique invariant.
    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Accumulates word forms from every entry of a run.
#[derive(Debug, Default)]
pub struct Collector {
    forms: Vec<String>,
}

impl Collector {
    pub fn push(&mut self, form: String) {
        if !form.is_empty() {
            self.forms.push(form);
        }
    }

    /// Number of forms collected so far, duplicates included.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn finish(self, strip_diacritics: bool) -> Dictionary {
        if strip_diacritics {
            Dictionary::from_words(self.forms.iter().map(|form| normalize(form)))
        } else {
            Dictionary::from_words(self.forms)
        }
    }
}

impl Extend<String> for Collector {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for form in iter {
            self.push(form);
        }
    }
}
