use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::collector::{Collector, Dictionary};
use crate::entry::EntryMatcher;
use crate::forms::generate_forms;
use crate::variants::expand_variants;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Store forms ASCII-folded instead of with their printed diacritics.
    pub strip_diacritics: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub entries: usize,
    pub forms: usize,
    pub words: usize,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Runs the whole extraction over already extracted text.
pub fn build_dictionary(text: &str, options: &BuildOptions) -> (Dictionary, BuildStats) {
    let mut collector = Collector::default();
    let mut entries = 0usize;

    for raw in EntryMatcher::new(text).entries() {
        entries += 1;
        let parsed = raw.parse();
        debug!("entry {} (suffix: {:?})", parsed.base_word, parsed.suffix);

        collector.push(parsed.base_word.clone());
        if let Some(suffix) = parsed.suffix.as_deref() {
            let forms = generate_forms(&parsed.base_word, Some(suffix));
            if forms.is_empty() {
                debug!("no forms for {} with suffix {suffix}", parsed.base_word);
            }
            collector.extend(forms);
        }
        if let Some(block) = raw.variants {
            collector.extend(expand_variants(&parsed.base_word, block));
        }
    }

    if entries == 0 {
        warn!("no dictionary entries found in {} bytes of text", text.len());
    }

    let forms = collector.len();
    let dictionary = collector.finish(options.strip_diacritics);
    let stats = BuildStats {
        entries,
        forms,
        words: dictionary.len(),
    };
    (dictionary, stats)
}

/// Reads extracted text from `source`, builds the dictionary and persists it to `output`.
///
/// The output file is replaced in a single rename, so a failed run leaves no partial file.
pub fn build_from_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
    options: &BuildOptions,
) -> Result<BuildStats, BuildError> {
    let source = source.as_ref();
    let text = fs::read_to_string(source).map_err(|source_err| BuildError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let (dictionary, stats) = build_dictionary(&text, options);
    info!(
        "matched {} entries, generated {} forms, kept {} words",
        stats.entries, stats.forms, stats.words
    );

    write_dictionary(output, &dictionary)?;
    Ok(stats)
}

pub fn write_dictionary<P: AsRef<Path>>(path: P, dictionary: &Dictionary) -> Result<(), BuildError> {
    let path = path.as_ref();
    let json = serde_json::to_string(dictionary)?;
    let write_err = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    info!("wrote {} words to {}", dictionary.len(), path.display());
    Ok(())
}

pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, BuildError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded: Dictionary = serde_json::from_str(&raw).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Dictionary::from_words(loaded.into_words()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
■\nabecedari\n2\n\t-ària\n\
■\nabegot\n\
■\nabelià\t-ana\n\
■\nample\t-a\n\
■\nu\n1\n\tnua\n";

    #[test]
    fn builds_sorted_unique_words() {
        let (dict, stats) = build_dictionary(SAMPLE, &BuildOptions::default());
        assert_eq!(stats.entries, 5);
        assert_eq!(
            dict.words(),
            [
                "abecedari",
                "abecedària",
                "abegot",
                "abeliana",
                "abelià",
                "ampla",
                "ample",
                "ana",
                "nua",
                "u",
                "ària",
            ]
        );
        assert_eq!(stats.words, dict.len());
    }

    #[test]
    fn strips_diacritics_when_requested() {
        let options = BuildOptions {
            strip_diacritics: true,
        };
        let (dict, _) = build_dictionary(SAMPLE, &options);
        assert!(dict.contains("abecedaria"));
        assert!(dict.contains("abelia"));
        assert!(dict.words().iter().all(|w| w.is_ascii()));
    }

    #[test]
    fn variant_block_adds_to_primary_forms() {
        let (dict, _) = build_dictionary("■\nmeu\t-a [o mèu o -ana]\n", &BuildOptions::default());
        for word in ["meu", "meua", "mèu"] {
            assert!(dict.contains(word), "missing {word}");
        }
    }

    #[test]
    fn bracketed_cross_reference_is_not_a_word() {
        let (dict, _) = build_dictionary("■\nabac [vegeu també àbac, 2]\n", &BuildOptions::default());
        assert_eq!(dict.words(), ["abac"]);
    }

    #[test]
    fn stripped_output_stays_ascii_with_decomposed_variants() {
        let options = BuildOptions {
            strip_diacritics: true,
        };
        let (dict, _) = build_dictionary("■\ncafè [o cafe\u{301} o cafès]\n", &options);
        assert_eq!(dict.words(), ["cafe", "cafes"]);
    }

    #[test]
    fn empty_text_yields_empty_dictionary() {
        let (dict, stats) = build_dictionary("", &BuildOptions::default());
        assert!(dict.is_empty());
        assert_eq!(stats, BuildStats::default());
    }
}
