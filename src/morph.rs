//! Morphological normalization capability.
//!
//! Scoring compares dictionary forms, so every token must be reduced to its
//! normal form first ("хочет" -> "хотеть"). The analyzer itself is an
//! injected dependency behind the [`Morphology`] trait: production runs wrap
//! a lemma dictionary, tests substitute deterministic stubs.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// A word-to-normal-form capability.
///
/// Implementations must be pure: one normal form per input, no side effects.
/// Shared read-only across all concurrent article workers.
pub trait Morphology: Send + Sync {
    /// The canonical dictionary form of `word`, lowercased.
    fn normal_form(&self, word: &str) -> String;
}

/// Errors surfaced while loading a lemma dictionary.
#[derive(Debug, Error)]
pub enum MorphError {
    #[error("failed to read lemma dictionary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed lemma entry at {path}:{line} (expected `surface<TAB>lemma`)")]
    MalformedEntry { path: String, line: usize },
}

/// Fallback normalizer that only lowercases.
///
/// Useful when no lemma dictionary is configured; inflected forms will not
/// collapse, so lexicon hits are best-effort.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseMorph;

impl Morphology for LowercaseMorph {
    fn normal_form(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

/// Dictionary-backed normalizer mapping surface forms to lemmas.
///
/// Lookups are case-insensitive; unknown words fall back to their lowercased
/// surface form.
#[derive(Clone, Debug, Default)]
pub struct DictionaryMorph {
    lemmas: HashMap<String, String>,
}

impl DictionaryMorph {
    /// Build a dictionary from `(surface, lemma)` pairs.
    pub fn from_pairs<I, S1, S2>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S1, S2)>,
        S1: Into<String>,
        S2: Into<String>,
    {
        let lemmas = pairs
            .into_iter()
            .map(|(surface, lemma)| (surface.into().to_lowercase(), lemma.into().to_lowercase()))
            .collect();
        Self { lemmas }
    }

    /// Load a dictionary from a tab-separated `surface<TAB>lemma` file.
    ///
    /// Blank lines and lines starting with `#` are skipped; any other line
    /// without a tab is a malformed entry and fails the load.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| MorphError::Io {
                path: display_path.clone(),
                source,
            })?;

        let mut lemmas = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (surface, lemma) = line.split_once('\t').ok_or(MorphError::MalformedEntry {
                path: display_path.clone(),
                line: index + 1,
            })?;
            lemmas.insert(
                surface.trim().to_lowercase(),
                lemma.trim().to_lowercase(),
            );
        }

        info!(path = %display_path, entries = lemmas.len(), "Loaded lemma dictionary");
        Ok(Self { lemmas })
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Morphology for DictionaryMorph {
    fn normal_form(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        match self.lemmas.get(&lowered) {
            Some(lemma) => lemma.clone(),
            None => lowered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_morph() {
        assert_eq!(LowercaseMorph.normal_form("Удивительно"), "удивительно");
    }

    #[test]
    fn test_dictionary_lookup_is_case_insensitive() {
        let morph = DictionaryMorph::from_pairs([("хочет", "хотеть")]);
        assert_eq!(morph.normal_form("Хочет"), "хотеть");
        assert_eq!(morph.normal_form("хочет"), "хотеть");
    }

    #[test]
    fn test_dictionary_falls_back_to_lowercased_surface() {
        let morph = DictionaryMorph::from_pairs([("стало", "стать")]);
        assert_eq!(morph.normal_form("Побег"), "побег");
    }

    #[tokio::test]
    async fn test_from_file_parses_and_skips_comments() {
        let path = std::env::temp_dir().join("jaundice_rate_lemmas_test.tsv");
        tokio::fs::write(&path, "# comment\nхочет\tхотеть\n\nстало\tстать\n")
            .await
            .unwrap();

        let morph = DictionaryMorph::from_file(&path).await.unwrap();
        assert_eq!(morph.len(), 2);
        assert_eq!(morph.normal_form("стало"), "стать");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_from_file_rejects_malformed_entry() {
        let path = std::env::temp_dir().join("jaundice_rate_lemmas_bad.tsv");
        tokio::fs::write(&path, "хочет хотеть\n").await.unwrap();

        let err = DictionaryMorph::from_file(&path).await.unwrap_err();
        assert!(matches!(err, MorphError::MalformedEntry { line: 1, .. }));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
