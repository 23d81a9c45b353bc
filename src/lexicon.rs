//! The charged-word lexicon.
//!
//! Loaded once per run from newline-delimited word lists (one normalized
//! word per line, typically a negative and a positive file merged together)
//! and shared read-only across all article workers.

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Set of emotionally/politically charged words in normal form.
///
/// Membership is exact string equality; duplicates across source files
/// collapse. Never mutated after construction.
#[derive(Clone, Debug, Default)]
pub struct ChargedLexicon {
    words: HashSet<String>,
}

impl ChargedLexicon {
    /// Build a lexicon from an iterator of words, skipping blank entries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Load and merge one or more newline-delimited word-list files.
    pub async fn from_files<P>(paths: &[P]) -> Result<Self, LexiconError>
    where
        P: AsRef<Path>,
    {
        let mut words = HashSet::new();
        for path in paths {
            let path = path.as_ref();
            let content =
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LexiconError::Io {
                        path: path.display().to_string(),
                        source,
                    })?;
            words.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
        }

        info!(words = words.len(), files = paths.len(), "Loaded charged-word lexicon");
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
