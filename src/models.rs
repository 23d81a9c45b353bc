//! Data models for article analysis outcomes.
//!
//! This module defines the types carried through the analysis pipeline:
//! - [`ProcessingStatus`]: the terminal outcome classification for one article
//! - [`AnalysisResult`]: one scored (or failed) article, ready for JSON output
//!
//! The JSON field names follow the established report format consumed by
//! downstream readers (`URL`, `Статус`, `Рейтинг`, `Слов в статье` and an
//! `INFO:root` diagnostic line), hence the `#[serde(rename)]` attributes.

use serde::{Serialize, Serializer};
use std::fmt;

/// Terminal outcome of processing a single article.
///
/// Every article ends in exactly one of these states; there is no partial
/// outcome. The serialized form matches the report format:
/// `OK`, `FETCH_ERROR`, `PARSING_ERROR` or `TIMEOUT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    /// The article was fetched, sanitized and scored.
    Ok,
    /// The network fetch failed or returned a non-success status.
    FetchError,
    /// The HTML did not contain a recognizable article body.
    ParsingError,
    /// The fetch or the analysis phase exceeded its time budget.
    Timeout,
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
        };
        f.write_str(name)
    }
}

/// The scored (or failed) outcome for one requested URL.
///
/// `rate`, `words_count` and `elapsed_secs` are present exactly when
/// `status` is [`ProcessingStatus::Ok`]; the constructors below are the only
/// way the pipeline builds results, which keeps that invariant in one place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The URL the article was requested from.
    #[serde(rename = "URL")]
    pub url: String,
    /// Terminal outcome classification.
    #[serde(rename = "Статус")]
    pub status: ProcessingStatus,
    /// Jaundice rate in percent, within `[0, 100]`.
    #[serde(rename = "Рейтинг", skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Number of normalized words the article yielded.
    #[serde(rename = "Слов в статье", skip_serializing_if = "Option::is_none")]
    pub words_count: Option<usize>,
    /// Wall-clock seconds spent in the analysis phase (excludes the fetch).
    #[serde(
        rename = "INFO:root",
        skip_serializing_if = "Option::is_none",
        serialize_with = "elapsed_report"
    )]
    pub elapsed_secs: Option<f64>,
}

impl AnalysisResult {
    /// Build a successful result carrying the score and its diagnostics.
    pub fn ok(url: impl Into<String>, rate: f64, words_count: usize, elapsed_secs: f64) -> Self {
        debug_assert!((0.0..=100.0).contains(&rate));
        Self {
            url: url.into(),
            status: ProcessingStatus::Ok,
            rate: Some(rate),
            words_count: Some(words_count),
            elapsed_secs: Some(elapsed_secs),
        }
    }

    /// Build a terminal failure result with no score attached.
    pub fn failed(url: impl Into<String>, status: ProcessingStatus) -> Self {
        debug_assert_ne!(status, ProcessingStatus::Ok);
        Self {
            url: url.into(),
            status,
            rate: None,
            words_count: None,
            elapsed_secs: None,
        }
    }
}

/// Serialize the elapsed time as the human-readable diagnostic line the
/// report format expects, e.g. `Анализ закончен за 1.82 сек`.
fn elapsed_report<S>(elapsed: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match elapsed {
        Some(secs) => serializer.serialize_str(&format!("Анализ закончен за {secs:.2} сек")),
        None => serializer.serialize_none(),
    }
}
