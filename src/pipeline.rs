//! Per-article analysis orchestration and batch fan-out.
//!
//! One article moves through fetch -> sanitize -> tokenize -> score under
//! two time budgets: a fetch timeout and an analysis deadline. Every
//! anticipated failure is converted into a terminal [`AnalysisResult`] at
//! the article boundary; nothing propagates to the batch caller, so one
//! broken URL never affects its siblings.
//!
//! Batches fan out over a bounded number of concurrent workers while the
//! output preserves input order, one result per requested URL.

use crate::fetcher::Fetcher;
use crate::lexicon::ChargedLexicon;
use crate::models::{AnalysisResult, ProcessingStatus};
use crate::morph::Morphology;
use crate::sanitizer::{sanitize, ArticleNotFound, ExtractionRules};
use crate::scorer::calculate_jaundice_rate;
use crate::tokenizer::{split_by_words, TokenizeError};
use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Default cap on time spent fetching one article.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);
/// Default cap on time spent analyzing one fetched article.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(3);
/// Default number of articles analyzed concurrently.
pub const DEFAULT_FAN_OUT: usize = 4;

/// Per-article time budgets.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisBudgets {
    /// Wall-clock cap on the network fetch.
    pub fetch_timeout: Duration,
    /// Wall-clock cap on the analysis phase (sanitize + tokenize + score).
    pub analysis_timeout: Duration,
}

impl Default for AnalysisBudgets {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            analysis_timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }
}

/// Drive one article through the full pipeline, classifying every outcome.
///
/// The elapsed time reported on success covers the analysis phase only; the
/// fetch latency is excluded.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn process_article<F>(
    url: &str,
    fetcher: &F,
    morph: &dyn Morphology,
    lexicon: &ChargedLexicon,
    rules: &ExtractionRules,
    budgets: &AnalysisBudgets,
) -> AnalysisResult
where
    F: Fetcher,
{
    let html = match tokio::time::timeout(budgets.fetch_timeout, fetcher.fetch(url)).await {
        Ok(Ok(html)) => html,
        Ok(Err(e)) => {
            warn!(error = %e, "Fetch failed");
            return AnalysisResult::failed(url, ProcessingStatus::FetchError);
        }
        Err(_) => {
            warn!(timeout = ?budgets.fetch_timeout, "Fetch timed out");
            return AnalysisResult::failed(url, ProcessingStatus::Timeout);
        }
    };

    let started = Instant::now();

    let clean_text = match sanitize(&html, true, rules) {
        Ok(text) => text,
        Err(ArticleNotFound) => {
            warn!("No recognizable article body");
            return AnalysisResult::failed(url, ProcessingStatus::ParsingError);
        }
    };

    let deadline = Instant::now() + budgets.analysis_timeout;
    let words = match split_by_words(morph, &clean_text, deadline) {
        Ok(words) => words,
        Err(TokenizeError::DeadlineExceeded) => {
            warn!(timeout = ?budgets.analysis_timeout, "Analysis timed out");
            return AnalysisResult::failed(url, ProcessingStatus::Timeout);
        }
    };

    let rate = calculate_jaundice_rate(&words, lexicon);
    let elapsed = started.elapsed().as_secs_f64();
    info!(rate, words = words.len(), elapsed_secs = elapsed, "Article analyzed");

    AnalysisResult::ok(url, rate, words.len(), elapsed)
}

/// Analyze a batch of URLs with bounded parallel fan-out.
///
/// Results come back in input order regardless of completion order, one per
/// URL; duplicate URLs are treated as independent requests. A timeout or
/// failure cancels only the affected article's remaining work.
#[instrument(level = "info", skip_all, fields(batch = urls.len(), fan_out))]
pub async fn analyze<F>(
    urls: &[String],
    fetcher: &F,
    morph: &dyn Morphology,
    lexicon: &ChargedLexicon,
    rules: &ExtractionRules,
    budgets: &AnalysisBudgets,
    fan_out: usize,
) -> Vec<AnalysisResult>
where
    F: Fetcher,
{
    let article_futures: Vec<_> = urls
        .iter()
        .map(|url| process_article(url, fetcher, morph, lexicon, rules, budgets))
        .collect();
    let results: Vec<AnalysisResult> = stream::iter(article_futures)
        .buffered(fan_out.max(1))
        .collect()
        .await;

    let ok = results
        .iter()
        .filter(|r| r.status == ProcessingStatus::Ok)
        .count();
    info!(total = results.len(), ok, failed = results.len() - ok, "Batch analysis complete");

    debug_assert_eq!(results.len(), urls.len());
    results
}
