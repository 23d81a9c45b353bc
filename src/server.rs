//! HTTP entry point for batch analysis.
//!
//! One route: `GET /?urls=<comma-separated list>`. At most
//! [`MAX_URLS_PER_REQUEST`] URLs are accepted per request; a missing or
//! empty list is a request-level error. A well-formed request always gets a
//! complete result list back, one entry per requested URL in request order,
//! regardless of per-article failures.

use crate::fetcher::{Fetcher, ReqwestFetcher};
use crate::lexicon::ChargedLexicon;
use crate::morph::Morphology;
use crate::pipeline::{self, AnalysisBudgets};
use crate::sanitizer::ExtractionRules;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Hard cap on URLs accepted in a single request.
pub const MAX_URLS_PER_REQUEST: usize = 10;

/// Everything a request handler needs, built once at startup and shared
/// read-only across requests.
///
/// Generic over the fetch capability so tests can drive the handlers with
/// canned fetchers; production uses the [`ReqwestFetcher`] default.
pub struct AppState<F: Fetcher = ReqwestFetcher> {
    pub fetcher: F,
    pub morph: Arc<dyn Morphology>,
    pub lexicon: ChargedLexicon,
    pub rules: ExtractionRules,
    pub budgets: AnalysisBudgets,
    pub fan_out: usize,
}

/// Request-level malformations; per-article failures are never one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchRequestError {
    #[error("No links for analysis")]
    NoLinks,
    #[error("too many urls in request, should be 10 or less")]
    TooManyUrls,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub urls: Option<String>,
}

/// Split and validate the raw `urls` query value.
///
/// Entries are comma-separated and trimmed; empty entries are dropped. A
/// missing parameter or a list with no usable entries is [`BatchRequestError::NoLinks`].
pub fn parse_urls(raw: Option<&str>) -> Result<Vec<String>, BatchRequestError> {
    let raw = raw.ok_or(BatchRequestError::NoLinks)?;
    let urls: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect();

    if urls.is_empty() {
        return Err(BatchRequestError::NoLinks);
    }
    if urls.len() > MAX_URLS_PER_REQUEST {
        return Err(BatchRequestError::TooManyUrls);
    }
    Ok(urls)
}

/// Build the application router.
pub fn router<F>(state: Arc<AppState<F>>) -> Router
where
    F: Fetcher + 'static,
{
    Router::new()
        .route("/", get(handle_analyze::<F>))
        .with_state(state)
}

#[instrument(level = "info", skip_all)]
async fn handle_analyze<F>(
    State(state): State<Arc<AppState<F>>>,
    Query(query): Query<AnalyzeQuery>,
) -> (StatusCode, Json<Value>)
where
    F: Fetcher + 'static,
{
    let urls = match parse_urls(query.urls.as_deref()) {
        Ok(urls) => urls,
        Err(error @ BatchRequestError::TooManyUrls) => {
            info!(%error, "Rejected oversized batch");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string(), "status": 400 })),
            );
        }
        Err(error @ BatchRequestError::NoLinks) => {
            info!(%error, "Rejected empty batch");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string() })),
            );
        }
    };

    info!(count = urls.len(), "Analyzing batch");
    let results = pipeline::analyze(
        &urls,
        &state.fetcher,
        state.morph.as_ref(),
        &state.lexicon,
        &state.rules,
        &state.budgets,
        state.fan_out,
    )
    .await;

    (StatusCode::OK, Json(json!({ "analyze results": results })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchError;
    use crate::morph::DictionaryMorph;

    const ARTICLE_HTML: &str = "<html><body><article>\
        <p>Это стало настоящим скандалом</p></article></body></html>";

    /// Serves the same canned page for every URL, or fails every fetch.
    struct CannedFetcher {
        html: Option<&'static str>,
    }

    impl Fetcher for CannedFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            match self.html {
                Some(html) => Ok(html.to_string()),
                // Any fetch error kind will do; the pipeline only classifies it.
                None => Err(url::ParseError::EmptyHost.into()),
            }
        }
    }

    fn test_state(html: Option<&'static str>) -> Arc<AppState<CannedFetcher>> {
        Arc::new(AppState {
            fetcher: CannedFetcher { html },
            morph: Arc::new(DictionaryMorph::from_pairs([
                ("стало", "стать"),
                ("скандалом", "скандал"),
            ])),
            lexicon: ChargedLexicon::from_words(["скандал"]),
            rules: ExtractionRules::default(),
            budgets: AnalysisBudgets::default(),
            fan_out: 2,
        })
    }

    async fn call(
        state: Arc<AppState<CannedFetcher>>,
        urls: Option<&str>,
    ) -> (StatusCode, Value) {
        let query = AnalyzeQuery {
            urls: urls.map(String::from),
        };
        let (status, Json(body)) = handle_analyze(State(state), Query(query)).await;
        (status, body)
    }

    #[test]
    fn test_parse_urls_splits_and_trims() {
        let urls = parse_urls(Some("https://a.ru/1, https://b.ru/2 ,https://c.ru/3")).unwrap();
        assert_eq!(urls, ["https://a.ru/1", "https://b.ru/2", "https://c.ru/3"]);
    }

    #[test]
    fn test_missing_urls_is_no_links() {
        assert_eq!(parse_urls(None).unwrap_err(), BatchRequestError::NoLinks);
    }

    #[test]
    fn test_empty_urls_is_no_links() {
        assert_eq!(parse_urls(Some("")).unwrap_err(), BatchRequestError::NoLinks);
        assert_eq!(parse_urls(Some(" , ,")).unwrap_err(), BatchRequestError::NoLinks);
    }

    #[test]
    fn test_eleven_urls_is_too_many() {
        let raw = (0..11)
            .map(|i| format!("https://example.com/{i}"))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(parse_urls(Some(&raw)).unwrap_err(), BatchRequestError::TooManyUrls);
    }

    #[test]
    fn test_exactly_ten_urls_is_accepted() {
        let raw = (0..10)
            .map(|i| format!("https://example.com/{i}"))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(parse_urls(Some(&raw)).unwrap().len(), 10);
    }

    #[test]
    fn test_duplicate_urls_are_kept() {
        let urls = parse_urls(Some("https://a.ru/1,https://a.ru/1")).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_error_messages_match_report_format() {
        assert_eq!(
            BatchRequestError::TooManyUrls.to_string(),
            "too many urls in request, should be 10 or less"
        );
        assert_eq!(BatchRequestError::NoLinks.to_string(), "No links for analysis");
    }

    #[tokio::test]
    async fn test_handler_rejects_oversized_batch_with_400_payload() {
        let raw = (0..11)
            .map(|i| format!("https://example.com/{i}"))
            .collect::<Vec<_>>()
            .join(",");

        let (status, body) = call(test_state(None), Some(&raw)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "too many urls in request, should be 10 or less");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_handler_rejects_missing_urls_with_no_links_payload() {
        let (status, body) = call(test_state(None), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No links for analysis");
        assert!(body.get("status").is_none());
    }

    #[tokio::test]
    async fn test_handler_rejects_blank_urls_with_no_links_payload() {
        let (status, body) = call(test_state(None), Some(" , ")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No links for analysis");
    }

    #[tokio::test]
    async fn test_handler_wraps_results_in_analyze_results_envelope() {
        let (status, body) =
            call(test_state(Some(ARTICLE_HTML)), Some("https://news.ru/good")).await;

        assert_eq!(status, StatusCode::OK);
        let results = body["analyze results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["URL"], "https://news.ru/good");
        assert_eq!(results[0]["Статус"], "OK");
        // Tokens: это, стать, настоящим, скандал; one of four is charged.
        assert_eq!(results[0]["Рейтинг"], 25.0);
        assert_eq!(results[0]["Слов в статье"], 4);
    }

    #[tokio::test]
    async fn test_handler_reports_article_failures_inside_envelope() {
        let (status, body) = call(test_state(None), Some("https://news.ru/broken")).await;

        assert_eq!(status, StatusCode::OK);
        let results = body["analyze results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["Статус"], "FETCH_ERROR");
        assert!(results[0].get("Рейтинг").is_none());
    }
}
