//! Server binary: load the lexicon and morphology once, then serve the
//! batch analysis API.

use clap::Parser;
use jaundice_rate::cli::Cli;
use jaundice_rate::fetcher::ReqwestFetcher;
use jaundice_rate::lexicon::ChargedLexicon;
use jaundice_rate::morph::{DictionaryMorph, LowercaseMorph, Morphology};
use jaundice_rate::pipeline::AnalysisBudgets;
use jaundice_rate::sanitizer::ExtractionRules;
use jaundice_rate::server::{self, AppState};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("jaundice_rate starting up");

    let args = Cli::parse();
    debug!(?args.bind, ?args.charged_words, ?args.lemmas, "Parsed CLI arguments");

    let lexicon = ChargedLexicon::from_files(&args.charged_words).await?;
    if lexicon.is_empty() {
        warn!("Charged-word lexicon is empty; every article will score 0.0");
    }

    let morph: Arc<dyn Morphology> = match &args.lemmas {
        Some(path) => Arc::new(DictionaryMorph::from_file(path).await?),
        None => {
            warn!("No lemma dictionary configured; falling back to lowercase normalization");
            Arc::new(LowercaseMorph)
        }
    };

    let rules = ExtractionRules::new(&args.article_selector, ["script", "time"])?;
    let budgets = AnalysisBudgets {
        fetch_timeout: Duration::from_secs_f64(args.fetch_timeout),
        analysis_timeout: Duration::from_secs_f64(args.analysis_timeout),
    };

    let state = Arc::new(AppState {
        fetcher: ReqwestFetcher::new(),
        morph,
        lexicon,
        rules,
        budgets,
        fan_out: args.fan_out,
    });

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(addr = %args.bind, "Listening");
    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
