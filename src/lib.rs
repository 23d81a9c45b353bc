//! # Jaundice Rate
//!
//! An analysis service that scores news articles for emotionally and
//! politically charged vocabulary. For each requested URL the article HTML
//! is fetched, stripped down to plain text, split into normalized word
//! tokens and scored against a charged-word lexicon; the "jaundice rate" is
//! the percentage of tokens found in the lexicon.
//!
//! ## Architecture
//!
//! The per-article pipeline runs in four stages:
//! 1. **Fetch**: download the page under a bounded timeout ([`fetcher`])
//! 2. **Sanitize**: locate the article body and strip markup ([`sanitizer`])
//! 3. **Tokenize**: split into normalized word tokens under a deadline
//!    ([`tokenizer`], [`morph`])
//! 4. **Score**: rate the tokens against the lexicon ([`scorer`], [`lexicon`])
//!
//! The orchestrator ([`pipeline`]) fans a batch out over a bounded number
//! of concurrent workers, classifies every per-article failure into a
//! terminal status and returns results in request order. The HTTP surface
//! ([`server`]) exposes one `GET /?urls=...` route for batches of up to
//! ten URLs.
//!
//! Both the fetch and the morphological normalization are injected
//! capabilities behind traits, so tests run the full pipeline against
//! deterministic stubs.

pub mod cli;
pub mod fetcher;
pub mod lexicon;
pub mod models;
pub mod morph;
pub mod pipeline;
pub mod sanitizer;
pub mod scorer;
pub mod server;
pub mod tokenizer;
