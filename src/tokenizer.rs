//! Splitting clean text into normalized word tokens.
//!
//! Accounts for punctuation, letter case and word forms; drops prepositions
//! and other short function words. The one exception is the negation word
//! "не", which carries semantic weight despite its length and is kept.

use crate::morph::Morphology;
use std::time::Instant;
use thiserror::Error;

/// The short negation word kept despite the length filter.
pub const NEGATION_WORD: &str = "не";

/// Quotation and ellipsis marks deleted outright, wherever they appear.
const DELETED_MARKS: [char; 5] = ['«', '»', '…', '“', '”'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// The wall-clock deadline expired before the text was tokenized.
    #[error("tokenizing exceeded its time budget")]
    DeadlineExceeded,
}

/// Delete quotation/ellipsis marks, then trim punctuation from both ends.
///
/// Only leading and trailing punctuation is trimmed; interior marks such as
/// the hyphen in "во-первых" survive.
fn clean_word(word: &str) -> String {
    let without_marks: String = word.chars().filter(|c| !DELETED_MARKS.contains(c)).collect();
    without_marks
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Split `text` on whitespace, normalize every candidate and keep the
/// meaningful ones, preserving order.
///
/// A normalized form is kept when it is longer than two characters or is
/// exactly [`NEGATION_WORD`]. The whole pass is bounded by `deadline`;
/// crossing it fails with [`TokenizeError::DeadlineExceeded`] rather than
/// returning a partial sequence.
pub fn split_by_words(
    morph: &dyn Morphology,
    text: &str,
    deadline: Instant,
) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    for candidate in text.split_whitespace() {
        if Instant::now() >= deadline {
            return Err(TokenizeError::DeadlineExceeded);
        }
        let cleaned = clean_word(candidate);
        if cleaned.is_empty() {
            continue;
        }
        let normalized = morph.normal_form(&cleaned);
        if normalized.chars().count() > 2 || normalized == NEGATION_WORD {
            words.push(normalized);
        }
    }
    Ok(words)
}
