//! Jaundice-rate scoring over normalized tokens.

use crate::lexicon::ChargedLexicon;

/// Percentage of `words` found in the charged-word lexicon, rounded to two
/// decimal places. An empty token sequence scores exactly `0.0`.
pub fn calculate_jaundice_rate(words: &[String], lexicon: &ChargedLexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let charged = words.iter().filter(|word| lexicon.contains(word)).count();
    let score = charged as f64 / words.len() as f64 * 100.0;
    (score * 100.0).round() / 100.0
}
