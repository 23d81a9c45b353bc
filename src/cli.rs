//! Command-line interface definitions for the jaundice-rate server.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Most options can be provided via command-line flags or environment
//! variables.

use clap::Parser;

/// Command-line arguments for the jaundice-rate analysis server.
///
/// # Examples
///
/// ```sh
/// # Defaults: bind 127.0.0.1:8080, word lists from ./charged_dict
/// jaundice_rate
///
/// # Custom bind address and lemma dictionary
/// jaundice_rate -b 0.0.0.0:8888 --lemmas ./lemmas.tsv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Address to bind the HTTP server to (host:port)
    #[arg(short, long, env = "JAUNDICE_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Newline-delimited charged-word list files, merged into one lexicon
    #[arg(
        short = 'w',
        long = "charged-words",
        num_args = 1..,
        default_values_t = [
            String::from("charged_dict/negative_words.txt"),
            String::from("charged_dict/positive_words.txt"),
        ]
    )]
    pub charged_words: Vec<String>,

    /// Optional tab-separated `surface<TAB>lemma` dictionary; without it,
    /// normalization falls back to lowercasing
    #[arg(long, env = "JAUNDICE_LEMMAS")]
    pub lemmas: Option<String>,

    /// CSS selector locating the article body
    #[arg(long, default_value = "article")]
    pub article_selector: String,

    /// Per-article fetch timeout in seconds
    #[arg(long, default_value_t = 5.0)]
    pub fetch_timeout: f64,

    /// Per-article analysis timeout in seconds
    #[arg(long, default_value_t = 3.0)]
    pub analysis_timeout: f64,

    /// How many articles to analyze concurrently
    #[arg(long, default_value_t = 4)]
    pub fan_out: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["jaundice_rate"]);

        assert_eq!(cli.bind, "127.0.0.1:8080");
        assert_eq!(
            cli.charged_words,
            [
                "charged_dict/negative_words.txt",
                "charged_dict/positive_words.txt"
            ]
        );
        assert_eq!(cli.article_selector, "article");
        assert_eq!(cli.fetch_timeout, 5.0);
        assert_eq!(cli.analysis_timeout, 3.0);
        assert_eq!(cli.fan_out, 4);
        assert!(cli.lemmas.is_none());
    }

    #[test]
    fn test_cli_word_list_override() {
        let cli = Cli::parse_from([
            "jaundice_rate",
            "-w",
            "/tmp/negative.txt",
            "/tmp/positive.txt",
            "-b",
            "0.0.0.0:9000",
        ]);

        assert_eq!(cli.charged_words, ["/tmp/negative.txt", "/tmp/positive.txt"]);
        assert_eq!(cli.bind, "0.0.0.0:9000");
    }
}
