//! Output records produced by the aggregator.

use std::collections::BTreeMap;

use serde::Serialize;

/// Statistics for a single author.
///
/// Sentiment statistics are computed over non-zero scores only. When an
/// author has none, `avg_sentiment` and `std_sentiment` are `NaN` (JSON
/// `null`) while `balance_sentiment` is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorStatistics {
    /// Hour with the most messages, zero-padded (`"09"`)
    pub most_active_hour: String,
    /// Number of messages
    pub messages: usize,
    /// Total length of the trimmed raw bodies, in code points
    pub characters: usize,
    /// `characters / messages`
    pub avg_msg_length: f64,
    /// `(emoji, share of all emoji occurrences)`, most frequent first
    pub emojis: Vec<(String, f64)>,
    /// Number of media placeholder messages
    pub media_count: usize,
    /// Number of tokens starting with `http`
    pub url_count: usize,
    /// Mean of the non-zero sentiment scores
    pub avg_sentiment: f64,
    /// Population standard deviation of the non-zero sentiment scores
    pub std_sentiment: f64,
    /// Sum of the non-zero sentiment scores
    pub balance_sentiment: f64,
    /// Top words with counts; `None` if any message is a media placeholder
    pub most_used_words: Option<Vec<(String, usize)>>,
}

impl AuthorStatistics {
    /// Returns `true` if no message of this author carried sentiment.
    pub fn sentiment_undefined(&self) -> bool {
        self.avg_sentiment.is_nan()
    }
}

/// Result of analysing one chat log.
///
/// Authors are kept in lexicographic order. Authors that were recognised but
/// could not be analysed end up in `failures` with the reason, instead of
/// failing the whole report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatReport {
    /// Statistics per author
    pub result: BTreeMap<String, AuthorStatistics>,
    /// Reason per author that could not be analysed
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<String, String>,
}

impl ChatReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistics of `author`, if it was analysed.
    pub fn get(&self, author: &str) -> Option<&AuthorStatistics> {
        self.result.get(author)
    }

    /// Iterates over the analysed author names in sorted order.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.result.keys().map(String::as_str)
    }

    /// Number of analysed authors.
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// Returns `true` if no author was analysed.
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}
