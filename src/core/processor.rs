//! Aggregation of a raw chat log into per-author statistics.
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::aggregate;
//!
//! let log = "26.10.24, 10:00 - Alice: hello world 😀\n\
//!            26.10.24, 10:05 - Alice: hello again\n\
//!            26.10.24, 11:00 - Bob: <Media omitted>";
//!
//! let report = aggregate(log)?;
//! let alice = report.get("Alice").unwrap();
//! assert_eq!(alice.messages, 2);
//! assert_eq!(alice.most_active_hour, "10");
//! assert_eq!(report.get("Bob").unwrap().most_used_words, None);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use tracing::{debug, warn};

use super::models::{AuthorStatistics, ChatReport};
use super::stats::{emoji_frequencies, format_hour, mean, most_active_hour, std_dev};
use super::text::{media_count, top_words, urls};
use crate::config::AnalyzerConfig;
use crate::emoji::EmojiTable;
use crate::error::{ChatstatsError, Result};
use crate::parsing::whatsapp::{extract_authors, hours_of, messages_of};
use crate::sentiment::{SentimentScorer, VaderScorer, score};

/// Analyses a raw log with the default configuration and VADER scorer.
///
/// Every line is analysed; strip the export header first, or use
/// [`analyze_export`].
pub fn aggregate(raw_log: &str) -> Result<ChatReport> {
    aggregate_with(raw_log, &AnalyzerConfig::default(), &VaderScorer::new())
}

/// Analyses a raw log with a custom configuration and sentiment scorer.
pub fn aggregate_with<S>(raw_log: &str, config: &AnalyzerConfig, scorer: &S) -> Result<ChatReport>
where
    S: SentimentScorer + ?Sized,
{
    let lines: Vec<&str> = raw_log.lines().collect();
    aggregate_lines(&lines, config, scorer)
}

/// Analyses a complete export file's contents.
///
/// Drops the leading header line when [`AnalyzerConfig::skip_header`] is set,
/// then behaves like [`aggregate_with`] with the VADER scorer.
pub fn analyze_export(export: &str, config: &AnalyzerConfig) -> Result<ChatReport> {
    let skip = usize::from(config.skip_header);
    let lines: Vec<&str> = export.lines().skip(skip).collect();
    aggregate_lines(&lines, config, &VaderScorer::new())
}

/// Analyses already-split lines.
///
/// An unreadable hour aborts the whole call. Authors without any attributed
/// message are recorded in [`ChatReport::failures`] and the remaining authors
/// are still analysed.
pub fn aggregate_lines<S>(lines: &[&str], config: &AnalyzerConfig, scorer: &S) -> Result<ChatReport>
where
    S: SentimentScorer + ?Sized,
{
    let table = EmojiTable::standard();
    let mut report = ChatReport::new();

    for author in extract_authors(lines, config.date_separator) {
        match aggregate_author(lines, &author, config, scorer, table) {
            Ok(stats) => {
                report.result.insert(author, stats);
            }
            Err(err @ ChatstatsError::EmptyMessageSet { .. }) => {
                warn!(author = %author, "skipping author: {err}");
                report.failures.insert(author, err.to_string());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

/// Computes the statistics of a single author.
pub fn aggregate_author<S>(
    lines: &[&str],
    author: &str,
    config: &AnalyzerConfig,
    scorer: &S,
    table: &EmojiTable,
) -> Result<AuthorStatistics>
where
    S: SentimentScorer + ?Sized,
{
    let hours = hours_of(lines, author)?;
    let messages = messages_of(lines, author);

    let Some(hour) = most_active_hour(&hours) else {
        return Err(ChatstatsError::empty_message_set(author));
    };
    if messages.is_empty() {
        return Err(ChatstatsError::empty_message_set(author));
    }

    let characters: usize = messages.iter().map(|m| m.chars().count()).sum();

    let used_emojis: Vec<&str> = messages
        .iter()
        .flat_map(|message| table.extract(message))
        .collect();

    let sentiments: Vec<f64> = score(&messages, config.amplify, scorer, table)
        .into_iter()
        .filter(|&s| s != 0.0)
        .collect();

    let stats = AuthorStatistics {
        most_active_hour: format_hour(hour),
        messages: messages.len(),
        characters,
        avg_msg_length: characters as f64 / messages.len() as f64,
        emojis: emoji_frequencies(&used_emojis),
        media_count: media_count(&messages),
        url_count: urls(&messages).len(),
        avg_sentiment: mean(&sentiments),
        std_sentiment: std_dev(&sentiments),
        balance_sentiment: sentiments.iter().sum(),
        most_used_words: top_words(&messages, config.top_words, table),
    };

    debug!(
        author,
        messages = stats.messages,
        emojis = used_emojis.len(),
        scored = sentiments.len(),
        "aggregated author"
    );

    Ok(stats)
}
