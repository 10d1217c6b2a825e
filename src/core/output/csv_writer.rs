//! CSV report writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{AuthorStatistics, ChatReport};
use crate::error::Result;

const HEADER: [&str; 12] = [
    "Author",
    "MostActiveHour",
    "Messages",
    "Characters",
    "AvgMsgLength",
    "Emojis",
    "MediaCount",
    "UrlCount",
    "AvgSentiment",
    "StdSentiment",
    "BalanceSentiment",
    "MostUsedWords",
];

/// Writes a report to CSV with semicolon delimiter, one row per author.
///
/// # Format
/// - Delimiter: `;`
/// - Emojis: space-separated `emoji=share` pairs, e.g. `😀=0.7500 🔥=0.2500`
/// - MostUsedWords: space-separated `word=count` pairs
/// - Undefined sentiment statistics and a suppressed word ranking are empty
///   cells
/// - Authors listed in `failures` are not written
pub fn write_csv(report: &ChatReport, output_path: &str) -> Result<()> {
    let csv = to_csv(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts a report to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for (author, stats) in &report.result {
        writer.write_record(build_record(author, stats))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build CSV record for a single author.
fn build_record(author: &str, stats: &AuthorStatistics) -> Vec<String> {
    let emojis = stats
        .emojis
        .iter()
        .map(|(emoji, share)| format!("{emoji}={share:.4}"))
        .collect::<Vec<_>>()
        .join(" ");

    let words = stats
        .most_used_words
        .as_ref()
        .map(|words| {
            words
                .iter()
                .map(|(word, count)| format!("{word}={count}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    vec![
        author.to_string(),
        stats.most_active_hour.clone(),
        stats.messages.to_string(),
        stats.characters.to_string(),
        format!("{:.2}", stats.avg_msg_length),
        emojis,
        stats.media_count.to_string(),
        stats.url_count.to_string(),
        format_float(stats.avg_sentiment),
        format_float(stats.std_sentiment),
        format_float(stats.balance_sentiment),
        words,
    ]
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value:.4}")
    }
}
