//! JSON report writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::ChatReport;
use crate::error::Result;

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "result": {
///     "Alice": {
///       "most_active_hour": "10",
///       "messages": 2,
///       "emojis": [["😀", 1.0]],
///       "avg_sentiment": null,
///       "most_used_words": [["hello", 2]]
///     }
///   }
/// }
/// ```
///
/// Undefined sentiment statistics are written as `null`, as is the
/// most-used-words ranking of an author with media messages. A `failures`
/// object appears only when some author could not be analysed.
pub fn write_json(report: &ChatReport, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
