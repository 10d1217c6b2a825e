//! Line-level heuristics for WhatsApp-style text exports.
//!
//! An export is a sequence of lines shaped like
//! `26.10.24, 20:40 - Alice: message`. Nothing here is a strict parser:
//! recognising authors is best effort and never fails, while slicing a known
//! author's hours is strict (see [`hours_of`]).

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{ChatstatsError, Result};

/// Checks whether `line` has the delimiter shape of an author line.
///
/// The line needs at least two `:`, at least one `-` and at least two
/// `date_separator` characters, and the first separator must come before the
/// first `:`, which must come before the first `-`.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::whatsapp::is_author_line;
///
/// assert!(is_author_line("26.10.24, 20:40 - Alice: hi", '.'));
/// assert!(is_author_line("1/15/24, 10:30 - Bob: hi", '/'));
/// assert!(!is_author_line("just a continuation line", '.'));
/// ```
pub fn is_author_line(line: &str, date_separator: char) -> bool {
    if line.matches(':').count() < 2 || line.matches(date_separator).count() < 2 {
        return false;
    }

    match (line.find(date_separator), line.find(':'), line.find('-')) {
        (Some(separator), Some(colon), Some(dash)) => separator < colon && colon < dash,
        _ => false,
    }
}

/// Extracts the author name from an author line.
///
/// The name is whatever sits between the first `-` and the next `:`,
/// trimmed, so hyphenated names like `Jean-Luc` stay whole. Returns `None`
/// for lines that fail [`is_author_line`] or whose name is blank.
pub fn author_of(line: &str, date_separator: char) -> Option<&str> {
    if !is_author_line(line, date_separator) {
        return None;
    }

    let dash = line.find('-')?;
    let rest = &line[dash + 1..];
    let name = rest.split(':').next().unwrap_or(rest).trim();

    if name.is_empty() { None } else { Some(name) }
}

/// Collects the distinct authors of a log, sorted lexicographically.
///
/// Lines that don't look like author lines are skipped silently.
pub fn extract_authors(lines: &[&str], date_separator: char) -> Vec<String> {
    let mut skipped = 0usize;
    let mut authors = BTreeSet::new();

    for line in lines {
        match author_of(line, date_separator) {
            Some(name) => {
                authors.insert(name.to_string());
            }
            None => skipped += 1,
        }
    }

    debug!(authors = authors.len(), skipped, "extracted authors");
    authors.into_iter().collect()
}

/// Checks whether `line` is attributed to `author`.
///
/// The line must contain at least one `:`, and `author` must occur in the
/// first two `:`-delimited segments joined together. This is a substring
/// test, so an author named `Al` also claims lines written by `Alice`.
pub fn belongs_to(line: &str, author: &str) -> bool {
    let mut segments = line.splitn(3, ':');
    let (Some(first), Some(second)) = (segments.next(), segments.next()) else {
        return false;
    };

    let mut head = String::with_capacity(first.len() + second.len());
    head.push_str(first);
    head.push_str(second);
    head.contains(author)
}

/// Returns the message bodies of `author`, in log order.
///
/// The body is everything after the second `:`, trimmed. A line with a
/// single `:` contributes an empty body.
pub fn messages_of(lines: &[&str], author: &str) -> Vec<String> {
    lines
        .iter()
        .filter(|line| belongs_to(line, author))
        .map(|line| body_of(line).to_string())
        .collect()
}

/// Returns the hour of every line attributed to `author`, in log order.
///
/// The hour is the part before the first `:` of the line's second
/// whitespace-delimited field, which in `date, HH:MM - name: text` is the
/// time. Unlike author extraction this fails fast: one unreadable hour
/// aborts with [`ChatstatsError::HourParse`].
pub fn hours_of(lines: &[&str], author: &str) -> Result<Vec<u8>> {
    let mut hours = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if belongs_to(line, author) {
            hours.push(hour_of(line).ok_or_else(|| {
                let token = line.split_whitespace().nth(1).unwrap_or_default();
                ChatstatsError::hour_parse(index + 1, token)
            })?);
        }
    }

    Ok(hours)
}

fn body_of(line: &str) -> &str {
    line.splitn(3, ':').nth(2).unwrap_or_default().trim()
}

fn hour_of(line: &str) -> Option<u8> {
    let token = line.split_whitespace().nth(1)?;
    let hour: u8 = token.split(':').next()?.trim().parse().ok()?;
    (hour < 24).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &[&str] = &[
        "26.10.24, 20:40 - Alice: Hello",
        "26.10.24, 20:41 - Bob: Hi there",
        "26.10.24, 21:02 - Alice: see https://example.com",
        "and a continuation line",
    ];

    #[test]
    fn test_author_line_shape() {
        assert!(is_author_line("26.10.24, 20:40 - Alice: Hello", '.'));
        // Separator count
        assert!(!is_author_line("26/10/24, 20:40 - Alice: Hello", '.'));
        // Only one colon
        assert!(!is_author_line("26.10.24, 20 - Alice: Hello", '.'));
        // No dash at all
        assert!(!is_author_line("26.10.24, 20:40 Alice: Hello", '.'));
    }

    #[test]
    fn test_author_line_ordering() {
        // Colon before the first separator
        assert!(!is_author_line("20:40 26.10.24 - Alice: Hello", '.'));
        // Dash before the first colon
        assert!(!is_author_line("26.10.24 - 20:40, Alice: Hello", '.'));
    }

    #[test]
    fn test_author_of() {
        assert_eq!(author_of("26.10.24, 20:40 - Alice: Hello", '.'), Some("Alice"));
        assert_eq!(
            author_of("26.10.24, 20:40 -  Jean-Luc Picard : Engage", '.'),
            Some("Jean-Luc Picard")
        );
        assert_eq!(author_of("26.10.24, 20:40 - : blank", '.'), None);
        assert_eq!(author_of("garbage", '.'), None);
    }

    #[test]
    fn test_extract_authors_sorted_and_unique() {
        let lines = [
            "26.10.24, 20:40 - Zed: one",
            "26.10.24, 20:41 - Alice: two",
            "26.10.24, 20:42 - Zed: three",
            "not a line",
            "",
        ];
        assert_eq!(extract_authors(&lines, '.'), vec!["Alice", "Zed"]);
    }

    #[test]
    fn test_extract_authors_empty() {
        assert!(extract_authors(&[], '.').is_empty());
    }

    #[test]
    fn test_belongs_to() {
        assert!(belongs_to(LOG[0], "Alice"));
        assert!(!belongs_to(LOG[1], "Alice"));
        assert!(!belongs_to(LOG[3], "Alice"));
        // Substring semantics
        assert!(belongs_to(LOG[0], "Ali"));
    }

    #[test]
    fn test_messages_of_keeps_everything_after_second_colon() {
        let messages = messages_of(LOG, "Alice");
        assert_eq!(messages, vec!["Hello", "see https://example.com"]);
    }

    #[test]
    fn test_messages_of_single_colon_line_is_empty_body() {
        let lines = ["26.10.24, 20:40 - Alice says hi"];
        assert_eq!(messages_of(&lines, "40 - Alice"), vec![String::new()]);
    }

    #[test]
    fn test_hours_of() {
        assert_eq!(hours_of(LOG, "Alice").unwrap(), vec![20, 21]);
        assert_eq!(hours_of(LOG, "Bob").unwrap(), vec![20]);
        assert!(hours_of(LOG, "Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_hours_of_fails_fast() {
        let lines = [
            "26.10.24, 20:40 - Alice: fine",
            "Alice: no time here",
        ];
        let err = hours_of(&lines, "Alice").unwrap_err();
        match err {
            ChatstatsError::HourParse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "no");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hours_of_rejects_out_of_range() {
        let lines = ["26.10.24, 27:40 - Alice: late"];
        assert!(hours_of(&lines, "Alice").unwrap_err().is_hour_parse());
    }
}
