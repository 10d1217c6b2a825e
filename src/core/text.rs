//! Message-level text measures: media placeholders, URLs and word counts.

use std::collections::HashMap;

use crate::emoji::EmojiTable;

/// Checks whether a message body is a media placeholder such as
/// `<Media omitted>`.
pub fn is_media_placeholder(message: &str) -> bool {
    message.starts_with('<') && message.ends_with('>')
}

/// Counts the media placeholders among `messages`.
pub fn media_count<M: AsRef<str>>(messages: &[M]) -> usize {
    messages
        .iter()
        .filter(|message| is_media_placeholder(message.as_ref()))
        .count()
}

/// Returns every whitespace-delimited token starting with `http`, in order.
///
/// Repeated links are kept; nothing is deduplicated.
pub fn urls<M: AsRef<str>>(messages: &[M]) -> Vec<&str> {
    messages
        .iter()
        .flat_map(|message| message.as_ref().split_whitespace())
        .filter(|token| token.starts_with("http"))
        .collect()
}

/// Ranks the most frequent lowercase words across `messages`.
///
/// Returns `None` if *any* message is a media placeholder: a single media
/// message disables the ranking for the whole set. Otherwise messages are
/// emoji-stripped, lowercased and split on whitespace, and the `limit` most
/// frequent words are returned. Equal counts keep first-seen order.
///
/// # Example
///
/// ```rust
/// use chatstats::core::text::top_words;
/// use chatstats::emoji::EmojiTable;
///
/// let table = EmojiTable::standard();
/// let ranking = top_words(&["Hello world", "hello 👋"], 5, table);
/// assert_eq!(
///     ranking,
///     Some(vec![("hello".to_string(), 2), ("world".to_string(), 1)])
/// );
///
/// assert_eq!(top_words(&["hi", "<Media omitted>"], 5, table), None);
/// ```
pub fn top_words<M: AsRef<str>>(
    messages: &[M],
    limit: usize,
    table: &EmojiTable,
) -> Option<Vec<(String, usize)>> {
    if messages
        .iter()
        .any(|message| is_media_placeholder(message.as_ref()))
    {
        return None;
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for message in messages {
        let text = table.strip(message.as_ref()).to_lowercase();
        for word in text.split_whitespace() {
            match positions.get(word) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    Some(counts)
}
