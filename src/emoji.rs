//! Emoji classification, extraction and stripping.
//!
//! Classification is a fixed table of code-point ranges. An *emoji run* is a
//! maximal sequence of consecutive classified code points, so `👍🏽` (base +
//! skin tone) and ZWJ sequences like `👨‍👩‍👧` come out as one token.
//!
//! The standard table is compiled once and shared:
//!
//! ```rust
//! use chatstats::emoji::EmojiTable;
//!
//! let table = EmojiTable::standard();
//! assert_eq!(table.extract("nice 👍🏽 work 🎉"), vec!["👍🏽", "🎉"]);
//! assert_eq!(table.strip("nice 👍🏽 work 🎉"), "nice  work ");
//! ```

use std::borrow::Cow;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

/// Skin-tone modifiers (Fitzpatrick types 1-2 to 6).
pub const SKIN_TONE_MODIFIERS: RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Code-point ranges treated as emoji.
pub const STANDARD_RANGES: &[RangeInclusive<char>] = &[
    '\u{1F600}'..='\u{1F64F}', // Emoticons
    '\u{1F300}'..='\u{1F5FF}', // Symbols & pictographs
    '\u{1F680}'..='\u{1F6FF}', // Transport & map
    '\u{1F700}'..='\u{1F77F}', // Alchemical
    '\u{1F780}'..='\u{1F7FF}', // Geometric shapes extended
    '\u{1F800}'..='\u{1F8FF}', // Supplemental arrows-C
    '\u{1F900}'..='\u{1F9FF}', // Supplemental symbols & pictographs
    '\u{1FA00}'..='\u{1FA6F}', // Chess
    '\u{1FA70}'..='\u{1FAFF}', // Symbols & pictographs extended-A
    '\u{1F170}'..='\u{1F251}', // Enclosed alphanumerics/ideographs, regional indicators
    '\u{2702}'..='\u{27B0}',   // Dingbats
    '\u{2600}'..='\u{26FF}',   // Miscellaneous symbols
    '\u{200D}'..='\u{200D}',   // Zero width joiner
    '\u{FE0F}'..='\u{FE0F}',   // Variation selector-16
    '\u{2122}'..='\u{2122}',
    '\u{231A}'..='\u{231B}',
    '\u{23CF}'..='\u{23CF}',
    '\u{23E9}'..='\u{23EF}',
    '\u{23F0}'..='\u{23F0}',
    '\u{23F3}'..='\u{23F3}',
    '\u{24C2}'..='\u{24C2}',
    '\u{25AA}'..='\u{25AB}',
    '\u{25B6}'..='\u{25B6}',
    '\u{25C0}'..='\u{25C0}',
    '\u{25FB}'..='\u{25FE}',
    '\u{2934}'..='\u{2935}',
    '\u{2B05}'..='\u{2B07}',
    '\u{2B1B}'..='\u{2B1C}',
    '\u{2B50}'..='\u{2B50}',
    '\u{2B55}'..='\u{2B55}',
    '\u{3030}'..='\u{3030}',
    '\u{303D}'..='\u{303D}',
    '\u{3297}'..='\u{3297}',
    '\u{3299}'..='\u{3299}',
];

static STANDARD: LazyLock<EmojiTable> = LazyLock::new(|| EmojiTable::new(STANDARD_RANGES));

/// Returns `true` for skin-tone modifier code points.
pub fn is_skin_tone_modifier(c: char) -> bool {
    SKIN_TONE_MODIFIERS.contains(&c)
}

/// Immutable emoji classification table.
///
/// Holds the ranges and a regex matching runs of them. Build custom tables
/// with [`EmojiTable::new`]; most callers want [`EmojiTable::standard`].
#[derive(Debug, Clone)]
pub struct EmojiTable {
    ranges: Vec<RangeInclusive<char>>,
    runs: Regex,
}

impl EmojiTable {
    /// Compiles a table from code-point ranges.
    pub fn new(ranges: &[RangeInclusive<char>]) -> Self {
        let mut class = String::from("[");
        for range in ranges {
            class.push_str(&format!(
                "\\x{{{:X}}}-\\x{{{:X}}}",
                u32::from(*range.start()),
                u32::from(*range.end())
            ));
        }
        class.push_str("]+");

        Self {
            ranges: ranges.to_vec(),
            // Built from \x{..} escapes only, so the pattern is always valid
            runs: Regex::new(&class).expect("emoji character class"),
        }
    }

    /// The shared table built from [`STANDARD_RANGES`].
    pub fn standard() -> &'static EmojiTable {
        &STANDARD
    }

    /// Checks whether a single code point is classified as emoji.
    pub fn is_emoji(&self, c: char) -> bool {
        self.ranges.iter().any(|range| range.contains(&c))
    }

    /// Returns all emoji runs in `text`, in order.
    ///
    /// Runs starting with a skin-tone modifier are dropped; modifiers that
    /// follow a base emoji stay part of its run.
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.runs
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| !run.chars().next().is_some_and(is_skin_tone_modifier))
            .collect()
    }

    /// Removes every emoji run from `text`, leaving the rest untouched.
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.runs.replace_all(text, "")
    }

    /// Checks whether `text` contains any classified code point.
    pub fn contains_emoji(&self, text: &str) -> bool {
        self.runs.is_match(text)
    }
}

impl Default for EmojiTable {
    fn default() -> Self {
        Self::new(STANDARD_RANGES)
    }
}

/// [`EmojiTable::extract`] with the standard table.
pub fn extract(text: &str) -> Vec<&str> {
    EmojiTable::standard().extract(text)
}

/// [`EmojiTable::strip`] with the standard table.
pub fn strip(text: &str) -> Cow<'_, str> {
    EmojiTable::standard().strip(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple() {
        assert_eq!(extract("hello world 😀"), vec!["😀"]);
        assert!(extract("plain text").is_empty());
    }

    #[test]
    fn test_extract_maximal_runs() {
        assert_eq!(extract("😀😀 ok 🔥"), vec!["😀😀", "🔥"]);
    }

    #[test]
    fn test_skin_tone_stays_attached() {
        assert_eq!(extract("👍🏽"), vec!["👍🏽"]);
    }

    #[test]
    fn test_standalone_skin_tone_dropped() {
        assert!(extract("🏽").is_empty());
        assert!(extract("a 🏿 b").is_empty());
        // A run that begins with a modifier is dropped whole
        assert!(extract("x🏻👍").is_empty());
    }

    #[test]
    fn test_zwj_sequence_is_one_run() {
        assert_eq!(extract("family 👨‍👩‍👧 time"), vec!["👨‍👩‍👧"]);
    }

    #[test]
    fn test_flags_and_symbols() {
        assert_eq!(extract("🇰🇿"), vec!["🇰🇿"]);
        assert_eq!(extract("☀ and ⭐"), vec!["☀", "⭐"]);
        assert_eq!(extract("❤️"), vec!["❤️"]);
    }

    #[test]
    fn test_non_emoji_scripts_untouched() {
        let text = "Привет 你好 مرحبا";
        assert!(extract(text).is_empty());
        assert_eq!(strip(text), text);
    }

    #[test]
    fn test_strip_keeps_whitespace() {
        assert_eq!(strip("a 😀 b"), "a  b");
        assert_eq!(strip("😀"), "");
        assert!(matches!(strip("no emoji"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_leaves_no_classified_code_point() {
        let table = EmojiTable::standard();
        let stripped = table.strip("mix 🎉✨ of 👍🏽 things ™ 〰");
        assert!(!stripped.chars().any(|c| table.is_emoji(c)));
    }

    #[test]
    fn test_is_emoji() {
        let table = EmojiTable::standard();
        assert!(table.is_emoji('😀'));
        assert!(table.is_emoji('\u{200D}'));
        assert!(!table.is_emoji('a'));
        assert!(!table.is_emoji('你'));
    }

    #[test]
    fn test_custom_table() {
        let table = EmojiTable::new(&['a'..='c']);
        assert_eq!(table.extract("xxabcyyb"), vec!["abc", "b"]);
        assert!(table.contains_emoji("cab"));
        assert!(!table.contains_emoji("xyz"));
    }
}
