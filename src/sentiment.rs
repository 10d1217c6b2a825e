//! Message sentiment scoring.
//!
//! [`score`] turns a list of messages into compound polarity scores in
//! `[-1, 1]`. The actual scoring is delegated to a [`SentimentScorer`], so the
//! built-in [`VaderScorer`] can be swapped for any other model:
//!
//! ```rust
//! use chatstats::emoji::EmojiTable;
//! use chatstats::sentiment::{VaderScorer, score};
//!
//! let messages = vec!["I love this 😀".to_string(), "12345".to_string()];
//! let scores = score(&messages, 1.0, &VaderScorer::new(), EmojiTable::standard());
//!
//! assert!(scores[0] > 0.0);
//! assert_eq!(scores[1], 0.0);
//! ```

use std::fmt;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::emoji::EmojiTable;

/// Something that maps a text to a compound polarity score in `[-1, 1]`.
///
/// Implemented for any `Fn(&str) -> f64`, which keeps tests and ad-hoc
/// scorers short.
pub trait SentimentScorer {
    /// Scores a single text. Neutral or unscorable text yields `0.0`.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// VADER compound scorer over the full English VADER lexicon.
///
/// Word valences are adjusted for boosters ("very good"), negations
/// ("not good"), contrastive "but", ALL-CAPS emphasis and trailing `!`/`?`,
/// then normalised with `x / sqrt(x² + 15)`. Text without any lexicon word
/// scores exactly `0.0`.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Creates a scorer backed by the bundled VADER lexicon.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Scores every message, in order.
///
/// Each message is emoji-stripped with `table`, scored, multiplied by
/// `amplify` and clamped to `[-1, 1]`. The output has one entry per message;
/// zero scores are kept. A product that is not a number (`0 × ∞`, or a `NaN`
/// factor) scores `0.0`.
pub fn score<M, S>(messages: &[M], amplify: f64, scorer: &S, table: &EmojiTable) -> Vec<f64>
where
    M: AsRef<str>,
    S: SentimentScorer + ?Sized,
{
    messages
        .iter()
        .map(|message| {
            let text = table.strip(message.as_ref());
            let scaled = scorer.polarity(&text) * amplify;
            if scaled.is_nan() {
                0.0
            } else {
                scaled.clamp(-1.0, 1.0)
            }
        })
        .collect()
}
