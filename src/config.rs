//! Configuration for the analysis pipeline.
//!
//! [`AnalyzerConfig`] is a plain serde struct with builder methods, usable
//! from library code without any CLI framework.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_amplify(1.5)
//!     .with_date_separator('/');
//!
//! assert_eq!(config.top_words, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Settings shared by every stage of [`aggregate_with`](crate::core::aggregate_with).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Factor applied to each compound sentiment score before clamping (default: 1.0)
    pub amplify: f64,

    /// Length of the most-used-words ranking (default: 5)
    pub top_words: usize,

    /// Character the line classifier expects in the date field (default: `.`)
    ///
    /// Dotted exports look like `26.10.24, 20:40 - Alice: hi`. Use `/` for
    /// exports dated `1/15/24, 10:30 - Alice: hi`.
    pub date_separator: char,

    /// Drop the first line of the export before analysis (default: true)
    ///
    /// Exports conventionally start with a metadata line. Only
    /// [`analyze_export`](crate::core::analyze_export) honours this flag.
    pub skip_header: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            amplify: 1.0,
            top_words: 5,
            date_separator: '.',
            skip_header: true,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sentiment amplification factor.
    #[must_use]
    pub fn with_amplify(mut self, amplify: f64) -> Self {
        self.amplify = amplify;
        self
    }

    /// Sets how many words the ranking keeps.
    #[must_use]
    pub fn with_top_words(mut self, limit: usize) -> Self {
        self.top_words = limit;
        self
    }

    /// Sets the date separator checked by the line classifier.
    #[must_use]
    pub fn with_date_separator(mut self, separator: char) -> Self {
        self.date_separator = separator;
        self
    }

    /// Sets whether the first line is dropped as a header.
    #[must_use]
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }
}
