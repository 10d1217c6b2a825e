//! # Chatstats
//!
//! Per-participant analytics for exported chat logs.
//!
//! ## Overview
//!
//! Chatstats reads a plain-text export where each message line looks like
//! `26.10.24, 20:40 - Alice: message` and computes, for every author:
//!
//! - the most active hour of the day
//! - message and character counts
//! - emoji usage shares
//! - media message and URL counts
//! - sentiment mean, spread and balance
//! - the most used words
//!
//! Every call is self-contained: no I/O, no shared mutable state, so the
//! analysis can run concurrently from as many threads as needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let export = "Chat export header\n\
//!               26.10.24, 10:00 - Alice: hello world 😀\n\
//!               26.10.24, 10:05 - Alice: hello again\n\
//!               26.10.24, 11:00 - Bob: <Media omitted>";
//!
//! let report = analyze_export(export, &AnalyzerConfig::new())?;
//!
//! let alice = report.get("Alice").unwrap();
//! assert_eq!(alice.messages, 2);
//! assert_eq!(alice.emojis, vec![("😀".to_string(), 1.0)]);
//! # Ok::<(), ChatstatsError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - line classifier, author extraction, per-author slicing
//! - [`emoji`] - [`EmojiTable`](emoji::EmojiTable): classification, extraction, stripping
//! - [`sentiment`] - [`SentimentScorer`](sentiment::SentimentScorer) trait and the default VADER scorer
//! - [`core`] - aggregation, statistics models, report writers
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod emoji;
pub mod error;
pub mod format;
pub mod parsing;
pub mod sentiment;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration
    pub use crate::config::AnalyzerConfig;

    // Aggregation
    pub use crate::core::{
        AuthorStatistics, ChatReport, aggregate, aggregate_with, analyze_export,
    };

    // Building blocks
    pub use crate::emoji::EmojiTable;
    pub use crate::parsing::{extract_authors, hours_of, messages_of};
    pub use crate::sentiment::{SentimentScorer, VaderScorer};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
