//! Core analysis logic for chatstats.
//!
//! This module contains:
//! - [`processor`] - The aggregator: raw log in, per-author statistics out
//! - [`models`] - [`AuthorStatistics`] and [`ChatReport`]
//! - [`text`] - Media placeholders, URLs and word ranking
//! - [`stats`] - Hour mode, mean, standard deviation, emoji shares
//! - [`output`] - Report writers (JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{aggregate, ChatReport};
//!
//! let report: ChatReport = aggregate("26.10.24, 10:00 - Alice: good morning")?;
//! assert_eq!(report.len(), 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod models;
pub mod output;
pub mod processor;
pub mod stats;
pub mod text;

// Re-export main types for convenience
pub use models::{AuthorStatistics, ChatReport};
pub use processor::{aggregate, aggregate_author, aggregate_lines, aggregate_with, analyze_export};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
