//! Report writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - JSON object keyed by author - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - CSV, one row per author, semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::aggregate;
//! use chatstats::core::output::{to_csv, write_json};
//!
//! let report = aggregate("26.10.24, 10:00 - Alice: hello")?;
//!
//! write_json(&report, "report.json")?;
//! let csv_string = to_csv(&report)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
