//! Report output formats.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::core::aggregate;
//! use chatstats::format::{OutputFormat, to_format_string};
//!
//! let report = aggregate("26.10.24, 10:00 - Alice: hello")?;
//!
//! let format = OutputFormat::from_path("stats.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! let csv = to_format_string(&report, format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::ChatReport;
use crate::error::ChatstatsError;

/// Output format for analysis reports.
///
/// - [`Json`](OutputFormat::Json) - the full report, the shape an HTTP endpoint would return
/// - [`Csv`](OutputFormat::Csv) - one row per author, for spreadsheets
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON object keyed by author (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    const NAMES: &'static [&'static str] = &["json", "csv"];

    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        Self::NAMES
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatsError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_name(ext).ok_or_else(|| {
            ChatstatsError::invalid_format(
                "output",
                format!(
                    "cannot infer a report format from '{path}', use .{} or pass --format",
                    Self::NAMES.join(" or .")
                ),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Json => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown report format '{s}', expected one of: {}",
                Self::NAMES.join(", ")
            )
        })
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &ChatReport,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a report to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(report: &ChatReport, format: OutputFormat) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}
