//! Unified error types for chatstats.
//!
//! All fallible operations return [`ChatstatsError`]. Only two of its variants
//! come out of the analysis itself:
//!
//! - [`HourParse`](ChatstatsError::HourParse) aborts the whole call, since a
//!   line attributed to an author without a readable time means the export is
//!   broken.
//! - [`EmptyMessageSet`](ChatstatsError::EmptyMessageSet) names a single
//!   author. The aggregator records it and keeps going with the others.
//!
//! Malformed lines are never errors: the line classifier simply skips them.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
///
/// fn my_function() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading an export or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line attributed to an author has no parseable hour.
    ///
    /// The hour is read from the second whitespace-delimited field of the
    /// line, up to its first `:`.
    #[error("Cannot read hour from line {line}: '{token}'")]
    HourParse {
        /// 1-based position of the offending line in the analysed slice
        line: usize,
        /// The token that failed to parse (empty if the field was missing)
        token: String,
    },

    /// An author was recognised but no message could be attributed to them.
    #[error("No messages attributed to author '{author}'")]
    EmptyMessageSet {
        /// The author name as extracted by the line classifier
        author: String,
    },

    /// The requested format or input doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an hour parse error.
    pub fn hour_parse(line: usize, token: impl Into<String>) -> Self {
        ChatstatsError::HourParse {
            line,
            token: token.into(),
        }
    }

    /// Creates an empty message set error for `author`.
    pub fn empty_message_set(author: impl Into<String>) -> Self {
        ChatstatsError::EmptyMessageSet {
            author: author.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an hour parse error.
    pub fn is_hour_parse(&self) -> bool {
        matches!(self, ChatstatsError::HourParse { .. })
    }

    /// Returns `true` if this is an empty message set error.
    pub fn is_empty_message_set(&self) -> bool {
        matches!(self, ChatstatsError::EmptyMessageSet { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
