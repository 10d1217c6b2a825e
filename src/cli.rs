//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto [`AnalyzerConfig`] plus the input/output
//! plumbing the library itself never touches.

use clap::Parser;

use crate::config::AnalyzerConfig;
use crate::format::OutputFormat;

/// Per-participant statistics for exported chat logs.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -o stats.csv
    chatstats chat.txt --date-separator / --amplify 1.5
    cat chat.txt | chatstats - --format csv")]
pub struct Args {
    /// Path to the exported chat (`-` reads stdin)
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format (inferred from --output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sentiment amplification factor
    #[arg(long, default_value_t = 1.0, value_parser = parse_amplify)]
    pub amplify: f64,

    /// Number of entries in the most-used-words ranking
    #[arg(long, default_value_t = 5)]
    pub top_words: usize,

    /// Date separator used by the export (`.` for 26.10.24, `/` for 1/15/24)
    #[arg(long, default_value_t = '.')]
    pub date_separator: char,

    /// Analyse the first line too instead of dropping it as a header
    #[arg(long)]
    pub keep_header: bool,
}

impl Args {
    /// Builds the analysis configuration from the flags.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_amplify(self.amplify)
            .with_top_words(self.top_words)
            .with_date_separator(self.date_separator)
            .with_skip_header(!self.keep_header)
    }

    /// Resolves the report format: explicit flag, then output extension,
    /// then JSON.
    pub fn output_format(&self) -> crate::Result<OutputFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) => OutputFormat::from_path(path),
            (None, None) => Ok(OutputFormat::default()),
        }
    }
}

fn parse_amplify(value: &str) -> Result<f64, String> {
    let amplify: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if amplify.is_finite() {
        Ok(amplify)
    } else {
        Err(format!("expected a finite number, got '{value}'"))
    }
}
