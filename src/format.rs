//! Output format selection.
//!
//! [`OutputFormat`] names a writer; [`write_to_format`],
//! [`write_to_writer`] and [`to_format_string`] dispatch to it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatdesk::Result<()> {
//! use chatdesk::core::models::OutputConfig;
//! use chatdesk::format::{OutputFormat, write_to_writer};
//!
//! let messages = chatdesk::parse("15/02/2026, 10:30 - Bob: VPN is down");
//!
//! let format = OutputFormat::from_path("export.ndjson")?;
//! let mut out = Vec::new();
//! write_to_writer(&messages, &mut out, format, &OutputConfig::new())?;
//!
//! assert_eq!(format, OutputFormat::Jsonl);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ParsedMessage;
use crate::core::models::OutputConfig;
use crate::error::ChatdeskError;

/// Output format for parsed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON array, the same shape the import step accepts
    #[default]
    Json,

    /// JSON Lines, one object per line (also known as NDJSON)
    Jsonl,

    /// CSV with `;` delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Detects the format from a file extension (case-insensitive).
    ///
    /// ```rust
    /// use chatdesk::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/chat.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatdeskError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self::from_name(&ext).ok_or_else(|| {
            ChatdeskError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_lowercase()).ok_or_else(|| {
            ChatdeskError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

fn feature_disabled(format: OutputFormat) -> ChatdeskError {
    ChatdeskError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.feature()
        ),
    )
}

/// Writes messages to a file in the given format.
///
/// # Errors
///
/// Fails if the file can't be written or the format's feature is disabled.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[ParsedMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Writes messages to any writer in the given format.
///
/// # Errors
///
/// Fails if writing fails or the format's feature is disabled.
#[allow(unused_variables)]
pub fn write_to_writer<W: Write>(
    messages: &[ParsedMessage],
    writer: W,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv_to(messages, writer, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json_to(messages, writer, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl_to(messages, writer, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts messages to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[ParsedMessage],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatdeskError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
