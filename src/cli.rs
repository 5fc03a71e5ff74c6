//! Command-line interface definition using clap.
//!
//! - [`Args`]: arguments of the `chatdesk` binary
//! - [`OutputFormat`]: clap-facing mirror of [`crate::format::OutputFormat`]

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};

use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::ChatdeskError;

/// Split a pasted WhatsApp chat transcript into help-desk inbox messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatdesk")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatdesk chat.txt
    pbpaste | chatdesk -f csv
    chatdesk chat.txt -o messages.jsonl --after 2026-02-01
    chatdesk chat.txt --import --group \"Acme IT\" -o import.json")]
pub struct Args {
    /// Transcript file, or '-' for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the bulk-import request (selected messages + group) as JSON
    #[arg(long, conflicts_with = "format")]
    pub import: bool,

    /// Group name applied to every imported message
    #[arg(long, value_name = "NAME", requires = "import")]
    pub group: Option<String>,

    /// Deselect messages received before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Deselect messages received after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Deselect messages not sent by this contact
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Write only selected messages
    #[arg(long)]
    pub selected_only: bool,

    /// Drop WhatsApp system notices
    #[arg(long)]
    pub skip_system: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary and all logs except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Returns `true` if the transcript comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Resolves the output format: the flag, then the output extension,
    /// then JSON.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }

    /// Builds the pre-selection filter from the date and sender flags.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatdeskError> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(from) = &self.from {
            config = config.with_sender(from.as_str());
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        let config = OutputConfig::new();
        if self.selected_only {
            config.selected_only()
        } else {
            config
        }
    }

    /// Output path for display.
    pub fn output_label(&self) -> String {
        self.output
            .as_deref()
            .map_or_else(|| "stdout".to_string(), |p: &Path| p.display().to_string())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// JSON array
    Json,
    /// JSON Lines, one object per line
    #[value(alias = "ndjson")]
    Jsonl,
    /// CSV with ';' delimiter
    Csv,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
