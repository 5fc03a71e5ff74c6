//! The record produced for every message found in a chat transcript.
//!
//! [`ParsedMessage`] is the hand-off between the transcript parser and the
//! import step: the parser fills in sender, text and timestamp, the review
//! step flips [`selected`](ParsedMessage::selected), and the import step
//! turns the selected records into inbox rows.
//!
//! # Examples
//!
//! ```
//! use chatdesk::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 2, 15)
//!     .and_then(|d| d.and_hms_opt(10, 30, 15))
//!     .unwrap();
//! let msg = ParsedMessage::new("John Smith", "My printer isn't working", at);
//!
//! assert_eq!(msg.sender_name(), "John Smith");
//! assert!(msg.is_selected());
//! ```
//!
//! ## Serialization
//!
//! The serde form is the record contract consumed by the bulk-import
//! endpoint: `received_at` is a local timestamp without offset.
//!
//! ```
//! use chatdesk::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 2, 15)
//!     .and_then(|d| d.and_hms_opt(10, 30, 15))
//!     .unwrap();
//! let msg = ParsedMessage::new("Jane Doe", "Outlook keeps crashing", at);
//! let json = serde_json::to_string(&msg)?;
//!
//! assert!(json.contains(r#""received_at":"2026-02-15T10:30:15""#));
//! assert!(json.contains(r#""selected":true"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used whenever a `received_at` value is rendered as text.
pub const RECEIVED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One message recovered from a pasted chat transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender_name` | `String` | Display name from the header line, never empty |
/// | `message_text` | `String` | Body, continuation lines joined with `\n` |
/// | `received_at` | `NaiveDateTime` | Local time from the header, or the wall clock on fallback |
/// | `selected` | `bool` | Review state, `true` when parsed |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Display name taken from the header line.
    pub sender_name: String,

    /// Message body.
    ///
    /// Multi-line bodies (pasted error text, addresses) keep one trimmed
    /// source line per `\n`-separated line.
    pub message_text: String,

    /// When the message was sent, as written in the transcript.
    ///
    /// No timezone is attached. When the header's date or time could not be
    /// resolved this holds the parse-time wall clock instead.
    #[serde(with = "received_at_format")]
    pub received_at: NaiveDateTime,

    /// Whether the message is part of the next import.
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

impl ParsedMessage {
    /// Creates a selected message.
    pub fn new(
        sender_name: impl Into<String>,
        message_text: impl Into<String>,
        received_at: NaiveDateTime,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            message_text: message_text.into(),
            received_at,
            selected: true,
        }
    }

    /// Builder method to set the selection state.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Appends a continuation line to the body.
    pub fn push_line(&mut self, line: &str) {
        self.message_text.push('\n');
        self.message_text.push_str(line);
    }

    /// Flips the selection state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Returns the sender name.
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the message body.
    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    /// Returns the timestamp.
    pub fn received_at(&self) -> NaiveDateTime {
        self.received_at
    }

    /// Returns `true` if the message will be imported.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns `received_at` as `YYYY-MM-DDTHH:MM:SS`.
    pub fn received_at_string(&self) -> String {
        self.received_at.format(RECEIVED_AT_FORMAT).to_string()
    }

    /// Returns the number of physical lines in the body.
    pub fn line_count(&self) -> usize {
        self.message_text.lines().count()
    }
}

/// Serde adapter pinning `received_at` to whole seconds without offset.
pub(crate) mod received_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::RECEIVED_AT_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(RECEIVED_AT_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, RECEIVED_AT_FORMAT)
            .or_else(|_| raw.parse::<NaiveDateTime>())
            .map_err(serde::de::Error::custom)
    }
}
