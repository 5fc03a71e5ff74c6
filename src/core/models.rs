//! Output configuration and the record shape shared by all writers.

use serde::Serialize;

use crate::ParsedMessage;
use crate::message::RECEIVED_AT_FORMAT;

/// Controls which messages and fields the writers emit.
///
/// The default writes every message with all fields, matching the JSON
/// shape of [`ParsedMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include `received_at` (default: true)
    pub include_timestamps: bool,
    /// Include the `selected` flag (default: true)
    pub include_selected: bool,
    /// Write only selected messages (default: false)
    pub selected_only: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            include_selected: true,
            selected_only: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender and text only.
    pub fn minimal() -> Self {
        Self {
            include_timestamps: false,
            include_selected: false,
            selected_only: false,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    #[must_use]
    pub fn with_selected(mut self, include: bool) -> Self {
        self.include_selected = include;
        self
    }

    #[must_use]
    pub fn selected_only(mut self) -> Self {
        self.selected_only = true;
        self
    }

    /// Iterates the records this config writes, in input order.
    #[cfg_attr(not(any(feature = "csv-output", feature = "json-output")), allow(dead_code))]
    pub(crate) fn records<'a>(
        &'a self,
        messages: &'a [ParsedMessage],
    ) -> impl Iterator<Item = OutputRecord<'a>> + 'a {
        messages
            .iter()
            .filter(move |m| !self.selected_only || m.selected)
            .map(move |m| OutputRecord::new(m, self))
    }
}

/// One message as written by the JSON and JSONL writers.
#[cfg_attr(not(any(feature = "csv-output", feature = "json-output")), allow(dead_code))]
#[derive(Debug, Serialize)]
pub(crate) struct OutputRecord<'a> {
    pub sender_name: &'a str,
    pub message_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl<'a> OutputRecord<'a> {
    fn new(msg: &'a ParsedMessage, config: &OutputConfig) -> Self {
        Self {
            sender_name: &msg.sender_name,
            message_text: &msg.message_text,
            received_at: config
                .include_timestamps
                .then(|| msg.received_at.format(RECEIVED_AT_FORMAT).to_string()),
            selected: config.include_selected.then_some(msg.selected),
        }
    }
}
