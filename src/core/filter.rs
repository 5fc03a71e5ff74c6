//! Pre-selection of parsed messages by date range and sender.
//!
//! Filtering never removes anything. Messages that fail an active filter
//! are only deselected, so the reviewer still sees the full transcript and
//! can re-select any of them before importing.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Received on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Received on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Sent by a specific contact |
//!
//! # Example
//!
//! ```
//! use chatdesk::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatdesk::Result<()> {
//! let messages = chatdesk::parse(
//!     "[01/01/2026, 09:00:00] Alice: Old\n[15/06/2026, 09:00:00] Alice: New",
//! );
//!
//! let config = FilterConfig::new().with_date_from("2026-06-01")?;
//! let messages = apply_filters(messages, &config);
//!
//! assert_eq!(messages.len(), 2);
//! assert!(!messages[0].selected);
//! assert!(messages[1].selected);
//! # Ok(())
//! # }
//! ```
//!
//! Multiple filters are combined with AND logic. Sender matching is
//! case-insensitive for ASCII characters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::ParsedMessage;
use crate::error::ChatdeskError;

/// Criteria a message must meet to stay selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only messages received on or after this time.
    pub after: Option<NaiveDateTime>,

    /// Keep only messages received on or before this time.
    pub before: Option<NaiveDateTime>,

    /// Keep only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a filter with no active criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive, from the start of that day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::InvalidDate`] unless the date is `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatdeskError> {
        self.after = Some(parse_filter_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date (inclusive, through the end of that day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::InvalidDate`] unless the date is `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatdeskError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(parse_filter_date(date_str)?.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, at: NaiveDateTime) -> Self {
        self.after = Some(at);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, at: NaiveDateTime) -> Self {
        self.before = Some(at);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if the message meets every active criterion.
    pub fn matches(&self, msg: &ParsedMessage) -> bool {
        if let Some(from) = &self.from {
            if !msg.sender_name.eq_ignore_ascii_case(from) {
                return false;
            }
        }
        if self.after.is_some_and(|after| msg.received_at < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.received_at > before) {
            return false;
        }
        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatdeskError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatdeskError::invalid_date(date_str))
}

/// Deselects every message that fails an active filter.
///
/// Returns the same messages in the same order. Messages that pass keep
/// their current selection; a filter never re-selects anything.
pub fn apply_filters(mut messages: Vec<ParsedMessage>, config: &FilterConfig) -> Vec<ParsedMessage> {
    if !config.is_active() {
        return messages;
    }

    let mut deselected = 0usize;
    for msg in &mut messages {
        if msg.selected && !config.matches(msg) {
            msg.selected = false;
            deselected += 1;
        }
    }
    debug!(deselected, total = messages.len(), "applied filters");

    messages
}
