//! Review and bulk import of parsed messages.
//!
//! After parsing, a reviewer toggles messages in an [`ImportBatch`], then
//! submits the selected ones as a [`BulkImportRequest`]. The request is
//! turned into inbox rows by [`BulkImportRequest::into_records`], which
//! applies the import rules:
//!
//! - an empty request is rejected
//! - messages whose text is blank are skipped
//! - message text is stored trimmed
//! - every row gets the request's group name (or none)
//!
//! # Example
//!
//! ```rust
//! use chatdesk::core::import::ImportBatch;
//!
//! # fn main() -> chatdesk::Result<()> {
//! let messages = chatdesk::parse(
//!     "[15/02/2026, 10:30:15] John: Printer jammed\n[15/02/2026, 10:31:00] Jane: Thanks!",
//! );
//!
//! let mut batch = ImportBatch::new(messages).with_group_name("Acme IT");
//! batch.toggle(1);
//!
//! let (rows, summary) = batch.into_request()?.into_records()?;
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].group_name, "Acme IT");
//! assert_eq!(summary.to_string(), "1 message(s) imported");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ParsedMessage;
use crate::core::inbox::NewInboxMessage;
use crate::error::ChatdeskError;

/// Parsed messages under review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    messages: Vec<ParsedMessage>,
    group_name: Option<String>,
}

impl ImportBatch {
    pub fn new(messages: Vec<ParsedMessage>) -> Self {
        Self {
            messages,
            group_name: None,
        }
    }

    /// Sets the group name applied to every imported message.
    #[must_use]
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ParsedMessage] {
        &self.messages
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn selected_count(&self) -> usize {
        self.messages.iter().filter(|m| m.selected).count()
    }

    /// Flips one message's selection and returns its new state.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.messages.get_mut(index).map(ParsedMessage::toggle)
    }

    /// Deselects everything if everything is selected, otherwise selects
    /// everything. Returns the new state shared by all messages.
    pub fn toggle_all(&mut self) -> bool {
        let select = !self.messages.iter().all(|m| m.selected);
        for msg in &mut self.messages {
            msg.selected = select;
        }
        select
    }

    /// Keeps the selected messages and builds the import request.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::NothingSelected`] if no message is selected.
    pub fn into_request(self) -> Result<BulkImportRequest, ChatdeskError> {
        let messages: Vec<ParsedMessage> =
            self.messages.into_iter().filter(|m| m.selected).collect();
        if messages.is_empty() {
            return Err(ChatdeskError::NothingSelected);
        }

        Ok(BulkImportRequest {
            messages,
            group_name: self.group_name.unwrap_or_default(),
        })
    }
}

/// The payload submitted for a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkImportRequest {
    pub messages: Vec<ParsedMessage>,
    #[serde(default)]
    pub group_name: String,
}

impl BulkImportRequest {
    pub fn new(messages: Vec<ParsedMessage>) -> Self {
        Self {
            messages,
            group_name: String::new(),
        }
    }

    /// Applies the import rules and returns the rows to insert.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::NoMessagesProvided`] if the request is empty.
    pub fn into_records(self) -> Result<(Vec<NewInboxMessage>, ImportSummary), ChatdeskError> {
        if self.messages.is_empty() {
            return Err(ChatdeskError::NoMessagesProvided);
        }

        let mut summary = ImportSummary::default();
        let mut rows = Vec::with_capacity(self.messages.len());

        for msg in self.messages {
            let text = msg.message_text.trim();
            if text.is_empty() {
                summary.skipped += 1;
                debug!(sender = %msg.sender_name, "skipping message with blank text");
                continue;
            }

            rows.push(
                NewInboxMessage::new(msg.sender_name.as_str(), text, msg.received_at)
                    .with_group_name(self.group_name.as_str()),
            );
            summary.imported += 1;
        }

        info!(imported = summary.imported, skipped = summary.skipped, "bulk import prepared");
        Ok((rows, summary))
    }
}

/// Counts from one bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} message(s) imported", self.imported)
    }
}
