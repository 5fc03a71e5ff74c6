//! WhatsApp inbox records and their conversion into tickets.
//!
//! Imported messages land in the inbox as [`InboxStatus::Pending`]. A
//! technician either converts one into a ticket ([`InboxMessage::convert`])
//! or dismisses it. Nothing here touches storage; callers persist the
//! records however they like.
//!
//! # Example
//!
//! ```rust
//! use chatdesk::core::inbox::{InboxMessage, InboxStatus, NewInboxMessage, Priority, TicketOverrides};
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let new = NewInboxMessage::new("Jane Doe", "Outlook keeps crashing", at);
//! let mut msg = InboxMessage::from_new(1, new, at);
//!
//! let draft = msg.convert(TicketOverrides::new().with_priority(Priority::High));
//!
//! assert_eq!(msg.status, InboxStatus::Converted);
//! assert_eq!(draft.title, "WhatsApp from Jane Doe");
//! assert_eq!(draft.priority, Priority::High);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ChatdeskError;
use crate::message::received_at_format;

/// Processing state of an inbox message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxStatus {
    /// Waiting for a technician.
    #[default]
    Pending,
    /// Turned into a ticket.
    Converted,
    /// Closed without a ticket.
    Dismissed,
}

impl InboxStatus {
    /// Returns all statuses.
    pub fn all() -> &'static [InboxStatus] {
        &[Self::Pending, Self::Converted, Self::Dismissed]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Converted => "converted",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for InboxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InboxStatus {
    type Err = ChatdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChatdeskError::InvalidStatus(s.to_string()))
    }
}

/// An insert-ready inbox row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInboxMessage {
    pub sender_name: String,
    /// Empty for transcript imports; exports carry names, not numbers.
    #[serde(default)]
    pub sender_phone: String,
    #[serde(default)]
    pub group_name: String,
    pub message_text: String,
    #[serde(with = "received_at_format")]
    pub received_at: NaiveDateTime,
    #[serde(default)]
    pub status: InboxStatus,
}

impl NewInboxMessage {
    /// Creates a pending message with no phone number and no group.
    pub fn new(
        sender_name: impl Into<String>,
        message_text: impl Into<String>,
        received_at: NaiveDateTime,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_phone: String::new(),
            group_name: String::new(),
            message_text: message_text.into(),
            received_at,
            status: InboxStatus::Pending,
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.sender_phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_group_name(mut self, group: impl Into<String>) -> Self {
        self.group_name = group.into();
        self
    }
}

/// A stored inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: i64,
    pub sender_name: String,
    pub sender_phone: String,
    pub group_name: String,
    pub message_text: String,
    #[serde(with = "received_at_format")]
    pub received_at: NaiveDateTime,
    pub status: InboxStatus,
    #[serde(with = "received_at_format")]
    pub created_at: NaiveDateTime,
}

impl InboxMessage {
    /// Builds the stored form of a new row.
    pub fn from_new(id: i64, new: NewInboxMessage, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            sender_name: new.sender_name,
            sender_phone: new.sender_phone,
            group_name: new.group_name,
            message_text: new.message_text,
            received_at: new.received_at,
            status: new.status,
            created_at,
        }
    }

    /// Name shown for the sender: the name, else the phone, else `Unknown`.
    pub fn display_sender(&self) -> &str {
        [self.sender_name.as_str(), self.sender_phone.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }

    /// Marks the message dismissed.
    pub fn dismiss(&mut self) {
        self.status = InboxStatus::Dismissed;
    }

    /// Marks the message converted and builds the ticket to create for it.
    pub fn convert(&mut self, overrides: TicketOverrides) -> TicketDraft {
        let draft = TicketDraft::from_message(self, overrides);
        self.status = InboxStatus::Converted;
        draft
    }
}

/// Dismisses every message whose id is in `ids`; returns how many matched.
pub fn dismiss_many(messages: &mut [InboxMessage], ids: &[i64]) -> usize {
    let mut dismissed = 0;
    for msg in messages.iter_mut().filter(|m| ids.contains(&m.id)) {
        msg.dismiss();
        dismissed += 1;
    }
    dismissed
}

/// Messages with the given status (or all), newest first.
pub fn list_by_status(messages: &[InboxMessage], status: Option<InboxStatus>) -> Vec<&InboxMessage> {
    let mut listed: Vec<&InboxMessage> = messages
        .iter()
        .filter(|m| status.is_none_or(|s| m.status == s))
        .collect();
    listed.sort_by(|a, b| b.received_at.cmp(&a.received_at));
    listed
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Other,
    Hardware,
    Software,
    Network,
    Printer,
    EmailIssue,
    Security,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::Printer => "printer",
            Self::EmailIssue => "email_issue",
            Self::Security => "security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a ticket came from. Inbox conversions are always `whatsapp`.
pub const WHATSAPP_SOURCE: &str = "whatsapp";

/// Technician edits applied when converting. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

impl TicketOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// A ticket ready to be created from an inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub source: String,
    pub contact_name: String,
    pub contact_phone: String,
    /// System note recorded on the new ticket.
    pub note: String,
}

impl TicketDraft {
    fn from_message(msg: &InboxMessage, overrides: TicketOverrides) -> Self {
        let title = non_empty(overrides.title)
            .unwrap_or_else(|| format!("WhatsApp from {}", msg.display_sender()));
        let description = non_empty(overrides.description).unwrap_or_else(|| msg.message_text.clone());

        let mut note = format!(
            "Ticket created from WhatsApp message from {} ({})",
            msg.sender_name, msg.sender_phone
        );
        if !msg.group_name.is_empty() {
            note.push_str(&format!(" (Group: {})", msg.group_name));
        }

        Self {
            title,
            description,
            priority: overrides.priority.unwrap_or_default(),
            category: overrides.category.unwrap_or_default(),
            source: WHATSAPP_SOURCE.to_string(),
            contact_name: msg.sender_name.clone(),
            contact_phone: msg.sender_phone.clone(),
            note,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn stored(id: i64, new: NewInboxMessage) -> InboxMessage {
        let created = new.received_at;
        InboxMessage::from_new(id, new, created)
    }

    #[test]
    fn test_status_parse_and_display() {
        for status in InboxStatus::all() {
            assert_eq!(status.as_str().parse::<InboxStatus>().unwrap(), *status);
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!("PENDING".parse::<InboxStatus>().unwrap(), InboxStatus::Pending);
        assert!(matches!(
            "archived".parse::<InboxStatus>(),
            Err(ChatdeskError::InvalidStatus(s)) if s == "archived"
        ));
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(serde_json::to_string(&InboxStatus::Dismissed).unwrap(), "\"dismissed\"");
        let status: InboxStatus = serde_json::from_str("\"converted\"").unwrap();
        assert_eq!(status, InboxStatus::Converted);
    }

    #[test]
    fn test_new_message_defaults() {
        let new = NewInboxMessage::new("A", "text", at(9));
        assert_eq!(new.status, InboxStatus::Pending);
        assert!(new.sender_phone.is_empty());
        assert!(new.group_name.is_empty());
    }

    #[test]
    fn test_convert_defaults() {
        let mut msg = stored(1, NewInboxMessage::new("John Smith", "Printer broken", at(9)));
        let draft = msg.convert(TicketOverrides::new());

        assert_eq!(msg.status, InboxStatus::Converted);
        assert_eq!(draft.title, "WhatsApp from John Smith");
        assert_eq!(draft.description, "Printer broken");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.category, Category::Other);
        assert_eq!(draft.source, "whatsapp");
        assert_eq!(draft.contact_name, "John Smith");
        assert_eq!(draft.note, "Ticket created from WhatsApp message from John Smith ()");
    }

    #[test]
    fn test_convert_title_falls_back_to_phone_then_unknown() {
        let mut by_phone = stored(1, NewInboxMessage::new("", "hi", at(9)).with_phone("+1 555"));
        assert_eq!(by_phone.convert(TicketOverrides::new()).title, "WhatsApp from +1 555");

        let mut anonymous = stored(2, NewInboxMessage::new("", "hi", at(9)));
        assert_eq!(anonymous.convert(TicketOverrides::new()).title, "WhatsApp from Unknown");
    }

    #[test]
    fn test_convert_with_overrides_and_group() {
        let new = NewInboxMessage::new("Jane", "VPN down", at(9))
            .with_phone("+44 20")
            .with_group_name("Acme IT");
        let mut msg = stored(3, new);

        let overrides = TicketOverrides::new()
            .with_title("VPN outage")
            .with_description("")
            .with_priority(Priority::Critical)
            .with_category(Category::Network);
        let draft = msg.convert(overrides);

        assert_eq!(draft.title, "VPN outage");
        assert_eq!(draft.description, "VPN down");
        assert_eq!(draft.priority, Priority::Critical);
        assert_eq!(draft.category, Category::Network);
        assert_eq!(
            draft.note,
            "Ticket created from WhatsApp message from Jane (+44 20) (Group: Acme IT)"
        );
    }

    #[test]
    fn test_category_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Category::EmailIssue).unwrap(), "\"email_issue\"");
        assert_eq!(Category::EmailIssue.to_string(), "email_issue");
    }

    #[test]
    fn test_dismiss_many_and_list() {
        let mut inbox = vec![
            stored(1, NewInboxMessage::new("A", "one", at(9))),
            stored(2, NewInboxMessage::new("B", "two", at(10))),
            stored(3, NewInboxMessage::new("C", "three", at(11))),
        ];

        assert_eq!(dismiss_many(&mut inbox, &[1, 3, 99]), 2);

        let pending = list_by_status(&inbox, Some(InboxStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);

        let all: Vec<i64> = list_by_status(&inbox, None).iter().map(|m| m.id).collect();
        assert_eq!(all, vec![3, 2, 1]);
    }
}
