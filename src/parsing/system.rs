//! Recognition of WhatsApp system notices.
//!
//! Group exports interleave customer messages with notices such as the
//! encryption banner or "X changed the subject". When they carry a
//! `sender: text` shape they parse like any other message; the parser drops
//! them only when [`ParserConfig::skip_system_messages`] is set.
//!
//! [`ParserConfig::skip_system_messages`]: crate::config::ParserConfig::skip_system_messages

const SYSTEM_INDICATORS: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "this message was deleted",
    "you deleted this message",
];

/// Returns `true` if a parsed header looks like a WhatsApp system notice.
///
/// Matching is case-insensitive on the message text. Attachment placeholders
/// such as `<Media omitted>` are regular messages.
pub fn is_system_message(sender: &str, text: &str) -> bool {
    let text_lower = text.to_lowercase();
    if SYSTEM_INDICATORS
        .iter()
        .any(|indicator| text_lower.contains(indicator))
    {
        return true;
    }

    let sender_lower = sender.trim().to_lowercase();
    sender_lower.is_empty() || sender_lower == "whatsapp" || sender_lower == "system"
}
