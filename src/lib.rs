//! # chatdesk
//!
//! Turns a pasted WhatsApp chat transcript into help-desk inbox messages.
//!
//! ## Overview
//!
//! Reception pastes an exported WhatsApp chat into the help desk. chatdesk
//! splits it into timestamped [`ParsedMessage`] records, lets a reviewer
//! select which ones matter, and prepares the selected ones for bulk import
//! into the WhatsApp inbox, where they are later converted into tickets or
//! dismissed.
//!
//! Both export styles are recognized:
//!
//! ```text
//! [15/02/2026, 10:30:15] John Smith: My printer isn't working   (iOS)
//! 15/02/2026, 10:30 - John Smith: My printer isn't working      (Android)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chatdesk::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let transcript = "\
//! Messages and calls are end-to-end encrypted.
//! [15/02/2026, 10:30:15] John Smith: My printer isn't working
//! Also it's making a grinding noise
//! [15/02/2026, 10:32:00] Jane Doe: Outlook keeps crashing";
//!
//! let messages = ChatLogParser::new().parse(transcript);
//! assert_eq!(messages.len(), 2);
//!
//! let mut batch = ImportBatch::new(messages).with_group_name("Acme IT");
//! batch.toggle(1);
//!
//! let (rows, summary) = batch.into_request()?.into_records()?;
//! assert_eq!(rows[0].message_text, "My printer isn't working\nAlso it's making a grinding noise");
//! assert_eq!(summary.to_string(), "1 message(s) imported");
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing Guarantees
//!
//! - Parsing never fails. Unrecognized lines before the first header are
//!   dropped; later ones continue the open message.
//! - Output order is transcript order.
//! - A header whose date or time can't be resolved gets the parser's
//!   [`Clock`](parsing::Clock) reading instead.
//!
//! ## Module Structure
//!
//! - [`parser`]: [`ChatLogParser`], [`parse`]
//! - [`parsing`]: header matching, timestamp resolution, system notices
//! - [`streaming`]: [`MessageStream`](streaming::MessageStream) over any `BufRead`
//! - [`core`]: filters, review/import, inbox and tickets, output writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat) dispatch
//! - [`config`]: [`ParserConfig`](config::ParserConfig)
//! - [`error`]: [`ChatdeskError`], [`Result`]
//! - [`prelude`]: convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;
#[cfg(feature = "streaming")]
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{ChatdeskError, Result};
pub use message::ParsedMessage;
pub use parser::{ChatLogParser, ParseOutcome, ParseReport, parse};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatdesk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ParsedMessage;
    pub use crate::error::{ChatdeskError, Result};
    pub use crate::parser::{ChatLogParser, ParseOutcome, ParseReport, parse};

    pub use crate::config::ParserConfig;
    pub use crate::parsing::{Clock, FixedClock, SystemClock};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::import::{BulkImportRequest, ImportBatch, ImportSummary};
    pub use crate::core::inbox::{
        Category, InboxMessage, InboxStatus, NewInboxMessage, Priority, TicketDraft,
        TicketOverrides,
    };
    pub use crate::core::models::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format, write_to_writer};

    #[cfg(feature = "streaming")]
    pub use crate::streaming::MessageStream;
}
