//! Everything that happens to parsed messages after parsing.
//!
//! - [`filter`]: pre-select messages by date range and sender
//! - [`import`]: review, toggle and bulk-import selected messages
//! - [`inbox`]: inbox statuses and conversion into tickets
//! - [`models`]: output configuration
//! - [`output`]: JSON, JSONL and CSV writers

pub mod filter;
pub mod import;
pub mod inbox;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, apply_filters};
pub use import::{BulkImportRequest, ImportBatch, ImportSummary};
pub use inbox::{
    Category, InboxMessage, InboxStatus, NewInboxMessage, Priority, TicketDraft, TicketOverrides,
};
pub use models::OutputConfig;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
