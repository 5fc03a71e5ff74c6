//! Line-level building blocks of the transcript parser.
//!
//! These functions are shared by the in-memory parser
//! ([`ChatLogParser`](crate::parser::ChatLogParser)) and the streaming
//! parser so both classify lines and resolve timestamps identically.

pub mod header;
pub mod system;
pub mod timestamp;

// Re-export commonly used items
pub use header::{Header, HeaderStyle, is_header, match_header, normalize_line};
pub use system::is_system_message;
pub use timestamp::{
    Clock, DateOrder, FixedClock, Meridiem, SystemClock, resolve_date, resolve_time,
    resolve_timestamp,
};
