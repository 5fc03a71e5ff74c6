//! Output format writers.
//!
//! - [`write_json`] / [`to_json`]: pretty JSON array (feature `json-output`)
//! - [`write_jsonl`] / [`to_jsonl`]: one JSON object per line (feature `json-output`)
//! - [`write_csv`] / [`to_csv`]: `;`-delimited CSV (feature `csv-output`)
//!
//! Each format also has a `*_to` variant that writes to any [`std::io::Write`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatdesk::Result<()> {
//! use chatdesk::core::models::OutputConfig;
//! use chatdesk::core::output::{to_csv, to_jsonl};
//!
//! let messages = chatdesk::parse("[15/02/2026, 10:30:15] Alice: Printer jammed");
//! let config = OutputConfig::new();
//!
//! let csv = to_csv(&messages, &config)?;
//! assert!(csv.contains("2026-02-15T10:30:15;Alice;Printer jammed;true"));
//!
//! let jsonl = to_jsonl(&messages, &config)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv, write_csv_to};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json, write_json_to};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl, write_jsonl_to};
