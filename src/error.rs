//! Unified error types for chatdesk.
//!
//! Transcript parsing itself never fails: unrecognized lines become noise
//! or continuation text and unreadable dates fall back to the wall clock.
//! [`ChatdeskError`] covers everything around it: reading input, writing
//! output, filter arguments, and the import rules.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **CLI users** get the same wording the help-desk UI shows
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatdesk operations.
///
/// # Example
///
/// ```rust
/// use chatdesk::error::Result;
/// use chatdesk::ParsedMessage;
///
/// fn load() -> Result<Vec<ParsedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatdeskError>;

/// The error type for all chatdesk operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatdeskError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input or output bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A transcript line was not valid UTF-8 while streaming.
    #[error("Line {line} is not valid UTF-8: {source}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// Invalid date in a filter argument.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value doesn't match any supported variant.
    ///
    /// Used for unknown output formats and file extensions.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being parsed (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An inbox status string is not `pending`, `converted` or `dismissed`.
    #[error("Unknown inbox status '{0}'. Expected one of: pending, converted, dismissed")]
    InvalidStatus(String),

    /// The transcript contained no recognizable message header.
    #[error("Could not parse any messages. Make sure you paste WhatsApp chat text.")]
    NoMessagesParsed,

    /// The review step ended with every message deselected.
    #[error("No messages selected")]
    NothingSelected,

    /// A bulk-import request carried no messages.
    #[error("No messages provided")]
    NoMessagesProvided,

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatdeskError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatdeskError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatdeskError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatdeskError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatdeskError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatdeskError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatdeskError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatdeskError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatdeskError::InvalidFormat { .. })
    }

    /// Returns `true` if the error means there was nothing to import.
    pub fn is_empty_import(&self) -> bool {
        matches!(
            self,
            ChatdeskError::NoMessagesParsed
                | ChatdeskError::NothingSelected
                | ChatdeskError::NoMessagesProvided
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
