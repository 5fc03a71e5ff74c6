//! Parser configuration.
//!
//! Plain serde structs with builder methods, usable without any CLI
//! framework.
//!
//! # Example
//!
//! ```rust
//! use chatdesk::config::ParserConfig;
//! use chatdesk::ChatLogParser;
//!
//! let config = ParserConfig::new()
//!     .with_skip_system_messages(true)
//!     .with_buffer_size(128 * 1024);
//!
//! let parser = ChatLogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// The defaults reproduce the help-desk import exactly: every recognized
/// header line yields one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop WhatsApp system notices (encryption banner, group changes,
    /// deleted-message placeholders) that have a `sender: text` shape
    /// (default: false)
    pub skip_system_messages: bool,

    /// Read buffer for file and reader input (default: 64KB)
    pub buffer_size: usize,

    /// Skip lines that fail to read (e.g. invalid UTF-8) when streaming,
    /// instead of yielding an error for them (default: false)
    pub skip_invalid_lines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: false,
            buffer_size: 64 * 1024, // 64KB
            skip_invalid_lines: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration tuned for large transcript files.
    pub fn streaming() -> Self {
        Self {
            buffer_size: 256 * 1024, // 256KB for streaming
            skip_invalid_lines: true,
            ..Self::default()
        }
    }

    /// Sets whether to skip system notices.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets whether unreadable lines are skipped while streaming.
    #[must_use]
    pub fn with_skip_invalid_lines(mut self, skip: bool) -> Self {
        self.skip_invalid_lines = skip;
        self
    }
}
