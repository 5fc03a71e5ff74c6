//! WhatsApp transcript parser.
//!
//! [`ChatLogParser`] turns a pasted chat export into an ordered list of
//! [`ParsedMessage`] records in a single pass over the lines:
//!
//! 1. Blank lines are skipped.
//! 2. A header line (see [`match_header`]) closes the open message and opens
//!    a new one.
//! 3. Any other line is appended to the open message, or dropped as
//!    preamble noise if no message is open yet.
//! 4. The message still open at the end of input is emitted.
//!
//! Output order is transcript order; messages are never sorted by time.
//! Parsing never fails: a header whose date or time can't be resolved gets
//! the parser's [`Clock`] reading instead.
//!
//! # Example
//!
//! ```rust
//! use chatdesk::ChatLogParser;
//!
//! let transcript = "\
//! [15/02/2026, 10:30:15] John Smith: My printer isn't working
//! Also it's making a grinding noise
//! [15/02/2026, 10:32:00] Jane Doe: Outlook keeps crashing";
//!
//! let messages = ChatLogParser::new().parse(transcript);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(
//!     messages[0].message_text,
//!     "My printer isn't working\nAlso it's making a grinding noise"
//! );
//! assert_eq!(messages[1].sender_name, "Jane Doe");
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, trace};

use crate::ParsedMessage;
use crate::config::ParserConfig;
use crate::error::ChatdeskError;
use crate::parsing::{
    Clock, Header, SystemClock, is_system_message, match_header, normalize_line, resolve_timestamp,
};

/// Parser for pasted WhatsApp chat transcripts.
///
/// The parser holds no mutable state; one instance can serve any number of
/// concurrent callers.
///
/// # Example
///
/// ```rust
/// use chatdesk::ChatLogParser;
/// use chatdesk::parsing::FixedClock;
/// use chrono::NaiveDate;
///
/// let noon = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let parser = ChatLogParser::new().with_clock(FixedClock::new(noon));
///
/// // Month 15 doesn't exist, so the clock reading is used
/// let messages = parser.parse("2/15/26, 10:30 AM - Bob: VPN is down");
/// assert_eq!(messages[0].received_at, noon);
/// ```
#[derive(Debug, Clone)]
pub struct ChatLogParser<C = SystemClock> {
    config: ParserConfig,
    clock: C,
}

impl ChatLogParser<SystemClock> {
    /// Creates a parser with default configuration and the system clock.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            clock: SystemClock,
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for ChatLogParser<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChatLogParser<C> {
    /// Replaces the clock used for unresolvable timestamps.
    pub fn with_clock<D: Clock>(self, clock: D) -> ChatLogParser<D> {
        ChatLogParser {
            config: self.config,
            clock,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Parses a transcript into messages.
    ///
    /// Empty or whitespace-only input yields an empty vector.
    pub fn parse(&self, text: &str) -> Vec<ParsedMessage> {
        self.messages(text).collect()
    }

    /// Parses a transcript and also returns line statistics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatdesk::ChatLogParser;
    ///
    /// let outcome = ChatLogParser::new().parse_with_report(
    ///     "Messages to this group are now secured\n15/02/2026, 10:30 - A: hi\nthere",
    /// );
    /// assert_eq!(outcome.messages.len(), 1);
    /// assert_eq!(outcome.report.dropped_lines, 1);
    /// assert_eq!(outcome.report.continuation_lines, 1);
    /// ```
    pub fn parse_with_report(&self, text: &str) -> ParseOutcome {
        let mut iter = self.messages(text);
        let messages: Vec<ParsedMessage> = iter.by_ref().collect();
        let report = iter.report();

        debug!(
            messages = messages.len(),
            headers = report.header_lines,
            dropped = report.dropped_lines,
            fallback_timestamps = report.fallback_timestamps,
            "parsed transcript"
        );

        ParseOutcome { messages, report }
    }

    /// Returns a lazy iterator over the messages of a transcript.
    ///
    /// Yields exactly what [`parse`](Self::parse) returns, one message at a
    /// time. A message is yielded once the next header (or the end of input)
    /// shows it is complete.
    pub fn messages<'a>(&'a self, text: &'a str) -> Messages<'a, C> {
        Messages {
            lines: text.lines(),
            fold: LineFold::new(self),
        }
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::Io`] if the file can't be read and
    /// [`ChatdeskError::Utf8`] if it isn't valid UTF-8.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<ParsedMessage>, ChatdeskError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatdeskError::utf8(path.display().to_string(), e))?;
        Ok(self.parse(&text))
    }
}

/// Parses a transcript with the default parser.
///
/// Shorthand for `ChatLogParser::new().parse(text)`.
///
/// ```rust
/// assert!(chatdesk::parse("").is_empty());
/// assert!(chatdesk::parse("   \n  ").is_empty());
/// ```
pub fn parse(text: &str) -> Vec<ParsedMessage> {
    ChatLogParser::new().parse(text)
}

/// Messages plus line statistics from one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub messages: Vec<ParsedMessage>,
    pub report: ParseReport,
}

/// Line statistics from one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Lines that opened a message.
    pub header_lines: usize,
    /// Lines appended to an open message.
    pub continuation_lines: usize,
    /// Non-header lines seen before the first header.
    pub dropped_lines: usize,
    /// Empty or whitespace-only lines.
    pub blank_lines: usize,
    /// Headers whose timestamp came from the clock.
    pub fallback_timestamps: usize,
    /// Headers dropped as system notices.
    pub system_messages_skipped: usize,
}

impl ParseReport {
    /// Total number of lines seen.
    pub fn total_lines(&self) -> usize {
        self.header_lines + self.continuation_lines + self.dropped_lines + self.blank_lines
    }

    /// Returns `true` if no header line was recognized.
    pub fn found_nothing(&self) -> bool {
        self.header_lines == 0
    }
}

/// Lazy iterator over the messages of an in-memory transcript.
///
/// Created by [`ChatLogParser::messages`].
#[derive(Debug)]
pub struct Messages<'a, C> {
    lines: std::str::Lines<'a>,
    fold: LineFold<'a, C>,
}

impl<C> Messages<'_, C> {
    /// Statistics for the lines consumed so far.
    pub fn report(&self) -> ParseReport {
        self.fold.report()
    }
}

impl<C: Clock> Iterator for Messages<'_, C> {
    type Item = ParsedMessage;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if let Some(msg) = self.fold.push_line(line) {
                return Some(msg);
            }
        }
        self.fold.finish()
    }
}

/// The single-pass accumulator behind every parsing entry point.
///
/// Holds at most one open message. Feeding a line returns the message it
/// completed, if any.
#[derive(Debug)]
pub(crate) struct LineFold<'p, C> {
    parser: &'p ChatLogParser<C>,
    open: Option<ParsedMessage>,
    report: ParseReport,
    line_no: usize,
}

impl<C> LineFold<'_, C> {
    pub(crate) fn report(&self) -> ParseReport {
        self.report
    }

    #[cfg_attr(not(feature = "streaming"), allow(dead_code))]
    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    /// Counts a line that couldn't be read at all.
    #[cfg_attr(not(feature = "streaming"), allow(dead_code))]
    pub(crate) fn skip_line(&mut self) {
        self.line_no += 1;
    }
}

impl<'p, C: Clock> LineFold<'p, C> {
    pub(crate) fn new(parser: &'p ChatLogParser<C>) -> Self {
        Self {
            parser,
            open: None,
            report: ParseReport::default(),
            line_no: 0,
        }
    }

    /// Feeds one raw line (with or without its line terminator).
    pub(crate) fn push_line(&mut self, raw: &str) -> Option<ParsedMessage> {
        self.line_no += 1;
        let line = normalize_line(raw);

        if line.is_empty() {
            self.report.blank_lines += 1;
            return None;
        }

        if let Some(header) = match_header(line) {
            self.report.header_lines += 1;
            let received_at = self.received_at(&header);
            let next = ParsedMessage::new(header.sender, header.text, received_at);
            return self.open.replace(next).and_then(|msg| self.admit(msg));
        }

        match self.open.as_mut() {
            Some(open) => {
                open.push_line(line);
                self.report.continuation_lines += 1;
            }
            None => {
                self.report.dropped_lines += 1;
                trace!(line = self.line_no, "dropping line before first message header");
            }
        }
        None
    }

    /// Closes the open message at end of input.
    pub(crate) fn finish(&mut self) -> Option<ParsedMessage> {
        self.open.take().and_then(|msg| self.admit(msg))
    }

    fn received_at(&mut self, header: &Header<'_>) -> NaiveDateTime {
        if let Some(ts) = resolve_timestamp(header.date, header.time) {
            return ts;
        }

        self.report.fallback_timestamps += 1;
        debug!(
            line = self.line_no,
            date = header.date,
            time = header.time,
            "unresolvable header timestamp, using current time"
        );
        self.parser.clock.now()
    }

    fn admit(&mut self, msg: ParsedMessage) -> Option<ParsedMessage> {
        if self.parser.config.skip_system_messages
            && is_system_message(&msg.sender_name, &msg.message_text)
        {
            self.report.system_messages_skipped += 1;
            debug!(sender = %msg.sender_name, "skipping system message");
            return None;
        }
        Some(msg)
    }
}
