//! Streaming transcript parsing over any [`BufRead`] source.
//!
//! Transcripts exported from long-running support groups can be large.
//! [`MessageStream`] reads one line at a time and yields each message as
//! soon as the following header proves it complete, so memory use is
//! bounded by the longest single message.
//!
//! The stream classifies lines exactly like
//! [`ChatLogParser::parse`](crate::ChatLogParser::parse); for valid UTF-8
//! input both produce the same messages.
//!
//! # Example
//!
//! ```rust
//! use chatdesk::ChatLogParser;
//!
//! let input = "[15/02/2026, 10:30:15] A: hi\nthere\n[15/02/2026, 10:31:00] B: ok\n";
//! let parser = ChatLogParser::new();
//!
//! let messages: Vec<_> = parser
//!     .stream(input.as_bytes())
//!     .collect::<chatdesk::Result<_>>()?;
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].message_text, "hi\nthere");
//! # Ok::<(), chatdesk::ChatdeskError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::ParsedMessage;
use crate::error::ChatdeskError;
use crate::parser::{ChatLogParser, LineFold, ParseReport};
use crate::parsing::Clock;

impl<C: Clock> ChatLogParser<C> {
    /// Streams messages from a reader.
    ///
    /// Lines that aren't valid UTF-8 are yielded as
    /// [`ChatdeskError::InvalidLine`] (or skipped when
    /// [`skip_invalid_lines`](crate::config::ParserConfig::skip_invalid_lines)
    /// is set) and parsing continues with the next line. A read error ends
    /// the stream after being yielded.
    pub fn stream<R: BufRead>(&self, reader: R) -> MessageStream<'_, R, C> {
        MessageStream {
            reader,
            fold: LineFold::new(self),
            line_buffer: Vec::with_capacity(4096),
            bytes_read: 0,
            skip_invalid: self.config().skip_invalid_lines,
            finished: false,
        }
    }

    /// Opens a transcript file and streams its messages.
    ///
    /// Uses [`buffer_size`](crate::config::ParserConfig::buffer_size) for
    /// the read buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::Io`] if the file can't be opened.
    pub fn stream_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<MessageStream<'_, BufReader<File>, C>, ChatdeskError> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(self.config().buffer_size, file);
        Ok(self.stream(reader))
    }

    /// Reads a whole transcript from a reader, stopping at the first error.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<ParsedMessage>, ChatdeskError> {
        self.stream(reader).collect()
    }
}

/// Iterator over messages read from a [`BufRead`] source.
///
/// Created by [`ChatLogParser::stream`].
pub struct MessageStream<'p, R, C> {
    reader: R,
    fold: LineFold<'p, C>,
    line_buffer: Vec<u8>,
    bytes_read: u64,
    skip_invalid: bool,
    finished: bool,
}

impl<R, C> MessageStream<'_, R, C> {
    /// Returns the number of bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Statistics for the lines consumed so far.
    pub fn report(&self) -> ParseReport {
        self.fold.report()
    }
}

impl<R: BufRead, C: Clock> Iterator for MessageStream<'_, R, C> {
    type Item = Result<ParsedMessage, ChatdeskError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            self.line_buffer.clear();
            let bytes = match self.reader.read_until(b'\n', &mut self.line_buffer) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };

            if bytes == 0 {
                self.finished = true;
                return self.fold.finish().map(Ok);
            }
            self.bytes_read += bytes as u64;

            match std::str::from_utf8(&self.line_buffer) {
                Ok(line) => {
                    if let Some(msg) = self.fold.push_line(line) {
                        return Some(Ok(msg));
                    }
                }
                Err(source) => {
                    self.fold.skip_line();
                    let line = self.fold.line_no();
                    if self.skip_invalid {
                        warn!(line, "skipping line that is not valid UTF-8");
                        continue;
                    }
                    return Some(Err(ChatdeskError::InvalidLine { line, source }));
                }
            }
        }
    }
}
