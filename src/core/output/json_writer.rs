//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ParsedMessage;
use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::ChatdeskError;

/// Writes messages to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "sender_name": "Alice",
///     "message_text": "Hello",
///     "received_at": "2026-02-15T10:30:15",
///     "selected": true
///   }
/// ]
/// ```
pub fn write_json(
    messages: &[ParsedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_json_to(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Writes the JSON array to any writer, followed by a newline.
pub fn write_json_to<W: Write>(
    messages: &[ParsedMessage],
    mut writer: W,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    let records: Vec<OutputRecord<'_>> = config.records(messages).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Converts messages to a JSON array string.
pub fn to_json(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String, ChatdeskError> {
    let records: Vec<OutputRecord<'_>> = config.records(messages).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
