//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ParsedMessage;
use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::ChatdeskError;

/// Writes messages to a CSV file with `;` as the delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `ReceivedAt`, `Sender`, `Message`, `Selected`, with
///   `ReceivedAt` and `Selected` present only when enabled in
///   [`OutputConfig`]
/// - Multi-line message text is quoted
pub fn write_csv(
    messages: &[ParsedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    let file = File::create(output_path)?;
    write_csv_to(messages, file, config)
}

/// Writes CSV to any writer.
pub fn write_csv_to<W: Write>(
    messages: &[ParsedMessage],
    writer: W,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    writer.write_record(build_header(config))?;
    for record in config.records(messages) {
        writer.write_record(build_record(&record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
pub fn to_csv(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String, ChatdeskError> {
    let mut buf = Vec::new();
    write_csv_to(messages, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(4);
    if config.include_timestamps {
        header.push("ReceivedAt");
    }
    header.push("Sender");
    header.push("Message");
    if config.include_selected {
        header.push("Selected");
    }
    header
}

fn build_record(record: &OutputRecord<'_>) -> Vec<String> {
    let mut fields = Vec::with_capacity(4);
    if let Some(at) = &record.received_at {
        fields.push(at.clone());
    }
    fields.push(record.sender_name.to_string());
    fields.push(record.message_text.to_string());
    if let Some(selected) = record.selected {
        fields.push(selected.to_string());
    }
    fields
}
