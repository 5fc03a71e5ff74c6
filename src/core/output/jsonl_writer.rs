//! JSON Lines (JSONL) output writer.
//!
//! One compact JSON object per line, convenient for piping into other
//! tools record by record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ParsedMessage;
use crate::core::models::OutputConfig;
use crate::error::ChatdeskError;

/// Writes messages to a JSONL file.
///
/// ```jsonl
/// {"sender_name":"Alice","message_text":"Hello","received_at":"2026-02-15T10:30:15","selected":true}
/// {"sender_name":"Bob","message_text":"Hi","received_at":"2026-02-15T10:31:00","selected":true}
/// ```
pub fn write_jsonl(
    messages: &[ParsedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Writes one JSON object per line to any writer.
pub fn write_jsonl_to<W: Write>(
    messages: &[ParsedMessage],
    mut writer: W,
    config: &OutputConfig,
) -> Result<(), ChatdeskError> {
    for record in config.records(messages) {
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String, ChatdeskError> {
    let mut buf = Vec::new();
    write_jsonl_to(messages, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn msg(sender: &str, text: &str) -> ParsedMessage {
        let at = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(10, 30, 15)
            .unwrap();
        ParsedMessage::new(sender, text, at)
    }

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let messages = vec![msg("Alice", "Hello\nagain"), msg("Bob", "Hi")];
        let jsonl = to_jsonl(&messages, &OutputConfig::new()).unwrap();

        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("sender_name").is_some());
        }
        assert!(lines[0].contains(r#""message_text":"Hello\nagain""#));
    }

    #[test]
    fn test_to_jsonl_selected_only() {
        let messages = vec![msg("Alice", "Hello"), msg("Bob", "Hi").with_selected(false)];
        let jsonl = to_jsonl(&messages, &OutputConfig::new().selected_only()).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.contains("Alice"));
    }

    #[test]
    fn test_write_jsonl_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&[msg("Alice", "Hello")], temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_empty_is_empty_string() {
        assert!(to_jsonl(&[], &OutputConfig::new()).unwrap().is_empty());
    }
}
