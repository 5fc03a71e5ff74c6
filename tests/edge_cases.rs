//! Edge case tests for chatdesk
//!
//! Boundary conditions of transcript parsing that pasted exports hit in
//! practice: odd whitespace, unusual scripts, malformed headers and very
//! long lines.

use chatdesk::config::ParserConfig;
use chatdesk::parsing::{FixedClock, is_header, match_header, resolve_date, resolve_time};
use chatdesk::ChatLogParser;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::time::{Duration, Instant};

fn fallback() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn parser() -> ChatLogParser<FixedClock> {
    ChatLogParser::new().with_clock(FixedClock::new(fallback()))
}

// =========================================================================
// Unicode and special characters
// =========================================================================

#[test]
fn test_unicode_senders_and_text() {
    let text = "\
[15/02/2026, 10:30:00] Иван Петров: Принтер не работает
[15/02/2026, 10:31:00] 田中太郎: こんにちは
[15/02/2026, 10:32:00] محمد: مرحبا
[15/02/2026, 10:33:00] 🔥 Fire Warden 🔥: Alarm panel beeping 🚨";

    let messages = parser().parse(text);
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].sender_name, "Иван Петров");
    assert_eq!(messages[1].message_text, "こんにちは");
    assert_eq!(messages[2].sender_name, "محمد");
    assert_eq!(messages[3].sender_name, "🔥 Fire Warden 🔥");
}

#[test]
fn test_phone_number_sender() {
    let messages = parser().parse("15/02/2026, 10:30 - +44 7700 900123: Hi, VPN issue");
    assert_eq!(messages[0].sender_name, "+44 7700 900123");
}

#[test]
fn test_byte_order_mark_on_first_line() {
    let messages = parser().parse("\u{feff}[15/02/2026, 10:30:00] A: first");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_name, "A");
}

#[test]
fn test_inner_whitespace_preserved() {
    let messages = parser().parse("[15/02/2026, 10:30:00] A:   spaced    out   \n   indented  ");
    assert_eq!(messages[0].message_text, "spaced    out\nindented");
}

// =========================================================================
// Line endings and blank lines
// =========================================================================

#[test]
fn test_crlf_line_endings() {
    let text = "[15/02/2026, 10:30:00] A: one\r\ncontinued\r\n[15/02/2026, 10:31:00] B: two\r\n";
    let messages = parser().parse(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message_text, "one\ncontinued");
    assert_eq!(messages[1].message_text, "two");
}

#[test]
fn test_blank_lines_inside_message_are_not_kept() {
    let text = "[15/02/2026, 10:30:00] A: one\n\n\ntwo\n   \nthree";
    let outcome = parser().parse_with_report(text);
    assert_eq!(outcome.messages[0].message_text, "one\ntwo\nthree");
    assert_eq!(outcome.report.blank_lines, 3);
}

#[test]
fn test_only_noise() {
    let outcome = parser().parse_with_report("hello\nworld\n-----");
    assert!(outcome.messages.is_empty());
    assert!(outcome.report.found_nothing());
    assert_eq!(outcome.report.dropped_lines, 3);
}

// =========================================================================
// Malformed headers
// =========================================================================

#[test]
fn test_not_headers() {
    assert!(!is_header("[15/02/2026, 10:30:00]A: no space after bracket"));
    assert!(!is_header("[15/02/2026 10:30:00 A: no closing bracket"));
    assert!(!is_header("15/02/2026, 10:30 A: no dash"));
    assert!(!is_header("[15/02, 10:30:00] A: two date fields"));
    assert!(!is_header("[15/02/2026, 10:30:00] A:no space after colon"));
    assert!(!is_header("[15/02/2026, 10:30:00]  : blank sender"));
    assert!(!is_header("Re: [15/02/2026, 10:30:00] A: not anchored"));
}

#[test]
fn test_non_ascii_digit_header_is_continuation() {
    let text = "15/02/2026, 10:30 - A: first\n١٥/٠٢/٢٠٢٦, ١٠:٣٠ - B: second";
    let outcome = parser().parse_with_report(text);

    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.messages[0].sender_name, "A");
    assert_eq!(
        outcome.messages[0].message_text,
        "first\n١٥/٠٢/٢٠٢٦, ١٠:٣٠ - B: second"
    );
    assert_eq!(outcome.report.continuation_lines, 1);
    assert_eq!(outcome.report.fallback_timestamps, 0);
}

#[test]
fn test_header_fields() {
    let header = match_header("[2026-02-15, 2:15 PM] Jane Doe: Call me: urgent").unwrap();
    assert_eq!(header.date, "2026-02-15");
    assert_eq!(header.time, "2:15 PM");
    assert_eq!(header.sender, "Jane Doe");
    assert_eq!(header.text, "Call me: urgent");
}

#[test]
fn test_malformed_date_falls_back() {
    let text = "\
[00/00/0000, 10:30:00] A: zeros
[15/13/2026, 10:30:00] B: month 13
[15/02/2026, 25:00:00] C: hour 25
[15/02/2026, 10:61] D: minute 61";

    let messages = parser().parse(text);
    assert_eq!(messages.len(), 4);
    assert!(messages.iter().all(|m| m.received_at == fallback()));
}

#[test]
fn test_unusual_year_width_taken_as_written() {
    assert_eq!(resolve_date("15/02/6").map(|d| d.year()), Some(6));
    assert_eq!(resolve_date("15/02/206").map(|d| d.year()), Some(206));
    assert_eq!(resolve_date("15/02/26").map(|d| d.year()), Some(2026));
}

#[test]
fn test_leap_day() {
    assert!(resolve_date("29/02/2024").is_some());
    assert!(resolve_date("29/02/2026").is_none());
}

#[test]
fn test_time_edge_values() {
    assert!(resolve_time("0:00").is_some());
    assert!(resolve_time("23:59:59").is_some());
    assert!(resolve_time("13:00 PM").is_some());
    assert!(resolve_time("24:00").is_none());
    assert!(resolve_time("10:30:60").is_none());
}

// =========================================================================
// Robustness
// =========================================================================

#[test]
fn test_many_colons_is_linear() {
    let line = format!("[15/02/2026, 10:30:00] {}", "a:".repeat(50_000));
    let start = Instant::now();
    let messages = parser().parse(&line);
    assert!(start.elapsed() < Duration::from_secs(5));

    // "a:a:...a:" never has whitespace after a colon, so it is not a header
    assert!(messages.is_empty());
}

#[test]
fn test_very_long_message() {
    let body = "X".repeat(200_000);
    let messages = parser().parse(&format!("[15/02/2026, 10:30:00] A: {body}"));
    assert_eq!(messages[0].message_text.len(), 200_000);
}

#[test]
fn test_many_continuation_lines() {
    let mut text = String::from("[15/02/2026, 10:30:00] A: start\n");
    for i in 0..10_000 {
        text.push_str(&format!("line {i}\n"));
    }
    let messages = parser().parse(&text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].line_count(), 10_001);
}

#[test]
fn test_streaming_config_does_not_change_parse() {
    let text = "[15/02/2026, 10:30:00] A: one\n[15/02/2026, 10:31:00] B: two";
    let streaming = ChatLogParser::with_config(ParserConfig::streaming())
        .with_clock(FixedClock::new(fallback()));
    assert_eq!(streaming.parse(text), parser().parse(text));
}
