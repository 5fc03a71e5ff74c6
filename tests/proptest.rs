//! Property-based tests for chatdesk.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatdesk::core::{FilterConfig, ImportBatch, apply_filters};
use chatdesk::parsing::FixedClock;
use chatdesk::{ChatLogParser, ParsedMessage};
use chrono::{NaiveDate, NaiveDateTime};

fn fallback() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn parser() -> ChatLogParser<FixedClock> {
    ChatLogParser::new().with_clock(FixedClock::new(fallback()))
}

/// A message as it would appear in an export, before rendering.
#[derive(Debug, Clone)]
struct Entry {
    sender: String,
    lines: Vec<String>,
    day: u32,
    hour: u32,
    minute: u32,
    bracketed: bool,
}

impl Entry {
    fn render(&self) -> String {
        let header = if self.bracketed {
            format!(
                "[{:02}/02/2026, {:02}:{:02}:00] {}: {}",
                self.day, self.hour, self.minute, self.sender, self.lines[0]
            )
        } else {
            format!(
                "{:02}/02/2026, {:02}:{:02} - {}: {}",
                self.day, self.hour, self.minute, self.sender, self.lines[0]
            )
        };
        std::iter::once(header)
            .chain(self.lines[1..].iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generate a random entry using fast strategies (no regex!)
fn arb_entry() -> impl Strategy<Value = Entry> {
    (
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob Smith".to_string(),
            "Иван".to_string(),
            "+44 7700 900123".to_string(),
            "村上".to_string(),
        ]),
        prop::collection::vec(
            prop::sample::select(vec![
                "Hello".to_string(),
                "Printer jammed again".to_string(),
                "Error: code 5".to_string(),
                "Привет мир".to_string(),
                "🎉🔥 emoji".to_string(),
                "semi;colons \"quotes\"".to_string(),
            ]),
            1..4,
        ),
        1u32..=28,
        0u32..24,
        0u32..60,
        any::<bool>(),
    )
        .prop_map(|(sender, lines, day, hour, minute, bracketed)| Entry {
            sender,
            lines,
            day,
            hour,
            minute,
            bracketed,
        })
}

fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(arb_entry(), 0..max_len)
}

fn transcript(entries: &[Entry]) -> String {
    entries.iter().map(Entry::render).collect::<Vec<_>>().join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn parse_never_panics(s in "\\PC*") {
        let _ = parser().parse(&s);
    }

    #[test]
    fn one_message_per_header(entries in arb_entries(30)) {
        let messages = parser().parse(&transcript(&entries));
        prop_assert_eq!(messages.len(), entries.len());
    }

    #[test]
    fn rendered_entries_round_trip(entries in arb_entries(30)) {
        let messages = parser().parse(&transcript(&entries));

        for (msg, entry) in messages.iter().zip(&entries) {
            prop_assert_eq!(&msg.sender_name, &entry.sender);
            prop_assert_eq!(msg.message_text.clone(), entry.lines.join("\n"));
            let expected = NaiveDate::from_ymd_opt(2026, 2, entry.day)
                .unwrap()
                .and_hms_opt(entry.hour, entry.minute, 0)
                .unwrap();
            prop_assert_eq!(msg.received_at, expected);
            prop_assert!(msg.selected);
        }
    }

    #[test]
    fn noise_prefix_does_not_change_result(entries in arb_entries(10), noise in "[a-z ]{0,40}") {
        let text = transcript(&entries);
        let prefixed = format!("{noise}\n{text}");
        prop_assert_eq!(parser().parse(&prefixed), parser().parse(&text));
    }

    #[test]
    fn iterator_agrees_with_parse(entries in arb_entries(20)) {
        let text = transcript(&entries);
        let p = parser();

        let lazy: Vec<ParsedMessage> = p.messages(&text).collect();
        prop_assert_eq!(lazy, p.parse(&text));
    }

    #[cfg(feature = "streaming")]
    #[test]
    fn stream_agrees_with_parse(entries in arb_entries(20)) {
        let text = transcript(&entries);
        let p = parser();

        let streamed = p.parse_reader(text.as_bytes()).unwrap();
        prop_assert_eq!(streamed, p.parse(&text));
    }

    #[test]
    fn filters_keep_length_and_order(entries in arb_entries(30), sender in prop::sample::select(vec!["Alice", "Bob Smith", "nobody"])) {
        let messages = parser().parse(&transcript(&entries));
        let filtered = apply_filters(messages.clone(), &FilterConfig::new().with_sender(sender));

        prop_assert_eq!(filtered.len(), messages.len());
        for (before, after) in messages.iter().zip(&filtered) {
            prop_assert_eq!(&before.message_text, &after.message_text);
            prop_assert_eq!(after.selected, before.sender_name.eq_ignore_ascii_case(sender));
        }
    }

    #[test]
    fn toggle_all_twice_is_uniform(entries in arb_entries(20), flips in prop::collection::vec(0usize..20, 0..10)) {
        let mut batch = ImportBatch::new(parser().parse(&transcript(&entries)));
        for i in flips {
            batch.toggle(i);
        }

        let state = batch.toggle_all();
        let expected = if state { batch.len() } else { 0 };
        prop_assert_eq!(batch.selected_count(), expected);
    }

    #[test]
    fn import_keeps_only_selected(entries in arb_entries(20), flips in prop::collection::vec(0usize..20, 0..10)) {
        let mut batch = ImportBatch::new(parser().parse(&transcript(&entries)));
        for i in flips {
            batch.toggle(i);
        }
        let selected = batch.selected_count();

        match batch.into_request() {
            Ok(request) => {
                prop_assert_eq!(request.messages.len(), selected);
                let (rows, summary) = request.into_records().unwrap();
                prop_assert_eq!(rows.len(), summary.imported);
                prop_assert_eq!(summary.imported + summary.skipped, selected);
            }
            Err(_) => prop_assert_eq!(selected, 0),
        }
    }
}
