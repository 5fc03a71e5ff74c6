//! Synthetic WhatsApp transcript generator for stress testing chatdesk.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [style]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 big_chat.txt mixed
//!
//! Styles: `ios` (bracketed), `android` (dash), `mixed` (default).

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "John Smith",
    "Jane Doe",
    "Reception",
    "Иван Петров",
    "村上",
    "محمد",
    "+44 7700 900123",
    "🔥 Fire Warden 🔥",
];

const ISSUES: &[&str] = &[
    "My printer isn't working",
    "Outlook keeps crashing when I open attachments",
    "VPN is down again",
    "Can someone reset my password?",
    "The Wi-Fi in meeting room 2 drops every few minutes",
    "Laptop fan is making a grinding noise",
    "Got a weird email asking for my login: is it phishing?",
    "Shared drive says access denied",
];

const FOLLOW_UPS: &[&str] = &[
    "Also it's making a grinding noise",
    "Error code: 0x80070005",
    "Tried restarting, no luck",
    "Time: 10:30 it started",
    "Thanks!",
    "😀👍",
];

const PREAMBLE: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "\u{200e}John Smith created group \"Acme IT Support\"",
];

#[derive(Clone, Copy)]
enum Style {
    Ios,
    Android,
    Mixed,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("big_chat.txt", String::as_str);
    let style = match args.get(3).map_or("mixed", String::as_str) {
        "ios" => Style::Ios,
        "android" => Style::Android,
        "mixed" => Style::Mixed,
        other => {
            eprintln!("Unknown style: {other}. Use 'ios', 'android' or 'mixed'");
            process::exit(1);
        }
    };

    eprintln!("Generating {count} messages into {output}");

    if let Err(e) = generate(count, output, style) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn generate(count: usize, output: &str, style: Style) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    for line in PREAMBLE {
        bytes_written += write_line(&mut writer, line)?;
    }

    for i in 0..count {
        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Unknown");
        let issue = ISSUES.choose(&mut rng).copied().unwrap_or("Help");
        let header = header_line(style, i, sender, issue);
        bytes_written += write_line(&mut writer, &header)?;

        // continuation lines
        for _ in 0..rng.gen_range(0..3) {
            let follow_up = FOLLOW_UPS.choose(&mut rng).copied().unwrap_or("");
            bytes_written += write_line(&mut writer, follow_up)?;
        }

        if i % 500 == 250 {
            bytes_written += write_line(&mut writer, "")?;
        }

        if (i + 1) % 10_000 == 0 {
            let mps = (i + 1) as f64 / start.elapsed().as_secs_f64();
            eprint!("\r   Generated {}/{} ({:.0} msg/s)", i + 1, count, mps);
        }
    }

    writer.flush()?;

    eprintln!();
    eprintln!("Done: {:.2} MB in {:.2}s", bytes_written as f64 / 1_000_000.0, start.elapsed().as_secs_f64());
    Ok(())
}

fn header_line(style: Style, i: usize, sender: &str, text: &str) -> String {
    let day = (i % 28) + 1;
    let month = (i / 28 % 12) + 1;
    let hour = i % 24;
    let minute = i % 60;

    let variant = match style {
        Style::Ios => i % 2,
        Style::Android => 2 + i % 2,
        Style::Mixed => i % 4,
    };

    match variant {
        // iOS, 24h with seconds
        0 => format!("[{day:02}/{month:02}/2026, {hour:02}:{minute:02}:15] {sender}: {text}"),
        // iOS, year first
        1 => format!("[2026-{month:02}-{day:02}, {hour:02}:{minute:02}:00] {sender}: {text}"),
        // Android, 12h with short year
        2 => {
            let (h12, suffix) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            format!("{day}/{month}/26, {h12}:{minute:02} {suffix} - {sender}: {text}")
        }
        // Android, dotted date with en dash
        _ => format!("{day:02}.{month:02}.2026, {hour:02}:{minute:02} \u{2013} {sender}: {text}"),
    }
}

fn write_line(writer: &mut impl Write, line: &str) -> io::Result<usize> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(line.len() + 1)
}
