//! # chatdesk CLI
//!
//! Parses a WhatsApp transcript from a file or stdin and writes the
//! messages, or a bulk-import request, to a file or stdout.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};

use chatdesk::cli::Args;
use chatdesk::config::ParserConfig;
use chatdesk::core::{ImportBatch, apply_filters};
use chatdesk::format::write_to_writer;
use chatdesk::logging::init_logging;
use chatdesk::{ChatLogParser, ChatdeskError};

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_logging(args.verbose, args.quiet) {
        eprintln!("Warning: {e}");
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatdeskError> {
    let start = Instant::now();
    let text = read_input(args)?;

    let config = ParserConfig::new().with_skip_system_messages(args.skip_system);
    let parser = ChatLogParser::with_config(config);
    let outcome = parser.parse_with_report(&text);
    if outcome.messages.is_empty() {
        return Err(ChatdeskError::NoMessagesParsed);
    }

    let found = outcome.messages.len();
    let messages = apply_filters(outcome.messages, &args.filter_config()?);
    let selected = messages.iter().filter(|m| m.selected).count();
    info!(found, selected, "transcript parsed");

    let mut out = open_output(args)?;
    let written = if args.import {
        let mut batch = ImportBatch::new(messages);
        if let Some(group) = &args.group {
            batch = batch.with_group_name(group.as_str());
        }
        let request = batch.into_request()?;
        serde_json::to_writer_pretty(&mut out, &request)?;
        out.write_all(b"\n")?;
        format!("import request with {} message(s)", request.messages.len())
    } else {
        let format = args.output_format();
        write_to_writer(&messages, &mut out, format, &args.output_config())?;
        format!("{format}")
    };
    out.flush()?;

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");

    if !args.quiet {
        eprintln!("Found {found} message(s), {selected} selected");
        if outcome.report.fallback_timestamps > 0 {
            eprintln!(
                "{} message(s) had an unreadable timestamp and use the current time",
                outcome.report.fallback_timestamps
            );
        }
        if outcome.report.system_messages_skipped > 0 {
            eprintln!(
                "Skipped {} system notice(s)",
                outcome.report.system_messages_skipped
            );
        }
        eprintln!("Wrote {} to {}", written, args.output_label());
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String, ChatdeskError> {
    if args.reads_stdin() {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return String::from_utf8(bytes).map_err(|e| ChatdeskError::utf8("stdin", e));
    }

    let bytes = fs::read(&args.input)?;
    String::from_utf8(bytes).map_err(|e| ChatdeskError::utf8(args.input.display().to_string(), e))
}

fn open_output(args: &Args) -> Result<Box<dyn Write>, ChatdeskError> {
    Ok(match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
