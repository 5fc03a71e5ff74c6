//! Header-line recognition for WhatsApp transcripts.
//!
//! A header line starts a new message. WhatsApp writes two shapes of header
//! depending on platform and locale:
//!
//! - Bracketed: `[15/02/2026, 10:30:15] John Smith: My printer isn't working`
//! - Dash: `15/02/2026, 10:30 - John Smith: My printer isn't working`
//!
//! Both patterns are anchored at the start of the (trimmed) line and
//! compiled once. The `regex` crate matches in linear time, so adversarial
//! lines with many colons cannot blow up.

use std::sync::LazyLock;

use regex::Regex;

/// Date: 1-4 ASCII digits, then 1-2, then 1-4, separated by `/`, `-` or `.`.
macro_rules! date_group {
    () => {
        r"([0-9]{1,4}[/\-.][0-9]{1,2}[/\-.][0-9]{1,4})"
    };
}

/// Time: `H:MM` or `H:MM:SS` in ASCII digits, optional AM/PM suffix.
macro_rules! time_group {
    () => {
        r"([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?(?:\s*[AaPp][Mm])?)"
    };
}

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\[",
        date_group!(),
        r",?\s+",
        time_group!(),
        r"\]\s+(.+?):\s+(.+)$"
    ))
    .unwrap()
});

static DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^",
        date_group!(),
        r",?\s+",
        time_group!(),
        r"\s*[-\x{2013}\x{2014}]\s+(.+?):\s+(.+)$"
    ))
    .unwrap()
});

/// The two header shapes, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderStyle {
    /// `[<date>, <time>] <sender>: <text>`
    ///
    /// Example: `[15/02/2026, 10:30:15] John Smith: Hello`
    Bracketed,
    /// `<date>, <time> - <sender>: <text>` (hyphen, en dash or em dash)
    ///
    /// Example: `15/02/2026, 10:30 - John Smith: Hello`
    Dashed,
}

impl HeaderStyle {
    /// Returns all styles in the order they are tried.
    pub fn all() -> &'static [HeaderStyle] {
        &[HeaderStyle::Bracketed, HeaderStyle::Dashed]
    }

    fn regex(self) -> &'static Regex {
        match self {
            HeaderStyle::Bracketed => &*BRACKETED,
            HeaderStyle::Dashed => &*DASHED,
        }
    }
}

/// Fields captured from one header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Which shape matched.
    pub style: HeaderStyle,
    /// Raw date, e.g. `15/02/2026`.
    pub date: &'a str,
    /// Raw time, e.g. `2:15 PM`.
    pub time: &'a str,
    /// Trimmed sender name, never empty.
    pub sender: &'a str,
    /// Trimmed message text, never empty.
    pub text: &'a str,
}

/// Trims a raw transcript line.
///
/// Besides whitespace this strips the U+200E left-to-right marks that iOS
/// exports put in front of lines and a byte-order mark on the first line.
pub fn normalize_line(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['\u{200e}', '\u{feff}'])
        .trim_start()
}

/// Matches an already-normalized line against the header styles in order.
///
/// Returns `None` for continuation lines and noise. A line whose sender is
/// only whitespace is not a header.
///
/// # Example
///
/// ```
/// use chatdesk::parsing::header::{HeaderStyle, match_header};
///
/// let header = match_header("15/02/2026, 10:30 - Jane Doe: Outlook: crashing").unwrap();
/// assert_eq!(header.style, HeaderStyle::Dashed);
/// assert_eq!(header.sender, "Jane Doe");
/// assert_eq!(header.text, "Outlook: crashing");
///
/// assert!(match_header("Also it's making a grinding noise").is_none());
/// ```
pub fn match_header(line: &str) -> Option<Header<'_>> {
    HeaderStyle::all().iter().find_map(|&style| {
        let caps = style.regex().captures(line)?;
        let sender = caps.get(3)?.as_str().trim();
        let text = caps.get(4)?.as_str().trim();
        if sender.is_empty() || text.is_empty() {
            return None;
        }
        Some(Header {
            style,
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            sender,
            text,
        })
    })
}

/// Returns `true` if the line would open a new message.
pub fn is_header(line: &str) -> bool {
    match_header(normalize_line(line)).is_some()
}
