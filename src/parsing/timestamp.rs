//! Date and time resolution for header lines.
//!
//! WhatsApp writes dates in the exporting phone's locale, so the same
//! transcript format can carry `2026/02/15`, `15/02/2026` or `15.02.26`.
//! The year position is decided by field width alone:
//!
//! | First field | Third field | Order |
//! |-------------|-------------|-------|
//! | 4 digits | any | `YYYY-MM-DD` |
//! | 1-3 digits | 4 digits | `DD-MM-YYYY` |
//! | 1-3 digits | 2 digits | `DD-MM-YY`, year `20YY` |
//! | 1-3 digits | 1 or 3 digits | `DD-MM-Y`, year as written |
//!
//! Genuinely ambiguous dates such as `03/04/05` always resolve the same way,
//! which is not necessarily what the exporting locale meant.
//!
//! Resolution is best-effort. When a header's date or time cannot be turned
//! into a real calendar instant the parser asks its [`Clock`] instead.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Where the year sits in a three-field date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `YYYY-MM-DD`
    YearFirst,
    /// `DD-MM-YYYY` (or a year of unusual width, taken as written)
    DayFirst,
    /// `DD-MM-YY`, expanded to `20YY`
    DayFirstShortYear,
}

impl DateOrder {
    /// Picks the order from the widths of the first and third fields.
    pub fn detect(first: &str, third: &str) -> DateOrder {
        if first.len() == 4 {
            DateOrder::YearFirst
        } else if third.len() == 4 {
            DateOrder::DayFirst
        } else if third.len() == 2 {
            DateOrder::DayFirstShortYear
        } else {
            DateOrder::DayFirst
        }
    }
}

/// 12-hour clock suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn to_24h(self, hour: u32) -> u32 {
        match self {
            Meridiem::Pm if hour < 12 => hour + 12,
            Meridiem::Am if hour == 12 => 0,
            _ => hour,
        }
    }
}

/// Resolves a header date such as `15/02/2026` or `2026-02-15`.
///
/// Returns `None` if the date doesn't have exactly three numeric fields or
/// names a day that doesn't exist.
///
/// # Example
///
/// ```
/// use chatdesk::parsing::timestamp::resolve_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 2, 15);
/// assert_eq!(resolve_date("2026/02/15"), expected);
/// assert_eq!(resolve_date("15/02/2026"), expected);
/// assert_eq!(resolve_date("15.02.26"), expected);
/// ```
pub fn resolve_date(raw: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = raw.trim().split(['/', '-', '.']).collect();
    let [first, second, third] = fields.as_slice() else {
        return None;
    };

    let (year, month, day) = match DateOrder::detect(first, third) {
        DateOrder::YearFirst => (first.parse::<i32>().ok()?, *second, *third),
        DateOrder::DayFirst => (third.parse::<i32>().ok()?, *second, *first),
        DateOrder::DayFirstShortYear => (2000 + third.parse::<i32>().ok()?, *second, *first),
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Splits an optional trailing `AM`/`PM` (any case) off a time string.
fn split_meridiem(raw: &str) -> (&str, Option<Meridiem>) {
    let raw = raw.trim();
    let Some(split) = raw.len().checked_sub(2) else {
        return (raw, None);
    };
    let (Some(clock), Some(suffix)) = (raw.get(..split), raw.get(split..)) else {
        return (raw, None);
    };

    if suffix.eq_ignore_ascii_case("am") {
        (clock.trim_end(), Some(Meridiem::Am))
    } else if suffix.eq_ignore_ascii_case("pm") {
        (clock.trim_end(), Some(Meridiem::Pm))
    } else {
        (raw, None)
    }
}

/// Resolves a header time such as `10:30`, `10:30:15` or `2:15 PM`.
///
/// Minutes and seconds default to zero when absent. Returns `None` for
/// non-numeric fields or an impossible clock time.
///
/// # Example
///
/// ```
/// use chatdesk::parsing::timestamp::resolve_time;
/// use chrono::Timelike;
///
/// assert_eq!(resolve_time("2:15 PM").map(|t| t.hour()), Some(14));
/// assert_eq!(resolve_time("12:00 AM").map(|t| t.hour()), Some(0));
/// assert_eq!(resolve_time("12:00 PM").map(|t| t.hour()), Some(12));
/// ```
pub fn resolve_time(raw: &str) -> Option<NaiveTime> {
    let (clock, meridiem) = split_meridiem(raw);
    let mut fields = clock.split(':');

    let hour: u32 = fields.next()?.trim().parse().ok()?;
    let minute: u32 = match fields.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    let second: u32 = match fields.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };

    let hour = meridiem.map_or(hour, |m| m.to_24h(hour));
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Resolves a header's date and time into one local timestamp.
pub fn resolve_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(resolve_date(date)?.and_time(resolve_time(time)?))
}

/// Source of the wall-clock time used when a header's timestamp can't be
/// resolved.
pub trait Clock {
    /// Returns the current local time without offset, at whole seconds.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock that always reads the same instant.
///
/// # Example
///
/// ```
/// use chatdesk::parsing::timestamp::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let noon = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(FixedClock::new(noon).now(), noon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_detect_order() {
        assert_eq!(DateOrder::detect("2026", "15"), DateOrder::YearFirst);
        assert_eq!(DateOrder::detect("15", "2026"), DateOrder::DayFirst);
        assert_eq!(DateOrder::detect("15", "26"), DateOrder::DayFirstShortYear);
        assert_eq!(DateOrder::detect("15", "6"), DateOrder::DayFirst);
    }

    #[test]
    fn test_year_first() {
        assert_eq!(resolve_date("2026/02/15"), ymd(2026, 2, 15));
        assert_eq!(resolve_date("2026-2-5"), ymd(2026, 2, 5));
    }

    #[test]
    fn test_day_first_four_digit_year() {
        assert_eq!(resolve_date("15/02/2026"), ymd(2026, 2, 15));
        assert_eq!(resolve_date("1.2.2026"), ymd(2026, 2, 1));
    }

    #[test]
    fn test_two_digit_year_expands_to_2000s() {
        assert_eq!(resolve_date("15/02/26"), ymd(2026, 2, 15));
        assert_eq!(resolve_date("03/04/05"), ymd(2005, 4, 3));
    }

    #[test]
    fn test_odd_width_year_taken_as_written() {
        assert_eq!(resolve_date("15/02/7").map(|d| d.year()), Some(7));
    }

    #[test]
    fn test_mixed_separators_normalized() {
        assert_eq!(resolve_date("15-02.2026"), ymd(2026, 2, 15));
    }

    #[test]
    fn test_us_order_month_over_twelve_is_unresolved() {
        // 2/15/26 reads as day 2, month 15
        assert_eq!(resolve_date("2/15/26"), None);
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(resolve_date("31/02/2026"), None);
        assert_eq!(resolve_date("15/02"), None);
        assert_eq!(resolve_date("15/02/2026/1"), None);
        assert_eq!(resolve_date("aa/02/2026"), None);
        assert_eq!(resolve_date(""), None);
    }

    #[test]
    fn test_time_24h() {
        let t = resolve_time("10:30:15").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (10, 30, 15));

        let t = resolve_time("9:05").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (9, 5, 0));
    }

    #[test]
    fn test_time_meridiem() {
        assert_eq!(resolve_time("2:15 PM").unwrap().hour(), 14);
        assert_eq!(resolve_time("2:15pm").unwrap().hour(), 14);
        assert_eq!(resolve_time("12:00 AM").unwrap().hour(), 0);
        assert_eq!(resolve_time("12:00 PM").unwrap().hour(), 12);
        assert_eq!(resolve_time("11:59:59 am").unwrap().hour(), 11);
        assert_eq!(resolve_time("2:15:00\u{202f}PM").unwrap().hour(), 14);
    }

    #[test]
    fn test_bad_times() {
        assert_eq!(resolve_time("25:00"), None);
        assert_eq!(resolve_time("10:61"), None);
        assert_eq!(resolve_time("x:10"), None);
        assert_eq!(resolve_time(""), None);
    }

    #[test]
    fn test_resolve_timestamp() {
        let ts = resolve_timestamp("15/02/2026", "10:30:15").unwrap();
        assert_eq!(ts.format("%Y-%m-%dT%H:%M:%S").to_string(), "2026-02-15T10:30:15");
        assert!(resolve_timestamp("15/02/2026", "99:00").is_none());
    }

    #[test]
    fn test_system_clock_whole_seconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn test_clock_by_reference() {
        let at = ymd(2026, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.now(), at);
    }
}
