//! Due dates: parsing user input, formatting, and urgency.
//!
//! Input is `YYYY-M-D` (month and day may carry leading zeros). A date that
//! does not exist on the calendar, such as `2024-02-30`, is rejected rather
//! than rolled over into the next month. Accepted dates become local midnight,
//! which must fall after the epoch: a timestamp of zero or below is how the
//! file format spells "no due date".

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// How pressing a due date is relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    DueSoon,
    Later,
}

pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let mut parts = input.trim().split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    local_midnight(date).filter(|due| due.timestamp() > 0)
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight: NaiveDateTime = date.and_hms_opt(0, 0, 0)?;
    // Zones that skip midnight for DST have no local 00:00 that day; take 01:00.
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
}

/// Renders a due date as a local calendar day.
pub fn format_due(due: DateTime<Utc>) -> String {
    due.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// A `soon_days` window too large to represent reaches every future date.
pub fn urgency(due: DateTime<Utc>, now: DateTime<Utc>, soon_days: i64) -> Urgency {
    if due < now {
        return Urgency::Overdue;
    }
    let horizon = TimeDelta::try_days(soon_days).and_then(|d| now.checked_add_signed(d));
    let soon = match horizon {
        Some(horizon) => due < horizon,
        None => soon_days > 0,
    };
    if soon {
        Urgency::DueSoon
    } else {
        Urgency::Later
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn local_date(due: DateTime<Utc>) -> NaiveDate {
        due.with_timezone(&Local).date_naive()
    }

    #[test]
    fn parses_padded_and_unpadded_dates() {
        let padded = parse_due_date("2024-03-05").unwrap();
        let bare = parse_due_date("2024-3-5").unwrap();
        assert_eq!(padded, bare);
        let date = local_date(padded);
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 5));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert_eq!(parse_due_date("2024-02-30"), None);
        assert_eq!(parse_due_date("2023-02-29"), None);
        assert_eq!(parse_due_date("2024-13-01"), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_due_date("tomorrow"), None);
        assert_eq!(parse_due_date("2024-05"), None);
        assert_eq!(parse_due_date("2024-05-01-02"), None);
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("2024 - 3 - 5"), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_due_date("  2024-3-5 "), parse_due_date("2024-03-05"));
    }

    #[test]
    fn rejects_dates_not_after_the_epoch() {
        assert_eq!(parse_due_date("1969-12-31"), None);
        if let Some(due) = parse_due_date("1970-1-1") {
            assert!(due.timestamp() > 0);
        }
        assert!(parse_due_date("1970-1-3").is_some());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_due_date("2024-02-29").is_some());
    }

    #[test]
    fn format_round_trips_through_parse() {
        let due = parse_due_date("2031-12-09").unwrap();
        assert_eq!(format_due(due), "2031-12-09");
    }

    #[test]
    fn classifies_urgency() {
        let now = Utc::now();
        assert_eq!(urgency(now - Duration::hours(1), now, 2), Urgency::Overdue);
        assert_eq!(urgency(now + Duration::hours(20), now, 2), Urgency::DueSoon);
        assert_eq!(urgency(now + Duration::days(3), now, 2), Urgency::Later);
    }

    #[test]
    fn due_soon_window_is_exclusive() {
        let now = Utc::now();
        assert_eq!(urgency(now + Duration::days(2), now, 2), Urgency::Later);
    }

    #[test]
    fn huge_windows_do_not_overflow() {
        let now = Utc::now();
        let later = now + Duration::days(365);
        assert_eq!(urgency(later, now, i64::MAX / 1000), Urgency::DueSoon);
        assert_eq!(urgency(later, now, i64::MAX), Urgency::DueSoon);
        assert_eq!(urgency(later, now, i64::MIN), Urgency::Later);
        assert_eq!(urgency(now - Duration::days(1), now, i64::MAX), Urgency::Overdue);
    }
}
