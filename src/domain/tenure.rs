//! Tenure labels for experience entries.
//!
//! Durations use an average month length of 30.44 days rather than calendar
//! month arithmetic, so "2021-04-01" to "2021-11-30" reads "7 mos".
//! None of these functions fail: bad input produces a sentinel string.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::entities::period::PeriodLabel;

pub const DURATION_UNAVAILABLE: &str = "Duration unavailable";
pub const DATE_RANGE_UNAVAILABLE: &str = "Date range unavailable";
pub const LESS_THAN_ONE_MONTH: &str = "Less than 1 mo";
pub const PRESENT: &str = "Present";
pub const PERIOD_SEPARATOR: &str = " · ";

const AVERAGE_MONTH_MILLIS: f64 = 30.44 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Parses a date the way stored records carry them: `YYYY-MM-DD`,
/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp read as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_as_written(raw).map(|dt| dt.with_timezone(&Utc))
}

/// Keeps the offset the caller wrote, so labels show the calendar month
/// they meant rather than the UTC one.
fn parse_as_written(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().fixed_offset());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc().fixed_offset())
}

/// Blank end dates mean the role is ongoing.
fn ongoing(end: Option<&str>) -> Option<&str> {
    end.filter(|raw| !raw.trim().is_empty())
}

/// Human-readable duration between `start` and `end`, measured up to the
/// current instant when `end` is absent.
pub fn calculate_duration(start: &str, end: Option<&str>) -> String {
    calculate_duration_at(start, end, Utc::now())
}

pub fn calculate_duration_at(start: &str, end: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(start) = parse_date(start) else {
        return DURATION_UNAVAILABLE.to_string();
    };

    let end = match ongoing(end) {
        Some(raw) => match parse_date(raw) {
            Some(end) => end,
            None => return DURATION_UNAVAILABLE.to_string(),
        },
        None => now,
    };

    // end before start clamps to zero
    let elapsed_ms = (end - start).num_milliseconds().max(0) as f64;
    let total_months = (elapsed_ms / AVERAGE_MONTH_MILLIS).floor() as i64;

    format_months(total_months)
}

/// Renders a month count as "<n> yr(s) <m> mo(s)", omitting zero parts.
pub fn format_months(total_months: i64) -> String {
    let total_months = total_months.max(0);
    let years = total_months / 12;
    let months = total_months % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{} {}", years, if years == 1 { "yr" } else { "yrs" }));
    }
    if months > 0 {
        parts.push(format!("{} {}", months, if months == 1 { "mo" } else { "mos" }));
    }

    if parts.is_empty() {
        LESS_THAN_ONE_MONTH.to_string()
    } else {
        parts.join(" ")
    }
}

/// "Apr 2013 - Oct 2021", or "Aug 2021 - Present" for ongoing roles.
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let Some(start) = parse_as_written(start) else {
        return DATE_RANGE_UNAVAILABLE.to_string();
    };

    let end_text = match ongoing(end) {
        Some(raw) => match parse_as_written(raw) {
            Some(end) => month_year(&end),
            None => return DATE_RANGE_UNAVAILABLE.to_string(),
        },
        None => PRESENT.to_string(),
    };

    format!("{} - {}", month_year(&start), end_text)
}

// chrono's %b is always the English abbreviation
fn month_year(date: &DateTime<FixedOffset>) -> String {
    date.format("%b %Y").to_string()
}

pub fn generate_period_string(start: &str, end: Option<&str>) -> String {
    generate_period_string_at(start, end, Utc::now())
}

pub fn generate_period_string_at(start: &str, end: Option<&str>, now: DateTime<Utc>) -> String {
    period_label_at(start, end, now).combined
}

/// All three display strings for one experience entry.
pub fn period_label_at(start: &str, end: Option<&str>, now: DateTime<Utc>) -> PeriodLabel {
    let range_text = format_date_range(start, end);
    let duration_text = calculate_duration_at(start, end, now);
    let combined = format!("{}{}{}", range_text, PERIOD_SEPARATOR, duration_text);

    PeriodLabel {
        duration_text,
        range_text,
        combined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_months_pluralizes_each_part() {
        assert_eq!(format_months(0), LESS_THAN_ONE_MONTH);
        assert_eq!(format_months(1), "1 mo");
        assert_eq!(format_months(12), "1 yr");
        assert_eq!(format_months(13), "1 yr 1 mo");
        assert_eq!(format_months(26), "2 yrs 2 mos");
        assert_eq!(format_months(-4), LESS_THAN_ONE_MONTH);
    }

    #[test]
    fn blank_end_dates_count_as_ongoing() {
        assert_eq!(ongoing(Some("  ")), None);
        assert_eq!(ongoing(None), None);
        assert_eq!(ongoing(Some("2021-10-31")), Some("2021-10-31"));
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_date("2021-08-01T12:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2021-08-01T12:30:00+00:00");
    }

    #[test]
    fn offsets_are_kept_for_display() {
        let written = parse_as_written("2021-08-01T00:00:00+02:00").unwrap();
        assert_eq!(month_year(&written), "Aug 2021");
        assert_eq!(parse_date("2021-08-01T00:00:00+02:00").unwrap().to_rfc3339(), "2021-07-31T22:00:00+00:00");
    }
}
