//! Clock and calendar-date helpers for appointment scheduling.
//!
//! The backend stores appointment times as `HH:mm` strings and dates as
//! `YYYY-MM-DD`; everything here works on those wire forms directly. Duration
//! is a client-side derivation only, never authoritative.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Parse an `HH:mm` clock time into minutes since midnight.
#[must_use]
pub fn parse_clock_minutes(value: &str) -> Option<i32> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Appointment duration in minutes. Clamped to zero when the end does not
/// come after the start or either time is unparseable.
#[must_use]
pub fn duration_minutes(start: &str, end: &str) -> i32 {
    match (parse_clock_minutes(start), parse_clock_minutes(end)) {
        (Some(start), Some(end)) if end > start => end - start,
        _ => 0,
    }
}

/// Start-of-day ISO timestamp for a `YYYY-MM-DD` date input, for the
/// inclusive lower bound of a range filter.
#[must_use]
pub fn day_start_iso(date: &str) -> Option<String> {
    is_plain_date(date).then(|| format!("{date}T00:00:00.000Z"))
}

/// End-of-day ISO timestamp for a `YYYY-MM-DD` date input, for the inclusive
/// upper bound of a range filter.
#[must_use]
pub fn day_end_iso(date: &str) -> Option<String> {
    is_plain_date(date).then(|| format!("{date}T23:59:59.999Z"))
}

/// Render the date part of an ISO timestamp as `DD/MM/YYYY` for table cells.
#[must_use]
pub fn format_day(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    match date.split('-').collect::<Vec<_>>()[..] {
        [year, month, day] if is_plain_date(date) => format!("{day}/{month}/{year}"),
        _ => iso.to_owned(),
    }
}

fn is_plain_date(date: &str) -> bool {
    date.len() == 10
        && date
            .chars()
            .enumerate()
            .all(|(i, c)| if matches!(i, 4 | 7) { c == '-' } else { c.is_ascii_digit() })
}
