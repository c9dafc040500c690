use super::*;

// =============================================================
// parse_clock_minutes
// =============================================================

#[test]
fn parse_clock_minutes_accepts_valid_times() {
    assert_eq!(parse_clock_minutes("00:00"), Some(0));
    assert_eq!(parse_clock_minutes("09:30"), Some(570));
    assert_eq!(parse_clock_minutes("23:59"), Some(1439));
}

#[test]
fn parse_clock_minutes_rejects_out_of_range() {
    assert_eq!(parse_clock_minutes("24:00"), None);
    assert_eq!(parse_clock_minutes("12:60"), None);
    assert_eq!(parse_clock_minutes("-1:30"), None);
}

#[test]
fn parse_clock_minutes_rejects_garbage() {
    assert_eq!(parse_clock_minutes(""), None);
    assert_eq!(parse_clock_minutes("noon"), None);
    assert_eq!(parse_clock_minutes("0930"), None);
}

// =============================================================
// duration_minutes
// =============================================================

#[test]
fn duration_forty_five_minute_slot() {
    assert_eq!(duration_minutes("09:00", "09:45"), 45);
}

#[test]
fn duration_end_before_start_clamps_to_zero() {
    assert_eq!(duration_minutes("09:00", "08:30"), 0);
}

#[test]
fn duration_equal_times_is_zero() {
    assert_eq!(duration_minutes("09:00", "09:00"), 0);
}

#[test]
fn duration_unparseable_inputs_are_zero() {
    assert_eq!(duration_minutes("", "09:45"), 0);
    assert_eq!(duration_minutes("09:00", "later"), 0);
}

// =============================================================
// day bounds
// =============================================================

#[test]
fn day_start_iso_is_midnight() {
    assert_eq!(day_start_iso("2025-03-14"), Some("2025-03-14T00:00:00.000Z".to_owned()));
}

#[test]
fn day_end_iso_is_last_millisecond() {
    assert_eq!(day_end_iso("2025-03-14"), Some("2025-03-14T23:59:59.999Z".to_owned()));
}

#[test]
fn day_bounds_reject_non_dates() {
    assert_eq!(day_start_iso(""), None);
    assert_eq!(day_start_iso("14-03-2025x"), None);
    assert_eq!(day_end_iso("2025/03/14"), None);
}

// =============================================================
// format_day
// =============================================================

#[test]
fn format_day_renders_date_part() {
    assert_eq!(format_day("2025-03-14"), "14/03/2025");
    assert_eq!(format_day("2025-03-14T10:00:00.000Z"), "14/03/2025");
}

#[test]
fn format_day_passes_through_unexpected_shapes() {
    assert_eq!(format_day("tomorrow"), "tomorrow");
    assert_eq!(format_day(""), "");
}
