use library_console::utils::*;

#[test]
fn same_day_duration_is_zero() {
    assert_eq!(loan_duration_days("2024-03-15", "2024-03-15"), Some(0));
}

#[test]
fn next_day_duration_is_one() {
    assert_eq!(loan_duration_days("2024-03-15", "2024-03-16"), Some(1));
}

#[test]
fn whole_day_differences_count_exactly() {
    assert_eq!(loan_duration_days("2024-03-01", "2024-03-15"), Some(14));
    // Across a month boundary.
    assert_eq!(loan_duration_days("2024-01-25", "2024-02-05"), Some(11));
    // Across a year boundary.
    assert_eq!(loan_duration_days("2023-12-28", "2024-01-04"), Some(7));
    // Across the leap day.
    assert_eq!(loan_duration_days("2024-02-28", "2024-03-01"), Some(2));
}

#[test]
fn reversed_dates_yield_negative_duration() {
    assert_eq!(loan_duration_days("2024-03-16", "2024-03-15"), Some(-1));
}

#[test]
fn duration_is_idempotent_on_identical_pairs() {
    let first = loan_duration_days("2024-05-01", "2024-05-15");
    let second = loan_duration_days("2024-05-01", "2024-05-15");
    assert_eq!(first, second);
    assert_eq!(first, Some(14));
}

#[test]
fn duration_rejects_malformed_dates() {
    assert_eq!(loan_duration_days("", "2024-03-15"), None);
    assert_eq!(loan_duration_days("2024-03-15", "not-a-date"), None);
    assert_eq!(loan_duration_days("15/03/2024", "2024-03-16"), None);
}

#[test]
fn midnight_date_time_appends_fixed_suffix() {
    assert_eq!(
        midnight_date_time("2024-03-15"),
        Some("2024-03-15T00:00:00".to_string())
    );
    assert_eq!(midnight_date_time("garbage"), None);
}

#[test]
fn date_input_value_truncates_time_of_day() {
    assert_eq!(date_input_value("2024-03-15T14:30:00"), "2024-03-15");
    assert_eq!(date_input_value("2024-03-15"), "2024-03-15");
    assert_eq!(date_input_value("nonsense"), "");
}

#[test]
fn format_date_renders_wire_timestamps() {
    assert_eq!(format_date("2024-03-15T14:30:00"), "15/03/2024");
    assert_eq!(format_date("2024-03-15T14:30:00.123"), "15/03/2024");
    // Unparseable values fall back to the raw string.
    assert_eq!(format_date("???"), "???");
}
