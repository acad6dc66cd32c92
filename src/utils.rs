use chrono::{NaiveDate, NaiveDateTime};

const MS_PER_DAY: i64 = 86_400_000;

pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// The backend serializes timestamps as `YYYY-MM-DDTHH:MM:SS`, optionally
/// with fractional seconds. Bare dates are accepted as midnight.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Display form used in tables, falling back to the raw string.
pub fn format_date(value: &str) -> String {
    parse_date_time(value)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Value for an `<input type="date">`, which only takes `YYYY-MM-DD`.
pub fn date_input_value(value: &str) -> String {
    parse_date_time(value)
        .map(|dt| dt.date().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Picker dates carry no time component; the backend field is a combined
/// date-time, so the borrow date is anchored to midnight on submit.
pub fn midnight_date_time(date_str: &str) -> Option<String> {
    parse_date(date_str).map(|d| format!("{}T00:00:00", d.format("%Y-%m-%d")))
}

/// Native browser confirm prompt; treats an unavailable window as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Blocking browser alert, used for row-level failures with no owning dialog.
pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Whole days between two picker dates, rounding any partial day up:
/// ceiling of the millisecond difference over one day's milliseconds.
/// Same day yields 0, the next calendar day yields 1.
pub fn loan_duration_days(borrow_date: &str, due_date: &str) -> Option<i64> {
    let start = parse_date(borrow_date)?.and_hms_opt(0, 0, 0)?;
    let end = parse_date(due_date)?.and_hms_opt(0, 0, 0)?;
    let ms = (end - start).num_milliseconds();
    Some(ms.div_ceil(MS_PER_DAY))
}
