use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Lenient date parsing for user input. `None` is the invalid-date channel,
/// not an error: a holding with an unset date never matches a range.
pub fn parse_datetime(field: &str) -> Option<DateTime<Local>> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_str = format!("{} 00:00:00", trimmed);
    let naive = NaiveDateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .ok()?;

    Some(Local.from_utc_datetime(&naive))
}

/// Display formatting for the value headline. Thousands separators, two
/// decimals when the cents are non-zero. Calculations never see this.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as i64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        out.push_str(&format!(".{:02}", cents));
    }

    out
}
