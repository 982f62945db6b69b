use std::str::FromStr;

use chrono::{DateTime, Local};

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Coerces a raw amount field to a number. Blank input counts as zero;
/// anything unparsable becomes NaN and stays visible in every total that
/// includes it.
pub fn coerce_amount(field: &str) -> f64 {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    f64::from_str(trimmed).unwrap_or(f64::NAN)
}

/// Distance between two instants in whole years, rounded to the nearest
/// year. Anything under about six months rounds to zero.
pub fn diff_years(a: &DateTime<Local>, b: &DateTime<Local>) -> f64 {
    let seconds = (a.timestamp() - b.timestamp()).abs() as f64;
    let days = seconds / SECONDS_PER_DAY;

    (days / DAYS_PER_YEAR).round()
}

// Annualized Return = (1 + Overall Return)^(1/N) - 1
//
// A range that rounds to zero years reports zero instead of raising to an
// undefined exponent.
pub fn annualize(overall: f64, n: f64) -> f64 {
    if n > 0.0 {
        (1.0 + overall).powf(1.0 / n) - 1.0
    } else {
        0.0
    }
}
