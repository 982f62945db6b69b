#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::app::calc::{annualize, coerce_amount, diff_years};
    use crate::app::utils::parse_datetime;

    #[test]
    fn coerce_amount_parses_numbers() {
        assert_eq!(coerce_amount("500"), 500.0);
        assert_eq!(coerce_amount("-200.5"), -200.5);
        assert_eq!(coerce_amount("  42 "), 42.0);
        assert_eq!(coerce_amount("+3.25"), 3.25);
    }

    #[test]
    fn coerce_amount_blank_is_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   "), 0.0);
    }

    #[test]
    fn coerce_amount_garbage_is_nan() {
        assert!(coerce_amount("abc").is_nan());
        assert!(coerce_amount("12px").is_nan());
    }

    #[test]
    fn diff_years_rounds_to_whole_years() {
        let start = parse_datetime("2020-01-01").unwrap();

        assert_eq!(diff_years(&(start + Duration::days(100)), &start), 0.0);
        assert_eq!(diff_years(&(start + Duration::days(183)), &start), 1.0);
        assert_eq!(diff_years(&(start + Duration::days(730)), &start), 2.0);
    }

    #[test]
    fn diff_years_is_symmetric() {
        let a = parse_datetime("2020-01-01").unwrap();
        let b = parse_datetime("2022-01-01").unwrap();

        assert_eq!(diff_years(&a, &b), diff_years(&b, &a));
    }

    #[test]
    fn annualize_two_year_range() {
        // (1.03)^(1/2) - 1
        let annualized = annualize(0.03, 2.0);

        assert!((annualized - 0.014889).abs() < 1e-6);
    }

    #[test]
    fn annualize_zero_years_falls_back_to_zero() {
        assert_eq!(annualize(0.5, 0.0), 0.0);
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("someday").is_none());
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("2020-13-99").is_none());
    }

    #[test]
    fn parse_datetime_accepts_dates_and_timestamps() {
        assert!(parse_datetime("2020-01-10").is_some());
        assert!(parse_datetime("2020-01-10 15:30:00").is_some());
    }
}
