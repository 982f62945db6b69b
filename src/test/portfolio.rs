#[cfg(test)]
mod tests {
    use crate::{
        app::Portfolio,
        models::{Holding, holding::DEFAULT_HOLDING_NAME},
    };

    fn set_sample_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.add_holding(Holding::from_input("Acme", "500", "2020-01-10"));
        portfolio.add_holding(Holding::from_input("Globex", "-200", "2021-06-15"));

        portfolio
    }

    #[test]
    fn current_value_tracks_added_amounts() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.beginning_value(), 10_000.0);
        assert_eq!(portfolio.current_value(), 10_300.0);
    }

    #[test]
    fn overall_return_from_sample_data() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.overall_return(), 0.03);
    }

    #[test]
    fn profit_in_range_sums_qualifying_holdings() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.profit_in_range("2020-01-01", "2020-12-31"), 500.0);
        assert_eq!(portfolio.profit_in_range("2019-01-01", "2019-12-31"), 0.0);
        assert_eq!(portfolio.profit_in_range("2020-01-01", "2021-12-31"), 300.0);
    }

    #[test]
    fn profit_in_range_bounds_are_inclusive() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.profit_in_range("2020-01-10", "2020-01-10"), 500.0);
    }

    #[test]
    fn profit_in_range_inverted_bounds_yield_zero() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.profit_in_range("2021-12-31", "2020-01-01"), 0.0);
    }

    #[test]
    fn profit_in_range_is_insertion_order_independent() {
        let mut reversed = Portfolio::new(10_000.0);
        reversed.add_holding(Holding::from_input("Globex", "-200", "2021-06-15"));
        reversed.add_holding(Holding::from_input("Acme", "500", "2020-01-10"));

        let portfolio = set_sample_portfolio();

        assert_eq!(
            portfolio.profit_in_range("2020-01-01", "2021-12-31"),
            reversed.profit_in_range("2020-01-01", "2021-12-31"),
        );
    }

    #[test]
    fn annualized_return_two_year_range() {
        let portfolio = set_sample_portfolio();

        let annualized = portfolio.annualized_return("2020-01-01", "2022-01-01");

        assert!((annualized - 0.014889).abs() < 1e-6);
    }

    #[test]
    fn annualized_return_short_range_is_zero() {
        let portfolio = set_sample_portfolio();

        // 100 days rounds to zero years
        assert_eq!(portfolio.annualized_return("2020-01-01", "2020-04-10"), 0.0);
    }

    #[test]
    fn annualized_return_unparsable_bound_is_zero() {
        let portfolio = set_sample_portfolio();

        assert_eq!(portfolio.annualized_return("not-a-date", "2022-01-01"), 0.0);
    }

    #[test]
    fn nan_amount_poisons_current_value() {
        let mut portfolio = set_sample_portfolio();
        portfolio.add_holding(Holding::from_input("Initech", "oops", "2020-06-01"));

        assert!(portfolio.current_value().is_nan());
        assert!(portfolio.overall_return().is_nan());
        assert!(portfolio.profit_in_range("2020-01-01", "2020-12-31").is_nan());
        // Ranges that exclude the poisoned holding still sum cleanly.
        assert_eq!(portfolio.profit_in_range("2021-01-01", "2021-12-31"), -200.0);
    }

    #[test]
    fn zero_beginning_value_passes_through_division() {
        let mut portfolio = Portfolio::new(0.0);
        portfolio.add_holding(Holding::from_input("Acme", "500", "2020-01-10"));

        assert!(portfolio.overall_return().is_infinite());
    }

    #[test]
    fn holdings_keep_insertion_order() {
        let portfolio = set_sample_portfolio();
        let holdings = portfolio.holdings();

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].name(), "Acme");
        assert_eq!(holdings[1].name(), "Globex");
    }

    #[test]
    fn invalid_date_never_qualifies_for_a_range() {
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.add_holding(Holding::from_input("Acme", "500", "someday"));

        assert!(portfolio.holdings()[0].acquired_at().is_none());
        assert_eq!(portfolio.profit_in_range("1970-01-01", "2100-01-01"), 0.0);
        // The amount still lands in the running total.
        assert_eq!(portfolio.current_value(), 10_500.0);
    }

    #[test]
    fn blank_inputs_use_defaults() {
        let holding = Holding::from_input("", "", "");

        assert_eq!(holding.name(), DEFAULT_HOLDING_NAME);
        assert_eq!(*holding.price(), 0.0);
        assert!(holding.acquired_at().is_some());
    }

    #[test]
    fn report_bundles_the_three_statistics() {
        let portfolio = set_sample_portfolio();

        let report = portfolio.report("2020-01-01", "2022-01-01");

        assert_eq!(*report.profit(), 300.0);
        assert_eq!(*report.overall_return(), 0.03);
        assert!((report.annualized_return() - 0.014889).abs() < 1e-6);
    }
}
