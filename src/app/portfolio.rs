use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::{
    app::{calc, utils},
    models::{Holding, ProfitReport},
};

pub const DEFAULT_BEGIN_VALUE: f64 = 10_000.0;

#[derive(Clone, Debug)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    beginning_value: f64,
    current_value: f64,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(DEFAULT_BEGIN_VALUE)
    }
}

impl Portfolio {
    pub fn new(beginning_value: f64) -> Self {
        Self {
            holdings: Vec::new(),
            beginning_value,
            current_value: beginning_value,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn beginning_value(&self) -> f64 {
        self.beginning_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    // Always succeeds. A NaN price flows into current_value and stays there.
    pub fn add_holding(&mut self, holding: Holding) {
        self.current_value += *holding.price();
        self.holdings.push(holding);
    }

    /// Sum of prices of holdings acquired within the inclusive range. An
    /// unparsable bound, or a start after the end, matches nothing.
    pub fn profit_in_range(&self, start: &str, end: &str) -> f64 {
        let (start, end) = match (utils::parse_datetime(start), utils::parse_datetime(end)) {
            (Some(start), Some(end)) => (start, end),
            _ => return 0.0,
        };

        let mut profit = 0.0;
        for holding in &self.holdings {
            if let Some(acquired_at) = holding.acquired_at() {
                if acquired_at.timestamp() >= start.timestamp()
                    && acquired_at.timestamp() <= end.timestamp()
                {
                    profit += *holding.price();
                }
            }
        }

        profit
    }

    // No guard on a zero beginning value: the division is allowed to produce
    // an infinite or NaN return.
    pub fn overall_return(&self) -> f64 {
        (self.current_value - self.beginning_value) / self.beginning_value
    }

    pub fn annualized_return(&self, start: &str, end: &str) -> f64 {
        let (start, end) = match (utils::parse_datetime(start), utils::parse_datetime(end)) {
            (Some(start), Some(end)) => (start, end),
            _ => return 0.0,
        };

        let n = calc::diff_years(&end, &start);

        calc::annualize(self.overall_return(), n)
    }

    pub fn report(&self, start: &str, end: &str) -> ProfitReport {
        ProfitReport::new(
            self.profit_in_range(start, end),
            self.overall_return(),
            self.annualized_return(start, end),
        )
    }

    /// Loads holdings from a headerless `name,price,date` CSV. Rows go
    /// through the same coercion as the interactive form, so a bad price
    /// still enters as NaN; only rows with too few columns are skipped.
    pub fn import_holdings(&mut self, path: &str) -> Result<usize> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

        let mut imported = 0;
        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

            if rec.len() < 3 {
                eprintln!(
                    "Warning: Skipping row {}: expected 3 columns (name,price,date), found {}",
                    row_idx + 1,
                    rec.len()
                );
                continue;
            }

            self.add_holding(Holding::from_input(&rec[0], &rec[1], &rec[2]));
            imported += 1;
        }

        Ok(imported)
    }
}
