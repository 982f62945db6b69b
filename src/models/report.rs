use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

#[derive(Clone, Debug, Getters, new, Serialize)]
pub struct ProfitReport {
    profit: f64,
    overall_return: f64,
    annualized_return: f64,
}
