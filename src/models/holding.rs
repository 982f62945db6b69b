use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use crate::app::{calc, utils};

pub const DEFAULT_HOLDING_NAME: &str = "Unnamed Stock";

#[derive(Clone, Debug, Getters, new, Serialize)]
pub struct Holding {
    name: String,
    price: f64,
    acquired_at: Option<DateTime<Local>>,
}

impl Holding {
    /// Builds a holding from raw form input. Never fails: a blank name gets a
    /// placeholder, an unparsable amount becomes NaN, a blank date means now
    /// and an unparsable one stays unset.
    pub fn from_input(name: &str, price: &str, date: &str) -> Self {
        let name = if name.trim().is_empty() {
            String::from(DEFAULT_HOLDING_NAME)
        } else {
            name.trim().to_string()
        };

        let acquired_at = if date.trim().is_empty() {
            Some(Local::now())
        } else {
            utils::parse_datetime(date)
        };

        Self::new(name, calc::coerce_amount(price), acquired_at)
    }
}
