//! Inflation-adjusted projection of a snapshot's expenses.

use std::collections::BTreeMap;

use crate::{BudgetSnapshot, MoneyCents};

/// First projected year.
pub const FORECAST_BASE_YEAR: i32 = 2026;
/// Number of consecutive years projected.
pub const FORECAST_YEARS: usize = 5;
/// Annual inflation rate in hundredths of a percent (3%).
pub const INFLATION_RATE_BASIS_POINTS: i64 = 300;

/// Projected total expenses per year.
///
/// Each year already includes one more compounding step than the previous
/// one: the base year is `total * 1.03`, the next `total * 1.03^2`, and so
/// on. Compounding is exact; only the reported value is rounded to the cent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Forecast {
    pub years: BTreeMap<i32, MoneyCents>,
}

impl Forecast {
    pub fn iter(&self) -> impl Iterator<Item = (i32, MoneyCents)> + '_ {
        self.years.iter().map(|(year, amount)| (*year, *amount))
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Projects the snapshot's total expenses over [`FORECAST_YEARS`] years.
///
/// [`BudgetSnapshot::new`] only accepts totals whose last projected year fits
/// in [`MoneyCents`], so every year can be computed.
pub fn forecast(snapshot: &BudgetSnapshot) -> Forecast {
    let total = snapshot.total_expenses();
    let mut years = BTreeMap::new();

    for (year, periods) in (FORECAST_BASE_YEAR..).zip(1..=FORECAST_YEARS as u32) {
        let projected = total
            .compound_basis_points(INFLATION_RATE_BASIS_POINTS, periods)
            .unwrap_or(MoneyCents::new(i64::MAX));
        years.insert(year, projected);
    }

    Forecast { years }
}
