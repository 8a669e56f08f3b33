//! Household budget snapshot: one income plus named expense categories.

use crate::{EngineError, FORECAST_YEARS, INFLATION_RATE_BASIS_POINTS, MoneyCents, ResultEngine};

/// Category name reported when a snapshot has no expenses at all.
pub const NO_EXPENSE_CATEGORY: &str = "none";

/// A single named expense line of a [`BudgetSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub category: String,
    pub amount: MoneyCents,
}

/// Immutable budget record as uploaded by the user.
///
/// Expenses keep the order they were submitted in. That order decides which
/// category wins when several share the largest amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetSnapshot {
    income: MoneyCents,
    expenses: Vec<Expense>,
    total_expenses: MoneyCents,
}

impl BudgetSnapshot {
    /// Validates and builds a snapshot.
    ///
    /// Fails with [`EngineError::InvalidInput`] when `income` is missing, when
    /// any amount is negative, when a category name is blank or repeated, or
    /// when the expense total is too large to be projected over the whole
    /// forecast horizon.
    pub fn new<I, S>(income: Option<MoneyCents>, expenses: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = (S, MoneyCents)>,
        S: Into<String>,
    {
        let income =
            income.ok_or_else(|| EngineError::InvalidInput("missing income".to_string()))?;
        if income.is_negative() {
            return Err(EngineError::InvalidInput(
                "income must not be negative".to_string(),
            ));
        }

        let mut lines: Vec<Expense> = Vec::new();
        let mut total = MoneyCents::ZERO;
        for (category, amount) in expenses {
            let category = category.into();
            if category.trim().is_empty() {
                return Err(EngineError::InvalidInput(
                    "expense category must not be empty".to_string(),
                ));
            }
            if amount.is_negative() {
                return Err(EngineError::InvalidInput(format!(
                    "expense \"{category}\" must not be negative"
                )));
            }
            if lines.iter().any(|line| line.category == category) {
                return Err(EngineError::InvalidInput(format!(
                    "duplicate expense category \"{category}\""
                )));
            }

            total = total
                .checked_add(amount)
                .ok_or_else(|| EngineError::InvalidInput("expenses out of range".to_string()))?;
            lines.push(Expense { category, amount });
        }

        if total
            .compound_basis_points(INFLATION_RATE_BASIS_POINTS, FORECAST_YEARS as u32)
            .is_none()
        {
            return Err(EngineError::InvalidInput(
                "expenses too large to forecast".to_string(),
            ));
        }

        Ok(Self {
            income,
            expenses: lines,
            total_expenses: total,
        })
    }

    pub fn income(&self) -> MoneyCents {
        self.income
    }

    /// Expense lines in submission order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of every expense amount.
    pub fn total_expenses(&self) -> MoneyCents {
        self.total_expenses
    }

    /// Returns the category with the highest amount together with that
    /// amount.
    ///
    /// Ties go to the category submitted first. With no expenses the pair
    /// `(NO_EXPENSE_CATEGORY, 0)` is returned.
    pub fn largest_expense(&self) -> (&str, MoneyCents) {
        let mut largest: Option<&Expense> = None;
        for line in &self.expenses {
            if largest.is_none_or(|current| line.amount > current.amount) {
                largest = Some(line);
            }
        }

        largest.map_or((NO_EXPENSE_CATEGORY, MoneyCents::ZERO), |line| {
            (line.category.as_str(), line.amount)
        })
    }
}
