//! Financial summary of a single snapshot.

use crate::{BudgetSnapshot, MoneyCents, money::div_round_half_away};

/// Savings expressed as a percentage of income, held in hundredths of a
/// percent (`3333` is `33.33%`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SavingsRate(i128);

impl SavingsRate {
    pub const ZERO: SavingsRate = SavingsRate(0);

    #[must_use]
    pub const fn from_basis_points(basis_points: i128) -> Self {
        Self(basis_points)
    }

    #[must_use]
    pub const fn basis_points(self) -> i128 {
        self.0
    }

    /// Percentage value, e.g. `33.33`.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `savings / income * 100` rounded to two decimals; zero when income is
    /// not positive.
    fn compute(savings: MoneyCents, income: MoneyCents) -> Self {
        if !income.is_positive() {
            return Self::ZERO;
        }

        let numerator = i128::from(savings.cents()) * 10_000;
        Self(div_round_half_away(numerator, i128::from(income.cents())))
    }
}

/// Derived figures for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub income: MoneyCents,
    pub total_expenses: MoneyCents,
    /// `income - total_expenses`; negative when spending exceeds income.
    pub savings: MoneyCents,
    pub savings_rate: SavingsRate,
    pub largest_expense_category: String,
    pub largest_expense_amount: MoneyCents,
}

/// Summarizes a snapshot.
pub fn summarize(snapshot: &BudgetSnapshot) -> Summary {
    let income = snapshot.income();
    let total_expenses = snapshot.total_expenses();
    // Both operands are non-negative, so the difference cannot overflow.
    let savings = MoneyCents::new(income.cents() - total_expenses.cents());
    let (category, amount) = snapshot.largest_expense();

    Summary {
        income,
        total_expenses,
        savings,
        savings_rate: SavingsRate::compute(savings, income),
        largest_expense_category: category.to_string(),
        largest_expense_amount: amount,
    }
}
