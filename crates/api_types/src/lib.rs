use serde::{Deserialize, Serialize};

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }

    impl Health {
        pub fn ok() -> Self {
            Self {
                status: "ok".to_string(),
            }
        }
    }
}

pub mod upload {
    use super::*;

    /// Upload request body key holding the household income. Every other key
    /// of the flat JSON object is an expense category.
    pub const INCOME_KEY: &str = "income";

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UploadAccepted {
        pub message: String,
    }
}

pub mod summary {
    use super::*;

    /// Amounts are expressed in major units (e.g. `1234.5`).
    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    pub struct Summary {
        pub income: f64,
        pub total_expenses: f64,
        /// Negative when expenses exceed income.
        pub savings: f64,
        /// Percentage with two decimals, `0` when income is not positive.
        pub savings_rate: f64,
        /// Name of the largest expense category, `"none"` without expenses.
        pub largest_expense: String,
    }
}

pub mod forecast {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    pub struct Forecast {
        /// Projected total expenses keyed by year.
        pub inflation_forecast: BTreeMap<i32, f64>,
    }
}
