//! Budget snapshot store and derivation engine.
//!
//! The [`Engine`] records uploaded [`BudgetSnapshot`]s in an append-only
//! [`Ledger`] and derives a [`Summary`] and an inflation [`Forecast`] from the
//! most recent one.

pub use error::EngineError;
pub use forecast::{
    FORECAST_BASE_YEAR, FORECAST_YEARS, Forecast, INFLATION_RATE_BASIS_POINTS, forecast,
};
pub use ledger::Ledger;
pub use money::MoneyCents;
pub use snapshot::{BudgetSnapshot, Expense, NO_EXPENSE_CATEGORY};
pub use summary::{SavingsRate, Summary, summarize};

mod error;
mod forecast;
mod ledger;
mod money;
mod snapshot;
mod summary;

pub type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug, Default)]
pub struct Engine {
    ledger: Ledger,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Records a new snapshot. Returns how many snapshots have been uploaded
    /// so far.
    pub fn upload(&mut self, snapshot: BudgetSnapshot) -> usize {
        self.ledger.append(snapshot)
    }

    /// The snapshot derivations are computed from.
    pub fn latest(&self) -> ResultEngine<&BudgetSnapshot> {
        self.ledger.latest()
    }

    pub fn snapshot_count(&self) -> usize {
        self.ledger.len()
    }

    /// Summary of the latest snapshot.
    pub fn summary(&self) -> ResultEngine<Summary> {
        self.latest().map(summarize)
    }

    /// Inflation forecast of the latest snapshot.
    pub fn forecast(&self) -> ResultEngine<Forecast> {
        self.latest().map(forecast)
    }
}

/// The builder for `Engine`
#[derive(Debug, Default)]
pub struct EngineBuilder {
    ledger: Ledger,
}

impl EngineBuilder {
    /// Start from an existing ledger instead of an empty one.
    pub fn ledger(mut self, ledger: Ledger) -> EngineBuilder {
        self.ledger = ledger;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            ledger: self.ledger,
        }
    }
}
