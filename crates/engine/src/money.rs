use std::fmt;

use crate::{EngineError, ResultEngine};

const CENTS_PER_UNIT: i64 = 100;
const BASIS_POINTS: i128 = 10_000;

/// Signed money amount represented as **integer cents**.
///
/// Every amount the engine touches (income, expenses, savings, forecast
/// values) is held as cents so sums and differences are exact.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Converting from amounts in major units (as they arrive over the wire):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!(MoneyCents::from_major(10.5).unwrap().cents(), 1050);
/// assert!(MoneyCents::from_major(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Builds an amount from whole units without going through floating point.
    pub fn from_units(units: i64) -> ResultEngine<Self> {
        units
            .checked_mul(CENTS_PER_UNIT)
            .map(MoneyCents)
            .ok_or_else(|| EngineError::InvalidInput("amount out of range".to_string()))
    }

    /// Builds an amount from a value expressed in major units, rounding to the
    /// nearest cent (half away from zero).
    pub fn from_major(value: f64) -> ResultEngine<Self> {
        if !value.is_finite() {
            return Err(EngineError::InvalidInput(
                "amount must be a finite number".to_string(),
            ));
        }

        let cents = (value * CENTS_PER_UNIT as f64).round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(EngineError::InvalidInput("amount out of range".to_string()));
        }

        Ok(MoneyCents(cents as i64))
    }

    /// Returns the amount in major units. Only meant for the wire boundary.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Grows the amount by `basis_points` hundredths of a percent, compounded
    /// `periods` times, and rounds the result to the nearest cent (half away
    /// from zero).
    ///
    /// Compounding is exact: rounding happens once, on the final value.
    /// Returns `None` when the computation does not fit.
    #[must_use]
    pub fn compound_basis_points(self, basis_points: i64, periods: u32) -> Option<MoneyCents> {
        let factor = (BASIS_POINTS + i128::from(basis_points)).checked_pow(periods)?;
        let scale = BASIS_POINTS.checked_pow(periods)?;
        let numerator = i128::from(self.0).checked_mul(factor)?;
        let rounded = div_round_half_away(numerator, scale);
        i64::try_from(rounded).ok().map(MoneyCents)
    }
}

/// Integer division rounding to nearest, ties away from zero.
///
/// `denominator` must be positive.
pub(crate) fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / CENTS_PER_UNIT as u64;
        let cents = abs % CENTS_PER_UNIT as u64;
        write!(f, "{sign}{units}.{cents:02}")
    }
}
