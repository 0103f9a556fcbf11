use crate::error::{PayseraError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const MINOR_UNITS_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// A strictly positive payment amount in major currency units (e.g. euros).
///
/// The gateway expects amounts as integers in minor units (cents), see
/// [`Amount::to_minor_units`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PayseraError::InvalidAmount(format!(
                "amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Converts to integer minor units, rounding half away from zero.
    pub fn to_minor_units(&self) -> Result<i64> {
        self.0
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|minor| {
                minor
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_i64()
            })
            .ok_or_else(|| {
                PayseraError::InvalidAmount(format!("amount {} is out of range", self.0))
            })
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PayseraError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
