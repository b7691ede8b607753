//! Power rounding and min/max bands

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{Result, SizingError};

/// Lower bound of a unit's operating band, relative to its reference power
pub const MIN_POWER_FACTOR: Decimal = dec!(0.95);

/// Upper bound of a unit's operating band, relative to its reference power
pub const MAX_POWER_FACTOR: Decimal = dec!(1.40);

/// Round to the nearest watt, halves away from zero
pub fn round_power(value: Decimal) -> Result<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| SizingError::Computation(format!("power {value} is out of range")))
}

/// Multiply every factor together, failing on overflow instead of panicking
pub fn product(factors: &[Decimal]) -> Result<Decimal> {
    factors.iter().try_fold(Decimal::ONE, |acc, factor| {
        acc.checked_mul(*factor).ok_or_else(|| {
            SizingError::Computation(format!("overflow multiplying {acc} by {factor}"))
        })
    })
}

/// `round(power × factor)`
pub fn scale_power(power: i64, factor: Decimal) -> Result<i64> {
    round_power(product(&[Decimal::from(power), factor])?)
}

/// Reference power of a unit with the bounds derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerBand {
    #[serde(rename = "puissanceReference")]
    pub reference: i64,
    #[serde(rename = "puissanceMin")]
    pub min: i64,
    #[serde(rename = "puissanceMax")]
    pub max: i64,
}

impl PowerBand {
    pub fn around(reference: i64) -> Result<Self> {
        Ok(Self {
            reference,
            min: scale_power(reference, MIN_POWER_FACTOR)?,
            max: scale_power(reference, MAX_POWER_FACTOR)?,
        })
    }

    pub fn contains_reference(&self) -> bool {
        self.min <= self.reference && self.reference <= self.max
    }
}
