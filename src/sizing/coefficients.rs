//! Construction-era coefficients
//!
//! Both tables are walked in ascending order of their upper year and the
//! first bound the construction year does not exceed wins.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Heat-loss coefficient G by last construction year of each era
const HEAT_LOSS_BY_ERA: [(i32, Decimal); 5] = [
    (1973, dec!(1.6)),
    (1981, dec!(1.2)),
    (1999, dec!(0.9)),
    (2004, dec!(0.8)),
    (2011, dec!(0.7)),
];

/// G for buildings from 2012 onwards
const HEAT_LOSS_CURRENT: Decimal = dec!(0.57);

/// Cooling ratio by last construction year of each era
const COOLING_RATIO_BY_ERA: [(i32, u32); 2] = [(2004, 40), (2011, 35)];

/// Cooling ratio for buildings from 2012 onwards
const COOLING_RATIO_CURRENT: u32 = 30;

/// Coefficients derived once per run from the construction year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Heat-loss coefficient
    #[serde(rename = "G", with = "rust_decimal::serde::float")]
    pub g: Decimal,
    /// Cooling power per m³
    #[serde(rename = "ratioFroid")]
    pub cooling_ratio: u32,
}

impl Coefficients {
    pub fn for_year(construction_year: i32) -> Self {
        let g = HEAT_LOSS_BY_ERA
            .iter()
            .find(|(last_year, _)| construction_year <= *last_year)
            .map(|(_, g)| *g)
            .unwrap_or(HEAT_LOSS_CURRENT);

        let cooling_ratio = COOLING_RATIO_BY_ERA
            .iter()
            .find(|(last_year, _)| construction_year <= *last_year)
            .map(|(_, ratio)| *ratio)
            .unwrap_or(COOLING_RATIO_CURRENT);

        Self { g, cooling_ratio }
    }

    /// Coefficients of the newest era, used when no year is known
    pub fn current() -> Self {
        Self {
            g: HEAT_LOSS_CURRENT,
            cooling_ratio: COOLING_RATIO_CURRENT,
        }
    }

    pub fn for_construction_year(construction_year: Option<i32>) -> Self {
        construction_year.map_or_else(Self::current, Self::for_year)
    }
}
