//! Input document decoding
//!
//! Upstream producers send a flat JSON object with short opaque keys. The
//! [`keys`] table is the compatibility contract with those producers; every
//! room value is classified once into a [`Measure`] so surfaces and heights go
//! through the same predicate.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};
use tracing::debug;

use crate::common::errors::{Result, SizingError};
use crate::common::types::{SystemId, SLOTS_PER_SYSTEM, SYSTEM_COUNT};

/// Ceiling height used when a room does not provide one, in m
pub const DEFAULT_CEILING_HEIGHT: Decimal = dec!(2.5);

/// Opaque input keys
///
/// Each field is listed under its producer key first, followed by readable
/// aliases.
pub mod keys {
    use crate::common::types::{SLOTS_PER_SYSTEM, SYSTEM_COUNT};

    pub const CONSTRUCTION_YEAR: [&str; 3] = ["t21V", "anneeConstruction", "constructionYear"];
    pub const USAGE: [&str; 3] = ["km2v", "utilisation", "usage"];
    pub const SELECTED_RANGE: [&str; 3] = ["3efc", "gamme", "selectedRange"];

    /// Room surfaces, indexed by system then slot
    pub const SURFACES: [[&str; SLOTS_PER_SYSTEM]; SYSTEM_COUNT] = [
        ["8HBA", "nwio", "s4bD", "8Gzw", "8Xa1"],
        ["bT9L", "8Fw1", "dUTa", "w7SX", "84Y4"],
    ];

    /// Room ceiling heights, indexed by system then slot
    pub const CEILING_HEIGHTS: [[&str; SLOTS_PER_SYSTEM]; SYSTEM_COUNT] = [
        ["5BWb", "13AG", "nQ1S", "kUNi", "mvUV"],
        ["3n7k", "8PSC", "mYbk", "31cn", "ry6f"],
    ];

    /// Readable aliases of [`SURFACES`]
    pub const SURFACE_ALIASES: [[&str; SLOTS_PER_SYSTEM]; SYSTEM_COUNT] = [
        ["s1p1", "s1p2", "s1p3", "s1p4", "s1p5"],
        ["s2p1", "s2p2", "s2p3", "s2p4", "s2p5"],
    ];

    /// Readable aliases of [`CEILING_HEIGHTS`]
    pub const CEILING_HEIGHT_ALIASES: [[&str; SLOTS_PER_SYSTEM]; SYSTEM_COUNT] = [
        ["h1p1", "h1p2", "h1p3", "h1p4", "h1p5"],
        ["h2p1", "h2p2", "h2p3", "h2p4", "h2p5"],
    ];
}

/// One loosely typed numeric input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Measure {
    /// Absent, `null`, or a blank string
    Missing,
    /// A number, or a string holding one
    Value(Decimal),
    /// Anything else, kept verbatim for diagnostics
    Invalid(String),
}

impl Measure {
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Measure::Missing,
            Some(Value::Number(number)) => {
                let text = number.to_string();
                match parse_decimal(&text) {
                    Some(decimal) => Measure::Value(decimal),
                    None => Measure::Invalid(text),
                }
            }
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Measure::Missing;
                }
                match parse_decimal(trimmed) {
                    Some(decimal) => Measure::Value(decimal),
                    None => Measure::Invalid(text.clone()),
                }
            }
            Some(other) => Measure::Invalid(other.to_string()),
        }
    }

    /// The value when it is strictly positive
    pub fn positive(&self) -> Option<Decimal> {
        match self {
            Measure::Value(value) if *value > Decimal::ZERO => Some(*value),
            _ => None,
        }
    }
}

/// Parse a plain or scientific decimal
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Surface and ceiling height of one room slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSlot {
    pub surface: Measure,
    pub ceiling_height: Measure,
    /// Input key of the ceiling height, for diagnostics
    pub ceiling_height_key: &'static str,
}

impl RoomSlot {
    /// Surface of an active slot; `None` drops the slot
    pub fn active_surface(&self) -> Option<Decimal> {
        self.surface.positive()
    }

    /// Ceiling height of an active slot, defaulting when missing or zero
    pub fn ceiling_height(&self) -> Result<Decimal> {
        match &self.ceiling_height {
            Measure::Missing => Ok(DEFAULT_CEILING_HEIGHT),
            Measure::Value(height) if height.is_zero() => Ok(DEFAULT_CEILING_HEIGHT),
            Measure::Value(height) if *height > Decimal::ZERO => Ok(*height),
            Measure::Value(height) => Err(SizingError::InvalidInput(format!(
                "ceiling height {} must be positive, got {}",
                self.ceiling_height_key, height
            ))),
            Measure::Invalid(raw) => Err(SizingError::InvalidInput(format!(
                "ceiling height {} is not a number: {}",
                self.ceiling_height_key, raw
            ))),
        }
    }
}

/// Typed view of an input document
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput {
    /// `None` when the document carries no year
    pub construction_year: Option<i32>,
    /// Year exactly as received
    pub raw_construction_year: Value,
    /// Usage exactly as received, `null` when absent
    pub usage: Value,
    /// Range label exactly as received, `null` when absent
    pub selected_range: Value,
    /// Room slots indexed by system then slot
    pub systems: [[RoomSlot; SLOTS_PER_SYSTEM]; SYSTEM_COUNT],
}

impl SizingInput {
    /// Decode a JSON document
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: Map<String, Value> = serde_json::from_str(raw)?;
        Self::from_map(&document)
    }

    /// Decode an already parsed JSON object
    pub fn from_map(document: &Map<String, Value>) -> Result<Self> {
        let raw_construction_year = lookup(document, &keys::CONSTRUCTION_YEAR)
            .cloned()
            .unwrap_or(Value::Null);
        let construction_year = parse_year(&raw_construction_year)?;

        let usage = lookup(document, &keys::USAGE).cloned().unwrap_or(Value::Null);
        let selected_range = lookup(document, &keys::SELECTED_RANGE)
            .cloned()
            .unwrap_or(Value::Null);

        let systems: [[RoomSlot; SLOTS_PER_SYSTEM]; SYSTEM_COUNT] = SystemId::ALL.map(|system| {
            let surface_keys = keys::SURFACES[system.index()];
            let height_keys = keys::CEILING_HEIGHTS[system.index()];
            let surface_aliases = keys::SURFACE_ALIASES[system.index()];
            let height_aliases = keys::CEILING_HEIGHT_ALIASES[system.index()];
            std::array::from_fn(|slot| RoomSlot {
                surface: Measure::classify(lookup(
                    document,
                    &[surface_keys[slot], surface_aliases[slot]],
                )),
                ceiling_height: Measure::classify(lookup(
                    document,
                    &[height_keys[slot], height_aliases[slot]],
                )),
                ceiling_height_key: height_keys[slot],
            })
        });

        debug!(
            construction_year = ?construction_year,
            usage = %usage,
            "Decoded input document"
        );

        Ok(Self {
            construction_year,
            raw_construction_year,
            usage,
            selected_range,
            systems,
        })
    }

    /// Room slots of one system
    pub fn rooms(&self, system: SystemId) -> &[RoomSlot; SLOTS_PER_SYSTEM] {
        &self.systems[system.index()]
    }
}

/// First present key of a field and its aliases
fn lookup<'a>(document: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| document.get(*name))
}

/// Absent, `null` and blank years yield `None`
fn parse_year(raw: &Value) -> Result<Option<i32>> {
    let key = keys::CONSTRUCTION_YEAR[0];
    let invalid = || {
        SizingError::InvalidInput(format!("{key} must be an integer year, got {raw}"))
    };

    match raw {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|year| year.is_finite() && year.fract() == 0.0)
                    .map(|year| year as i64)
            })
            .and_then(|year| i32::try_from(year).ok())
            .map(Some)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
