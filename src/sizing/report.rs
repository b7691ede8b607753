//! Output documents
//!
//! A run always ends with exactly one document: a [`SizingReport`] on
//! success, a [`FailureReport`] otherwise. [`compute_document`] is the
//! boundary that turns any error into the failure shape.

use std::backtrace::BacktraceStatus;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::errors::Result;
use crate::common::types::{IndoorUnit, OutdoorUnit};
use crate::sizing::calculator::compute;
use crate::sizing::coefficients::Coefficients;
use crate::sizing::input::SizingInput;
use crate::sizing::usage::UsageMode;

/// Successful sizing result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    /// Always `true`
    pub success: bool,
    pub coefficients: Coefficients,
    #[serde(rename = "gamme")]
    pub selected_range: Value,
    /// Resolved usage mode
    pub usage: UsageMode,
    /// Usage exactly as received
    #[serde(rename = "utilisation")]
    pub raw_usage: Value,
    /// Construction year exactly as received
    #[serde(rename = "anneeConstruction")]
    pub raw_construction_year: Value,
    #[serde(rename = "unitesInterieures")]
    pub indoor_units: Vec<IndoorUnit>,
    #[serde(rename = "unitesExterieures")]
    pub outdoor_units: Vec<OutdoorUnit>,
    #[serde(rename = "airtable")]
    pub summary: Summary,
}

/// Flattened view consumed by the downstream table sync
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "gamme")]
    pub selected_range: Value,
    /// First indoor unit, if any
    #[serde(rename = "premiereUI")]
    pub first_indoor_unit: Option<IndoorUnit>,
    /// First outdoor unit, if any
    #[serde(rename = "premiereUE")]
    pub first_outdoor_unit: Option<OutdoorUnit>,
    #[serde(rename = "nombrePACs")]
    pub outdoor_unit_count: usize,
    #[serde(rename = "nombreTotalUI")]
    pub indoor_unit_count: usize,
}

impl SizingReport {
    pub fn new(
        input: &SizingInput,
        coefficients: Coefficients,
        usage: UsageMode,
        indoor_units: Vec<IndoorUnit>,
        outdoor_units: Vec<OutdoorUnit>,
    ) -> Self {
        let summary = Summary {
            selected_range: input.selected_range.clone(),
            first_indoor_unit: indoor_units.first().cloned(),
            first_outdoor_unit: outdoor_units.first().cloned(),
            outdoor_unit_count: outdoor_units.len(),
            indoor_unit_count: indoor_units.len(),
        };

        Self {
            success: true,
            coefficients,
            selected_range: input.selected_range.clone(),
            usage,
            raw_usage: input.usage.clone(),
            raw_construction_year: input.raw_construction_year.clone(),
            indoor_units,
            outdoor_units,
            summary,
        }
    }
}

/// Failed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Always `false`
    pub success: bool,
    pub error: String,
    /// Cause chain and captured backtrace, empty when neither exists
    pub stack: String,
}

impl FailureReport {
    pub fn new(error: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            stack: stack.into(),
        }
    }

    pub fn from_error(err: &anyhow::Error) -> Self {
        let mut trace: Vec<String> = err
            .chain()
            .skip(1)
            .map(|cause| format!("caused by: {cause}"))
            .collect();

        let backtrace = err.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            trace.push(backtrace.to_string());
        }

        Self::new(err.to_string(), trace.join("\n"))
    }
}

/// The single document a run writes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Success(SizingReport),
    Failure(FailureReport),
}

impl Document {
    pub fn from_result(result: anyhow::Result<SizingReport>) -> Self {
        match result {
            Ok(report) => Document::Success(report),
            Err(err) => Document::Failure(FailureReport::from_error(&err)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Document::Success(_))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Decode, size and wrap a raw input document; never fails
pub fn compute_document(raw: &str) -> Document {
    let result = SizingInput::from_json(raw).and_then(|input| compute(&input));
    Document::from_result(result.map_err(anyhow::Error::from))
}
