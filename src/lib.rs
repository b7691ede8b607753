//! HeatpumpSizing Library
//!
//! Computes heat pump indoor and outdoor unit ratings from a building's
//! construction year, usage and room dimensions.

pub mod common;
pub mod config;
pub mod sizing;

// Re-export commonly used types
pub use common::errors::{Result, SizingError};
pub use common::types::{IndoorUnit, OutdoorUnit, SystemId};
pub use config::types::AppConfig;

// Sizing types
pub use sizing::{
    compute, compute_document, Coefficients, Document, FailureReport, PowerBand, SizingInput,
    SizingReport, UsageMode,
};
