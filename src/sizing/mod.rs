//! Heat pump sizing
//!
//! Turns one input document into indoor and outdoor unit ratings.
//!
//! # Flow
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────────────────────┐
//! │ JSON input   │──▶│ SizingInput::from_json                       │
//! └──────────────┘   │   opaque keys → year, usage, 2 × 5 RoomSlots │
//!                    └──────────────────────┬───────────────────────┘
//!                                           ▼
//!                    ┌──────────────────────────────────────────────┐
//!                    │ compute                                      │
//!                    │   Coefficients, UsageMode::resolve           │
//!                    │   process_system(system 1), (system 2)       │
//!                    └──────────────────────┬───────────────────────┘
//!                                           ▼
//!                    ┌──────────────────────────────────────────────┐
//!                    │ Document: SizingReport | FailureReport       │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`SizingInput`]: decoded input with every room value classified as a [`Measure`]
//! - [`Coefficients`]: heat-loss coefficient G and cooling ratio of the construction era
//! - [`UsageMode`]: heating, cooling or both; selects each unit's reference power
//! - [`compute`] / [`process_system`]: the sizing itself
//! - [`Document`]: what gets written, success or failure
//!
//! # Example
//!
//! ```
//! use heatpump_sizing::sizing::{compute_document, Document};
//!
//! let document = compute_document(r#"{"t21V": 2000, "8HBA": 20}"#);
//! let Document::Success(report) = document else { panic!() };
//! assert_eq!(report.indoor_units[0].band.reference, 2000);
//! ```

pub mod calculator;
pub mod coefficients;
pub mod input;
pub mod power;
pub mod report;
pub mod usage;

pub use calculator::{compute, process_system, SystemSizing};
pub use coefficients::Coefficients;
pub use input::{Measure, RoomSlot, SizingInput, DEFAULT_CEILING_HEIGHT};
pub use power::PowerBand;
pub use report::{compute_document, Document, FailureReport, SizingReport, Summary};
pub use usage::UsageMode;
