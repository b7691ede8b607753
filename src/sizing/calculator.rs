//! Indoor and outdoor unit sizing

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing::{debug, info};

use crate::common::errors::{Result, SizingError};
use crate::common::types::{IndoorUnit, OutdoorUnit, SystemId};
use crate::sizing::coefficients::Coefficients;
use crate::sizing::input::{RoomSlot, SizingInput};
use crate::sizing::power::{product, round_power, scale_power, PowerBand};
use crate::sizing::report::SizingReport;
use crate::sizing::usage::UsageMode;

/// Indoor/outdoor temperature difference the heating load is sized for, in K
pub const DESIGN_TEMPERATURE_DELTA: Decimal = dec!(25);

/// Oversizing margin applied to the heating load
pub const HEATING_SAFETY_FACTOR: Decimal = dec!(1.2);

/// Share of the summed indoor demand an outdoor unit has to cover
pub const OUTDOOR_DIVERSITY_FACTOR: Decimal = dec!(0.9);

/// Units sized for one system
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSizing {
    pub indoor_units: Vec<IndoorUnit>,
    /// `None` when the system has no active room
    pub outdoor_unit: Option<OutdoorUnit>,
}

/// Size every unit described by an input document
pub fn compute(input: &SizingInput) -> Result<SizingReport> {
    let coefficients = Coefficients::for_construction_year(input.construction_year);
    let mode = UsageMode::resolve(&input.usage);

    debug!(
        construction_year = ?input.construction_year,
        g = %coefficients.g,
        cooling_ratio = coefficients.cooling_ratio,
        mode = %mode,
        "Resolved sizing coefficients"
    );

    let mut indoor_units = Vec::new();
    let mut outdoor_units = Vec::new();

    for system in SystemId::ALL {
        let sizing = process_system(
            input.rooms(system),
            system,
            &coefficients,
            mode,
            &input.selected_range,
        )?;
        indoor_units.extend(sizing.indoor_units);
        outdoor_units.extend(sizing.outdoor_unit);
    }

    info!(
        indoor_units = indoor_units.len(),
        outdoor_units = outdoor_units.len(),
        "Sizing computed"
    );

    Ok(SizingReport::new(
        input,
        coefficients,
        mode,
        indoor_units,
        outdoor_units,
    ))
}

/// Size the indoor units of one system and the outdoor unit serving them
pub fn process_system(
    rooms: &[RoomSlot],
    system: SystemId,
    coefficients: &Coefficients,
    mode: UsageMode,
    selected_range: &Value,
) -> Result<SystemSizing> {
    let mut indoor_units = Vec::with_capacity(rooms.len());

    for (slot_index, room) in rooms.iter().enumerate() {
        let Some(surface) = room.active_surface() else {
            debug!(%system, slot = slot_index + 1, surface = ?room.surface, "Skipping inactive slot");
            continue;
        };
        let ceiling_height = room.ceiling_height()?;

        let heating_power = round_power(product(&[
            coefficients.g,
            DESIGN_TEMPERATURE_DELTA,
            surface,
            ceiling_height,
            HEATING_SAFETY_FACTOR,
        ])?)?;
        let cooling_power = round_power(product(&[
            Decimal::from(coefficients.cooling_ratio),
            surface,
            ceiling_height,
        ])?)?;
        let band = PowerBand::around(mode.reference_power(heating_power, cooling_power))?;

        indoor_units.push(IndoorUnit {
            id: IndoorUnit::indoor_id(slot_index, system),
            system,
            surface,
            ceiling_height,
            heating_power,
            cooling_power,
            band,
        });
    }

    if indoor_units.is_empty() {
        debug!(%system, "No active room, system omitted");
        return Ok(SystemSizing::default());
    }

    let sum_heating = total(indoor_units.iter().map(|unit| unit.heating_power))?;
    let sum_cooling = total(indoor_units.iter().map(|unit| unit.cooling_power))?;

    let heating_power = scale_power(sum_heating, OUTDOOR_DIVERSITY_FACTOR)?;
    let cooling_power = scale_power(sum_cooling, OUTDOOR_DIVERSITY_FACTOR)?;
    let band = PowerBand::around(mode.reference_power(heating_power, cooling_power))?;

    debug!(
        %system,
        indoor_units = indoor_units.len(),
        heating_power,
        cooling_power,
        reference_power = band.reference,
        "Sized outdoor unit"
    );

    let outdoor_unit = OutdoorUnit {
        id: OutdoorUnit::outdoor_id(system),
        system,
        heating_power,
        cooling_power,
        band,
        indoor_unit_count: indoor_units.len(),
        selected_range: selected_range.clone(),
    };

    Ok(SystemSizing {
        indoor_units,
        outdoor_unit: Some(outdoor_unit),
    })
}

fn total(mut powers: impl Iterator<Item = i64>) -> Result<i64> {
    powers.try_fold(0i64, |acc, power| {
        acc.checked_add(power)
            .ok_or_else(|| SizingError::Computation("overflow summing indoor powers".to_string()))
    })
}
