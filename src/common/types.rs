//! Unit types shared by the calculator and the output document

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rust_decimal::Decimal;

use crate::sizing::power::PowerBand;

/// Number of independent heat-pump systems an input can describe
pub const SYSTEM_COUNT: usize = 2;

/// Number of room slots per system
pub const SLOTS_PER_SYSTEM: usize = 5;

/// Heat-pump system identifier (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(u8);

impl SystemId {
    /// All systems, in output order
    pub const ALL: [SystemId; SYSTEM_COUNT] = [SystemId(1), SystemId(2)];

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position of this system in the input tables
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A room-level terminal sized from one active room slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndoorUnit {
    /// `slot{n}_system{s}`
    pub id: String,
    /// Owning system, already encoded in `id`
    #[serde(skip)]
    pub system: SystemId,
    /// Floor area in m²
    #[serde(with = "rust_decimal::serde::float")]
    pub surface: Decimal,
    /// Ceiling height in m
    #[serde(rename = "hauteurPlafond", with = "rust_decimal::serde::float")]
    pub ceiling_height: Decimal,
    /// Heating power in W
    #[serde(rename = "puissanceChaud")]
    pub heating_power: i64,
    /// Cooling power in W
    #[serde(rename = "puissanceFroid")]
    pub cooling_power: i64,
    #[serde(flatten)]
    pub band: PowerBand,
}

impl IndoorUnit {
    pub fn indoor_id(slot_index: usize, system: SystemId) -> String {
        format!("slot{}_system{}", slot_index + 1, system)
    }
}

/// The condensing unit serving every indoor unit of one system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutdoorUnit {
    /// `system{s}`
    pub id: String,
    /// Owning system, already encoded in `id`
    #[serde(skip)]
    pub system: SystemId,
    /// Aggregate heating power after diversity, in W
    #[serde(rename = "puissanceChaud")]
    pub heating_power: i64,
    /// Aggregate cooling power after diversity, in W
    #[serde(rename = "puissanceFroid")]
    pub cooling_power: i64,
    #[serde(flatten)]
    pub band: PowerBand,
    #[serde(rename = "nombreUI")]
    pub indoor_unit_count: usize,
    /// Product range label, echoed from the input
    #[serde(rename = "gamme")]
    pub selected_range: Value,
}

impl OutdoorUnit {
    pub fn outdoor_id(system: SystemId) -> String {
        format!("system{}", system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_identifiers() {
        assert_eq!(IndoorUnit::indoor_id(0, SystemId::ALL[0]), "slot1_system1");
        assert_eq!(IndoorUnit::indoor_id(4, SystemId::ALL[1]), "slot5_system2");
        assert_eq!(OutdoorUnit::outdoor_id(SystemId::ALL[1]), "system2");
    }

    #[test]
    fn test_system_id_index() {
        assert_eq!(SystemId::ALL[0].number(), 1);
        assert_eq!(SystemId::ALL[0].index(), 0);
        assert_eq!(SystemId::ALL[1].index(), 1);
    }

    #[test]
    fn test_unit_output_keys() {
        let band = PowerBand::around(2000).unwrap();
        let indoor = IndoorUnit {
            id: IndoorUnit::indoor_id(0, SystemId::ALL[0]),
            system: SystemId::ALL[0],
            surface: Decimal::from(20),
            ceiling_height: Decimal::new(25, 1),
            heating_power: 1200,
            cooling_power: 2000,
            band,
        };
        let outdoor = OutdoorUnit {
            id: OutdoorUnit::outdoor_id(SystemId::ALL[0]),
            system: SystemId::ALL[0],
            heating_power: 1080,
            cooling_power: 1800,
            band,
            indoor_unit_count: 1,
            selected_range: Value::from("R32"),
        };

        let indoor = serde_json::to_value(&indoor).unwrap();
        assert_eq!(
            indoor,
            serde_json::json!({
                "id": "slot1_system1",
                "surface": 20.0,
                "hauteurPlafond": 2.5,
                "puissanceChaud": 1200,
                "puissanceFroid": 2000,
                "puissanceReference": 2000,
                "puissanceMin": 1900,
                "puissanceMax": 2800
            })
        );

        let outdoor = serde_json::to_value(&outdoor).unwrap();
        assert_eq!(outdoor["puissanceChaud"], 1080);
        assert_eq!(outdoor["nombreUI"], 1);
        assert_eq!(outdoor["gamme"], "R32");
        assert!(outdoor.get("systeme").is_none());
        assert!(outdoor.get("nombreUnitesInterieures").is_none());
    }
}
