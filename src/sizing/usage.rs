//! Usage mode resolution

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Labels meaning heating only
pub const HEATING_ONLY_LABELS: [&str; 2] = ["Heating only", "Chauffage uniquement"];

/// Labels meaning cooling only
pub const COOLING_ONLY_LABELS: [&str; 2] = ["Cooling only", "Climatisation uniquement"];

/// Labels producers send for combined use; any other value resolves the same way
pub const BOTH_LABELS: [&str; 2] = ["Both", "Les deux"];

/// What the installation is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageMode {
    Heating,
    Cooling,
    #[default]
    HeatingCooling,
}

impl UsageMode {
    /// Resolve the raw usage value of an input document.
    ///
    /// Only an exact single-mode label selects heating or cooling; anything
    /// else, including non-string values, means both.
    pub fn resolve(raw: &Value) -> Self {
        match raw {
            Value::String(label) => Self::from_label(label),
            _ => Self::HeatingCooling,
        }
    }

    pub fn from_label(label: &str) -> Self {
        if HEATING_ONLY_LABELS.contains(&label) {
            Self::Heating
        } else if COOLING_ONLY_LABELS.contains(&label) {
            Self::Cooling
        } else {
            Self::HeatingCooling
        }
    }

    /// Pick the power a unit is sized around
    pub fn reference_power(self, heating_power: i64, cooling_power: i64) -> i64 {
        match self {
            Self::Heating => heating_power,
            Self::Cooling => cooling_power,
            Self::HeatingCooling => heating_power.max(cooling_power),
        }
    }
}

impl std::fmt::Display for UsageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageMode::Heating => write!(f, "heating"),
            UsageMode::Cooling => write!(f, "cooling"),
            UsageMode::HeatingCooling => write!(f, "heating_cooling"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_mode_labels() {
        assert_eq!(UsageMode::resolve(&json!("Heating only")), UsageMode::Heating);
        assert_eq!(UsageMode::resolve(&json!("Chauffage uniquement")), UsageMode::Heating);
        assert_eq!(UsageMode::resolve(&json!("Cooling only")), UsageMode::Cooling);
        assert_eq!(
            UsageMode::resolve(&json!("Climatisation uniquement")),
            UsageMode::Cooling
        );
    }

    #[test]
    fn test_producer_labels() {
        assert_eq!(UsageMode::from_label("Chauffage uniquement"), UsageMode::Heating);
        assert_eq!(UsageMode::from_label("Climatisation uniquement"), UsageMode::Cooling);
        for label in BOTH_LABELS {
            assert_eq!(UsageMode::from_label(label), UsageMode::HeatingCooling);
        }
    }

    #[test]
    fn test_everything_else_is_both() {
        for raw in [
            json!("Both"),
            json!("Les deux"),
            json!("Chauffage seul"),
            json!("heating only"),
            json!(" Heating only"),
            json!(""),
            json!(null),
            json!(1),
            json!(["Heating only"]),
        ] {
            assert_eq!(UsageMode::resolve(&raw), UsageMode::HeatingCooling, "{raw}");
        }
    }

    #[test]
    fn test_reference_power() {
        assert_eq!(UsageMode::Heating.reference_power(1200, 2000), 1200);
        assert_eq!(UsageMode::Cooling.reference_power(1200, 2000), 2000);
        assert_eq!(UsageMode::HeatingCooling.reference_power(1200, 2000), 2000);
        assert_eq!(UsageMode::HeatingCooling.reference_power(2400, 2000), 2400);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_value(UsageMode::Heating).unwrap(), json!("heating"));
        assert_eq!(
            serde_json::to_value(UsageMode::HeatingCooling).unwrap(),
            json!("heating_cooling")
        );
        assert_eq!(UsageMode::HeatingCooling.to_string(), "heating_cooling");
    }
}
