//! Common test utilities and fixtures

#![allow(dead_code)]

use heatpump_sizing::sizing::{compute_document, Document, SizingReport};

/// Run a raw document and expect the success shape
pub fn expect_success(raw: &str) -> SizingReport {
    match compute_document(raw) {
        Document::Success(report) => report,
        Document::Failure(failure) => panic!("expected success, got failure: {failure:?}"),
    }
}

/// Sample input documents, keyed the way producers send them
///
/// `t21V` construction year, `km2v` usage, `3efc` range; surfaces and
/// ceiling heights use the per-slot keys of `sizing::input::keys`.
pub mod inputs {
    /// One 20 m² room, year 2000, both usages
    pub const SINGLE_ROOM_2000: &str = r#"{
        "t21V": 2000,
        "km2v": "Les deux",
        "3efc": "Premium",
        "8HBA": "20",
        "5BWb": "2.5"
    }"#;

    /// Two systems with mixed active/inactive slots
    pub const TWO_SYSTEMS: &str = r#"{
        "t21V": "1978",
        "km2v": "Chauffage uniquement",
        "3efc": "Confort",
        "8HBA": 12,
        "nwio": "",
        "s4bD": "abc",
        "nQ1S": "not read",
        "8Gzw": null,
        "8Xa1": "9.5",
        "mvUV": 2.4,
        "bT9L": 0,
        "8Fw1": 30,
        "8PSC": 3,
        "dUTa": "12,5"
    }"#;

    /// Every slot filled
    pub const FULL_HOUSE: &str = r#"{
        "t21V": 2015,
        "km2v": "Climatisation uniquement",
        "3efc": "Eco",
        "8HBA": 10, "nwio": 11, "s4bD": 12, "8Gzw": 13, "8Xa1": 14,
        "bT9L": 20, "8Fw1": 21, "dUTa": 22, "w7SX": 23, "84Y4": 24,
        "3n7k": 2.6, "8PSC": 2.7, "mYbk": 2.8, "31cn": 2.9, "ry6f": 3.1
    }"#;

    /// No active room at all
    pub const NO_ROOMS: &str = r#"{
        "t21V": 1965,
        "3efc": "Premium",
        "8HBA": 0,
        "dUTa": ""
    }"#;

    /// Active slot with a broken ceiling height
    pub const BAD_HEIGHT: &str = r#"{
        "t21V": 2010,
        "w7SX": 18,
        "31cn": "tall"
    }"#;

    /// The same single room under the readable alias keys
    pub const READABLE_KEYS: &str = r#"{
        "anneeConstruction": 2000,
        "utilisation": "Both",
        "gamme": "Premium",
        "s1p1": 20,
        "h1p1": 2.5
    }"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_json() {
        for raw in [
            inputs::SINGLE_ROOM_2000,
            inputs::TWO_SYSTEMS,
            inputs::FULL_HOUSE,
            inputs::NO_ROOMS,
            inputs::BAD_HEIGHT,
            inputs::READABLE_KEYS,
        ] {
            assert!(serde_json::from_str::<serde_json::Value>(raw).is_ok());
        }
    }
}
