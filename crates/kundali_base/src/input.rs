//! Provider chart documents.
//!
//! Provider payloads are untrusted: every field is optional or lenient so
//! that a malformed part degrades to a default instead of rejecting the
//! whole document. Only syntactically invalid JSON is an error.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::error::InputError;
use crate::graha::is_lagna_name;
use crate::resolve::SignLike;

/// One planet-position record as sent by the data provider.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetRecord {
    /// Provider planet name ("Sun", "Ascendant", ...).
    pub name: String,
    /// Sidereal longitude in degrees. Numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient_longitude")]
    pub longitude: Option<f64>,
    /// Rashi identifier; when absent the sign is derived from the longitude.
    #[serde(default)]
    pub rasi: Option<SignLike>,
}

impl PlanetRecord {
    pub fn new(name: impl Into<String>, longitude: f64, rasi: impl Into<SignLike>) -> Self {
        Self {
            name: name.into(),
            longitude: Some(longitude),
            rasi: Some(rasi.into()),
        }
    }

    /// Whether this record is the ascendant pseudo-point.
    pub fn is_lagna(&self) -> bool {
        is_lagna_name(&self.name)
    }
}

/// Ascendant plus planet list for one chart computation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartInput {
    /// Explicit lagna. When absent, the `Ascendant` planet record is used.
    #[serde(default, alias = "ascendant")]
    pub lagna: Option<SignLike>,
    /// Planet records in provider order.
    #[serde(default, alias = "planet_position", deserialize_with = "lenient_planets")]
    pub planets: Vec<PlanetRecord>,
}

impl ChartInput {
    pub fn new(lagna: impl Into<SignLike>, planets: Vec<PlanetRecord>) -> Self {
        Self {
            lagna: Some(lagna.into()),
            planets,
        }
    }

    /// Decode a provider JSON document.
    pub fn from_json(s: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The ascendant pseudo-point record, if the provider sent one.
    pub fn lagna_record(&self) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.is_lagna())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_longitude<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<LenientNumber>::deserialize(d)? {
        Some(LenientNumber::Number(v)) => Some(v),
        Some(LenientNumber::Text(s)) => s.trim().parse().ok(),
        Some(LenientNumber::Other(_)) | None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeRecord {
    Record(PlanetRecord),
    Malformed(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeList {
    List(Vec<MaybeRecord>),
    Other(IgnoredAny),
}

fn lenient_planets<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<PlanetRecord>, D::Error> {
    let list = match Option::<MaybeList>::deserialize(d)? {
        Some(MaybeList::List(list)) => list,
        Some(MaybeList::Other(_)) => {
            tracing::warn!(target: "kundali::input", "planet list is not an array, using empty list");
            return Ok(Vec::new());
        }
        None => return Ok(Vec::new()),
    };
    let total = list.len();
    let records: Vec<PlanetRecord> = list
        .into_iter()
        .filter_map(|m| match m {
            MaybeRecord::Record(r) => Some(r),
            MaybeRecord::Malformed(_) => None,
        })
        .collect();
    if records.len() < total {
        tracing::warn!(
            target: "kundali::input",
            dropped = total - records.len(),
            "dropped malformed planet records"
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::Rashi;
    use crate::resolve::resolve_rashi;
    use crate::test_log::capture_warnings;

    #[test]
    fn provider_planet_position_payload() {
        let json = r#"{
            "planet_position": [
                {"name": "Ascendant", "longitude": 250.4, "rasi": {"id": 9, "name": "Dhanu"}},
                {"name": "Sun", "longitude": 10.0, "rasi": {"id": 1, "name": "Mesha"}}
            ]
        }"#;
        let input = ChartInput::from_json(json).unwrap();
        assert!(input.lagna.is_none());
        assert_eq!(input.planets.len(), 2);
        let lagna = input.lagna_record().unwrap();
        assert_eq!(resolve_rashi(lagna.rasi.as_ref()), Rashi::Dhanu);
        assert_eq!(input.planets[1].longitude, Some(10.0));
    }

    #[test]
    fn explicit_lagna_and_planets_key() {
        let json = r#"{"lagna": "वृषभ", "planets": [{"name": "Moon", "longitude": 40, "rasi": 2}]}"#;
        let input = ChartInput::from_json(json).unwrap();
        assert_eq!(resolve_rashi(input.lagna.as_ref()), Rashi::Vrishabha);
        assert_eq!(input.planets[0].name, "Moon");
    }

    #[test]
    fn missing_planets_is_empty() {
        let input = ChartInput::from_json(r#"{"lagna": 3}"#).unwrap();
        assert!(input.planets.is_empty());
    }

    #[test]
    fn non_array_planets_is_empty() {
        let input = ChartInput::from_json(r#"{"lagna": 3, "planets": "oops"}"#).unwrap();
        assert!(input.planets.is_empty());
        let input = ChartInput::from_json(r#"{"planets": null}"#).unwrap();
        assert!(input.planets.is_empty());
    }

    #[test]
    fn malformed_records_dropped() {
        let json = r#"{"planets": [{"longitude": 3}, 42, {"name": "Mars", "longitude": 95.5}]}"#;
        let input = ChartInput::from_json(json).unwrap();
        assert_eq!(input.planets.len(), 1);
        assert_eq!(input.planets[0].name, "Mars");
        assert!(input.planets[0].rasi.is_none());
    }

    #[test]
    fn dropped_input_is_reported() {
        let logs = capture_warnings(|| {
            ChartInput::from_json(r#"{"planets": "oops"}"#).unwrap();
        });
        assert!(logs.contains("kundali::input"), "{logs}");
        assert!(logs.contains("not an array"), "{logs}");

        let logs = capture_warnings(|| {
            ChartInput::from_json(r#"{"planets": [42, {"name": "Mars"}]}"#).unwrap();
        });
        assert!(logs.contains("dropped=1"), "{logs}");
    }

    #[test]
    fn lagna_record_with_text_id() {
        let json = r#"{"planet_position": [
            {"name": "Ascendant", "longitude": 250.4, "rasi": {"id": "9", "name": "Dhanu"}}
        ]}"#;
        let input = ChartInput::from_json(json).unwrap();
        let lagna = input.lagna_record().unwrap();
        assert_eq!(resolve_rashi(lagna.rasi.as_ref()), Rashi::Dhanu);
    }

    #[test]
    fn lenient_longitude_values() {
        let json = r#"{"planets": [
            {"name": "A", "longitude": "123.5"},
            {"name": "B", "longitude": "north"},
            {"name": "C", "longitude": null},
            {"name": "D", "longitude": [1]},
            {"name": "E"}
        ]}"#;
        let input = ChartInput::from_json(json).unwrap();
        let lons: Vec<Option<f64>> = input.planets.iter().map(|p| p.longitude).collect();
        assert_eq!(lons, vec![Some(123.5), None, None, None, None]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ChartInput::from_json("{not json").is_err());
        assert!(ChartInput::from_json("\"Mesha\"").is_err());
    }
}
