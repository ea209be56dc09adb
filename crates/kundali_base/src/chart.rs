//! Chart assembly: house table, planet placements and strength table.
//!
//! Pure function of the lagna and the provider's planet records. Output
//! order is fixed: houses 1 through 12 starting at the lagna's rashi,
//! placements and strengths in provider order.

use serde::{Deserialize, Serialize};

use crate::bhava::{bhava_meaning, house_of};
use crate::graha::{Graha, graha_from_name, lagna_display_name, rashi_lord};
use crate::input::{ChartInput, PlanetRecord};
use crate::locale::Locale;
use crate::navamsha::{NavamshaInfo, navamsha_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::resolve::{SignLike, resolve_rashi};
use crate::shadbala::{ShadbalaScore, approximate_shadbala};
use crate::util::sanitize_longitude;

/// Options for chart assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Locale for sign, planet and house labels.
    pub locale: Locale,
    /// List the ascendant pseudo-point among the occupants of its house.
    pub include_lagna_in_houses: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            include_lagna_in_houses: true,
        }
    }
}

/// One row of the house table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// House number, 1..=12.
    pub house: u8,
    pub rashi: Rashi,
    /// 1-based ordinal of the rashi.
    pub rashi_number: u8,
    pub rashi_name: &'static str,
    pub lord: Graha,
    pub lord_name: &'static str,
    /// Display names of the planets in this house, in provider order.
    pub occupants: Vec<String>,
    pub meaning: &'static str,
}

/// Where one provider record lands in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPlacement {
    /// Display name in the chart locale, or the provider name if unrecognised.
    pub name: String,
    pub graha: Option<Graha>,
    pub is_lagna: bool,
    /// Longitude after sanitising, in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    pub house: u8,
    pub navamsha: NavamshaInfo,
}

/// A fully assembled chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub lagna: Rashi,
    pub lagna_name: &'static str,
    pub moon_rashi: Option<Rashi>,
    pub moon_name: Option<&'static str>,
    pub locale: Locale,
    pub rows: [ChartRow; 12],
    pub placements: Vec<PlanetPlacement>,
    /// Approximate strengths, ascendant excluded.
    pub shadbala: Vec<ShadbalaScore>,
}

impl Chart {
    /// Row for a 1-based house number.
    pub fn row(&self, house: u8) -> Option<&ChartRow> {
        self.rows.get(house.checked_sub(1)? as usize)
    }

    /// Placement of a graha, if the provider sent it.
    pub fn placement_of(&self, graha: Graha) -> Option<&PlanetPlacement> {
        self.placements.iter().find(|p| p.graha == Some(graha))
    }
}

/// Rashi of a provider record: its `rasi` field, or its longitude when the
/// field is absent.
pub fn record_rashi(record: &PlanetRecord) -> Rashi {
    match (&record.rasi, record.longitude) {
        (Some(rasi), _) => resolve_rashi(Some(rasi)),
        (None, Some(lon)) if lon.is_finite() => rashi_from_longitude(lon).rashi,
        (None, _) => resolve_rashi(None),
    }
}

/// Place one record relative to the lagna.
pub fn place_planet(lagna: Rashi, record: &PlanetRecord, locale: Locale) -> PlanetPlacement {
    let graha = graha_from_name(&record.name);
    let is_lagna = record.is_lagna();
    let name = match graha {
        Some(g) => g.display_name(locale).to_owned(),
        None if is_lagna => lagna_display_name(locale).to_owned(),
        None => record.name.trim().to_owned(),
    };
    let rashi = record_rashi(record);
    let longitude = sanitize_longitude(record.longitude);

    PlanetPlacement {
        name,
        graha,
        is_lagna,
        longitude,
        rashi,
        house: house_of(lagna, rashi),
        navamsha: navamsha_from_longitude(longitude),
    }
}

/// Approximate shadbala of a record, counted from `lagna`.
pub fn shadbala_for(lagna: Rashi, record: &PlanetRecord, locale: Locale) -> ShadbalaScore {
    let p = place_planet(lagna, record, locale);
    approximate_shadbala(p.name, p.longitude, p.house)
}

/// Assemble the chart for an already-resolved lagna.
pub fn assemble_chart(lagna: Rashi, planets: &[PlanetRecord], config: &ChartConfig) -> Chart {
    let locale = config.locale;
    let placements: Vec<PlanetPlacement> = planets
        .iter()
        .map(|r| place_planet(lagna, r, locale))
        .collect();

    let rows = std::array::from_fn(|i| {
        let house = i as u8 + 1;
        let rashi = lagna.advance(i as u8);
        let lord = rashi_lord(rashi);
        let occupants = placements
            .iter()
            .filter(|p| p.house == house && (config.include_lagna_in_houses || !p.is_lagna))
            .map(|p| p.name.clone())
            .collect();
        ChartRow {
            house,
            rashi,
            rashi_number: rashi.number(),
            rashi_name: rashi.display_name(locale),
            lord,
            lord_name: lord.display_name(locale),
            occupants,
            meaning: bhava_meaning(house, locale).unwrap_or_default(),
        }
    });

    let shadbala: Vec<ShadbalaScore> = placements
        .iter()
        .filter(|p| !p.is_lagna)
        .map(|p| approximate_shadbala(p.name.clone(), p.longitude, p.house))
        .collect();

    let moon_rashi = placements
        .iter()
        .find(|p| p.graha == Some(Graha::Chandra))
        .map(|p| p.rashi);

    tracing::debug!(
        target: "kundali::chart",
        lagna = lagna.name(),
        planets = placements.len(),
        strengths = shadbala.len(),
        "chart assembled"
    );

    Chart {
        lagna,
        lagna_name: lagna.display_name(locale),
        moon_rashi,
        moon_name: moon_rashi.map(|r| r.display_name(locale)),
        locale,
        rows,
        placements,
        shadbala,
    }
}

/// Resolve the lagna identifier, then assemble the chart.
pub fn assemble_chart_from_sign(
    lagna: Option<&SignLike>,
    planets: &[PlanetRecord],
    config: &ChartConfig,
) -> Chart {
    assemble_chart(resolve_rashi(lagna), planets, config)
}

/// Lagna of a provider document: the explicit `lagna` field, else the
/// ascendant record's sign, else the default rashi.
pub fn input_lagna(input: &ChartInput) -> Rashi {
    match (&input.lagna, input.lagna_record()) {
        (Some(lagna), _) => resolve_rashi(Some(lagna)),
        (None, Some(record)) => record_rashi(record),
        (None, None) => resolve_rashi(None),
    }
}

/// Assemble the chart for a decoded provider document.
pub fn chart_from_input(input: &ChartInput, config: &ChartConfig) -> Chart {
    assemble_chart(input_lagna(input), &input.planets, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_in_mesha() -> Vec<PlanetRecord> {
        vec![PlanetRecord::new("Sun", 10.0, 1)]
    }

    #[test]
    fn single_planet_in_first_house() {
        let chart = assemble_chart(Rashi::Mesha, &sun_in_mesha(), &ChartConfig::default());
        assert_eq!(chart.rows[0].rashi, Rashi::Mesha);
        assert_eq!(chart.rows[0].rashi_name, "Aries");
        assert_eq!(chart.rows[0].occupants, vec!["Sun".to_string()]);
        assert!(chart.rows[1..].iter().all(|r| r.occupants.is_empty()));
    }

    #[test]
    fn rows_in_lagna_first_order() {
        let chart = assemble_chart(Rashi::Kumbha, &[], &ChartConfig::default());
        let numbers: Vec<u8> = chart.rows.iter().map(|r| r.rashi_number).collect();
        assert_eq!(numbers, vec![11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        for (i, row) in chart.rows.iter().enumerate() {
            assert_eq!(row.house as usize, i + 1);
            assert_eq!(row.lord, rashi_lord(row.rashi));
        }
    }

    #[test]
    fn empty_planets_give_empty_houses() {
        let chart = assemble_chart(Rashi::Simha, &[], &ChartConfig::default());
        assert_eq!(chart.rows.len(), 12);
        assert!(chart.rows.iter().all(|r| r.occupants.is_empty()));
        assert!(chart.shadbala.is_empty());
        assert!(chart.moon_rashi.is_none());
    }

    #[test]
    fn lagna_excluded_from_shadbala() {
        let planets = vec![
            PlanetRecord::new("Ascendant", 250.0, "Dhanu"),
            PlanetRecord::new("Moon", 40.0, "Vrishabha"),
            PlanetRecord::new("Sun", 10.0, "Mesha"),
        ];
        let chart = assemble_chart(Rashi::Dhanu, &planets, &ChartConfig::default());
        let names: Vec<&str> = chart.shadbala.iter().map(|s| s.planet.as_str()).collect();
        assert_eq!(names, vec!["Moon", "Sun"]);
        assert_eq!(chart.rows[0].occupants, vec!["Ascendant".to_string()]);
        assert_eq!(chart.moon_rashi, Some(Rashi::Vrishabha));
        assert_eq!(chart.moon_name, Some("Taurus"));
    }

    #[test]
    fn lagna_can_be_hidden_from_houses() {
        let planets = vec![PlanetRecord::new("Ascendant", 250.0, "Dhanu")];
        let config = ChartConfig {
            include_lagna_in_houses: false,
            ..ChartConfig::default()
        };
        let chart = assemble_chart(Rashi::Dhanu, &planets, &config);
        assert!(chart.rows[0].occupants.is_empty());
        assert_eq!(chart.placements.len(), 1);
    }

    #[test]
    fn nepali_labels() {
        let config = ChartConfig {
            locale: Locale::Nepali,
            ..ChartConfig::default()
        };
        let chart = assemble_chart(Rashi::Mesha, &sun_in_mesha(), &config);
        assert_eq!(chart.rows[0].occupants, vec!["सूर्य".to_string()]);
        assert_eq!(chart.rows[0].lord_name, "मंगल");
        assert_eq!(chart.rows[0].meaning, "स्वभाव, शरीर, व्यक्तित्व");
        assert_eq!(chart.lagna_name, "मेष");
    }

    #[test]
    fn unknown_planet_keeps_provider_name() {
        let planets = vec![PlanetRecord::new(" Uranus ", 100.0, "Karka")];
        let chart = assemble_chart(Rashi::Mesha, &planets, &ChartConfig::default());
        assert_eq!(chart.rows[3].occupants, vec!["Uranus".to_string()]);
        assert_eq!(chart.shadbala[0].planet, "Uranus");
    }

    #[test]
    fn missing_rasi_uses_longitude() {
        let record = PlanetRecord {
            name: "Mars".into(),
            longitude: Some(95.0),
            rasi: None,
        };
        assert_eq!(record_rashi(&record), Rashi::Karka);
    }

    #[test]
    fn unresolvable_rasi_defaults_to_mesha() {
        let record = PlanetRecord::new("Venus", 200.0, "Nowhere");
        assert_eq!(record_rashi(&record), Rashi::Mesha);
        let bare = PlanetRecord {
            name: "Venus".into(),
            longitude: None,
            rasi: None,
        };
        assert_eq!(record_rashi(&bare), Rashi::Mesha);
    }

    #[test]
    fn placement_navamsha_and_house() {
        let record = PlanetRecord::new("Jupiter", 45.5, "Vrishabha");
        let p = place_planet(Rashi::Mesha, &record, Locale::Sanskrit);
        assert_eq!(p.name, "Guru");
        assert_eq!(p.house, 2);
        assert_eq!(p.navamsha.pada, 5);
        assert_eq!(p.navamsha.rashi, Rashi::Vrishabha);
    }

    #[test]
    fn shadbala_for_record() {
        let record = PlanetRecord::new("Sun", 45.0, "Vrishabha");
        let s = shadbala_for(Rashi::Meena, &record, Locale::English);
        // Vrishabha is the 3rd house from Meena
        assert!((s.dig - 15.0).abs() < 1e-9);
        assert!((s.total - 129.8).abs() < 1e-9);
    }

    #[test]
    fn input_lagna_falls_back_to_ascendant_record() {
        let input = ChartInput {
            lagna: None,
            planets: vec![PlanetRecord::new("Ascendant", 200.0, 7)],
        };
        assert_eq!(input_lagna(&input), Rashi::Tula);
        assert_eq!(input_lagna(&ChartInput::default()), Rashi::Mesha);
    }

    #[test]
    fn row_lookup() {
        let chart = assemble_chart(Rashi::Makara, &[], &ChartConfig::default());
        assert_eq!(chart.row(1).map(|r| r.rashi), Some(Rashi::Makara));
        assert_eq!(chart.row(12).map(|r| r.rashi), Some(Rashi::Dhanu));
        assert!(chart.row(0).is_none());
        assert!(chart.row(13).is_none());
    }
}
