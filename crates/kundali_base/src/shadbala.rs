//! Approximate six-fold planetary strength (shadbala).
//!
//! This is an illustrative score, not the classical BPHS computation: every
//! component is a fixed function of the planet's longitude and house only.
//! User-facing surfaces should label it as approximate.
//!
//! The six components (each rounded to one decimal):
//! 1. Sthana (positional): `(lon mod 30) * 4`
//! 2. Dig (directional): `house * 5`
//! 3. Kala (temporal): `(lon / 12) mod 30`
//! 4. Cheshta (motional): `(lon mod 15) * 0.8`
//! 5. Naisargika (innate): constant 40
//! 6. Drik (aspectual): `house * 2 + (lon mod 10)`
//!
//! The total is the sum of the rounded components, rounded again.

use serde::Serialize;

use crate::util::{round1, sanitize_longitude};

/// Innate strength shared by every planet.
pub const NAISARGIKA_BALA: f64 = 40.0;

/// Approximate shadbala breakdown for one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadbalaScore {
    /// Planet display name.
    pub planet: String,
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total: f64,
}

impl ShadbalaScore {
    /// The six components in order: sthana, dig, kala, cheshta, naisargika, drik.
    pub fn components(&self) -> [f64; 6] {
        [
            self.sthana,
            self.dig,
            self.kala,
            self.cheshta,
            self.naisargika,
            self.drik,
        ]
    }
}

pub fn sthana_bala(lon: f64) -> f64 {
    round1((lon % 30.0) * 4.0)
}

pub fn dig_bala(house: u8) -> f64 {
    round1(house as f64 * 5.0)
}

pub fn kala_bala(lon: f64) -> f64 {
    round1((lon / 12.0) % 30.0)
}

pub fn cheshta_bala(lon: f64) -> f64 {
    round1((lon % 15.0) * 0.8)
}

pub fn drik_bala(lon: f64, house: u8) -> f64 {
    round1(house as f64 * 2.0 + lon % 10.0)
}

/// Compute the approximate shadbala of a planet at `longitude` in `house`.
///
/// The longitude goes through [`sanitize_longitude`] first.
pub fn approximate_shadbala(planet: impl Into<String>, longitude: f64, house: u8) -> ShadbalaScore {
    let lon = sanitize_longitude(Some(longitude));
    let sthana = sthana_bala(lon);
    let dig = dig_bala(house);
    let kala = kala_bala(lon);
    let cheshta = cheshta_bala(lon);
    let drik = drik_bala(lon, house);
    let total = round1(sthana + dig + kala + cheshta + NAISARGIKA_BALA + drik);

    ShadbalaScore {
        planet: planet.into(),
        sthana,
        dig,
        kala,
        cheshta,
        naisargika: NAISARGIKA_BALA,
        drik,
        total,
    }
}
