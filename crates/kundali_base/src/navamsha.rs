//! Navamsha (D9) sign and pada of a longitude.
//!
//! Each 30-degree rashi is split into nine padas of 3 deg 20 min. The pada's
//! navamsha sign counts forward from a starting sign chosen by the modality
//! of the occupied rashi:
//! - movable rashis start from themselves,
//! - fixed rashis start from the 9th sign,
//! - dual rashis start from the 5th sign.

use serde::Serialize;

use crate::rashi::{Rashi, RashiModality, rashi_from_longitude};

/// Span of one navamsha pada in degrees (3 deg 20 min).
pub const PADA_SPAN_DEG: f64 = 10.0 / 3.0;

/// Navamsha placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavamshaInfo {
    /// Navamsha (D9) sign.
    pub rashi: Rashi,
    /// Pada within the natal rashi, 1..=9.
    pub pada: u8,
    /// Rashi the longitude itself falls in.
    pub natal_rashi: Rashi,
    /// Degrees already traversed inside the pada [0, 3.333).
    pub degrees_in_pada: f64,
}

/// First navamsha sign of a natal rashi.
pub const fn navamsha_start(natal: Rashi) -> Rashi {
    match natal.modality() {
        RashiModality::Movable => natal,
        RashiModality::Fixed => natal.advance(8),
        RashiModality::Dual => natal.advance(4),
    }
}

/// Compute navamsha sign and pada from a sidereal longitude.
///
/// Out-of-range longitudes are wrapped into [0, 360).
pub fn navamsha_from_longitude(sidereal_lon: f64) -> NavamshaInfo {
    let info = rashi_from_longitude(sidereal_lon);
    // Clamp guards the 29.999.. edge against rounding up to a tenth pada
    let pada_idx = ((info.degrees_in_rashi / PADA_SPAN_DEG).floor() as u8).min(8);
    let degrees_in_pada = info.degrees_in_rashi - pada_idx as f64 * PADA_SPAN_DEG;

    NavamshaInfo {
        rashi: navamsha_start(info.rashi).advance(pada_idx),
        pada: pada_idx + 1,
        natal_rashi: info.rashi,
        degrees_in_pada,
    }
}
