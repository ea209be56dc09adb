//! Rashi (zodiac sign) identity, names and longitude lookup.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. The canonical identity of a sign is
//! its 1-based ordinal (Mesha = 1 .. Meena = 12); names are a per-locale
//! projection of that ordinal.

use serde::Serialize;

use crate::locale::Locale;
use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Modal grouping of the signs, which decides where a navamsha cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RashiModality {
    /// Chara (movable): Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira (fixed): Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dwiswabhava (dual): Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Nepali (Devanagari) name of the rashi.
    pub const fn nepali_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृषभ",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्कट",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुम्भ",
            Self::Meena => "मीन",
        }
    }

    /// Name in the requested locale.
    pub const fn display_name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.western_name(),
            Locale::Sanskrit => self.name(),
            Locale::Nepali => self.nepali_name(),
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based ordinal (Mesha=1 .. Meena=12), the canonical sign identity.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 0-based index. Returns None if index >= 12.
    pub const fn from_index(index: u8) -> Option<Rashi> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// Rashi from a 1-based ordinal. Returns None outside 1..=12.
    pub const fn from_number(number: u8) -> Option<Rashi> {
        if number >= 1 && number <= 12 {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// The rashi `steps` signs ahead, wrapping after Meena.
    pub const fn advance(self, steps: u8) -> Rashi {
        ALL_RASHIS[((self.index() as u16 + steps as u16) % 12) as usize]
    }

    /// Movable / fixed / dual classification.
    pub const fn modality(self) -> RashiModality {
        match self.index() % 3 {
            0 => RashiModality::Movable,
            1 => RashiModality::Fixed,
            _ => RashiModality::Dual,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Rashi position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
/// Out-of-range input is wrapped into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
            assert!(!r.nepali_name().is_empty());
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(1), Some(Rashi::Mesha));
        assert_eq!(Rashi::from_number(12), Some(Rashi::Meena));
        assert_eq!(Rashi::from_number(13), None);
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(Rashi::Meena.advance(1), Rashi::Mesha);
        assert_eq!(Rashi::Vrishabha.advance(8), Rashi::Makara);
        assert_eq!(Rashi::Simha.advance(12), Rashi::Simha);
    }

    #[test]
    fn modality_groups() {
        for r in [Rashi::Mesha, Rashi::Karka, Rashi::Tula, Rashi::Makara] {
            assert_eq!(r.modality(), RashiModality::Movable, "{}", r.name());
        }
        for r in [Rashi::Vrishabha, Rashi::Simha, Rashi::Vrischika, Rashi::Kumbha] {
            assert_eq!(r.modality(), RashiModality::Fixed, "{}", r.name());
        }
        for r in [Rashi::Mithuna, Rashi::Kanya, Rashi::Dhanu, Rashi::Meena] {
            assert_eq!(r.modality(), RashiModality::Dual, "{}", r.name());
        }
    }

    #[test]
    fn display_name_per_locale() {
        assert_eq!(Rashi::Karka.display_name(Locale::English), "Cancer");
        assert_eq!(Rashi::Karka.display_name(Locale::Sanskrit), "Karka");
        assert_eq!(Rashi::Karka.display_name(Locale::Nepali), "कर्कट");
    }

    #[test]
    fn rashi_boundary_30() {
        let info = rashi_from_longitude(30.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert_eq!(info.rashi_index, 1);
        assert!(info.degrees_in_rashi.abs() < 1e-10);
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }
}
