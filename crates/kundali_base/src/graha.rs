//! Vedic planet (graha) enum, rashi lordship and planet-name recognition.
//!
//! The 9 grahas plus the Lagna (ascendant) pseudo-point make up a provider's
//! planet-position list. Each rashi has a fixed planetary lord.

use serde::Serialize;

use crate::locale::Locale;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Nepali (Devanagari) name of the graha.
    pub const fn nepali_name(self) -> &'static str {
        match self {
            Self::Surya => "सूर्य",
            Self::Chandra => "चन्द्र",
            Self::Mangal => "मंगल",
            Self::Buddh => "बुध",
            Self::Guru => "गुरु",
            Self::Shukra => "शुक्र",
            Self::Shani => "शनि",
            Self::Rahu => "राहु",
            Self::Ketu => "केतु",
        }
    }

    /// Name in the requested locale.
    pub const fn display_name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english_name(),
            Locale::Sanskrit => self.name(),
            Locale::Nepali => self.nepali_name(),
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Display name of the Lagna pseudo-point.
pub const fn lagna_display_name(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Ascendant",
        Locale::Sanskrit => "Lagna",
        Locale::Nepali => "लग्न",
    }
}

/// Whether a provider planet name denotes the ascendant pseudo-point.
pub fn is_lagna_name(name: &str) -> bool {
    let name = name.trim();
    name == "लग्न" || name.eq_ignore_ascii_case("Ascendant") || name.eq_ignore_ascii_case("Lagna")
}

/// Recognise a provider planet name in English, Sanskrit or Nepali.
///
/// Latin-script names match case-insensitively.
pub fn graha_from_name(name: &str) -> Option<Graha> {
    let name = name.trim();
    ALL_GRAHAS.into_iter().find(|g| {
        name.eq_ignore_ascii_case(g.english_name())
            || name.eq_ignore_ascii_case(g.name())
            || name == g.nepali_name()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::ALL_LOCALES;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn lords_of_all_rashis() {
        let expected = [
            Graha::Mangal,
            Graha::Shukra,
            Graha::Buddh,
            Graha::Chandra,
            Graha::Surya,
            Graha::Buddh,
            Graha::Shukra,
            Graha::Mangal,
            Graha::Guru,
            Graha::Shani,
            Graha::Shani,
            Graha::Guru,
        ];
        for (r, g) in ALL_RASHIS.iter().zip(expected) {
            assert_eq!(rashi_lord(*r), g, "lord of {}", r.name());
        }
    }

    #[test]
    fn nodes_rule_no_rashi() {
        for r in ALL_RASHIS {
            let lord = rashi_lord(r);
            assert!(lord != Graha::Rahu && lord != Graha::Ketu);
        }
    }

    #[test]
    fn names_recognised_in_every_locale() {
        for g in ALL_GRAHAS {
            for l in ALL_LOCALES {
                assert_eq!(graha_from_name(g.display_name(l)), Some(g));
            }
        }
    }

    #[test]
    fn name_recognition_is_case_insensitive() {
        assert_eq!(graha_from_name("jupiter"), Some(Graha::Guru));
        assert_eq!(graha_from_name(" MOON "), Some(Graha::Chandra));
        assert_eq!(graha_from_name("Uranus"), None);
    }

    #[test]
    fn lagna_names() {
        assert!(is_lagna_name("Ascendant"));
        assert!(is_lagna_name("lagna"));
        assert!(is_lagna_name("लग्न"));
        assert!(!is_lagna_name("Sun"));
        for l in ALL_LOCALES {
            assert!(is_lagna_name(lagna_display_name(l)));
        }
    }
}
