//! Whole-sign bhava (house) placement relative to the lagna.
//!
//! House 1 is always the lagna's own rashi; houses then follow increasing
//! rashi order, wrapping after Meena. Each house carries a fixed thematic
//! meaning keyed by its house number.

use crate::locale::Locale;
use crate::rashi::Rashi;

/// House number (1..=12) of `rashi` counted from `lagna`.
///
/// `house = ((rashi - lagna + 12) mod 12) + 1` on 1-based ordinals.
pub const fn house_of(lagna: Rashi, rashi: Rashi) -> u8 {
    ((rashi.number() + 12 - lagna.number()) % 12) + 1
}

/// Rashi occupying `house` (1-based) for the given lagna.
///
/// Returns None if house is outside 1..=12.
pub const fn rashi_in_house(lagna: Rashi, house: u8) -> Option<Rashi> {
    if house >= 1 && house <= 12 {
        Some(lagna.advance(house - 1))
    } else {
        None
    }
}

/// The 12 house rashis in lagna-first order.
pub fn bhava_rashis(lagna: Rashi) -> [Rashi; 12] {
    std::array::from_fn(|i| lagna.advance(i as u8))
}

const MEANINGS_EN: [&str; 12] = [
    "Nature, body, personality",
    "Wealth, family, speech",
    "Courage, siblings",
    "Home, mother, comfort",
    "Children, education",
    "Illness, debt, enemies",
    "Marriage, partner",
    "Longevity, hidden matters",
    "Dharma, fortune",
    "Career, business",
    "Income, friends",
    "Expenses, foreign lands",
];

const MEANINGS_SA: [&str; 12] = [
    "Tanu bhava",
    "Dhana bhava",
    "Sahaja bhava",
    "Sukha bhava",
    "Putra bhava",
    "Ari bhava",
    "Yuvati bhava",
    "Randhra bhava",
    "Dharma bhava",
    "Karma bhava",
    "Labha bhava",
    "Vyaya bhava",
];

const MEANINGS_NE: [&str; 12] = [
    "स्वभाव, शरीर, व्यक्तित्व",
    "धन, परिवार, वाणी",
    "साहस, भाइबहिनी",
    "घर, माता, सुख",
    "सन्तान, शिक्षा",
    "रोग, ऋण, शत्रु",
    "विवाह, जोडीदार",
    "आयु, गुप्त कुरा",
    "धर्म, भाग्य",
    "कर्म, व्यापार",
    "आय, मित्र",
    "खर्च, विदेश",
];

/// Thematic meaning of a house. Sanskrit yields the classical bhava name.
///
/// Returns None if house is outside 1..=12.
pub fn bhava_meaning(house: u8, locale: Locale) -> Option<&'static str> {
    if !(1..=12).contains(&house) {
        return None;
    }
    let table = match locale {
        Locale::English => &MEANINGS_EN,
        Locale::Sanskrit => &MEANINGS_SA,
        Locale::Nepali => &MEANINGS_NE,
    };
    Some(table[(house - 1) as usize])
}
