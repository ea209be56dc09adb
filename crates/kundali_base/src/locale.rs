//! Display locale for sign, planet and house names.

use serde::{Deserialize, Serialize};

/// Which name family to use when rendering chart labels.
///
/// The canonical identity of every sign and planet is its ordinal; a locale
/// only picks the projection shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Western names ("Aries", "Sun").
    #[default]
    English,
    /// Transliterated Sanskrit ("Mesha", "Surya").
    Sanskrit,
    /// Nepali (Devanagari) script ("मेष", "सूर्य").
    Nepali,
}

/// All locales, in declaration order.
pub const ALL_LOCALES: [Locale; 3] = [Locale::English, Locale::Sanskrit, Locale::Nepali];

impl Locale {
    /// Short lowercase code, matching the serde representation.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Sanskrit => "sanskrit",
            Self::Nepali => "nepali",
        }
    }

    /// Parse a locale code, case-insensitively. Accepts `en`/`sa`/`ne` too.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "sanskrit" | "sa" => Some(Self::Sanskrit),
            "nepali" | "ne" => Some(Self::Nepali),
            _ => None,
        }
    }
}
