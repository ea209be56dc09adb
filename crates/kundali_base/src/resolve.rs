//! Sign resolution: turn any provider sign identifier into a [`Rashi`].
//!
//! Providers send signs as 1-based ordinals, English names, transliterated
//! Sanskrit names, Nepali-script names, or nested `{ "name": .. }` /
//! `{ "id": .., "name": .. }` objects. All of these resolve through one
//! immutable alias table built on first use.
//!
//! [`resolve_rashi`] is total: unknown input yields Mesha and a `tracing`
//! warning. [`try_resolve_rashi`] exposes the failure reason instead.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::error::RashiError;
use crate::locale::Locale;
use crate::rashi::Rashi;

/// Rashi used whenever an identifier cannot be resolved.
pub const DEFAULT_RASHI: Rashi = Rashi::Mesha;

/// Any sign representation a provider may send.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignLike {
    /// 1-based ordinal (1 = Mesha).
    Ordinal(i64),
    /// A JSON float. Whole values (`3.0`) count as ordinals.
    Number(f64),
    /// An alias in any supported script.
    Name(String),
    /// A nested object carrying a `name` and/or numeric `id`.
    Object(SignObject),
    /// Any other JSON value (bool, null, ...).
    Unrecognized(IgnoredAny),
}

/// Object form of a sign identifier, e.g. `{ "id": 5, "name": "Simha" }`.
///
/// `id` is read leniently: `9`, `9.0` and `"9"` all give 9, and any other
/// value is dropped so that `name` still decides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignObject {
    #[serde(default)]
    pub name: Option<Box<SignLike>>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientId {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn whole_number(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<LenientId>::deserialize(d)? {
        Some(LenientId::Int(n)) => Some(n),
        Some(LenientId::Float(v)) => whole_number(v),
        Some(LenientId::Text(s)) => s.trim().parse().ok(),
        Some(LenientId::Other(_)) | None => None,
    })
}

impl From<Rashi> for SignLike {
    fn from(r: Rashi) -> Self {
        Self::Ordinal(r.number() as i64)
    }
}

impl From<i64> for SignLike {
    fn from(n: i64) -> Self {
        Self::Ordinal(n)
    }
}

impl From<i32> for SignLike {
    fn from(n: i32) -> Self {
        Self::Ordinal(n as i64)
    }
}

impl From<u8> for SignLike {
    fn from(n: u8) -> Self {
        Self::Ordinal(n as i64)
    }
}

impl From<&str> for SignLike {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

impl From<String> for SignLike {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl SignLike {
    /// Object form with only a name.
    pub fn named(name: impl Into<SignLike>) -> Self {
        Self::Object(SignObject {
            name: Some(Box::new(name.into())),
            id: None,
        })
    }
}

/// One entry of the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignAlias {
    pub alias: &'static str,
    pub rashi: Rashi,
    /// Script family the alias belongs to.
    pub family: Locale,
}

const fn alias(alias: &'static str, rashi: Rashi, family: Locale) -> SignAlias {
    SignAlias {
        alias,
        rashi,
        family,
    }
}

/// Every recognised sign alias.
///
/// "Karka" sits next to the provider spelling "Karkata" so that the
/// Sanskrit names this crate prints also resolve.
pub const SIGN_ALIASES: [SignAlias; 37] = [
    alias("Aries", Rashi::Mesha, Locale::English),
    alias("Taurus", Rashi::Vrishabha, Locale::English),
    alias("Gemini", Rashi::Mithuna, Locale::English),
    alias("Cancer", Rashi::Karka, Locale::English),
    alias("Leo", Rashi::Simha, Locale::English),
    alias("Virgo", Rashi::Kanya, Locale::English),
    alias("Libra", Rashi::Tula, Locale::English),
    alias("Scorpio", Rashi::Vrischika, Locale::English),
    alias("Sagittarius", Rashi::Dhanu, Locale::English),
    alias("Capricorn", Rashi::Makara, Locale::English),
    alias("Aquarius", Rashi::Kumbha, Locale::English),
    alias("Pisces", Rashi::Meena, Locale::English),
    alias("Mesha", Rashi::Mesha, Locale::Sanskrit),
    alias("Vrishabha", Rashi::Vrishabha, Locale::Sanskrit),
    alias("Mithuna", Rashi::Mithuna, Locale::Sanskrit),
    alias("Karkata", Rashi::Karka, Locale::Sanskrit),
    alias("Karka", Rashi::Karka, Locale::Sanskrit),
    alias("Simha", Rashi::Simha, Locale::Sanskrit),
    alias("Kanya", Rashi::Kanya, Locale::Sanskrit),
    alias("Tula", Rashi::Tula, Locale::Sanskrit),
    alias("Vrischika", Rashi::Vrischika, Locale::Sanskrit),
    alias("Dhanu", Rashi::Dhanu, Locale::Sanskrit),
    alias("Makara", Rashi::Makara, Locale::Sanskrit),
    alias("Kumbha", Rashi::Kumbha, Locale::Sanskrit),
    alias("Meena", Rashi::Meena, Locale::Sanskrit),
    alias("मेष", Rashi::Mesha, Locale::Nepali),
    alias("वृषभ", Rashi::Vrishabha, Locale::Nepali),
    alias("मिथुन", Rashi::Mithuna, Locale::Nepali),
    alias("कर्कट", Rashi::Karka, Locale::Nepali),
    alias("सिंह", Rashi::Simha, Locale::Nepali),
    alias("कन्या", Rashi::Kanya, Locale::Nepali),
    alias("तुला", Rashi::Tula, Locale::Nepali),
    alias("वृश्चिक", Rashi::Vrischika, Locale::Nepali),
    alias("धनु", Rashi::Dhanu, Locale::Nepali),
    alias("मकर", Rashi::Makara, Locale::Nepali),
    alias("कुम्भ", Rashi::Kumbha, Locale::Nepali),
    alias("मीन", Rashi::Meena, Locale::Nepali),
];

static ALIAS_INDEX: LazyLock<HashMap<&'static str, Rashi>> =
    LazyLock::new(|| SIGN_ALIASES.iter().map(|a| (a.alias, a.rashi)).collect());

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Resolve a sign alias string.
///
/// Whitespace is trimmed and the exact alias is tried first. Latin-script
/// input is then retried capitalized ("aRIES" -> "Aries"); Devanagari input
/// is only ever matched verbatim.
pub fn rashi_from_alias(s: &str) -> Result<Rashi, RashiError> {
    let trimmed = s.trim();
    if let Some(&r) = ALIAS_INDEX.get(trimmed) {
        return Ok(r);
    }
    if trimmed.is_ascii() {
        if let Some(&r) = ALIAS_INDEX.get(capitalize(trimmed).as_str()) {
            return Ok(r);
        }
    }
    Err(RashiError::UnknownAlias(trimmed.to_owned()))
}

/// Resolve a 1-based ordinal.
pub fn rashi_from_ordinal(n: i64) -> Result<Rashi, RashiError> {
    u8::try_from(n)
        .ok()
        .and_then(Rashi::from_number)
        .ok_or(RashiError::OrdinalOutOfRange(n))
}

/// Resolve a sign identifier, reporting why it failed.
pub fn try_resolve_rashi(input: Option<&SignLike>) -> Result<Rashi, RashiError> {
    match input.ok_or(RashiError::Missing)? {
        SignLike::Ordinal(n) => rashi_from_ordinal(*n),
        SignLike::Number(v) => whole_number(*v)
            .ok_or(RashiError::Unsupported)
            .and_then(rashi_from_ordinal),
        SignLike::Name(s) => rashi_from_alias(s),
        SignLike::Object(obj) => match (&obj.name, obj.id) {
            (Some(name), _) => try_resolve_rashi(Some(name)),
            (None, Some(id)) => rashi_from_ordinal(id),
            (None, None) => Err(RashiError::Unsupported),
        },
        SignLike::Unrecognized(_) => Err(RashiError::Unsupported),
    }
}

/// Resolve a sign identifier, never failing.
///
/// Anything unresolvable yields [`DEFAULT_RASHI`] and a warning on the
/// `kundali::rashi` target.
pub fn resolve_rashi(input: Option<&SignLike>) -> Rashi {
    match try_resolve_rashi(input) {
        Ok(r) => r,
        Err(err) => {
            tracing::warn!(
                target: "kundali::rashi",
                error = %err,
                fallback = DEFAULT_RASHI.name(),
                "unresolvable sign identifier"
            );
            DEFAULT_RASHI
        }
    }
}
