//! Vedic natal chart derivation from provider planet positions.
//!
//! This crate provides:
//! - Sign resolution from ordinals and English, Sanskrit or Nepali aliases
//! - Whole-sign house placement relative to the lagna
//! - Navamsha (D9) sign and pada
//! - An approximate, illustrative six-fold strength (shadbala) score
//! - Chart assembly into a 12-row house table, placements and strengths
//!
//! Every chart operation is total: malformed provider data degrades to
//! defaults and a `tracing` warning, never to an error.

pub mod bhava;
pub mod chart;
pub mod error;
pub mod graha;
pub mod input;
pub mod locale;
pub mod navamsha;
pub mod rashi;
pub mod render;
pub mod resolve;
pub mod shadbala;
pub mod util;

#[cfg(test)]
mod test_log;

pub use bhava::{bhava_meaning, bhava_rashis, house_of, rashi_in_house};
pub use chart::{
    Chart, ChartConfig, ChartRow, PlanetPlacement, assemble_chart, assemble_chart_from_sign,
    chart_from_input, input_lagna, place_planet, record_rashi, shadbala_for,
};
pub use error::{InputError, RashiError};
pub use graha::{
    ALL_GRAHAS, Graha, graha_from_name, is_lagna_name, lagna_display_name, rashi_lord,
};
pub use input::{ChartInput, PlanetRecord};
pub use locale::{ALL_LOCALES, Locale};
pub use navamsha::{NavamshaInfo, PADA_SPAN_DEG, navamsha_from_longitude, navamsha_start};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, RashiModality, rashi_from_longitude};
pub use render::{render_house_table, render_prompt_summary, render_shadbala_table};
pub use resolve::{
    DEFAULT_RASHI, SIGN_ALIASES, SignAlias, SignLike, SignObject, rashi_from_alias,
    rashi_from_ordinal, resolve_rashi, try_resolve_rashi,
};
pub use shadbala::{NAISARGIKA_BALA, ShadbalaScore, approximate_shadbala};
pub use util::{normalize_360, round1, sanitize_longitude};
