//! Plain-text renderings of an assembled chart.
//!
//! Used for terminal output and as the chart block of language-model
//! prompts. Labels come from the chart's own locale.

use crate::chart::Chart;
use crate::locale::Locale;

const EMPTY_HOUSE: &str = "—";

fn house_headers(locale: Locale) -> [&'static str; 5] {
    match locale {
        Locale::English => ["House", "Rashi", "Lord", "Planets", "Meaning"],
        Locale::Sanskrit => ["Bhava", "Rashi", "Adhipati", "Grahas", "Karakatva"],
        Locale::Nepali => ["घर", "राशी", "मालिक ग्रह", "ग्रहहरू", "अर्थ"],
    }
}

fn lagna_marker(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "(ascendant)",
        Locale::Sanskrit => "(lagna)",
        Locale::Nepali => "(लग्न)",
    }
}

/// House table, one line per house, house 1 marked as the lagna.
///
/// Headers and names follow `chart.locale`.
pub fn render_house_table(chart: &Chart) -> String {
    let mut lines = vec![house_headers(chart.locale).join(" | ")];
    for row in &chart.rows {
        let house = if row.house == 1 {
            format!("{} {}", row.house, lagna_marker(chart.locale))
        } else {
            row.house.to_string()
        };
        let occupants = if row.occupants.is_empty() {
            EMPTY_HOUSE.to_owned()
        } else {
            row.occupants.join(", ")
        };
        lines.push(format!(
            "{house} | {} ({}) | {} | {occupants} | {}",
            row.rashi_name, row.rashi_number, row.lord_name, row.meaning
        ));
    }
    lines.join("\n")
}

/// Strength table. The scores are approximate and the header says so.
pub fn render_shadbala_table(chart: &Chart) -> String {
    let mut lines = vec![
        "Shadbala (approximate, illustrative only)".to_owned(),
        "Planet | Sthana | Dig | Kala | Cheshta | Naisargika | Drik | Total".to_owned(),
    ];
    for s in &chart.shadbala {
        lines.push(format!(
            "{} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1}",
            s.planet, s.sthana, s.dig, s.kala, s.cheshta, s.naisargika, s.drik, s.total
        ));
    }
    lines.join("\n")
}

/// Chart summary block for prompt construction.
pub fn render_prompt_summary(chart: &Chart) -> String {
    let mut lines = vec![
        format!("Ascendant: {} ({})", chart.lagna_name, chart.lagna.number()),
        format!("Moon sign: {}", chart.moon_name.unwrap_or("Unknown")),
        "Planet positions:".to_owned(),
    ];
    let planets: Vec<_> = chart.placements.iter().filter(|p| !p.is_lagna).collect();
    if planets.is_empty() {
        lines.push("- Not available".to_owned());
    }
    for p in planets {
        lines.push(format!(
            "- {} in {} (House {}), navamsha {} pada {}",
            p.name,
            p.rashi.display_name(chart.locale),
            p.house,
            p.navamsha.rashi.display_name(chart.locale),
            p.navamsha.pada
        ));
    }
    lines.join("\n")
}
