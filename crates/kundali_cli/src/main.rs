use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kundali_base::{
    ChartInput, InputError, Locale, SignLike, approximate_shadbala, chart_from_input, house_of,
    navamsha_from_longitude, render_house_table, render_prompt_summary, render_shadbala_table,
    resolve_rashi, try_resolve_rashi,
};
use kundali_config::{ConfigError, OutputFormat, load_config_or_default};
use thiserror::Error;
use tracing::Level;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic natal chart CLI")]
struct Cli {
    /// More diagnostics (debug level)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a sign ordinal or alias to its rashi
    Resolve {
        /// Ordinal (1-12) or English/Sanskrit/Nepali name
        sign: String,
        /// Fail instead of falling back to Mesha
        #[arg(long)]
        strict: bool,
    },
    /// House of a rashi counted from the lagna
    House {
        /// Lagna sign (ordinal or name)
        #[arg(long)]
        lagna: String,
        /// Planet's sign (ordinal or name)
        #[arg(long)]
        rashi: String,
    },
    /// Navamsha sign and pada from sidereal longitude
    Navamsha {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Approximate shadbala for a longitude and house
    Shadbala {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// House number (1-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        house: u8,
        /// Planet label for the output row
        #[arg(long, default_value = "Planet")]
        planet: String,
    },
    /// Assemble a chart from a provider JSON document
    Chart {
        /// Path to the JSON document, or - for stdin
        input: PathBuf,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: table, json or prompt (overrides config)
        #[arg(long)]
        format: Option<String>,
        /// Locale: english, sanskrit or nepali (overrides config)
        #[arg(long)]
        locale: Option<String>,
        /// Leave the ascendant out of the house occupants
        #[arg(long)]
        hide_lagna: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot encode chart: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

fn parse_sign(s: &str) -> SignLike {
    match s.trim().parse::<i64>() {
        Ok(n) => SignLike::Ordinal(n),
        Err(_) => SignLike::Name(s.to_owned()),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let read = || -> std::io::Result<String> {
        if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        } else {
            std::fs::read_to_string(path)
        }
    };
    read().map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Resolve { sign, strict } => {
            let input = parse_sign(&sign);
            let rashi = if strict {
                try_resolve_rashi(Some(&input)).map_err(|e| CliError::Usage(e.to_string()))?
            } else {
                resolve_rashi(Some(&input))
            };
            println!(
                "{} ({}, {}) - ordinal {}",
                rashi.name(),
                rashi.western_name(),
                rashi.nepali_name(),
                rashi.number()
            );
        }

        Commands::House { lagna, rashi } => {
            let lagna = resolve_rashi(Some(&parse_sign(&lagna)));
            let rashi = resolve_rashi(Some(&parse_sign(&rashi)));
            println!(
                "{} from {} lagna: house {}",
                rashi.name(),
                lagna.name(),
                house_of(lagna, rashi)
            );
        }

        Commands::Navamsha { lon } => {
            let info = navamsha_from_longitude(lon);
            println!(
                "{} ({}) - Pada {} (natal {}, {:.4} deg in pada)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.pada,
                info.natal_rashi.name(),
                info.degrees_in_pada
            );
        }

        Commands::Shadbala { lon, house, planet } => {
            let s = approximate_shadbala(planet, lon, house);
            println!("Shadbala for {} (approximate, illustrative only)", s.planet);
            println!("  Sthana:     {:.1}", s.sthana);
            println!("  Dig:        {:.1}", s.dig);
            println!("  Kala:       {:.1}", s.kala);
            println!("  Cheshta:    {:.1}", s.cheshta);
            println!("  Naisargika: {:.1}", s.naisargika);
            println!("  Drik:       {:.1}", s.drik);
            println!("  Total:      {:.1}", s.total);
        }

        Commands::Chart {
            input,
            config,
            format,
            locale,
            hide_lagna,
        } => {
            let mut cfg = load_config_or_default(config.as_deref())?;
            if let Some(code) = locale {
                cfg.chart.locale = Locale::from_code(&code)
                    .ok_or_else(|| CliError::Usage(format!("unknown locale: {code}")))?;
            }
            if let Some(code) = format {
                cfg.output.format = OutputFormat::from_code(&code)
                    .ok_or_else(|| CliError::Usage(format!("unknown format: {code}")))?;
            }
            if hide_lagna {
                cfg.chart.include_lagna_in_houses = false;
            }

            let doc = ChartInput::from_json(&read_input(&input)?)?;
            let chart = chart_from_input(&doc, &cfg.chart);

            match cfg.output.format {
                OutputFormat::Table => {
                    println!("{}", render_house_table(&chart));
                    println!();
                    println!("{}", render_shadbala_table(&chart));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                OutputFormat::Prompt => println!("{}", render_prompt_summary(&chart)),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
