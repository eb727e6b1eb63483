use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use saju_calendar::{LunarDate, LunarTable, terms_of_year, to_lunar, to_solar};
use saju_engine::{BirthRequest, Gender, SajuConfig, SajuEngine, compute_pillars};
use saju_time::{BirthMoment, parse_date, parse_ymd};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar chart CLI")]
struct Cli {
    /// TOML engine config
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart as JSON
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (HH:MM); omit when unknown
        #[arg(long)]
        time: Option<String>,
        /// M or F
        #[arg(long)]
        gender: Gender,
        /// Read the date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// Lunar date is in the intercalary month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Birth region, used with true_solar_time
        #[arg(long)]
        region: Option<String>,
        /// Clock offset at birth in minutes east of UTC (e.g. 510 for 1954–1961)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
        /// Year for annual and monthly luck (default: current year)
        #[arg(long)]
        reference_year: Option<i32>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Lunar date to solar date
    ToSolar {
        /// Lunar date (YYYY-MM-DD)
        date: String,
        /// Intercalary month
        #[arg(long)]
        leap: bool,
    },
    /// Solar date to lunar date
    ToLunar {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Year, month and day gapja of a solar date
    Gapja {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// The 24 solar terms of a year in local time
    Terms {
        year: i32,
    },
}

fn load_config(path: Option<&Path>) -> Result<SajuConfig> {
    let Some(path) = path else {
        return Ok(SajuConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SajuConfig::from_toml_str(&text).with_context(|| format!("loading config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "config loaded");
    let table = LunarTable::embedded();

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            lunar,
            leap,
            region,
            utc_offset,
            reference_year,
            pretty,
        } => {
            let engine = SajuEngine::with_table(table, config)?;
            let mut request = if lunar {
                BirthRequest::lunar(&date, time.as_deref(), gender, leap)
            } else {
                BirthRequest::solar(&date, time.as_deref(), gender)
            };
            if let Some(region) = region.as_deref() {
                request = request.with_region(region);
            }
            if let Some(minutes) = utc_offset {
                request = request.with_utc_offset(minutes);
            }
            let year = reference_year.unwrap_or_else(|| chrono::Local::now().year());
            let result = engine.compute(&request, year)?;
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }

        Commands::ToSolar { date, leap } => {
            let (y, m, d) = parse_ymd(&date)?;
            let solar = to_solar(&table, LunarDate::new(y, m, d, leap))?;
            println!("{solar}");
        }

        Commands::ToLunar { date } => {
            let lunar = to_lunar(&table, parse_date(&date)?)?;
            println!("{lunar}");
        }

        Commands::Gapja { date } => {
            let date = parse_date(&date)?;
            let moment = BirthMoment::new(date, None, config.utc_offset_minutes);
            let chart = compute_pillars(&moment, 0, config.zi_hour_mode)?;
            println!(
                "year {} ({})  month {} ({})  day {} ({})",
                chart.year(),
                chart.year().korean(),
                chart.month(),
                chart.month().korean(),
                chart.day(),
                chart.day().korean(),
            );
        }

        Commands::Terms { year } => {
            if !(1900..=2100).contains(&year) {
                bail!("year {year} outside 1900..=2100");
            }
            for event in terms_of_year(year)? {
                let local = event
                    .local_datetime(config.utc_offset_minutes)
                    .context("term instant out of range")?;
                println!(
                    "{} {} {:>3}°  {}",
                    event.term.korean(),
                    event.term.hanja(),
                    event.term.longitude(),
                    local.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }
    Ok(())
}
