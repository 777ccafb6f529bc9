//! `stay` — command-line collaborator for the Schengen 90/180 engine.
//!
//! Owns everything the engine deliberately does not: the persisted travel
//! log (a JSON file), the "now" anchor, and presentation. Every command
//! loads the log, calls the pure engine functions, and renders the result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use stay_engine::{
    country_name, days_used_in_window, has_valid_visa, next_reentry_date, roster_progress,
    safe_until, visited_countries, year_overview, DayStatus, Forecast, Trip, TravelLog, Visa,
    STAY_CAP,
};

#[derive(Parser)]
#[command(name = "stay", version, about = "Schengen 90/180 rolling-window calculator")]
struct Cli {
    /// Path to the JSON travel log.
    #[arg(long, global = true, default_value = "travel.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show window usage, visa status, and both forecasts for a date.
    Status {
        /// Reference date, YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Render a per-day legality strip for a calendar year.
    Overview {
        /// Year to render (defaults to the current year).
        #[arg(long)]
        year: Option<i32>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List visited Schengen countries and roster progress.
    Countries {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate and record a trip.
    AddTrip {
        name: String,
        /// First day of presence, YYYY-MM-DD.
        start: String,
        /// Last day of presence, YYYY-MM-DD.
        end: String,
        /// Country visited, ISO 3166-1 alpha-3 (repeatable).
        #[arg(long = "country")]
        countries: Vec<String>,
    },
    /// Validate and record a visa.
    AddVisa {
        name: String,
        /// First valid day, YYYY-MM-DD.
        start: String,
        /// Last valid day, YYYY-MM-DD.
        end: String,
    },
}

#[derive(Serialize)]
struct StatusReport {
    date: NaiveDate,
    days_used: u32,
    cap: u32,
    visa_valid: bool,
    can_enter_today: bool,
    safe_until: Forecast,
    reentry: Forecast,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Status { date, json } => {
            let log = load_log(&cli.data)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            status(date, &log, json)
        }
        Command::Overview { year, json } => {
            let log = load_log(&cli.data)?;
            let year = year.unwrap_or_else(|| Local::now().year());
            overview(year, &log, json)
        }
        Command::Countries { json } => {
            let log = load_log(&cli.data)?;
            countries(&log, json)
        }
        Command::AddTrip {
            name,
            start,
            end,
            countries,
        } => {
            let mut log = load_log(&cli.data)?;
            let trip = Trip::new(&name, countries, &start, &end)?;
            log.trips.push(trip);
            save_log(&cli.data, &log)?;
            println!("Recorded trip \"{name}\" ({start} to {end})");
            Ok(())
        }
        Command::AddVisa { name, start, end } => {
            let mut log = load_log(&cli.data)?;
            let visa = Visa::new(&name, &start, &end)?;
            log.visas.push(visa);
            save_log(&cli.data, &log)?;
            println!("Recorded visa \"{name}\" ({start} to {end})");
            Ok(())
        }
    }
}

fn status(date: NaiveDate, log: &TravelLog, json: bool) -> Result<()> {
    let days_used = days_used_in_window(date, &log.trips);
    let report = StatusReport {
        date,
        days_used,
        cap: STAY_CAP,
        visa_valid: has_valid_visa(date, &log.visas),
        can_enter_today: days_used < STAY_CAP,
        safe_until: safe_until(date, &log.trips),
        reentry: next_reentry_date(date, &log.trips),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Days used: {} / {} (window ending {})",
        report.days_used, report.cap, report.date
    );
    println!(
        "Visa: {}",
        if report.visa_valid { "valid" } else { "none" }
    );

    let safe_date = report.safe_until.date();
    if safe_date < date {
        println!("Safe until: not safe to start on {date}");
    } else if report.safe_until.is_definitive() {
        println!("Safe until: {safe_date} (staying continuously from {date})");
    } else {
        println!("Safe until: at least {safe_date} (search horizon reached)");
    }

    if report.can_enter_today {
        println!("Re-entry: can enter today");
    } else if report.reentry.is_definitive() {
        println!("Re-entry: wait until {}", report.reentry.date());
    } else {
        println!(
            "Re-entry: none found before {} (search horizon reached)",
            report.reentry.date()
        );
    }
    Ok(())
}

fn overview(year: i32, log: &TravelLog, json: bool) -> Result<()> {
    let days = year_overview(year, &log.trips, &log.visas);

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    println!("Yearly overview {year}  (.)clear (+)near limit (#)stay (!)overstay");
    for month in 1..=12u32 {
        let label = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%b").to_string())
            .unwrap_or_default();
        let strip: String = days
            .iter()
            .filter(|a| a.date.month() == month)
            .map(|a| match a.status {
                DayStatus::Clear => '.',
                DayStatus::NearLimit => '+',
                DayStatus::Stay => '#',
                DayStatus::Overstay => '!',
            })
            .collect();
        println!("{label} {strip}");
    }
    Ok(())
}

fn countries(log: &TravelLog, json: bool) -> Result<()> {
    let visited = visited_countries(&log.trips);
    let progress = roster_progress(&log.trips);

    if json {
        #[derive(Serialize)]
        struct CountryReport<'a> {
            visited: Vec<&'a str>,
            progress_percent: u32,
        }
        let report = CountryReport {
            visited: visited.iter().copied().collect(),
            progress_percent: progress,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if visited.is_empty() {
        println!("No Schengen countries visited yet");
    } else {
        for code in &visited {
            println!("{code}  {}", country_name(code).unwrap_or("?"));
        }
    }
    println!("Progress: {progress}% of the Schengen roster");
    Ok(())
}

fn load_log(path: &Path) -> Result<TravelLog> {
    if !path.exists() {
        return Ok(TravelLog::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading travel log {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing travel log {}", path.display()))
}

fn save_log(path: &Path, log: &TravelLog) -> Result<()> {
    let raw = serde_json::to_string_pretty(log)?;
    fs::write(path, raw).with_context(|| format!("writing travel log {}", path.display()))
}
