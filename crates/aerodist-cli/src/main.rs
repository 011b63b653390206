// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use aerodist_core::restrictions::{
    can_fly_between, is_domestic, DOMESTIC_CODE_PREFIX, DOMESTIC_COUNTRY_NAMES,
    RESTRICTED_COUNTRIES,
};
use aerodist_core::{find_nearest, AeroError, AirportDataset, Config, MapPayload, NearestAirports};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the airport dataset
    #[arg(short, long, env = "AERODIST_DATA")]
    data: Option<PathBuf>,

    /// Column delimiter of the dataset
    #[arg(long)]
    delimiter: Option<char>,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List airports, optionally filtered by code, name or city
    List { filter: Option<String> },
    /// Show details of one airport
    Show { code: String },
    /// Find the nearest airports reachable from CODE
    Nearest {
        code: String,
        /// Number of airports to return
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Write a map payload for the result to this file
        #[arg(long)]
        map: Option<PathBuf>,
        /// Write the map payload as GeoJSON
        #[arg(long, requires = "map")]
        geojson: bool,
    },
    /// Great-circle distance between two airports
    Distance { from: String, to: String },
    /// Print the flight restriction policy
    Restrictions,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn resolve_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(data) = &cli.data {
        config.dataset_path = Some(data.clone());
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    config
}

fn load_dataset(config: &Config) -> Result<AirportDataset, AeroError> {
    let path = config.require_dataset_path()?;
    let options = config.load_options()?;
    Ok(AirportDataset::from_path(path, &options)?)
}

fn print_table(result: &NearestAirports<'_>) {
    println!(
        "{:<6} {:<36} {:<20} {:<20} {:>15}",
        "Code", "Airport", "Country", "City", "Distance (km)"
    );
    for n in &result.nearby {
        println!(
            "{:<6} {:<36} {:<20} {:<20} {:>15.1}",
            n.airport.code,
            n.airport.name,
            n.airport.country_or_unknown(),
            n.airport.city,
            n.distance_km
        );
    }
}

fn print_restrictions() {
    println!("Domestic country names: {}", DOMESTIC_COUNTRY_NAMES.join(", "));
    println!(
        "Airports from a dataset without a country column count as domestic if their code starts with '{}'",
        DOMESTIC_CODE_PREFIX
    );
    println!("No flights between domestic airports and:");
    for country in RESTRICTED_COUNTRIES {
        println!("  {}", country);
    }
}

fn run(command: &Commands, config: &Config) -> Result<()> {
    // The restriction policy is static, so only the other commands load the dataset
    let dataset = || load_dataset(config).context("Could not load the airport dataset");

    match command {
        Commands::List { filter } => {
            let dataset = dataset()?;
            let airports = dataset.search(filter.as_deref().unwrap_or(""));
            for airport in &airports {
                println!("{}", airport.label());
            }
            log::info!("Listed {} of {} airports", airports.len(), dataset.len());
        }
        Commands::Show { code } => {
            let dataset = dataset()?;
            let airport = dataset
                .get(code)
                .ok_or_else(|| AeroError::TargetNotFound(code.clone()))?;
            println!("{}", airport.label());
            println!("City:     {}", airport.city);
            println!("Country:  {}", airport.country_or_unknown());
            println!("Position: {:.6}, {:.6}", airport.lat(), airport.lon());
            if is_domestic(airport) {
                println!("Note: only destinations permitted for domestic airports are shown.");
            }
        }
        Commands::Nearest {
            code,
            count,
            json,
            map,
            geojson,
        } => {
            let dataset = dataset()?;
            let n = count.unwrap_or(config.result_count);
            let result = find_nearest(&dataset, code, n)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_empty() {
                println!("No reachable airports found under the current flight restrictions.");
            } else {
                println!("Nearest reachable airports to {}:", result.target.label());
                print_table(&result);
            }

            if let Some(map_path) = map {
                let payload = MapPayload::from_result(&result);
                let content = if *geojson {
                    serde_json::to_string_pretty(&payload.to_geojson())?
                } else {
                    payload.to_json()?
                };
                std::fs::write(map_path, content)
                    .with_context(|| format!("Failed to write map to {}", map_path.display()))?;
                log::info!("Map payload written — path={}", map_path.display());
            }
        }
        Commands::Distance { from, to } => {
            let dataset = dataset()?;
            let a = dataset
                .get(from)
                .ok_or_else(|| AeroError::TargetNotFound(from.clone()))?;
            let b = dataset
                .get(to)
                .ok_or_else(|| AeroError::TargetNotFound(to.clone()))?;
            println!("{} -> {}: {:.1} km", a.code, b.code, a.distance_to(b));
            if !can_fly_between(a, b) {
                println!("Flights between these airports are not permitted.");
            }
        }
        Commands::Restrictions => print_restrictions(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli);
    run(&cli.command, &config)
}
