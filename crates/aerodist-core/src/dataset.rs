// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use crate::airport::Airport;
use crate::geo::Position;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("delimiter {0:?} cannot separate fields")]
    InvalidDelimiter(char),
    #[error("no usable airport rows")]
    Empty,
    #[error("no dataset path configured")]
    NoPathConfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b'|' }
    }
}

impl LoadOptions {
    pub fn with_delimiter(delimiter: char) -> Result<Self, DatasetError> {
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
            return Err(DatasetError::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter as char
    }
}

// Accepted header spellings per field, first match wins.
const CODE_HEADERS: &[&str] = &["iata_code", "code", "iata"];
const NAME_HEADERS: &[&str] = &["name_eng", "name"];
const CITY_HEADERS: &[&str] = &["city_eng", "city"];
const COUNTRY_HEADERS: &[&str] = &["country_rus", "country"];
const LAT_HEADERS: &[&str] = &["latitude", "lat"];
const LON_HEADERS: &[&str] = &["longitude", "lon", "lng"];

struct ColumnMap {
    code: usize,
    name: usize,
    city: usize,
    country: Option<usize>,
    lat: usize,
    lon: usize,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias))
        };
        let require = |aliases: &'static [&'static str]| {
            find(aliases).ok_or(DatasetError::MissingColumn(aliases[0]))
        };

        Ok(Self {
            code: require(CODE_HEADERS)?,
            name: require(NAME_HEADERS)?,
            city: require(CITY_HEADERS)?,
            country: find(COUNTRY_HEADERS),
            lat: require(LAT_HEADERS)?,
            lon: require(LON_HEADERS)?,
        })
    }
}

/// Read-only airport table, kept in file order and indexed by code.
#[derive(Debug, Clone, Default)]
pub struct AirportDataset {
    airports: Vec<Airport>,
    index: HashMap<String, usize>,
}

impl AirportDataset {
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        info!("Loading airport dataset — path={}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, options)
    }

    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = ColumnMap::resolve(rdr.headers()?)?;
        let mut dataset = AirportDataset::default();
        let mut skipped = 0usize;

        for (row, result) in rdr.records().enumerate() {
            let record = result?;
            // +2: header line plus 1-based numbering
            let line = row + 2;
            let field = |idx: usize| record.get(idx).unwrap_or("");

            let code = field(columns.code);
            if code.is_empty() {
                warn!("Skipping row without airport code — line={}", line);
                skipped += 1;
                continue;
            }

            let position = match (
                field(columns.lat).parse::<f64>(),
                field(columns.lon).parse::<f64>(),
            ) {
                (Ok(lat), Ok(lon)) => Position::new(lat, lon),
                _ => {
                    warn!(
                        "Skipping airport with unparsable coordinates — code={} line={}",
                        code, line
                    );
                    skipped += 1;
                    continue;
                }
            };
            if !position.is_valid() {
                warn!(
                    "Skipping airport with out-of-range coordinates — code={} lat={} lon={}",
                    code, position.lat, position.lon
                );
                skipped += 1;
                continue;
            }

            if dataset.index.contains_key(code) {
                warn!("Skipping duplicate airport code — code={} line={}", code, line);
                skipped += 1;
                continue;
            }

            // A present column keeps blank cells as `Some("")`; only a missing
            // column leaves the country unset.
            let country = columns.country.map(|idx| field(idx).to_string());

            dataset.push(Airport {
                code: code.to_string(),
                name: field(columns.name).to_string(),
                city: field(columns.city).to_string(),
                country,
                position,
            });
        }

        if dataset.is_empty() {
            return Err(DatasetError::Empty);
        }

        debug!(
            "Airport dataset loaded — airports={} skipped={} country_column={}",
            dataset.len(),
            skipped,
            columns.country.is_some()
        );
        Ok(dataset)
    }

    /// Builds a dataset from records already in memory. Records with invalid
    /// coordinates and later duplicates of a code are dropped.
    pub fn from_airports<I: IntoIterator<Item = Airport>>(airports: I) -> Self {
        let mut dataset = AirportDataset::default();
        for airport in airports {
            if !airport.position.is_valid() {
                warn!(
                    "Dropping airport with out-of-range coordinates — code={} lat={} lon={}",
                    airport.code,
                    airport.lat(),
                    airport.lon()
                );
                continue;
            }
            if dataset.index.contains_key(&airport.code) {
                warn!("Dropping duplicate airport code — code={}", airport.code);
                continue;
            }
            dataset.push(airport);
        }
        dataset
    }

    fn push(&mut self, airport: Airport) {
        self.index.insert(airport.code.clone(), self.airports.len());
        self.airports.push(airport);
    }

    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.index.get(code.trim()).map(|&i| &self.airports[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code.trim())
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// `(code, "CODE - name")` pairs for a selection control, in dataset order.
    /// Airports without a name are left out.
    pub fn options(&self) -> Vec<(&str, String)> {
        self.airports
            .iter()
            .filter(|a| !a.name.is_empty())
            .map(|a| (a.code.as_str(), a.label()))
            .collect()
    }

    /// Case-insensitive substring match on code, name and city.
    pub fn search(&self, query: &str) -> Vec<&Airport> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.airports.iter().collect();
        }
        self.airports
            .iter()
            .filter(|a| {
                a.code.to_lowercase().contains(&q)
                    || a.name.to_lowercase().contains(&q)
                    || a.city.to_lowercase().contains(&q)
            })
            .collect()
    }
}
