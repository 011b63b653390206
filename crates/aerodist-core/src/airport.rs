// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use crate::geo::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    /// `None` only when the dataset has no country column; a blank cell is `Some("")`.
    pub country: Option<String>,
    pub position: Position,
}

impl Airport {
    pub fn new(
        code: &str,
        name: &str,
        city: &str,
        country: Option<&str>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.map(|c| c.to_string()),
            position: Position::new(lat, lon),
        }
    }

    pub fn lat(&self) -> f64 {
        self.position.lat
    }

    pub fn lon(&self) -> f64 {
        self.position.lon
    }

    /// Label used by selection lists, e.g. `SVO - Sheremetyevo`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    pub fn country_or_unknown(&self) -> &str {
        match self.country.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "Unknown",
        }
    }

    pub fn distance_to(&self, other: &Airport) -> f64 {
        self.position.distance_km(&other.position)
    }
}
