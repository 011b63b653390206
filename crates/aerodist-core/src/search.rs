// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use crate::airport::Airport;
use crate::dataset::AirportDataset;
use crate::restrictions::can_fly_between;
use crate::AeroError;
use log::debug;
use serde::Serialize;

/// How many neighbours a search returns unless told otherwise.
pub const DEFAULT_RESULT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyAirport<'a> {
    pub airport: &'a Airport,
    pub distance_km: f64,
}

/// Outcome of a successful search. `nearby` may be empty when every other
/// airport is ruled out by the flight restrictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestAirports<'a> {
    pub target: &'a Airport,
    pub nearby: Vec<NearbyAirport<'a>>,
}

impl<'a> NearestAirports<'a> {
    pub fn is_empty(&self) -> bool {
        self.nearby.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nearby.len()
    }

    pub fn codes(&self) -> Vec<&'a str> {
        self.nearby.iter().map(|n| n.airport.code.as_str()).collect()
    }
}

/// Up to `n` airports closest to `target_code` that can be flown to from it.
///
/// Results are ordered by ascending distance; equal distances keep dataset order.
pub fn find_nearest<'a>(
    dataset: &'a AirportDataset,
    target_code: &str,
    n: usize,
) -> Result<NearestAirports<'a>, AeroError> {
    let target = dataset
        .get(target_code)
        .ok_or_else(|| AeroError::TargetNotFound(target_code.trim().to_string()))?;

    let mut nearby: Vec<NearbyAirport<'a>> = dataset
        .airports()
        .iter()
        .filter(|candidate| candidate.code != target.code)
        .filter(|candidate| can_fly_between(target, candidate))
        .map(|candidate| NearbyAirport {
            airport: candidate,
            distance_km: target.distance_to(candidate),
        })
        .collect();

    let eligible = nearby.len();
    // sort_by is stable, so ties keep dataset order
    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby.truncate(n);

    debug!(
        "Nearest search — target={} candidates={} eligible={} returned={}",
        target.code,
        dataset.len().saturating_sub(1),
        eligible,
        nearby.len()
    );

    Ok(NearestAirports { target, nearby })
}
