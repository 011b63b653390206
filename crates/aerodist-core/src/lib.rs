// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

pub mod airport;
pub mod config;
pub mod dataset;
pub mod geo;
pub mod map;
pub mod restrictions;
pub mod search;

pub use airport::Airport;
pub use config::Config;
pub use dataset::{AirportDataset, DatasetError, LoadOptions};
pub use geo::{distance_km, Position};
pub use map::MapPayload;
pub use restrictions::{can_fly_between, is_domestic};
pub use search::{find_nearest, NearbyAirport, NearestAirports, DEFAULT_RESULT_COUNT};

use thiserror::Error;

/// The two failure kinds a caller of the core has to handle.
#[derive(Error, Debug)]
pub enum AeroError {
    /// The airport table could not be loaded. Nothing else can proceed.
    #[error("Airport dataset unavailable: {0}")]
    DatasetUnavailable(#[from] DatasetError),
    /// The requested code is not in the dataset. The caller may pick another.
    #[error("No such airport: {0}")]
    TargetNotFound(String),
}

impl AeroError {
    /// True for errors the user can recover from by choosing another airport.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AeroError::TargetNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AeroError::TargetNotFound("XXX".to_string());
        assert_eq!(err.to_string(), "No such airport: XXX");
        assert!(err.is_recoverable());

        let err = AeroError::from(DatasetError::Empty);
        assert!(err.to_string().starts_with("Airport dataset unavailable"));
        assert!(!err.is_recoverable());
    }
}
