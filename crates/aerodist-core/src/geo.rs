// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees (haversine).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude within [-90, 90], longitude within [-180, 180], both finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn distance_km(&self, other: &Position) -> f64 {
        distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Smallest box containing every position, or `None` for an empty input.
    pub fn enclosing<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for p in iter {
            bbox.min_lat = bbox.min_lat.min(p.lat);
            bbox.max_lat = bbox.max_lat.max(p.lat);
            bbox.min_lon = bbox.min_lon.min(p.lon);
            bbox.max_lon = bbox.max_lon.max(p.lon);
        }
        Some(bbox)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(distance_km(55.97, 37.41, 55.97, 37.41), 0.0);
        assert_eq!(distance_km(-33.9, 151.2, -33.9, 151.2), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (55.0, 37.0, 59.9, 30.3),
            (48.8, 2.3, -33.9, 151.2),
            (0.0, 179.5, 0.0, -179.5),
            (89.9, 0.0, -89.9, 180.0),
        ];
        for (lat1, lon1, lat2, lon2) in pairs {
            let ab = distance_km(lat1, lon1, lat2, lon2);
            let ba = distance_km(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
        }
    }

    #[test]
    fn test_known_city_pairs() {
        // Moscow SVO -> St Petersburg LED, ~597 km
        let d = distance_km(55.972642, 37.414589, 59.800292, 30.262503);
        assert!((d - 597.0).abs() / 597.0 < 0.01, "SVO-LED was {}", d);

        // London -> Paris city centres, ~344 km
        let d = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 343.5).abs() / 343.5 < 0.01, "LON-PAR was {}", d);
    }

    #[test]
    fn test_antimeridian_is_short() {
        let d = distance_km(0.0, 179.5, 0.0, -179.5);
        assert!(d < 112.0 && d > 110.0, "got {}", d);
    }

    #[test]
    fn test_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_position_validation() {
        assert!(Position::new(55.0, 37.0).is_valid());
        assert!(!Position::new(91.0, 0.0).is_valid());
        assert!(!Position::new(0.0, -180.5).is_valid());
        assert!(!Position::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_enclosing_box() {
        let points = [
            Position::new(55.0, 37.0),
            Position::new(59.9, 30.3),
            Position::new(48.8, 2.3),
        ];
        let bbox = BoundingBox::enclosing(&points).unwrap();
        assert_eq!(bbox.min_lat, 48.8);
        assert_eq!(bbox.max_lat, 59.9);
        assert_eq!(bbox.min_lon, 2.3);
        assert_eq!(bbox.max_lon, 37.0);
        assert!(bbox.contains(50.0, 20.0));
        assert!(BoundingBox::enclosing(std::iter::empty::<&Position>()).is_none());
    }
}
