// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

//! Renderer-agnostic map description of a search result.
//!
//! A front end draws the markers and lines; this module only decides what
//! goes on the map and how it is labelled.

use crate::airport::Airport;
use crate::geo::{BoundingBox, Position};
use crate::search::NearestAirports;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_ZOOM: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Target,
    Nearby,
}

impl MarkerKind {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Target => "red",
            MarkerKind::Nearby => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub code: String,
    pub kind: MarkerKind,
    pub position: Position,
    pub color: String,
    pub icon: String,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub from: Position,
    pub to: Position,
    pub color: String,
    pub weight: u8,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPayload {
    pub center: Position,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub lines: Vec<Polyline>,
}

fn target_popup(airport: &Airport) -> String {
    format!(
        "{} ({})\n{}",
        airport.name,
        airport.code,
        airport.country_or_unknown()
    )
}

fn nearby_popup(airport: &Airport, distance_km: f64) -> String {
    format!(
        "{} ({})\n{}\nDistance: {:.1} km",
        airport.name,
        airport.code,
        airport.country_or_unknown(),
        distance_km
    )
}

impl MapPayload {
    pub fn from_result(result: &NearestAirports<'_>) -> Self {
        let target = result.target;
        let mut markers = Vec::with_capacity(result.len() + 1);
        let mut lines = Vec::with_capacity(result.len());

        markers.push(Marker {
            code: target.code.clone(),
            kind: MarkerKind::Target,
            position: target.position,
            color: MarkerKind::Target.color().to_string(),
            icon: "plane".to_string(),
            popup: target_popup(target),
        });

        for n in &result.nearby {
            markers.push(Marker {
                code: n.airport.code.clone(),
                kind: MarkerKind::Nearby,
                position: n.airport.position,
                color: MarkerKind::Nearby.color().to_string(),
                icon: "plane".to_string(),
                popup: nearby_popup(n.airport, n.distance_km),
            });
            lines.push(Polyline {
                from: target.position,
                to: n.airport.position,
                color: "blue".to_string(),
                weight: 2,
                opacity: 0.5,
            });
        }

        Self {
            center: target.position,
            zoom: DEFAULT_ZOOM,
            markers,
            lines,
        }
    }

    /// Extent of every marker. Never `None` since the target is always present.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.markers.iter().map(|m| &m.position))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// GeoJSON FeatureCollection. Coordinates are `[lon, lat]` per RFC 7946.
    pub fn to_geojson(&self) -> Value {
        let points = self.markers.iter().map(|m| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [m.position.lon, m.position.lat],
                },
                "properties": {
                    "code": m.code,
                    "kind": m.kind,
                    "marker-color": m.color,
                    "icon": m.icon,
                    "popup": m.popup,
                },
            })
        });
        let lines = self.lines.iter().map(|l| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[l.from.lon, l.from.lat], [l.to.lon, l.to.lat]],
                },
                "properties": {
                    "stroke": l.color,
                    "stroke-width": l.weight,
                    "stroke-opacity": l.opacity,
                },
            })
        });

        json!({
            "type": "FeatureCollection",
            "features": points.chain(lines).collect::<Vec<Value>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::AirportDataset;
    use crate::search::find_nearest;

    fn dataset() -> AirportDataset {
        AirportDataset::from_airports(vec![
            Airport::new("SVO", "Sheremetyevo", "Moscow", Some("Россия"), 55.97, 37.41),
            Airport::new("LED", "Pulkovo", "St Petersburg", Some("Россия"), 59.80, 30.26),
            Airport::new("XXX", "Mystery", "", None, 50.0, 40.0),
        ])
    }

    #[test]
    fn test_payload_layout() {
        let ds = dataset();
        let result = find_nearest(&ds, "SVO", 5).unwrap();
        let payload = MapPayload::from_result(&result);

        assert_eq!(payload.center, ds.get("SVO").unwrap().position);
        assert_eq!(payload.zoom, DEFAULT_ZOOM);
        assert_eq!(payload.markers.len(), 3);
        assert_eq!(payload.lines.len(), 2);

        let target = &payload.markers[0];
        assert_eq!(target.kind, MarkerKind::Target);
        assert_eq!(target.color, "red");
        assert_eq!(target.popup, "Sheremetyevo (SVO)\nРоссия");

        assert!(payload.markers[1..].iter().all(|m| m.kind == MarkerKind::Nearby));
        assert!(payload.lines.iter().all(|l| l.from == payload.center));
    }

    #[test]
    fn test_popup_mentions_distance_and_unknown_country() {
        let ds = dataset();
        let result = find_nearest(&ds, "SVO", 5).unwrap();
        let payload = MapPayload::from_result(&result);
        let mystery = payload.markers.iter().find(|m| m.code == "XXX").unwrap();
        assert!(mystery.popup.contains("Unknown"));
        assert!(mystery.popup.contains("Distance: "));
        assert!(mystery.popup.ends_with(" km"));
    }

    #[test]
    fn test_geojson_uses_lon_lat_order() {
        let ds = dataset();
        let result = find_nearest(&ds, "SVO", 1).unwrap();
        let geo = MapPayload::from_result(&result).to_geojson();

        assert_eq!(geo["type"], "FeatureCollection");
        let features = geo["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0]["geometry"]["coordinates"][0], 37.41);
        assert_eq!(features[0]["geometry"]["coordinates"][1], 55.97);
        assert_eq!(features[0]["properties"]["kind"], "target");
        assert_eq!(features[2]["geometry"]["type"], "LineString");
    }

    #[test]
    fn test_bounds_and_json() {
        let ds = dataset();
        let result = find_nearest(&ds, "SVO", 5).unwrap();
        let payload = MapPayload::from_result(&result);
        let bbox = payload.bounds().unwrap();
        assert_eq!(bbox.min_lat, 50.0);
        assert_eq!(bbox.max_lon, 40.0);

        let json = payload.to_json().unwrap();
        let back: MapPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.markers.len(), payload.markers.len());
    }
}
