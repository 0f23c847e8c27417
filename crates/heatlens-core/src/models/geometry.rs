//! Coordinate and boundary types used across all heatlens crates.
//!
//! These types bridge serde-friendly coordinate pairs and the computational
//! `geo` crate types used for centroid and extent calculations.

use geo::algorithm::bounding_rect::BoundingRect;
use geo::algorithm::centroid::Centroid;
use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::{HeatlensError, Result};

/// A WGS 84 position (latitude, longitude in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point {
        geo::Point::new(self.lng, self.lat)
    }
}

impl From<Coordinate> for Coord {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lng, y: c.lat }
    }
}

/// A closed region boundary: an ordered ring of coordinates.
///
/// The ring is stored as supplied. Rings with fewer than 3 points are
/// malformed and rejected at render time; self-intersection is not checked
/// and simply renders incorrectly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary {
    ring: Vec<Coordinate>,
}

impl Boundary {
    pub fn new(ring: Vec<Coordinate>) -> Self {
        Self { ring }
    }

    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Check the minimum-point requirement for polygon rendering.
    pub fn validate(&self, cluster: &str) -> Result<()> {
        if self.ring.len() < 3 {
            return Err(HeatlensError::MalformedBoundary {
                cluster: cluster.to_string(),
                points: self.ring.len(),
            });
        }
        Ok(())
    }

    fn to_polygon(&self) -> Polygon {
        let coords: Vec<Coord> = self.ring.iter().copied().map(Coord::from).collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Geometric centroid of the ring, if it can be computed.
    pub fn centroid(&self) -> Option<Coordinate> {
        if self.ring.len() < 3 {
            return None;
        }
        let c = self.to_polygon().centroid()?;
        Some(Coordinate::new(c.y(), c.x()))
    }

    /// Axis-aligned extent as (south-west, north-east) corners.
    pub fn extent(&self) -> Option<(Coordinate, Coordinate)> {
        if self.ring.is_empty() {
            return None;
        }
        let rect = self.to_polygon().bounding_rect()?;
        Some((
            Coordinate::new(rect.min().y, rect.min().x),
            Coordinate::new(rect.max().y, rect.max().x),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Boundary {
        Boundary::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 0.0),
        ])
    }

    #[test]
    fn centroid_of_square() {
        let c = square().centroid().unwrap();
        assert!((c.lat - 1.0).abs() < 1e-9);
        assert!((c.lng - 1.0).abs() < 1e-9);
    }

    #[test]
    fn extent_of_square() {
        let (sw, ne) = square().extent().unwrap();
        assert_eq!(sw, Coordinate::new(0.0, 0.0));
        assert_eq!(ne, Coordinate::new(2.0, 2.0));
    }

    #[test]
    fn short_ring_is_malformed() {
        let b = Boundary::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
        let err = b.validate("mumbai").unwrap_err();
        assert!(matches!(
            err,
            HeatlensError::MalformedBoundary { points: 2, .. }
        ));
        assert!(b.centroid().is_none());
    }

    #[test]
    fn boundary_round_trips_as_plain_array() {
        let json = serde_json::to_string(&square()).unwrap();
        assert!(json.starts_with('['));
        let parsed: Boundary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, square());
    }
}
