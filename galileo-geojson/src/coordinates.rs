//! Coordinate aggregates of line strings and polygons.
//!
//! * [`LineStringCoordinates`] - two or more positions.
//! * [`LinearRing`] - closed sequence of four or more positions, the boundary of a polygon.
//! * [`PolygonCoordinates`] - sequence of linear rings: the exterior ring followed by the holes.
//!
//! Only the structure is validated. Winding order of the rings, self-intersections and whether holes
//! lie inside the exterior ring are not checked.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::decode::{impl_deserialize_validated, Context, FromGeoJson};
use crate::error::{Result, ValidationError, ValidationReason};
use crate::position::Position;

fn check_length(positions: &[Position], min: usize) -> Result<()> {
    if positions.len() < min {
        return Err(ValidationError::new(ValidationReason::TooShort {
            min,
            found: positions.len(),
        }));
    }

    Ok(())
}

/// Coordinates of a line string: at least two positions.
///
/// [GeoJSON Format Specification § 3.1.4](https://tools.ietf.org/html/rfc7946#section-3.1.4)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineStringCoordinates(Vec<Position>);

impl LineStringCoordinates {
    /// Minimum number of positions.
    pub const MIN_POSITIONS: usize = 2;

    /// Validates the number of positions.
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        check_length(&positions, Self::MIN_POSITIONS)?;
        Ok(Self(positions))
    }

    /// Returns the positions.
    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

impl Deref for LineStringCoordinates {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromGeoJson for LineStringCoordinates {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        Self::new(Vec::from_geojson(value, context)?)
    }
}

/// Closed sequence of at least four positions, the first and the last of which are equal.
///
/// Three-position rings are rejected even if closed, since they cannot enclose an area.
///
/// [GeoJSON Format Specification § 3.1.6](https://tools.ietf.org/html/rfc7946#section-3.1.6)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LinearRing(Vec<Position>);

impl LinearRing {
    /// Minimum number of positions, including the repeated closing position.
    pub const MIN_POSITIONS: usize = 4;

    /// Validates the number of positions and that the ring is closed.
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        check_length(&positions, Self::MIN_POSITIONS)?;
        if positions.first() != positions.last() {
            return Err(ValidationError::new(ValidationReason::NotClosed));
        }

        Ok(Self(positions))
    }

    /// Returns the positions, including the closing one.
    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

impl Deref for LinearRing {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromGeoJson for LinearRing {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        Self::new(Vec::from_geojson(value, context)?)
    }
}

/// Rings of a polygon. The first ring is the exterior one, the rest are holes.
///
/// An empty sequence is accepted and describes an empty polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolygonCoordinates(Vec<LinearRing>);

impl PolygonCoordinates {
    /// Creates polygon coordinates from the rings.
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self(rings)
    }

    /// The exterior ring, if the polygon is not empty.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.0.first()
    }

    /// Rings of the holes.
    pub fn interiors(&self) -> &[LinearRing] {
        self.0.get(1..).unwrap_or_default()
    }

    /// Returns the rings.
    pub fn into_inner(self) -> Vec<LinearRing> {
        self.0
    }
}

impl Deref for PolygonCoordinates {
    type Target = [LinearRing];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<LinearRing>> for PolygonCoordinates {
    fn from(value: Vec<LinearRing>) -> Self {
        Self(value)
    }
}

impl FromGeoJson for PolygonCoordinates {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        Vec::from_geojson(value, context).map(Self)
    }
}

impl_deserialize_validated!(LineStringCoordinates, LinearRing, PolygonCoordinates);
