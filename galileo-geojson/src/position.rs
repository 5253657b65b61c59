//! Geographic positions. See [`Position`].

use std::fmt::{Display, Formatter};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::decode::{self, impl_deserialize_validated, Context, FromGeoJson};
use crate::error::{Result, ValidationError, ValidationReason};

/// Coordinate axis with a restricted range of values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East-west axis, `[-180, 180]`.
    Longitude,
    /// North-south axis, `[-90, 90]`.
    Latitude,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

fn check_range(axis: Axis, value: f64, min: f64, max: f64) -> Result<f64> {
    // NaN fails the range check as well.
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(ValidationReason::OutOfRange {
            axis,
            value,
            min,
            max,
        }))
    }
}

// JSON has no representation for NaN and infinities.
fn check_altitude(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(ValidationReason::WrongShape {
            expected: "finite altitude",
            found: value.to_string(),
        }))
    }
}

/// Longitude in degrees, in the range `[-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Longitude(f64);

impl Longitude {
    /// Smallest valid longitude.
    pub const MIN: f64 = -180.0;
    /// Largest valid longitude.
    pub const MAX: f64 = 180.0;

    /// Validates the longitude value.
    pub fn new(value: f64) -> Result<Self> {
        check_range(Axis::Longitude, value, Self::MIN, Self::MAX).map(Self)
    }

    /// Value in degrees.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Latitude in degrees, in the range `[-90, 90]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Latitude(f64);

impl Latitude {
    /// Smallest valid latitude.
    pub const MIN: f64 = -90.0;
    /// Largest valid latitude.
    pub const MAX: f64 = 90.0;

    /// Validates the latitude value.
    pub fn new(value: f64) -> Result<Self> {
        check_range(Axis::Latitude, value, Self::MIN, Self::MAX).map(Self)
    }

    /// Value in degrees.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Geographic position: longitude, latitude and an optional altitude.
///
/// [GeoJSON Format Specification § 3.1.1](https://tools.ietf.org/html/rfc7946#section-3.1.1)
///
/// ```
/// use galileo_geojson::Position;
///
/// let position = Position::new(100.1, 80.2)?;
/// assert_eq!(position.lon(), 100.1);
/// assert_eq!(position.alt(), None);
///
/// assert!(Position::new(190.0, 0.0).is_err());
/// # Ok::<(), galileo_geojson::ValidationError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    lon: Longitude,
    lat: Latitude,
    alt: Option<f64>,
}

impl Position {
    /// Creates a 2d position.
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        Self::from_components(&[lon, lat], 0)
    }

    /// Creates a 3d position. Altitude has no range, but must be finite.
    pub fn with_altitude(lon: f64, lat: f64, alt: f64) -> Result<Self> {
        Self::from_components(&[lon, lat, alt], 0)
    }

    /// Creates a position from 2 or 3 components.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        Self::from_components(components, 0)
    }

    /// Same as [`Position::from_slice`], but errors point to `first_index + i` for the i-th component.
    pub(crate) fn from_components(components: &[f64], first_index: usize) -> Result<Self> {
        let (lon, lat, alt) = match *components {
            [lon, lat] => (lon, lat, None),
            [lon, lat, alt] => (lon, lat, Some(alt)),
            _ => {
                return Err(ValidationError::new(ValidationReason::WrongArity {
                    expected: "2 or 3",
                    found: components.len(),
                }))
            }
        };

        Ok(Self {
            lon: Longitude::new(lon).map_err(|err| err.in_element(first_index))?,
            lat: Latitude::new(lat).map_err(|err| err.in_element(first_index + 1))?,
            alt: alt
                .map(check_altitude)
                .transpose()
                .map_err(|err| err.in_element(first_index + 2))?,
        })
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon.value()
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat.value()
    }

    /// Altitude, if the position is 3d.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Validated longitude.
    pub fn longitude(&self) -> Longitude {
        self.lon
    }

    /// Validated latitude.
    pub fn latitude(&self) -> Latitude {
        self.lat
    }

    /// Number of components: 2 or 3.
    pub fn dimensions(&self) -> usize {
        if self.alt.is_some() {
            3
        } else {
            2
        }
    }

    /// Components of the position in the GeoJSON order.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut components = vec![self.lon(), self.lat()];
        components.extend(self.alt);
        components
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = ValidationError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl FromGeoJson for Position {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        let components = decode::numbers(value)?;
        Self::from_components(&components, 0)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dimensions()))?;
        seq.serialize_element(&self.lon())?;
        seq.serialize_element(&self.lat())?;
        if let Some(alt) = self.alt {
            seq.serialize_element(&alt)?;
        }
        seq.end()
    }
}

impl_deserialize_validated!(Position);
