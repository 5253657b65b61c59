//! Bounding boxes of GeoJSON objects. See [`BoundingBox`].

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::decode::{self, impl_deserialize_validated, Context, FromGeoJson};
use crate::error::{Result, ValidationError, ValidationReason};
use crate::position::Position;

/// Bounding box of a GeoJSON object: the minimum and the maximum corners of the same dimensions.
///
/// Both corners are valid [`Position`]s and no component of the minimum corner is greater than the
/// corresponding component of the maximum one. Degenerate boxes (e.g. of a single point) are valid.
///
/// [GeoJSON Format Specification § 5](https://tools.ietf.org/html/rfc7946#section-5)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    min: Position,
    max: Position,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    pub fn new(min: Position, max: Position) -> Result<Self> {
        if min.dimensions() != max.dimensions() {
            return Err(ValidationError::new(ValidationReason::WrongShape {
                expected: "corners with the same number of dimensions",
                found: format!(
                    "{}d and {}d corners",
                    min.dimensions(),
                    max.dimensions()
                ),
            }));
        }

        let axes = min.to_vec().into_iter().zip(max.to_vec());
        for (axis, (min, max)) in axes.enumerate() {
            if min > max {
                return Err(ValidationError::new(ValidationReason::InvertedBounds {
                    axis,
                    min,
                    max,
                }));
            }
        }

        Ok(Self { min, max })
    }

    /// Creates a bounding box from 4 (2d) or 6 (3d) numbers: all the components of the minimum corner
    /// followed by all the components of the maximum one.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        let dimensions = match components.len() {
            4 => 2,
            6 => 3,
            found => {
                return Err(ValidationError::new(ValidationReason::WrongArity {
                    expected: "4 or 6",
                    found,
                }))
            }
        };

        let (min, max) = components.split_at(dimensions);
        Self::new(
            Position::from_components(min, 0)?,
            Position::from_components(max, dimensions)?,
        )
    }

    /// Corner with the smallest values.
    pub fn min(&self) -> &Position {
        &self.min
    }

    /// Corner with the largest values.
    pub fn max(&self) -> &Position {
        &self.max
    }

    /// 2 for 2d boxes, 3 for 3d ones.
    pub fn dimensions(&self) -> usize {
        self.min.dimensions()
    }

    /// Components of the box in the GeoJSON order.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut components = self.min.to_vec();
        components.extend(self.max.to_vec());
        components
    }
}

impl FromGeoJson for BoundingBox {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        Self::from_slice(&decode::numbers(value)?)
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let components = self.to_vec();
        let mut seq = serializer.serialize_seq(Some(components.len()))?;
        for component in &components {
            seq.serialize_element(component)?;
        }
        seq.end()
    }
}

impl_deserialize_validated!(BoundingBox);

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn degenerate_boxes_are_valid() {
        let bbox = BoundingBox::from_value(&json!([100.1, 80.2, 100.1, 80.2])).unwrap();
        assert_eq!(bbox.dimensions(), 2);
        assert_eq!(bbox.min(), bbox.max());

        let bbox =
            BoundingBox::from_value(&json!([100.1, 80.2, 1000, 100.1, 80.2, 1000])).unwrap();
        assert_eq!(bbox.dimensions(), 3);
        assert_eq!(bbox.to_vec(), vec![100.1, 80.2, 1000.0, 100.1, 80.2, 1000.0]);
    }

    #[test]
    fn wrong_lengths() {
        for value in [json!([]), json!([1, 2, 3]), json!([1, 2, 3, 4, 5, 6, 7])] {
            let err = BoundingBox::from_value(&value).unwrap_err();
            assert_matches!(err.reason(), ValidationReason::WrongArity { .. });
        }
    }

    #[test]
    fn inverted_axes() {
        let cases = [
            (json!([1, 2, 0, 4]), 0),
            (json!([1, 2, 3, 1]), 1),
            (json!([1, 2, 1000, 0, 4, 1000]), 0),
            (json!([1, 2, 1000, 3, 1, 1000]), 1),
            (json!([1, 2, 1000, 3, 4, 999]), 2),
        ];

        for (value, expected_axis) in cases {
            let err = BoundingBox::from_value(&value).unwrap_err();
            assert_matches!(
                err.reason(),
                ValidationReason::InvertedBounds { axis, .. } if *axis == expected_axis,
                "{value}"
            );
        }
    }

    #[test]
    fn corners_are_range_checked() {
        let err = BoundingBox::from_value(&json!([0, 0, 10, 95])).unwrap_err();
        assert_eq!(err.path().to_string(), "$[3]");
        assert_matches!(err.reason(), ValidationReason::OutOfRange { .. });
    }

    #[test]
    fn serializes_flat() {
        let bbox = BoundingBox::new(
            Position::new(-10.0, -5.0).unwrap(),
            Position::new(10.0, 5.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(bbox).unwrap(),
            json!([-10.0, -5.0, 10.0, 5.0])
        );
    }

    #[test]
    fn corners_must_have_same_dimensions() {
        let err = BoundingBox::new(
            Position::new(0.0, 0.0).unwrap(),
            Position::with_altitude(1.0, 1.0, 1.0).unwrap(),
        )
        .unwrap_err();
        assert_matches!(err.reason(), ValidationReason::WrongShape { .. });
    }
}
