use crate::bounding_box::BoundingBox;
use crate::coordinates::{LinearRing, PolygonCoordinates};

/// An area bounded by an exterior linear ring with optional holes.
///
/// [GeoJSON Format Specification § 3.1.6](https://tools.ietf.org/html/rfc7946#section-3.1.6)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    coordinates: PolygonCoordinates,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(Polygon, PolygonCoordinates);

impl Polygon {
    /// Exterior ring of the polygon. `None` for an empty polygon.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.coordinates.exterior()
    }

    /// Holes of the polygon.
    pub fn interiors(&self) -> &[LinearRing] {
        self.coordinates.interiors()
    }
}

impl From<PolygonCoordinates> for Polygon {
    fn from(value: PolygonCoordinates) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;
    use crate::FromGeoJson;
    use serde_json::json;

    #[test]
    fn with_hole() {
        let polygon = Polygon::from_value(&json!({
            "type": "Polygon",
            "coordinates": [
                [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
                [[100.8, 0.8], [100.8, 0.2], [100.2, 0.2], [100.2, 0.8], [100.8, 0.8]]
            ]
        }))
        .unwrap();

        assert_eq!(polygon.exterior().map(|ring| ring.len()), Some(5));
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn triangle_ring_is_too_short() {
        let err = Polygon::from_value(&json!({
            "type": "Polygon",
            "coordinates": [[[1, 2], [3, 4], [1, 2]]]
        }))
        .unwrap_err();

        assert_eq!(err.path().to_string(), "$.coordinates[0]");
        assert_eq!(
            err.reason(),
            &ValidationReason::TooShort { min: 4, found: 3 }
        );
    }

    #[test]
    fn empty_polygon() {
        let polygon =
            Polygon::from_value(&json!({"type": "Polygon", "coordinates": []})).unwrap();
        assert!(polygon.exterior().is_none());
    }
}
