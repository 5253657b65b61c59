use crate::bounding_box::BoundingBox;
use crate::coordinates::LineStringCoordinates;

/// A curve of two or more positions.
///
/// [GeoJSON Format Specification § 3.1.4](https://tools.ietf.org/html/rfc7946#section-3.1.4)
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: LineStringCoordinates,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(LineString, LineStringCoordinates);

impl From<LineStringCoordinates> for LineString {
    fn from(value: LineStringCoordinates) -> Self {
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
    fn too_short() {
        let err = LineString::from_value(&json!({"type": "LineString", "coordinates": [[1, 2]]}))
            .unwrap_err();
        assert_eq!(err.path().to_string(), "$.coordinates");
        assert_eq!(
            err.reason(),
            &ValidationReason::TooShort { min: 2, found: 1 }
        );
    }

    #[test]
    fn round_trip() {
        let value = json!({
            "type": "LineString",
            "bbox": [100.0, 0.0, 101.0, 1.0],
            "coordinates": [[100.0, 0.0], [101.0, 1.0]]
        });
        let line_string = LineString::from_value(&value).unwrap();
        assert_eq!(line_string.coordinates().len(), 2);
        assert_eq!(serde_json::to_value(&line_string).unwrap(), value);
    }
}
