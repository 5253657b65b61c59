use crate::bounding_box::BoundingBox;
use crate::position::Position;

/// A single position.
///
/// [GeoJSON Format Specification § 3.1.2](https://tools.ietf.org/html/rfc7946#section-3.1.2)
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Position,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(Point, Position);

impl From<Position> for Point {
    fn from(value: Position) -> Self {
        Self::new(value)
    }
}
