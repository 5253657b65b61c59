use crate::bounding_box::BoundingBox;
use crate::position::Position;

/// A set of positions. May be empty.
///
/// [GeoJSON Format Specification § 3.1.3](https://tools.ietf.org/html/rfc7946#section-3.1.3)
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(MultiPoint, Vec<Position>);
