use crate::bounding_box::BoundingBox;
use crate::coordinates::LineStringCoordinates;

/// A set of line strings.
///
/// [GeoJSON Format Specification § 3.1.5](https://tools.ietf.org/html/rfc7946#section-3.1.5)
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    coordinates: Vec<LineStringCoordinates>,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(MultiLineString, Vec<LineStringCoordinates>);
