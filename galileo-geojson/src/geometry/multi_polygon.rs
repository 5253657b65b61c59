use crate::bounding_box::BoundingBox;
use crate::coordinates::PolygonCoordinates;

/// A set of polygons.
///
/// [GeoJSON Format Specification § 3.1.7](https://tools.ietf.org/html/rfc7946#section-3.1.7)
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    coordinates: Vec<PolygonCoordinates>,
    bbox: Option<BoundingBox>,
}

impl_simple_geometry!(MultiPolygon, Vec<PolygonCoordinates>);
