//! Conversions into [`geo_types`] geometries.
//!
//! `geo_types` is two-dimensional, so altitudes are dropped.

use crate::bounding_box::BoundingBox;
use crate::coordinates::{LineStringCoordinates, LinearRing, PolygonCoordinates};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::position::Position;

impl From<Position> for geo_types::Coord<f64> {
    fn from(value: Position) -> Self {
        geo_types::coord!(x: value.lon(), y: value.lat())
    }
}

impl From<Position> for geo_types::Point<f64> {
    fn from(value: Position) -> Self {
        geo_types::Point(value.into())
    }
}

fn line_string(positions: &[Position]) -> geo_types::LineString<f64> {
    positions.iter().copied().map(geo_types::Coord::from).collect()
}

impl From<&LineStringCoordinates> for geo_types::LineString<f64> {
    fn from(value: &LineStringCoordinates) -> Self {
        line_string(value)
    }
}

impl From<&LinearRing> for geo_types::LineString<f64> {
    fn from(value: &LinearRing) -> Self {
        line_string(value)
    }
}

impl From<&PolygonCoordinates> for geo_types::Polygon<f64> {
    fn from(value: &PolygonCoordinates) -> Self {
        let exterior = value
            .exterior()
            .map(geo_types::LineString::from)
            .unwrap_or_else(|| geo_types::LineString::new(vec![]));
        let interiors = value.interiors().iter().map(Into::into).collect();
        geo_types::Polygon::new(exterior, interiors)
    }
}

impl From<&Point> for geo_types::Point<f64> {
    fn from(value: &Point) -> Self {
        (*value.coordinates()).into()
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        value
            .coordinates()
            .iter()
            .copied()
            .map(geo_types::Point::from)
            .collect()
    }
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        value.coordinates().into()
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo_types::MultiLineString::new(value.coordinates().iter().map(Into::into).collect())
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        value.coordinates().into()
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.coordinates().iter().map(Into::into).collect())
    }
}

impl<'a, G> From<&'a GeometryCollection<G>> for geo_types::GeometryCollection<f64>
where
    &'a G: Into<geo_types::Geometry<f64>>,
{
    fn from(value: &'a GeometryCollection<G>) -> Self {
        geo_types::GeometryCollection::new_from(
            value.geometries().iter().map(Into::into).collect(),
        )
    }
}

impl From<&Geometry> for geo_types::Geometry<f64> {
    fn from(value: &Geometry) -> Self {
        match value {
            Geometry::Point(point) => geo_types::Geometry::Point(point.into()),
            Geometry::MultiPoint(multi_point) => {
                geo_types::Geometry::MultiPoint(multi_point.into())
            }
            Geometry::LineString(line_string) => {
                geo_types::Geometry::LineString(line_string.into())
            }
            Geometry::MultiLineString(multi_line_string) => {
                geo_types::Geometry::MultiLineString(multi_line_string.into())
            }
            Geometry::Polygon(polygon) => geo_types::Geometry::Polygon(polygon.into()),
            Geometry::MultiPolygon(multi_polygon) => {
                geo_types::Geometry::MultiPolygon(multi_polygon.into())
            }
            Geometry::GeometryCollection(collection) => {
                geo_types::Geometry::GeometryCollection(collection.into())
            }
        }
    }
}

impl From<&BoundingBox> for geo_types::Rect<f64> {
    fn from(value: &BoundingBox) -> Self {
        geo_types::Rect::new(
            geo_types::Coord::from(*value.min()),
            geo_types::Coord::from(*value.max()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FromGeoJson;
    use serde_json::json;

    #[test]
    fn polygon_with_hole() {
        let polygon = Polygon::from_value(&json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                [[2, 2], [3, 2], [3, 3], [2, 2]]
            ]
        }))
        .unwrap();

        let converted = geo_types::Polygon::from(&polygon);
        assert_eq!(converted.exterior().0.len(), 5);
        assert_eq!(converted.interiors().len(), 1);
        assert_eq!(
            converted.exterior().0[1],
            geo_types::coord!(x: 10.0, y: 0.0)
        );
    }

    #[test]
    fn altitude_is_dropped() {
        let position = Position::with_altitude(1.0, 2.0, 3.0).unwrap();
        assert_eq!(
            geo_types::Coord::from(position),
            geo_types::coord!(x: 1.0, y: 2.0)
        );
    }

    #[test]
    fn nested_collection() {
        let geometry = Geometry::from_value(&json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [1, 2]},
                {
                    "type": "GeometryCollection",
                    "geometries": [{"type": "LineString", "coordinates": [[1, 2], [3, 4]]}]
                }
            ]
        }))
        .unwrap();

        let geo_types::Geometry::GeometryCollection(collection) =
            geo_types::Geometry::from(&geometry)
        else {
            panic!("expected a geometry collection");
        };
        assert_eq!(collection.0.len(), 2);
        assert!(matches!(
            collection.0[1],
            geo_types::Geometry::GeometryCollection(_)
        ));
    }

    #[test]
    fn bbox_to_rect() {
        let bbox = BoundingBox::from_slice(&[-10.0, -5.0, 10.0, 5.0]).unwrap();
        let rect = geo_types::Rect::from(&bbox);
        assert_eq!(rect.min(), geo_types::coord!(x: -10.0, y: -5.0));
        assert_eq!(rect.max(), geo_types::coord!(x: 10.0, y: 5.0));
    }
}
