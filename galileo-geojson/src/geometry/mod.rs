//! Geometry objects and the [`Geometry`] union.
//!
//! Six of the seven geometry types are "simple": a type tag, an optional bounding box and the
//! `coordinates` member. [`GeometryCollection`] holds other geometries instead.
//!
//! [GeoJSON Format Specification § 3.1](https://tools.ietf.org/html/rfc7946#section-3.1)

/// Implements constructors, accessors, validation and serialization of a simple geometry type.
///
/// The type must have `coordinates: $coordinates` and `bbox: Option<BoundingBox>` fields, and its name
/// must match the [`GeoJsonObjectType`](crate::GeoJsonObjectType) variant.
macro_rules! impl_simple_geometry {
    ($name:ident, $coordinates:ty) => {
        impl $name {
            /// Creates the geometry without a bounding box.
            pub fn new(coordinates: $coordinates) -> Self {
                Self {
                    coordinates,
                    bbox: None,
                }
            }

            /// Sets the bounding box of the geometry.
            pub fn with_bbox(mut self, bbox: crate::BoundingBox) -> Self {
                self.bbox = Some(bbox);
                self
            }

            /// Coordinates of the geometry.
            pub fn coordinates(&self) -> &$coordinates {
                &self.coordinates
            }

            /// Returns the coordinates, dropping the bounding box.
            pub fn into_coordinates(self) -> $coordinates {
                self.coordinates
            }
        }

        impl crate::GeoJsonObject for $name {
            fn object_type(&self) -> crate::GeoJsonObjectType {
                crate::GeoJsonObjectType::$name
            }

            fn bbox(&self) -> Option<&crate::BoundingBox> {
                self.bbox.as_ref()
            }
        }

        impl crate::TaggedObject for $name {
            const OBJECT_TYPES: crate::ObjectTypeSet =
                crate::ObjectTypeSet::single(crate::GeoJsonObjectType::$name);
        }

        impl crate::FromGeoJson for $name {
            fn from_geojson(
                value: &serde_json::Value,
                context: crate::Context,
            ) -> crate::Result<Self> {
                let (_, object) = crate::decode::tagged_object(
                    value,
                    <Self as crate::TaggedObject>::OBJECT_TYPES,
                )?;
                let bbox = crate::decode::optional(object, "bbox", context)?;
                let coordinates = crate::decode::required(object, "coordinates", context)?;

                Ok(Self { coordinates, bbox })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                crate::object::serialize_object(
                    serializer,
                    crate::GeoJsonObjectType::$name,
                    self.bbox.as_ref(),
                    "coordinates",
                    &self.coordinates,
                )
            }
        }

        crate::decode::impl_deserialize_validated!($name);
    };
}

mod collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

pub use collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

crate::geojson_union! {
    /// Any of the seven GeoJSON geometry objects.
    ///
    /// ```
    /// use galileo_geojson::{FromGeoJson, Geometry, GeoJsonObject, GeoJsonObjectType};
    /// use serde_json::json;
    ///
    /// let geometry = Geometry::from_value(&json!({
    ///     "type": "GeometryCollection",
    ///     "geometries": [
    ///         {"type": "Point", "coordinates": [100.0, 0.0]},
    ///         {"type": "LineString", "coordinates": [[101.0, 0.0], [102.0, 1.0]]}
    ///     ]
    /// }))?;
    ///
    /// assert_eq!(geometry.object_type(), GeoJsonObjectType::GeometryCollection);
    /// # Ok::<(), galileo_geojson::ValidationError>(())
    /// ```
    pub enum Geometry {
        /// See [`Point`].
        Point(Point),
        /// See [`MultiPoint`].
        MultiPoint(MultiPoint),
        /// See [`LineString`].
        LineString(LineString),
        /// See [`MultiLineString`].
        MultiLineString(MultiLineString),
        /// See [`Polygon`].
        Polygon(Polygon),
        /// See [`MultiPolygon`].
        MultiPolygon(MultiPolygon),
        /// See [`GeometryCollection`].
        GeometryCollection(GeometryCollection),
    }
}
