//! Strongly typed and validated [GeoJSON](https://tools.ietf.org/html/rfc7946) objects.
//!
//! Every GeoJSON object type has a Rust counterpart that can only hold valid data: positions are
//! inside the longitude and latitude ranges, linear rings are closed, bounding boxes are not inverted,
//! and a [`Point`] is always a point. Values are validated when they are read from JSON and when they
//! are constructed in code.
//!
//! # Quick start
//!
//! ```
//! use galileo_geojson::{FromGeoJson, GeoJson, Geometry, ValidationReason};
//!
//! let geojson: GeoJson = r#"{"type": "Point", "coordinates": [100.1, 80.2]}"#.parse()?;
//! assert!(matches!(geojson, GeoJson::Geometry(Geometry::Point(_))));
//!
//! let err = Geometry::from_json_str(r#"{"type": "LineString", "coordinates": [[1, 2]]}"#)
//!     .unwrap_err();
//! assert_eq!(err.path().to_string(), "$.coordinates");
//! assert_eq!(err.reason(), &ValidationReason::TooShort { min: 2, found: 1 });
//! # Ok::<(), galileo_geojson::ValidationError>(())
//! ```
//!
//! # Bounds
//!
//! Slots that may hold different object types are bounded by type parameters. [`Feature`],
//! [`FeatureCollection`] and [`GeometryCollection`] accept any geometry by default, but can be narrowed
//! down to a single geometry type or a union declared with [`geojson_union!`]:
//!
//! ```
//! use galileo_geojson::{Feature, FromGeoJson, Null, Point};
//! use serde_json::json;
//!
//! let value = json!({
//!     "type": "Feature",
//!     "geometry": {"type": "Polygon", "coordinates": []},
//!     "properties": null
//! });
//!
//! assert!(Feature::<Point, Null>::from_value(&value).is_err());
//! assert!(<Feature>::from_value(&value).is_ok());
//! ```
//!
//! # Validation
//!
//! All validated types implement [`FromGeoJson`]. Validation stops at the first failure and reports
//! it as a [`ValidationError`] with the path to the offending value. Use a [`Validator`] to change the
//! limit on the nesting depth of the input.
//!
//! Types also implement `serde::Deserialize` (validating the value) and `serde::Serialize`.
//!
//! # Features
//!
//! * `geo-types` (default) - conversions into [`geo_types`](https://docs.rs/geo-types) geometries.

mod bounding_box;
mod coordinates;
mod decode;
mod error;
mod feature;
mod feature_collection;
#[cfg(feature = "geo-types")]
mod geo_types;
mod geojson;
mod geometry;
mod object;
mod object_type;
mod position;
pub mod properties;
mod union;
mod validator;

pub use bounding_box::BoundingBox;
pub use coordinates::{LineStringCoordinates, LinearRing, PolygonCoordinates};
pub use decode::{Context, FromGeoJson};
pub use error::{FoundTag, JsonPath, PathSegment, Result, ValidationError, ValidationReason};
pub use feature::{Feature, FeatureId};
pub use feature_collection::FeatureCollection;
pub use geojson::GeoJson;
pub use geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use object::{GeoJsonObject, TaggedObject};
pub use object_type::{GeoJsonObjectType, ObjectTypeSet};
pub use position::{Axis, Latitude, Longitude, Position};
pub use properties::{Null, Properties, Schema};
pub use validator::{Validator, DEFAULT_MAX_DEPTH};

#[doc(hidden)]
pub mod __private {
    pub use crate::decode::{deserialize_validated, resolve_object_type, unmatched_object_type};
    pub use serde;
    pub use serde_json::Value;
}
