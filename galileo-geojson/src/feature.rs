//! See [`Feature`].

use std::fmt::{Display, Formatter};

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::bounding_box::BoundingBox;
use crate::decode::{self, impl_deserialize_validated, Context, FromGeoJson};
use crate::error::Result;
use crate::geometry::Geometry;
use crate::object::{GeoJsonObject, TaggedObject};
use crate::object_type::{GeoJsonObjectType, ObjectTypeSet};
use crate::properties::Properties;

/// A spatially bounded thing: a geometry with properties.
///
/// Both members are bounded by type parameters:
/// * `G` - the geometry. Any geometry or `null` by default. Use a geometry type (e.g. [`Point`]),
///   [`Geometry`] or a union declared with [`geojson_union!`](crate::geojson_union) to require a
///   geometry, and wrap it into `Option` to also allow `null`.
/// * `P` - the properties. Any JSON object or `null` by default. See [`properties`](crate::properties)
///   for the other shapes.
///
/// A feature counts as one nesting level for [`Validator::max_depth`](crate::Validator::max_depth).
///
/// [GeoJSON Format Specification § 3.2](https://tools.ietf.org/html/rfc7946#section-3.2)
///
/// [`Point`]: crate::Point
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<G = Option<Geometry>, P = Option<Properties>> {
    id: Option<FeatureId>,
    geometry: G,
    properties: P,
    bbox: Option<BoundingBox>,
}

impl<G, P> Feature<G, P> {
    /// Creates a feature without an id and a bounding box.
    pub fn new(geometry: G, properties: P) -> Self {
        Self {
            id: None,
            geometry,
            properties,
            bbox: None,
        }
    }

    /// Sets the identifier of the feature.
    pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the bounding box of the feature.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Identifier of the feature.
    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Properties of the feature.
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Returns the geometry and the properties of the feature.
    pub fn into_parts(self) -> (G, P) {
        (self.geometry, self.properties)
    }
}

impl<G, P> GeoJsonObject for Feature<G, P> {
    fn object_type(&self) -> GeoJsonObjectType {
        GeoJsonObjectType::Feature
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl<G: FromGeoJson, P: FromGeoJson> TaggedObject for Feature<G, P> {
    const OBJECT_TYPES: ObjectTypeSet = ObjectTypeSet::single(GeoJsonObjectType::Feature);
}

impl<G: FromGeoJson, P: FromGeoJson> FromGeoJson for Feature<G, P> {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        let (_, object) = decode::tagged_object(value, Self::OBJECT_TYPES)?;
        let bbox = decode::optional(object, "bbox", context)?;
        let context = context.nested()?;
        let geometry = decode::required(object, "geometry", context)?;
        let properties = decode::required(object, "properties", context)?;
        let id = decode::optional(object, "id", context)?;

        Ok(Self {
            id,
            geometry,
            properties,
            bbox,
        })
    }
}

impl<G: Serialize, P: Serialize> Serialize for Feature<G, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.id.is_some()) + usize::from(self.bbox.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", &GeoJsonObjectType::Feature)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(bbox) = &self.bbox {
            map.serialize_entry("bbox", bbox)?;
        }
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.end()
    }
}

impl<'de, G: FromGeoJson, P: FromGeoJson> Deserialize<'de> for Feature<G, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_validated(deserializer)
    }
}

/// Identifier of a feature: a string or a number.
///
/// [GeoJSON Format Specification § 3.2](https://tools.ietf.org/html/rfc7946#section-3.2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(Number),
}

impl FromGeoJson for FeatureId {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Self::String(id.clone())),
            Value::Number(id) => Ok(Self::Number(id.clone())),
            other => Err(decode::wrong_shape("string or number", other)),
        }
    }
}

impl_deserialize_validated!(FeatureId);

impl Display for FeatureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::String(id) => write!(f, "{id}"),
            FeatureId::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;
    use crate::geometry::{Point, Polygon};
    use crate::properties::{Null, Schema};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn default_bounds_accept_nulls() {
        let feature = Feature::<Option<Geometry>, Option<Properties>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null
        }))
        .unwrap();

        assert!(feature.geometry().is_none());
        assert!(feature.properties().is_none());
        assert!(feature.id().is_none());
    }

    #[test]
    fn members_are_required() {
        let err = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "properties": null
        }))
        .unwrap_err();
        assert_eq!(err.reason(), &ValidationReason::MissingField("geometry"));

        let err = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null
        }))
        .unwrap_err();
        assert_eq!(err.reason(), &ValidationReason::MissingField("properties"));
    }

    #[test]
    fn id_rules() {
        let feature = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null,
            "id": "abc"
        }))
        .unwrap();
        assert_eq!(feature.id(), Some(&FeatureId::from("abc")));

        let feature = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null,
            "id": 42
        }))
        .unwrap();
        assert_eq!(feature.id(), Some(&FeatureId::from(42u64)));
        assert_eq!(feature.id().map(ToString::to_string).as_deref(), Some("42"));

        let err = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null,
            "id": null
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.id");
        assert_eq!(err.reason(), &ValidationReason::NullNotAllowed);

        let err = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null,
            "id": ["abc"]
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.id");
        assert_matches!(
            err.reason(),
            ValidationReason::WrongShape { expected: "string or number", .. }
        );
    }

    #[test]
    fn bounded_geometry() {
        let value = json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1, 2]},
            "properties": null
        });
        assert!(Feature::<Point, Null>::from_value(&value).is_ok());

        let err = Feature::<Polygon, Null>::from_value(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.geometry.type");
        assert_matches!(err.reason(), ValidationReason::DiscriminatorMismatch { .. });

        let err = Feature::<Point, Null>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": null
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.geometry");
        assert_eq!(err.reason(), &ValidationReason::NullNotAllowed);
    }

    #[test]
    fn bounded_properties() {
        let err = Feature::<Point, Null>::from_value(&json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1, 2]},
            "properties": {"name": "a"}
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.properties");
        assert_matches!(err.reason(), ValidationReason::BoundViolation(_));

        let err = Feature::<Option<Geometry>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": 123
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.properties");
        assert_matches!(err.reason(), ValidationReason::WrongShape { .. });

        let err = Feature::<Option<Geometry>, Schema<Vec<u32>>>::from_value(&json!({
            "type": "Feature",
            "geometry": null,
            "properties": [1, 2]
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.properties");
        assert_matches!(
            err.reason(),
            ValidationReason::WrongShape { expected: "object", .. }
        );
    }

    #[test]
    fn serialization() {
        let feature = Feature::new(
            Some(Geometry::from(Point::new(
                crate::Position::new(1.0, 2.0).unwrap(),
            ))),
            None::<Properties>,
        )
        .with_id("f1");

        insta::assert_snapshot!(
            serde_json::to_string(&feature).unwrap(),
            @r#"{"type":"Feature","id":"f1","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":null}"#
        );
    }

    #[test]
    fn round_trip() {
        let value = json!({
            "type": "Feature",
            "id": 7,
            "bbox": [1.0, 2.0, 1.0, 2.0],
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
            "properties": {"name": "a", "tags": ["x", "y"]}
        });

        let feature = Feature::<Option<Geometry>>::from_value(&value).unwrap();
        let serialized = serde_json::to_value(&feature).unwrap();
        assert_eq!(serialized, value);
        assert_eq!(
            Feature::<Option<Geometry>>::from_value(&serialized).unwrap(),
            feature
        );
    }
}
