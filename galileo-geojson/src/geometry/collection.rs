use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::bounding_box::BoundingBox;
use crate::decode::{self, Context, FromGeoJson};
use crate::error::Result;
use crate::geometry::Geometry;
use crate::object::{serialize_object, GeoJsonObject, TaggedObject};
use crate::object_type::{GeoJsonObjectType, ObjectTypeSet};

/// A heterogeneous collection of geometries.
///
/// `G` bounds the type of the member geometries. With the default [`Geometry`] any geometry is
/// accepted, including other collections. A narrower bound, e.g. `GeometryCollection<Point>` or a union
/// declared with [`geojson_union!`](crate::geojson_union), rejects member geometries of other types.
/// Since a nested collection is validated with the same bound as its members, collections can only be
/// nested if the bound accepts them.
///
/// Every collection counts as one nesting level for [`Validator::max_depth`](crate::Validator::max_depth).
///
/// [GeoJSON Format Specification § 3.1.8](https://tools.ietf.org/html/rfc7946#section-3.1.8)
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection<G = Geometry> {
    geometries: Vec<G>,
    bbox: Option<BoundingBox>,
}

impl<G> GeometryCollection<G> {
    /// Creates a collection without a bounding box.
    pub fn new(geometries: Vec<G>) -> Self {
        Self {
            geometries,
            bbox: None,
        }
    }

    /// Sets the bounding box of the collection.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Member geometries.
    pub fn geometries(&self) -> &[G] {
        &self.geometries
    }

    /// Returns the member geometries, dropping the bounding box.
    pub fn into_geometries(self) -> Vec<G> {
        self.geometries
    }
}

impl<G> Default for GeometryCollection<G> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<G> FromIterator<G> for GeometryCollection<G> {
    fn from_iter<T: IntoIterator<Item = G>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<G> GeoJsonObject for GeometryCollection<G> {
    fn object_type(&self) -> GeoJsonObjectType {
        GeoJsonObjectType::GeometryCollection
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl<G: FromGeoJson> TaggedObject for GeometryCollection<G> {
    const OBJECT_TYPES: ObjectTypeSet =
        ObjectTypeSet::single(GeoJsonObjectType::GeometryCollection);
}

impl<G: FromGeoJson> FromGeoJson for GeometryCollection<G> {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        let (_, object) = decode::tagged_object(value, Self::OBJECT_TYPES)?;
        let bbox = decode::optional(object, "bbox", context)?;
        let geometries = decode::required(object, "geometries", context.nested()?)?;

        Ok(Self { geometries, bbox })
    }
}

impl<G: Serialize> Serialize for GeometryCollection<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_object(
            serializer,
            GeoJsonObjectType::GeometryCollection,
            self.bbox.as_ref(),
            "geometries",
            &self.geometries,
        )
    }
}

impl<'de, G: FromGeoJson> Deserialize<'de> for GeometryCollection<G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_validated(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FoundTag, ValidationReason};
    use crate::geometry::{LineString, Point};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn point(lon: f64, lat: f64) -> Value {
        json!({"type": "Point", "coordinates": [lon, lat]})
    }

    #[test]
    fn nested_one_level() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [
                point(1.0, 2.0),
                {"type": "GeometryCollection", "geometries": [point(3.0, 4.0)]}
            ]
        });

        let collection = GeometryCollection::<Geometry>::from_value(&value).unwrap();
        assert_eq!(collection.geometries().len(), 2);
        assert_matches!(
            &collection.geometries()[1],
            Geometry::GeometryCollection(inner) if inner.geometries().len() == 1
        );
        assert_eq!(serde_json::to_value(&collection).unwrap(), value);
    }

    #[test]
    fn empty_collection() {
        let collection = GeometryCollection::<Geometry>::from_value(&json!({
            "type": "GeometryCollection",
            "geometries": []
        }))
        .unwrap();
        assert!(collection.geometries().is_empty());
    }

    #[test]
    fn missing_geometries() {
        let err = GeometryCollection::<Geometry>::from_value(&json!({"type": "GeometryCollection"}))
            .unwrap_err();
        assert_eq!(err.reason(), &ValidationReason::MissingField("geometries"));
    }

    #[test]
    fn bounded_members() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [
                point(1.0, 2.0),
                {"type": "LineString", "coordinates": [[1, 2], [3, 4]]}
            ]
        });

        let err = GeometryCollection::<Point>::from_value(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.geometries[1].type");
        assert_matches!(
            err.reason(),
            ValidationReason::DiscriminatorMismatch { found: FoundTag::Tag(tag), .. } if tag == "LineString"
        );

        assert!(GeometryCollection::<Geometry>::from_value(&value).is_ok());
    }

    #[test]
    fn bounded_collections_cannot_nest() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [{"type": "GeometryCollection", "geometries": []}]
        });

        let err = GeometryCollection::<LineString>::from_value(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.geometries[0].type");
    }

    #[test]
    fn first_failing_member_is_reported() {
        let err = GeometryCollection::<Geometry>::from_value(&json!({
            "type": "GeometryCollection",
            "geometries": [
                point(1.0, 2.0),
                point(1.0, 95.0),
                point(200.0, 2.0)
            ]
        }))
        .unwrap_err();

        assert_eq!(err.path().to_string(), "$.geometries[1].coordinates[1]");
    }
}
