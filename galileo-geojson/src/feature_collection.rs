//! See [`FeatureCollection`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::bounding_box::BoundingBox;
use crate::decode::{self, Context, FromGeoJson};
use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::object::{serialize_object, GeoJsonObject, TaggedObject};
use crate::object_type::{GeoJsonObjectType, ObjectTypeSet};
use crate::properties::Properties;

/// Ordered list of features. May be empty.
///
/// The type parameters bound the features of the collection the same way they bound a single
/// [`Feature`].
///
/// [GeoJSON Format Specification § 3.3](https://tools.ietf.org/html/rfc7946#section-3.3)
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<G = Option<Geometry>, P = Option<Properties>> {
    features: Vec<Feature<G, P>>,
    bbox: Option<BoundingBox>,
}

impl<G, P> FeatureCollection<G, P> {
    /// Creates a collection without a bounding box.
    pub fn new(features: Vec<Feature<G, P>>) -> Self {
        Self {
            features,
            bbox: None,
        }
    }

    /// Sets the bounding box of the collection.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Features of the collection.
    pub fn features(&self) -> &[Feature<G, P>] {
        &self.features
    }

    /// Returns the features, dropping the bounding box.
    pub fn into_features(self) -> Vec<Feature<G, P>> {
        self.features
    }
}

impl<G, P> Default for FeatureCollection<G, P> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<G, P> FromIterator<Feature<G, P>> for FeatureCollection<G, P> {
    fn from_iter<T: IntoIterator<Item = Feature<G, P>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<G, P> GeoJsonObject for FeatureCollection<G, P> {
    fn object_type(&self) -> GeoJsonObjectType {
        GeoJsonObjectType::FeatureCollection
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl<G: FromGeoJson, P: FromGeoJson> TaggedObject for FeatureCollection<G, P> {
    const OBJECT_TYPES: ObjectTypeSet =
        ObjectTypeSet::single(GeoJsonObjectType::FeatureCollection);
}

impl<G: FromGeoJson, P: FromGeoJson> FromGeoJson for FeatureCollection<G, P> {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        let (_, object) = decode::tagged_object(value, Self::OBJECT_TYPES)?;
        let bbox = decode::optional(object, "bbox", context)?;
        let features = decode::required(object, "features", context.nested()?)?;

        Ok(Self { features, bbox })
    }
}

impl<G: Serialize, P: Serialize> Serialize for FeatureCollection<G, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_object(
            serializer,
            GeoJsonObjectType::FeatureCollection,
            self.bbox.as_ref(),
            "features",
            &self.features,
        )
    }
}

impl<'de, G: FromGeoJson, P: FromGeoJson> Deserialize<'de> for FeatureCollection<G, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_validated(deserializer)
    }
}
