//! Members common to all GeoJSON objects.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::bounding_box::BoundingBox;
use crate::decode::FromGeoJson;
use crate::object_type::{GeoJsonObjectType, ObjectTypeSet};

/// A GeoJSON object: something with a `type` tag and an optional bounding box.
///
/// [GeoJSON Format Specification § 3](https://tools.ietf.org/html/rfc7946#section-3)
pub trait GeoJsonObject {
    /// Type tag of the object.
    fn object_type(&self) -> GeoJsonObjectType;

    /// Bounding box of the object, if one was given.
    fn bbox(&self) -> Option<&BoundingBox>;
}

/// A GeoJSON object type that is selected by the `type` member of the input.
///
/// Each of the nine object types of the crate implements this trait with a single-element set. Unions of
/// object types (like [`Geometry`](crate::Geometry) or the ones declared with
/// [`geojson_union!`](crate::geojson_union)) accept the union of their variants' sets.
pub trait TaggedObject: GeoJsonObject + FromGeoJson {
    /// Type tags this type can be validated from.
    const OBJECT_TYPES: ObjectTypeSet;
}

/// Writes a GeoJSON object with one member besides `type` and `bbox`.
pub(crate) fn serialize_object<S, T>(
    serializer: S,
    object_type: GeoJsonObjectType,
    bbox: Option<&BoundingBox>,
    member: &'static str,
    value: &T,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2 + usize::from(bbox.is_some())))?;
    map.serialize_entry("type", &object_type)?;
    if let Some(bbox) = bbox {
        map.serialize_entry("bbox", bbox)?;
    }
    map.serialize_entry(member, value)?;
    map.end()
}
