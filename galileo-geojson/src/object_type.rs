//! Type tags of GeoJSON objects. See [`GeoJsonObjectType`].

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FoundTag, ValidationError, ValidationReason};

/// Value of the `type` member of a GeoJSON object.
///
/// [GeoJSON Format Specification § 1.4](https://tools.ietf.org/html/rfc7946#section-1.4)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GeoJsonObjectType {
    /// `"Point"`
    Point,
    /// `"MultiPoint"`
    MultiPoint,
    /// `"LineString"`
    LineString,
    /// `"MultiLineString"`
    MultiLineString,
    /// `"Polygon"`
    Polygon,
    /// `"MultiPolygon"`
    MultiPolygon,
    /// `"GeometryCollection"`
    GeometryCollection,
    /// `"Feature"`
    Feature,
    /// `"FeatureCollection"`
    FeatureCollection,
}

impl GeoJsonObjectType {
    /// All object types in the order of declaration.
    pub const ALL: [GeoJsonObjectType; 9] = [
        Self::Point,
        Self::MultiPoint,
        Self::LineString,
        Self::MultiLineString,
        Self::Polygon,
        Self::MultiPolygon,
        Self::GeometryCollection,
        Self::Feature,
        Self::FeatureCollection,
    ];

    /// The literal tag as it appears in a GeoJSON document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
        }
    }

    /// Returns true for the seven geometry types.
    pub const fn is_geometry(self) -> bool {
        !matches!(self, Self::Feature | Self::FeatureCollection)
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl Display for GeoJsonObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoJsonObjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|object_type| object_type.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(ValidationReason::DiscriminatorMismatch {
                    found: FoundTag::Tag(s.to_string()),
                    expected: ObjectTypeSet::ALL,
                })
            })
    }
}

/// Set of object types a value may be resolved to.
///
/// Sets are built in const context, which lets unions declare their candidates as associated
/// constants:
///
/// ```
/// use galileo_geojson::{GeoJsonObjectType, ObjectTypeSet};
///
/// const LINEAR: ObjectTypeSet = ObjectTypeSet::single(GeoJsonObjectType::LineString)
///     .union(ObjectTypeSet::single(GeoJsonObjectType::MultiLineString));
///
/// assert!(LINEAR.contains(GeoJsonObjectType::LineString));
/// assert!(!LINEAR.contains(GeoJsonObjectType::Point));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectTypeSet(u16);

impl ObjectTypeSet {
    /// Set without any types.
    pub const EMPTY: Self = Self(0);

    /// Set of all nine object types.
    pub const ALL: Self = Self(0b1_1111_1111);

    /// Set of the seven geometry types.
    pub const GEOMETRIES: Self = Self(0b0_0111_1111);

    /// Set consisting of one type.
    pub const fn single(object_type: GeoJsonObjectType) -> Self {
        Self(object_type.bit())
    }

    /// Set containing the types of both sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Checks if the type is in the set.
    pub const fn contains(self, object_type: GeoJsonObjectType) -> bool {
        self.0 & object_type.bit() != 0
    }

    /// Returns true if the set has no types.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the types of the set in the order of declaration of [`GeoJsonObjectType`].
    pub fn iter(self) -> impl Iterator<Item = GeoJsonObjectType> {
        GeoJsonObjectType::ALL
            .into_iter()
            .filter(move |object_type| self.contains(*object_type))
    }
}

impl Debug for ObjectTypeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for ObjectTypeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, object_type) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{object_type}")?;
        }

        Ok(())
    }
}

impl From<GeoJsonObjectType> for ObjectTypeSet {
    fn from(value: GeoJsonObjectType) -> Self {
        Self::single(value)
    }
}

impl FromIterator<GeoJsonObjectType> for ObjectTypeSet {
    fn from_iter<T: IntoIterator<Item = GeoJsonObjectType>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, object_type| set.union(object_type.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_strings() {
        for object_type in GeoJsonObjectType::ALL {
            assert_eq!(
                object_type.as_str().parse::<GeoJsonObjectType>(),
                Ok(object_type)
            );
        }

        assert!("point".parse::<GeoJsonObjectType>().is_err());
        assert!("Topology".parse::<GeoJsonObjectType>().is_err());
    }

    #[test]
    fn serde_uses_literal_tags() {
        assert_eq!(
            serde_json::to_value(GeoJsonObjectType::MultiLineString).unwrap(),
            serde_json::json!("MultiLineString")
        );
        assert_eq!(
            serde_json::from_value::<GeoJsonObjectType>(serde_json::json!("FeatureCollection"))
                .unwrap(),
            GeoJsonObjectType::FeatureCollection
        );
    }

    #[test]
    fn geometry_set() {
        let geometries: Vec<_> = ObjectTypeSet::GEOMETRIES.iter().collect();
        assert_eq!(geometries.len(), 7);
        assert!(geometries.iter().all(|object_type| object_type.is_geometry()));
        assert!(!ObjectTypeSet::GEOMETRIES.contains(GeoJsonObjectType::Feature));
        assert_eq!(
            ObjectTypeSet::GEOMETRIES
                .union(GeoJsonObjectType::Feature.into())
                .union(GeoJsonObjectType::FeatureCollection.into()),
            ObjectTypeSet::ALL
        );
    }

    #[test]
    fn set_display_keeps_declaration_order() {
        let set: ObjectTypeSet = [
            GeoJsonObjectType::Feature,
            GeoJsonObjectType::Point,
            GeoJsonObjectType::Polygon,
        ]
        .into_iter()
        .collect();

        assert_eq!(set.to_string(), "Point, Polygon, Feature");
        assert_eq!(ObjectTypeSet::EMPTY.to_string(), "");
        assert!(ObjectTypeSet::EMPTY.is_empty());
    }
}
