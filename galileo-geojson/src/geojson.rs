//! See [`GeoJson`].

use std::str::FromStr;

use crate::error::ValidationError;
use crate::feature::Feature;
use crate::feature_collection::FeatureCollection;
use crate::geometry::Geometry;
use crate::validator::Validator;

crate::geojson_union! {
    /// Any GeoJSON document: a geometry, a feature or a feature collection.
    ///
    /// ```
    /// use galileo_geojson::GeoJson;
    ///
    /// let geojson: GeoJson = r#"{
    ///     "type": "FeatureCollection",
    ///     "features": [{
    ///         "type": "Feature",
    ///         "geometry": {"type": "Point", "coordinates": [102.0, 0.5]},
    ///         "properties": {"prop0": "value0"}
    ///     }]
    /// }"#.parse()?;
    ///
    /// assert_eq!(geojson.as_feature_collection().map(|fc| fc.features().len()), Some(1));
    /// # Ok::<(), galileo_geojson::ValidationError>(())
    /// ```
    pub enum GeoJson {
        /// Any geometry object.
        Geometry(Geometry),
        /// Feature with the default bounds.
        Feature(Feature),
        /// Feature collection with the default bounds.
        FeatureCollection(FeatureCollection),
    }
}

impl GeoJson {
    /// Returns the geometry if the document is a geometry.
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            Self::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    /// Returns the feature if the document is a feature.
    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            Self::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    /// Returns the feature collection if the document is a feature collection.
    pub fn as_feature_collection(&self) -> Option<&FeatureCollection> {
        match self {
            Self::FeatureCollection(collection) => Some(collection),
            _ => None,
        }
    }
}

impl FromStr for GeoJson {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Validator::default().validate_str(s)
    }
}
