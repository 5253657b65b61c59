//! Shapes of the `properties` member of a feature.
//!
//! * [`Properties`] - any JSON object.
//! * [`Schema<T>`] - JSON object deserialized into a caller defined type.
//! * [`Null`] - only `null`.
//!
//! Wrap the shape into `Option` to also accept `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::decode::{self, Context, FromGeoJson};
use crate::error::{Result, ValidationError, ValidationReason};

/// Open-ended mapping from string keys to arbitrary JSON values.
pub type Properties = Map<String, Value>;

impl FromGeoJson for Properties {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        decode::object(value).cloned()
    }
}

/// Properties with a caller defined structure.
///
/// The value must be a JSON object and is deserialized into `T` with serde. Other JSON values and
/// objects `T` cannot be deserialized from fail with [`ValidationReason::WrongShape`]. `null` fails
/// with [`ValidationReason::NullNotAllowed`], use `Option<Schema<T>>` for nullable properties.
///
/// ```
/// use galileo_geojson::{Feature, FromGeoJson, Point, Schema};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
/// struct City {
///     name: String,
///     population: u64,
/// }
///
/// let feature = Feature::<Point, Schema<City>>::from_value(&json!({
///     "type": "Feature",
///     "geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
///     "properties": {"name": "Berlin", "population": 3850809}
/// }))?;
///
/// assert_eq!(feature.properties().0.name, "Berlin");
/// # Ok::<(), galileo_geojson::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Schema<T>(pub T);

impl<T> Schema<T> {
    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FromGeoJson for Schema<T> {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        decode::object(value)?;

        T::deserialize(value).map(Self).map_err(|err| {
            ValidationError::new(ValidationReason::WrongShape {
                expected: "value matching the properties schema",
                found: err.to_string(),
            })
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Schema<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_validated(deserializer)
    }
}

/// Bound that accepts only `null`.
///
/// Used as the properties shape of features that must not carry properties, or as the geometry bound
/// of features without a location.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl FromGeoJson for Null {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        match value {
            Value::Null => Ok(Null),
            other => Err(ValidationError::new(ValidationReason::BoundViolation(
                format!("expected null, found {}", decode::json_kind(other)),
            ))),
        }
    }
}

impl Serialize for Null {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for Null {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_validated(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn open_properties() {
        let properties = Properties::from_value(&json!({"a": 1, "b": [true, null]})).unwrap();
        assert_eq!(properties.len(), 2);

        let err = Properties::from_value(&json!(123)).unwrap_err();
        assert_matches!(
            err.reason(),
            ValidationReason::WrongShape { expected: "object", found } if found == "number"
        );

        let err = Properties::from_value(&json!(null)).unwrap_err();
        assert_eq!(err.reason(), &ValidationReason::NullNotAllowed);

        assert_eq!(
            Option::<Properties>::from_value(&json!(null)).unwrap(),
            None
        );
    }

    #[test]
    fn schema_properties() {
        let properties = Schema::<Named>::from_value(&json!({"name": "a", "other": 1})).unwrap();
        assert_eq!(properties.into_inner().name, "a");

        let err = Schema::<Named>::from_value(&json!({"title": "a"})).unwrap_err();
        assert_matches!(err.reason(), ValidationReason::WrongShape { .. });

        let err = Schema::<Named>::from_value(&json!(null)).unwrap_err();
        assert_eq!(err.reason(), &ValidationReason::NullNotAllowed);
    }

    #[test]
    fn schema_requires_object() {
        let err = Schema::<Vec<u32>>::from_value(&json!([1, 2])).unwrap_err();
        assert_matches!(
            err.reason(),
            ValidationReason::WrongShape { expected: "object", found } if found == "array"
        );

        let err = Schema::<String>::from_value(&json!("abc")).unwrap_err();
        assert_matches!(
            err.reason(),
            ValidationReason::WrongShape { expected: "object", found } if found == "string"
        );
    }

    #[test]
    fn null_bound() {
        assert_eq!(Null::from_value(&json!(null)), Ok(Null));

        let err = Null::from_value(&json!({})).unwrap_err();
        insta::assert_snapshot!(err, @"$: expected null, found object");
        assert_eq!(serde_json::to_value(Null).unwrap(), Value::Null);
    }
}
