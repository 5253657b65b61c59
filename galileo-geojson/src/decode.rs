//! Validation of untyped JSON values into the typed objects of the crate.
//!
//! Every validated type implements [`FromGeoJson`]. Container objects pass a [`Context`] down to their
//! members, which tracks how deep the current value is nested and stops the recursion once the
//! limit configured in the [`Validator`](crate::Validator) is reached.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{FoundTag, Result, ValidationError, ValidationReason};
use crate::object_type::{GeoJsonObjectType, ObjectTypeSet};
use crate::validator::Validator;

/// State of the recursive descent into a GeoJSON value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Context {
    depth: usize,
    max_depth: usize,
}

impl Context {
    /// Context of the validation root.
    pub fn root(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Number of container objects enclosing the current value.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum number of nested container objects.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the context for the members of a container object.
    ///
    /// Fails with [`ValidationReason::DepthExceeded`] if the container is nested too deep.
    pub fn nested(self) -> Result<Self> {
        if self.depth >= self.max_depth {
            log::debug!(
                "GeoJSON value is nested deeper than {} levels",
                self.max_depth
            );
            return Err(ValidationError::new(ValidationReason::DepthExceeded {
                limit: self.max_depth,
            }));
        }

        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

/// Types that can be validated from an untyped JSON value.
///
/// Implemented by all GeoJSON objects, coordinate types and property shapes of the crate. `Option<T>`
/// accepts `null` in addition to everything `T` accepts, which is how nullable slots (like the
/// geometry of a [`Feature`](crate::Feature)) are declared.
pub trait FromGeoJson: Sized {
    /// Validates the value in the given context.
    fn from_geojson(value: &Value, context: Context) -> Result<Self>;

    /// Validates the value with the default [`Validator`].
    fn from_value(value: &Value) -> Result<Self> {
        Validator::default().validate(value)
    }

    /// Parses and validates JSON text with the default [`Validator`].
    fn from_json_str(text: &str) -> Result<Self> {
        Validator::default().validate_str(text)
    }
}

impl<T: FromGeoJson> FromGeoJson for Option<T> {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_geojson(value, context).map(Some),
        }
    }
}

impl FromGeoJson for f64 {
    fn from_geojson(value: &Value, _context: Context) -> Result<Self> {
        number(value)
    }
}

impl<T: FromGeoJson> FromGeoJson for Vec<T> {
    fn from_geojson(value: &Value, context: Context) -> Result<Self> {
        array(value)?
            .iter()
            .enumerate()
            .map(|(index, element)| {
                T::from_geojson(element, context).map_err(|err| err.in_element(index))
            })
            .collect()
    }
}

/// Name of the JSON type of the value, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn wrong_shape(expected: &'static str, value: &Value) -> ValidationError {
    ValidationError::new(ValidationReason::WrongShape {
        expected,
        found: json_kind(value).to_string(),
    })
}

pub(crate) fn object(value: &Value) -> Result<&Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        Value::Null => Err(ValidationError::new(ValidationReason::NullNotAllowed)),
        other => Err(wrong_shape("object", other)),
    }
}

pub(crate) fn array(value: &Value) -> Result<&Vec<Value>> {
    match value {
        Value::Array(array) => Ok(array),
        other => Err(wrong_shape("array", other)),
    }
}

pub(crate) fn number(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| wrong_shape("number", value))
}

/// Reads an array of numbers.
pub(crate) fn numbers(value: &Value) -> Result<Vec<f64>> {
    // Numbers carry no nested containers, so the depth is irrelevant here.
    Vec::<f64>::from_geojson(value, Context::root(0))
}

/// Presence of an object member. Absent members and members set to `null` are different things in
/// GeoJSON: an absent `bbox` is fine, `"bbox": null` is not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Member<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

impl<'a> Member<'a> {
    pub(crate) fn of(object: &'a Map<String, Value>, name: &str) -> Self {
        match object.get(name) {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Present(value),
        }
    }
}

/// Validates a required member. `null` is passed on to `T`, so nullability is decided by the target
/// type.
pub(crate) fn required<T: FromGeoJson>(
    object: &Map<String, Value>,
    name: &'static str,
    context: Context,
) -> Result<T> {
    let value = object
        .get(name)
        .ok_or_else(|| ValidationError::new(ValidationReason::MissingField(name)))?;
    T::from_geojson(value, context).map_err(|err| err.in_member(name))
}

/// Validates an optional member that must not be `null` when present.
pub(crate) fn optional<T: FromGeoJson>(
    object: &Map<String, Value>,
    name: &'static str,
    context: Context,
) -> Result<Option<T>> {
    match Member::of(object, name) {
        Member::Absent => Ok(None),
        Member::Null => {
            Err(ValidationError::new(ValidationReason::NullNotAllowed).in_member(name))
        }
        Member::Present(value) => T::from_geojson(value, context)
            .map(Some)
            .map_err(|err| err.in_member(name)),
    }
}

/// Reads the `type` member of the object and checks it against the accepted types.
pub(crate) fn object_type(
    object: &Map<String, Value>,
    accepted: ObjectTypeSet,
) -> Result<GeoJsonObjectType> {
    let found = match object.get("type") {
        None => FoundTag::Missing,
        Some(Value::String(tag)) => match tag.parse::<GeoJsonObjectType>() {
            Ok(object_type) if accepted.contains(object_type) => {
                log::trace!("Resolved GeoJSON object of type {object_type} from [{accepted}]");
                return Ok(object_type);
            }
            _ => FoundTag::Tag(tag.clone()),
        },
        Some(other) => FoundTag::NotAString(json_kind(other)),
    };

    Err(ValidationError::new(ValidationReason::DiscriminatorMismatch {
        found,
        expected: accepted,
    })
    .in_member("type"))
}

/// Checks that the value is an object with one of the accepted type tags.
pub(crate) fn tagged_object(
    value: &Value,
    accepted: ObjectTypeSet,
) -> Result<(GeoJsonObjectType, &Map<String, Value>)> {
    let object = object(value)?;
    let object_type = object_type(object, accepted)?;
    Ok((object_type, object))
}

/// Resolves the type of a tagged value. Used by unions declared with
/// [`geojson_union!`](crate::geojson_union).
#[doc(hidden)]
pub fn resolve_object_type(value: &Value, accepted: ObjectTypeSet) -> Result<GeoJsonObjectType> {
    tagged_object(value, accepted).map(|(object_type, _)| object_type)
}

#[doc(hidden)]
pub fn unmatched_object_type(
    object_type: GeoJsonObjectType,
    accepted: ObjectTypeSet,
) -> ValidationError {
    ValidationError::new(ValidationReason::DiscriminatorMismatch {
        found: FoundTag::Tag(object_type.as_str().to_string()),
        expected: accepted,
    })
    .in_member("type")
}

/// Deserializes a JSON value and validates it. Backs the `Deserialize` implementations of the crate.
#[doc(hidden)]
pub fn deserialize_validated<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromGeoJson,
{
    let value = Value::deserialize(deserializer)?;
    T::from_value(&value).map_err(serde::de::Error::custom)
}

macro_rules! impl_deserialize_validated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error> {
                    $crate::decode::deserialize_validated(deserializer)
                }
            }
        )+
    };
}

pub(crate) use impl_deserialize_validated;
