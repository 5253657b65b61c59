//! See [`Validator`].

use serde_json::Value;

use crate::decode::{Context, FromGeoJson};
use crate::error::{Result, ValidationError, ValidationReason};

/// Default value for [`Validator::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Entry point of validation with configurable limits.
///
/// ```
/// use galileo_geojson::{GeoJson, Validator};
///
/// let validator = Validator::new().with_max_depth(4);
/// let geojson: GeoJson = validator.validate_str(r#"{"type": "Point", "coordinates": [1, 2]}"#)?;
/// # Ok::<(), galileo_geojson::ValidationError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Validator {
    max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Validator {
    /// Creates a validator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of nested container objects (feature collections, features and
    /// geometry collections). Values nested deeper fail with [`ValidationReason::DepthExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Maximum number of nested container objects.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validates an untyped JSON value as `T`.
    pub fn validate<T: FromGeoJson>(&self, value: &Value) -> Result<T> {
        T::from_geojson(value, Context::root(self.max_depth)).map_err(|err| {
            log::debug!("GeoJSON validation failed: {err}");
            err
        })
    }

    /// Parses JSON text and validates it as `T`.
    pub fn validate_str<T: FromGeoJson>(&self, text: &str) -> Result<T> {
        let value: Value = serde_json::from_str(text).map_err(|err| {
            log::debug!("Failed to parse GeoJSON text: {err}");
            ValidationError::new(ValidationReason::Syntax(err.to_string()))
        })?;
        self.validate(&value)
    }
}
