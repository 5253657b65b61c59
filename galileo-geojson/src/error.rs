//! Error type used by the crate.
//!
//! Every failure is reported as a [`ValidationError`]: the [`JsonPath`] from the validation root to the
//! offending value and the [`ValidationReason`] describing the violated constraint.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::object_type::ObjectTypeSet;
use crate::position::Axis;

/// Result type of all validating operations of the crate.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Failed validation of a GeoJSON value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {reason}")]
pub struct ValidationError {
    path: JsonPath,
    reason: ValidationReason,
}

impl ValidationError {
    /// Creates a new error located at the validation root.
    pub fn new(reason: ValidationReason) -> Self {
        Self {
            path: JsonPath::default(),
            reason,
        }
    }

    /// Location of the offending value.
    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// The violated constraint.
    pub fn reason(&self) -> &ValidationReason {
        &self.reason
    }

    /// Consumes the error, returning the violated constraint.
    pub fn into_reason(self) -> ValidationReason {
        self.reason
    }

    pub(crate) fn in_member(mut self, name: &'static str) -> Self {
        self.path.0.push_front(PathSegment::Member(name));
        self
    }

    pub(crate) fn in_element(mut self, index: usize) -> Self {
        self.path.0.push_front(PathSegment::Element(index));
        self
    }
}

impl From<ValidationReason> for ValidationError {
    fn from(reason: ValidationReason) -> Self {
        Self::new(reason)
    }
}

/// Constraint violated by an invalid value.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationReason {
    /// A position or a bounding box has a wrong number of components.
    #[error("expected {expected} numbers, found {found}")]
    WrongArity {
        /// Accepted lengths.
        expected: &'static str,
        /// Actual length.
        found: usize,
    },
    /// A longitude or latitude is outside of its range or is not finite.
    #[error("{axis} {value} is outside of [{min}, {max}]")]
    OutOfRange {
        /// Axis of the value.
        axis: Axis,
        /// The rejected value.
        value: f64,
        /// Lower bound of the axis.
        min: f64,
        /// Upper bound of the axis.
        max: f64,
    },
    /// The first and the last positions of a linear ring differ.
    #[error("linear ring is not closed")]
    NotClosed,
    /// A linear ring or a line string has too few positions.
    #[error("expected at least {min} positions, found {found}")]
    TooShort {
        /// Minimum number of positions.
        min: usize,
        /// Actual number of positions.
        found: usize,
    },
    /// The `type` member is absent, not a string, or names a type that is not accepted here.
    #[error("expected `type` to be one of [{expected}], found {found}")]
    DiscriminatorMismatch {
        /// What was found in place of the type tag.
        found: FoundTag,
        /// Object types accepted at this position.
        expected: ObjectTypeSet,
    },
    /// A member is present with a `null` value where null is not permitted.
    #[error("null is not allowed here")]
    NullNotAllowed,
    /// A value has the wrong JSON type or does not match the declared shape.
    #[error("expected {expected}, found {found}")]
    WrongShape {
        /// Description of the expected shape.
        expected: &'static str,
        /// Description of the found value.
        found: String,
    },
    /// A value is well-formed GeoJSON but outside of the bound declared by the caller.
    #[error("{0}")]
    BoundViolation(String),
    /// A required member is absent.
    #[error("missing required member `{0}`")]
    MissingField(&'static str),
    /// A bounding box has a minimum corner value greater than the maximum corner value.
    #[error("bounding box minimum {min} is greater than maximum {max} on axis {axis}")]
    InvertedBounds {
        /// Index of the axis inside a position.
        axis: usize,
        /// Minimum corner value.
        min: f64,
        /// Maximum corner value.
        max: f64,
    },
    /// Container objects are nested deeper than the validator allows.
    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },
    /// Input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(String),
}

/// Value found in place of a `type` tag. See [`ValidationReason::DiscriminatorMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoundTag {
    /// The object has no `type` member.
    Missing,
    /// The `type` member is not a string. Contains the JSON type of the member.
    NotAString(&'static str),
    /// The `type` member is a string.
    Tag(String),
}

impl Display for FoundTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FoundTag::Missing => write!(f, "no `type` member"),
            FoundTag::NotAString(kind) => write!(f, "{kind}"),
            FoundTag::Tag(tag) => write!(f, "{tag:?}"),
        }
    }
}

/// Location of a value inside a GeoJSON document.
///
/// Displayed in the JSONPath notation, e.g. `$.features[2].geometry.coordinates[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPath(VecDeque<PathSegment>);

impl JsonPath {
    /// Returns true if the path points to the validation root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the path segments starting from the root.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.0.iter()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Member(name) => write!(f, ".{name}")?,
                PathSegment::Element(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

/// Single step of a [`JsonPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Member of an object.
    Member(&'static str),
    /// Element of an array.
    Element(usize),
}
