/// Declares a closed union of GeoJSON object types, resolved by the `type` member of the input.
///
/// Every variant holds exactly one type implementing [`TaggedObject`](crate::TaggedObject). The
/// generated enum derives `Debug`, `Clone` and `PartialEq`, and implements
/// [`FromGeoJson`](crate::FromGeoJson), [`GeoJsonObject`](crate::GeoJsonObject),
/// [`TaggedObject`](crate::TaggedObject), `serde::Serialize`, `serde::Deserialize` and `From` for
/// each variant type.
///
/// When validating, the `type` tag of the input is checked against the tags of all variants. Values
/// with any other tag fail with
/// [`ValidationReason::DiscriminatorMismatch`](crate::ValidationReason::DiscriminatorMismatch). If
/// several variants accept the same tag, the first one declared wins.
///
/// ```
/// use galileo_geojson::{geojson_union, FromGeoJson, LineString, Polygon, ValidationReason};
/// use serde_json::json;
///
/// geojson_union! {
///     /// Geometries that have a length.
///     pub enum Linear {
///         LineString(LineString),
///         Polygon(Polygon),
///     }
/// }
///
/// let value = json!({"type": "LineString", "coordinates": [[1, 2], [3, 4]]});
/// assert!(matches!(Linear::from_value(&value)?, Linear::LineString(_)));
///
/// let value = json!({"type": "Point", "coordinates": [1, 2]});
/// let err = Linear::from_value(&value).unwrap_err();
/// assert!(matches!(err.reason(), ValidationReason::DiscriminatorMismatch { .. }));
/// # Ok::<(), galileo_geojson::ValidationError>(())
/// ```
#[macro_export]
macro_rules! geojson_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $crate::GeoJsonObject for $name {
            fn object_type(&self) -> $crate::GeoJsonObjectType {
                match self {
                    $(Self::$variant(value) => $crate::GeoJsonObject::object_type(value),)+
                }
            }

            fn bbox(&self) -> ::core::option::Option<&$crate::BoundingBox> {
                match self {
                    $(Self::$variant(value) => $crate::GeoJsonObject::bbox(value),)+
                }
            }
        }

        impl $crate::TaggedObject for $name {
            const OBJECT_TYPES: $crate::ObjectTypeSet = $crate::ObjectTypeSet::EMPTY
                $(.union(<$ty as $crate::TaggedObject>::OBJECT_TYPES))+;
        }

        impl $crate::FromGeoJson for $name {
            fn from_geojson(
                value: &$crate::__private::Value,
                context: $crate::Context,
            ) -> $crate::Result<Self> {
                let accepted = <Self as $crate::TaggedObject>::OBJECT_TYPES;
                let object_type = $crate::__private::resolve_object_type(value, accepted)?;

                $(
                    if <$ty as $crate::TaggedObject>::OBJECT_TYPES.contains(object_type) {
                        return <$ty as $crate::FromGeoJson>::from_geojson(value, context)
                            .map(Self::$variant);
                    }
                )+

                Err($crate::__private::unmatched_object_type(object_type, accepted))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(value) => $crate::__private::serde::Serialize::serialize(value, serializer),)+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                $crate::__private::deserialize_validated(deserializer)
            }
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}
