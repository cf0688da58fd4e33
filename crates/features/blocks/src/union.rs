/// Declares a closed union of [`Typed`](crate::Typed) models discriminated by
/// their `type` field.
///
/// The `in CONTAINER` form additionally asserts, at compile time, that every
/// variant declares the container in its [`Element::CONTAINERS`](crate::Element).
///
/// Serialization is transparent. Deserialization reads `type` first and only
/// then decodes the matching variant, so errors name the offending field of the
/// right element instead of a generic "no variant matched".
macro_rules! typed_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $container:path {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(
            const _: () = assert!(
                <$ty as $crate::Element>::CONTAINERS.contains($container),
                concat!("`", stringify!($ty), "` cannot be placed in `", stringify!($name), "`"),
            );
        )+

        $crate::union::typed_union! {
            $(#[$meta])*
            $vis enum $name {
                $( $(#[$vmeta])* $variant($ty) ),+
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl $name {
            /// Every `type` value this union accepts.
            pub const TYPES: &'static [&'static str] = &[ $( <$ty as $crate::Typed>::TYPE ),+ ];

            /// Returns the `type` discriminant of the wrapped model.
            #[must_use]
            pub const fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$ty as $crate::Typed>::TYPE, )+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::Error as _;

                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let kind = value
                    .get("type")
                    .and_then(::serde_json::Value::as_str)
                    .ok_or_else(|| D::Error::missing_field("type"))?
                    .to_owned();

                $(
                    if kind == <$ty as $crate::Typed>::TYPE {
                        return ::serde_json::from_value::<$ty>(value)
                            .map(Self::$variant)
                            .map_err(D::Error::custom);
                    }
                )+

                Err(D::Error::unknown_variant(&kind, Self::TYPES))
            }
        }

        impl $crate::validate::Validate for $name {
            fn validate_into(&self, validator: &mut $crate::validate::Validator<'_>) {
                match self {
                    $( Self::$variant(inner) => inner.validate_into(validator), )+
                }
            }
        }
    };
}

pub(crate) use typed_union;
