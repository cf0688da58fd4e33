use bkit_domain::capability::Containers;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A model with a constant Block Kit `type` discriminant.
pub trait Typed {
    const TYPE: &'static str;
}

/// A typed model that may be placed inside container blocks.
///
/// `CONTAINERS` is checked at compile time against the per-container unions
/// in [`crate::elements`], so a declaration can never disagree with what the
/// type system actually allows.
pub trait Element: Typed {
    const CONTAINERS: Containers;
}

/// The `type` field of a [`Typed`] model.
///
/// Zero-sized: it always serializes as `T::TYPE` and only deserializes from that
/// exact string, so a payload tagged for a different element is rejected instead
/// of being silently reinterpreted. Callers can neither set nor change it.
pub struct Tag<T> {
    _kind: PhantomData<fn() -> T>,
}

impl<T> Tag<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<T: Typed> Tag<T> {
    /// Returns the discriminant string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        T::TYPE
    }
}

impl<T> Default for Tag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Tag<T> {}

impl<T> PartialEq for Tag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Tag<T> {}

impl<T> Hash for Tag<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T: Typed> fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&T::TYPE).finish()
    }
}

impl<T: Typed> Serialize for Tag<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(T::TYPE)
    }
}

impl<'de, T: Typed> Deserialize<'de> for Tag<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TagVisitor(PhantomData))
    }
}

struct TagVisitor<T>(PhantomData<fn() -> T>);

impl<T: Typed> Visitor<'_> for TagVisitor<T> {
    type Value = Tag<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the type discriminant `{}`", T::TYPE)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value == T::TYPE {
            Ok(Tag::new())
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Typed for Probe {
        const TYPE: &'static str = "probe";
    }

    #[test]
    fn serializes_as_constant() {
        let json = serde_json::to_string(&Tag::<Probe>::new()).expect("serialize tag");
        assert_eq!(json, "\"probe\"");
        assert_eq!(Tag::<Probe>::new().as_str(), "probe");
    }

    #[test]
    fn rejects_other_discriminants() {
        assert!(serde_json::from_str::<Tag<Probe>>("\"probe\"").is_ok());

        let err = serde_json::from_str::<Tag<Probe>>("\"button\"").expect_err("wrong tag");
        assert!(err.to_string().contains("the type discriminant `probe`"), "{err}");
    }
}
