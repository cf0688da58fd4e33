//! Container capabilities.
//!
//! Each element declares the set of containers that may legally hold it. The
//! model crate checks these declarations against its per-container unions at
//! compile time, so the flags and the type system cannot drift apart.

use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Containers an element may be placed in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Containers: u8 {
        /// The `accessory` slot of a section block.
        const SECTION = 1 << 0;
        /// The `elements` list of an actions block.
        const ACTIONS = 1 << 1;
        /// The `element` slot of an input block.
        const INPUT = 1 << 2;
        /// The `elements` list of a context block.
        const CONTEXT = 1 << 3;

        const INTERACTIVE = Self::SECTION.bits() | Self::ACTIONS.bits() | Self::INPUT.bits();
    }
}

const NAMED: [(Containers, &str); 4] = [
    (Containers::SECTION, "section"),
    (Containers::ACTIONS, "actions"),
    (Containers::INPUT, "input"),
    (Containers::CONTEXT, "context"),
];

impl Containers {
    /// Lowercase names of the individual containers in this set.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        NAMED.into_iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, name)| name).collect()
    }

    /// Looks up a single container by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED.into_iter().find(|(_, known)| *known == name).map(|(flag, _)| flag)
    }
}

impl fmt::Display for Containers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

// --- Serde ---

/// Encoded as the list of container names, e.g. `["section", "actions"]`.
impl Serialize for Containers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Containers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ContainersVisitor)
    }
}

struct ContainersVisitor;

impl<'de> Visitor<'de> for ContainersVisitor {
    type Value = Containers;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of container names")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = Containers::empty();
        while let Some(name) = seq.next_element::<String>()? {
            let flag = Containers::from_name(&name).ok_or_else(|| {
                de::Error::unknown_variant(&name, &["section", "actions", "input", "context"])
            })?;
            set |= flag;
        }
        Ok(set)
    }
}
