//! Vertex identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier of a graph vertex.
///
/// Vertices are named by short strings ("A", "B", ...) or small integers.
/// Integers are stored in their decimal spelling, so `VertexId::from(3usize)`
/// and `VertexId::from("3")` are the same vertex. Cloning is a reference
/// count bump.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Creates a vertex identifier from a name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for VertexId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for VertexId {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self::from(id.to_string())
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self::from(id.to_string())
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VertexId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Accept bare integers too: `{"from": 0, "to": 1}` is common in hand-written input.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Index(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Self::from(name),
            Raw::Index(index) => Self::from(index.to_string()),
        })
    }
}
