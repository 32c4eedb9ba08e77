//! Structural property identities used as cache keys.
//!
//! A property is identified by its type, its resolved name and its ordered
//! annotations. Map value elements have no name of their own; they are
//! identified by the owning map property and the value type, and carry the
//! entry sequence only as positional information that does not take part in
//! equality or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Where a property sits in the object graph.
#[derive(Debug, Clone)]
pub enum PropertyKind {
    /// An ordinary field, parameter or element.
    Field,
    /// The value side of a map entry.
    MapValue {
        map: Box<PropertyKey>,
        sequence: usize,
    },
}

impl PartialEq for PropertyKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyKind::Field, PropertyKind::Field) => true,
            (PropertyKind::MapValue { map: a, .. }, PropertyKind::MapValue { map: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for PropertyKind {}

impl Hash for PropertyKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PropertyKind::Field => 0u8.hash(state),
            PropertyKind::MapValue { map, .. } => {
                1u8.hash(state);
                map.hash(state);
            }
        }
    }
}

/// Identity of a property for artifact caching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    type_name: String,
    name: Option<String>,
    annotations: Vec<String>,
    kind: PropertyKind,
}

impl PropertyKey {
    /// A named property of `type_name`.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: Some(name.into()),
            annotations: Vec::new(),
            kind: PropertyKind::Field,
        }
    }

    /// An unnamed property, such as a container element.
    pub fn unnamed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: None,
            annotations: Vec::new(),
            kind: PropertyKind::Field,
        }
    }

    /// The value element at `sequence` of the map property `map`.
    pub fn map_value(map: PropertyKey, value_type: impl Into<String>, sequence: usize) -> Self {
        Self {
            type_name: value_type.into(),
            name: None,
            annotations: Vec::new(),
            kind: PropertyKind::MapValue {
                map: Box::new(map),
                sequence,
            },
        }
    }

    /// Appends an annotation. Order is significant for identity.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    /// The entry sequence for map values.
    pub fn sequence(&self) -> Option<usize> {
        match &self.kind {
            PropertyKind::MapValue { sequence, .. } => Some(*sequence),
            PropertyKind::Field => None,
        }
    }

    /// The owning map property for map values.
    pub fn map_property(&self) -> Option<&PropertyKey> {
        match &self.kind {
            PropertyKind::MapValue { map, .. } => Some(map),
            PropertyKind::Field => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "@{} ", annotation)?;
        }
        match (&self.kind, &self.name) {
            (PropertyKind::MapValue { map, sequence }, _) => {
                write!(f, "{}[{}]: {}", map.name().unwrap_or("$"), sequence, self.type_name)
            }
            (PropertyKind::Field, Some(name)) => write!(f, "{}: {}", name, self.type_name),
            (PropertyKind::Field, None) => f.write_str(&self.type_name),
        }
    }
}

/// Identity of the root property of a generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootPropertyKey(PropertyKey);

impl RootPropertyKey {
    /// The root of a generation of `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(PropertyKey::unnamed(type_name))
    }

    pub fn with_annotation(self, annotation: impl Into<String>) -> Self {
        Self(self.0.with_annotation(annotation))
    }

    pub fn property(&self) -> &PropertyKey {
        &self.0
    }
}

impl From<PropertyKey> for RootPropertyKey {
    fn from(property: PropertyKey) -> Self {
        Self(property)
    }
}

impl fmt::Display for RootPropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$: {}", self.0)
    }
}
