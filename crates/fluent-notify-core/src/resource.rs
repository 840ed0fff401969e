//! Resource identifiers, the resource table abstraction and the fallback
//! resolver.
//!
//! A [`ResourceTable`] is the external, read-only store that maps a
//! `(semantic kind, resource id)` pair to a concrete value. The library
//! never writes to it; fields consult it only when they were never set
//! directly. [`MapResourceTable`] is the in-memory implementation used in
//! tests and headless hosts.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::logging::targets;

/// Opaque handle into a [`ResourceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle to an image resource.
///
/// The library never decodes images; hosts map the handle back to whatever
/// their platform uses for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub u64);

/// Closed set of semantic type tags used to pick a resolution strategy.
///
/// `Color` and `Sound` are declared but have no resolver yet; asking for
/// them yields [`Error::UnsupportedResourceType`]. Adding a kind means
/// adding a variant, a [`resolve_kind`] arm and a [`FromResource`] impl,
/// all checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticKind {
    /// Human-readable text.
    Text,
    /// Integer values (ids, request codes, counts).
    Integer,
    /// Image handles (icons).
    Image,
    /// Color values. No resolver registered yet.
    Color,
    /// Sound references. No resolver registered yet.
    Sound,
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Image => "image",
            Self::Color => "color",
            Self::Sound => "sound",
        };
        f.write_str(name)
    }
}

/// A concrete value produced by resource resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    /// Resolved text.
    Text(String),
    /// Resolved integer.
    Integer(i64),
    /// Resolved image handle.
    Image(ImageRef),
}

/// Read-only store mapping resource ids to concrete values.
///
/// Each accessor returns `None` when the id is unknown for that kind; an
/// unknown id behaves like "no fallback configured" from the field's point
/// of view.
pub trait ResourceTable {
    /// Look up a text resource.
    fn text(&self, id: ResourceId) -> Option<String>;

    /// Look up an integer resource.
    fn integer(&self, id: ResourceId) -> Option<i64>;

    /// Look up an image resource.
    fn image(&self, id: ResourceId) -> Option<ImageRef>;
}

/// Resolve a resource id for a semantic kind against a table.
///
/// This is the explicit resolver table: one arm per supported kind. Kinds
/// without an arm fail with [`Error::UnsupportedResourceType`], which must
/// surface to the caller rather than silently defaulting.
pub fn resolve_kind(
    table: &dyn ResourceTable,
    kind: SemanticKind,
    id: ResourceId,
) -> Result<Option<ResourceValue>> {
    let value = match kind {
        SemanticKind::Text => table.text(id).map(ResourceValue::Text),
        SemanticKind::Integer => table.integer(id).map(ResourceValue::Integer),
        SemanticKind::Image => table.image(id).map(ResourceValue::Image),
        SemanticKind::Color | SemanticKind::Sound => {
            return Err(Error::UnsupportedResourceType { kind });
        }
    };
    tracing::trace!(
        target: targets::RESOURCE,
        %kind,
        %id,
        found = value.is_some(),
        "resolved resource"
    );
    Ok(value)
}

/// Types that can be produced by resource resolution.
///
/// Binds a Rust type to its [`SemanticKind`] so a [`crate::Field`] knows
/// which resolver to consult for its fallback id.
pub trait FromResource: Sized {
    /// The semantic kind resolved for this type.
    const KIND: SemanticKind;

    /// Extract the typed value from a resolved [`ResourceValue`].
    ///
    /// Returns `None` when the value cannot be represented (e.g. an integer
    /// resource that overflows the target type).
    fn from_value(value: ResourceValue) -> Option<Self>;
}

impl FromResource for String {
    const KIND: SemanticKind = SemanticKind::Text;

    fn from_value(value: ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl FromResource for i64 {
    const KIND: SemanticKind = SemanticKind::Integer;

    fn from_value(value: ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Integer(n) => Some(n),
            _ => None,
        }
    }
}

impl FromResource for i32 {
    const KIND: SemanticKind = SemanticKind::Integer;

    fn from_value(value: ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Integer(n) => n.try_into().ok(),
            _ => None,
        }
    }
}

impl FromResource for u32 {
    const KIND: SemanticKind = SemanticKind::Integer;

    fn from_value(value: ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Integer(n) => n.try_into().ok(),
            _ => None,
        }
    }
}

impl FromResource for ImageRef {
    const KIND: SemanticKind = SemanticKind::Image;

    fn from_value(value: ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// In-memory [`ResourceTable`] backed by hash maps.
///
/// The stand-in for a platform resource bundle: tests and headless hosts
/// populate it up front and hand it to the builders.
#[derive(Debug, Clone, Default)]
pub struct MapResourceTable {
    texts: HashMap<ResourceId, String>,
    integers: HashMap<ResourceId, i64>,
    images: HashMap<ResourceId, ImageRef>,
}

impl MapResourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text resource, consuming and returning the table.
    pub fn with_text(mut self, id: ResourceId, text: impl Into<String>) -> Self {
        self.texts.insert(id, text.into());
        self
    }

    /// Add an integer resource, consuming and returning the table.
    pub fn with_integer(mut self, id: ResourceId, value: i64) -> Self {
        self.integers.insert(id, value);
        self
    }

    /// Add an image resource, consuming and returning the table.
    pub fn with_image(mut self, id: ResourceId, image: ImageRef) -> Self {
        self.images.insert(id, image);
        self
    }
}

impl ResourceTable for MapResourceTable {
    fn text(&self, id: ResourceId) -> Option<String> {
        self.texts.get(&id).cloned()
    }

    fn integer(&self, id: ResourceId) -> Option<i64> {
        self.integers.get(&id).copied()
    }

    fn image(&self, id: ResourceId) -> Option<ImageRef> {
        self.images.get(&id).copied()
    }
}
