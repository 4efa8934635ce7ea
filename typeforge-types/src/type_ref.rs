//! References to bare declared types.
//!
//! Host types are identified by [`TypeKey`], which compares by
//! [`std::any::TypeId`] so two keys are equal only when they name the very
//! same Rust type.

use crate::ScalarType;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a host type: its `TypeId` plus a display name.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for `T`, named after the last path segment of its type name.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(std::any::type_name::<T>()),
        }
    }

    /// Key for `T` with an explicit schema name.
    #[must_use]
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this key identifies `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Built-in primitive markers a declaration may use as its bare type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Text,
    Boolean,
    Number,
    Date,
}

impl PrimitiveKind {
    /// Host-facing name of the primitive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Date => "Date",
        }
    }
}

/// A reference to a bare (unwrapped) type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// One of the built-in primitive markers.
    Primitive(PrimitiveKind),
    /// A composite host type, or a custom type mapped to a scalar.
    Custom(TypeKey),
    /// A scalar that has already been resolved.
    Scalar(ScalarType),
}

impl TypeRef {
    /// Reference to the host type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Custom(TypeKey::of::<T>())
    }

    #[must_use]
    pub const fn text() -> Self {
        Self::Primitive(PrimitiveKind::Text)
    }

    #[must_use]
    pub const fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    #[must_use]
    pub const fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    #[must_use]
    pub const fn date() -> Self {
        Self::Primitive(PrimitiveKind::Date)
    }

    /// Returns true if this reference is an already resolved scalar.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns the host type key for custom references.
    #[must_use]
    pub const fn key(&self) -> Option<&TypeKey> {
        match self {
            Self::Custom(key) => Some(key),
            _ => None,
        }
    }

    /// Name used when rendering the reference in a schema.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.name(),
            Self::Custom(key) => key.name(),
            Self::Scalar(scalar) => scalar.name(),
        }
    }
}

impl From<ScalarType> for TypeRef {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<TypeKey> for TypeRef {
    fn from(key: TypeKey) -> Self {
        Self::Custom(key)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
