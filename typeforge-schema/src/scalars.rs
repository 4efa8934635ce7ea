//! Scalar resolution.
//!
//! A bare type is a scalar when it already is one, when the build registered
//! a scalar for it, or when it is one of the built-in primitives. Anything
//! else is a composite type and resolves to `None`.

use crate::config::DateScalarMode;
use tracing::trace;
use typeforge_types::{PrimitiveKind, ScalarType, TypeKey, TypeRef};

/// One registered `source type → scalar` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarMapping {
    pub source: TypeRef,
    pub scalar: ScalarType,
}

/// Scalars registered by the schema build, looked up by source type identity.
///
/// Lookups return the first matching registration.
#[derive(Debug, Clone, Default)]
pub struct ScalarRegistry {
    mappings: Vec<ScalarMapping>,
}

impl ScalarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the host type identified by `source` to `scalar`.
    pub fn register(&mut self, source: TypeKey, scalar: ScalarType) -> &mut Self {
        self.mappings.push(ScalarMapping {
            source: TypeRef::Custom(source),
            scalar,
        });
        self
    }

    /// Overrides the built-in scalar of a primitive.
    pub fn register_primitive(&mut self, source: PrimitiveKind, scalar: ScalarType) -> &mut Self {
        self.mappings.push(ScalarMapping {
            source: TypeRef::Primitive(source),
            scalar,
        });
        self
    }

    /// Returns the scalar registered for `source`, if any.
    pub fn find(&self, source: &TypeRef) -> Option<&ScalarType> {
        self.mappings
            .iter()
            .find(|mapping| &mapping.source == source)
            .map(|mapping| &mapping.scalar)
    }

    pub fn mappings(&self) -> &[ScalarMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl FromIterator<ScalarMapping> for ScalarRegistry {
    fn from_iter<I: IntoIterator<Item = ScalarMapping>>(iter: I) -> Self {
        Self {
            mappings: iter.into_iter().collect(),
        }
    }
}

/// Resolves `ty` to its scalar type, or `None` for composite types.
pub fn resolve_scalar(
    registry: &ScalarRegistry,
    date_mode: DateScalarMode,
    ty: &TypeRef,
) -> Option<ScalarType> {
    if let TypeRef::Scalar(scalar) = ty {
        return Some(scalar.clone());
    }

    if let Some(scalar) = registry.find(ty) {
        trace!(source = %ty, scalar = %scalar, "Resolved registered scalar");
        return Some(scalar.clone());
    }

    match ty {
        TypeRef::Primitive(PrimitiveKind::Text) => Some(ScalarType::STRING),
        TypeRef::Primitive(PrimitiveKind::Boolean) => Some(ScalarType::BOOLEAN),
        TypeRef::Primitive(PrimitiveKind::Number) => Some(ScalarType::FLOAT),
        TypeRef::Primitive(PrimitiveKind::Date) => Some(date_mode.scalar()),
        TypeRef::Custom(_) | TypeRef::Scalar(_) => None,
    }
}
