use crate::config::BuildConfig;
use crate::error::SchemaResult;
use crate::scalars::{ScalarRegistry, resolve_scalar};
use crate::wrap::wrap_type;
use tracing::debug;
use typeforge_types::{ScalarType, TypeModifiers, TypeRef, WrappedType};

/// Build configuration plus the scalar registry it is used with.
///
/// Read-only once assembled; share it behind an `Arc` if several builders
/// need it.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub config: BuildConfig,
    pub scalars: ScalarRegistry,
}

impl BuildContext {
    pub fn new(config: BuildConfig, scalars: ScalarRegistry) -> Self {
        Self { config, scalars }
    }

    /// Resolves `ty` to a scalar using this build's registry and date mode.
    pub fn resolve_scalar(&self, ty: &TypeRef) -> Option<ScalarType> {
        resolve_scalar(&self.scalars, self.config.date_scalar_mode, ty)
    }

    /// Wraps an already resolved type with the build's nullability default.
    pub fn wrap(
        &self,
        owner: &str,
        field: &str,
        ty: WrappedType,
        modifiers: &TypeModifiers,
    ) -> SchemaResult<WrappedType> {
        wrap_type(owner, field, ty, modifiers, self.config.nullable_by_default)
    }

    /// Resolves and wraps the declared type of `owner`'s `field`.
    ///
    /// Composite types stay as named leaves.
    pub fn field_type(
        &self,
        owner: &str,
        field: &str,
        declared: &TypeRef,
        modifiers: &TypeModifiers,
    ) -> SchemaResult<WrappedType> {
        let leaf = match self.resolve_scalar(declared) {
            Some(scalar) => TypeRef::Scalar(scalar),
            None => declared.clone(),
        };
        let wrapped = self.wrap(owner, field, WrappedType::Named(leaf), modifiers)?;
        debug!(owner, field, ty = %wrapped, "Resolved field type");
        Ok(wrapped)
    }
}
