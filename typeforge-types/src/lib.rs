//! Core type definitions for typeforge.
//!
//! This crate defines the vocabulary shared by the schema builder and the
//! request-time hydrator:
//! - [`TypeRef`] and [`TypeKey`]: references to bare declared types
//! - [`ScalarType`]: leaf types of the schema (String, Float, DateTimeISO, ...)
//! - [`TypeModifiers`] and [`Nullable`]: list depth and nullability as declared
//! - [`WrappedType`]: the list/non-null tree published in the schema
//!
//! Nothing here performs resolution; see `typeforge-schema` for that.

mod modifiers;
mod scalar;
mod type_ref;
mod wrapped;

pub use modifiers::{Nullable, TypeModifiers};
pub use scalar::ScalarType;
pub use type_ref::{PrimitiveKind, TypeKey, TypeRef};
pub use wrapped::WrappedType;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid nullable option: {0}")]
    InvalidNullable(String),
}
