//! Schema-build-time type resolution for typeforge.
//!
//! Turns declared types into the types published in the schema:
//! - [`ScalarRegistry`] / [`resolve_scalar`]: maps a bare [`TypeRef`] to its scalar, if any
//! - [`wrap_type`]: applies list depth and nullability modifiers
//! - [`enum_values_of`]: extracts the symbolic name → value map of an enum-like object
//! - [`BuildConfig`] / [`BuildContext`]: build-wide options and the registry they travel with
//!
//! These functions run once per declaration while the schema is assembled.
//! Nothing here is consulted at request time.
//!
//! [`TypeRef`]: typeforge_types::TypeRef

mod config;
mod context;
mod enums;
mod error;
mod scalars;
mod wrap;

pub use config::{BuildConfig, DateScalarMode};
pub use context::BuildContext;
pub use enums::{enum_values_of, enum_values_of_pairs};
pub use error::{SchemaError, SchemaResult};
pub use scalars::{ScalarMapping, ScalarRegistry, resolve_scalar};
pub use wrap::wrap_type;
