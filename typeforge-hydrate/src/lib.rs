//! Request-time hydration of raw data into typed instances.
//!
//! Incoming arguments arrive as untyped [`Value`]s. [`hydrate`] turns field
//! mappings into instances of the declared target type:
//! - scalars, primitives and already typed instances pass through untouched
//! - lists are hydrated element by element
//! - everything else is obtained from an optional [`Container`] or built by
//!   the factory registered in the [`TypeRegistry`], then the raw fields are
//!   assigned onto it through [`Object::assign`]
//!
//! Container lookup failures never reach the caller; the hydrator falls back
//! to default construction.

mod container;
mod hydrator;
mod object;
mod registry;
mod value;

pub use container::{Container, LookupFailure, ResolverData};
pub use hydrator::{Hydrator, hydrate};
pub use object::Object;
pub use registry::{Factory, ObjectType, TypeRegistry};
pub use value::Value;
