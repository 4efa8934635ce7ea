//! Factories for the object types the hydrator may construct.

use crate::object::Object;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use typeforge_types::{TypeKey, TypeRef};

/// Builds a fresh default instance of a registered type.
pub type Factory = Arc<dyn Fn() -> Box<dyn Object> + Send + Sync>;

/// A hydration target: a type identity and how to construct it.
#[derive(Clone)]
pub struct ObjectType {
    key: TypeKey,
    factory: Factory,
}

impl ObjectType {
    /// Object type for `T`, constructed through `T::default()`.
    pub fn of<T: Object + Default>() -> Self {
        Self::with_factory(TypeKey::of::<T>(), || -> Box<dyn Object> {
            Box::new(T::default())
        })
    }

    /// Object type with a custom factory. The factory must build instances
    /// of the type `key` identifies.
    pub fn with_factory<F>(key: TypeKey, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Object> + Send + Sync + 'static,
    {
        Self {
            key,
            factory: Arc::new(factory),
        }
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Custom(self.key)
    }

    /// Builds a new default instance.
    pub fn construct(&self) -> Box<dyn Object> {
        (self.factory)()
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Object types keyed by identity, supplied by the schema build.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<TypeKey, ObjectType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty`, replacing an earlier registration for the same key.
    pub fn register(&mut self, ty: ObjectType) -> &mut Self {
        let key = ty.key;
        if self.types.insert(key, ty).is_some() {
            warn!(object_type = %key, "Replaced existing object type registration");
        } else {
            debug!(object_type = %key, "Registered object type");
        }
        self
    }

    /// Shorthand for `register(ObjectType::of::<T>())`.
    pub fn register_type<T: Object + Default>(&mut self) -> &mut Self {
        self.register(ObjectType::of::<T>())
    }

    pub fn get(&self, key: &TypeKey) -> Option<&ObjectType> {
        self.types.get(key)
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
