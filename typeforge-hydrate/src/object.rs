use serde_json::{Map, Value as JsonValue};
use std::any::{Any, TypeId};
use std::fmt;
use typeforge_types::TypeKey;

/// An instance the hydrator can create and fill.
///
/// Implemented by every host type registered as a hydration target.
pub trait Object: Any + Send + Sync + fmt::Debug {
    /// Sets `field` to `value`, replacing any previous value.
    ///
    /// Unknown fields and values of the wrong shape are the implementor's
    /// call; the hydrator never fails on them.
    fn assign(&mut self, field: &str, value: JsonValue);

    /// Exports the instance's fields.
    ///
    /// Read when this instance is hydrated into some other type. An instance
    /// exporting nothing is never converted.
    fn fields(&self) -> Map<String, JsonValue>;
}

impl dyn Object {
    /// `TypeId` of the concrete type behind the trait object.
    pub fn concrete_type_id(&self) -> TypeId {
        let any: &dyn Any = self;
        any.type_id()
    }

    /// Whether this instance is of the type identified by `key`.
    pub fn is_instance_of(&self, key: &TypeKey) -> bool {
        self.concrete_type_id() == key.id()
    }

    pub fn is<T: Object>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}
