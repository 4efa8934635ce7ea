use crate::container::{Container, ResolverData};
use crate::object::Object;
use crate::registry::TypeRegistry;
use crate::value::Value;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typeforge_types::{TypeKey, TypeRef};

/// Converts `data` into a value of `target`.
///
/// - `Null` is returned as is; no default instance is synthesized.
/// - Scalar and primitive targets, and primitive data, pass through.
/// - Data that already is an instance of `target` passes through.
/// - Lists are hydrated element by element, keeping order.
/// - Field mappings (or instances of another type) become a `target`
///   instance: taken from `container` when both `container` and
///   `resolver_data` are given and the lookup succeeds, otherwise built by
///   the registered factory; then every field is assigned onto it.
///
/// When no instance can be obtained at all (no container hit and no factory
/// registered) the data is returned unhydrated. So is an instance of another
/// type that exports no fields.
pub fn hydrate(
    registry: &TypeRegistry,
    target: &TypeRef,
    data: Value,
    container: Option<&dyn Container>,
    resolver_data: Option<&ResolverData>,
) -> Value {
    if data.is_null() {
        return data;
    }
    let key = match target {
        TypeRef::Custom(key) => key,
        TypeRef::Scalar(_) | TypeRef::Primitive(_) => return data,
    };
    if data.is_simple() {
        return data;
    }

    match data {
        Value::Object(instance) if instance.is_instance_of(key) => Value::Object(instance),
        Value::List(items) => Value::List(
            items
                .into_iter()
                .map(|item| hydrate(registry, target, item, container, resolver_data))
                .collect(),
        ),
        Value::Fields(fields) => match obtain_instance(registry, key, container, resolver_data) {
            Some(instance) => Value::Object(merge_fields(instance, fields)),
            None => Value::Fields(fields),
        },
        Value::Object(other) => {
            let fields = other.fields();
            if fields.is_empty() {
                warn!(target_type = %key, "Instance exports no fields, leaving it unhydrated");
                return Value::Object(other);
            }
            match obtain_instance(registry, key, container, resolver_data) {
                Some(instance) => Value::Object(merge_fields(instance, fields)),
                None => Value::Object(other),
            }
        }
        other => other,
    }
}

fn obtain_instance(
    registry: &TypeRegistry,
    key: &TypeKey,
    container: Option<&dyn Container>,
    resolver_data: Option<&ResolverData>,
) -> Option<Box<dyn Object>> {
    if let (Some(container), Some(resolver_data)) = (container, resolver_data) {
        match container.get_instance(key, resolver_data) {
            Ok(instance) => {
                trace!(target_type = %key, "Using container instance");
                return Some(instance);
            }
            Err(e) => {
                debug!(target_type = %key, error = %e, "Container miss, constructing default instance");
            }
        }
    }

    match registry.get(key) {
        Some(object_type) => Some(object_type.construct()),
        None => {
            warn!(target_type = %key, "No factory registered, leaving data unhydrated");
            None
        }
    }
}

fn merge_fields(mut instance: Box<dyn Object>, fields: Map<String, JsonValue>) -> Box<dyn Object> {
    for (field, value) in fields {
        instance.assign(&field, value);
    }
    instance
}

/// A [`hydrate`] front end owning its registry and optional container.
///
/// Cheap to clone and safe to share across request threads.
#[derive(Clone, Default)]
pub struct Hydrator {
    registry: Arc<TypeRegistry>,
    container: Option<Arc<dyn Container>>,
}

impl Hydrator {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            container: None,
        }
    }

    /// Consults `container` before falling back to the registry's factories.
    #[must_use]
    pub fn with_container(mut self, container: Arc<dyn Container>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn hydrate(
        &self,
        target: &TypeRef,
        data: Value,
        resolver_data: Option<&ResolverData>,
    ) -> Value {
        hydrate(
            &self.registry,
            target,
            data,
            self.container.as_deref(),
            resolver_data,
        )
    }

    /// Hydrates raw JSON input.
    pub fn hydrate_json(
        &self,
        target: &TypeRef,
        data: JsonValue,
        resolver_data: Option<&ResolverData>,
    ) -> Value {
        self.hydrate(target, Value::from(data), resolver_data)
    }
}

impl fmt::Debug for Hydrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hydrator")
            .field("registry", &self.registry)
            .field("container", &self.container.is_some())
            .finish()
    }
}
