//! The dependency-injection container seam.

use crate::object::Object;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use typeforge_types::TypeKey;

/// Request context handed to the container for contextual resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverData {
    /// Parent value of the field being resolved.
    #[serde(default)]
    pub root: JsonValue,
    /// Raw field arguments.
    #[serde(default)]
    pub args: Map<String, JsonValue>,
    /// Per-request context (auth, request ids, ...).
    #[serde(default)]
    pub context: JsonValue,
}

impl ResolverData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(mut self, root: JsonValue) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: Map<String, JsonValue>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: JsonValue) -> Self {
        self.context = context;
        self
    }
}

/// Why a container could not provide an instance.
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error("type '{0}' is not registered in the container")]
    NotRegistered(String),

    #[error("container lookup failed: {0}")]
    Failed(String),
}

/// An external service container that may hold managed instances.
pub trait Container: Send + Sync {
    /// Returns the managed instance of `target` for this request.
    fn get_instance(
        &self,
        target: &TypeKey,
        resolver_data: &ResolverData,
    ) -> Result<Box<dyn Object>, LookupFailure>;
}

impl<F> Container for F
where
    F: Fn(&TypeKey, &ResolverData) -> Result<Box<dyn Object>, LookupFailure> + Send + Sync,
{
    fn get_instance(
        &self,
        target: &TypeKey,
        resolver_data: &ResolverData,
    ) -> Result<Box<dyn Object>, LookupFailure> {
        self(target, resolver_data)
    }
}
