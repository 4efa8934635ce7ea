//! Raw and hydrated request data.

use crate::object::Object;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value as JsonValue};

/// Data passed through the hydrator: raw input on the way in, typed instances
/// on the way out.
#[derive(Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    DateTime(DateTime<Utc>),
    List(Vec<Value>),
    /// An untyped field mapping awaiting hydration.
    Fields(Map<String, JsonValue>),
    /// A typed instance.
    Object(Box<dyn Object>),
}

impl Value {
    /// Wraps a typed instance.
    pub fn object(instance: impl Object) -> Self {
        Self::Object(Box::new(instance))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is a primitive that is never hydrated.
    pub const fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Number(_) | Self::String(_) | Self::DateTime(_)
        )
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&Map<String, JsonValue>> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Borrows the instance if it is a `T`.
    pub fn as_object<T: Object>(&self) -> Option<&T> {
        match self {
            Self::Object(instance) => instance.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Takes the instance out if it is a `T`.
    pub fn into_object<T: Object>(self) -> Option<Box<T>> {
        match self {
            Self::Object(instance) => {
                let any: Box<dyn std::any::Any> = instance;
                any.downcast::<T>().ok()
            }
            _ => None,
        }
    }

    /// Renders the value as JSON. Instances render their exported fields.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => JsonValue::Number(n.clone()),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::DateTime(dt) => {
                JsonValue::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Fields(fields) => JsonValue::Object(fields.clone()),
            Self::Object(instance) => JsonValue::Object(instance.fields()),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(fields) => Self::Fields(fields),
        }
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Box<dyn Object>> for Value {
    fn from(instance: Box<dyn Object>) -> Self {
        Self::Object(instance)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}
