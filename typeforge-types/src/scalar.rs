use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A leaf type of the schema with no internal field structure.
///
/// Two scalars are the same scalar when their names match; the description
/// is documentation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarType {
    name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Cow<'static, str>>,
}

impl ScalarType {
    pub const STRING: Self = Self::builtin("String", "UTF-8 character sequence.");
    pub const BOOLEAN: Self = Self::builtin("Boolean", "`true` or `false`.");
    pub const FLOAT: Self = Self::builtin("Float", "Signed double-precision fractional value.");
    pub const INT: Self = Self::builtin("Int", "Signed 32-bit integer.");
    pub const ID: Self = Self::builtin("ID", "Unique identifier, serialized as a string.");
    pub const DATE_TIME_ISO: Self = Self::builtin(
        "DateTimeISO",
        "Date-time string in simplified extended ISO 8601 format, UTC.",
    );
    pub const TIMESTAMP: Self = Self::builtin(
        "Timestamp",
        "Date-time as the number of milliseconds since the Unix epoch.",
    );

    const fn builtin(name: &'static str, description: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Some(Cow::Borrowed(description)),
        }
    }

    /// Creates a custom scalar type.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ScalarType {}

impl Hash for ScalarType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
