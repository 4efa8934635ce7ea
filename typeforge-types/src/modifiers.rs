//! Declared type modifiers: list nesting and nullability.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nullability requested by a field declaration.
///
/// Serialized the way declarations spell it: `false`, `true`, `"items"` or
/// `"itemsAndList"`, with `null`/absent meaning [`Nullable::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "NullableRepr", into = "NullableRepr")]
pub enum Nullable {
    /// Nothing declared; the build-wide default applies.
    #[default]
    Unset,
    /// `nullable: false`
    No,
    /// `nullable: true`
    Yes,
    /// Only list items may be null. Requires a list type.
    Items,
    /// Both the items and the list itself may be null. Requires a list type.
    ItemsAndList,
}

impl Nullable {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether the option targets list items, which only makes sense on lists.
    #[must_use]
    pub const fn targets_items(&self) -> bool {
        matches!(self, Self::Items | Self::ItemsAndList)
    }
}

impl From<bool> for Nullable {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unset => "unset",
            Self::No => "false",
            Self::Yes => "true",
            Self::Items => "items",
            Self::ItemsAndList => "itemsAndList",
        })
    }
}

impl FromStr for Nullable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "unset" => Ok(Self::Unset),
            "false" => Ok(Self::No),
            "true" => Ok(Self::Yes),
            "items" => Ok(Self::Items),
            "itemsAndList" => Ok(Self::ItemsAndList),
            other => Err(Error::InvalidNullable(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NullableRepr {
    Flag(bool),
    Mode(NullableMode),
    Unset,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum NullableMode {
    Items,
    ItemsAndList,
}

impl From<NullableRepr> for Nullable {
    fn from(repr: NullableRepr) -> Self {
        match repr {
            NullableRepr::Flag(flag) => flag.into(),
            NullableRepr::Mode(NullableMode::Items) => Self::Items,
            NullableRepr::Mode(NullableMode::ItemsAndList) => Self::ItemsAndList,
            NullableRepr::Unset => Self::Unset,
        }
    }
}

impl From<Nullable> for NullableRepr {
    fn from(nullable: Nullable) -> Self {
        match nullable {
            Nullable::Unset => Self::Unset,
            Nullable::No => Self::Flag(false),
            Nullable::Yes => Self::Flag(true),
            Nullable::Items => Self::Mode(NullableMode::Items),
            Nullable::ItemsAndList => Self::Mode(NullableMode::ItemsAndList),
        }
    }
}

/// Modifiers declared for a single field, argument or return type.
///
/// `array_depth` is only meaningful when `array` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeModifiers {
    pub array: bool,
    pub array_depth: usize,
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub nullable: Nullable,
}

impl TypeModifiers {
    /// A plain, non-list declaration with unset nullability.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            array: false,
            array_depth: 0,
            nullable: Nullable::Unset,
        }
    }

    /// A list declaration nested `depth` levels deep (`[[T]]` has depth 2).
    #[must_use]
    pub const fn list(depth: usize) -> Self {
        Self {
            array: true,
            array_depth: depth,
            nullable: Nullable::Unset,
        }
    }

    /// Returns a copy with the given nullability.
    #[must_use]
    pub fn nullable(self, nullable: impl Into<Nullable>) -> Self {
        Self {
            nullable: nullable.into(),
            ..self
        }
    }
}
