//! Error types for schema building.

use thiserror::Error;
use typeforge_types::Nullable;

/// Result type for schema building operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while building schema types.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Item nullability was requested on a declaration that is not a list.
    #[error(
        "wrong nullable option set for {owner}#{field}: \
         nullable '{nullable}' cannot be combined with a non-list type"
    )]
    WrongNullableListOption {
        owner: String,
        field: String,
        nullable: Nullable,
    },

    /// Build config file could not be read.
    #[error("failed to read build config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Build config file is not valid TOML for [`BuildConfig`](crate::BuildConfig).
    #[error("failed to parse build config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
