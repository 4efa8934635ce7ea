//! Build-wide options, optionally read from a `typeforge.toml` file.
//!
//! ```toml
//! nullable_by_default = false
//! date_scalar_mode = "iso"
//! ```

use crate::error::SchemaResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use typeforge_types::ScalarType;

/// Which scalar the `date` primitive resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateScalarMode {
    /// ISO 8601 strings (`DateTimeISO`).
    #[default]
    Iso,
    /// Milliseconds since the Unix epoch (`Timestamp`).
    Timestamp,
}

impl DateScalarMode {
    #[must_use]
    pub const fn scalar(self) -> ScalarType {
        match self {
            Self::Iso => ScalarType::DATE_TIME_ISO,
            Self::Timestamp => ScalarType::TIMESTAMP,
        }
    }
}

/// Options shared by every declaration in one schema build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Whether fields with unset nullability are nullable.
    #[serde(default)]
    pub nullable_by_default: bool,
    #[serde(default)]
    pub date_scalar_mode: DateScalarMode,
}

impl BuildConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> SchemaResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads a config file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No build config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            nullable_by_default = config.nullable_by_default,
            date_scalar_mode = ?config.date_scalar_mode,
            "Loaded build config from {:?}",
            path
        );
        Ok(config)
    }
}
