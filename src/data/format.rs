//! The data format tag selected with `-f/--format`.

use std::fmt;
use std::str::FromStr;

use crate::core::error::TemplaterError;

/// How the data file is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Json,
    Yaml,
}

impl DataFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = TemplaterError;

    /// Parse a format name, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(TemplaterError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}
