//! Error types for bubble_border

use std::fmt;
use std::io;

use thiserror::Error;

/// Which arrow dimension a validation error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDimension {
    Width,
    Height,
}

impl fmt::Display for ArrowDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrowDimension::Width => f.write_str("width"),
            ArrowDimension::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while applying a border configuration
///
/// A configuration that fails validation is rejected as a whole; the engine
/// never computes geometry from it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A ring width is negative or not a finite number
    #[error("ring {ring} has invalid width {width} (must be a finite value >= 0)")]
    NegativeWidth { ring: usize, width: f32 },

    /// An arrow dimension is zero, negative or not a finite number
    #[error("arrow {dimension} must be a finite value > 0, got {value}")]
    NonPositiveArrow {
        dimension: ArrowDimension,
        value: f32,
    },

    /// Inner padding is negative or not a finite number
    #[error("inner padding must be a finite value >= 0, got {0}")]
    NegativePadding(f32),

    /// Arrow edge offset is negative or not a finite number
    #[error("arrow edge offset must be a finite value >= 0, got {0}")]
    NegativeEdgeOffset(f32),

    /// A color option could not be parsed
    #[error("option `{option}` has unrecognized color {value:?}")]
    InvalidColor { option: &'static str, value: String },

    /// The options document is malformed
    #[error("failed to parse border options: {0}")]
    Parse(String),

    /// IO error when reading an options file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result type for bubble_border operations
pub type Result<T> = std::result::Result<T, ConfigError>;
