//! Flat border options
//!
//! Hosts describe a bubble border with a flat set of named options, the way
//! view attributes are usually declared:
//!
//! ```toml
//! outer_border_width = 4
//! outer_border_color = "#202020"
//! main_border_width = 3
//! main_border_color = "#4080ff"
//! inner_border_width = 2
//! arrow_width = 24
//! arrow_height = 24
//! arrow_edge = "bottom"
//! inner_padding = 4.0
//! ```
//!
//! Every option is optional. camelCase spellings (`outerBorderWidth`, ...)
//! are accepted as aliases.

use std::fs;
use std::path::Path;

use bubble_core::Color;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::model::{
    ArrowConfig, BorderConfig, NotchEdge, RingConfig, DEFAULT_ARROW_SIZE, DEFAULT_EDGE_OFFSET,
    DEFAULT_INNER_PADDING,
};

/// Border options as read from configuration, before validation
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderOptions {
    #[serde(default, alias = "outerBorderWidth")]
    pub outer_border_width: f32,
    #[serde(default, alias = "outerBorderColor")]
    pub outer_border_color: Option<String>,

    #[serde(default, alias = "mainBorderWidth")]
    pub main_border_width: f32,
    #[serde(default, alias = "mainBorderColor")]
    pub main_border_color: Option<String>,

    #[serde(default, alias = "innerBorderWidth")]
    pub inner_border_width: f32,
    #[serde(default, alias = "innerBorderColor")]
    pub inner_border_color: Option<String>,

    #[serde(default = "default_arrow_size", alias = "arrowWidth")]
    pub arrow_width: f32,
    #[serde(default = "default_arrow_size", alias = "arrowHeight")]
    pub arrow_height: f32,
    #[serde(default = "default_edge_offset", alias = "arrowEdgeOffset")]
    pub arrow_edge_offset: f32,
    #[serde(default, alias = "arrowEdge")]
    pub arrow_edge: NotchEdge,

    #[serde(default = "default_inner_padding", alias = "innerPadding")]
    pub inner_padding: f32,
}

fn default_arrow_size() -> f32 {
    DEFAULT_ARROW_SIZE
}

fn default_edge_offset() -> f32 {
    DEFAULT_EDGE_OFFSET
}

fn default_inner_padding() -> f32 {
    DEFAULT_INNER_PADDING
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            outer_border_width: 0.0,
            outer_border_color: None,
            main_border_width: 0.0,
            main_border_color: None,
            inner_border_width: 0.0,
            inner_border_color: None,
            arrow_width: default_arrow_size(),
            arrow_height: default_arrow_size(),
            arrow_edge_offset: default_edge_offset(),
            arrow_edge: NotchEdge::default(),
            inner_padding: default_inner_padding(),
        }
    }
}

impl BorderOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Resolve colors and validate, producing the outer/main/inner config
    pub fn into_config(self) -> Result<BorderConfig> {
        let outer = RingConfig::new(
            self.outer_border_width,
            resolve_color(
                "outer_border_color",
                self.outer_border_color.as_deref(),
                Color::TRANSPARENT,
            )?,
        );
        let main = RingConfig::new(
            self.main_border_width,
            resolve_color(
                "main_border_color",
                self.main_border_color.as_deref(),
                Color::TRANSPARENT,
            )?,
        );
        let inner = RingConfig::new(
            self.inner_border_width,
            resolve_color(
                "inner_border_color",
                self.inner_border_color.as_deref(),
                Color::GRAY,
            )?,
        );

        let config = BorderConfig::three(outer, main, inner)
            .with_arrow(
                ArrowConfig::new(self.arrow_width, self.arrow_height)
                    .with_edge_offset(self.arrow_edge_offset)
                    .with_edge(self.arrow_edge),
            )
            .with_inner_padding(self.inner_padding);

        config.validate()?;
        Ok(config)
    }
}

fn resolve_color(option: &'static str, value: Option<&str>, default: Color) -> Result<Color> {
    match value {
        None => Ok(default),
        Some(value) => parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
            option,
            value: value.to_string(),
        }),
    }
}

/// Parse a hex color (`#RGB`, `#RRGGBB`, `#RRGGBBAA`) or a basic color name
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#') {
        return Color::from_hex_str(s);
    }

    match s.to_ascii_lowercase().as_str() {
        "transparent" => Some(Color::TRANSPARENT),
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "gray" | "grey" => Some(Color::GRAY),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        _ => None,
    }
}
