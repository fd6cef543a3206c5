//! Border configuration model
//!
//! Plain value types describing the rings and the arrow. Nothing here
//! computes geometry; [`BorderConfig::validate`] is the single gate every
//! configuration passes before the engine accepts it.

use bubble_core::{Brush, Color, LineJoin, Stroke};
use serde::Deserialize;
use smallvec::{smallvec, SmallVec};

use crate::error::{ArrowDimension, ConfigError, Result};

/// Default arrow width and height in device-independent units
pub const DEFAULT_ARROW_SIZE: f32 = 24.0;

/// Default distance of the arrow's trailing side from the end of its edge
pub const DEFAULT_EDGE_OFFSET: f32 = 100.0;

/// Default space between the innermost ring and the content
pub const DEFAULT_INNER_PADDING: f32 = 4.0;

// =============================================================================
// Rings
// =============================================================================

/// One border ring
///
/// A ring with zero width is disabled: it produces no outline and does not
/// push the rings inside it inward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    /// Stroke width, also the ring's contribution to the cumulative inset
    pub width: f32,
    /// Stroke color
    pub color: Color,
}

impl RingConfig {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// A ring that draws nothing and takes no space
    pub const fn disabled() -> Self {
        Self::new(0.0, Color::TRANSPARENT)
    }

    pub fn is_enabled(&self) -> bool {
        self.width > 0.0
    }

    /// Stroke style used to draw this ring's outline
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width).with_join(LineJoin::Miter)
    }

    pub fn brush(&self) -> Brush {
        Brush::Solid(self.color)
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Arrow
// =============================================================================

/// The box edge that carries the notch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotchEdge {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl NotchEdge {
    /// Whether the edge runs horizontally (top or bottom)
    pub fn is_horizontal(self) -> bool {
        matches!(self, NotchEdge::Top | NotchEdge::Bottom)
    }
}

/// Arrow (notch) dimensions and placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowConfig {
    /// Base width of the outermost notch
    pub width: f32,
    /// Depth of the outermost notch, measured outward from the ring edge
    pub height: f32,
    /// Distance between the notch's trailing side and the far end of its
    /// edge (the right end for top/bottom edges, the bottom end for
    /// left/right edges)
    pub edge_offset: f32,
    /// Edge the notch sits on
    pub edge: NotchEdge,
}

impl ArrowConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_edge_offset(mut self, offset: f32) -> Self {
        self.edge_offset = offset;
        self
    }

    pub fn with_edge(mut self, edge: NotchEdge) -> Self {
        self.edge = edge;
        self
    }
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARROW_SIZE,
            height: DEFAULT_ARROW_SIZE,
            edge_offset: DEFAULT_EDGE_OFFSET,
            edge: NotchEdge::Bottom,
        }
    }
}

// =============================================================================
// Full configuration
// =============================================================================

/// Complete border configuration: rings ordered outer to inner, the arrow,
/// and the padding reserved around the content
#[derive(Clone, Debug, PartialEq)]
pub struct BorderConfig {
    pub rings: SmallVec<[RingConfig; 3]>,
    pub arrow: ArrowConfig,
    pub inner_padding: f32,
}

impl BorderConfig {
    /// Three disabled rings, default arrow and padding
    pub fn new() -> Self {
        Self::three(
            RingConfig::disabled(),
            RingConfig::disabled(),
            RingConfig::disabled(),
        )
    }

    /// The usual outer/main/inner ring set
    pub fn three(outer: RingConfig, main: RingConfig, inner: RingConfig) -> Self {
        Self {
            rings: smallvec![outer, main, inner],
            arrow: ArrowConfig::default(),
            inner_padding: DEFAULT_INNER_PADDING,
        }
    }

    /// Replace the ring list (outer to inner)
    pub fn with_rings(mut self, rings: impl IntoIterator<Item = RingConfig>) -> Self {
        self.rings = rings.into_iter().collect();
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowConfig) -> Self {
        self.arrow = arrow;
        self
    }

    pub fn with_inner_padding(mut self, padding: f32) -> Self {
        self.inner_padding = padding;
        self
    }

    /// Rings that produce an outline, with their index in the ring list
    pub fn enabled_rings(&self) -> impl Iterator<Item = (usize, &RingConfig)> + '_ {
        self.rings
            .iter()
            .enumerate()
            .filter(|(_, ring)| ring.is_enabled())
    }

    /// Sum of all enabled ring widths
    pub fn border_thickness(&self) -> f32 {
        self.enabled_rings().map(|(_, ring)| ring.width).sum()
    }

    /// Check every width, the arrow and the padding
    pub fn validate(&self) -> Result<()> {
        for (ring, config) in self.rings.iter().enumerate() {
            if !config.width.is_finite() || config.width < 0.0 {
                return Err(ConfigError::NegativeWidth {
                    ring,
                    width: config.width,
                });
            }
        }

        let arrow = &self.arrow;
        for (dimension, value) in [
            (ArrowDimension::Width, arrow.width),
            (ArrowDimension::Height, arrow.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveArrow { dimension, value });
            }
        }

        if !arrow.edge_offset.is_finite() || arrow.edge_offset < 0.0 {
            return Err(ConfigError::NegativeEdgeOffset(arrow.edge_offset));
        }

        if !self.inner_padding.is_finite() || self.inner_padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.inner_padding));
        }

        Ok(())
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BorderConfig::default();
        assert_eq!(config.rings.len(), 3);
        assert!(config.rings.iter().all(|r| !r.is_enabled()));
        assert_eq!(config.arrow.width, 24.0);
        assert_eq!(config.arrow.height, 24.0);
        assert_eq!(config.arrow.edge_offset, 100.0);
        assert_eq!(config.arrow.edge, NotchEdge::Bottom);
        assert_eq!(config.inner_padding, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_border_thickness_skips_disabled() {
        let config = BorderConfig::three(
            RingConfig::new(4.0, Color::BLACK),
            RingConfig::disabled(),
            RingConfig::new(2.0, Color::GRAY),
        );
        assert_eq!(config.border_thickness(), 6.0);
        let indices: Vec<usize> = config.enabled_rings().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_negative_width_rejected() {
        let config = BorderConfig::three(
            RingConfig::new(4.0, Color::BLACK),
            RingConfig::new(-1.0, Color::BLACK),
            RingConfig::disabled(),
        );
        match config.validate() {
            Err(ConfigError::NegativeWidth { ring, width }) => {
                assert_eq!(ring, 1);
                assert_eq!(width, -1.0);
            }
            other => panic!("expected NegativeWidth, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_width_rejected() {
        let config = BorderConfig::new().with_rings([RingConfig::new(f32::NAN, Color::BLACK)]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeWidth { ring: 0, .. })
        ));
    }

    #[test]
    fn test_non_positive_arrow_rejected() {
        let zero_width = BorderConfig::new().with_arrow(ArrowConfig::new(0.0, 24.0));
        assert!(matches!(
            zero_width.validate(),
            Err(ConfigError::NonPositiveArrow {
                dimension: ArrowDimension::Width,
                ..
            })
        ));

        let negative_height = BorderConfig::new().with_arrow(ArrowConfig::new(24.0, -3.0));
        assert!(matches!(
            negative_height.validate(),
            Err(ConfigError::NonPositiveArrow {
                dimension: ArrowDimension::Height,
                ..
            })
        ));
    }

    #[test]
    fn test_padding_and_offset_rejected() {
        let padding = BorderConfig::new().with_inner_padding(-0.5);
        assert!(matches!(
            padding.validate(),
            Err(ConfigError::NegativePadding(_))
        ));

        let offset = BorderConfig::new().with_arrow(ArrowConfig::default().with_edge_offset(-1.0));
        assert!(matches!(
            offset.validate(),
            Err(ConfigError::NegativeEdgeOffset(_))
        ));
    }

    #[test]
    fn test_ring_stroke_matches_width() {
        let ring = RingConfig::new(3.0, Color::RED);
        assert_eq!(ring.stroke().width, 3.0);
        assert_eq!(ring.stroke().join, LineJoin::Miter);
        assert_eq!(ring.brush(), Brush::Solid(Color::RED));
    }
}
