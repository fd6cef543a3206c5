//! Border engine
//!
//! Orchestrates the ring outline builder across the configured rings,
//! outer to inner, threading the cumulative inset from one ring into the
//! next, and derives the total box size the host should reserve.
//!
//! The engine only ever holds a validated [`BorderConfig`]; every query is a
//! pure function of that configuration and its arguments.
//!
//! # Example
//!
//! ```
//! use bubble_border::{BorderConfig, BorderEngine, RingConfig};
//! use bubble_core::{Color, Size};
//!
//! let engine = BorderEngine::new(BorderConfig::three(
//!     RingConfig::new(4.0, Color::BLACK),
//!     RingConfig::new(3.0, Color::BLUE),
//!     RingConfig::new(2.0, Color::GRAY),
//! ))
//! .unwrap();
//!
//! let total = engine.compute_total_size(Size::new(200.0, 100.0));
//! assert_eq!(total, Size::new(226.0, 150.0));
//!
//! let rings = engine.build_outlines(total);
//! assert_eq!(rings.len(), 3);
//! ```

use bubble_core::{Brush, Rect, Size, Stroke};

use crate::edge::EdgeFrame;
use crate::error::Result;
use crate::model::{BorderConfig, RingConfig};
use crate::ring::{build_ring_outline, RingOutline, RingPlacement};

/// An outline paired with the ring that strokes it
#[derive(Clone, Debug, PartialEq)]
pub struct RingStroke {
    pub outline: RingOutline,
    pub ring: RingConfig,
}

impl RingStroke {
    pub fn stroke(&self) -> Stroke {
        self.ring.stroke()
    }

    pub fn brush(&self) -> Brush {
        self.ring.brush()
    }
}

/// Everything a draw pass needs: ordered outlines and the content area
#[derive(Clone, Debug, PartialEq)]
pub struct BorderLayout {
    pub box_size: Size,
    pub rings: Vec<RingStroke>,
    pub content_rect: Rect,
}

/// Computes ring outlines and sizes for a validated border configuration
#[derive(Clone, Debug)]
pub struct BorderEngine {
    config: BorderConfig,
}

impl BorderEngine {
    /// Validate `config` and build an engine over it
    pub fn new(config: BorderConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::debug!(error = %err, "rejected border configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// The previous configuration stays in effect when `config` is invalid.
    pub fn apply_config(&mut self, config: BorderConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Total thickness of all enabled rings plus the inner padding, on each
    /// side of the content
    fn side_allowance(&self) -> f32 {
        self.config.border_thickness() + self.config.inner_padding
    }

    /// Box size needed to hold content of `content` size
    ///
    /// Adds the rings and padding on every side, plus the arrow height across
    /// the notch edge.
    pub fn compute_total_size(&self, content: Size) -> Size {
        let content = content.non_negative();
        let allowance = 2.0 * self.side_allowance();
        let framed = Size::new(content.width + allowance, content.height + allowance);
        let arrow = &self.config.arrow;
        let total = EdgeFrame::add_arrow(arrow.edge, framed, arrow.height);

        tracing::debug!(
            content_width = content.width,
            content_height = content.height,
            total_width = total.width,
            total_height = total.height,
            "measured bubble border"
        );

        total
    }

    /// Outlines for every enabled ring, outer to inner
    ///
    /// `box_size` should be the size returned by [`Self::compute_total_size`]
    /// or the final laid-out size.
    pub fn build_outlines(&self, box_size: Size) -> Vec<RingStroke> {
        let box_size = box_size.non_negative();
        let mut outer_thickness = 0.0;
        let mut notch_allowed = true;
        let mut rings = Vec::with_capacity(self.config.rings.len());

        for (index, ring) in self.config.rings.iter().enumerate() {
            if !ring.is_enabled() {
                tracing::trace!(ring = index, "skipping disabled ring");
                continue;
            }

            let placement = RingPlacement::new(index, outer_thickness, ring)
                .with_notch_allowed(notch_allowed);
            outer_thickness = placement.inset;

            let outline = build_ring_outline(placement, box_size, &self.config.arrow);
            // Once a ring is a plain rectangle every ring inside it must be too
            notch_allowed = outline.has_notch();

            rings.push(RingStroke {
                outline,
                ring: *ring,
            });
        }

        rings
    }

    /// Area left for content inside the innermost enabled ring and the padding
    pub fn content_rect(&self, box_size: Size) -> Rect {
        let box_size = box_size.non_negative();
        let arrow = &self.config.arrow;
        let frame = EdgeFrame::new(arrow.edge, box_size);
        let canvas = frame.canonical_size();
        let allowance = self.side_allowance();

        let left = allowance;
        let top = allowance;
        let right = (canvas.width - allowance).max(left);
        let bottom = (canvas.height - arrow.height - allowance).max(top);

        frame.rect_to_box(Rect::from_ltrb(left, top, right, bottom))
    }

    /// Outlines and content area for one draw pass
    pub fn layout(&self, box_size: Size) -> BorderLayout {
        BorderLayout {
            box_size,
            rings: self.build_outlines(box_size),
            content_rect: self.content_rect(box_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::model::{ArrowConfig, NotchEdge};
    use bubble_core::{Color, Point};

    fn reference_config() -> BorderConfig {
        BorderConfig::three(
            RingConfig::new(4.0, Color::BLACK),
            RingConfig::new(3.0, Color::BLUE),
            RingConfig::new(2.0, Color::GRAY),
        )
    }

    fn engine(config: BorderConfig) -> BorderEngine {
        BorderEngine::new(config).unwrap()
    }

    #[test]
    fn test_reference_total_size() {
        let total = engine(reference_config()).compute_total_size(Size::new(200.0, 100.0));
        assert_eq!(total, Size::new(226.0, 150.0));
    }

    #[test]
    fn test_reference_outlines() {
        let engine = engine(reference_config());
        let rings = engine.build_outlines(Size::new(226.0, 150.0));

        let insets: Vec<f32> = rings.iter().map(|r| r.outline.inset()).collect();
        assert_eq!(insets, vec![4.0, 7.0, 9.0]);

        let bases: Vec<f32> = rings
            .iter()
            .map(|r| r.outline.notch().unwrap().base_width())
            .collect();
        assert_eq!(bases, vec![24.0, 20.0, 17.0]);

        let indices: Vec<usize> = rings.iter().map(|r| r.outline.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(rings[1].ring.color, Color::BLUE);
        assert_eq!(rings[2].stroke().width, 2.0);
    }

    #[test]
    fn test_rings_strictly_nested() {
        let rings = engine(reference_config()).build_outlines(Size::new(226.0, 150.0));

        for pair in rings.windows(2) {
            let (outer, inner) = (&pair[0].outline, &pair[1].outline);
            for vertex in inner.vertices() {
                assert!(
                    outer.contains_point(*vertex),
                    "ring {} vertex {vertex:?} escapes ring {}",
                    inner.index(),
                    outer.index()
                );
            }
            for vertex in outer.vertices() {
                assert!(!inner.contains_point(*vertex));
            }
        }
    }

    #[test]
    fn test_nested_on_every_edge() {
        for edge in [
            NotchEdge::Top,
            NotchEdge::Right,
            NotchEdge::Bottom,
            NotchEdge::Left,
        ] {
            let config = reference_config().with_arrow(
                ArrowConfig::default()
                    .with_edge(edge)
                    .with_edge_offset(20.0),
            );
            let engine = engine(config);
            let total = engine.compute_total_size(Size::new(200.0, 100.0));
            let rings = engine.build_outlines(total);
            assert_eq!(rings.len(), 3);

            for pair in rings.windows(2) {
                assert!(pair[0].outline.has_notch());
                for vertex in pair[1].outline.vertices() {
                    assert!(pair[0].outline.contains_point(*vertex), "{edge:?}");
                }
            }
        }
    }

    #[test]
    fn test_total_size_monotonic() {
        let content = Size::new(200.0, 100.0);
        let base = engine(reference_config()).compute_total_size(content);

        for ring in 0..3 {
            let mut config = reference_config();
            config.rings[ring].width += 1.0;
            let grown = engine(config).compute_total_size(content);
            assert!(grown.width > base.width);
            assert!(grown.height > base.height);
        }

        let taller = reference_config().with_arrow(ArrowConfig::new(24.0, 30.0));
        let grown = engine(taller).compute_total_size(content);
        assert_eq!(grown.width, base.width);
        assert!(grown.height > base.height);
    }

    #[test]
    fn test_disabled_ring_removes_one_layer() {
        let mut config = reference_config();
        config.rings[1] = RingConfig::disabled();
        let rings = engine(config).build_outlines(Size::new(226.0, 150.0));

        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].outline.inset(), 4.0);
        // Main ring width no longer counts toward the inner ring
        assert_eq!(rings[1].outline.index(), 2);
        assert_eq!(rings[1].outline.inset(), 6.0);
        assert_eq!(rings[1].outline.notch().unwrap().base_width(), 20.0);
    }

    #[test]
    fn test_dropped_outer_notch_drops_inner_notches() {
        // Outer notch overshoots the right side by half a unit; the thinner
        // ring inside would fit on its own
        let config = BorderConfig::three(
            RingConfig::new(4.0, Color::BLACK),
            RingConfig::new(1.0, Color::BLUE),
            RingConfig::disabled(),
        )
        .with_arrow(ArrowConfig::default().with_edge_offset(3.5));
        let engine = engine(config);
        let total = engine.compute_total_size(Size::new(200.0, 100.0));
        assert_eq!(total, Size::new(218.0, 142.0));

        let rings = engine.build_outlines(total);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| !r.outline.has_notch()));

        let outer = rings[0].outline.rect();
        assert_eq!(outer, Rect::from_ltrb(4.0, 4.0, 214.0, 114.0));
        for p in rings[1].outline.vertices() {
            assert!(
                p.x > outer.x() && p.x < outer.right() && p.y > outer.y() && p.y < outer.bottom(),
                "{p:?} escapes the outer ring"
            );
        }
    }

    #[test]
    fn test_all_rings_disabled() {
        let engine = engine(BorderConfig::new());
        assert!(engine.build_outlines(Size::new(226.0, 150.0)).is_empty());
        assert_eq!(
            engine.compute_total_size(Size::new(200.0, 100.0)),
            Size::new(208.0, 132.0)
        );

        let unpadded = BorderEngine::new(BorderConfig::new().with_inner_padding(0.0)).unwrap();
        assert_eq!(
            unpadded.compute_total_size(Size::new(200.0, 100.0)),
            Size::new(200.0, 124.0)
        );
    }

    #[test]
    fn test_build_outlines_idempotent() {
        let engine = engine(reference_config());
        let size = Size::new(226.0, 150.0);
        assert_eq!(engine.build_outlines(size), engine.build_outlines(size));
    }

    #[test]
    fn test_content_rect() {
        let engine = engine(reference_config());
        let content = engine.content_rect(Size::new(226.0, 150.0));
        assert_eq!(content, Rect::new(13.0, 13.0, 200.0, 100.0));

        let inner = engine.build_outlines(Size::new(226.0, 150.0));
        let inner_rect = inner.last().unwrap().outline.rect();
        assert_eq!(content.x() - inner_rect.x(), 4.0);
        assert_eq!(inner_rect.right() - content.right(), 4.0);
        assert_eq!(inner_rect.bottom() - content.bottom(), 4.0);
    }

    #[test]
    fn test_content_rect_left_edge() {
        let config = reference_config().with_arrow(ArrowConfig::default().with_edge(NotchEdge::Left));
        let engine = engine(config);
        let total = engine.compute_total_size(Size::new(200.0, 100.0));
        assert_eq!(total, Size::new(250.0, 126.0));
        // Arrow occupies the left side
        assert_eq!(engine.content_rect(total), Rect::new(37.0, 13.0, 200.0, 100.0));
    }

    #[test]
    fn test_content_rect_never_negative() {
        let engine = engine(reference_config());
        let content = engine.content_rect(Size::new(10.0, 10.0));
        assert!(content.width() >= 0.0);
        assert!(content.height() >= 0.0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = reference_config().with_arrow(ArrowConfig::new(0.0, 24.0));
        assert!(matches!(
            BorderEngine::new(bad),
            Err(ConfigError::NonPositiveArrow { .. })
        ));
    }

    #[test]
    fn test_apply_config_keeps_previous_on_error() {
        let mut engine = engine(reference_config());
        let mut bad = reference_config();
        bad.rings[0].width = -2.0;

        assert!(engine.apply_config(bad).is_err());
        assert_eq!(engine.config(), &reference_config());

        engine
            .apply_config(reference_config().with_inner_padding(0.0))
            .unwrap();
        assert_eq!(engine.config().inner_padding, 0.0);
    }

    #[test]
    fn test_layout_bundles_outlines_and_content() {
        let engine = engine(reference_config());
        let layout = engine.layout(Size::new(226.0, 150.0));
        assert_eq!(layout.rings.len(), 3);
        assert_eq!(layout.content_rect, Rect::new(13.0, 13.0, 200.0, 100.0));
        assert!(layout.rings[0].outline.contains_point(Point::new(113.0, 63.0)));
    }

    #[test]
    fn test_configurable_ring_count() {
        let config = reference_config().with_rings([
            RingConfig::new(2.0, Color::BLACK),
            RingConfig::new(2.0, Color::BLACK),
            RingConfig::new(2.0, Color::BLACK),
            RingConfig::new(2.0, Color::BLACK),
        ]);
        let rings = engine(config).build_outlines(Size::new(226.0, 150.0));
        let bases: Vec<f32> = rings
            .iter()
            .map(|r| r.outline.notch().unwrap().base_width())
            .collect();
        assert_eq!(bases, vec![24.0, 22.0, 20.0, 18.0]);
    }
}
