//! Ring outline builder
//!
//! Turns one ring's position in the stack into a closed, clockwise polygon:
//! the ring's inset rectangle with the notch spliced into its notch edge.
//!
//! ```text
//!  (l,t) ───────────────────────────── (r,t)
//!    │                                   │
//!    │                                   │
//!  (l,b) ──────────── ls      rs ───── (r,b)
//!                       ╲    ╱
//!                        tip
//! ```
//!
//! All arithmetic happens in the canonical bottom-notch frame (see
//! [`crate::edge`]) and is mapped to box coordinates at the end.

use bubble_core::{Path, Point, Rect, Size};
use smallvec::SmallVec;

use crate::edge::EdgeFrame;
use crate::model::{ArrowConfig, RingConfig};
use crate::notch::{NotchBudget, NotchPath};

/// Where a ring sits in the stack
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPlacement {
    /// Index of the ring in the configured ring list
    pub index: usize,
    /// Sum of the widths of enabled rings strictly outside this one
    pub outer_thickness: f32,
    /// Cumulative inset including this ring's own width
    pub inset: f32,
    /// Cleared when a ring outside this one is drawn without its notch
    pub notch_allowed: bool,
}

impl RingPlacement {
    /// Placement of the ring that follows `outer_thickness` worth of rings
    pub fn new(index: usize, outer_thickness: f32, ring: &RingConfig) -> Self {
        Self {
            index,
            outer_thickness,
            inset: outer_thickness + ring.width,
            notch_allowed: true,
        }
    }

    pub fn with_notch_allowed(mut self, allowed: bool) -> Self {
        self.notch_allowed = allowed;
        self
    }
}

/// A notch spliced into an outline, in box coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedNotch {
    pub notch: NotchPath,
    /// Left shoulder, tip, right shoulder as seen in the canonical frame
    pub points: [Point; 3],
}

impl PlacedNotch {
    pub fn tip(&self) -> Point {
        self.points[1]
    }

    pub fn base_width(&self) -> f32 {
        self.notch.base_width()
    }

    pub fn depth(&self) -> f32 {
        self.notch.depth()
    }
}

/// Closed outline of one ring
#[derive(Clone, Debug, PartialEq)]
pub struct RingOutline {
    index: usize,
    inset: f32,
    rect: Rect,
    notch: Option<PlacedNotch>,
    vertices: SmallVec<[Point; 8]>,
}

impl RingOutline {
    /// Index of the ring in the configured ring list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cumulative inset of this ring from the box edge
    pub fn inset(&self) -> f32 {
        self.inset
    }

    /// The ring's rectangle, without the notch
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn notch(&self) -> Option<&PlacedNotch> {
        self.notch.as_ref()
    }

    pub fn has_notch(&self) -> bool {
        self.notch.is_some()
    }

    /// Polygon vertices in clockwise order, without repeating the first
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The outline as a single closed path
    pub fn to_path(&self) -> Path {
        Path::polygon(&self.vertices)
    }

    pub fn bounds(&self) -> Rect {
        self.to_path().bounds()
    }

    /// Even-odd point-in-polygon test
    pub fn contains_point(&self, point: Point) -> bool {
        let vertices = &self.vertices;
        if vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        for (a, b) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Build the outline of one ring inside a box of `box_size`
///
/// Never fails: a box too small for the inset collapses the rectangle onto
/// its centre line, and a notch that has no budget or does not fit on its
/// edge is dropped, leaving a plain rectangle. A placement with
/// `notch_allowed` cleared always gets a plain rectangle, so a notch never
/// pokes through a notchless ring around it.
pub fn build_ring_outline(
    placement: RingPlacement,
    box_size: Size,
    arrow: &ArrowConfig,
) -> RingOutline {
    let frame = EdgeFrame::new(arrow.edge, box_size);
    let canvas = frame.canonical_size();
    let inset = placement.inset;

    let (mut left, mut right) = (inset, canvas.width - inset);
    let (mut top, mut bottom) = (inset, canvas.height - arrow.height - inset);

    let mut clamped = false;
    if right < left {
        let mid = canvas.width / 2.0;
        (left, right) = (mid, mid);
        clamped = true;
    }
    if bottom < top {
        let mid = (canvas.height - arrow.height) / 2.0;
        (top, bottom) = (mid, mid);
        clamped = true;
    }
    if clamped {
        tracing::debug!(
            ring = placement.index,
            inset,
            width = box_size.width,
            height = box_size.height,
            "box too small for ring inset, clamping ring rectangle"
        );
    }

    let budget = NotchBudget::for_ring(arrow, placement.outer_thickness);
    let notch_left =
        canvas.width - arrow.width - arrow.edge_offset + placement.outer_thickness / 2.0;

    let notch = if clamped {
        None
    } else if !placement.notch_allowed {
        tracing::debug!(
            ring = placement.index,
            "enclosing ring has no notch, drawing plain rectangle"
        );
        None
    } else {
        NotchPath::build(budget).filter(|notch| {
            let fits = notch_left >= left && notch_left + notch.base_width() <= right;
            if !fits {
                tracing::debug!(
                    ring = placement.index,
                    notch_left,
                    base_width = notch.base_width(),
                    "notch does not fit on its edge, drawing plain rectangle"
                );
            }
            fits
        })
    };

    if notch.is_none() && placement.notch_allowed && budget.is_degenerate() {
        tracing::debug!(
            ring = placement.index,
            budget_width = budget.width,
            budget_height = budget.height,
            "notch budget exhausted, drawing plain rectangle"
        );
    }

    let mut canonical: SmallVec<[Point; 8]> = SmallVec::new();
    canonical.push(Point::new(left, top));
    canonical.push(Point::new(right, top));
    canonical.push(Point::new(right, bottom));

    let placed = notch.map(|notch| {
        let points = notch.placed_at(Point::new(notch_left, bottom));
        // The bottom edge runs right to left in a clockwise traversal
        canonical.extend(points.iter().rev().copied());
        PlacedNotch {
            notch,
            points: points.map(|p| frame.to_box(p)),
        }
    });

    canonical.push(Point::new(left, bottom));

    tracing::trace!(
        ring = placement.index,
        inset,
        has_notch = placed.is_some(),
        budget_width = budget.width,
        "built ring outline"
    );

    RingOutline {
        index: placement.index,
        inset,
        rect: frame.rect_to_box(Rect::from_ltrb(left, top, right, bottom)),
        notch: placed,
        vertices: frame.polygon_to_box(canonical),
    }
}
