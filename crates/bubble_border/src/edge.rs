//! Canonical notch frame
//!
//! Ring geometry is always computed as if the notch sat on the bottom edge.
//! In that canonical frame `u` runs along the notch edge (left to right) and
//! `v` runs across it, growing toward the notch. [`EdgeFrame`] maps canonical
//! points back into box coordinates for the configured [`NotchEdge`].
//!
//! ```text
//!  Bottom: (x, y) = (u, v)          Top:   (x, y) = (u, H - v)
//!  Right:  (x, y) = (v, u)          Left:  (x, y) = (W - v, u)
//! ```
//!
//! Top and Right are reflections, so they reverse vertex order to keep
//! outlines clockwise.

use bubble_core::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::model::NotchEdge;

/// Mapping between the canonical bottom-notch frame and the box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFrame {
    edge: NotchEdge,
    box_size: Size,
}

impl EdgeFrame {
    pub fn new(edge: NotchEdge, box_size: Size) -> Self {
        Self { edge, box_size }
    }

    pub fn edge(&self) -> NotchEdge {
        self.edge
    }

    /// Box size seen from the canonical frame: `width` along the notch edge,
    /// `height` across it
    pub fn canonical_size(&self) -> Size {
        if self.edge.is_horizontal() {
            self.box_size
        } else {
            Size::new(self.box_size.height, self.box_size.width)
        }
    }

    /// Map a canonical point into box coordinates
    pub fn to_box(&self, p: Point) -> Point {
        let Size { width, height } = self.box_size;
        match self.edge {
            NotchEdge::Bottom => p,
            NotchEdge::Top => Point::new(p.x, height - p.y),
            NotchEdge::Right => Point::new(p.y, p.x),
            NotchEdge::Left => Point::new(width - p.y, p.x),
        }
    }

    /// Map a canonical rectangle into box coordinates
    pub fn rect_to_box(&self, rect: Rect) -> Rect {
        let [top_left, _, bottom_right, _] = rect.corners();
        Rect::from_points(self.to_box(top_left), self.to_box(bottom_right))
    }

    /// Whether the mapping keeps the orientation of a vertex sequence
    pub fn preserves_winding(&self) -> bool {
        matches!(self.edge, NotchEdge::Bottom | NotchEdge::Left)
    }

    /// Map a canonical clockwise polygon into a clockwise box polygon
    pub fn polygon_to_box<I>(&self, points: I) -> SmallVec<[Point; 8]>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut mapped: SmallVec<[Point; 8]> =
            points.into_iter().map(|p| self.to_box(p)).collect();
        if !self.preserves_winding() {
            mapped.reverse();
        }
        mapped
    }

    /// Grow a canonical (content) size into a box size by adding the
    /// arrow's depth across the notch edge
    pub fn add_arrow(edge: NotchEdge, size: Size, arrow_height: f32) -> Size {
        if edge.is_horizontal() {
            Size::new(size.width, size.height + arrow_height)
        } else {
            Size::new(size.width + arrow_height, size.height)
        }
    }
}

/// Twice the signed area of a polygon; positive means clockwise in
/// y-down screen coordinates
pub fn signed_area2(points: &[Point]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum()
}
