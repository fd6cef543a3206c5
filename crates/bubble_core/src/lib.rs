//! Bubble Core
//!
//! Foundational types shared by the bubble border crates:
//!
//! - **Geometry**: points, sizes, rectangles and affine transforms
//! - **Color & Brush**: stroke/fill paint sources
//! - **Paths**: polygonal vector paths built from move/line/close commands
//! - **Draw Context**: the rasterization seam hosts implement, plus a
//!   recording implementation for deferred execution and inspection
//!
//! # Example
//!
//! ```rust
//! use bubble_core::{Path, Point, Rect};
//!
//! let outline = Path::polygon(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 50.0),
//!     Point::new(0.0, 50.0),
//! ]);
//! assert_eq!(outline.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{
    DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand, RecordingContext, Stroke,
};
pub use geometry::{Affine2D, Brush, ClipShape, Color, Point, Rect, Size};
