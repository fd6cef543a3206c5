//! Draw Context - the rasterization seam
//!
//! The `DrawContext` trait is the only way border geometry reaches pixels.
//! Hosts implement it over their own canvas; `RecordingContext` records the
//! calls as `DrawCommand`s for deferred execution or inspection.
//!
//! # Example
//!
//! ```
//! use bubble_core::{Color, DrawContext, Path, Rect, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! let outline = Path::rect(Rect::new(4.0, 4.0, 192.0, 92.0));
//! ctx.stroke_path(&outline, &Stroke::new(4.0), Color::BLACK.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use crate::geometry::{Affine2D, Brush, ClipShape, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building polygonal paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point (starts a new subpath)
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Close the current subpath
    Close,
}

/// A vector path made of straight segments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a closed polygon through `points`
    ///
    /// Returns an empty path when there are no points.
    pub fn polygon(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };

        let mut commands = Vec::with_capacity(points.len() + 1);
        commands.push(PathCommand::MoveTo(*first));
        commands.extend(rest.iter().copied().map(PathCommand::LineTo));
        commands.push(PathCommand::Close);
        Self { commands }
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::polygon(&rect.corners())
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths (one per `MoveTo`)
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .count()
    }

    /// Calculate the bounding rectangle of this path
    pub fn bounds(&self) -> Rect {
        let mut points = self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        });

        let Some(first) = points.next() else {
            return Rect::ZERO;
        };

        points.fold(Rect::new(first.x, first.y, 0.0, 0.0), |bounds, p| {
            bounds.expand_to_include(p)
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Unified 2D drawing interface implemented by hosts
pub trait DrawContext {
    /// Push a transform onto the stack (combined with the current one)
    fn push_transform(&mut self, transform: Affine2D);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Affine2D;

    /// Push a clip shape onto the stack
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Get the current viewport size
    fn viewport_size(&self) -> Size;
}

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug)]
pub enum DrawCommand {
    PushTransform(Affine2D),
    PopTransform,
    PushClip(ClipShape),
    PopClip,
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Affine2D>,
    clip_depth: usize,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Affine2D::IDENTITY],
            clip_depth: 0,
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Affine2D) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        }
    }

    fn current_transform(&self) -> Affine2D {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape));
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
        self.clip_depth = self.clip_depth.saturating_sub(1);
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.push_transform(Affine2D::translation(10.0, 20.0));
        ctx.fill_path(
            &Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0)),
            Color::BLUE.into(),
        );
        ctx.pop_transform();

        assert_eq!(ctx.commands().len(), 3);
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_polygon() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(12.0, 24.0),
            Point::new(24.0, 0.0),
        ];

        let closed = Path::polygon(&points);
        assert_eq!(closed.commands().len(), 4);
        assert_eq!(closed.commands().last(), Some(&PathCommand::Close));
        assert!(Path::polygon(&[]).is_empty());
    }

    #[test]
    fn test_path_bounds() {
        let path = Path::polygon(&[
            Point::new(4.0, 4.0),
            Point::new(222.0, 4.0),
            Point::new(113.0, 146.0),
        ]);
        assert_eq!(path.bounds(), Rect::new(4.0, 4.0, 218.0, 142.0));
        assert_eq!(Path::new().bounds(), Rect::ZERO);
    }

    #[test]
    fn test_transform_stack() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        assert_eq!(ctx.current_transform(), Affine2D::IDENTITY);

        ctx.push_transform(Affine2D::translation(10.0, 20.0));
        ctx.push_transform(Affine2D::translation(1.0, 2.0));
        assert_eq!(
            ctx.current_transform().transform_point(Point::ZERO),
            Point::new(11.0, 22.0)
        );

        ctx.pop_transform();
        ctx.pop_transform();

        // Should not panic when popping past the root
        ctx.pop_transform();
        assert_eq!(ctx.current_transform(), Affine2D::IDENTITY);
    }

    #[test]
    fn test_clip_depth() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_clip(ClipShape::rect(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(ctx.clip_depth(), 1);
        ctx.pop_clip();
        ctx.pop_clip();
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_stroke_configuration() {
        let stroke = Stroke::new(2.0).with_join(LineJoin::Bevel);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Butt);
        assert_eq!(stroke.join, LineJoin::Bevel);
        assert_eq!(stroke.miter_limit, 4.0);
        assert_eq!(Path::rect(Rect::new(0.0, 0.0, 4.0, 4.0)).subpath_count(), 1);
    }
}
