//! Stroking bubble borders onto a draw context
//!
//! Rings are stroked outer to inner so inner rings paint over the inside
//! half of the ring around them. Content is drawn last, clipped to the
//! content rectangle and translated so it draws from (0, 0).

use bubble_border::{BorderEngine, RingStroke};
use bubble_core::{Affine2D, ClipShape, DrawContext, Rect, Size};

/// Bounds passed to the content callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    pub width: f32,
    pub height: f32,
}

impl From<Rect> for ContentBounds {
    fn from(rect: Rect) -> Self {
        Self {
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl From<ContentBounds> for Size {
    fn from(bounds: ContentBounds) -> Self {
        Size::new(bounds.width, bounds.height)
    }
}

/// Stroke each ring's outline with its own width and color, in order
///
/// Fully transparent rings still take up space but are not stroked.
pub fn stroke_rings(ctx: &mut dyn DrawContext, rings: &[RingStroke]) {
    for ring in rings {
        if ring.ring.color.is_transparent() {
            continue;
        }
        ctx.stroke_path(&ring.outline.to_path(), &ring.stroke(), ring.brush());
    }
}

/// Stroke every enabled ring for a box of `box_size`
///
/// Returns the content rectangle the host should draw into.
pub fn paint_border(ctx: &mut dyn DrawContext, engine: &BorderEngine, box_size: Size) -> Rect {
    let layout = engine.layout(box_size);
    stroke_rings(ctx, &layout.rings);
    layout.content_rect
}

/// Run `content` clipped to `content_rect`, with the origin moved to its
/// top-left corner
pub fn paint_content<F>(ctx: &mut dyn DrawContext, content_rect: Rect, content: F)
where
    F: FnOnce(&mut dyn DrawContext, ContentBounds),
{
    ctx.push_clip(ClipShape::rect(content_rect));
    ctx.push_transform(Affine2D::translation(content_rect.x(), content_rect.y()));
    content(&mut *ctx, content_rect.into());
    ctx.pop_transform();
    ctx.pop_clip();
}

/// Stroke the border, then draw the content inside it
pub fn paint_bubble<F>(ctx: &mut dyn DrawContext, engine: &BorderEngine, box_size: Size, content: F)
where
    F: FnOnce(&mut dyn DrawContext, ContentBounds),
{
    let content_rect = paint_border(ctx, engine, box_size);
    paint_content(ctx, content_rect, content);
}
