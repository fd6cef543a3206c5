//! Host-facing speech bubble
//!
//! [`SpeechBubble`] is what a view wraps: it answers the measure pass with a
//! total size and strokes the border during the draw pass. Outlines are kept
//! between draws and rebuilt only when the box size or configuration changes.

use std::path::Path as FsPath;

use bubble_border::{BorderConfig, BorderEngine, BorderLayout, BorderOptions, Result};
use bubble_core::{DrawContext, Rect, Size};

use crate::painter::{paint_content, stroke_rings, ContentBounds};

/// Bordered speech bubble with cached outlines
#[derive(Clone, Debug)]
pub struct SpeechBubble {
    engine: BorderEngine,
    cache: Option<BorderLayout>,
}

impl SpeechBubble {
    pub fn new(config: BorderConfig) -> Result<Self> {
        Ok(Self {
            engine: BorderEngine::new(config)?,
            cache: None,
        })
    }

    /// Build a bubble from flat options
    pub fn from_options(options: BorderOptions) -> Result<Self> {
        Self::new(options.into_config()?)
    }

    /// Build a bubble from a TOML options file
    pub fn load(path: &FsPath) -> Result<Self> {
        Self::from_options(BorderOptions::load(path)?)
    }

    pub fn engine(&self) -> &BorderEngine {
        &self.engine
    }

    pub fn config(&self) -> &BorderConfig {
        self.engine.config()
    }

    /// Total size for content of `content` size
    pub fn measure(&self, content: Size) -> Size {
        self.engine.compute_total_size(content)
    }

    /// Outlines and content rect for `box_size`, rebuilt only when the size
    /// differs from the last call
    pub fn layout(&mut self, box_size: Size) -> &BorderLayout {
        if !self.is_cached(box_size) {
            self.cache = None;
        }
        let engine = &self.engine;
        self.cache.get_or_insert_with(|| {
            tracing::trace!(
                width = box_size.width,
                height = box_size.height,
                "rebuilding bubble outlines"
            );
            engine.layout(box_size)
        })
    }

    /// Whether outlines are cached for `box_size`
    pub fn is_cached(&self, box_size: Size) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|cached| cached.box_size == box_size)
    }

    /// Stroke the border for `box_size`, then draw `content` inside it
    ///
    /// Returns the content rectangle in box coordinates.
    pub fn draw<F>(&mut self, ctx: &mut dyn DrawContext, box_size: Size, content: F) -> Rect
    where
        F: FnOnce(&mut dyn DrawContext, ContentBounds),
    {
        let layout = self.layout(box_size);
        stroke_rings(ctx, &layout.rings);
        let content_rect = layout.content_rect;
        paint_content(ctx, content_rect, content);
        content_rect
    }

    /// Swap in a new configuration
    ///
    /// On error the previous configuration and cached outlines stay in use.
    pub fn reconfigure(&mut self, config: BorderConfig) -> Result<()> {
        self.engine.apply_config(config)?;
        self.cache = None;
        Ok(())
    }

    /// Drop cached outlines
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
