//! Bubble Paint
//!
//! Draws speech bubble borders onto any [`DrawContext`]. Ring outlines come
//! from [`bubble_border`]; this crate strokes them outer to inner and then
//! hands the content area to the host, clipped and translated.
//!
//! # Example
//!
//! ```
//! use bubble_core::{Color, RecordingContext, Size};
//! use bubble_border::{BorderConfig, RingConfig};
//! use bubble_paint::SpeechBubble;
//!
//! let mut bubble = SpeechBubble::new(BorderConfig::three(
//!     RingConfig::new(4.0, Color::BLACK),
//!     RingConfig::new(3.0, Color::BLUE),
//!     RingConfig::new(2.0, Color::GRAY),
//! ))
//! .unwrap();
//!
//! // Measure pass
//! let total = bubble.measure(Size::new(200.0, 100.0));
//!
//! // Draw pass
//! let mut ctx = RecordingContext::new(total);
//! bubble.draw(&mut ctx, total, |_ctx, bounds| {
//!     assert_eq!((bounds.width, bounds.height), (200.0, 100.0));
//! });
//!
//! // Three ring strokes, then clip, transform and their pops
//! assert_eq!(ctx.take_commands().len(), 7);
//! ```

pub mod bubble;
pub mod painter;

pub use bubble::SpeechBubble;
pub use painter::{paint_border, paint_bubble, paint_content, stroke_rings, ContentBounds};

pub use bubble_core::DrawContext;
