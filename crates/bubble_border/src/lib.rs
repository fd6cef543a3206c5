//! Bubble Border
//!
//! Path geometry for layered "speech bubble" borders: up to N concentric
//! rings (outer, main and inner by default) around a content box, each ring
//! interrupted by a triangular notch that points away from the box.
//!
//! # Features
//!
//! - Nested ring outlines, each inset by exactly its own stroke width
//! - Notches that shrink per ring so every tip stays a clean point
//! - Notch on any box edge, anchored at a configurable offset
//! - Total size measurement (rings, padding and arrow) for host layout
//! - Flat option set loadable from TOML
//!
//! # Example
//!
//! ```
//! use bubble_border::{BorderEngine, BorderOptions};
//! use bubble_core::Size;
//!
//! let options = BorderOptions::from_toml_str(
//!     "outer_border_width = 4\nmain_border_width = 3\ninner_border_width = 2",
//! )
//! .unwrap();
//! let engine = BorderEngine::new(options.into_config().unwrap()).unwrap();
//!
//! let total = engine.compute_total_size(Size::new(200.0, 100.0));
//! for ring in engine.build_outlines(total) {
//!     let path = ring.outline.to_path();
//!     assert!(!path.is_empty());
//! }
//! ```

pub mod config;
pub mod edge;
pub mod engine;
pub mod error;
pub mod model;
pub mod notch;
pub mod ring;

pub use config::{parse_color, BorderOptions};
pub use edge::EdgeFrame;
pub use engine::{BorderEngine, BorderLayout, RingStroke};
pub use error::{ArrowDimension, ConfigError, Result};
pub use model::{
    ArrowConfig, BorderConfig, NotchEdge, RingConfig, DEFAULT_ARROW_SIZE, DEFAULT_EDGE_OFFSET,
    DEFAULT_INNER_PADDING,
};
pub use notch::{NotchBudget, NotchPath};
pub use ring::{build_ring_outline, PlacedNotch, RingOutline, RingPlacement};
