//! pitchviz - sports data visualization
//!
//! Facade over the pitchviz crates. The centrepiece is curved text layout
//! for radar charts: parameter names laid glyph by glyph around the outer
//! ring, flipped on the bottom half so they always read left to right.
//!
//! # Quick Start
//!
//! ```
//! use pitchviz::prelude::*;
//!
//! pitchviz::init(&Config::default());
//!
//! let mut canvas = Canvas::square(Rect::centered(Vec2::ZERO, 7.0), 4.0, 100.0, HeuristicMetrics::new());
//! let mut backend = TextRunBackend::new();
//! let mut labels = RadarLabels::new(["Top", "Right", "Bottom", "Left"])
//!     .radius(6.0)
//!     .build()
//!     .unwrap();
//!
//! for label in &mut labels {
//!     label.draw(&mut canvas, &mut backend);
//! }
//! assert_eq!(backend.runs().len(), 18);
//! ```
//!
//! # Features
//!
//! - `geometry` (default): view transforms, rectangles and vector paths
//! - `text` (default): the curved text engine
//! - `cosmic-text`: font-backed text measurement
//! - `profiling-server`: serve puffin profiles over HTTP

// Re-export core types
pub use pitchviz_core as core;
pub use pitchviz_core::{Config, ProfilingMode, WarnOnce, math};

#[cfg(feature = "geometry")]
pub use pitchviz_geometry as geometry;

#[cfg(feature = "text")]
pub use pitchviz_text as text;

/// Install logging and profiling as described by `config`.
pub fn init(config: &Config) {
    pitchviz_core::logging::init_with(config);
    tracing::debug!(filter = %config.log_filter, profiling = ?config.profiling, "pitchviz initialized");
}

/// Commonly used types.
pub mod prelude {
    pub use pitchviz_core::math::Vec2;
    pub use pitchviz_core::{Config, ProfilingMode};

    #[cfg(feature = "geometry")]
    pub use pitchviz_geometry::{Path, PathBuilder, Rect, Transform2D};

    #[cfg(feature = "text")]
    pub use pitchviz_text::{
        Align, ArcLabel, ArcLabelStyle, Canvas, Color, Direction, GlyphBackend, HeuristicMetrics,
        OutlineBackend, RadarLabels, RenderHost, Stacking, TextRunBackend,
    };
}
