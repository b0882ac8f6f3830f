//! pitchviz Text - curved text layout for radar charts
//!
//! Lays a string out glyph by glyph along a circular arc so that parameter
//! labels wrap around a radar ring and always read left to right.
//!
//! - [`ArcLabel`] owns the text, anchor and style, and the glyph list.
//! - [`RenderHost`] is what a plotting surface provides: a data to device
//!   transform, a resolution and a text measurement service. [`Canvas`] is a
//!   ready-made host.
//! - [`GlyphBackend`] draws each placed glyph, either as a positioned text
//!   run ([`TextRunBackend`]) or as a filled outline ([`OutlineBackend`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use pitchviz_text::{ArcLabel, ArcLabelStyle, Align, Canvas, HeuristicMetrics, TextRunBackend};
//! use pitchviz_geometry::Rect;
//! use glam::Vec2;
//!
//! let mut canvas = Canvas::square(Rect::centered(Vec2::ZERO, 7.0), 4.0, 100.0, HeuristicMetrics::new());
//! let mut backend = TextRunBackend::new();
//!
//! let mut label = ArcLabel::new("Progressive\nPasses", 6.0, std::f32::consts::PI)
//!     .with_style(ArcLabelStyle::new().align(Align::Center).font_size(15.0));
//! label.draw(&mut canvas, &mut backend);
//!
//! for glyph in label.drawn_glyphs() {
//!     println!("{} at {:?}, {:.1} deg", glyph.character(), glyph.data_position(), glyph.rotation().unwrap_or(0.0));
//! }
//! ```
//!
//! ## Features
//!
//! - **cosmic-text**: measure with real fonts through [`CosmicMeasure`].

pub mod backend;
pub mod canvas;
pub mod error;
pub mod host;
pub mod label;
pub mod layout;
pub mod measure;
pub mod radar;
pub mod style;

pub use backend::{
    FilledPath, GlyphBackend, GlyphPlacement, OutlineBackend, OutlineSource, RenderMode,
    TextAnchor, TextRun, TextRunBackend,
};
pub use canvas::{Canvas, POINTS_PER_INCH};
pub use error::{TextError, TextResult};
pub use host::{RenderHost, TextExtent, TextMeasure};
pub use label::{ArcLabel, BACKGROUND_WARNING, Glyph, GlyphPose};
pub use layout::{CENTERLINE_PROBE, DirectionSign, glyph_rotation};
pub use measure::HeuristicMetrics;
#[cfg(feature = "cosmic-text")]
pub use measure::CosmicMeasure;
pub use radar::{RadarLabels, param_angles, wrap_label};
pub use style::{
    Align, ArcLabelStyle, BackgroundBox, Color, Direction, FontSpec, FontWeight, GlyphStyle,
    Stacking,
};
