//! Glyph drawing strategies.
//!
//! Layout is computed once by [`ArcLabel`](crate::ArcLabel); the final
//! "draw this character at this pose" step is delegated to a
//! [`GlyphBackend`]. Two backends ship with the crate: positioned text runs
//! and filled vector outlines.

mod outline;
mod text_run;

pub use outline::{FilledPath, OutlineBackend};
pub use text_run::{TextAnchor, TextRun, TextRunBackend};

use pitchviz_geometry::Path;

use crate::label::GlyphPose;
use crate::style::{FontSpec, GlyphStyle};

/// How a backend renders glyphs, which decides where the pose anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Text runs anchored at their center; the pose is the glyph center.
    TextRun,
    /// Outlines anchored on their baseline; layout shifts each line so the
    /// visual centerline lands on the requested radius.
    Outline,
}

/// Everything a backend needs to draw one glyph.
#[derive(Debug, Clone, Copy)]
pub struct GlyphPlacement<'a> {
    pub character: char,
    pub pose: GlyphPose,
    /// Advance width in device pixels.
    pub advance_px: f32,
    pub pixels_per_point: f32,
    pub style: &'a GlyphStyle,
}

/// Draws positioned glyphs.
pub trait GlyphBackend {
    fn mode(&self) -> RenderMode;

    /// Draw one glyph. Outline backends return the device-space outline they
    /// filled so the label can expose it.
    fn draw_glyph(&mut self, placement: &GlyphPlacement<'_>) -> Option<Path>;
}

/// Supplies vector outlines for characters.
pub trait OutlineSource {
    /// Outline of `character` in points, origin at the left end of the
    /// baseline, y up. `None` when the font has nothing to draw.
    fn glyph_outline(&mut self, font: &FontSpec, character: char) -> Option<Path>;
}
