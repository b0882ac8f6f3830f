//! Backend that fills transformed vector outlines.

use glam::Vec2;
use pitchviz_geometry::{Path, Transform2D};

use super::{GlyphBackend, GlyphPlacement, OutlineSource, RenderMode};
use crate::style::Color;

/// A device-space filled path.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPath {
    pub path: Path,
    pub character: char,
    pub color: Color,
    pub alpha: Option<f32>,
    pub clip: bool,
    pub zorder: f32,
}

/// Converts each glyph to its outline and places it at the glyph pose.
#[derive(Debug)]
pub struct OutlineBackend<S> {
    source: S,
    fills: Vec<FilledPath>,
}

impl<S: OutlineSource> OutlineBackend<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fills: Vec::new(),
        }
    }

    pub fn fills(&self) -> &[FilledPath] {
        &self.fills
    }

    pub fn drain(&mut self) -> Vec<FilledPath> {
        std::mem::take(&mut self.fills)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

/// Font units to device pixels: center the outline on its advance, scale,
/// rotate, then move onto the pose.
fn glyph_transform(placement: &GlyphPlacement<'_>) -> Transform2D {
    Transform2D::scale(placement.pixels_per_point)
        .then_translate(Vec2::new(-placement.advance_px * 0.5, 0.0))
        .then_rotate(placement.pose.rotation.to_radians())
        .then_translate(placement.pose.device_position)
}

impl<S: OutlineSource> GlyphBackend for OutlineBackend<S> {
    fn mode(&self) -> RenderMode {
        RenderMode::Outline
    }

    fn draw_glyph(&mut self, placement: &GlyphPlacement<'_>) -> Option<Path> {
        let style = placement.style;
        let Some(outline) = self.source.glyph_outline(&style.font, placement.character) else {
            tracing::trace!(character = %placement.character, "no outline, skipping");
            return None;
        };

        let path = outline.transformed(&glyph_transform(placement));
        self.fills.push(FilledPath {
            path: path.clone(),
            character: placement.character,
            color: style.color,
            alpha: style.alpha,
            clip: style.clip,
            zorder: style.zorder,
        });
        Some(path)
    }
}
