//! Backend that emits one positioned, rotated text run per glyph.

use glam::Vec2;
use pitchviz_geometry::Path;

use super::{GlyphBackend, GlyphPlacement, RenderMode};
use crate::style::{Color, FontSpec};

/// Which point of the run its position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
}

/// A single-character text run ready for a host text renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Device-space position.
    pub position: Vec2,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f32,
    pub anchor: TextAnchor,
    pub font: FontSpec,
    pub color: Color,
    pub alpha: Option<f32>,
    pub clip: bool,
    pub zorder: f32,
}

/// Collects text runs; the host renders them in `zorder` order.
#[derive(Debug, Default)]
pub struct TextRunBackend {
    runs: Vec<TextRun>,
}

impl TextRunBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Take the collected runs, leaving the backend empty for the next pass.
    pub fn drain(&mut self) -> Vec<TextRun> {
        std::mem::take(&mut self.runs)
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl GlyphBackend for TextRunBackend {
    fn mode(&self) -> RenderMode {
        RenderMode::TextRun
    }

    fn draw_glyph(&mut self, placement: &GlyphPlacement<'_>) -> Option<Path> {
        let style = placement.style;
        self.runs.push(TextRun {
            text: placement.character.to_string(),
            position: placement.pose.device_position,
            rotation: placement.pose.rotation,
            anchor: TextAnchor::Center,
            font: style.font.clone(),
            color: style.color,
            alpha: style.alpha,
            clip: style.clip,
            zorder: style.zorder,
        });
        None
    }
}
