//! Text measurement and glyph outlines with cosmic-text.
//!
//! Shapes each string into a throwaway buffer. Advances come from its layout
//! runs; vertical metrics come from the ink of every glyph, read through a
//! [`SwashCache`]. Sizes are passed to cosmic-text as-is, so results come back
//! in points.

use std::path::Path as FsPath;

use cosmic_text::{
    Attrs, Buffer, Command, Family, FontSystem, Metrics, Shaping, Style, SwashCache, Weight,
};
use glam::Vec2;
use pitchviz_geometry::{Path, PathBuilder};

use crate::backend::OutlineSource;
use crate::error::{TextError, TextResult};
use crate::host::{TextExtent, TextMeasure};
use crate::style::{FontSpec, FontWeight};

/// [`TextMeasure`] and [`OutlineSource`] backed by a cosmic-text
/// [`FontSystem`].
pub struct CosmicMeasure {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Default for CosmicMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicMeasure {
    /// Measure with all system fonts.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Measure with an existing font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    /// Register an extra font file (e.g. a chart's title font).
    pub fn load_font_file(&mut self, path: impl AsRef<FsPath>) -> TextResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TextError::FontFileNotFound(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        self.font_system.db_mut().load_font_data(data);
        tracing::debug!("Loaded font file {}", path.display());
        Ok(())
    }

    /// Get mutable access to the font system.
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    fn shape(&mut self, font: &FontSpec, text: &str) -> Buffer {
        let metrics = Metrics::new(font.size, font.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(&mut self.font_system, text, attrs_for(font), Shaping::Basic);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

fn attrs_for(font: &FontSpec) -> Attrs<'_> {
    let family = match font.family.as_str() {
        "sans-serif" | "sans" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        name => Family::Name(name),
    };
    let mut attrs = Attrs::new().family(family);
    if font.weight == FontWeight::Bold {
        attrs = attrs.weight(Weight::BOLD);
    }
    if font.italic {
        attrs = attrs.style(Style::Italic);
    }
    attrs
}

impl TextMeasure for CosmicMeasure {
    fn measure(&mut self, font: &FontSpec, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }

        let buffer = self.shape(font, text);
        let mut width = 0.0_f32;
        let mut ascent = 0.0_f32;
        let mut descent = 0.0_f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            for glyph in run.glyphs.iter() {
                let cache_key = glyph.physical((0.0, 0.0), 1.0).cache_key;
                // Placement is y up from the baseline; blank glyphs have no image.
                if let Some(image) = self.swash_cache.get_image(&mut self.font_system, cache_key) {
                    if image.placement.height == 0 {
                        continue;
                    }
                    let top = image.placement.top as f32;
                    ascent = ascent.max(top);
                    descent = descent.max(image.placement.height as f32 - top);
                }
            }
        }

        TextExtent::new(width, ascent + descent, descent)
    }
}

impl OutlineSource for CosmicMeasure {
    /// The font's own vector outline, y up from the baseline.
    fn glyph_outline(&mut self, font: &FontSpec, character: char) -> Option<Path> {
        if character.is_whitespace() {
            return None;
        }

        let mut buf = [0u8; 4];
        let buffer = self.shape(font, character.encode_utf8(&mut buf));
        let cache_key = buffer
            .layout_runs()
            .flat_map(|run| run.glyphs.iter())
            .next()?
            .physical((0.0, 0.0), 1.0)
            .cache_key;

        let commands = self
            .swash_cache
            .get_outline_commands(&mut self.font_system, cache_key)?;
        let mut builder = PathBuilder::new();
        for command in commands {
            match *command {
                Command::MoveTo(p) => builder.move_to(Vec2::new(p.x, p.y)),
                Command::LineTo(p) => builder.line_to(Vec2::new(p.x, p.y)),
                Command::QuadTo(c, p) => {
                    builder.quad_to(Vec2::new(c.x, c.y), Vec2::new(p.x, p.y))
                }
                Command::CurveTo(c1, c2, p) => builder.cubic_to(
                    Vec2::new(c1.x, c1.y),
                    Vec2::new(c2.x, c2.y),
                    Vec2::new(p.x, p.y),
                ),
                Command::Close => builder.close(),
            };
        }

        let path = builder.build();
        (!path.is_empty()).then_some(path)
    }
}
