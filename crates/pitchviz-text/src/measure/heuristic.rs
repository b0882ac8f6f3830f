//! Deterministic font metrics without a font file.
//!
//! Widths come from a handful of character classes expressed in em units,
//! which is close enough to a proportional sans-serif for layout tests,
//! previews and headless rendering. The same tables drive box-shaped glyph
//! outlines for the outline backend.

use glam::Vec2;
use pitchviz_geometry::{Path, PathBuilder};

use crate::backend::OutlineSource;
use crate::host::{TextExtent, TextMeasure};
use crate::style::FontSpec;

const CAP_HEIGHT_EM: f32 = 0.72;
const X_HEIGHT_EM: f32 = 0.52;
const DESCENDER_EM: f32 = 0.22;

/// Heuristic proportional (or monospace) metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMetrics {
    monospace_em: Option<f32>,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicMetrics {
    /// Proportional widths.
    pub fn new() -> Self {
        Self { monospace_em: None }
    }

    /// Every character advances by `advance_em`.
    pub fn monospace(advance_em: f32) -> Self {
        Self {
            monospace_em: Some(advance_em),
        }
    }

    /// Advance of `ch` in em.
    pub fn advance_em(&self, ch: char) -> f32 {
        if let Some(em) = self.monospace_em {
            return em;
        }
        match ch {
            c if c.is_whitespace() => 0.32,
            'i' | 'l' | 'j' | 'I' | '!' | '.' | ',' | ';' | ':' | '\'' | '|' => 0.28,
            'f' | 't' | 'r' | '(' | ')' | '-' => 0.38,
            'm' | 'w' | 'M' | 'W' => 0.86,
            c if c.is_ascii_digit() => 0.56,
            c if c.is_uppercase() => 0.68,
            _ => 0.55,
        }
    }

    /// Height above the baseline of `ch` in em.
    fn ascent_em(ch: char) -> f32 {
        match ch {
            c if c.is_whitespace() => 0.0,
            'b' | 'd' | 'f' | 'h' | 'k' | 'l' | 't' | 'i' | 'j' => CAP_HEIGHT_EM,
            c if c.is_uppercase() || c.is_ascii_digit() => CAP_HEIGHT_EM,
            c if c.is_ascii_punctuation() => X_HEIGHT_EM,
            c if c.is_lowercase() => X_HEIGHT_EM,
            _ => CAP_HEIGHT_EM,
        }
    }

    /// Depth below the baseline of `ch` in em.
    fn descent_em(ch: char) -> f32 {
        match ch {
            'g' | 'j' | 'p' | 'q' | 'y' | ',' | ';' => DESCENDER_EM,
            _ => 0.0,
        }
    }
}

impl TextMeasure for HeuristicMetrics {
    fn measure(&mut self, font: &FontSpec, text: &str) -> TextExtent {
        let (width, ascent, descent) = text.chars().fold((0.0_f32, 0.0_f32, 0.0_f32), |acc, ch| {
            (
                acc.0 + self.advance_em(ch),
                acc.1.max(Self::ascent_em(ch)),
                acc.2.max(Self::descent_em(ch)),
            )
        });
        let size = font.size;
        TextExtent::new(width * size, (ascent + descent) * size, descent * size)
    }
}

impl OutlineSource for HeuristicMetrics {
    /// A filled box spanning the character's ink: 80% of its advance wide,
    /// from its descent to its ascent.
    fn glyph_outline(&mut self, font: &FontSpec, character: char) -> Option<Path> {
        if character.is_whitespace() {
            return None;
        }
        let size = font.size;
        let advance = self.advance_em(character) * size;
        let ascent = Self::ascent_em(character) * size;
        let descent = Self::descent_em(character) * size;

        let mut builder = PathBuilder::new();
        builder.rect(
            Vec2::new(advance * 0.1, -descent),
            Vec2::new(advance * 0.8, ascent + descent),
        );
        Some(builder.build())
    }
}
