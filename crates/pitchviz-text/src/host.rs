//! The capabilities curved layout needs from its host plotting surface.

use glam::Vec2;
use pitchviz_core::WarnOnce;

use crate::style::FontSpec;

/// Measured size of a string, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Advance width.
    pub width: f32,
    /// Ascent plus descent.
    pub height: f32,
    /// Distance from the baseline to the lowest point (positive).
    pub descent: f32,
}

impl TextExtent {
    pub fn new(width: f32, height: f32, descent: f32) -> Self {
        Self {
            width,
            height,
            descent,
        }
    }

    /// Distance from the baseline to the highest point.
    pub fn ascent(&self) -> f32 {
        self.height - self.descent
    }
}

/// A text measurement service.
pub trait TextMeasure {
    /// Measure `text` set in `font`. Results are in points.
    fn measure(&mut self, font: &FontSpec, text: &str) -> TextExtent;
}

/// The host rendering context a label is drawn into.
///
/// Device space is in pixels with y growing upward.
pub trait RenderHost {
    /// Map a data-space point through the current view transform.
    fn data_to_device(&self, point: Vec2) -> Vec2;

    /// Device pixels per typographic point (dpi / 72).
    fn pixels_per_point(&self) -> f32;

    /// Measure `text` in points.
    fn measure(&mut self, font: &FontSpec, text: &str) -> TextExtent;

    /// Warn-once recorder scoped to this context.
    fn warnings(&mut self) -> &mut WarnOnce;
}
