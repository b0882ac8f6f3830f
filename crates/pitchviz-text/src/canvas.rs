//! A concrete [`RenderHost`]: a view transform, a resolution, and a
//! measurement service.

use glam::Vec2;
use pitchviz_core::WarnOnce;
use pitchviz_geometry::{Rect, Transform2D};

use crate::host::{RenderHost, TextExtent, TextMeasure};
use crate::style::FontSpec;

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Drawing context for curved labels.
///
/// The transform may be replaced between draws (pan, zoom, resize); labels
/// re-query it on every draw.
pub struct Canvas<M> {
    transform: Transform2D,
    dpi: f32,
    measure: M,
    warnings: WarnOnce,
}

impl<M: TextMeasure> Canvas<M> {
    pub fn new(transform: Transform2D, dpi: f32, measure: M) -> Self {
        Self {
            transform,
            dpi,
            measure,
            warnings: WarnOnce::new(),
        }
    }

    /// Square figure of `size_inches` showing `data` with equal aspect,
    /// the way radar axes are set up.
    pub fn square(data: Rect, size_inches: f32, dpi: f32, measure: M) -> Self {
        let side = size_inches * dpi;
        let device = Rect::new(0.0, 0.0, side, side);
        Self::new(Transform2D::fit_aspect(data, device), dpi, measure)
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }

    pub fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn set_dpi(&mut self, dpi: f32) {
        self.dpi = dpi;
    }

    pub fn measurer(&self) -> &M {
        &self.measure
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    /// Warnings emitted through this canvas so far.
    pub fn warning_log(&self) -> &WarnOnce {
        &self.warnings
    }
}

impl<M: TextMeasure> RenderHost for Canvas<M> {
    fn data_to_device(&self, point: Vec2) -> Vec2 {
        self.transform.transform_point(point)
    }

    fn pixels_per_point(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }

    fn measure(&mut self, font: &FontSpec, text: &str) -> TextExtent {
        self.measure.measure(font, text)
    }

    fn warnings(&mut self) -> &mut WarnOnce {
        &mut self.warnings
    }
}
