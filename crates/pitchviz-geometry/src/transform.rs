//! Affine view transforms.
//!
//! A [`Transform2D`] maps data coordinates onto device pixels. Charts build
//! one with [`Transform2D::fit`] or [`Transform2D::fit_aspect`] and then pan
//! or zoom it between render passes; anything that measures in pixels must
//! re-query the transform after such a change.

use glam::{Affine2, Vec2};

use crate::Rect;

/// A 2D affine transformation (linear part plus translation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    affine: Affine2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        affine: Affine2::IDENTITY,
    };

    pub fn from_affine(affine: Affine2) -> Self {
        Self { affine }
    }

    /// Create a translation transform.
    pub fn translate(offset: Vec2) -> Self {
        Self::from_affine(Affine2::from_translation(offset))
    }

    /// Create a rotation transform (angle in radians, counter-clockwise).
    pub fn rotate(angle: f32) -> Self {
        Self::from_affine(Affine2::from_angle(angle))
    }

    /// Create a uniform scale transform.
    pub fn scale(factor: f32) -> Self {
        Self::scale_xy(Vec2::splat(factor))
    }

    /// Create a non-uniform scale transform.
    pub fn scale_xy(scale: Vec2) -> Self {
        Self::from_affine(Affine2::from_scale(scale))
    }

    /// Stretch `data` onto `device`, independently per axis.
    ///
    /// A zero-sized `data` rect yields a degenerate transform.
    pub fn fit(data: Rect, device: Rect) -> Self {
        let scale = device.size() / data.size();
        if !scale.is_finite() {
            tracing::warn!(?data, ?device, "fitting an empty data window");
        }
        Self::translate(-data.min())
            .then_scale_xy(scale)
            .then_translate(device.min())
    }

    /// Map `data` onto `device` with one uniform scale, centering the data
    /// window inside the viewport (letterboxing the spare axis).
    pub fn fit_aspect(data: Rect, device: Rect) -> Self {
        let per_axis = device.size() / data.size();
        let scale = per_axis.x.min(per_axis.y);
        if !scale.is_finite() {
            tracing::warn!(?data, ?device, "fitting an empty data window");
        }
        Self::translate(-data.center())
            .then_scale(scale)
            .then_translate(device.center())
    }

    /// Combine two transforms (self then other).
    pub fn then(&self, other: &Transform2D) -> Self {
        Self::from_affine(other.affine * self.affine)
    }

    pub fn then_translate(&self, offset: Vec2) -> Self {
        self.then(&Self::translate(offset))
    }

    pub fn then_rotate(&self, angle: f32) -> Self {
        self.then(&Self::rotate(angle))
    }

    pub fn then_scale(&self, factor: f32) -> Self {
        self.then(&Self::scale(factor))
    }

    pub fn then_scale_xy(&self, scale: Vec2) -> Self {
        self.then(&Self::scale_xy(scale))
    }

    /// Shift the output by `delta` device pixels.
    pub fn pan(&self, delta: Vec2) -> Self {
        self.then_translate(delta)
    }

    /// Zoom the output by `factor`, keeping the device point `anchor` fixed.
    pub fn zoom_about(&self, anchor: Vec2, factor: f32) -> Self {
        self.then_translate(-anchor)
            .then_scale(factor)
            .then_translate(anchor)
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.affine.transform_point2(point)
    }

    /// Transform a vector (ignores translation).
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.affine.transform_vector2(vector)
    }

    /// Get the inverse transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.affine.matrix2.determinant();
        if !det.is_finite() || det.abs() < f32::EPSILON {
            None
        } else {
            Some(Self::from_affine(self.affine.inverse()))
        }
    }

    /// Device pixels covered by one data unit along `direction` at `point`.
    ///
    /// For affine maps this is independent of `point`, but callers pass it so
    /// the measurement reads like the sampling it replaces.
    pub fn pixels_per_unit(&self, point: Vec2, direction: Vec2) -> f32 {
        let unit = direction.normalize_or_zero();
        (self.transform_point(point + unit) - self.transform_point(point)).length()
    }

    pub fn as_affine(&self) -> &Affine2 {
        &self.affine
    }

    pub fn translation(&self) -> Vec2 {
        self.affine.translation
    }
}

impl std::ops::Mul<Vec2> for Transform2D {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}
