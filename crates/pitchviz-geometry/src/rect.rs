//! Axis-aligned rectangles for data windows and device viewports.

use glam::Vec2;

/// Axis-aligned rectangle anchored at its minimum corner.
///
/// No vertical orientation is implied: in device space pitchviz uses a
/// y-up pixel convention, so `y` is the bottom edge there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from two opposite corners, in any order.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Square of half-width `half_extent` around `center`.
    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        Self::from_min_max(center - Vec2::splat(half_extent), center + Vec2::splat(half_extent))
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Width over height; `None` for a zero-height rect.
    pub fn aspect(&self) -> Option<f32> {
        (self.height != 0.0).then(|| self.width / self.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }

    /// Smallest rect containing both `self` and `point`.
    pub fn union_point(&self, point: Vec2) -> Self {
        Self::from_min_max(self.min().min(point), self.max().max(point))
    }
}
