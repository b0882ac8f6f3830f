//! Math types used across pitchviz.
//!
//! Re-exports the [`glam`] types the geometry and text crates are written
//! against, plus a couple of angle helpers for the "clockwise from up" polar
//! convention used by radar charts.
//!
//! ```
//! use pitchviz_core::math::{Vec2, polar_to_cartesian};
//!
//! let p = polar_to_cartesian(Vec2::ZERO, 2.0, 0.0);
//! assert!((p - Vec2::new(0.0, 2.0)).length() < 1e-6);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Affine2, Mat2, Mat3, Vec2, Vec3};

use std::f32::consts::TAU;

/// Point on a circle using the radar convention: `theta = 0` points up and
/// angles grow clockwise, so `x = r·sin(theta)` and `y = r·cos(theta)`.
#[inline]
pub fn polar_to_cartesian(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    center + Vec2::new(radius * sin, radius * cos)
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Wrap an angle in degrees into `[-180, 180)`.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
