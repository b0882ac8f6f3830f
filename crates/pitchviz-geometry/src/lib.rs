//! pitchviz Geometry - view transforms and vector paths
//!
//! This crate provides:
//! - [`Transform2D`], the affine data-to-device view transform (pan, zoom,
//!   aspect fitting)
//! - [`Rect`] bounds for data windows and device viewports
//! - [`Path`] / [`PathBuilder`] for vector glyph outlines
//!
//! # Example
//!
//! ```
//! use pitchviz_geometry::{Rect, Transform2D};
//! use glam::Vec2;
//!
//! // Map a radar's data window onto a 400x400 pixel viewport.
//! let view = Transform2D::fit(
//!     Rect::from_min_max(Vec2::splat(-10.0), Vec2::splat(10.0)),
//!     Rect::new(0.0, 0.0, 400.0, 400.0),
//! );
//! assert_eq!(view.transform_point(Vec2::ZERO), Vec2::new(200.0, 200.0));
//! ```

mod path;
mod rect;
mod transform;

pub use path::*;
pub use rect::*;
pub use transform::*;
