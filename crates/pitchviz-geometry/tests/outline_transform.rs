//! Outline transformation tests.
//!
//! Glyph outlines are authored in font units and pushed through a chain of
//! transforms into device space; these tests pin down that chain.

use glam::Vec2;
use pitchviz_geometry::{PathBuilder, PathCommand, Rect, Transform2D};

fn unit_box() -> pitchviz_geometry::Path {
    let mut builder = PathBuilder::new();
    builder.rect(Vec2::ZERO, Vec2::new(1.0, 1.0));
    builder.build()
}

#[test]
fn test_transformed_translates_every_point() {
    let moved = unit_box().transformed(&Transform2D::translate(Vec2::new(10.0, -5.0)));
    let bounds = moved.bounds().unwrap();
    assert_eq!(bounds.min(), Vec2::new(10.0, -5.0));
    assert_eq!(bounds.max(), Vec2::new(11.0, -4.0));
}

#[test]
fn test_transformed_keeps_command_shape() {
    let path = unit_box();
    let moved = path.transformed(&Transform2D::scale(2.0));
    assert_eq!(path.len(), moved.len());
    assert!(matches!(moved.commands().last(), Some(PathCommand::Close)));
}

#[test]
fn test_half_turn_flips_box_below_origin() {
    let rotated = unit_box().transformed(&Transform2D::rotate(std::f32::consts::PI));
    let bounds = rotated.bounds().unwrap();
    assert!((bounds.min() - Vec2::new(-1.0, -1.0)).length() < 1e-5);
    assert!(bounds.max().length() < 1e-5);
}

#[test]
fn test_fit_then_pan_moves_outline() {
    let view = Transform2D::fit(
        Rect::centered(Vec2::ZERO, 1.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
    );
    let panned = view.pan(Vec2::new(5.0, 0.0));
    let a = unit_box().transformed(&view).bounds().unwrap();
    let b = unit_box().transformed(&panned).bounds().unwrap();
    assert!((b.min() - a.min() - Vec2::new(5.0, 0.0)).length() < 1e-4);
}

#[test]
fn test_polygon_ignores_empty_input() {
    let mut builder = PathBuilder::new();
    builder.polygon(&[]);
    assert!(builder.build().is_empty());
}
