//! Radar Labels - Curved Parameter Names
//!
//! Lays out the twelve parameter names of a player radar around the outer
//! ring and prints where every glyph lands:
//! - Long names wrapped onto two lines and stacked outward
//! - Bottom-half labels flipped so they read left to right
//! - The same layout redrawn after a pan and a zoom
//!
//! Run with `RUST_LOG=pitchviz_text=debug` to see the per-line layout.

use pitchviz_core::logging;
use pitchviz_core::math::Vec2;
use pitchviz_core::profiling;
use pitchviz_geometry::Rect;
use pitchviz_text::{
    ArcLabel, ArcLabelStyle, Canvas, HeuristicMetrics, OutlineBackend, RadarLabels,
    TextRunBackend,
};

const PARAMS: [&str; 12] = [
    "npxG",
    "Non-Penalty Goals",
    "xA",
    "Key Passes",
    "Through Balls",
    "Progressive Passes",
    "Shot-Creating Actions",
    "Goal-Creating Actions",
    "Dribbles Completed",
    "Pressure Regains",
    "Touches In Box",
    "Miscontrol",
];

fn print_ring(labels: &[ArcLabel]) {
    for label in labels {
        println!("{:?} (theta {:.2})", label.text(), label.theta());
        for glyph in label.drawn_glyphs() {
            let position = glyph.data_position().unwrap_or_default();
            println!(
                "  {} line {} at ({:>6.2}, {:>6.2}) rotated {:>7.2} deg",
                glyph.character(),
                glyph.line(),
                position.x,
                position.y,
                glyph.rotation().unwrap_or_default()
            );
        }
    }
}

fn main() {
    logging::init();

    // Rings of width 1 around a centre circle of radius 1, labels half a ring out.
    let mut canvas = Canvas::square(
        Rect::centered(Vec2::ZERO, 6.5),
        9.0,
        220.0,
        HeuristicMetrics::new(),
    );
    let mut labels = RadarLabels::new(PARAMS)
        .radius(5.5)
        .wrap(15)
        .style(ArcLabelStyle::new().font_size(15.0).letter_spacing(0.7))
        .build()
        .expect("radar has parameters");

    let mut runs = TextRunBackend::new();
    profiling::new_frame();
    let drawn: usize = labels
        .iter_mut()
        .map(|label| label.draw(&mut canvas, &mut runs))
        .sum();
    println!("drew {drawn} glyphs as text runs");
    print_ring(&labels);

    // Pan and zoom the view; glyph sizes stay fixed in pixels so each label
    // spans a narrower arc.
    let view = canvas
        .transform()
        .pan(Vec2::new(40.0, 0.0))
        .zoom_about(Vec2::new(990.0, 990.0), 1.5);
    canvas.set_transform(view);

    let mut outlines = OutlineBackend::new(HeuristicMetrics::new());
    profiling::new_frame();
    for label in &mut labels {
        label.draw(&mut canvas, &mut outlines);
    }
    println!("redrew {} glyphs as outlines after pan and zoom", outlines.fills().len());
    print_ring(&labels[..2]);
}
