//! Layout behaviour of curved labels drawn through a concrete canvas.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use pitchviz_core::math::normalize_degrees;
use pitchviz_geometry::{Rect, Transform2D};
use pitchviz_text::{
    Align, ArcLabel, ArcLabelStyle, BACKGROUND_WARNING, BackgroundBox, Canvas, Color, Direction,
    DirectionSign, Glyph, HeuristicMetrics, OutlineBackend, Stacking, TextRunBackend,
};

fn radar_canvas() -> Canvas<HeuristicMetrics> {
    Canvas::square(
        Rect::centered(Vec2::ZERO, 7.0),
        4.0,
        100.0,
        HeuristicMetrics::new(),
    )
}

fn draw(label: &mut ArcLabel, canvas: &mut Canvas<HeuristicMetrics>) -> usize {
    let mut backend = TextRunBackend::new();
    label.draw(canvas, &mut backend)
}

fn radius_of(glyph: &Glyph) -> f32 {
    glyph.data_position().unwrap().length()
}

fn mean_radius(label: &ArcLabel, character: char) -> f32 {
    let radii: Vec<f32> = label
        .drawn_glyphs()
        .filter(|g| g.character() == character)
        .map(radius_of)
        .collect();
    assert!(!radii.is_empty());
    radii.iter().sum::<f32>() / radii.len() as f32
}

#[test]
fn test_one_glyph_per_visible_character() {
    let mut canvas = radar_canvas();
    for text in ["Top", "Key Passes", "Shot-Creating Actions", "x  A"] {
        let mut label = ArcLabel::new(text, 6.0, 0.7);
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(label.glyph_count(), visible);
        assert_eq!(draw(&mut label, &mut canvas), visible);
        assert_eq!(label.drawn_glyphs().count(), visible);
    }
}

#[test]
fn test_text_run_backend_receives_every_glyph() {
    let mut canvas = radar_canvas();
    let mut backend = TextRunBackend::new();
    let mut label = ArcLabel::new("xA", 6.0, 0.0).with_style(ArcLabelStyle::new().zorder(5.0));
    label.draw(&mut canvas, &mut backend);

    let runs = backend.drain();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "x");
    assert_eq!(runs[1].text, "A");
    assert!(runs.iter().all(|run| run.zorder == 5.0));
    let glyph = label.glyphs().next().unwrap();
    assert_eq!(Some(runs[0].position), glyph.device_position());
    assert_eq!(Some(runs[0].rotation), glyph.rotation());
}

#[test]
fn test_bottom_label_reads_left_to_right() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("BottomLabel", 6.0, PI)
        .with_style(ArcLabelStyle::new().align(Align::Start).font_size(12.0));
    draw(&mut label, &mut canvas);

    let xs: Vec<f32> = label
        .drawn_glyphs()
        .map(|g| g.device_position().unwrap().x)
        .collect();
    assert_eq!(xs.len(), 11);
    assert!(xs.windows(2).all(|pair| pair[0] <= pair[1]));

    for glyph in label.drawn_glyphs() {
        let rotation = normalize_degrees(glyph.rotation().unwrap());
        assert!((-90.0..=90.0).contains(&rotation), "upside down: {rotation}");
    }
}

#[test]
fn test_top_label_reads_left_to_right() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("Top", 6.0, 0.0);
    draw(&mut label, &mut canvas);

    let xs: Vec<f32> = label
        .drawn_glyphs()
        .map(|g| g.device_position().unwrap().x)
        .collect();
    assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_multiline_outward_order_at_top() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("AAA\nBBB", 6.0, 0.0);
    draw(&mut label, &mut canvas);
    assert!(mean_radius(&label, 'A') > mean_radius(&label, 'B'));
    // The innermost line sits on the declared radius.
    assert!((mean_radius(&label, 'B') - 6.0).abs() < 1e-3);
}

#[test]
fn test_multiline_outward_order_at_bottom() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("AAA\nBBB", 6.0, PI);
    draw(&mut label, &mut canvas);
    assert!(mean_radius(&label, 'A') < mean_radius(&label, 'B'));
    assert!((mean_radius(&label, 'A') - 6.0).abs() < 1e-3);
}

#[test]
fn test_multiline_keeps_screen_order_top_to_bottom() {
    let mut canvas = radar_canvas();
    for theta in [0.0, PI] {
        let mut label = ArcLabel::new("AAA\nBBB", 6.0, theta);
        draw(&mut label, &mut canvas);
        let mean_y = |line: usize| {
            let glyphs = label.line_glyphs(line);
            glyphs
                .iter()
                .map(|g| g.device_position().unwrap().y)
                .sum::<f32>()
                / glyphs.len() as f32
        };
        assert!(mean_y(0) > mean_y(1), "first line below second at theta {theta}");
    }
}

#[test]
fn test_center_stacking_is_symmetric() {
    let mut canvas = radar_canvas();
    let style = ArcLabelStyle::new().stacking(Stacking::Center);
    let mut label = ArcLabel::new("AAA\nBBB\nCCC", 6.0, 0.0).with_style(style);
    draw(&mut label, &mut canvas);

    let (a, b, c) = (
        mean_radius(&label, 'A'),
        mean_radius(&label, 'B'),
        mean_radius(&label, 'C'),
    );
    assert!((b - 6.0).abs() < 1e-3);
    assert!(((a - b) - (b - c)).abs() < 1e-3);
    assert!(a > c);
}

#[test]
fn test_line_spacing_follows_points() {
    // 100 px per data unit at 72 dpi: 50 pt of spacing is half a unit.
    let mut canvas = Canvas::new(Transform2D::scale(100.0), 72.0, HeuristicMetrics::new());
    let style = ArcLabelStyle::new().line_spacing(50.0);
    let mut label = ArcLabel::new("A\nB", 3.0, 0.0).with_style(style);
    draw(&mut label, &mut canvas);
    assert!((mean_radius(&label, 'A') - 3.5).abs() < 1e-2);
}

#[test]
fn test_direction_flips_just_past_quarter_turn() {
    let delta = 1e-3;
    let before = ArcLabel::new("Right", 6.0, FRAC_PI_2 - delta);
    let after = ArcLabel::new("Right", 6.0, FRAC_PI_2 + delta);
    assert_eq!(before.direction_sign(), DirectionSign::Clockwise);
    assert_eq!(after.direction_sign(), DirectionSign::Counterclockwise);
}

#[test]
fn test_explicit_direction_overrides_auto() {
    let mut canvas = radar_canvas();
    let style = ArcLabelStyle::new()
        .direction(Direction::Clockwise)
        .align(Align::Start);
    let mut label = ArcLabel::new("abc", 6.0, PI).with_style(style);
    draw(&mut label, &mut canvas);

    let thetas: Vec<f32> = label.drawn_glyphs().map(|g| g.theta().unwrap()).collect();
    assert!(thetas.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(thetas[0] > PI);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut label = ArcLabel::new("Pressure Regains", 6.0, 1.2);
    let before: Vec<char> = label.glyphs().map(|g| g.character()).collect();
    label.rebuild();
    label.rebuild();
    let after: Vec<char> = label.glyphs().map(|g| g.character()).collect();
    assert_eq!(before, after);
    assert_eq!(label.glyph_count(), 15);
}

#[test]
fn test_set_text_replaces_glyphs() {
    let mut label = ArcLabel::new("xA", 6.0, 0.0);
    label.set_text("Touches\nIn Box");
    assert_eq!(label.line_count(), 2);
    assert_eq!(label.glyph_count(), 12);
    assert_eq!(label.text(), "Touches\nIn Box");
}

#[test]
fn test_empty_label_draws_nothing() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("", 6.0, 0.0);
    assert_eq!(draw(&mut label, &mut canvas), 0);
    assert_eq!(label.glyphs().count(), 0);
}

#[test]
fn test_centered_top_label_is_symmetric() {
    let mut canvas = Canvas::new(
        Transform2D::scale(100.0),
        72.0,
        HeuristicMetrics::monospace(0.6),
    );
    let mut label = ArcLabel::new("Top", 1.0, 0.0);
    assert_eq!(label.direction_sign(), DirectionSign::Clockwise);
    draw(&mut label, &mut canvas);

    let thetas: Vec<f32> = label.drawn_glyphs().map(|g| g.theta().unwrap()).collect();
    assert_eq!(thetas.len(), 3);
    assert!((thetas[0] + thetas[2]).abs() < 1e-5);
    assert!(thetas[1].abs() < 1e-5);
}

#[test]
fn test_centered_extent_is_symmetric_for_proportional_text() {
    let mut canvas = Canvas::new(Transform2D::scale(100.0), 72.0, HeuristicMetrics::new());
    let metrics = HeuristicMetrics::new();
    let mut label = ArcLabel::new("Top", 1.0, 0.0);
    draw(&mut label, &mut canvas);

    let glyphs: Vec<&Glyph> = label.drawn_glyphs().collect();
    // Font size 10 at 72 dpi, 100 px radius: half an advance in radians.
    let half = |c: char| metrics.advance_em(c) * 10.0 * 0.5 / 100.0;
    let leading = glyphs[0].theta().unwrap() - half('T');
    let trailing = glyphs[2].theta().unwrap() + half('p');
    assert!((leading + trailing).abs() < 1e-5);
}

#[test]
fn test_start_and_end_alignment() {
    let mut canvas = radar_canvas();
    let theta = 0.4;

    let mut start = ArcLabel::new("abc", 6.0, theta)
        .with_style(ArcLabelStyle::new().align(Align::Start));
    draw(&mut start, &mut canvas);
    assert!(start.drawn_glyphs().all(|g| g.theta().unwrap() > theta));

    let mut end = ArcLabel::new("abc", 6.0, theta)
        .with_style(ArcLabelStyle::new().align(Align::End));
    draw(&mut end, &mut canvas);
    assert!(end.drawn_glyphs().all(|g| g.theta().unwrap() < theta));
}

#[test]
fn test_letter_spacing_widens_arc() {
    let mut canvas = radar_canvas();
    let spread = |label: &ArcLabel| {
        let thetas: Vec<f32> = label.drawn_glyphs().map(|g| g.theta().unwrap()).collect();
        thetas[thetas.len() - 1] - thetas[0]
    };

    let mut tight = ArcLabel::new("abc", 6.0, 0.0);
    let mut loose =
        ArcLabel::new("abc", 6.0, 0.0).with_style(ArcLabelStyle::new().letter_spacing(4.0));
    draw(&mut tight, &mut canvas);
    draw(&mut loose, &mut canvas);
    assert!(spread(&loose) > spread(&tight));
}

#[test]
fn test_pan_keeps_data_positions() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("Dribbles", 6.0, 2.0);
    draw(&mut label, &mut canvas);
    let before: Vec<Vec2> = label.drawn_glyphs().map(|g| g.data_position().unwrap()).collect();

    let panned = canvas.transform().pan(Vec2::new(35.0, -12.0));
    canvas.set_transform(panned);
    draw(&mut label, &mut canvas);
    let after: Vec<Vec2> = label.drawn_glyphs().map(|g| g.data_position().unwrap()).collect();

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert!((*a - *b).length() < 1e-4);
    }
}

#[test]
fn test_zoom_recomputes_angular_extent() {
    let mut canvas = radar_canvas();
    let mut label = ArcLabel::new("Dribbles", 6.0, 0.0);
    let offsets = |label: &ArcLabel| -> Vec<f32> {
        label.drawn_glyphs().map(|g| g.theta().unwrap()).collect()
    };

    draw(&mut label, &mut canvas);
    let before = offsets(&label);

    let zoomed = canvas.transform().zoom_about(Vec2::new(200.0, 200.0), 2.0);
    canvas.set_transform(zoomed);
    draw(&mut label, &mut canvas);
    let after = offsets(&label);

    // Glyphs keep their pixel size, so the arc they span halves.
    for (a, b) in before.iter().zip(&after) {
        assert!((a * 0.5 - b).abs() < 1e-4);
    }
}

#[test]
fn test_anisotropic_view_keeps_glyphs_on_circle() {
    let mut canvas = Canvas::new(
        Transform2D::scale_xy(Vec2::new(60.0, 30.0)),
        96.0,
        HeuristicMetrics::new(),
    );
    let mut label = ArcLabel::new("Miscontrol", 6.0, 2.4).with_center(Vec2::new(1.0, -2.0));
    draw(&mut label, &mut canvas);
    assert_eq!(label.drawn_glyphs().count(), 10);
    for glyph in label.drawn_glyphs() {
        let offset = glyph.data_position().unwrap() - Vec2::new(1.0, -2.0);
        assert!((offset.length() - 6.0).abs() < 1e-3);
    }
}

#[test]
fn test_background_warns_once_per_canvas() {
    let mut canvas = radar_canvas();
    let style = ArcLabelStyle::new().background(BackgroundBox {
        fill: Color::WHITE,
        padding: 3.0,
    });
    let mut labels: Vec<ArcLabel> = (0..4)
        .map(|i| ArcLabel::new("xG", 6.0, i as f32).with_style(style.clone()))
        .collect();
    for label in &mut labels {
        draw(label, &mut canvas);
    }
    assert!(canvas.warning_log().has_warned(BACKGROUND_WARNING));
    assert_eq!(canvas.warning_log().len(), 1);

    // A fresh context warns again.
    let mut other = radar_canvas();
    assert!(!other.warning_log().has_warned(BACKGROUND_WARNING));
    draw(&mut labels[0], &mut other);
    assert!(other.warning_log().has_warned(BACKGROUND_WARNING));
}

#[test]
fn test_outline_backend_attaches_outlines() {
    let mut canvas = radar_canvas();
    let mut backend = OutlineBackend::new(HeuristicMetrics::new());
    let mut label = ArcLabel::new("Key Passes", 6.0, 0.0);

    assert_eq!(label.draw(&mut canvas, &mut backend), 9);
    assert_eq!(backend.fills().len(), 9);
    assert!(label.drawn_glyphs().all(|g| g.outline().is_some()));
    let chars: String = backend.fills().iter().map(|fill| fill.character).collect();
    assert_eq!(chars, "KeyPasses");
}

#[test]
fn test_outline_baseline_shifts_toward_visual_center() {
    let mut canvas = radar_canvas();

    // Clockwise at the top: the baseline moves inward.
    let mut backend = OutlineBackend::new(HeuristicMetrics::new());
    let mut top = ArcLabel::new("Top", 6.0, 0.0);
    top.draw(&mut canvas, &mut backend);
    assert!(top.drawn_glyphs().all(|g| radius_of(g) < 6.0));

    // Counterclockwise at the bottom: glyphs are flipped, so it moves outward.
    let mut bottom = ArcLabel::new("Bottom", 6.0, PI);
    bottom.draw(&mut canvas, &mut backend);
    assert!(bottom.drawn_glyphs().all(|g| radius_of(g) > 6.0));

    // Text runs are centered already and stay on the radius.
    let mut plain = ArcLabel::new("Top", 6.0, 0.0);
    draw(&mut plain, &mut canvas);
    assert!(plain.drawn_glyphs().all(|g| (radius_of(g) - 6.0).abs() < 1e-3));
}

#[test]
fn test_outline_ink_straddles_the_radius() {
    let mut canvas = Canvas::new(Transform2D::scale(100.0), 72.0, HeuristicMetrics::new());
    let mut backend = OutlineBackend::new(HeuristicMetrics::new());
    // 'H' has cap-height ink and no descent; the probe adds descender room,
    // so the box straddles the ring at 100 px.
    let mut label = ArcLabel::new("H", 1.0, 0.0);
    label.draw(&mut canvas, &mut backend);

    let bounds = label.glyphs().next().unwrap().outline().unwrap().bounds().unwrap();
    assert!(bounds.min().y < 100.0);
    assert!(bounds.max().y > 100.0);
    assert!((bounds.center().x).abs() < 1e-3);
}

#[test]
fn test_outline_multiline_keeps_stacking_order() {
    let mut canvas = radar_canvas();
    let mut backend = OutlineBackend::new(HeuristicMetrics::new());

    // Top: first line outermost, and the whole block shifts inward by the
    // centerline offset.
    let mut top = ArcLabel::new("AAA\nBBB", 6.0, 0.0);
    assert_eq!(top.draw(&mut canvas, &mut backend), 6);
    assert!(mean_radius(&top, 'A') > mean_radius(&top, 'B'));
    assert!(mean_radius(&top, 'B') < 6.0);

    // Bottom: first line innermost, shifted outward.
    let mut bottom = ArcLabel::new("AAA\nBBB", 6.0, PI);
    assert_eq!(bottom.draw(&mut canvas, &mut backend), 6);
    assert!(mean_radius(&bottom, 'A') < mean_radius(&bottom, 'B'));
    assert!(mean_radius(&bottom, 'A') > 6.0);

    // The correction moves both lines by the same amount.
    let mut plain_top = ArcLabel::new("AAA\nBBB", 6.0, 0.0);
    draw(&mut plain_top, &mut canvas);
    let gap_outline = mean_radius(&top, 'A') - mean_radius(&top, 'B');
    let gap_plain = mean_radius(&plain_top, 'A') - mean_radius(&plain_top, 'B');
    assert!((gap_outline - gap_plain).abs() < 1e-3);
    assert_eq!(backend.fills().len(), 12);
}

#[test]
fn test_non_finite_view_draws_nothing() {
    let mut canvas = Canvas::new(Transform2D::scale(f32::NAN), 72.0, HeuristicMetrics::new());
    let mut label = ArcLabel::new("AAA\nBBB", 6.0, 0.5);
    assert_eq!(draw(&mut label, &mut canvas), 0);
    assert_eq!(label.drawn_glyphs().count(), 0);

    let mut backend = OutlineBackend::new(HeuristicMetrics::new());
    assert_eq!(label.draw(&mut canvas, &mut backend), 0);
    assert!(backend.fills().is_empty());

    let mut infinite = Canvas::new(Transform2D::scale(f32::INFINITY), 72.0, HeuristicMetrics::new());
    assert_eq!(draw(&mut label, &mut infinite), 0);
}
