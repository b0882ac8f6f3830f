//! Curved labels: text laid out glyph by glyph along a circular arc.
//!
//! An [`ArcLabel`] owns its glyph list. The list is rebuilt whenever the text
//! or style changes; poses are recomputed from the host's current transform
//! on every [`ArcLabel::draw`], so a label follows pans and zooms without any
//! cached pixel measurements.

use glam::Vec2;
use pitchviz_core::math::polar_to_cartesian;
use pitchviz_core::profiling::profile_function;
use pitchviz_geometry::Path;

use crate::backend::{GlyphBackend, GlyphPlacement, RenderMode};
use crate::host::RenderHost;
use crate::layout::{DirectionSign, LineRun, RadialFrame, centerline_offset, glyph_rotation};
use crate::style::{ArcLabelStyle, GlyphStyle};

/// Warning category raised when a curved label carries a background box.
pub const BACKGROUND_WARNING: &str = "curved-text.background";

/// Where a glyph was placed by the last draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPose {
    /// Anchor in data coordinates.
    pub data_position: Vec2,
    /// Anchor in device pixels.
    pub device_position: Vec2,
    /// Counter-clockwise screen rotation in degrees.
    pub rotation: f32,
    /// Arc angle of the glyph center, radians clockwise from up.
    pub theta: f32,
}

/// One drawable character of a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    character: char,
    line: usize,
    column: usize,
    style: GlyphStyle,
    pose: Option<GlyphPose>,
    outline: Option<Path>,
}

impl Glyph {
    /// The character this glyph draws.
    pub fn character(&self) -> char {
        self.character
    }

    /// Index of the line this glyph belongs to.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Character index within the line, whitespace included.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Style forwarded to the backend.
    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    /// `None` until the glyph has been drawn, or when its line was skipped.
    pub fn pose(&self) -> Option<&GlyphPose> {
        self.pose.as_ref()
    }

    /// Anchor in data coordinates after the last draw.
    pub fn data_position(&self) -> Option<Vec2> {
        self.pose.map(|pose| pose.data_position)
    }

    /// Anchor in device pixels after the last draw.
    pub fn device_position(&self) -> Option<Vec2> {
        self.pose.map(|pose| pose.device_position)
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> Option<f32> {
        self.pose.map(|pose| pose.rotation)
    }

    /// Arc angle of the glyph center.
    pub fn theta(&self) -> Option<f32> {
        self.pose.map(|pose| pose.theta)
    }

    /// Device-space outline, set by outline backends.
    pub fn outline(&self) -> Option<&Path> {
        self.outline.as_ref()
    }

    /// Whether the last draw placed this glyph.
    pub fn is_drawn(&self) -> bool {
        self.pose.is_some()
    }

    fn clear_pose(&mut self) {
        self.pose = None;
        self.outline = None;
    }
}

#[derive(Debug, Clone)]
struct LineGlyphs {
    text: String,
    chars: Vec<char>,
    /// Non-whitespace characters only, in reading order.
    glyphs: Vec<Glyph>,
}

impl LineGlyphs {
    fn new(index: usize, text: &str, style: &GlyphStyle) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let glyphs = chars
            .iter()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(column, &character)| Glyph {
                character,
                line: index,
                column,
                style: style.clone(),
                pose: None,
                outline: None,
            })
            .collect();

        Self {
            text: text.to_string(),
            chars,
            glyphs,
        }
    }
}

/// Text drawn along a circle of `radius` around `center`, anchored at
/// `theta` (radians clockwise from up).
///
/// ```
/// use pitchviz_text::{ArcLabel, ArcLabelStyle, Canvas, HeuristicMetrics, TextRunBackend};
/// use pitchviz_geometry::{Rect, Transform2D};
/// use glam::Vec2;
///
/// let mut canvas = Canvas::square(Rect::centered(Vec2::ZERO, 2.0), 4.0, 100.0, HeuristicMetrics::new());
/// let mut backend = TextRunBackend::new();
///
/// let mut label = ArcLabel::new("Top", 1.0, 0.0).with_style(ArcLabelStyle::new().font_size(12.0));
/// assert_eq!(label.draw(&mut canvas, &mut backend), 3);
/// assert_eq!(backend.runs().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ArcLabel {
    text: String,
    center: Vec2,
    radius: f32,
    theta: f32,
    style: ArcLabelStyle,
    lines: Vec<LineGlyphs>,
}

impl ArcLabel {
    /// Create a label centered on the origin with the default style.
    pub fn new(text: impl Into<String>, radius: f32, theta: f32) -> Self {
        let mut label = Self {
            text: text.into(),
            center: Vec2::ZERO,
            radius,
            theta,
            style: ArcLabelStyle::default(),
            lines: Vec::new(),
        };
        label.rebuild();
        label
    }

    /// Set the circle center in data coordinates.
    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: ArcLabelStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Get the source text, line breaks included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and rebuild the glyph list.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.rebuild();
    }

    /// Get the style.
    pub fn style(&self) -> &ArcLabelStyle {
        &self.style
    }

    /// Replace the style. Glyph styles are re-copied from the new base style.
    pub fn set_style(&mut self, style: ArcLabelStyle) {
        self.style = style;
        self.rebuild();
    }

    /// Circle center in data coordinates.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Declared radius in data units.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Anchor angle in radians, clockwise from up.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Direction the glyphs run for the current anchor angle.
    pub fn direction_sign(&self) -> DirectionSign {
        self.style.direction.resolve(self.theta)
    }

    /// Split the text into lines and recreate one glyph per non-whitespace
    /// character. Empty text produces a single empty line.
    pub fn rebuild(&mut self) {
        let base = &self.style.glyph;
        let mut lines: Vec<LineGlyphs> = self
            .text
            .lines()
            .enumerate()
            .map(|(index, line)| LineGlyphs::new(index, line, base))
            .collect();
        if lines.is_empty() {
            lines.push(LineGlyphs::new(0, "", base));
        }
        self.lines = lines;
    }

    /// Number of lines, at least one.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of each line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Glyphs of line `index`, empty when out of range.
    pub fn line_glyphs(&self, index: usize) -> &[Glyph] {
        self.lines
            .get(index)
            .map(|line| line.glyphs.as_slice())
            .unwrap_or(&[])
    }

    /// All glyphs in line then reading order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.lines.iter().flat_map(|line| line.glyphs.iter())
    }

    /// Glyphs that received a pose in the last draw.
    pub fn drawn_glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs().filter(|glyph| glyph.is_drawn())
    }

    /// Number of glyphs across all lines.
    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(|line| line.glyphs.len()).sum()
    }

    /// Lay the label out against the host's current transform and hand every
    /// glyph to `backend`. Returns the number of glyphs placed.
    pub fn draw<H, B>(&mut self, host: &mut H, backend: &mut B) -> usize
    where
        H: RenderHost + ?Sized,
        B: GlyphBackend + ?Sized,
    {
        profile_function!();

        let Self {
            center,
            radius,
            theta,
            style,
            lines,
            ..
        } = self;
        let (center, radius, theta) = (*center, *radius, *theta);

        lines
            .iter_mut()
            .flat_map(|line| line.glyphs.iter_mut())
            .for_each(Glyph::clear_pose);

        if style.background.is_some() {
            host.warnings().warn(
                BACKGROUND_WARNING,
                "background boxes are not supported on curved text and will be ignored",
            );
        }

        let sign = style.direction.resolve(theta);
        let pixels_per_point = host.pixels_per_point();
        let frame = RadialFrame::sample(&*host, center, radius, theta);
        let spacing = frame.points_to_data(style.line_spacing_points(), pixels_per_point);
        let mode = backend.mode();
        let font = &style.glyph.font;
        let count = lines.len();
        let origin = host.data_to_device(center);

        let mut placed = 0;
        for (index, line) in lines.iter_mut().enumerate() {
            if line.chars.is_empty() {
                continue;
            }

            let mut line_radius =
                radius + style.stacking.offset_factor(frame.outward_is_up, index, count) * spacing;
            if mode == RenderMode::Outline {
                let offset = centerline_offset(&mut *host, font, &line.text);
                line_radius -= sign.factor() * frame.points_to_data(offset, pixels_per_point);
            }

            let edge = host.data_to_device(polar_to_cartesian(center, line_radius, theta));
            let radius_px = (edge - origin).length();
            if !radius_px.is_finite() || radius_px <= 0.0 {
                tracing::debug!(line = index, radius_px, "degenerate device radius, skipping line");
                continue;
            }

            let run = LineRun::measure(&mut *host, font, &line.chars, style.letter_spacing);
            let extent = run.width / radius_px;
            let start = style.align.start_angle(theta, sign, extent);
            tracing::debug!(
                line = index,
                chars = line.chars.len(),
                radius = line_radius,
                radius_px,
                extent,
                "laying out curved line"
            );

            let mut glyphs = line.glyphs.iter_mut().peekable();
            for ((column, &character), (offset, advance)) in line
                .chars
                .iter()
                .enumerate()
                .zip(run.centers().zip(run.advances.iter().copied()))
            {
                let Some(glyph) = glyphs.next_if(|glyph| glyph.column == column) else {
                    continue;
                };

                let glyph_theta = start + sign.factor() * offset / radius_px;
                let data_position = polar_to_cartesian(center, line_radius, glyph_theta);
                let pose = GlyphPose {
                    data_position,
                    device_position: host.data_to_device(data_position),
                    rotation: glyph_rotation(glyph_theta, sign),
                    theta: glyph_theta,
                };
                tracing::trace!(%character, theta = glyph_theta, rotation = pose.rotation, "placed glyph");

                glyph.outline = backend.draw_glyph(&GlyphPlacement {
                    character,
                    pose,
                    advance_px: advance,
                    pixels_per_point,
                    style: &glyph.style,
                });
                glyph.pose = Some(pose);
                placed += 1;
            }
        }

        placed
    }
}
