//! Styling for curved labels.
//!
//! [`ArcLabelStyle`] holds the layout options (alignment, direction, radial
//! stacking, spacing) and the [`GlyphStyle`] that is copied onto every glyph
//! a label produces. Glyph styles are forwarded to the backend untouched.

/// Where the anchor angle sits relative to the laid-out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The anchor is the leading edge of the first glyph.
    Start,
    /// The anchor is the middle of the text.
    #[default]
    Center,
    /// The anchor is the trailing edge of the last glyph.
    End,
}

/// Direction glyphs progress around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Clockwise on the upper half of the ring, counterclockwise on the lower
    /// half, so text always reads left to right on screen.
    #[default]
    Auto,
    Clockwise,
    Counterclockwise,
}

/// How the lines of a multi-line label are assigned radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stacking {
    /// The block grows away from the declared radius, keeping the first line
    /// on top in screen space.
    #[default]
    Outward,
    /// The block is centered on the declared radius.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font selection passed to the measurement service.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Size in points.
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 10.0,
            weight: FontWeight::Normal,
            italic: false,
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            ..Self::default()
        }
    }
}

/// RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn hex(code: &str) -> Option<Self> {
        let digits = code.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(digits.get(i..i + 2)?, 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Per-glyph drawing attributes, forwarded opaquely to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphStyle {
    pub font: FontSpec,
    pub color: Color,
    pub alpha: Option<f32>,
    /// Clip glyphs to the host's plotting area.
    pub clip: bool,
    pub zorder: f32,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            color: Color::BLACK,
            alpha: None,
            clip: false,
            zorder: 3.0,
        }
    }
}

/// A filled box behind the text. Curved labels cannot draw one; it is
/// accepted so straight and curved labels share a style, then ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundBox {
    pub fill: Color,
    pub padding: f32,
}

/// Layout and style options for an [`ArcLabel`](crate::ArcLabel).
///
/// ```
/// use pitchviz_text::{Align, ArcLabelStyle, Color};
///
/// let style = ArcLabelStyle::new()
///     .align(Align::Start)
///     .font_size(12.0)
///     .letter_spacing(0.5)
///     .color(Color::WHITE);
/// assert_eq!(style.line_spacing_points(), 12.0 * 1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLabelStyle {
    pub align: Align,
    pub direction: Direction,
    pub stacking: Stacking,
    /// Explicit distance between line baselines, in points.
    pub line_spacing: Option<f32>,
    /// Line spacing as a multiple of the font size when `line_spacing` is unset.
    pub line_height: f32,
    /// Extra space between characters, in points.
    pub letter_spacing: f32,
    pub glyph: GlyphStyle,
    pub background: Option<BackgroundBox>,
}

impl Default for ArcLabelStyle {
    fn default() -> Self {
        Self {
            align: Align::default(),
            direction: Direction::default(),
            stacking: Stacking::default(),
            line_spacing: None,
            line_height: 1.2,
            letter_spacing: 0.0,
            glyph: GlyphStyle::default(),
            background: None,
        }
    }
}

impl ArcLabelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn stacking(mut self, stacking: Stacking) -> Self {
        self.stacking = stacking;
        self
    }

    pub fn line_spacing(mut self, points: f32) -> Self {
        self.line_spacing = Some(points);
        self
    }

    pub fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    pub fn letter_spacing(mut self, points: f32) -> Self {
        self.letter_spacing = points;
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.glyph.font = font;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.glyph.font.size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.glyph.font.family = family.into();
        self
    }

    pub fn bold(mut self) -> Self {
        self.glyph.font.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.glyph.font.italic = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.glyph.color = color;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.glyph.alpha = Some(alpha);
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.glyph.clip = clip;
        self
    }

    pub fn zorder(mut self, zorder: f32) -> Self {
        self.glyph.zorder = zorder;
        self
    }

    pub fn background(mut self, background: BackgroundBox) -> Self {
        self.background = Some(background);
        self
    }

    /// Distance between line baselines in points.
    pub fn line_spacing_points(&self) -> f32 {
        self.line_spacing
            .unwrap_or(self.glyph.font.size * self.line_height)
    }
}
