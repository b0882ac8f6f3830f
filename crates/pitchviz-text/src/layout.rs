//! Arc layout math: direction resolution, per-line advances, alignment and
//! radial stacking.
//!
//! Angles follow the radar convention (`theta = 0` at the top, growing
//! clockwise). Everything measured in pixels is derived from the host's
//! current transform at call time.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use pitchviz_core::math::{normalize_angle, polar_to_cartesian};

use crate::host::RenderHost;
use crate::style::{Align, Direction, FontSpec, Stacking};

/// Reference string whose metrics floor a line's ascent and descent when
/// outline glyphs are centered on their radius. A heuristic calibration.
pub const CENTERLINE_PROBE: &str = "Hg";

/// Resolved direction of glyph progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionSign {
    Clockwise,
    Counterclockwise,
}

impl DirectionSign {
    /// `+1` for clockwise, `-1` for counterclockwise.
    pub fn factor(self) -> f32 {
        match self {
            DirectionSign::Clockwise => 1.0,
            DirectionSign::Counterclockwise => -1.0,
        }
    }
}

impl Direction {
    /// Resolve against the anchor angle. `Auto` runs counterclockwise
    /// strictly inside the lower half of the ring (`π/2 < θ < 3π/2`).
    pub fn resolve(self, theta: f32) -> DirectionSign {
        match self {
            Direction::Clockwise => DirectionSign::Clockwise,
            Direction::Counterclockwise => DirectionSign::Counterclockwise,
            Direction::Auto => {
                let theta = normalize_angle(theta);
                if theta > FRAC_PI_2 && theta < 3.0 * FRAC_PI_2 {
                    DirectionSign::Counterclockwise
                } else {
                    DirectionSign::Clockwise
                }
            }
        }
    }
}

impl Align {
    /// Angle of the first glyph's leading edge for text spanning `extent`
    /// radians, anchored at `theta`.
    pub fn start_angle(self, theta: f32, sign: DirectionSign, extent: f32) -> f32 {
        match self {
            Align::Start => theta,
            Align::Center => theta - sign.factor() * extent * 0.5,
            Align::End => theta - sign.factor() * extent,
        }
    }
}

impl Stacking {
    /// Multiple of the line spacing added to the declared radius for line
    /// `index` of `count`.
    pub fn offset_factor(self, outward_is_up: bool, index: usize, count: usize) -> f32 {
        let i = index as f32;
        let last = count.saturating_sub(1) as f32;
        match (self, outward_is_up) {
            (Stacking::Center, true) => last * 0.5 - i,
            (Stacking::Center, false) => i - last * 0.5,
            (Stacking::Outward, true) => last - i,
            (Stacking::Outward, false) => i,
        }
    }
}

/// How radius maps to the screen around the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RadialFrame {
    /// Growing the radius moves up on screen (device y increases).
    pub outward_is_up: bool,
    /// Device pixels per data unit along the radius; `0.0` when degenerate.
    pub pixels_per_unit: f32,
}

impl RadialFrame {
    pub fn sample<H: RenderHost + ?Sized>(host: &H, center: Vec2, radius: f32, theta: f32) -> Self {
        let epsilon = (radius.abs() * 1e-3).max(1e-6);
        let inner = host.data_to_device(polar_to_cartesian(center, radius, theta));
        let outer = host.data_to_device(polar_to_cartesian(center, radius + epsilon, theta));

        let pixels_per_unit = (outer - inner).length() / epsilon;
        Self {
            outward_is_up: outer.y >= inner.y,
            pixels_per_unit: if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
                pixels_per_unit
            } else {
                0.0
            },
        }
    }

    /// Convert a length in points into data units along the radius.
    pub fn points_to_data(&self, points: f32, pixels_per_point: f32) -> f32 {
        if self.pixels_per_unit > 0.0 {
            points * pixels_per_point / self.pixels_per_unit
        } else {
            0.0
        }
    }
}

/// Horizontal metrics of one line, in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineRun {
    pub advances: Vec<f32>,
    /// Extra space after every character but the last.
    pub spacing: f32,
    /// Advances plus spacing.
    pub width: f32,
}

impl LineRun {
    /// Measure every character on its own so that host kerning or shaping
    /// of longer runs cannot shift individual advances.
    pub fn measure<H: RenderHost + ?Sized>(
        host: &mut H,
        font: &FontSpec,
        chars: &[char],
        letter_spacing: f32,
    ) -> Self {
        let pixels_per_point = host.pixels_per_point();
        let mut buf = [0u8; 4];
        let advances: Vec<f32> = chars
            .iter()
            .map(|ch| host.measure(font, ch.encode_utf8(&mut buf)).width * pixels_per_point)
            .collect();

        let spacing = letter_spacing * pixels_per_point;
        let gaps = advances.len().saturating_sub(1) as f32;
        let width = advances.iter().sum::<f32>() + spacing * gaps;

        Self {
            advances,
            spacing,
            width,
        }
    }

    /// Offsets from the start of the line to the middle of each character.
    pub fn centers(&self) -> impl Iterator<Item = f32> + '_ {
        self.advances.iter().scan(0.0_f32, move |cursor, advance| {
            let center = *cursor + advance * 0.5;
            *cursor += advance + self.spacing;
            Some(center)
        })
    }
}

/// Screen rotation in degrees for a glyph centered at `theta`; glyphs running
/// counterclockwise are turned half a revolution to stay upright.
pub fn glyph_rotation(theta: f32, sign: DirectionSign) -> f32 {
    let rotation = -theta.to_degrees();
    match sign {
        DirectionSign::Clockwise => rotation,
        DirectionSign::Counterclockwise => rotation + 180.0,
    }
}

/// Distance in points from the baseline to the visual centerline of `text`.
pub(crate) fn centerline_offset<H: RenderHost + ?Sized>(
    host: &mut H,
    font: &FontSpec,
    text: &str,
) -> f32 {
    let line = host.measure(font, text);
    let probe = host.measure(font, CENTERLINE_PROBE);
    let ascent = line.ascent().max(probe.ascent());
    let descent = line.descent.max(probe.descent);
    (ascent - descent) * 0.5
}
