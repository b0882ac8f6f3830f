//! Curved parameter labels around a radar chart.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::error::{TextError, TextResult};
use crate::label::ArcLabel;
use crate::style::ArcLabelStyle;

/// Angle of each of `count` evenly spaced parameters, clockwise from the top.
pub fn param_angles(count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| TAU * i as f32 / count as f32)
        .collect()
}

/// Greedy word wrap into lines of at most `width` characters. Words longer
/// than `width` are kept whole on their own line. Existing line breaks are
/// preserved.
///
/// ```
/// use pitchviz_text::wrap_label;
///
/// let wrapped = wrap_label("Shot-Creating Actions", 15).unwrap();
/// assert_eq!(wrapped, "Shot-Creating\nActions");
/// ```
pub fn wrap_label(text: &str, width: usize) -> TextResult<String> {
    if width == 0 {
        return Err(TextError::InvalidWrapWidth);
    }

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        lines.push(current);
    }

    Ok(lines.join("\n"))
}

/// Builds one [`ArcLabel`] per radar parameter.
///
/// ```
/// use pitchviz_text::RadarLabels;
///
/// let labels = RadarLabels::new(["npxG", "Key Passes", "Through Balls"])
///     .radius(5.5)
///     .wrap(10)
///     .build()
///     .unwrap();
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels[2].text(), "Through\nBalls");
/// ```
#[derive(Debug, Clone)]
pub struct RadarLabels {
    params: Vec<String>,
    radius: f32,
    center: Vec2,
    style: ArcLabelStyle,
    wrap: Option<usize>,
}

impl RadarLabels {
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            radius: 1.0,
            center: Vec2::ZERO,
            style: ArcLabelStyle::default(),
            wrap: None,
        }
    }

    /// Radius of the first line of every label, in data units.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn style(mut self, style: ArcLabelStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap every parameter name to `width` characters.
    pub fn wrap(mut self, width: usize) -> Self {
        self.wrap = Some(width);
        self
    }

    pub fn build(&self) -> TextResult<Vec<ArcLabel>> {
        if self.params.is_empty() {
            return Err(TextError::NoParameters);
        }

        let angles = param_angles(self.params.len());
        self.params
            .iter()
            .zip(angles)
            .map(|(param, theta)| {
                let text = match self.wrap {
                    Some(width) => wrap_label(param, width)?,
                    None => param.clone(),
                };
                Ok(ArcLabel::new(text, self.radius, theta)
                    .with_center(self.center)
                    .with_style(self.style.clone()))
            })
            .collect()
    }
}
