//! Vector paths for glyph outlines.
//!
//! Outlines are authored in font units (points, baseline-left origin, y up)
//! and mapped into device space with [`Path::transformed`].

use glam::Vec2;

use crate::{Rect, Transform2D};

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(Vec2),
    /// Draw a line to a position.
    LineTo(Vec2),
    /// Draw a quadratic Bezier curve.
    QuadTo { control: Vec2, to: Vec2 },
    /// Draw a cubic Bezier curve.
    CubicTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

impl PathCommand {
    /// Apply `f` to every point the command carries.
    fn map_points(self, mut f: impl FnMut(Vec2) -> Vec2) -> Self {
        match self {
            PathCommand::MoveTo(to) => PathCommand::MoveTo(f(to)),
            PathCommand::LineTo(to) => PathCommand::LineTo(f(to)),
            PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                control: f(control),
                to: f(to),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Conservative bounds: curve control points are included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = Vec::new();
        for cmd in &self.commands {
            cmd.map_points(|p| {
                points.push(p);
                p
            });
        }

        let (first, rest) = points.split_first()?;
        let bounds = rest
            .iter()
            .fold(Rect::from_min_max(*first, *first), |acc, p| acc.union_point(*p));

        (bounds.min().is_finite() && bounds.max().is_finite()).then_some(bounds)
    }

    /// Copy of this path with every point mapped through `transform`.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.map_points(|p| transform.transform_point(p)))
                .collect(),
        }
    }

    /// Append all commands of `other`.
    pub fn extend(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: Vec2,
    subpath_start: Vec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `to`.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self
    }

    /// Draw a line to `to`.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a quadratic Bezier curve to `to`.
    pub fn quad_to(&mut self, control: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self.current_pos = to;
        self
    }

    /// Draw a cubic Bezier curve to `to`.
    pub fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current_pos = self.subpath_start;
        self
    }

    /// Add an axis-aligned rectangle as a closed sub-path.
    pub fn rect(&mut self, position: Vec2, size: Vec2) -> &mut Self {
        self.move_to(position);
        self.line_to(position + Vec2::new(size.x, 0.0));
        self.line_to(position + size);
        self.line_to(position + Vec2::new(0.0, size.y));
        self.close()
    }

    /// Add a closed polygon through `points`. Empty input adds nothing.
    pub fn polygon(&mut self, points: &[Vec2]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        self.move_to(*first);
        for point in rest {
            self.line_to(*point);
        }
        self.close()
    }

    /// Get the current pen position.
    pub fn current_pos(&self) -> Vec2 {
        self.current_pos
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}
