use std::fmt::Write;

use crate::PathTarget;

/// A position in device space: pixels, Y growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// One drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { to: Point, control: Point },
}

impl PathOp {
    pub fn end(&self) -> Point {
        match *self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => p,
            PathOp::QuadCurveTo { to, .. } => to,
        }
    }

    /// Control point of a curve. Straight ops report their end point so
    /// consumers can query every op the same way.
    pub fn control(&self) -> Point {
        match *self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => p,
            PathOp::QuadCurveTo { control, .. } => control,
        }
    }

    pub fn x(&self) -> f64 {
        self.end().x
    }

    pub fn y(&self) -> f64 {
        self.end().y
    }

    pub fn control_x(&self) -> f64 {
        self.control().x
    }

    pub fn control_y(&self) -> f64 {
        self.control().y
    }
}

/// Laid out text: path commands in drawing order and the horizontal advance
/// of the whole string.
///
/// Contours and glyphs are concatenated without separators; every contour
/// starts with a [`PathOp::MoveTo`] and ends back on that point.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPath {
    ops: Vec<PathOp>,
    width: f64,
}

impl TextPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<PathOp> {
        self.ops
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        self.ops.push(PathOp::MoveTo(p));
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.ops.push(PathOp::LineTo(p));
    }

    pub(crate) fn quad_curve_to(&mut self, to: Point, control: Point) {
        self.ops.push(PathOp::QuadCurveTo { to, control });
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Replays every op onto a drawing target, stopping at the first error.
    pub fn draw<T: PathTarget>(&self, target: &mut T) -> std::result::Result<(), T::Error> {
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => target.move_to(p.x, p.y)?,
                PathOp::LineTo(p) => target.line_to(p.x, p.y)?,
                PathOp::QuadCurveTo { to, control } => {
                    target.quad_to(control.x, control.y, to.x, to.y)?
                }
            }
        }
        Ok(())
    }

    /// SVG path data (`d` attribute) for the ops.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if !out.is_empty() {
                out.push(' ');
            }
            // writing into a String cannot fail
            let _ = match *op {
                PathOp::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
                PathOp::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
                PathOp::QuadCurveTo { to, control } => {
                    write!(out, "Q{} {} {} {}", control.x, control.y, to.x, to.y)
                }
            };
        }
        out
    }
}
