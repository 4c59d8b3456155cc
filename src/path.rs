//! Drawing paths supplied by document loaders.
//!
//! Loaders adapt whatever their backend produces (native PDF drawing commands,
//! SVG polylines) into [`DrawingPath`] once, at load time. The search and
//! extraction code only sees the [`PathGeometry`] capability.

use crate::geom::{DocRect, Point};

/// Geometry the core needs from a drawing path.
pub trait PathGeometry {
    /// Bounding rectangle in document coordinates.
    fn bounding_rect(&self) -> DocRect;

    /// Points sampled along the path, in drawing order.
    fn points(&self) -> &[Point];
}

/// A single vector drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Straight line between two points.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Cubic curve.
    Curve {
        /// Start point.
        from: Point,
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// End point.
        to: Point,
    },
}

impl PathCommand {
    /// Append the points this command contributes to a polyline.
    ///
    /// Lines contribute both endpoints; curves contribute every control and
    /// end point.
    pub fn append_points(&self, out: &mut Vec<Point>) {
        match *self {
            Self::Line { from, to } => out.extend([from, to]),
            Self::Curve {
                from,
                ctrl1,
                ctrl2,
                to,
            } => out.extend([from, ctrl1, ctrl2, to]),
        }
    }
}

/// A drawing path: bounding rectangle plus ordered points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingPath {
    rect: DocRect,
    points: Vec<Point>,
}

impl DrawingPath {
    /// Create a path with an explicit bounding rectangle.
    pub fn new(rect: DocRect, points: Vec<Point>) -> Self {
        Self { rect, points }
    }

    /// Create a path from a polyline, deriving the bounding rectangle.
    pub fn from_polyline(points: Vec<Point>) -> Self {
        let rect = DocRect::bounding(&points).unwrap_or_default();
        Self { rect, points }
    }

    /// Create a path from drawing commands, flattening them to a polyline.
    pub fn from_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = PathCommand>,
    {
        let mut points = Vec::new();
        for command in commands {
            command.append_points(&mut points);
        }
        Self::from_polyline(points)
    }

    /// Replace the bounding rectangle, e.g. with the one reported by the backend.
    pub fn with_rect(mut self, rect: DocRect) -> Self {
        self.rect = rect;
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PathGeometry for DrawingPath {
    fn bounding_rect(&self) -> DocRect {
        self.rect
    }

    fn points(&self) -> &[Point] {
        &self.points
    }
}

impl<P: PathGeometry + ?Sized> PathGeometry for &P {
    fn bounding_rect(&self) -> DocRect {
        (**self).bounding_rect()
    }

    fn points(&self) -> &[Point] {
        (**self).points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_flatten_to_endpoints() {
        let path = DrawingPath::from_commands([
            PathCommand::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 5.0),
            },
            PathCommand::Curve {
                from: Point::new(10.0, 5.0),
                ctrl1: Point::new(12.0, -3.0),
                ctrl2: Point::new(18.0, 9.0),
                to: Point::new(20.0, 4.0),
            },
        ]);
        assert_eq!(path.len(), 6);
        assert_eq!(path.points()[5], Point::new(20.0, 4.0));
        assert_eq!(path.bounding_rect(), DocRect::new(0.0, -3.0, 20.0, 9.0));
    }

    #[test]
    fn empty_polyline_has_default_rect() {
        let path = DrawingPath::from_polyline(Vec::new());
        assert!(path.is_empty());
        assert_eq!(path.bounding_rect(), DocRect::default());
    }

    #[test]
    fn explicit_rect_overrides_derived_one() {
        let rect = DocRect::new(-1.0, -1.0, 50.0, 50.0);
        let path = DrawingPath::from_polyline(vec![Point::new(1.0, 1.0)]).with_rect(rect);
        assert_eq!(path.bounding_rect(), rect);
    }
}
