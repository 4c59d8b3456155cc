//! Geometric primitives shared by calibration, search, and extraction.
//!
//! [`Point`] is used for document coordinates, relative coordinates, and
//! real-world values alike; the meaning is carried by the function that
//! produces it. [`ViewPoint`] is reserved for rendered-view pixels.

/// A 2-D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A point in view space (pixels of the rendered page).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewPoint {
    /// X value in view pixels.
    pub x: f64,
    /// Y value in view pixels.
    pub y: f64,
}

impl ViewPoint {
    /// Create a new view point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a page or view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in the owning coordinate space.
    pub width: f64,
    /// Height in the owning coordinate space.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether the size has positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check whether a point lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width && y <= self.height
    }
}

/// An axis-aligned rectangle in document space.
///
/// `x0`/`y0` is the minimum corner, `x1`/`y1` the maximum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocRect {
    /// Minimum X.
    pub x0: f64,
    /// Minimum Y.
    pub y0: f64,
    /// Maximum X.
    pub x1: f64,
    /// Maximum Y.
    pub y1: f64,
}

impl DocRect {
    /// Create a rectangle, swapping bounds if needed.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Smallest rectangle containing every point, or `None` for no finite points.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let mut finite = points.iter().filter(|point| point.is_finite());
        let first = finite.next()?;
        let mut rect = Self::new(first.x, first.y, first.x, first.y);
        for point in finite {
            rect.x0 = rect.x0.min(point.x);
            rect.y0 = rect.y0.min(point.y);
            rect.x1 = rect.x1.max(point.x);
            rect.y1 = rect.y1.max(point.y);
        }
        Some(rect)
    }

    /// Rectangle width.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Rectangle height.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x0: self.x0 - margin,
            y0: self.y0 - margin,
            x1: self.x1 + margin,
            y1: self.y1 + margin,
        }
    }

    /// Check whether the rectangle contains a point (bounds inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }
}

/// Squared Euclidean distance between two points.
pub fn distance_sq(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Normalize an absolute position by a size.
///
/// Non-positive dimensions yield a relative coordinate of 0 on that axis.
pub fn relative_position(x: f64, y: f64, size: Size) -> Point {
    let rel_x = if size.width > 0.0 { x / size.width } else { 0.0 };
    let rel_y = if size.height > 0.0 { y / size.height } else { 0.0 };
    Point::new(rel_x, rel_y)
}

/// Scale a relative position back to absolute coordinates.
pub fn absolute_position(relative: Point, size: Size) -> Point {
    Point::new(relative.x * size.width, relative.y * size.height)
}
