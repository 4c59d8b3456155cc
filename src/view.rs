//! Value ranges and view/document conversions.

use crate::geom::{Point, Size, ViewPoint};

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Check whether the range contains a value.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }
}

/// Convert a click in the rendered view into document coordinates.
///
/// Returns `None` when the view has no area or the click lies outside it.
pub fn view_to_document(point: ViewPoint, view: Size, page: Size) -> Option<Point> {
    if !view.is_valid() || !view.contains(point.x, point.y) {
        return None;
    }
    Some(Point::new(
        point.x / view.width * page.width,
        point.y / view.height * page.height,
    ))
}

/// Convert a relative position into view pixels.
pub fn relative_to_view(relative: Point, view: Size) -> ViewPoint {
    ViewPoint::new(relative.x * view.width, relative.y * view.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_expands_and_swaps() {
        let mut range = Range::new(5.0, 1.0);
        assert_eq!((range.min, range.max), (1.0, 5.0));
        range.expand_to_include(7.0);
        range.expand_to_include(f64::NAN);
        assert_eq!(range, Range::new(1.0, 7.0));
        assert!(range.contains(7.0));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn view_click_maps_to_document() {
        let view = Size::new(400.0, 200.0);
        let page = Size::new(200.0, 100.0);
        let doc = view_to_document(ViewPoint::new(40.0, 100.0), view, page).expect("inside");
        assert_eq!(doc, Point::new(20.0, 50.0));
        assert!(view_to_document(ViewPoint::new(-1.0, 10.0), view, page).is_none());
        assert!(view_to_document(ViewPoint::new(1.0, 1.0), Size::default(), page).is_none());
    }

    #[test]
    fn relative_scales_into_view() {
        let point = relative_to_view(Point::new(0.25, 0.5), Size::new(800.0, 600.0));
        assert_eq!(point, ViewPoint::new(200.0, 300.0));
    }
}
