//! Extracted data series and their post-processing.

use std::fmt::Write as _;

use crate::geom::{Point, ViewPoint};
use crate::view::{Range, Viewport};

/// Smallest stride accepted by [`ExtractedSeries::strided`].
pub const MIN_STRIDE: usize = 1;

/// Column used to order a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Order by the calibrated X value.
    X,
    /// Order by the calibrated Y value.
    Y,
}

/// Field separator for delimited text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Tab separated.
    #[default]
    Tab,
    /// Comma separated.
    Comma,
    /// Single space separated.
    Space,
}

impl Separator {
    /// The separator character.
    pub fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Comma => ',',
            Self::Space => ' ',
        }
    }

    /// Separator to use when writing to `file_name`; `.csv` files always get commas.
    pub fn for_file_name(self, file_name: &str) -> Self {
        if file_name.to_ascii_lowercase().ends_with(".csv") {
            Self::Comma
        } else {
            self
        }
    }
}

/// Real-world data recovered from one drawing path.
///
/// `points` holds the calibrated (x, y) values in path order; `highlight`
/// holds the same points in view pixels for outlining the picked path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedSeries {
    points: Vec<Point>,
    highlight: Vec<ViewPoint>,
}

impl ExtractedSeries {
    /// Create a series from real points and their highlight coordinates.
    pub fn new(points: Vec<Point>, highlight: Vec<ViewPoint>) -> Self {
        Self { points, highlight }
    }

    /// Calibrated points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Highlight polyline in view pixels.
    pub fn highlight(&self) -> &[ViewPoint] {
        &self.highlight
    }

    /// Highlight coordinates flattened as `x0, y0, x1, y1, ...`.
    pub fn highlight_flat(&self) -> Vec<f64> {
        self.highlight
            .iter()
            .flat_map(|point| [point.x, point.y])
            .collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether the highlight forms at least one segment.
    pub fn has_highlight(&self) -> bool {
        self.highlight.len() >= 2
    }

    /// Bounds of the finite calibrated values.
    pub fn bounds(&self) -> Option<Viewport> {
        let mut finite = self.points.iter().filter(|point| point.is_finite());
        let first = finite.next()?;
        let mut x = Range::new(first.x, first.x);
        let mut y = Range::new(first.y, first.y);
        for point in finite {
            x.expand_to_include(point.x);
            y.expand_to_include(point.y);
        }
        Some(Viewport::new(x, y))
    }

    /// Consume the series, returning the calibrated points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Keep the points whose values fall inside the given ranges.
    ///
    /// `None` leaves that axis unconstrained. Bounds are inclusive; use an
    /// infinite bound for a one-sided limit. A non-finite value never lies
    /// inside a range.
    pub fn filtered(&self, x: Option<Range>, y: Option<Range>) -> Self {
        let inside = |range: Option<Range>, value: f64| range.is_none_or(|range| range.contains(value));
        let indices: Vec<usize> = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, point)| inside(x, point.x) && inside(y, point.y))
            .map(|(index, _)| index)
            .collect();
        self.select(&indices)
    }

    /// Keep every `step`-th point, starting with the first.
    ///
    /// Steps below [`MIN_STRIDE`] are raised to it.
    pub fn strided(&self, step: usize) -> Self {
        let step = step.max(MIN_STRIDE);
        let indices: Vec<usize> = (0..self.points.len()).step_by(step).collect();
        self.select(&indices)
    }

    /// Order the points by one column.
    ///
    /// The sort is stable in both directions; non-finite values use
    /// [`f64::total_cmp`] ordering.
    pub fn sorted_by(&self, column: SortColumn, descending: bool) -> Self {
        let key = |index: usize| match column {
            SortColumn::X => self.points[index].x,
            SortColumn::Y => self.points[index].y,
        };
        let mut indices: Vec<usize> = (0..self.points.len()).collect();
        indices.sort_by(|&a, &b| {
            let ordering = key(a).total_cmp(&key(b));
            if descending { ordering.reverse() } else { ordering }
        });
        self.select(&indices)
    }

    /// Render the points as delimited text with an `X<sep>Y` header line.
    pub fn to_delimited(&self, separator: Separator) -> String {
        let sep = separator.as_char();
        let mut out = format!("X{sep}Y");
        for point in &self.points {
            let _ = write!(out, "\n{}{sep}{}", point.x, point.y);
        }
        out
    }

    fn select(&self, indices: &[usize]) -> Self {
        let points = indices.iter().map(|&index| self.points[index]).collect();
        let highlight = if self.highlight.len() == self.points.len() {
            indices.iter().map(|&index| self.highlight[index]).collect()
        } else {
            Vec::new()
        };
        Self { points, highlight }
    }
}
