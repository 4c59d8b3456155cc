//! Document to real-world transforms driven by the calibration.

use crate::axis::{AxisMapping, AxisScale};
use crate::calibration::CalibrationState;
use crate::geom::{Point, Size, relative_position};
use crate::path::PathGeometry;
use crate::series::ExtractedSeries;
use crate::view::relative_to_view;

/// Scale selection for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisScales {
    /// X axis scale.
    pub x: AxisScale,
    /// Y axis scale.
    pub y: AxisScale,
}

impl AxisScales {
    /// Create scales for both axes.
    pub fn new(x: AxisScale, y: AxisScale) -> Self {
        Self { x, y }
    }

    /// Both axes linear.
    pub fn linear() -> Self {
        Self::default()
    }

    /// Build from "logarithmic" flags.
    pub fn from_log_flags(is_log_x: bool, is_log_y: bool) -> Self {
        Self::new(AxisScale::from_log(is_log_x), AxisScale::from_log(is_log_y))
    }
}

/// Transform bound to a complete calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibratedTransform {
    x: AxisMapping,
    y: AxisMapping,
}

impl CalibratedTransform {
    /// Bind the calibration. Returns `None` while calibration is incomplete.
    pub fn new(calibration: &CalibrationState, scales: AxisScales) -> Option<Self> {
        Some(Self {
            x: calibration.x_mapping(scales.x)?,
            y: calibration.y_mapping(scales.y)?,
        })
    }

    /// X axis mapping.
    pub fn x(&self) -> &AxisMapping {
        &self.x
    }

    /// Y axis mapping.
    pub fn y(&self) -> &AxisMapping {
        &self.y
    }

    /// Map a relative page position to real-world values.
    pub fn relative_to_real(&self, relative: Point) -> Point {
        Point::new(self.x.map(relative.x), self.y.map(relative.y))
    }

    /// Map a document point to real-world values.
    pub fn document_to_real(&self, point: Point, page: Size) -> Point {
        self.relative_to_real(relative_position(point.x, point.y, page))
    }
}

/// Output of [`transform_points`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformedPoints {
    /// Real-world values, one per input point.
    pub real: Vec<Point>,
    /// Relative page positions of the same points.
    pub relative: Vec<Point>,
}

impl TransformedPoints {
    /// Check whether nothing was transformed.
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

/// Convert document points to real-world values.
///
/// Returns an empty result while calibration is incomplete.
pub fn transform_points(
    calibration: &CalibrationState,
    points: &[Point],
    page: Size,
    scales: AxisScales,
) -> TransformedPoints {
    let Some(transform) = CalibratedTransform::new(calibration, scales) else {
        if !points.is_empty() {
            log::warn!(
                "ignoring {} points: calibration incomplete (step {})",
                points.len(),
                calibration.step()
            );
        }
        return TransformedPoints::default();
    };

    let mut out = TransformedPoints {
        real: Vec::with_capacity(points.len()),
        relative: Vec::with_capacity(points.len()),
    };
    for point in points {
        let relative = relative_position(point.x, point.y, page);
        out.real.push(transform.relative_to_real(relative));
        out.relative.push(relative);
    }
    out
}

/// Extract a calibrated series from a path, with highlight coordinates in view pixels.
pub fn extract_curve_data<P: PathGeometry + ?Sized>(
    calibration: &CalibrationState,
    path: &P,
    page: Size,
    view: Size,
    scales: AxisScales,
) -> ExtractedSeries {
    let transformed = transform_points(calibration, path.points(), page, scales);
    let highlight = transformed
        .relative
        .iter()
        .map(|relative| relative_to_view(*relative, view))
        .collect();
    ExtractedSeries::new(transformed.real, highlight)
}
