//! Four-point axis calibration.
//!
//! Calibration collects two reference clicks per axis in the fixed order
//! X1, X2, Y1, Y2. Each click is stored as a relative page position together
//! with the real-world value the user declared for it. Once all four slots are
//! filled the state yields an [`AxisMapping`] per axis.

use crate::axis::{AxisMapping, AxisScale, MIN_DISTANCE_EPSILON};
use crate::config::CalibrationDefaults;
use crate::geom::Point;

/// One of the four calibration slots, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationSlot {
    /// First X reference.
    X1,
    /// Second X reference.
    X2,
    /// First Y reference.
    Y1,
    /// Second Y reference.
    Y2,
}

/// Axis calibrated by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl CalibrationSlot {
    /// All slots in fill order.
    pub const ALL: [Self; 4] = [Self::X1, Self::X2, Self::Y1, Self::Y2];

    /// Lowercase key (`"x1"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::Y1 => "y1",
            Self::Y2 => "y2",
        }
    }

    /// Display label (`"X1"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::X1 => "X1",
            Self::X2 => "X2",
            Self::Y1 => "Y1",
            Self::Y2 => "Y2",
        }
    }

    /// Axis this slot calibrates.
    pub fn axis(self) -> Axis {
        match self {
            Self::X1 | Self::X2 => Axis::X,
            Self::Y1 | Self::Y2 => Axis::Y,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::X1 => 0,
            Self::X2 => 1,
            Self::Y1 => 2,
            Self::Y2 => 3,
        }
    }
}

/// A filled calibration slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// Click position normalized by page width and height.
    pub relative_position: Point,
    /// Declared real-world value.
    pub value: f64,
}

/// Marker record for overlay rendering, in fill order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationMarker {
    /// Click position normalized by page width and height.
    pub relative_position: Point,
    /// Declared real-world value.
    pub value: f64,
    /// Slot the marker belongs to.
    pub slot: CalibrationSlot,
}

/// Errors produced while parsing a typed calibration value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    #[error("calibration value is empty")]
    Empty,
    #[error("invalid character {0:?} in calibration value")]
    InvalidCharacter(char),
    #[error("calibration value {0:?} is not a number")]
    NotANumber(String),
    #[error("calibration value {0:?} is not finite")]
    NotFinite(String),
}

/// Parse a calibration value typed by the user.
///
/// Only digits, `.`, `-`, `e` and `E` are accepted; surrounding whitespace is
/// ignored.
pub fn parse_axis_value(input: &str) -> Result<f64, ParseValueError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseValueError::Empty);
    }
    if let Some(ch) = trimmed
        .chars()
        .find(|ch| !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | 'e' | 'E')))
    {
        return Err(ParseValueError::InvalidCharacter(ch));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseValueError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ParseValueError::NotFinite(trimmed.to_string()));
    }
    Ok(value)
}

/// Calibration progress and reference data.
#[derive(Debug, Clone)]
pub struct CalibrationState {
    points: [Option<Point>; 4],
    values: [f64; 4],
    markers: Vec<CalibrationMarker>,
    step: usize,
    staged: Option<Point>,
    defaults: CalibrationDefaults,
    epsilon: f64,
}

impl CalibrationState {
    /// Create an empty calibration with the standard defaults.
    pub fn new() -> Self {
        Self::with_defaults(CalibrationDefaults::default())
    }

    /// Create an empty calibration with custom pre-filled values.
    pub fn with_defaults(defaults: CalibrationDefaults) -> Self {
        Self {
            points: [None; 4],
            values: CalibrationSlot::ALL.map(|slot| defaults.value(slot)),
            markers: Vec::new(),
            step: 0,
            staged: None,
            defaults,
            epsilon: MIN_DISTANCE_EPSILON,
        }
    }

    /// Set the degenerate-interval epsilon used by the axis mappings.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Clear every slot, marker, and staged click.
    pub fn reset(&mut self) {
        self.points = [None; 4];
        self.values = CalibrationSlot::ALL.map(|slot| self.defaults.value(slot));
        self.markers.clear();
        self.step = 0;
        self.staged = None;
    }

    /// Number of filled slots (0..=4).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Next slot to fill, or `None` once calibration is complete.
    pub fn current_slot(&self) -> Option<CalibrationSlot> {
        CalibrationSlot::ALL.get(self.step).copied()
    }

    /// Key of the next slot to fill, or `""` once complete.
    pub fn current_slot_key(&self) -> &'static str {
        self.current_slot().map_or("", CalibrationSlot::key)
    }

    /// Label of the next slot to fill, or `""` once complete.
    pub fn current_slot_label(&self) -> &'static str {
        self.current_slot().map_or("", CalibrationSlot::label)
    }

    /// Fill the next slot. Returns the slot written, or `None` if complete.
    pub fn set_point(&mut self, relative_position: Point, value: f64) -> Option<CalibrationSlot> {
        let slot = self.current_slot()?;
        self.points[slot.index()] = Some(relative_position);
        self.values[slot.index()] = value;
        self.markers.push(CalibrationMarker {
            relative_position,
            value,
            slot,
        });
        self.step += 1;
        log::debug!(
            "calibration {} set at ({:.4}, {:.4}) = {}",
            slot.label(),
            relative_position.x,
            relative_position.y,
            value
        );
        Some(slot)
    }

    /// Remember a click while the user enters its value.
    ///
    /// Ignored once calibration is complete.
    pub fn stage_click(&mut self, relative_position: Point) {
        if self.current_slot().is_some() {
            self.staged = Some(relative_position);
        }
    }

    /// Click awaiting a value, if any.
    pub fn staged_click(&self) -> Option<Point> {
        self.staged
    }

    /// Drop the staged click.
    pub fn cancel_staged(&mut self) {
        self.staged = None;
    }

    /// Fill the next slot with the staged click and `value`.
    ///
    /// Returns `None` without changes if nothing is staged.
    pub fn confirm_staged(&mut self, value: f64) -> Option<CalibrationSlot> {
        let position = self.staged.take()?;
        self.set_point(position, value)
    }

    /// Current value of a slot: the declared value, or its default.
    pub fn value(&self, slot: CalibrationSlot) -> f64 {
        self.values[slot.index()]
    }

    /// Relative position of a filled slot.
    pub fn point(&self, slot: CalibrationSlot) -> Option<Point> {
        self.points[slot.index()]
    }

    /// Position and declared value of a filled slot.
    pub fn calibration_point(&self, slot: CalibrationSlot) -> Option<CalibrationPoint> {
        self.point(slot).map(|relative_position| CalibrationPoint {
            relative_position,
            value: self.value(slot),
        })
    }

    /// Check whether all four slots are filled.
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(Option::is_some)
    }

    /// Relative positions of X1 and X2.
    pub fn x_axis_points(&self) -> (Option<Point>, Option<Point>) {
        (self.point(CalibrationSlot::X1), self.point(CalibrationSlot::X2))
    }

    /// Relative positions of Y1 and Y2.
    pub fn y_axis_points(&self) -> (Option<Point>, Option<Point>) {
        (self.point(CalibrationSlot::Y1), self.point(CalibrationSlot::Y2))
    }

    /// Values of X1 and X2.
    pub fn x_axis_values(&self) -> (f64, f64) {
        (self.value(CalibrationSlot::X1), self.value(CalibrationSlot::X2))
    }

    /// Values of Y1 and Y2.
    pub fn y_axis_values(&self) -> (f64, f64) {
        (self.value(CalibrationSlot::Y1), self.value(CalibrationSlot::Y2))
    }

    /// X mapping built from the X components of X1/X2. `None` until complete.
    pub fn x_mapping(&self, scale: AxisScale) -> Option<AxisMapping> {
        if !self.is_complete() {
            return None;
        }
        let (Some(p1), Some(p2)) = self.x_axis_points() else {
            return None;
        };
        let (v1, v2) = self.x_axis_values();
        Some(AxisMapping::new(p1.x, p2.x, v1, v2, scale).with_epsilon(self.epsilon))
    }

    /// Y mapping built from the Y components of Y1/Y2. `None` until complete.
    pub fn y_mapping(&self, scale: AxisScale) -> Option<AxisMapping> {
        if !self.is_complete() {
            return None;
        }
        let (Some(p1), Some(p2)) = self.y_axis_points() else {
            return None;
        };
        let (v1, v2) = self.y_axis_values();
        Some(AxisMapping::new(p1.y, p2.y, v1, v2, scale).with_epsilon(self.epsilon))
    }

    /// Markers in fill order.
    pub fn markers(&self) -> &[CalibrationMarker] {
        &self.markers
    }
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new()
    }
}
