//! Digitizer configuration.

use crate::axis::MIN_DISTANCE_EPSILON;
use crate::calibration::CalibrationSlot;
use crate::search::DEFAULT_SEARCH_RADIUS;

/// Values pre-filled for each calibration slot before the user declares one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationDefaults {
    /// Default value of the first X reference.
    pub x1: f64,
    /// Default value of the second X reference.
    pub x2: f64,
    /// Default value of the first Y reference.
    pub y1: f64,
    /// Default value of the second Y reference.
    pub y2: f64,
}

impl CalibrationDefaults {
    /// Default value for a slot.
    pub fn value(&self, slot: CalibrationSlot) -> f64 {
        match slot {
            CalibrationSlot::X1 => self.x1,
            CalibrationSlot::X2 => self.x2,
            CalibrationSlot::Y1 => self.y1,
            CalibrationSlot::Y2 => self.y2,
        }
    }
}

impl Default for CalibrationDefaults {
    fn default() -> Self {
        Self {
            x1: 0.0,
            x2: 100.0,
            y1: 0.0,
            y2: 100.0,
        }
    }
}

/// Configuration for a [`Digitizer`](crate::digitizer::Digitizer).
#[derive(Debug, Clone, PartialEq)]
pub struct DigitizerConfig {
    /// Pick radius in document units. Does not scale with zoom.
    pub search_radius: f64,
    /// Calibration intervals shorter than this map to their first value.
    pub min_distance_epsilon: f64,
    /// Values pre-filled for the calibration slots.
    pub calibration_defaults: CalibrationDefaults,
}

impl DigitizerConfig {
    /// Set the pick radius.
    pub fn with_search_radius(mut self, radius: f64) -> Self {
        self.search_radius = radius;
        self
    }

    /// Set the degenerate-interval epsilon.
    pub fn with_min_distance_epsilon(mut self, epsilon: f64) -> Self {
        self.min_distance_epsilon = epsilon;
        self
    }

    /// Set the calibration defaults.
    pub fn with_calibration_defaults(mut self, defaults: CalibrationDefaults) -> Self {
        self.calibration_defaults = defaults;
        self
    }
}

impl Default for DigitizerConfig {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
            min_distance_epsilon: MIN_DISTANCE_EPSILON,
            calibration_defaults: CalibrationDefaults::default(),
        }
    }
}
