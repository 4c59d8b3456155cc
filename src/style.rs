//! Overlay theming.

use crate::render::{Color, LineStyle, MarkerStyle, TextStyle};

/// Colors and sizes used when building the calibration and pick overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Confirmed calibration markers.
    pub marker: MarkerStyle,
    /// Click awaiting a calibration value.
    pub staged_marker: MarkerStyle,
    /// Marker labels such as `X1=0`.
    pub label: TextStyle,
    /// Label offset from its marker, in pixels.
    pub label_offset: (f64, f64),
    /// Outline of the picked curve.
    pub highlight: LineStyle,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            marker: MarkerStyle {
                color: Color::GREEN,
                size: 6.0,
            },
            staged_marker: MarkerStyle {
                color: Color::YELLOW,
                size: 6.0,
            },
            label: TextStyle {
                color: Color::GREEN,
                size: 10.0,
            },
            label_offset: (5.0, -5.0),
            highlight: LineStyle {
                color: Color::CYAN,
                width: 2.0,
            },
        }
    }
}
