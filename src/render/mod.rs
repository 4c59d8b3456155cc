//! Overlay rendering primitives.
//!
//! These types are backend-agnostic. [`build_overlay`] turns the calibration
//! markers and the picked curve into a [`RenderList`] in view pixels; a render
//! backend (such as the GPUI backend) paints it on top of the page image.

use crate::calibration::CalibrationState;
use crate::geom::{Size, ViewPoint};
use crate::series::ExtractedSeries;
use crate::style::Theme;
use crate::view::relative_to_view;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque green (`#00FF00`).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Marker styling.
///
/// Markers are filled circles; sizes are expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker diameter in pixels.
    pub size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 4.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A single overlay drawing command, in view pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Connected line through the points.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<ViewPoint>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Markers centered on the points.
    Points {
        /// Marker centers.
        points: Vec<ViewPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Text anchored at its bottom-left corner.
    Text {
        /// Anchor position.
        position: ViewPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the overlay for a view of the given size.
///
/// Draws, in order: the highlight of the picked curve (when it has at least
/// two points), the confirmed calibration markers with their `X1=0` style
/// labels, and the staged click.
pub fn build_overlay(
    calibration: &CalibrationState,
    series: Option<&ExtractedSeries>,
    view: Size,
    theme: &Theme,
) -> RenderList {
    let mut list = RenderList::new();

    if let Some(series) = series.filter(|series| series.has_highlight()) {
        list.push(RenderCommand::Polyline {
            points: series.highlight().to_vec(),
            style: theme.highlight,
        });
    }

    let markers = calibration.markers();
    if !markers.is_empty() {
        let centers: Vec<ViewPoint> = markers
            .iter()
            .map(|marker| relative_to_view(marker.relative_position, view))
            .collect();
        for (marker, center) in markers.iter().zip(&centers) {
            list.push(RenderCommand::Text {
                position: ViewPoint::new(
                    center.x + theme.label_offset.0,
                    center.y + theme.label_offset.1,
                ),
                text: format!("{}={}", marker.slot.label(), format_value(marker.value)),
                style: theme.label,
            });
        }
        list.push(RenderCommand::Points {
            points: centers,
            style: theme.marker,
        });
    }

    if let Some(staged) = calibration.staged_click() {
        list.push(RenderCommand::Points {
            points: vec![relative_to_view(staged, view)],
            style: theme.staged_marker,
        });
    }

    list
}

/// Format a value the way C's `%g` does: six significant digits, trailing
/// zeros dropped, exponent notation when the exponent is below -4 or at
/// least 6.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{value:.5e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }
    let decimals = (5 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
