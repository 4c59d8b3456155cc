//! curve_digitizer recovers data series from vector plots in PDF and SVG pages.
//! Four reference clicks calibrate the axes; a click on a curve then finds the
//! nearest drawing path and maps its points into real-world coordinates.

#![forbid(unsafe_code)]

pub mod axis;
pub mod calibration;
pub mod config;
pub mod digitizer;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod path;
pub mod render;
pub mod search;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

pub use axis::{AxisMapping, AxisScale, MIN_DISTANCE_EPSILON, map_value};
pub use calibration::{
    Axis, CalibrationMarker, CalibrationPoint, CalibrationSlot, CalibrationState, ParseValueError,
    parse_axis_value,
};
pub use config::{CalibrationDefaults, DigitizerConfig};
pub use digitizer::{Digitizer, DigitizerStatus, Document, PickError};
pub use geom::{DocRect, Point, Size, ViewPoint};
pub use path::{DrawingPath, PathCommand, PathGeometry};
pub use render::{
    Color, LineStyle, MarkerStyle, RenderCommand, RenderList, TextStyle, build_overlay,
    format_value,
};
pub use search::{DEFAULT_SEARCH_RADIUS, PathHit, find_nearest_path};
pub use series::{ExtractedSeries, MIN_STRIDE, Separator, SortColumn};
pub use style::Theme;
pub use transform::{
    AxisScales, CalibratedTransform, TransformedPoints, extract_curve_data, transform_points,
};
pub use view::{Range, Viewport};
