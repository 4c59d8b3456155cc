//! Calibrate-then-pick orchestration.
//!
//! [`Digitizer`] owns everything a front end needs between document loads:
//! the drawing paths, the calibration, the axis scales, and the configuration.
//! It is driven synchronously from UI callbacks.

use crate::calibration::{CalibrationSlot, CalibrationState};
use crate::config::DigitizerConfig;
use crate::geom::{Point, Size, ViewPoint};
use crate::path::DrawingPath;
use crate::search::find_nearest_path;
use crate::series::ExtractedSeries;
use crate::transform::{AxisScales, extract_curve_data};
use crate::view::view_to_document;

/// A loaded page: its size and the drawing paths found on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Page size in document units.
    pub page: Size,
    /// Drawing paths in the order the loader produced them.
    pub paths: Vec<DrawingPath>,
}

impl Document {
    /// Create a document.
    pub fn new(page: Size, paths: Vec<DrawingPath>) -> Self {
        Self { page, paths }
    }
}

/// Reasons a pick produced no series.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PickError {
    #[error("no document loaded")]
    NoDocument,
    #[error("calibration incomplete: {remaining} reference points missing")]
    CalibrationIncomplete { remaining: usize },
    #[error("no curve near ({x:.3}, {y:.3})")]
    NoCurve { x: f64, y: f64 },
    #[error("click ({x:.1}, {y:.1}) is outside the view")]
    OutsideView { x: f64, y: f64 },
}

/// High-level progress of a digitizing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitizerStatus {
    /// Nothing loaded yet.
    NoDocument,
    /// Waiting for the given calibration slot.
    Calibrating(CalibrationSlot),
    /// Calibration complete; picks are possible.
    Ready(AxisScales),
}

/// Session state for one loaded document.
#[derive(Debug, Clone)]
pub struct Digitizer {
    config: DigitizerConfig,
    calibration: CalibrationState,
    scales: AxisScales,
    document: Option<Document>,
}

impl Digitizer {
    /// Create a digitizer with no document loaded.
    pub fn new(config: DigitizerConfig) -> Self {
        let calibration = Self::fresh_calibration(&config);
        Self {
            config,
            calibration,
            scales: AxisScales::default(),
            document: None,
        }
    }

    fn fresh_calibration(config: &DigitizerConfig) -> CalibrationState {
        CalibrationState::with_defaults(config.calibration_defaults)
            .with_epsilon(config.min_distance_epsilon)
    }

    /// Access the configuration.
    pub fn config(&self) -> &DigitizerConfig {
        &self.config
    }

    /// Replace the document and start a fresh calibration.
    pub fn load_document(&mut self, document: Document) {
        log::debug!(
            "loaded document {}x{} with {} paths",
            document.page.width,
            document.page.height,
            document.paths.len()
        );
        self.document = Some(document);
        self.calibration = Self::fresh_calibration(&self.config);
    }

    /// Drop the loaded document.
    pub fn close_document(&mut self) {
        self.document = None;
        self.calibration.reset();
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Calibration state.
    pub fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    /// Calibration state, for staging and confirming reference clicks.
    pub fn calibration_mut(&mut self) -> &mut CalibrationState {
        &mut self.calibration
    }

    /// Clear the calibration.
    pub fn reset_calibration(&mut self) {
        self.calibration.reset();
    }

    /// Current axis scales.
    pub fn scales(&self) -> AxisScales {
        self.scales
    }

    /// Change the axis scales used by later picks.
    pub fn set_scales(&mut self, scales: AxisScales) {
        self.scales = scales;
    }

    /// Session progress.
    pub fn status(&self) -> DigitizerStatus {
        if self.document.is_none() {
            return DigitizerStatus::NoDocument;
        }
        match self.calibration.current_slot() {
            Some(slot) => DigitizerStatus::Calibrating(slot),
            None => DigitizerStatus::Ready(self.scales),
        }
    }

    /// Convert a click in the rendered view into document coordinates.
    pub fn view_to_document(&self, point: ViewPoint, view: Size) -> Option<Point> {
        let document = self.document.as_ref()?;
        view_to_document(point, view, document.page)
    }

    /// Extract the curve nearest to a document position.
    ///
    /// `view` is the size of the rendered page; it only scales the highlight.
    pub fn pick(&self, target: Point, view: Size) -> Result<ExtractedSeries, PickError> {
        let document = self.document.as_ref().ok_or(PickError::NoDocument)?;
        if !self.calibration.is_complete() {
            return Err(PickError::CalibrationIncomplete {
                remaining: CalibrationSlot::ALL.len() - self.calibration.step(),
            });
        }

        let Some(hit) = find_nearest_path(target, &document.paths, self.config.search_radius)
        else {
            log::debug!("pick miss at ({:.3}, {:.3})", target.x, target.y);
            return Err(PickError::NoCurve {
                x: target.x,
                y: target.y,
            });
        };

        let series = extract_curve_data(
            &self.calibration,
            hit.path,
            document.page,
            view,
            self.scales,
        );
        log::debug!(
            "picked path {} at distance {:.3}: {} points",
            hit.index,
            hit.distance(),
            series.len()
        );
        Ok(series)
    }

    /// Extract the curve nearest to a click in the rendered view.
    pub fn pick_view(&self, point: ViewPoint, view: Size) -> Result<ExtractedSeries, PickError> {
        if self.document.is_none() {
            return Err(PickError::NoDocument);
        }
        let target = self
            .view_to_document(point, view)
            .ok_or(PickError::OutsideView {
                x: point.x,
                y: point.y,
            })?;
        self.pick(target, view)
    }
}

impl Default for Digitizer {
    fn default() -> Self {
        Self::new(DigitizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisScale;
    use crate::path::PathCommand;

    const PAGE: Size = Size::new(200.0, 100.0);
    const VIEW: Size = Size::new(400.0, 200.0);

    fn document() -> Document {
        Document::new(
            PAGE,
            vec![
                DrawingPath::from_polyline(vec![Point::new(150.0, 80.0), Point::new(190.0, 90.0)]),
                DrawingPath::from_commands([
                    PathCommand::Line {
                        from: Point::new(20.0, 50.0),
                        to: Point::new(100.0, 30.0),
                    },
                    PathCommand::Line {
                        from: Point::new(100.0, 30.0),
                        to: Point::new(180.0, 10.0),
                    },
                ]),
            ],
        )
    }

    fn calibrate(digitizer: &mut Digitizer) {
        let calibration = digitizer.calibration_mut();
        for (rx, ry, value) in [
            (0.1, 0.5, 0.0),
            (0.9, 0.5, 10.0),
            (0.5, 0.9, 0.0),
            (0.5, 0.1, 5.0),
        ] {
            calibration.stage_click(Point::new(rx, ry));
            calibration.confirm_staged(value);
        }
    }

    #[test]
    fn pick_requires_document_and_calibration() {
        let mut digitizer = Digitizer::default();
        assert_eq!(digitizer.status(), DigitizerStatus::NoDocument);
        assert_eq!(
            digitizer.pick(Point::new(20.0, 50.0), VIEW),
            Err(PickError::NoDocument)
        );

        digitizer.load_document(document());
        assert_eq!(
            digitizer.status(),
            DigitizerStatus::Calibrating(CalibrationSlot::X1)
        );
        assert_eq!(
            digitizer.pick(Point::new(20.0, 50.0), VIEW),
            Err(PickError::CalibrationIncomplete { remaining: 4 })
        );
    }

    #[test]
    fn end_to_end_pick() {
        let mut digitizer = Digitizer::default();
        digitizer.load_document(document());
        calibrate(&mut digitizer);
        assert_eq!(
            digitizer.status(),
            DigitizerStatus::Ready(AxisScales::linear())
        );

        let series = digitizer
            .pick(Point::new(21.0, 51.0), VIEW)
            .expect("curve near click");
        assert_eq!(series.len(), 4);
        let first = series.points()[0];
        assert!(first.x.abs() < 1e-9);
        assert!((first.y - 2.5).abs() < 1e-9);
        let last = series.points()[3];
        assert!((last.x - 10.0).abs() < 1e-9);
        assert!((last.y - 5.0).abs() < 1e-9);
        assert_eq!(series.highlight()[0], ViewPoint::new(40.0, 100.0));
    }

    #[test]
    fn pick_miss_is_reported() {
        let mut digitizer = Digitizer::default();
        digitizer.load_document(document());
        calibrate(&mut digitizer);
        assert_eq!(
            digitizer.pick(Point::new(60.0, 90.0), VIEW),
            Err(PickError::NoCurve { x: 60.0, y: 90.0 })
        );
        assert!(digitizer.calibration().is_complete());
    }

    #[test]
    fn pick_view_converts_click() {
        let mut digitizer = Digitizer::default();
        digitizer.load_document(document());
        calibrate(&mut digitizer);
        let series = digitizer
            .pick_view(ViewPoint::new(300.0, 165.0), VIEW)
            .expect("curve near click");
        assert_eq!(series.len(), 2);
        assert!(matches!(
            digitizer.pick_view(ViewPoint::new(500.0, 10.0), VIEW),
            Err(PickError::OutsideView { .. })
        ));
    }

    #[test]
    fn malformed_path_does_not_block_picks() {
        let mut doc = document();
        doc.paths.insert(
            0,
            DrawingPath::from_polyline(vec![Point::new(f64::NAN, 50.0), Point::new(25.0, 52.0)]),
        );
        let mut digitizer = Digitizer::default();
        digitizer.load_document(doc);
        calibrate(&mut digitizer);
        let series = digitizer
            .pick(Point::new(20.0, 50.0), VIEW)
            .expect("exact hit on clean path");
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn search_radius_comes_from_config() {
        let mut digitizer = Digitizer::new(DigitizerConfig::default().with_search_radius(0.5));
        digitizer.load_document(document());
        calibrate(&mut digitizer);
        assert!(digitizer.pick(Point::new(21.0, 51.0), VIEW).is_err());
        assert!(digitizer.pick(Point::new(20.2, 50.2), VIEW).is_ok());
    }

    #[test]
    fn log_scales_apply_to_picks() {
        let mut digitizer = Digitizer::default();
        digitizer.load_document(Document::new(
            PAGE,
            vec![DrawingPath::from_polyline(vec![Point::new(100.0, 50.0)])],
        ));
        let calibration = digitizer.calibration_mut();
        calibration.set_point(Point::new(0.0, 0.0), 1.0);
        calibration.set_point(Point::new(1.0, 0.0), 100.0);
        calibration.set_point(Point::new(0.0, 0.0), 0.0);
        calibration.set_point(Point::new(0.0, 1.0), 1.0);
        digitizer.set_scales(AxisScales::new(AxisScale::Log10, AxisScale::Linear));

        let series = digitizer.pick(Point::new(100.0, 50.0), VIEW).expect("hit");
        assert!((series.points()[0].x - 10.0).abs() < 1e-9);
        assert!((series.points()[0].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loading_resets_calibration() {
        let mut digitizer = Digitizer::default();
        digitizer.load_document(document());
        calibrate(&mut digitizer);
        digitizer.load_document(document());
        assert_eq!(digitizer.calibration().step(), 0);

        calibrate(&mut digitizer);
        digitizer.close_document();
        assert!(digitizer.document().is_none());
        assert!(!digitizer.calibration().is_complete());
    }
}
