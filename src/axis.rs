//! Axis scaling and the two-point coordinate mapper.

/// Positions closer together than this are treated as a degenerate interval.
pub const MIN_DISTANCE_EPSILON: f64 = 1e-9;

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear scaling.
    #[default]
    Linear,
    /// Base-10 logarithmic scaling of the declared values.
    Log10,
}

impl AxisScale {
    /// Select a scale from a "logarithmic" flag.
    pub fn from_log(is_log: bool) -> Self {
        if is_log { Self::Log10 } else { Self::Linear }
    }

    /// Check whether the scale is logarithmic.
    pub fn is_log(self) -> bool {
        matches!(self, Self::Log10)
    }

    /// Short label for status readouts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Lin",
            Self::Log10 => "Log",
        }
    }

    /// Check whether a pair of declared values can be interpolated on this scale.
    pub fn accepts(self, v1: f64, v2: f64) -> bool {
        match self {
            Self::Linear => true,
            Self::Log10 => v1 > 0.0 && v2 > 0.0,
        }
    }
}

/// Map `value` from the calibration positions `p1..p2` onto the values `v1..v2`.
///
/// Positions are always interpolated linearly; under [`AxisScale::Log10`] the
/// interpolation of the values happens in log10 space. Values outside the
/// calibrated span extrapolate.
///
/// Two fallbacks apply instead of errors:
/// - if `|p2 - p1| < 1e-9` the result is `v1`;
/// - if log scaling is requested with a non-positive value, or the log result
///   is not finite, the linear result is returned.
pub fn map_value(value: f64, p1: f64, p2: f64, v1: f64, v2: f64, scale: AxisScale) -> f64 {
    map_value_with_epsilon(value, p1, p2, v1, v2, scale, MIN_DISTANCE_EPSILON)
}

pub(crate) fn map_value_with_epsilon(
    value: f64,
    p1: f64,
    p2: f64,
    v1: f64,
    v2: f64,
    scale: AxisScale,
    epsilon: f64,
) -> f64 {
    let span = p2 - p1;
    if span.abs() < epsilon {
        return v1;
    }
    let ratio = (value - p1) / span;
    let linear = ratio.mul_add(v2 - v1, v1);
    if !scale.is_log() || !scale.accepts(v1, v2) {
        return linear;
    }
    let log_v1 = v1.log10();
    let log_v2 = v2.log10();
    let mapped = 10_f64.powf(ratio.mul_add(log_v2 - log_v1, log_v1));
    if mapped.is_finite() { mapped } else { linear }
}

/// Calibration of a single axis: two positions and their declared values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    /// First calibration position (relative units).
    pub p1: f64,
    /// Second calibration position (relative units).
    pub p2: f64,
    /// Value declared at `p1`.
    pub v1: f64,
    /// Value declared at `p2`.
    pub v2: f64,
    /// Scale used for the values.
    pub scale: AxisScale,
    epsilon: f64,
}

impl AxisMapping {
    /// Create a mapping with the default degenerate-interval epsilon.
    pub fn new(p1: f64, p2: f64, v1: f64, v2: f64, scale: AxisScale) -> Self {
        Self {
            p1,
            p2,
            v1,
            v2,
            scale,
            epsilon: MIN_DISTANCE_EPSILON,
        }
    }

    /// Override the degenerate-interval epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check whether the calibration positions coincide.
    pub fn is_degenerate(&self) -> bool {
        (self.p2 - self.p1).abs() < self.epsilon
    }

    /// Map a position on this axis to its real-world value.
    pub fn map(&self, value: f64) -> f64 {
        map_value_with_epsilon(
            value,
            self.p1,
            self.p2,
            self.v1,
            self.v2,
            self.scale,
            self.epsilon,
        )
    }
}
