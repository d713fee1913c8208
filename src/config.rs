use crate::error::{ConfigError, Result};
use crate::math::Axis;
use crate::symmetry::{AxisFilter, CenterAxes};

/// Default half-width of the center band, in scene units.
pub const DEFAULT_CENTER_THRESHOLD: f64 = 0.01;

/// Default search radius for mirror partners, in scene units.
pub const DEFAULT_MIRROR_THRESHOLD: f64 = 0.05;

/// Settings shared by the symmetry operations.
///
/// The host owns one of these and hands it to the engine; nothing is read
/// from global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryConfig {
    /// Sign filters used by select/deselect by axis.
    pub axis_filter: AxisFilter,
    /// Axes taking part in center selection.
    pub center_axes: CenterAxes,
    /// Half-width of the center band.
    pub center_threshold: f64,
    /// Axis across which symmetry is checked and enforced.
    pub mirror_axis: Axis,
    /// Search radius for mirror partners.
    pub mirror_threshold: f64,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            axis_filter: AxisFilter::default(),
            center_axes: CenterAxes::default(),
            center_threshold: DEFAULT_CENTER_THRESHOLD,
            mirror_axis: Axis::X,
            mirror_threshold: DEFAULT_MIRROR_THRESHOLD,
        }
    }
}

impl SymmetryConfig {
    /// Checks both thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] for a negative or
    /// non-finite threshold.
    pub fn validate(&self) -> Result<()> {
        validate_threshold("center_threshold", self.center_threshold)?;
        validate_threshold("mirror_threshold", self.mirror_threshold)?;
        Ok(())
    }
}

/// Returns `value` if it is a usable distance threshold.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidThreshold`] for a negative, NaN or infinite
/// value.
pub fn validate_threshold(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { name, value }.into())
    }
}
