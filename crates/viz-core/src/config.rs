use crate::camera::ZoomBounds;
use crate::constants::WHEEL_ZOOM_STEP;
use crate::error::{ControllerError, Result};

/// Tunables for the input controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Fractional scale change applied per wheel tick; must be in (0, 1).
    pub wheel_zoom_step: f64,
    pub zoom_bounds: ZoomBounds,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            zoom_bounds: ZoomBounds::UNBOUNDED,
        }
    }
}

impl ControllerConfig {
    pub fn with_zoom_bounds(mut self, zoom_bounds: ZoomBounds) -> Self {
        self.zoom_bounds = zoom_bounds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        // A step of 1 would zoom to zero on the first wheel-down tick.
        if !(self.wheel_zoom_step > 0.0 && self.wheel_zoom_step < 1.0) {
            return Err(ControllerError::InvalidScale(1.0 - self.wheel_zoom_step));
        }
        self.zoom_bounds.validate()
    }
}
