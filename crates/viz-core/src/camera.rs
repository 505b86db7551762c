//! Camera status as seen by the controller.
//!
//! The scene owns the camera and does the projection math; the controller only
//! reads the status record and pushes partial updates back. Everything here is
//! plain arithmetic so it can be exercised on the host.

use glam::DVec2;

use crate::constants::{DEFAULT_PIXEL_RATIO, DEFAULT_SCALE};
use crate::error::{ControllerError, Result};

/// Pan offset, zoom scale and viewport of the scene camera.
///
/// `scale` is always positive; the controller refuses to push a value that
/// would break that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraStatus {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Default for CameraStatus {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: DEFAULT_SCALE,
            width: 0.0,
            height: 0.0,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
        }
    }
}

impl CameraStatus {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            pixel_ratio: self.pixel_ratio,
        }
    }

    /// Merge a partial update into this status, leaving unset fields alone.
    pub fn apply(&mut self, patch: &CameraPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(pixel_ratio) = patch.pixel_ratio {
            self.pixel_ratio = pixel_ratio;
        }
    }
}

/// CSS size of the drawing container plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

/// Partial camera update; `None` fields are left untouched by the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pixel_ratio: Option<f64>,
}

impl CameraPatch {
    pub fn pan(position: DVec2) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..Self::default()
        }
    }

    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn viewport(viewport: Viewport) -> Self {
        Self {
            width: Some(viewport.width),
            height: Some(viewport.height),
            pixel_ratio: Some(viewport.pixel_ratio),
            ..Self::default()
        }
    }
}

/// Optional lower/upper limits applied to every zoom change.
///
/// Both ends are open by default, so zoom is unbounded unless configured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ZoomBounds {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        for limit in [self.min, self.max].into_iter().flatten() {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(ControllerError::InvalidScale(limit));
            }
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                Err(ControllerError::InvertedZoomBounds { min, max })
            }
            _ => Ok(()),
        }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        let mut s = scale;
        if let Some(min) = self.min {
            s = s.max(min);
        }
        if let Some(max) = self.max {
            s = s.min(max);
        }
        s
    }
}

/// New pan offset after dragging by `delta_px` screen pixels.
///
/// Pixels are divided by the zoom scale; screen y grows downward while world y
/// grows upward, hence the sign flip on the vertical axis.
#[inline]
pub fn pan_offset(status: &CameraStatus, delta_px: DVec2) -> DVec2 {
    DVec2::new(
        status.x - delta_px.x / status.scale,
        status.y + delta_px.y / status.scale,
    )
}

/// Multiplicative zoom factor for one wheel tick. Only the sign of `delta_y` matters.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64, step: f64) -> f64 {
    1.0 - step * sign(delta_y)
}

/// Scale after a pinch moved from `last_distance` to `new_distance`.
#[inline]
pub fn pinch_scale(scale: f64, last_distance: f64, new_distance: f64) -> f64 {
    scale * new_distance / last_distance
}

/// Reject scales that would break the `scale > 0` camera invariant.
pub fn checked_scale(scale: f64) -> Result<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ControllerError::InvalidScale(scale))
    }
}

// f64::signum maps 0.0 to 1.0; a zero wheel delta must not zoom.
#[inline]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
