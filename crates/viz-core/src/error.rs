use thiserror::Error;

use crate::scene::NodeIndex;

/// Failures reported by the input handlers instead of letting bad input reach the scene.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControllerError {
    #[error("picked node {index} is outside the node table (len {len})")]
    NodeOutOfRange { index: NodeIndex, len: usize },

    #[error("touch event carried no touch points")]
    NoTouches,

    #[error("camera scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("zoom bounds are inverted: min {min} > max {max}")]
    InvertedZoomBounds { min: f64, max: f64 },

    #[error("visualizer has been destroyed")]
    Destroyed,
}

pub type Result<T, E = ControllerError> = std::result::Result<T, E>;
