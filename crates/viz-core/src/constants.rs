// Interaction tuning constants shared by the core controller and the web frontend.

// Zoom
pub const WHEEL_ZOOM_STEP: f64 = 0.2; // fractional scale change per wheel tick, direction only
pub const DEFAULT_SCALE: f64 = 1.0;

// Touch
pub const PINCH_TOUCH_COUNT: usize = 2; // fingers that make a pinch gesture

// Pointer
pub const PRIMARY_BUTTON: u16 = 1; // `buttons` bitmask with only the primary button held

// Viewport
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;
