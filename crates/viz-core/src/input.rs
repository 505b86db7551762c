use glam::DVec2;

use crate::constants::{PINCH_TOUCH_COUNT, PRIMARY_BUTTON};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Map a DOM `pointerType` string; unknown kinds behave like a pen (ignored).
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            _ => PointerKind::Pen,
        }
    }
}

/// Platform-neutral snapshot of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    /// Bitmask of held buttons, as in `MouseEvent.buttons`.
    pub buttons: u16,
    pub is_primary: bool,
    /// Client-space position.
    pub client: DVec2,
    /// Pixel delta since the previous event.
    pub movement: DVec2,
}

impl PointerInput {
    pub fn mouse(client: DVec2, movement: DVec2, buttons: u16) -> Self {
        Self {
            kind: PointerKind::Mouse,
            buttons,
            is_primary: true,
            client,
            movement,
        }
    }

    pub fn touch(client: DVec2, movement: DVec2, is_primary: bool) -> Self {
        Self {
            kind: PointerKind::Touch,
            buttons: PRIMARY_BUTTON,
            is_primary,
            client,
            movement,
        }
    }

    /// Mouse dragged with only the primary button, or the primary touch point.
    pub fn is_primary_drag(&self) -> bool {
        match self.kind {
            PointerKind::Mouse => self.buttons == PRIMARY_BUTTON,
            PointerKind::Touch => self.is_primary,
            PointerKind::Pen => false,
        }
    }

    /// Mouse moving without the primary drag; re-picks for hover feedback.
    pub fn is_hover_probe(&self) -> bool {
        self.kind == PointerKind::Mouse && !self.is_primary_drag()
    }
}

/// Two-finger gesture state. The remembered distance only exists mid-pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Pinching {
        last_distance: f64,
    },
}

impl Gesture {
    pub fn is_pinching(&self) -> bool {
        matches!(self, Gesture::Pinching { .. })
    }
}

/// Euclidean distance between the two fingers of a pinch, if exactly two are down.
#[inline]
pub fn pinch_distance(touches: &[DVec2]) -> Option<f64> {
    match touches {
        [a, b] if touches.len() == PINCH_TOUCH_COUNT => Some(a.distance(*b)),
        _ => None,
    }
}
