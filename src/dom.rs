use glam::DVec2;
use viz_core::{PointerInput, PointerKind, Surface, Viewport};
use web_sys as web;

/// Canvas measured through its parent container, like the CSS layout sizes it.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Option<Viewport> {
        let window = web::window()?;
        let container = self.canvas.parent_element()?;
        Some(Viewport {
            width: container.client_width() as f64,
            height: container.client_height() as f64,
            pixel_ratio: window.device_pixel_ratio(),
        })
    }
}

#[inline]
pub fn pointer_input(ev: &web::PointerEvent) -> PointerInput {
    PointerInput {
        kind: PointerKind::from_dom(&ev.pointer_type()),
        buttons: ev.buttons(),
        is_primary: ev.is_primary(),
        client: DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        movement: DVec2::new(ev.movement_x() as f64, ev.movement_y() as f64),
    }
}

/// Client positions of the touches still on the surface.
#[inline]
pub fn touch_points(ev: &web::TouchEvent) -> Vec<DVec2> {
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| DVec2::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

/// Click events carry no movement; only the position is used for picking.
#[inline]
pub fn click_input(ev: &web::MouseEvent) -> PointerInput {
    PointerInput::mouse(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::ZERO,
        ev.buttons(),
    )
}
