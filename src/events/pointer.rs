use super::Listener;
use crate::dom;
use crate::visualizer::{with_controller, SharedController};
use viz_core::HighlightMode;
use web_sys as web;

pub fn handle_click(controller: &SharedController, ev: &web::MouseEvent) -> anyhow::Result<HighlightMode> {
    let input = dom::click_input(ev);
    with_controller(controller, |c| c.on_click(&input))
}

/// Returns `true` when the move panned the camera.
pub fn handle_pointer_move(controller: &SharedController, ev: &web::PointerEvent) -> anyhow::Result<bool> {
    ev.prevent_default();
    let input = dom::pointer_input(ev);
    with_controller(controller, |c| c.on_pointer_move(&input))
}

pub fn handle_wheel(controller: &SharedController, ev: &web::WheelEvent) -> anyhow::Result<f64> {
    let delta_y = ev.delta_y();
    with_controller(controller, |c| c.on_wheel(delta_y))
}

pub(super) fn wire(target: &web::EventTarget, controller: &SharedController) -> anyhow::Result<Vec<Listener>> {
    let click = {
        let controller = controller.clone();
        Listener::new(target, "click", move |ev: web::MouseEvent| {
            if let Err(e) = handle_click(&controller, &ev) {
                log::warn!("[input] click: {:#}", e);
            }
        })?
    };
    let pointermove = {
        let controller = controller.clone();
        Listener::new(target, "pointermove", move |ev: web::PointerEvent| {
            if let Err(e) = handle_pointer_move(&controller, &ev) {
                log::warn!("[input] pointermove: {:#}", e);
            }
        })?
    };
    let wheel = {
        let controller = controller.clone();
        Listener::new(target, "wheel", move |ev: web::WheelEvent| {
            if let Err(e) = handle_wheel(&controller, &ev) {
                log::warn!("[input] wheel: {:#}", e);
            }
        })?
    };
    Ok(vec![click, pointermove, wheel])
}
