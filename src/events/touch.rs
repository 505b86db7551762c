use super::Listener;
use crate::dom;
use crate::visualizer::{with_controller, SharedController};
use web_sys as web;

pub fn handle_touch_start(controller: &SharedController, ev: &web::TouchEvent) -> anyhow::Result<()> {
    let touches = dom::touch_points(ev);
    with_controller(controller, |c| c.on_touch_start(&touches))
}

pub fn handle_touch_move(controller: &SharedController, ev: &web::TouchEvent) -> anyhow::Result<()> {
    let touches = dom::touch_points(ev);
    with_controller(controller, |c| c.on_touch_move(&touches))
}

pub fn handle_touch_end(controller: &SharedController, ev: &web::TouchEvent) -> anyhow::Result<()> {
    let touches = dom::touch_points(ev);
    with_controller(controller, |c| c.on_touch_end(&touches))
}

type TouchHandler = fn(&SharedController, &web::TouchEvent) -> anyhow::Result<()>;

pub(super) fn wire(target: &web::EventTarget, controller: &SharedController) -> anyhow::Result<Vec<Listener>> {
    let handlers: [(&'static str, TouchHandler); 4] = [
        ("touchstart", handle_touch_start),
        ("touchmove", handle_touch_move),
        ("touchend", handle_touch_end),
        // cancel leaves the same reduced touch list behind as end
        ("touchcancel", handle_touch_end),
    ];
    handlers
        .into_iter()
        .map(|(kind, handler)| {
            let controller = controller.clone();
            Listener::new(target, kind, move |ev: web::TouchEvent| {
                if let Err(e) = handler(&controller, &ev) {
                    log::warn!("[input] {}: {:#}", kind, e);
                }
            })
        })
        .collect()
}
