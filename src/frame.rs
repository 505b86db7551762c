use crate::dom::CanvasSurface;
use crate::visualizer::SharedController;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{FrameScheduler, LoopControl, RenderLoop};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` re-arming the loop's own tick closure.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(window) = web::window() else {
            log::error!("[loop] no window; cannot schedule frame");
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Drive `controller` once per display refresh until it is destroyed.
///
/// The tick closure keeps itself alive through the scheduler; once the loop
/// stops it is simply never called again.
pub fn start_loop(controller: SharedController, surface: CanvasSurface) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let render_loop = Rc::new(RefCell::new(RenderLoop::new(
        RafScheduler {
            callback: callback.clone(),
        },
        surface,
    )));

    let render_loop_tick = render_loop.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut render_loop = render_loop_tick.borrow_mut();
        match controller.try_borrow_mut() {
            Ok(mut controller) => {
                if render_loop.tick(&mut controller) == LoopControl::Stop {
                    log::debug!("[loop] tick closure retired");
                }
            }
            Err(_) => {
                log::warn!("[loop] controller busy; skipping frame");
                render_loop.reschedule();
            }
        }
    }) as Box<dyn FnMut()>));

    render_loop.borrow_mut().start();
}
