use crate::bindings::{self, Scene, WebGLRenderer};
use crate::dom::CanvasSurface;
use crate::events::{self, Listener};
use crate::frame;
use crate::scene::{selection_from_js, JsRenderer, JsScene};
use js_sys::{Function, Object};
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{ControllerConfig, InputController, ZoomBounds};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub type SharedController = Rc<RefCell<InputController<JsScene>>>;

/// Run `f` against the controller, refusing re-entrant calls instead of panicking.
pub fn with_controller<T>(
    controller: &SharedController,
    f: impl FnOnce(&mut InputController<JsScene>) -> viz_core::Result<T>,
) -> anyhow::Result<T> {
    let mut controller = controller
        .try_borrow_mut()
        .map_err(|_| anyhow::anyhow!("visualizer is busy (re-entrant call)"))?;
    Ok(f(&mut controller)?)
}

fn build_controller(
    canvas: &web::HtmlCanvasElement,
    set_state: &Function,
) -> anyhow::Result<InputController<JsScene>> {
    let params = Object::new();
    bindings::set_field(&params, "canvas", canvas)?;
    bindings::set_field(&params, "context", &bindings::webgl2_context(canvas)?)?;
    let renderer =
        WebGLRenderer::new(&params).map_err(|e| anyhow::anyhow!("WebGLRenderer: {:?}", e))?;
    let scene = Scene::new(set_state).map_err(|e| anyhow::anyhow!("Scene: {:?}", e))?;
    Ok(InputController::new(
        JsScene::new(scene),
        JsRenderer(renderer),
        ControllerConfig::default(),
    )?)
}

#[inline]
fn js_error(e: anyhow::Error) -> JsError {
    JsError::new(&format!("{:#}", e))
}

/// Canvas controller exported to JavaScript.
///
/// Construction starts the render loop immediately. The host either forwards
/// native events to the `on*` methods or calls `attachInputHandlers` once.
#[wasm_bindgen]
pub struct Visualizer {
    canvas: web::HtmlCanvasElement,
    controller: SharedController,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl Visualizer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, set_state: Function) -> Result<Visualizer, JsValue> {
        let controller = build_controller(&canvas, &set_state)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        let controller = Rc::new(RefCell::new(controller));
        frame::start_loop(controller.clone(), CanvasSurface::new(canvas.clone()));
        log::info!("[visualizer] ready");
        Ok(Self {
            canvas,
            controller,
            listeners: Vec::new(),
        })
    }

    /// Stop the render loop at its next frame and detach any wired listeners.
    pub fn destroy(&mut self) -> Result<(), JsError> {
        self.listeners.clear();
        with_controller(&self.controller, |c| {
            c.destroy();
            Ok(())
        })
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = attachInputHandlers)]
    pub fn attach_input_handlers(&mut self) -> Result<(), JsError> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        self.listeners = events::wire_input_handlers(&self.canvas, &self.controller).map_err(js_error)?;
        Ok(())
    }

    /// Select a node record, an array of node indices, or nothing (any falsy
    /// value). Returns the highlight mode, 0 to 3.
    #[wasm_bindgen(js_name = toggleHit)]
    pub fn toggle_hit(&self, hit: JsValue) -> Result<u8, JsError> {
        let selection = selection_from_js(&hit).map_err(js_error)?;
        with_controller(&self.controller, |c| c.toggle_hit(selection))
            .map(|mode| mode.as_index())
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = onClick)]
    pub fn on_click(&self, event: web::MouseEvent) -> Result<u8, JsError> {
        events::pointer::handle_click(&self.controller, &event)
            .map(|mode| mode.as_index())
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&self, event: web::PointerEvent) -> Result<bool, JsError> {
        events::pointer::handle_pointer_move(&self.controller, &event).map_err(js_error)
    }

    #[wasm_bindgen(js_name = onWheel)]
    pub fn on_wheel(&self, event: web::WheelEvent) -> Result<(), JsError> {
        events::pointer::handle_wheel(&self.controller, &event)
            .map(|_| ())
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = onTouchStart)]
    pub fn on_touch_start(&self, event: web::TouchEvent) -> Result<(), JsError> {
        events::touch::handle_touch_start(&self.controller, &event).map_err(js_error)
    }

    #[wasm_bindgen(js_name = onTouchMove)]
    pub fn on_touch_move(&self, event: web::TouchEvent) -> Result<(), JsError> {
        events::touch::handle_touch_move(&self.controller, &event).map_err(js_error)
    }

    #[wasm_bindgen(js_name = onTouchEnd)]
    pub fn on_touch_end(&self, event: web::TouchEvent) -> Result<(), JsError> {
        events::touch::handle_touch_end(&self.controller, &event).map_err(js_error)
    }

    /// Limit zoom; pass `undefined` for an open end.
    #[wasm_bindgen(js_name = setZoomBounds)]
    pub fn set_zoom_bounds(&self, min: Option<f64>, max: Option<f64>) -> Result<(), JsError> {
        with_controller(&self.controller, |c| {
            c.set_zoom_bounds(ZoomBounds::new(min, max)?)
        })
        .map_err(js_error)
    }
}
