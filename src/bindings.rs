use js_sys::{Function, Object};
use wasm_bindgen::prelude::*;
use web_sys as web;

// three.js renderer; only the handful of members the controller drives.
#[wasm_bindgen(module = "three")]
extern "C" {
    pub type WebGLRenderer;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(params: &Object) -> Result<WebGLRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);
}

// Scene module shipped next to the generated bindings by the host app.
#[wasm_bindgen(raw_module = "./scene")]
extern "C" {
    #[wasm_bindgen(js_name = default)]
    pub type Scene;

    #[wasm_bindgen(constructor, js_class = "default", catch)]
    pub fn new(set_state: &Function) -> Result<Scene, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn camera(this: &Scene) -> SceneCamera;

    #[wasm_bindgen(method, getter)]
    pub fn graph(this: &Scene) -> SceneGraph;

    #[wasm_bindgen(method, js_name = updateStatus)]
    pub fn update_status(this: &Scene, partial: &Object);

    #[wasm_bindgen(method)]
    pub fn pick(this: &Scene, renderer: &WebGLRenderer, x: f64, y: f64) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn render(this: &Scene, renderer: &WebGLRenderer);

    #[wasm_bindgen(method, setter = _needRender)]
    pub fn set_need_render(this: &Scene, value: bool);
}

// Structural types reached through the scene's getters.
#[wasm_bindgen]
extern "C" {
    pub type SceneCamera;

    #[wasm_bindgen(method, getter)]
    pub fn status(this: &SceneCamera) -> Object;
}

#[wasm_bindgen]
extern "C" {
    pub type SceneGraph;

    #[wasm_bindgen(method, getter)]
    pub fn status(this: &SceneGraph) -> Object;

    #[wasm_bindgen(method, js_name = getRelates)]
    pub fn get_relates(
        this: &SceneGraph,
        targets: &js_sys::Array,
        incoming: bool,
        outgoing: bool,
        restrict: bool,
    ) -> JsValue;

    #[wasm_bindgen(method, js_name = setAlpha)]
    pub fn set_alpha(this: &SceneGraph, relates: &JsValue);
}

/// WebGL2 context options used by the original canvas setup.
pub fn webgl2_context(canvas: &web::HtmlCanvasElement) -> anyhow::Result<JsValue> {
    let options = Object::new();
    set_field(&options, "alpha", &JsValue::FALSE)?;
    set_field(&options, "preserveDrawingBuffer", &JsValue::FALSE)?;
    let context = canvas
        .get_context_with_context_options("webgl2", &options)
        .map_err(|e| anyhow::anyhow!("webgl2 context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("webgl2 is not available"))?;
    Ok(context.into())
}

#[inline]
pub fn set_field(target: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow::anyhow!("set {}: {:?}", key, e))?;
    Ok(())
}

#[inline]
pub fn get_number(source: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(source, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}
