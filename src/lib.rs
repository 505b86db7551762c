#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod bindings;
mod dom;
mod events;
mod frame;
mod scene;
mod visualizer;

pub use visualizer::Visualizer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");
    Ok(())
}
