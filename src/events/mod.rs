pub mod pointer;
pub mod touch;

use crate::visualizer::SharedController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A native event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, H>(target: &web::EventTarget, kind: &'static str, mut handler: H) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        H: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire every input handler to the canvas' native events.
pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    controller: &SharedController,
) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = canvas.as_ref();
    let mut listeners = pointer::wire(target, controller)?;
    listeners.extend(touch::wire(target, controller)?);
    log::info!("[input] {} listeners attached", listeners.len());
    Ok(listeners)
}
