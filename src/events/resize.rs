use crate::dom;
use crate::layout::rest_length_for_width;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wire_core::Simulation;
use web_sys as web;

/// Re-derive the rest length from the new viewport width. The simulation
/// picks it up on its next step without losing node history.
pub fn wire_resize(window: &web::Window, sim: Rc<RefCell<Simulation>>, max_rest: f32) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let vp = dom::viewport(&w);
        let rest = rest_length_for_width(vp.width, max_rest);
        match sim.borrow_mut().set_rest_length(rest) {
            Ok(()) => log::debug!("[resize] {}x{} rest={:.1}", vp.width, vp.height, rest),
            Err(e) => log::warn!("[resize] rest length rejected: {}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
