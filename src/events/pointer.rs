use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    wire_mouse(window, "mousemove", pointer.clone());
    wire_mouse(window, "mouseover", pointer.clone());
    wire_touch(window, "touchstart", pointer.clone());
    wire_touch(window, "touchmove", pointer.clone());
    wire_touchend(window, pointer.clone());
    if let Some(document) = window.document() {
        wire_mouseleave(&document, pointer);
    }
}

fn passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

// Capture phase so tracking still works over elements that stop propagation.
fn wire_mouse(window: &web::Window, kind: &str, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer
            .borrow_mut()
            .track(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_bool(
        kind,
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

fn wire_touch(window: &web::Window, kind: &str, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            pointer
                .borrow_mut()
                .track(t.client_x() as f32, t.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &passive(),
    );
    closure.forget();
}

fn wire_touchend(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move || {
        pointer.borrow_mut().release();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        closure.as_ref().unchecked_ref(),
        &passive(),
    );
    closure.forget();
}

fn wire_mouseleave(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move || {
        pointer.borrow_mut().release();
        log::debug!("[input] pointer left document");
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
