use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use wire_core::{Viewport, WireConfig};
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|j| j.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn rect_of(r: &web::DomRect) -> crate::layout::Rect {
    crate::layout::Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

pub fn create_svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

#[inline]
pub fn set_style(el: &web::Element, name: &str, value: &str) {
    if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
        _ = svg.style().set_property(name, value);
    } else if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn place_at(el: &web::Element, p: Vec2) {
    set_style(el, "left", &format!("{}px", p.x));
    set_style(el, "top", &format!("{}px", p.y));
}

/// Resolve after `ms` milliseconds on the browser timer queue.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window()
            .map(|w| w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms))
            .is_some_and(|r| r.is_ok());
        if !scheduled {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

fn data_attr<T: std::str::FromStr>(el: &web::Element, name: &str) -> Option<T> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring unparsable {}={:?}", name, raw);
            None
        }
    }
}

/// Apply optional `data-*` tuning overrides found on the wire SVG element.
pub fn config_from_attributes(el: &web::Element, base: WireConfig) -> WireConfig {
    let mut cfg = base;
    if let Some(v) = data_attr(el, "data-nodes") {
        cfg.node_count = v;
    }
    if let Some(v) = data_attr(el, "data-rest-length") {
        cfg.rest_length = v;
    }
    if let Some(v) = data_attr(el, "data-gravity") {
        cfg.gravity = v;
    }
    if let Some(v) = data_attr(el, "data-damping") {
        cfg.damping = v;
    }
    if let Some(v) = data_attr(el, "data-iterations") {
        cfg.iterations = v;
    }
    if let Some(v) = data_attr(el, "data-reattach-distance") {
        cfg.reattach_distance = v;
    }
    cfg
}
