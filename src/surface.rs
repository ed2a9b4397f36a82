//! SVG rendering surface: cable paths, anchor markers, pointer indicator.

use crate::constants::*;
use crate::dom;
use crate::input::PointerState;
use wasm_bindgen::JsCast;
use wire_core::{CableFrame, Transition, ANCHOR_MARKER_FILL, ANCHOR_MARKER_RADIUS};
use web_sys as web;

pub struct SvgSurface {
    svg: web::Element,
    paths: Vec<Option<web::Element>>,
    markers: Vec<web::Element>,
    cursor: Option<web::Element>,
    body: Option<web::HtmlElement>,
    cursor_shown: bool,
}

impl SvgSurface {
    pub fn new(document: &web::Document, wire_count: usize) -> anyhow::Result<Self> {
        let svg = document
            .get_element_by_id(WIRE_SVG_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", WIRE_SVG_ID))?;
        let paths = (1..=wire_count)
            .map(|i| document.get_element_by_id(&format!("{}{}", WIRE_PATH_ID_PREFIX, i)))
            .collect::<Vec<_>>();
        let missing = paths.iter().filter(|p| p.is_none()).count();
        if missing > 0 {
            log::warn!("[surface] {} of {} wire paths missing", missing, wire_count);
        }

        let mut markers = Vec::with_capacity(wire_count);
        for _ in 0..wire_count {
            let dot = dom::create_svg_element(document, "circle")?;
            _ = dot.set_attribute("r", &ANCHOR_MARKER_RADIUS.to_string());
            _ = dot.set_attribute("fill", ANCHOR_MARKER_FILL);
            dom::set_style(&dot, "opacity", "0");
            dom::set_style(&dot, "transition", MARKER_FADE);
            _ = svg.append_child(&dot);
            markers.push(dot);
        }

        let cursor = document.query_selector(CURSOR_DOT_SELECTOR).ok().flatten();
        let cursor_shown = cursor
            .as_ref()
            .is_some_and(|c| c.class_list().contains(VISIBLE_CLASS));
        Ok(Self {
            svg,
            paths,
            markers,
            cursor,
            body: document.body(),
            cursor_shown,
        })
    }

    #[inline]
    pub fn svg(&self) -> &web::Element {
        &self.svg
    }

    /// Fade the wire layer in and darken the hooked words.
    pub fn reveal(&self, document: &web::Document) {
        dom::set_class(&self.svg, VISIBLE_CLASS, true);
        for m in &self.markers {
            dom::set_style(m, "opacity", "1");
        }
        if let Ok(words) = document.query_selector_all(HERO_WORD_SELECTOR) {
            for i in 0..words.length() {
                if let Some(el) = words.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    dom::set_class(&el, HOOKED_CLASS, true);
                }
            }
        }
    }

    pub fn draw(&self, index: usize, frame: &CableFrame) {
        if let Some(m) = self.markers.get(index) {
            _ = m.set_attribute("cx", &frame.anchor.x.to_string());
            _ = m.set_attribute("cy", &frame.anchor.y.to_string());
        }
        let Some(Some(path)) = self.paths.get(index) else {
            return;
        };
        _ = path.set_attribute("d", &frame.path.to_string());
        dom::set_style(path, "opacity", &frame.opacity.to_string());
        dom::set_style(path, "stroke", &frame.color.to_string());
    }

    /// Mirror the group attachment state onto page chrome.
    pub fn set_detached(&self, detached: bool) {
        if let Some(body) = &self.body {
            dom::set_class(body, SCROLLED_CLASS, detached);
        }
    }

    pub fn apply_transition(&self, t: Transition) {
        self.set_detached(matches!(t, Transition::Detached));
    }

    pub fn update_cursor(&mut self, pointer: &PointerState, visible: bool) {
        let Some(cursor) = &self.cursor else {
            return;
        };
        if visible != self.cursor_shown {
            dom::set_class(cursor, VISIBLE_CLASS, visible);
            self.cursor_shown = visible;
        }
        if visible {
            dom::place_at(cursor, pointer.pos());
        }
    }
}
