#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wire_core::{FrameInput, PointerSnapshot, Simulation, WireConfig, WIRE_COUNT};
use web_sys as web;

mod anchors;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod surface;

use constants::WIRE_START_DELAY_MS;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wire-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_simulation(svg: &web::Element) -> anyhow::Result<Simulation> {
    let cfg = dom::config_from_attributes(svg, WireConfig::default());
    Simulation::new(cfg, WIRE_COUNT)
        .or_else(|e| {
            log::warn!("[config] {}; falling back to defaults", e);
            Simulation::new(WireConfig::default(), WIRE_COUNT)
        })
        .map_err(Into::into)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let surface = surface::SvgSurface::new(&document, WIRE_COUNT)?;
    let anchors = anchors::DomAnchors::new(&document)?;
    let sim = Rc::new(RefCell::new(build_simulation(surface.svg())?));
    let max_rest = sim.borrow().config().rest_length;

    // Pointer tracking starts right away so the first frame already knows where it is
    let vp = dom::viewport(&window);
    let pointer = Rc::new(RefCell::new(input::PointerState::centered(vp.width, vp.height)));
    events::wire_pointer_handlers(&window, pointer.clone());
    events::wire_resize(&window, sim.clone(), max_rest);
    if let Err(e) = sim
        .borrow_mut()
        .set_rest_length(layout::rest_length_for_width(vp.width, max_rest))
    {
        log::warn!("[config] {}", e);
    }

    dom::sleep_ms(WIRE_START_DELAY_MS).await;

    let mut surface = surface;
    {
        let p = *pointer.borrow();
        let anchor_points = anchors.read();
        let input = FrameInput {
            pointer: PointerSnapshot {
                pos: p.pos(),
                active: p.active,
            },
            scroll_offset: dom::scroll_offset(&window),
            viewport: dom::viewport(&window),
            anchors: &anchor_points,
        };
        let mut s = sim.borrow_mut();
        s.initialize(&input);
        surface.set_detached(s.is_detached());
        surface.update_cursor(&p, input::cursor_visible(&p, s.is_detached()));
    }
    surface.reveal(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        sim,
        pointer,
        anchors,
        surface,
        busy: Duration::ZERO,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
