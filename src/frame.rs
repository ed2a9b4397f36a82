use crate::anchors::DomAnchors;
use crate::constants::FRAME_STATS_EVERY;
use crate::dom;
use crate::input::{self, PointerState};
use crate::surface::SvgSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wire_core::{FrameInput, PointerSnapshot, Simulation, StepStatus};
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub sim: Rc<RefCell<Simulation>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub anchors: DomAnchors,
    pub surface: SvgSurface,

    pub busy: Duration,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::viewport(&self.window);
        let compact_max = self.sim.borrow().config().compact_max_width;
        if viewport.is_compact(compact_max) {
            // keep ticking for a later resize, but leave layout and physics alone
            return;
        }
        let started = Instant::now();

        let pointer = *self.pointer.borrow();
        let anchors = self.anchors.read();
        let input = FrameInput {
            pointer: PointerSnapshot {
                pos: pointer.pos(),
                active: pointer.active,
            },
            scroll_offset: dom::scroll_offset(&self.window),
            viewport,
            anchors: &anchors,
        };
        let (out, detached) = {
            let mut sim = self.sim.borrow_mut();
            let out = sim.step(&input);
            (out, sim.is_detached())
        };
        if out.status != StepStatus::Advanced {
            return;
        }

        if let Some(t) = out.transition {
            self.surface.apply_transition(t);
        }
        self.surface
            .update_cursor(&pointer, input::cursor_visible(&pointer, detached));
        for (i, cable) in out.cables.iter().enumerate() {
            if let Some(cable) = cable {
                self.surface.draw(i, cable);
            }
        }

        self.busy += started.elapsed();
        self.frames += 1;
        if self.frames % FRAME_STATS_EVERY == 0 {
            log::debug!(
                "[frame] avg {:.3} ms over {} frames",
                self.busy.as_secs_f64() * 1000.0 / FRAME_STATS_EVERY as f64,
                FRAME_STATS_EVERY
            );
            self.busy = Duration::ZERO;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
