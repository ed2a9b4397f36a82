//! Per-frame input snapshot supplied by the front end.
//!
//! These types avoid platform APIs. The web frontend fills them from DOM
//! events and layout; the native preview scripts them.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Phone-class viewport. Cables never follow the pointer here.
    #[inline]
    pub fn is_compact(&self, max_width: f32) -> bool {
        self.width <= max_width
    }
}

/// Latest pointer (mouse or first touch) position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    pub pos: Vec2,
    /// False until the first pointer event and again after a touch ends.
    pub active: bool,
}

/// Everything one simulation step reads from the outside world.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub pointer: PointerSnapshot,
    pub scroll_offset: f32,
    pub viewport: Viewport,
    /// One target per cable, refreshed by the caller for this frame.
    pub anchors: &'a [Vec2],
}
