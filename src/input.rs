use glam::Vec2;

/// Shared pointer snapshot written by event handlers, read by the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerState {
    /// Untracked pointer parked at the viewport centre.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            x: width * 0.5,
            y: height * 0.5,
            active: false,
        }
    }

    /// Mouse move/over or the first touch point of a touch start/move.
    #[inline]
    pub fn track(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
            self.active = true;
        }
    }

    /// Touch ended: keep the last coordinates so cables do not jump.
    #[inline]
    pub fn release(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Whether the pointer indicator should be shown.
#[inline]
pub fn cursor_visible(pointer: &PointerState, detached: bool) -> bool {
    pointer.active && !detached
}
