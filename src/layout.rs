use crate::constants::*;
use glam::Vec2;

/// Axis-aligned client rect, decoupled from `web_sys::DomRect` so the
/// anchor math can run on the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Hook point inside the last glyph of a word, near its lower right.
#[inline]
pub fn glyph_anchor(glyph: Rect) -> Vec2 {
    Vec2::new(
        glyph.right() - glyph.width * GLYPH_ANCHOR_INSET_X,
        glyph.bottom() - glyph.height * GLYPH_ANCHOR_INSET_Y,
    )
}

/// Hook point for a word without measurable text.
#[inline]
pub fn box_anchor(element: Rect) -> Vec2 {
    Vec2::new(
        element.right() - element.width * BOX_ANCHOR_INSET_X,
        element.bottom() - element.height * BOX_ANCHOR_INSET_Y,
    )
}

/// Rest length for a viewport width, never longer than `max_rest`.
#[inline]
pub fn rest_length_for_width(width: f32, max_rest: f32) -> f32 {
    (width * REST_LENGTH_VIEWPORT_RATIO).min(max_rest).max(1.0)
}
