// Host-side tests for anchor placement and resize math.
// The web crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use glam::Vec2;
use layout::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn glyph_anchor_sits_low_and_right_inside_the_glyph() {
    let glyph = Rect {
        left: 100.0,
        top: 50.0,
        width: 20.0,
        height: 40.0,
    };
    // right 120 - 0.38*20, bottom 90 - 0.18*40
    assert!(approx(glyph_anchor(glyph), Vec2::new(112.4, 82.8)));
}

#[test]
fn box_anchor_uses_wider_insets() {
    let word = Rect {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 80.0,
    };
    assert!(approx(box_anchor(word), Vec2::new(160.0, 60.0)));
}

#[test]
fn rest_length_tracks_width_up_to_cap() {
    assert_eq!(rest_length_for_width(1920.0, 150.0), 150.0);
    assert_eq!(rest_length_for_width(400.0, 150.0), 100.0);
    assert_eq!(rest_length_for_width(0.0, 150.0), 1.0);
}

#[test]
fn rect_edges() {
    let r = Rect {
        left: 3.0,
        top: 4.0,
        width: 10.0,
        height: 20.0,
    };
    assert_eq!(r.right(), 13.0);
    assert_eq!(r.bottom(), 24.0);
}
