// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use wire_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_within_reasonable_bounds() {
    assert!(GRAVITY > 0.0);
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(SOLVER_ITERATIONS > 0);
    assert!(NODE_COUNT >= 3);
    assert!(REST_LENGTH > 0.0);
    assert!(WIRE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn attachment_zones_are_ordered() {
    // the snap-back zone must be reachable while scrolled past the offset
    assert!(REATTACH_DISTANCE > SCROLL_DETACH_OFFSET);
    assert!(COMPACT_VIEWPORT_MAX_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_and_opacity_relationships() {
    for i in 0..3 {
        assert!(TAUT_RGB[i] <= RELAXED_RGB[i], "taut channel {i} should be darker");
    }
    assert!(DETACHED_OPACITY < ATTACHED_OPACITY);
    assert!(TENSION_SLACK_RATIO < 1.0 && TENSION_RANGE_RATIO > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn anchor_insets_stay_inside_the_box() {
    for v in [
        GLYPH_ANCHOR_INSET_X,
        GLYPH_ANCHOR_INSET_Y,
        BOX_ANCHOR_INSET_X,
        BOX_ANCHOR_INSET_Y,
        REST_LENGTH_VIEWPORT_RATIO,
    ] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(WIRE_START_DELAY_MS > 0);
    assert!(FRAME_STATS_EVERY > 0);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = WireConfig::default();
    assert_eq!(cfg.node_count, NODE_COUNT);
    assert_eq!(cfg.iterations, SOLVER_ITERATIONS);
    assert_eq!(cfg.validate(), Ok(()));
}
