// Host-side tests for the headless preview output.
// The preview lives in a binary crate, so the module is included directly.

#![allow(dead_code)]
mod preview {
    include!("../src/preview.rs");
}

use preview::*;
use wire_core::*;

fn count(svg: &str, tag: &str) -> usize {
    svg.matches(tag).count()
}

fn sim() -> Simulation {
    Simulation::new(WireConfig::default(), WIRE_COUNT).expect("default config")
}

#[test]
fn desktop_preview_draws_every_cable_and_marker() {
    let vp = Viewport::new(1280.0, 720.0);
    let mut sim = sim();
    let cables = simulate(&mut sim, vp, 30, None);
    let svg = render_svg(vp, &cables);
    assert_eq!(count(&svg, "<path"), WIRE_COUNT);
    assert_eq!(count(&svg, "<circle"), WIRE_COUNT);
    assert_eq!(sim.frame_counter(), 30);
    assert!(svg.contains(r#"opacity="1""#));
}

#[test]
fn compact_preview_still_renders_the_seeded_cables() {
    let vp = Viewport::new(600.0, 900.0);
    let mut sim = sim();
    let cables = simulate(&mut sim, vp, 5, None);
    assert_eq!(sim.frame_counter(), 0);
    assert!(sim.is_detached());

    let svg = render_svg(vp, &cables);
    assert_eq!(count(&svg, "<path"), WIRE_COUNT);
    assert_eq!(count(&svg, "<circle"), WIRE_COUNT);
    assert!(svg.contains(r#"opacity="0.3""#));
    for (cable, anchor) in cables.iter().zip(heading_anchors(vp)) {
        assert_eq!(cable.as_ref().map(|c| c.anchor), Some(anchor));
    }
}

#[test]
fn scrolled_preview_lets_the_cables_drop() {
    let vp = Viewport::new(1280.0, 720.0);
    let mut sim = sim();
    let cables = simulate(&mut sim, vp, 60, Some(20));
    assert!(sim.is_detached());
    assert!(cables.iter().flatten().all(|c| c.opacity < 1.0));
}
